//! Input loading for the CLI: each source is a local path or an http(s) URL.

use log::info;
use psm_core::{GeoFeature, LoadError};
use psm_db::Database;
use std::time::Duration;

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Read one source to a string, over HTTP or from disk.
pub async fn read_source(client: &reqwest::Client, source: &str) -> Result<String, LoadError> {
    if !is_remote(source) {
        return tokio::fs::read_to_string(source)
            .await
            .map_err(|e| LoadError::fetch(source, e));
    }

    info!("Fetching {}", source);
    let response = client
        .get(source)
        .send()
        .await
        .map_err(|e| LoadError::fetch(source, e))?;
    if !response.status().is_success() {
        return Err(LoadError::fetch(
            source,
            format!("HTTP {}", response.status()),
        ));
    }
    response.text().await.map_err(|e| LoadError::fetch(source, e))
}

fn client() -> Result<reqwest::Client, LoadError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()
        .map_err(|e| LoadError::fetch("http client", e))
}

/// Load the observations into a fresh store.
pub async fn load_database(csv_source: &str) -> Result<Database, LoadError> {
    let text = read_source(&client()?, csv_source).await?;
    let db = Database::from_csv(&text)?;
    info!("Loaded observations from {}", csv_source);
    Ok(db)
}

/// Load both inputs concurrently. Either failing fails the whole load.
pub async fn load_all(
    csv_source: &str,
    geojson_source: &str,
) -> Result<(Database, Vec<GeoFeature>), LoadError> {
    let client = client()?;
    let (csv_text, geojson_text) = tokio::try_join!(
        read_source(&client, csv_source),
        read_source(&client, geojson_source)
    )?;
    let db = Database::from_csv(&csv_text)?;
    let features = GeoFeature::parse_collection(&geojson_text)?;
    info!(
        "Loaded observations from {} and {} features from {}",
        csv_source,
        features.len(),
        geojson_source
    );
    Ok((db, features))
}
