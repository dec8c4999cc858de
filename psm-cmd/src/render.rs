//! Static SVG export of the choropleth map.

use crate::source::load_all;
use log::info;
use psm_core::ZoomTransform;
use psm_data::ChoroplethMap;
use std::path::Path;

/// Build the map from both sources and write it as a standalone SVG.
pub async fn run_render(csv: &str, geojson: &str, out: &Path) -> anyhow::Result<()> {
    let (db, features) = load_all(csv, geojson).await?;
    let map = ChoroplethMap::from_database(&features, &db)?;
    let colored = map.shapes.iter().filter(|s| s.stability.is_some()).count();
    tokio::fs::write(out, map.to_svg(ZoomTransform::IDENTITY)).await?;
    info!(
        "Wrote {} ({} countries, {} with stability data)",
        out.display(),
        map.shapes.len(),
        colored
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::tests::{temp_file, CSV, GEOJSON};

    #[tokio::test]
    async fn writes_colored_svg() {
        let csv = temp_file("render.csv", CSV);
        let geo = temp_file("render.geojson", GEOJSON);
        let out = std::env::temp_dir().join(format!("psm-cmd-{}-map.svg", std::process::id()));

        run_render(csv.to_str().unwrap(), geo.to_str().unwrap(), &out)
            .await
            .unwrap();

        let svg = std::fs::read_to_string(&out).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"fill="rgb(121, 196, 93)""#));
        assert!(svg.contains("<title>France</title>"));
    }
}
