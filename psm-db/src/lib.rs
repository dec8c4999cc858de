//! In-memory SQLite store for country stability and arms observations.
//!
//! The store is the indexed country -> years view over the loaded CSV rows.
//! It is loaded once at startup and only read afterwards; every renderer
//! receives a clone of the same handle instead of reaching for global state.
//!
//! # Usage
//!
//! ```rust
//! use psm_db::Database;
//!
//! let db = Database::from_csv(
//!     "Country,Year,StabilityEstimate,ArmsDeliveries\nFrance,2021,-0.5,75\nFrance,2020,1.2,50\n",
//! )
//! .unwrap();
//!
//! let france = db.query_country("France").unwrap();
//! assert_eq!(france[0].year, Some(2020));
//! assert_eq!(db.query_countries().unwrap(), vec!["France".to_string()]);
//! ```

pub mod schema;
mod loader;
mod queries;

use psm_core::LoadError;
use rusqlite::Connection;
use std::cell::RefCell;
use std::rc::Rc;

/// In-memory SQLite database of observation rows.
///
/// Cheaply cloneable (via `Rc`) for sharing across Dioxus components in a
/// single-threaded WASM environment.
#[derive(Clone, Debug)]
pub struct Database {
    conn: Rc<RefCell<Connection>>,
}

impl Database {
    /// Create an empty in-memory database with the schema applied.
    pub fn new() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
        })
    }

    /// Create a database and load the observations CSV into it.
    pub fn from_csv(csv_data: &str) -> Result<Self, LoadError> {
        let db = Self::new().map_err(|e| LoadError::Storage(e.to_string()))?;
        db.load_observations(csv_data)?;
        Ok(db)
    }
}

impl PartialEq for Database {
    /// Handles are equal when they share the same connection.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.conn, &other.conn)
    }
}
