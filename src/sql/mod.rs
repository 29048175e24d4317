pub mod error;
pub mod format;
pub mod schema;
pub mod writer;

// Re-export commonly used types
pub use error::SqlError;
pub use format::{SRID_WEB_MERCATOR, SRID_WGS84, geometry_literal, value_tuple};
pub use schema::{ATTRIBUTED_TABLE, BARE_TABLE, Column, FIXTURE_TABLES, TableSpec};
pub use writer::{FIXTURE_FILE, write_fixture, write_fixture_file};
