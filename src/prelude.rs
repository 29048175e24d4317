//! Prelude module for convenient imports
//!
//! Import everything you need with: `use fixturegen::prelude::*;`

// Domain types
pub use crate::domain::{BoundingBox, Coord, DomainError, Point};

// Generator types
pub use crate::generator::{GeneratorConfig, GeneratorError, IdSequence, generate_points};

// SQL types
pub use crate::sql::{
    ATTRIBUTED_TABLE, BARE_TABLE, FIXTURE_FILE, FIXTURE_TABLES, SqlError, TableSpec,
    geometry_literal, value_tuple, write_fixture, write_fixture_file,
};

// App types
pub use crate::app::{AppError, CliApp};
