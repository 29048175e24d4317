pub mod app;
pub mod domain;
pub mod generator;
pub mod prelude;
pub mod sql;
