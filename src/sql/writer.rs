use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::info;

use super::error::SqlError;
use super::format::value_tuple;
use super::schema::{FIXTURE_TABLES, TableSpec};
use crate::domain::Point;

/// Default output file, written to the current working directory
pub const FIXTURE_FILE: &str = "fixtures.sql";

/// Render one comment + CREATE TABLE + INSERT section
fn render_section(table: &TableSpec, tuples: &str) -> String {
    format!(
        "{}\n{}\nINSERT INTO {} VALUES\n{};\n",
        table.comment,
        table.create_table(),
        table.name,
        tuples
    )
}

/// Write both fixture sections to `writer`
///
/// The value tuples are rendered once and shared by both tables; the
/// attribute-bearing table receives the same id + geometry rows as the bare
/// one.
pub async fn write_fixture<W>(writer: &mut W, points: &[Point]) -> Result<(), SqlError>
where
    W: AsyncWrite + Unpin,
{
    let tuples = points
        .iter()
        .map(value_tuple)
        .collect::<Vec<_>>()
        .join(",\n");

    for table in &FIXTURE_TABLES {
        writer
            .write_all(render_section(table, &tuples).as_bytes())
            .await?;
    }
    writer.flush().await?;
    Ok(())
}

/// Create the fixture file (truncating an existing one) and write both
/// sections to it
pub async fn write_fixture_file<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<(), SqlError> {
    let file = File::create(path.as_ref()).await?;
    let mut writer = BufWriter::new(file);
    write_fixture(&mut writer, points).await?;

    info!(
        path = %path.as_ref().display(),
        points = points.len(),
        "wrote fixture file"
    );
    Ok(())
}
