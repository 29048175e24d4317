/// A typed attribute column declared by a fixture table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: &'static str,
}

/// One fixture table: the id + geometry columns every table carries, plus
/// optional attribute columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub name: &'static str,
    pub comment: &'static str,
    pub attributes: &'static [Column],
}

impl TableSpec {
    /// Render the CREATE TABLE statement for this table
    pub fn create_table(&self) -> String {
        let mut statement = format!(
            "CREATE TABLE {} (cartodb_id integer, the_geom geometry, the_geom_webmercator geometry",
            self.name
        );
        for column in self.attributes {
            statement.push_str(&format!(", {} {}", column.name, column.sql_type));
        }
        statement.push_str(");");
        statement
    }
}

/// Points-only table: primary key and geometries, no attributes
pub const BARE_TABLE: TableSpec = TableSpec {
    name: "base_bare_t",
    comment: "-- bare table with no attribute columns",
    attributes: &[],
};

/// Attribute-bearing table
///
/// The four attribute columns are declared but the generated rows never
/// populate them; downstream overview tests load the fixture in exactly
/// this shape.
pub const ATTRIBUTED_TABLE: TableSpec = TableSpec {
    name: "base_t",
    comment: "-- table with attributes",
    attributes: &[
        Column {
            name: "number",
            sql_type: "double precision",
        },
        Column {
            name: "int_number",
            sql_type: "integer",
        },
        Column {
            name: "name",
            sql_type: "text",
        },
        Column {
            name: "start",
            sql_type: "date",
        },
    ],
};

/// The two tables every fixture file contains, in output order
pub const FIXTURE_TABLES: [TableSpec; 2] = [BARE_TABLE, ATTRIBUTED_TABLE];
