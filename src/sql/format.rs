use crate::domain::Point;

/// WGS84 lon/lat, the SRID the raw coordinates are expressed in
pub const SRID_WGS84: u32 = 4326;

/// Web Mercator, the SRID the executing engine reprojects into
pub const SRID_WEB_MERCATOR: u32 = 3857;

/// EWKT point literal with a geometry cast,
/// e.g. `'SRID=4326;POINT(1.5 30.25)'::geometry`
pub fn geometry_literal(point: &Point) -> String {
    format!(
        "'SRID={};POINT({} {})'::geometry",
        SRID_WGS84, point.x, point.y
    )
}

/// One parenthesized VALUES tuple: id, raw geometry, and the reprojection
/// expression evaluated later by the engine executing the fixture
pub fn value_tuple(point: &Point) -> String {
    let geom = geometry_literal(point);
    format!(
        "({}, {}, ST_Transform({}, {}))",
        point.id, geom, geom, SRID_WEB_MERCATOR
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coord;

    fn sample_point() -> Point {
        Point::new(
            3,
            Coord::from_degrees(-9.87).unwrap(),
            Coord::from_degrees(35.123456).unwrap(),
        )
    }

    #[test]
    fn geometry_literal_is_ewkt_with_cast() {
        assert_eq!(
            geometry_literal(&sample_point()),
            "'SRID=4326;POINT(-9.87 35.123456)'::geometry"
        );
    }

    #[test]
    fn value_tuple_reuses_the_literal_for_reprojection() {
        assert_eq!(
            value_tuple(&sample_point()),
            "(3, 'SRID=4326;POINT(-9.87 35.123456)'::geometry, \
             ST_Transform('SRID=4326;POINT(-9.87 35.123456)'::geometry, 3857))"
        );
    }

    #[test]
    fn whole_number_coordinates_render_without_fraction() {
        let point = Point::new(
            1,
            Coord::from_degrees(5.0).unwrap(),
            Coord::from_degrees(30.0).unwrap(),
        );
        assert_eq!(
            geometry_literal(&point),
            "'SRID=4326;POINT(5 30)'::geometry"
        );
    }
}
