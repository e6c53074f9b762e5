use geo::{coord, Coord, LineString, Point, Rect};

/// parses a feed coordinate pair. the feed encodes coordinates as decimal
/// degree strings.
///
/// # Arguments
///
/// * `lon` - longitude string
/// * `lat` - latitude string
///
/// # Returns
///
/// * the coordinate, or None if either value is empty or not a finite number
pub fn parse_coord(lon: &str, lat: &str) -> Option<Coord<f64>> {
    let x = parse_finite(lon)?;
    let y = parse_finite(lat)?;
    Some(coord! { x: x, y: y })
}

pub fn parse_point(lon: &str, lat: &str) -> Option<Point<f64>> {
    parse_coord(lon, lat).map(Point::from)
}

/// builds a linestring from coordinate pairs, failing if any pair does not
/// parse or fewer than two coordinates are present.
pub fn parse_line_string<'a, I>(pairs: I) -> Option<LineString<f64>>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let coords = pairs
        .into_iter()
        .map(|(lon, lat)| parse_coord(lon, lat))
        .collect::<Option<Vec<_>>>()?;
    if coords.len() < 2 {
        return None;
    }
    Some(LineString::new(coords))
}

/// builds the bounding rectangle of a route from its min/max strings
pub fn parse_rect(lon_min: &str, lat_min: &str, lon_max: &str, lat_max: &str) -> Option<Rect<f64>> {
    let min = parse_coord(lon_min, lat_min)?;
    let max = parse_coord(lon_max, lat_max)?;
    Some(Rect::new(min, max))
}

fn parse_finite(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
