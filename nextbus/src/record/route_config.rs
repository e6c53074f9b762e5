use super::feed_value;
use crate::util::geo_utils;
use geo::{LineString, Point, Rect};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use std::fmt::Display;

/// full configuration of a single route: its stops, the directions that
/// visit those stops, and the paths used to draw the route.
///
/// the feed omits fields freely (paths are dropped for terse requests), so
/// every field falls back to its empty value when absent or null.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteConfig {
    #[serde_as(as = "DefaultOnNull")]
    pub tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub short_title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub color: String,
    #[serde_as(as = "DefaultOnNull")]
    pub opposite_color: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lat_min: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lat_max: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lon_min: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lon_max: String,
    #[serde(deserialize_with = "feed_value::list")]
    pub stop: Vec<Stop>,
    #[serde(deserialize_with = "feed_value::list")]
    pub direction: Vec<Direction>,
    #[serde(deserialize_with = "feed_value::list")]
    pub path: Vec<RoutePath>,
}

impl RouteConfig {
    /// bounding box of the route, if the feed supplied valid extents
    pub fn bounds(&self) -> Option<Rect<f64>> {
        geo_utils::parse_rect(&self.lon_min, &self.lat_min, &self.lon_max, &self.lat_max)
    }

    pub fn find_stop(&self, tag: &str) -> Option<&Stop> {
        self.stop.iter().find(|s| s.tag == tag)
    }

    /// stops of a direction resolved against the route's stop list, in
    /// direction order. stop references missing from the route are skipped.
    pub fn direction_stops<'a>(&'a self, direction: &'a Direction) -> Vec<&'a Stop> {
        direction
            .stop
            .iter()
            .filter_map(|s| self.find_stop(&s.tag))
            .collect()
    }
}

impl Display for RouteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n\t Title: {}\n\t Tag: {}\n\t Stops:\n\t {}\n\t Directions:\n\t {}",
            self.title,
            self.tag,
            self.stop.iter().join(""),
            self.direction.iter().join("")
        )
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Stop {
    #[serde_as(as = "DefaultOnNull")]
    pub tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub short_title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lat: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lon: String,
    #[serde_as(as = "DefaultOnNull")]
    pub stop_id: String,
}

impl Stop {
    pub fn point(&self) -> Option<Point<f64>> {
        geo_utils::parse_point(&self.lon, &self.lat)
    }
}

impl Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\n\t Title: {} - Tag: {}", self.title, self.tag)
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Direction {
    #[serde_as(as = "DefaultOnNull")]
    pub tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub branch: String,
    #[serde(rename = "useForUI")]
    #[serde_as(as = "DefaultOnNull")]
    pub use_for_ui: String,
    #[serde(deserialize_with = "feed_value::list")]
    pub stop: Vec<StopRef>,
}

impl Direction {
    pub fn is_used_for_ui(&self) -> bool {
        self.use_for_ui.eq_ignore_ascii_case("true")
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\n\t Title: {} - Tag: {}", self.title, self.tag)
    }
}

/// reference from a direction to a stop of the enclosing route
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopRef {
    #[serde_as(as = "DefaultOnNull")]
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutePath {
    #[serde(deserialize_with = "feed_value::list")]
    pub point: Vec<PathPoint>,
}

impl RoutePath {
    pub fn line_string(&self) -> Option<LineString<f64>> {
        geo_utils::parse_line_string(self.point.iter().map(|p| (p.lon.as_str(), p.lat.as_str())))
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathPoint {
    #[serde_as(as = "DefaultOnNull")]
    pub lat: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lon: String,
}
