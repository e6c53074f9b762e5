use super::feed_value;
use crate::util::{geo_utils, time_utils};
use chrono::{DateTime, Utc};
use geo::Point;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use std::fmt::Display;

/// vehicle positions reported since the requested time. unlike the other
/// responses this one is not wrapped in a named top-level key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleLocations {
    #[serde(deserialize_with = "feed_value::record")]
    pub last_time: LastTime,
    #[serde(deserialize_with = "feed_value::list")]
    pub vehicle: Vec<VehicleLocation>,
}

impl Display for VehicleLocations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n\t Vehicles: {}\n\t Last Update: {}",
            self.vehicle.iter().join(""),
            self.last_time
        )
    }
}

/// timestamp to send as the `t` parameter of the next poll
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LastTime {
    #[serde_as(as = "DefaultOnNull")]
    pub time: String,
}

impl LastTime {
    pub fn time(&self) -> Option<DateTime<Utc>> {
        time_utils::parse_epoch_millis(&self.time)
    }
}

impl Display for LastTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.time() {
            Some(t) => write!(f, "{}", t.to_rfc3339()),
            None => write!(f, "{}", self.time),
        }
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VehicleLocation {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub route_tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub dir_tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub predictable: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lon: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lat: String,
    #[serde_as(as = "DefaultOnNull")]
    pub heading: String,
    #[serde_as(as = "DefaultOnNull")]
    pub secs_since_report: String,
    #[serde_as(as = "DefaultOnNull")]
    pub speed_km_hr: String,
}

impl VehicleLocation {
    pub fn point(&self) -> Option<Point<f64>> {
        geo_utils::parse_point(&self.lon, &self.lat)
    }

    pub fn is_predictable(&self) -> bool {
        self.predictable.eq_ignore_ascii_case("true")
    }

    /// heading in degrees clockwise from north. the feed reports negative
    /// headings when the direction is unknown.
    pub fn heading(&self) -> Option<f64> {
        self.heading
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|h| (0.0..360.0).contains(h))
    }

    pub fn secs_since_report(&self) -> Option<u64> {
        self.secs_since_report.trim().parse().ok()
    }
}

impl Display for VehicleLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n\t Vehicle ID: {} - Direction Tag: {}\n\t Route Tag: {} - Seconds Since: {}\n\t Lon: {} - Lat: {} - Heading: {}",
            self.id,
            self.dir_tag,
            self.route_tag,
            self.secs_since_report,
            self.lon,
            self.lat,
            self.heading
        )
    }
}

#[cfg(test)]
mod test {
    use super::VehicleLocations;

    #[test]
    fn test_vehicle_accessors() {
        let json = r#"{
            "lastTime": {"time": "1700000000000"},
            "vehicle": {"id": "4401", "routeTag": "510", "dirTag": "510_1_510", "predictable": "true",
                        "lon": "-79.3956", "lat": "43.6454", "heading": "-4", "secsSinceReport": "12"}
        }"#;
        let locations: VehicleLocations = serde_json::from_str(json).expect("should decode");
        assert_eq!(locations.vehicle.len(), 1);
        let vehicle = &locations.vehicle[0];
        assert!(vehicle.is_predictable());
        assert_eq!(vehicle.heading(), None);
        assert_eq!(vehicle.secs_since_report(), Some(12));
        assert_eq!(vehicle.point().map(|p| p.y()), Some(43.6454));
        assert_eq!(
            locations.last_time.time().map(|t| t.timestamp()),
            Some(1_700_000_000)
        );
        assert!(locations.to_string().contains("Vehicle ID: 4401"));
    }
}
