use super::feed_value;
use crate::util::time_utils;
use chrono::{DateTime, Utc};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use std::fmt::Display;

/// arrival/departure predictions for one stop of one route
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Predictions {
    #[serde_as(as = "DefaultOnNull")]
    pub agency_title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub route_tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub route_title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub stop_title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub stop_tag: String,
    /// set by the feed in place of `direction` when nothing is predicted
    #[serde_as(as = "DefaultOnNull")]
    pub dir_title_because_no_predictions: String,
    #[serde(deserialize_with = "feed_value::list")]
    pub direction: Vec<PredictionDirection>,
}

impl Predictions {
    /// all predictions across directions, soonest first
    pub fn upcoming(&self) -> Vec<&Prediction> {
        self.direction
            .iter()
            .flat_map(|d| d.prediction.iter())
            .sorted_by_key(|p| p.seconds().unwrap_or(u64::MAX))
            .collect()
    }
}

impl Display for Predictions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n\t Route: {} - Tag: {}\n\t Stop: {} - Tag: {}\n\tDirections:\n\t {}",
            self.route_title,
            self.route_tag,
            self.stop_title,
            self.stop_tag,
            self.direction.iter().join("")
        )
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionDirection {
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde(deserialize_with = "feed_value::list")]
    pub prediction: Vec<Prediction>,
}

impl Display for PredictionDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\n\t {}{}", self.title, self.prediction.iter().join(""))
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Prediction {
    #[serde_as(as = "DefaultOnNull")]
    pub is_departure: String,
    #[serde_as(as = "DefaultOnNull")]
    pub minutes: String,
    #[serde_as(as = "DefaultOnNull")]
    pub seconds: String,
    #[serde_as(as = "DefaultOnNull")]
    pub trip_tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub vehicle: String,
    #[serde_as(as = "DefaultOnNull")]
    pub block: String,
    #[serde_as(as = "DefaultOnNull")]
    pub branch: String,
    #[serde_as(as = "DefaultOnNull")]
    pub dir_tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub epoch_time: String,
    #[serde_as(as = "DefaultOnNull")]
    pub affected_by_layover: String,
}

impl Prediction {
    pub fn is_departure(&self) -> bool {
        self.is_departure.eq_ignore_ascii_case("true")
    }

    pub fn minutes(&self) -> Option<u64> {
        self.minutes.trim().parse().ok()
    }

    pub fn seconds(&self) -> Option<u64> {
        self.seconds.trim().parse().ok()
    }

    pub fn epoch_time(&self) -> Option<DateTime<Utc>> {
        time_utils::parse_epoch_millis(&self.epoch_time)
    }
}

impl Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "\n\t Vehicle: {} - Block: {} - Branch: {} - Direction: {}\n\t Minutes: {} - Seconds: {}",
            self.vehicle, self.block, self.branch, self.dir_tag, self.minutes, self.seconds
        )
    }
}
