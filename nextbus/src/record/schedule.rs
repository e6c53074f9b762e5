use super::feed_value;
use crate::util::time_utils;
use chrono::NaiveTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use std::fmt::Display;

/// placeholder the feed writes for a stop that a trip does not serve
const NOT_SERVED: &str = "--";

/// the timetable of a route for one direction and service class. the feed
/// returns one of these per (direction, service class) combination.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schedule {
    #[serde_as(as = "DefaultOnNull")]
    pub title: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub direction: String,
    #[serde_as(as = "DefaultOnNull")]
    pub service_class: String,
    #[serde_as(as = "DefaultOnNull")]
    pub schedule_class: String,
    #[serde(deserialize_with = "feed_value::record")]
    pub header: ScheduleHeader,
    #[serde(deserialize_with = "feed_value::list")]
    pub tr: Vec<ScheduleRow>,
}

impl Display for Schedule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stops = self.header.stop.iter().map(|s| &s.content).join(" | ");
        write!(
            f,
            "\n\t Title: {} - Tag: {}\n\t Direction: {} - Service: {} - Schedule: {}\n\t Stops: {}\n\t Trips: {}",
            self.title,
            self.tag,
            self.direction,
            self.service_class,
            self.schedule_class,
            stops,
            self.tr.len()
        )
    }
}

/// column headers of a timetable: the timed stops, in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleHeader {
    #[serde(deserialize_with = "feed_value::list")]
    pub stop: Vec<ScheduleStop>,
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleStop {
    #[serde_as(as = "DefaultOnNull")]
    pub content: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tag: String,
}

/// one trip (table row) of a timetable
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleRow {
    #[serde(rename = "blockID", alias = "blockId")]
    #[serde_as(as = "DefaultOnNull")]
    pub block_id: String,
    #[serde(deserialize_with = "feed_value::list")]
    pub stop: Vec<ScheduledStop>,
}

impl ScheduleRow {
    /// stops this trip actually serves
    pub fn served_stops(&self) -> impl Iterator<Item = &ScheduledStop> {
        self.stop.iter().filter(|s| s.is_served())
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduledStop {
    #[serde_as(as = "DefaultOnNull")]
    pub content: String,
    #[serde_as(as = "DefaultOnNull")]
    pub tag: String,
    #[serde_as(as = "DefaultOnNull")]
    pub epoch_time: String,
}

impl ScheduledStop {
    pub fn is_served(&self) -> bool {
        !self.content.is_empty() && self.content != NOT_SERVED
    }

    /// scheduled time of day. the feed's `epochTime` here counts
    /// milliseconds since midnight of the service day.
    pub fn time_of_day(&self) -> Option<NaiveTime> {
        if !self.is_served() {
            return None;
        }
        time_utils::parse_millis_since_midnight(&self.epoch_time)
    }
}
