//! static pairing of each feed command with the shape of its response body.
//!
//! every command has exactly one envelope type here. the envelope mirrors the
//! top-level JSON object the feed returns for that command and knows how to
//! unwrap it into the record handed back to callers. adding a command means
//! adding a [`FeedCommand`] variant, one envelope and one [`FeedShape`] impl.
use super::FeedCommand;
use crate::record::{
    feed_value, Agency, Predictions, Route, RouteConfig, Schedule, VehicleLocations,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// a response envelope bound at compile time to the command that produces it.
pub trait FeedShape: DeserializeOwned {
    /// the command whose response decodes into this shape
    const COMMAND: FeedCommand;

    /// the record returned to the caller once the envelope is unwrapped
    type Output;

    fn into_output(self) -> Self::Output;
}

/// `agencyList`: `{"agency": [...]}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AgencyListShape {
    #[serde(deserialize_with = "feed_value::list")]
    agency: Vec<Agency>,
}

impl FeedShape for AgencyListShape {
    const COMMAND: FeedCommand = FeedCommand::AgencyList;
    type Output = Vec<Agency>;

    fn into_output(self) -> Self::Output {
        self.agency
    }
}

/// `routeList`: `{"route": [...]}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouteListShape {
    #[serde(deserialize_with = "feed_value::list")]
    route: Vec<Route>,
}

impl FeedShape for RouteListShape {
    const COMMAND: FeedCommand = FeedCommand::RouteList;
    type Output = Vec<Route>;

    fn into_output(self) -> Self::Output {
        self.route
    }
}

/// `routeConfig`: `{"route": {...}}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouteConfigShape {
    #[serde(deserialize_with = "feed_value::record")]
    route: RouteConfig,
}

impl FeedShape for RouteConfigShape {
    const COMMAND: FeedCommand = FeedCommand::RouteConfig;
    type Output = RouteConfig;

    fn into_output(self) -> Self::Output {
        self.route
    }
}

/// `predictions`: `{"predictions": {...}}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PredictionsShape {
    #[serde(deserialize_with = "feed_value::record")]
    predictions: Predictions,
}

impl FeedShape for PredictionsShape {
    const COMMAND: FeedCommand = FeedCommand::Predictions;
    type Output = Predictions;

    fn into_output(self) -> Self::Output {
        self.predictions
    }
}

/// `schedule`: `{"route": [...]}`, one entry per direction and service class
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScheduleShape {
    #[serde(deserialize_with = "feed_value::list")]
    route: Vec<Schedule>,
}

impl FeedShape for ScheduleShape {
    const COMMAND: FeedCommand = FeedCommand::Schedule;
    type Output = Vec<Schedule>;

    fn into_output(self) -> Self::Output {
        self.route
    }
}

/// `vehicleLocations`: the record is the top-level object itself
#[derive(Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct VehicleLocationsShape(
    #[serde(deserialize_with = "feed_value::record")] VehicleLocations,
);

impl FeedShape for VehicleLocationsShape {
    const COMMAND: FeedCommand = FeedCommand::VehicleLocations;
    type Output = VehicleLocations;

    fn into_output(self) -> Self::Output {
        self.0
    }
}
