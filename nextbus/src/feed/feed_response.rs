use super::FeedCommand;
use crate::record::{Agency, Predictions, Route, RouteConfig, Schedule, VehicleLocations};
use itertools::Itertools;
use serde::Serialize;
use std::fmt::Display;

/// the decoded result of any feed command, tagged by the command that
/// produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", content = "result", rename_all = "camelCase")]
pub enum FeedResponse {
    AgencyList(Vec<Agency>),
    RouteList(Vec<Route>),
    RouteConfig(RouteConfig),
    Predictions(Predictions),
    Schedule(Vec<Schedule>),
    VehicleLocations(VehicleLocations),
}

impl FeedResponse {
    pub fn command(&self) -> FeedCommand {
        match self {
            FeedResponse::AgencyList(_) => FeedCommand::AgencyList,
            FeedResponse::RouteList(_) => FeedCommand::RouteList,
            FeedResponse::RouteConfig(_) => FeedCommand::RouteConfig,
            FeedResponse::Predictions(_) => FeedCommand::Predictions,
            FeedResponse::Schedule(_) => FeedCommand::Schedule,
            FeedResponse::VehicleLocations(_) => FeedCommand::VehicleLocations,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FeedResponse::AgencyList(_) => "Agency List:",
            FeedResponse::RouteList(_) => "Route List:",
            FeedResponse::RouteConfig(_) => "Route Stops:",
            FeedResponse::Predictions(_) => "Predictions:",
            FeedResponse::Schedule(_) => "Schedule:",
            FeedResponse::VehicleLocations(_) => "Vehicle Locations:",
        }
    }
}

impl Display for FeedResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = self.label();
        match self {
            FeedResponse::AgencyList(agencies) => write!(f, "{label} {}", agencies.iter().join("")),
            FeedResponse::RouteList(routes) => write!(f, "{label} {}", routes.iter().join("")),
            FeedResponse::RouteConfig(route) => write!(f, "{label} {route}"),
            FeedResponse::Predictions(predictions) => write!(f, "{label} {predictions}"),
            FeedResponse::Schedule(schedules) => write!(f, "{label} {}", schedules.iter().join("")),
            FeedResponse::VehicleLocations(locations) => write!(f, "{label} {locations}"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::FeedResponse;
    use crate::feed::FeedCommand;
    use crate::record::Route;

    fn route_list() -> FeedResponse {
        FeedResponse::RouteList(vec![
            Route {
                tag: String::from("510"),
                title: String::from("510-Spadina"),
                ..Default::default()
            },
            Route {
                tag: String::from("504"),
                title: String::from("504-King"),
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_display() {
        let response = route_list();
        assert_eq!(response.command(), FeedCommand::RouteList);
        assert_eq!(
            response.to_string(),
            "Route List: \n\t Title: 510-Spadina - Tag: 510\n\t Title: 504-King - Tag: 504"
        );
    }

    #[test]
    fn test_json_is_tagged_by_command() {
        let value = serde_json::to_value(route_list()).unwrap();
        assert_eq!(value["command"], "routeList");
        assert_eq!(value["result"][1]["tag"], "504");
    }
}
