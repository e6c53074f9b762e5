use serde::Serialize;
use std::{fmt::Display, str::FromStr};

/// the operations supported by the feed endpoint. the wire name of each
/// command is sent as the `command` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedCommand {
    AgencyList,
    RouteList,
    RouteConfig,
    Predictions,
    Schedule,
    VehicleLocations,
}

impl FeedCommand {
    pub const ALL: [FeedCommand; 6] = [
        FeedCommand::AgencyList,
        FeedCommand::RouteList,
        FeedCommand::RouteConfig,
        FeedCommand::Predictions,
        FeedCommand::Schedule,
        FeedCommand::VehicleLocations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FeedCommand::AgencyList => "agencyList",
            FeedCommand::RouteList => "routeList",
            FeedCommand::RouteConfig => "routeConfig",
            FeedCommand::Predictions => "predictions",
            FeedCommand::Schedule => "schedule",
            FeedCommand::VehicleLocations => "vehicleLocations",
        }
    }
}

impl Display for FeedCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FeedCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeedCommand::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown feed command '{s}'"))
    }
}

#[cfg(test)]
mod test {
    use super::FeedCommand;
    use std::str::FromStr;

    #[test]
    fn test_wire_names_parse_back() {
        for command in FeedCommand::ALL {
            let parsed = FeedCommand::from_str(&command.to_string()).expect("should parse");
            assert_eq!(parsed, command);
        }
    }

    #[test]
    fn test_unknown_command() {
        let result = FeedCommand::from_str("messages");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let s = serde_json::to_string(&FeedCommand::VehicleLocations).unwrap();
        assert_eq!(s, "\"vehicleLocations\"");
    }
}
