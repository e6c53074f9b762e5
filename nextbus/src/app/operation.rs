use crate::feed::{FeedCommand, FeedError, FeedResponse, NextbusClient};
use clap::Subcommand;

/// Toronto Transit Commission
pub const DEFAULT_AGENCY: &str = "ttc";
/// 510 Spadina
pub const DEFAULT_ROUTE: &str = "510";
/// Spadina Ave At King St
pub const DEFAULT_STOP: &str = "14339";

#[derive(Debug, Clone, Default, Subcommand)]
pub enum NextbusOperation {
    /// list the agencies served by the feed
    #[default]
    Agencies,
    /// list the routes of an agency
    Routes {
        /// agency tag
        #[arg(long, default_value_t = String::from(DEFAULT_AGENCY))]
        agency: String,
    },
    /// show the stops, directions and paths of a route
    Stops {
        /// agency tag
        #[arg(long, default_value_t = String::from(DEFAULT_AGENCY))]
        agency: String,
        /// route tag
        #[arg(long, default_value_t = String::from(DEFAULT_ROUTE))]
        route: String,
    },
    /// show arrival predictions for a stop on a route
    Predictions {
        /// agency tag
        #[arg(long, default_value_t = String::from(DEFAULT_AGENCY))]
        agency: String,
        /// route tag
        #[arg(long, default_value_t = String::from(DEFAULT_ROUTE))]
        route: String,
        /// stop tag
        #[arg(long, default_value_t = String::from(DEFAULT_STOP))]
        stop: String,
    },
    /// show the timetables of a route
    Schedule {
        /// agency tag
        #[arg(long, default_value_t = String::from(DEFAULT_AGENCY))]
        agency: String,
        /// route tag
        #[arg(long, default_value_t = String::from(DEFAULT_ROUTE))]
        route: String,
    },
    /// show vehicle positions on a route
    Locations {
        /// agency tag
        #[arg(long, default_value_t = String::from(DEFAULT_AGENCY))]
        agency: String,
        /// route tag
        #[arg(long, default_value_t = String::from(DEFAULT_ROUTE))]
        route: String,
        /// unix timestamp to report positions since. defaults to now.
        #[arg(long)]
        since: Option<i64>,
    },
}

impl NextbusOperation {
    pub fn command(&self) -> FeedCommand {
        match self {
            NextbusOperation::Agencies => FeedCommand::AgencyList,
            NextbusOperation::Routes { .. } => FeedCommand::RouteList,
            NextbusOperation::Stops { .. } => FeedCommand::RouteConfig,
            NextbusOperation::Predictions { .. } => FeedCommand::Predictions,
            NextbusOperation::Schedule { .. } => FeedCommand::Schedule,
            NextbusOperation::Locations { .. } => FeedCommand::VehicleLocations,
        }
    }

    pub fn run(&self, client: &NextbusClient) -> Result<FeedResponse, FeedError> {
        log::info!("running {} against {}", self.command(), client.endpoint());
        match self {
            NextbusOperation::Agencies => client.agency_list().map(FeedResponse::AgencyList),
            NextbusOperation::Routes { agency } => {
                client.route_list(agency).map(FeedResponse::RouteList)
            }
            NextbusOperation::Stops { agency, route } => client
                .route_config(agency, route)
                .map(FeedResponse::RouteConfig),
            NextbusOperation::Predictions {
                agency,
                route,
                stop,
            } => client
                .predictions(agency, route, stop)
                .map(FeedResponse::Predictions),
            NextbusOperation::Schedule { agency, route } => {
                client.schedule(agency, route).map(FeedResponse::Schedule)
            }
            NextbusOperation::Locations {
                agency,
                route,
                since,
            } => {
                let since = since.unwrap_or_else(|| chrono::Utc::now().timestamp());
                client
                    .vehicle_locations(agency, route, since)
                    .map(FeedResponse::VehicleLocations)
            }
        }
    }
}
