mod client;
mod client_config;
mod command;
mod endpoint;
mod feed_error;
mod feed_response;
mod feed_shape;
mod fetch;
mod request;

pub use client::NextbusClient;
pub use client_config::NextbusClientConfig;
pub use command::FeedCommand;
pub use endpoint::{FeedEndpoint, NEXTBUS_API_URL};
pub use feed_error::FeedError;
pub use feed_response::FeedResponse;
pub use feed_shape::{
    AgencyListShape, FeedShape, PredictionsShape, RouteConfigShape, RouteListShape,
    ScheduleShape, VehicleLocationsShape,
};
pub use fetch::{decode_body, fetch_shape};
pub use request::{FeedParameter, FeedRequest, AGENCY_KEY, ROUTE_KEY, STOP_KEY, TIME_KEY};
