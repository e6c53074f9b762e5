mod agency;
pub(crate) mod feed_value;
mod predictions;
mod route;
mod route_config;
mod schedule;
mod vehicle_location;

pub use agency::Agency;
pub use predictions::{Prediction, PredictionDirection, Predictions};
pub use route::Route;
pub use route_config::{Direction, PathPoint, RouteConfig, RoutePath, Stop, StopRef};
pub use schedule::{Schedule, ScheduleHeader, ScheduleRow, ScheduleStop, ScheduledStop};
pub use vehicle_location::{LastTime, VehicleLocation, VehicleLocations};
