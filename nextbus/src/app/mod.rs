mod app_error;
mod nextbus_app;
mod operation;

pub use app_error::NextbusAppError;
pub use nextbus_app::NextbusApp;
pub use operation::{NextbusOperation, DEFAULT_AGENCY, DEFAULT_ROUTE, DEFAULT_STOP};
