use super::{
    fetch, AgencyListShape, FeedEndpoint, FeedError, FeedParameter, FeedRequest, FeedShape,
    PredictionsShape, RouteConfigShape, RouteListShape, ScheduleShape, VehicleLocationsShape,
    AGENCY_KEY, ROUTE_KEY, STOP_KEY, TIME_KEY,
};
use crate::record::{Agency, Predictions, Route, RouteConfig, Schedule, VehicleLocations};
use reqwest::blocking::Client;

/// blocking client for the feed service, exposing one operation per
/// command. every call issues a fresh request; nothing is cached.
#[derive(Debug, Clone)]
pub struct NextbusClient {
    http: Client,
    endpoint: FeedEndpoint,
}

impl NextbusClient {
    pub fn new(http: Client, endpoint: FeedEndpoint) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &FeedEndpoint {
        &self.endpoint
    }

    /// sends the command paired with shape `S` along with the given
    /// parameters and decodes the response into `S`'s record.
    pub fn fetch<S: FeedShape>(
        &self,
        parameters: Vec<FeedParameter>,
    ) -> Result<S::Output, FeedError> {
        let request = FeedRequest::with_parameters(S::COMMAND, parameters);
        log::debug!("sending feed request {request}");
        let url = request.make_url(&self.endpoint);
        fetch::fetch_shape::<S>(&self.http, &url)
    }

    pub fn agency_list(&self) -> Result<Vec<Agency>, FeedError> {
        self.fetch::<AgencyListShape>(vec![])
    }

    pub fn route_list(&self, agency: &str) -> Result<Vec<Route>, FeedError> {
        self.fetch::<RouteListShape>(vec![FeedParameter::new(AGENCY_KEY, agency)])
    }

    pub fn route_config(&self, agency: &str, route: &str) -> Result<RouteConfig, FeedError> {
        self.fetch::<RouteConfigShape>(vec![
            FeedParameter::new(AGENCY_KEY, agency),
            FeedParameter::new(ROUTE_KEY, route),
        ])
    }

    pub fn predictions(
        &self,
        agency: &str,
        route: &str,
        stop: &str,
    ) -> Result<Predictions, FeedError> {
        self.fetch::<PredictionsShape>(vec![
            FeedParameter::new(AGENCY_KEY, agency),
            FeedParameter::new(ROUTE_KEY, route),
            FeedParameter::new(STOP_KEY, stop),
        ])
    }

    pub fn schedule(&self, agency: &str, route: &str) -> Result<Vec<Schedule>, FeedError> {
        self.fetch::<ScheduleShape>(vec![
            FeedParameter::new(AGENCY_KEY, agency),
            FeedParameter::new(ROUTE_KEY, route),
        ])
    }

    /// vehicle positions reported after `since`, a unix timestamp.
    pub fn vehicle_locations(
        &self,
        agency: &str,
        route: &str,
        since: i64,
    ) -> Result<VehicleLocations, FeedError> {
        self.fetch::<VehicleLocationsShape>(vec![
            FeedParameter::new(AGENCY_KEY, agency),
            FeedParameter::new(ROUTE_KEY, route),
            FeedParameter::new(TIME_KEY, since.to_string()),
        ])
    }
}
