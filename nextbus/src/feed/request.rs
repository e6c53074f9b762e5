use super::{FeedCommand, FeedEndpoint};
use itertools::Itertools;
use reqwest::Url;
use std::fmt::Display;

/// query key for the agency tag
pub const AGENCY_KEY: &str = "a";
/// query key for the route tag
pub const ROUTE_KEY: &str = "r";
/// query key for the stop tag
pub const STOP_KEY: &str = "s";
/// query key for the "since" timestamp of a vehicle locations poll
pub const TIME_KEY: &str = "t";

const COMMAND_KEY: &str = "command";

/// a single key/value pair appended to the query of a feed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedParameter {
    pub key: String,
    pub value: String,
}

impl FeedParameter {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for FeedParameter {
    fn from((key, value): (K, V)) -> Self {
        FeedParameter::new(key, value)
    }
}

/// a command along with its parameters. parameters keep insertion order and
/// may repeat a key, matching what the wire format allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    command: FeedCommand,
    parameters: Vec<FeedParameter>,
}

impl FeedRequest {
    pub fn new(command: FeedCommand) -> Self {
        Self {
            command,
            parameters: vec![],
        }
    }

    pub fn with_parameters<I, P>(command: FeedCommand, parameters: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FeedParameter>,
    {
        Self {
            command,
            parameters: parameters.into_iter().map(Into::into).collect(),
        }
    }

    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.push(FeedParameter::new(key, value));
        self
    }

    /// builds the absolute request URL: the endpoint with a query holding
    /// `command=<name>` followed by each parameter in order, form-urlencoded.
    pub fn make_url(&self, endpoint: &FeedEndpoint) -> Url {
        let mut url = endpoint.url().clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(COMMAND_KEY, self.command.as_str());
            for FeedParameter { key, value } in self.parameters.iter() {
                query.append_pair(key, value);
            }
        }
        url
    }
}

impl Display for FeedRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let params = self
            .parameters
            .iter()
            .map(|p| format!("{}={}", p.key, p.value))
            .join(", ");
        write!(f, "{} [{}]", self.command, params)
    }
}
