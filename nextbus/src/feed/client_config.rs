use super::{FeedEndpoint, FeedError, NextbusClient, NEXTBUS_API_URL};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// settings for connecting to the feed service
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct NextbusClientConfig {
    /// base URL that every command is sent to
    pub base_url: String,
    /// request timeout. when unset, the transport default applies.
    pub timeout_seconds: Option<f64>,
    pub user_agent: String,
    /// ignore proxies configured in the environment
    pub no_proxy: bool,
}

impl Default for NextbusClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(NEXTBUS_API_URL),
            timeout_seconds: None,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
            no_proxy: false,
        }
    }
}

impl NextbusClientConfig {
    /// the request timeout, which must be a positive number of seconds
    pub fn timeout(&self) -> Result<Option<Duration>, FeedError> {
        self.timeout_seconds
            .map(|secs| {
                if secs.is_nan() || secs <= 0.0 {
                    return Err(FeedError::ConfigurationError(format!(
                        "invalid timeout {secs}: must be greater than zero seconds"
                    )));
                }
                Duration::try_from_secs_f64(secs).map_err(|e| {
                    FeedError::ConfigurationError(format!("invalid timeout {secs}: {e}"))
                })
            })
            .transpose()
    }

    /// validates the endpoint and builds the blocking HTTP client
    pub fn build(&self) -> Result<NextbusClient, FeedError> {
        let endpoint = FeedEndpoint::try_from(self.base_url.as_str())?;
        let mut builder = Client::builder().user_agent(self.user_agent.as_str());
        if let Some(timeout) = self.timeout()? {
            builder = builder.timeout(timeout);
        }
        if self.no_proxy {
            builder = builder.no_proxy();
        }
        let http = builder.build().map_err(|e| {
            FeedError::ConfigurationError(format!("failure building HTTP client: {e}"))
        })?;
        log::debug!("feed client configured for {endpoint}");
        Ok(NextbusClient::new(http, endpoint))
    }
}

impl TryFrom<&String> for NextbusClientConfig {
    type Error = FeedError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                FeedError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                FeedError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                FeedError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                FeedError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(FeedError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
