use super::FeedError;
use reqwest::Url;
use std::fmt::Display;

/// public JSON feed of the NextBus web service
pub const NEXTBUS_API_URL: &str = "http://webservices.nextbus.com/service/publicJSONFeed";

/// a validated base URL that every feed request is built against. the
/// endpoint is checked once here so that building request URLs from it
/// cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEndpoint(Url);

impl FeedEndpoint {
    pub fn url(&self) -> &Url {
        &self.0
    }
}

impl TryFrom<&str> for FeedEndpoint {
    type Error = FeedError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let url = Url::parse(value).map_err(|e| {
            FeedError::ConfigurationError(format!("endpoint '{value}' is not a valid URL: {e}"))
        })?;
        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(FeedError::ConfigurationError(format!(
                    "endpoint '{value}' has unsupported scheme '{other}'"
                )))
            }
        }
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(FeedError::ConfigurationError(format!(
                "endpoint '{value}' has no host"
            )));
        }
        if url.query().is_some() || url.fragment().is_some() {
            return Err(FeedError::ConfigurationError(format!(
                "endpoint '{value}' must not carry a query or fragment"
            )));
        }
        Ok(FeedEndpoint(url))
    }
}

impl Display for FeedEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
