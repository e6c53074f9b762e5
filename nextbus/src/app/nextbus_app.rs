use super::{NextbusAppError, NextbusOperation};
use crate::feed::{FeedResponse, NextbusClientConfig};
use clap::Parser;
use std::time::Duration;

/// command line client for the NextBus public transit feed
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct NextbusApp {
    /// feed command to run. lists agencies when omitted.
    #[command(subcommand)]
    pub op: Option<NextbusOperation>,
    /// path to a .toml or .json file with feed client settings
    #[arg(long, global = true)]
    pub config_file: Option<String>,
    /// overrides the feed base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// request timeout in human-readable time values: 500ms, 30s, 2m...
    #[arg(long, global = true, value_parser = parse_duration)]
    pub timeout: Option<Duration>,
    /// ignore proxies configured in the environment
    #[arg(long, global = true)]
    pub no_proxy: bool,
    /// print the decoded result as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl NextbusApp {
    /// client settings from the configuration file (if any) with command
    /// line overrides applied
    pub fn client_config(&self) -> Result<NextbusClientConfig, NextbusAppError> {
        let mut conf = match &self.config_file {
            None => NextbusClientConfig::default(),
            Some(f) => {
                log::info!("reading feed client configuration from {f}");
                NextbusClientConfig::try_from(f)?
            }
        };
        if let Some(base_url) = &self.base_url {
            conf.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            conf.timeout_seconds = Some(timeout.as_secs_f64());
        }
        if self.no_proxy {
            conf.no_proxy = true;
        }
        Ok(conf)
    }

    pub fn operation(&self) -> NextbusOperation {
        self.op.clone().unwrap_or_default()
    }

    /// runs the selected operation, returning the text to print
    pub fn run(&self) -> Result<String, NextbusAppError> {
        let client = self.client_config()?.build()?;
        let response = self.operation().run(&client)?;
        self.render(&response)
    }

    pub fn render(&self, response: &FeedResponse) -> Result<String, NextbusAppError> {
        if self.json {
            Ok(serde_json::to_string_pretty(response)?)
        } else {
            Ok(response.to_string())
        }
    }
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s).map_err(|e| format!("Invalid duration: {}", e))
}

#[cfg(test)]
mod test {
    use super::NextbusApp;
    use crate::app::{NextbusOperation, DEFAULT_AGENCY, DEFAULT_ROUTE, DEFAULT_STOP};
    use crate::feed::{FeedCommand, NEXTBUS_API_URL};
    use crate::util::test_server;
    use clap::Parser;
    use std::time::Duration;

    #[test]
    fn test_defaults_to_agency_list() {
        let app = NextbusApp::try_parse_from(["nextbus"]).expect("should parse");
        assert_eq!(app.operation().command(), FeedCommand::AgencyList);
        let conf = app.client_config().expect("default config");
        assert_eq!(conf.base_url, NEXTBUS_API_URL);
        assert_eq!(conf.timeout_seconds, None);
    }

    #[test]
    fn test_predictions_defaults() {
        let app = NextbusApp::try_parse_from(["nextbus", "predictions"]).expect("should parse");
        match app.operation() {
            NextbusOperation::Predictions {
                agency,
                route,
                stop,
            } => {
                assert_eq!(agency, DEFAULT_AGENCY);
                assert_eq!(route, DEFAULT_ROUTE);
                assert_eq!(stop, DEFAULT_STOP);
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }

    #[test]
    fn test_overrides() {
        let app = NextbusApp::try_parse_from([
            "nextbus",
            "locations",
            "--agency",
            "sf-muni",
            "--route",
            "N",
            "--since",
            "1700000000",
            "--timeout",
            "1500ms",
            "--base-url",
            "http://localhost:8080/feed",
        ])
        .expect("should parse");
        let conf = app.client_config().expect("config");
        assert_eq!(conf.base_url, "http://localhost:8080/feed");
        assert_eq!(conf.timeout().unwrap(), Some(Duration::from_millis(1500)));
        match app.operation() {
            NextbusOperation::Locations {
                agency,
                route,
                since,
            } => {
                assert_eq!(agency, "sf-muni");
                assert_eq!(route, "N");
                assert_eq!(since, Some(1_700_000_000));
            }
            other => panic!("unexpected operation {other:?}"),
        }
    }

    #[test]
    fn test_invalid_timeout() {
        let result = NextbusApp::try_parse_from(["nextbus", "--timeout", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_fails_before_sending() {
        let app = NextbusApp::try_parse_from(["nextbus", "routes", "--timeout", "0s"])
            .expect("should parse");
        let conf = app.client_config().expect("config");
        assert_eq!(conf.timeout_seconds, Some(0.0));
        assert!(app.run().is_err());
    }

    #[test]
    fn test_run_routes() {
        let server = test_server::serve_once(
            "200 OK",
            r#"{"route": [{"tag": "510", "title": "510-Spadina"}]}"#,
        );
        let app = NextbusApp::try_parse_from([
            "nextbus",
            "routes",
            "--base-url",
            server.base_url.as_str(),
            "--no-proxy",
        ])
        .expect("should parse");
        let output = app.run().expect("should run");
        assert_eq!(output, "Route List: \n\t Title: 510-Spadina - Tag: 510");
    }

    #[test]
    fn test_run_stops_as_json() {
        let server = test_server::serve_once(
            "200 OK",
            r#"{"route": {"tag": "510", "stop": [{"tag": "14339"}]}}"#,
        );
        let app = NextbusApp::try_parse_from([
            "nextbus",
            "stops",
            "--json",
            "--base-url",
            server.base_url.as_str(),
            "--no-proxy",
        ])
        .expect("should parse");
        let output = app.run().expect("should run");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value["command"], "routeConfig");
        assert_eq!(value["result"]["stop"][0]["tag"], "14339");
        assert_eq!(value["result"]["path"], serde_json::json!([]));
    }

    #[test]
    fn test_run_reports_failure() {
        let server = test_server::serve_once("500 Internal Server Error", "");
        let app = NextbusApp::try_parse_from([
            "nextbus",
            "schedule",
            "--base-url",
            server.base_url.as_str(),
            "--no-proxy",
        ])
        .expect("should parse");
        let result = app.run();
        assert!(result.is_err());
    }
}
