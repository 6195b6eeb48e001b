use crate::error::{PlannerError, Result};

const DEFAULT_PLANNER_API_URL: &str = "http://localhost:8080";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_SITE_ROOT: &str = "target/site";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the planner backend serving `/api/destinations` and `/api/trips`.
    pub planner_api_url: String,
    pub planner_api_token: Option<String>,
    pub request_timeout_secs: u64,
    pub bind_addr: String,
    pub site_root: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let planner_api_url = dotenvy::var("PLANNER_API_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_PLANNER_API_URL.to_string());

        if !planner_api_url.starts_with("http://") && !planner_api_url.starts_with("https://") {
            return Err(PlannerError::Config(format!(
                "PLANNER_API_URL must be an http(s) URL, got '{planner_api_url}'"
            )));
        }

        let planner_api_token = dotenvy::var("PLANNER_API_TOKEN")
            .ok()
            .filter(|s| !s.is_empty());

        let request_timeout_secs = dotenvy::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| PlannerError::Config("Invalid REQUEST_TIMEOUT_SECS".to_string()))?;

        let bind_addr =
            dotenvy::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let site_root =
            dotenvy::var("SITE_ROOT").unwrap_or_else(|_| DEFAULT_SITE_ROOT.to_string());

        Ok(Config {
            planner_api_url: planner_api_url.trim_end_matches('/').to_string(),
            planner_api_token,
            request_timeout_secs,
            bind_addr,
            site_root,
        })
    }
}
