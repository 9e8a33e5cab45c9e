use log::{error, info};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::error::Error;
use std::fmt;

use crate::config::{AppConfig, ConfigError};

const PROJECTS_PATH: &str = "/api/v2/projects";

#[derive(Debug)]
pub enum ProxyError {
    MissingCredentials(&'static str),
    HttpError(reqwest::Error),
    UpstreamError(u16, String),
    ConfigError(ConfigError),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::MissingCredentials(var) => write!(f, "{} is not set", var),
            ProxyError::HttpError(err) => write!(f, "HTTP error: {}", err),
            ProxyError::UpstreamError(status, body) => {
                write!(f, "Upstream returned {}: {}", status, body)
            }
            ProxyError::ConfigError(err) => write!(f, "{}", err),
        }
    }
}

impl Error for ProxyError {}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::HttpError(err)
    }
}

impl From<ConfigError> for ProxyError {
    fn from(err: ConfigError) -> Self {
        ProxyError::ConfigError(err)
    }
}

/// Server-side relay to the JamAI project API. The token never leaves the
/// server.
pub struct JamaiProxy {
    client: Client,
    endpoint: url::Url,
    project_id: Option<String>,
    api_pat: Option<String>,
}

impl JamaiProxy {
    pub fn new(config: &AppConfig) -> Result<Self, ProxyError> {
        let client = Client::builder().timeout(config.http_timeout).build()?;
        Ok(Self {
            client,
            endpoint: config.jamai_endpoint(PROJECTS_PATH)?,
            project_id: config.jamai_project_id.clone(),
            api_pat: config.jamai_api_pat.clone(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.project_id.is_some() && self.api_pat.is_some()
    }

    pub async fn fetch_project(&self) -> Result<serde_json::Value, ProxyError> {
        let project_id = self
            .project_id
            .as_deref()
            .ok_or(ProxyError::MissingCredentials("JAMAI_PROJECT_ID"))?;
        let api_pat = self
            .api_pat
            .as_deref()
            .ok_or(ProxyError::MissingCredentials("JAMAI_API_PAT"))?;

        info!("Proxying JamAI project request for {}", project_id);
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("project_id", project_id)])
            .header(AUTHORIZATION, format!("Bearer {}", api_pat))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("JamAI upstream error {}: {}", status, body);
            return Err(ProxyError::UpstreamError(status.as_u16(), body));
        }

        Ok(response.json().await?)
    }
}
