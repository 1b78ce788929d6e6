//! Client configuration
//!
//! [`FeedConfig`] describes where and how the job board is reached: base URL,
//! request timeout, user agent, and whether listings are requested as
//! markdown. The endpoint is fixed by default and overridable for tests.

use crate::error::Result;
use std::time::Duration;
use url::Url;

/// Default job board endpoint
pub const DEFAULT_BASE_URL: &str = "https://jobs.github.com/positions.json";

/// Configuration for the job board client
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Job board endpoint URL
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Request listing bodies as markdown (`markdown=true`)
    pub markdown: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("jobfeed/{}", env!("CARGO_PKG_VERSION")),
            markdown: true,
        }
    }
}

impl FeedConfig {
    /// Create a new config builder
    pub fn builder() -> FeedConfigBuilder {
        FeedConfigBuilder::default()
    }

    /// Validate the configured endpoint, returning the parsed URL
    pub fn endpoint(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }
}

/// Builder for [`FeedConfig`]
#[derive(Default)]
pub struct FeedConfigBuilder {
    config: FeedConfig,
}

impl FeedConfigBuilder {
    /// Set the job board endpoint
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Request raw (non-markdown) listing bodies
    pub fn no_markdown(mut self) -> Self {
        self.config.markdown = false;
        self
    }

    /// Build the config
    pub fn build(self) -> FeedConfig {
        self.config
    }
}
