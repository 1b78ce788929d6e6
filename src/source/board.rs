//! HTTP job board source

use super::JobSource;
use crate::config::FeedConfig;
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::types::{Job, PageRequest};
use async_trait::async_trait;
use tracing::debug;

/// Job board reached over HTTP.
///
/// Every read is a GET against the configured endpoint with
/// `markdown=true`, `page=<n>` and the request's filter parameters.
pub struct JobBoard {
    client: HttpClient,
    config: FeedConfig,
}

impl JobBoard {
    /// Create a board client for the configured endpoint.
    ///
    /// Fails if the endpoint URL does not parse.
    pub fn new(config: FeedConfig) -> Result<Self> {
        config.endpoint()?;

        let client = HttpClient::with_config(
            HttpClientConfig::builder()
                .base_url(&config.base_url)
                .timeout(config.timeout)
                .user_agent(&config.user_agent)
                .build(),
        );

        Ok(Self { client, config })
    }

    /// The configuration this board was built with
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    fn request_config(&self, request: &PageRequest) -> RequestConfig {
        let mut config = RequestConfig::new().query("page", request.page().to_string());
        if self.config.markdown {
            config = config.query("markdown", "true");
        }
        for (key, value) in request.params() {
            config = config.query(key, value);
        }
        config
    }
}

#[async_trait]
impl JobSource for JobBoard {
    async fn page(&self, request: &PageRequest) -> Result<Vec<Job>> {
        debug!(page = request.page(), "fetching job listings");
        let jobs: Vec<Job> = self
            .client
            .get_json_with_config("", self.request_config(request))
            .await?;
        debug!(page = request.page(), count = jobs.len(), "page fetched");
        Ok(jobs)
    }
}

impl std::fmt::Debug for JobBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JobBoard")
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}
