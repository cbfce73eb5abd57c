use cwikli_model::LookupError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://en.wiktionary.org/wiki/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Where pages come from and how long to wait for them.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Prefix the word is appended to, unescaped.
    pub base_url: String,
    pub timeout: Duration,
    /// Sent as the User-Agent header when set; no header is added otherwise.
    pub user_agent: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
        }
    }
}

/// Fetches dictionary pages, one request per word, no retries.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    base_url: String,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, LookupError> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let client = builder.build().map_err(|err| {
            tracing::error!(error = %err, "Failed to build HTTP client");
            LookupError::ConnectionFailure
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch the raw page for `word`.
    ///
    /// Any non-success status is reported as [`LookupError::NotFound`].
    pub async fn fetch(&self, word: &str) -> Result<Vec<u8>, LookupError> {
        let url = format!("{}{word}", self.base_url);
        tracing::debug!(url = %url, "Fetching page");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| classify(&err))?;

        let status = response.status();
        if !status.is_success() {
            tracing::info!(status = %status, url = %url, "Page not found");
            return Err(LookupError::NotFound);
        }

        let body = response.bytes().await.map_err(|err| classify(&err))?;
        tracing::debug!(bytes = body.len(), "Received HTML");

        Ok(body.to_vec())
    }
}

/// Map a transport failure onto the user-facing categories.
///
/// Timeouts win over connection errors, so a connect timeout reads as "too slow".
fn classify(err: &reqwest::Error) -> LookupError {
    let kind = if err.is_redirect() {
        LookupError::RedirectLoop
    } else if err.is_timeout() {
        LookupError::Timeout
    } else if err.is_builder() {
        // The word could not form a request URL; nothing on the site has that name.
        LookupError::NotFound
    } else {
        LookupError::ConnectionFailure
    };
    tracing::debug!(error = %err, kind = ?kind, "Request failed");
    kind
}
