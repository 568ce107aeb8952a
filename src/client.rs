//! Obtaining the solution for a new game
//!
//! Normally fetched from the word service; can also be chosen locally.

use crate::core::{Word, WordError};
use crate::server::DailyWordResponse;
use crate::server::daily::{daily_word, default_epoch};
use crate::wordlists::SOLUTIONS;
use chrono::Utc;
use rand::seq::IndexedRandom;
use std::time::Duration;

/// Default base URL of the word service
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Path of the daily word route
pub const DAILY_WORD_PATH: &str = "/api/daily-word";

/// Errors obtaining a solution
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("could not reach the word service: {0}")]
    Http(#[from] reqwest::Error),

    #[error("word service answered with status {0}")]
    Status(reqwest::StatusCode),

    #[error("word service sent an invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("could not start the fetch runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Word service client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL, e.g. `http://localhost:5000`
    pub base_url: String,

    /// Whole-request timeout
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SERVER_URL.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Full URL of the daily word route
    ///
    /// # Examples
    /// ```
    /// use wordle_daily::client::ClientConfig;
    ///
    /// let config = ClientConfig::new("http://localhost:5000/");
    /// assert_eq!(config.daily_word_url(), "http://localhost:5000/api/daily-word");
    /// ```
    #[must_use]
    pub fn daily_word_url(&self) -> String {
        format!("{}{DAILY_WORD_PATH}", self.base_url.trim_end_matches('/'))
    }
}

/// Fetch today's solution from the word service, upper-cased
///
/// # Errors
///
/// Fails on transport errors, non-success statuses, or a malformed word.
pub async fn fetch_daily_word(config: &ClientConfig) -> Result<Word, FetchError> {
    let url = config.daily_word_url();
    tracing::debug!(%url, "fetching daily word");

    let client = reqwest::Client::builder().timeout(config.timeout).build()?;
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(%url, %status, "word service error");
        return Err(FetchError::Status(status));
    }

    let body: DailyWordResponse = response.json().await?;
    Ok(Word::new(body.word)?)
}

/// Where a new game gets its solution from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolutionSource {
    /// Ask the word service
    Server(ClientConfig),
    /// Today's word, chosen locally with the service's rule
    Offline,
    /// A random solution
    Practice,
}

impl SolutionSource {
    /// Resolve the solution, blocking the calling thread
    ///
    /// Must not be called from inside an async runtime.
    ///
    /// # Errors
    ///
    /// See [`fetch_daily_word`]; the local sources only fail on a malformed list entry.
    pub fn resolve(&self) -> Result<Word, FetchError> {
        match self {
            Self::Server(config) => {
                let runtime = tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()?;
                runtime.block_on(fetch_daily_word(config))
            }
            Self::Offline => {
                let today = Utc::now().date_naive();
                Ok(Word::new(daily_word(today, default_epoch(), SOLUTIONS))?)
            }
            Self::Practice => {
                let word = SOLUTIONS
                    .choose(&mut rand::rng())
                    .copied()
                    .unwrap_or(crate::server::daily::FALLBACK_WORD);
                Ok(Word::new(word)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{AppState, ServerConfig, create_router};
    use chrono::NaiveDate;
    use tokio::net::TcpListener;

    fn epoch_day() -> NaiveDate {
        default_epoch()
    }

    async fn spawn_service() -> String {
        let config = ServerConfig {
            solutions: vec!["globe"],
            ..ServerConfig::default()
        };
        let app = create_router(AppState::with_clock(&config, epoch_day));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn url_joins_without_double_slash() {
        assert_eq!(
            ClientConfig::new("http://example.com").daily_word_url(),
            "http://example.com/api/daily-word"
        );
        assert_eq!(
            ClientConfig::default().daily_word_url(),
            "http://localhost:5000/api/daily-word"
        );
    }

    #[tokio::test]
    async fn fetches_upper_cased_word_from_service() {
        let base_url = spawn_service().await;
        let word = fetch_daily_word(&ClientConfig::new(base_url)).await.unwrap();
        assert_eq!(word.text(), "GLOBE");
    }

    #[tokio::test]
    async fn missing_route_is_status_error() {
        let base_url = spawn_service().await;
        let config = ClientConfig::new(format!("{base_url}/nowhere"));
        let err = fetch_daily_word(&config).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn unreachable_service_is_http_error() {
        // Bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = fetch_daily_word(&ClientConfig::new(format!("http://{addr}")))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }

    #[test]
    fn local_sources_pick_known_solutions() {
        let offline = SolutionSource::Offline.resolve().unwrap();
        let practice = SolutionSource::Practice.resolve().unwrap();
        let solutions = crate::wordlists::WordList::from_slice(SOLUTIONS);

        assert!(solutions.contains(&offline));
        assert!(solutions.contains(&practice));
    }
}
