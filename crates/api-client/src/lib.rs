//! Shared HTTP client for the bookshelf API.
//!
//! [`ApiClient`] wraps one `reqwest` client configured with a fixed base URL
//! and, in credentialed mode, a cookie store so the `session` cookie issued by
//! `POST /login` is attached to every later request automatically.
//!
//! ```no_run
//! use api_client::ApiClient;
//!
//! # async fn run() -> Result<(), api_client::ClientError> {
//! let client = ApiClient::shared()?;
//! client.login("alex@alex.com", "pwdpwd").await?;
//! let books = client.books().await?;
//! println!("{} books", books.len());
//! # Ok(())
//! # }
//! ```

use std::sync::OnceLock;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Base URL used by [`ClientConfig::default`] and [`ApiClient::shared`].
pub const DEFAULT_BASE_URL: &str = "http://api.sanctum.test";

static SHARED: OnceLock<ApiClient> = OnceLock::new();

/// Failures surfaced by [`ApiClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The base URL or a request path could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// Connecting, sending, or decoding failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered `401 Unauthorized`.
    #[error("unauthorised: {message}")]
    Unauthorised {
        /// Message from the server's error envelope.
        message: String,
    },
    /// The server answered with any other non-success status.
    #[error("unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
        /// Message from the server's error envelope, or the raw body.
        message: String,
    },
}

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Address every request path is resolved against.
    pub base_url: String,
    /// Keep and resend cookies between requests.
    pub with_credentials: bool,
}

impl ClientConfig {
    /// Credentialed configuration for `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            with_credentials: true,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Book as returned by `GET /book`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    /// Database identifier.
    pub id: i64,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Signed-in user as returned by `GET /user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDto {
    /// Database identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    message: String,
}

#[derive(Serialize)]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Pre-configured client for the bookshelf API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
    with_credentials: bool,
}

impl ApiClient {
    /// Build a client from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when the base URL is not absolute
    /// and [`ClientError::Transport`] when the TLS backend cannot be
    /// initialised.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let ClientConfig {
            base_url,
            with_credentials,
        } = config;
        let base_url = directory_url(&base_url)?;
        let client = Client::builder().cookie_store(with_credentials).build()?;
        Ok(Self {
            client,
            base_url,
            with_credentials,
        })
    }

    /// Process-wide client using [`ClientConfig::default`].
    ///
    /// Every caller shares one cookie jar, so a login through one handle is
    /// visible to all of them.
    ///
    /// # Errors
    ///
    /// Returns the construction error on the first call if the client cannot
    /// be built; later calls retry.
    pub fn shared() -> Result<&'static Self, ClientError> {
        if let Some(client) = SHARED.get() {
            return Ok(client);
        }
        let client = Self::new(ClientConfig::default())?;
        Ok(SHARED.get_or_init(|| client))
    }

    /// Address every request path is resolved against.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether cookies are kept between requests.
    #[must_use]
    pub const fn with_credentials(&self) -> bool {
        self.with_credentials
    }

    /// Start a `GET` request for `path`, relative to the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when `path` cannot be joined.
    pub fn get(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        Ok(self.client.get(self.resolve(path)?))
    }

    fn post(&self, path: &str) -> Result<RequestBuilder, ClientError> {
        Ok(self.client.post(self.resolve(path)?))
    }

    fn resolve(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Sign in; the session cookie is stored for later calls.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unauthorised`] for wrong credentials.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ClientError> {
        let response = self
            .post("login")?
            .json(&LoginBody { email, password })
            .send()
            .await?;
        check_status(response).await?;
        debug!(email, "signed in");
        Ok(())
    }

    /// End the current session.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] when the server cannot be reached.
    pub async fn logout(&self) -> Result<(), ClientError> {
        let response = self.post("logout")?.send().await?;
        check_status(response).await?;
        Ok(())
    }

    /// Fetch every book.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unauthorised`] without a session.
    pub async fn books(&self) -> Result<Vec<BookDto>, ClientError> {
        let response = check_status(self.get("book")?.send().await?).await?;
        Ok(response.json().await?)
    }

    /// Fetch the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Unauthorised`] without a session.
    pub async fn current_user(&self) -> Result<UserDto, ClientError> {
        let response = check_status(self.get("user")?.send().await?).await?;
        Ok(response.json().await?)
    }
}

/// Parse `raw` and make sure its path ends in `/` so joins keep every segment.
fn directory_url(raw: &str) -> Result<Url, ClientError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

async fn check_status(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await?;
    let message = serde_json::from_str::<ErrorEnvelope>(&body)
        .map(|envelope| envelope.message)
        .unwrap_or(body);
    if status == StatusCode::UNAUTHORIZED {
        Err(ClientError::Unauthorised { message })
    } else {
        Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            message,
        })
    }
}
