//! Minimal Monopoly game server client.
//!
//! This crate provides a focused client for the game server's HTTP API:
//! - Submitting a dice roll (`POST /roll-dice`)
//! - Checking that the server is up (`GET /ping`)

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base URL of the table server on the home network.
pub const DEFAULT_SERVER_URL: &str = "http://192.168.0.119:8000";

/// Environment variable that overrides [`DEFAULT_SERVER_URL`].
pub const SERVER_URL_ENV: &str = "MONOPOLY_SERVER_URL";

const ROLL_DICE_PATH: &str = "roll-dice";
const PING_PATH: &str = "ping";

/// Errors that can occur when talking to the game server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Game server client.
#[derive(Debug, Clone)]
pub struct GameClient {
    client: reqwest::Client,
    base_url: Url,
}

impl GameClient {
    /// Create a new client for the server at `base_url`.
    ///
    /// No request timeout is configured: a roll stays in flight until the
    /// server answers or the connection drops.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        let base_url = parse_base_url(base_url.as_ref())?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// The server this client talks to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Submit a dice roll and return the server's reply.
    pub async fn roll_dice(&self, roll: &DiceRoll) -> Result<GameResponse, Error> {
        let url = self.endpoint(ROLL_DICE_PATH)?;
        tracing::debug!(%url, dice1 = roll.dice1, dice2 = roll.dice2, "submitting roll");

        let response = self
            .client
            .post(url)
            .json(roll)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| Error::Parse(format!("{e} in body {body:?}")))
    }

    /// Check that the server is reachable. Returns the reply body (`pong`).
    pub async fn ping(&self) -> Result<String, Error> {
        let url = self.endpoint(PING_PATH)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: body,
            });
        }

        response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.base_url
            .join(path)
            .map_err(|e| Error::Config(format!("Invalid endpoint {path}: {e}")))
    }
}

/// Parse a base URL, making sure it ends in `/` so endpoint paths join under it.
fn parse_base_url(raw: &str) -> Result<Url, Error> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    let url = Url::parse(&with_slash)
        .map_err(|e| Error::Config(format!("Invalid server URL {raw:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "Unsupported URL scheme {other:?} in {raw:?}"
        ))),
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of `POST /roll-dice`.
///
/// The client does not range-check the values; callers validate before
/// building one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRoll {
    pub dice1: u8,
    pub dice2: u8,
}

impl DiceRoll {
    pub fn new(dice1: u8, dice2: u8) -> Self {
        Self { dice1, dice2 }
    }
}

/// Reply to a successful roll.
///
/// Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub next_player: String,
}

impl GameResponse {
    pub fn new(message: impl Into<String>, next_player: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            next_player: next_player.into(),
        }
    }
}
