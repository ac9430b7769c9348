//! RollSession - submits dice rolls and reports the replies.
//!
//! Every submission that passes validation runs on its own tokio task. The
//! tasks report back through one mpsc channel, and whoever owns the
//! [`BoardView`](crate::board::BoardView) drains that channel and applies the
//! events in arrival order. Nothing orders concurrent rolls against each
//! other, so the reply that resolves last is the one left on screen.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use monopoly_client::{DiceRoll, GameClient, GameResponse};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::dice::{validate_roll, DiceError};

/// Default capacity of the session event channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// Errors from setting up a session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Client error: {0}")]
    Client(#[from] monopoly_client::Error),
}

/// Something that can resolve a dice roll into a game response.
///
/// [`GameClient`] is the production implementation; tests use
/// [`MockTable`](crate::testing::MockTable).
#[async_trait]
pub trait RollService: Send + Sync {
    async fn roll_dice(&self, roll: DiceRoll) -> Result<GameResponse, monopoly_client::Error>;

    async fn ping(&self) -> Result<(), monopoly_client::Error>;
}

#[async_trait]
impl RollService for GameClient {
    async fn roll_dice(&self, roll: DiceRoll) -> Result<GameResponse, monopoly_client::Error> {
        GameClient::roll_dice(self, &roll).await
    }

    async fn ping(&self) -> Result<(), monopoly_client::Error> {
        GameClient::ping(self).await.map(|_| ())
    }
}

/// Identifier handed out for each accepted submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(pub u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Message sent from request tasks to the state owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The server answered a roll.
    Resolved {
        ticket: Ticket,
        response: GameResponse,
    },
    /// A roll could not be completed. Already logged by the session.
    Failed { ticket: Ticket, error: String },
    /// Result of a connectivity probe.
    Connectivity { reachable: bool },
}

impl SessionEvent {
    /// The roll this event answers, if any.
    pub fn ticket(&self) -> Option<Ticket> {
        match self {
            SessionEvent::Resolved { ticket, .. } | SessionEvent::Failed { ticket, .. } => {
                Some(*ticket)
            }
            SessionEvent::Connectivity { .. } => None,
        }
    }
}

/// Configuration for creating a session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the game server.
    pub server_url: String,

    /// Capacity of the event channel.
    pub channel_capacity: usize,
}

impl SessionConfig {
    /// Create a config for the server at `server_url`.
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Read the server URL from MONOPOLY_SERVER_URL, falling back to the
    /// default table server.
    pub fn from_env() -> Self {
        let server_url = std::env::var(monopoly_client::SERVER_URL_ENV)
            .unwrap_or_else(|_| monopoly_client::DEFAULT_SERVER_URL.to_string());
        Self::new(server_url)
    }

    /// Set the server URL.
    pub fn with_server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = url.into();
        self
    }

    /// Set the event channel capacity.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(monopoly_client::DEFAULT_SERVER_URL)
    }
}

/// Submits rolls and reports their outcome on the event channel.
///
/// Must be used from within a tokio runtime: accepted submissions are
/// spawned as tasks.
pub struct RollSession {
    service: Arc<dyn RollService>,
    events_tx: mpsc::Sender<SessionEvent>,
    next_ticket: u64,
    in_flight: Arc<AtomicUsize>,
    server_url: Option<String>,
}

impl RollSession {
    /// Connect to the game server described by `config`.
    pub fn connect(
        config: SessionConfig,
    ) -> Result<(Self, mpsc::Receiver<SessionEvent>), SessionError> {
        let client = GameClient::new(&config.server_url)?;
        let server_url = client.base_url().to_string();
        let (mut session, events_rx) =
            Self::with_service(Arc::new(client), config.channel_capacity);
        session.server_url = Some(server_url);
        Ok((session, events_rx))
    }

    /// Create a session over any roll service.
    pub fn with_service(
        service: Arc<dyn RollService>,
        channel_capacity: usize,
    ) -> (Self, mpsc::Receiver<SessionEvent>) {
        let (events_tx, events_rx) = mpsc::channel(channel_capacity.max(1));
        let session = Self {
            service,
            events_tx,
            next_ticket: 0,
            in_flight: Arc::new(AtomicUsize::new(0)),
            server_url: None,
        };
        (session, events_rx)
    }

    /// Server this session talks to, when connected over HTTP.
    pub fn server_url(&self) -> Option<&str> {
        self.server_url.as_deref()
    }

    /// Number of rolls that have been sent but not yet answered.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Number of rolls accepted so far.
    pub fn submitted(&self) -> u64 {
        self.next_ticket
    }

    /// Validate and submit a roll.
    ///
    /// Out-of-range dice are rejected here and nothing is sent. Otherwise the
    /// request is started in the background and the returned ticket will
    /// appear on exactly one `Resolved` or `Failed` event.
    pub fn submit(&mut self, dice1: i64, dice2: i64) -> Result<Ticket, DiceError> {
        let roll = validate_roll(dice1, dice2).inspect_err(|e| {
            tracing::info!(dice1, dice2, detail = %e.detail(), "roll rejected");
        })?;
        Ok(self.spawn_roll(roll))
    }

    /// Probe the server in the background and report a `Connectivity` event.
    pub fn check_connection(&self) {
        let service = Arc::clone(&self.service);
        let events_tx = self.events_tx.clone();

        tokio::spawn(async move {
            let reachable = match service.ping().await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(error = %e, "server did not answer ping");
                    false
                }
            };
            let _ = events_tx
                .send(SessionEvent::Connectivity { reachable })
                .await;
        });
    }

    fn spawn_roll(&mut self, roll: DiceRoll) -> Ticket {
        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);

        let service = Arc::clone(&self.service);
        let events_tx = self.events_tx.clone();
        let in_flight = Arc::clone(&self.in_flight);
        in_flight.fetch_add(1, Ordering::SeqCst);

        tracing::info!(%ticket, dice1 = roll.dice1, dice2 = roll.dice2, "roll submitted");

        tokio::spawn(async move {
            let event = match service.roll_dice(roll).await {
                Ok(response) => {
                    tracing::info!(
                        %ticket,
                        message = %response.message,
                        next_player = %response.next_player,
                        "roll resolved"
                    );
                    SessionEvent::Resolved { ticket, response }
                }
                Err(e) => {
                    tracing::error!(%ticket, error = %e, "Error in request");
                    SessionEvent::Failed {
                        ticket,
                        error: e.to_string(),
                    }
                }
            };

            in_flight.fetch_sub(1, Ordering::SeqCst);
            if events_tx.send(event).await.is_err() {
                tracing::debug!(%ticket, "session closed before roll resolved");
            }
        });

        ticket
    }
}
