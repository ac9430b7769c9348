//! Testing utilities for the table client.
//!
//! This module provides tools for integration testing:
//! - `MockTable` for deterministic tests without a game server
//! - `Gate` for controlling when (and in which order) replies arrive

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use monopoly_client::{DiceRoll, Error as ClientError, GameResponse};
use tokio::sync::oneshot;

use crate::session::RollService;

/// A scripted reply to one roll.
enum MockReply {
    Respond(GameResponse),
    Fail(String),
    Gated(oneshot::Receiver<Result<GameResponse, String>>),
}

/// Releases a gated reply.
///
/// Dropping a gate without releasing it fails the waiting roll.
pub struct Gate {
    tx: oneshot::Sender<Result<GameResponse, String>>,
}

impl Gate {
    /// Let the waiting roll resolve with `response`.
    pub fn respond(self, response: GameResponse) {
        let _ = self.tx.send(Ok(response));
    }

    /// Let the waiting roll fail with `error`.
    pub fn fail(self, error: impl Into<String>) {
        let _ = self.tx.send(Err(error.into()));
    }
}

#[derive(Default)]
struct MockState {
    scripted: HashMap<DiceRoll, VecDeque<MockReply>>,
    fallback: Option<GameResponse>,
    calls: Vec<DiceRoll>,
    unreachable: bool,
}

/// A game server stand-in that returns scripted replies.
///
/// Replies are keyed by the dice they answer, so the order in which spawned
/// requests happen to reach the mock does not matter. A roll with nothing
/// scripted fails with a network error.
#[derive(Default)]
pub struct MockTable {
    state: Mutex<MockState>,
}

impl MockTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A panicking test thread must not hide the calls recorded so far.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, dice1: u8, dice2: u8, reply: MockReply) {
        self.state()
            .scripted
            .entry(DiceRoll::new(dice1, dice2))
            .or_default()
            .push_back(reply);
    }

    /// Answer the next roll of (`dice1`, `dice2`) with `response`.
    pub fn respond_to(&self, dice1: u8, dice2: u8, response: GameResponse) -> &Self {
        self.push(dice1, dice2, MockReply::Respond(response));
        self
    }

    /// Fail the next roll of (`dice1`, `dice2`) as if the network dropped.
    pub fn fail_on(&self, dice1: u8, dice2: u8, error: impl Into<String>) -> &Self {
        self.push(dice1, dice2, MockReply::Fail(error.into()));
        self
    }

    /// Hold the next roll of (`dice1`, `dice2`) until the returned gate is released.
    pub fn gate(&self, dice1: u8, dice2: u8) -> Gate {
        let (tx, rx) = oneshot::channel();
        self.push(dice1, dice2, MockReply::Gated(rx));
        Gate { tx }
    }

    /// Answer any roll without a scripted reply with `response`.
    pub fn respond_to_any(&self, response: GameResponse) -> &Self {
        self.state().fallback = Some(response);
        self
    }

    /// Make pings fail (or succeed again).
    pub fn set_reachable(&self, reachable: bool) {
        self.state().unreachable = !reachable;
    }

    /// Every roll received so far, in arrival order.
    pub fn calls(&self) -> Vec<DiceRoll> {
        self.state().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state().calls.len()
    }

    fn next_reply(&self, roll: DiceRoll) -> Option<MockReply> {
        let mut state = self.state();
        state.calls.push(roll);
        if let Some(reply) = state.scripted.get_mut(&roll).and_then(VecDeque::pop_front) {
            return Some(reply);
        }
        state.fallback.clone().map(MockReply::Respond)
    }
}

#[async_trait]
impl RollService for MockTable {
    async fn roll_dice(&self, roll: DiceRoll) -> Result<GameResponse, ClientError> {
        // The lock is released before awaiting a gate.
        let reply = self.next_reply(roll);

        match reply {
            Some(MockReply::Respond(response)) => Ok(response),
            Some(MockReply::Fail(error)) => Err(ClientError::Network(error)),
            Some(MockReply::Gated(rx)) => match rx.await {
                Ok(Ok(response)) => Ok(response),
                Ok(Err(error)) => Err(ClientError::Network(error)),
                Err(_) => Err(ClientError::Network("gate dropped".to_string())),
            },
            None => Err(ClientError::Network(format!(
                "no scripted reply for {} and {}",
                roll.dice1, roll.dice2
            ))),
        }
    }

    async fn ping(&self) -> Result<(), ClientError> {
        if self.state().unreachable {
            Err(ClientError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_replies_in_order() {
        let table = MockTable::new();
        table
            .respond_to(1, 2, GameResponse::new("first", "Hannah"))
            .respond_to(1, 2, GameResponse::new("second", "Daniel"));

        let first = table.roll_dice(DiceRoll::new(1, 2)).await.unwrap();
        let second = table.roll_dice(DiceRoll::new(1, 2)).await.unwrap();

        assert_eq!(first.message, "first");
        assert_eq!(second.message, "second");
        assert_eq!(table.call_count(), 2);
    }

    #[tokio::test]
    async fn test_unscripted_roll_fails() {
        let table = MockTable::new();
        let err = table.roll_dice(DiceRoll::new(3, 3)).await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));
        assert_eq!(table.calls(), vec![DiceRoll::new(3, 3)]);
    }

    #[tokio::test]
    async fn test_fallback_reply() {
        let table = MockTable::new();
        table.respond_to_any(GameResponse::new("any", "Daddy"));
        let reply = table.roll_dice(DiceRoll::new(6, 1)).await.unwrap();
        assert_eq!(reply.next_player, "Daddy");
    }

    #[tokio::test]
    async fn test_gate_controls_reply() {
        let table = std::sync::Arc::new(MockTable::new());
        let gate = table.gate(2, 5);

        let waiting = {
            let table = table.clone();
            tokio::spawn(async move { table.roll_dice(DiceRoll::new(2, 5)).await })
        };

        gate.respond(GameResponse::new("released", "Alice"));
        let reply = waiting.await.unwrap().unwrap();
        assert_eq!(reply.message, "released");
    }

    #[tokio::test]
    async fn test_dropped_gate_fails_roll() {
        let table = MockTable::new();
        drop(table.gate(4, 4));
        assert!(table.roll_dice(DiceRoll::new(4, 4)).await.is_err());
    }
}
