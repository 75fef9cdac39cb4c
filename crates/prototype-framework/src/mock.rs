//! # Mock Framework & Testing Guide
//!
//! Two kinds of test doubles live here:
//!
//! - [`MockPresenter`] stands in for a real presenter. It returns canned text, keeps a
//!   [`copy`](crate::Prototype::copy) of every entity it was asked to present, and panics on
//!   unexpected calls.
//! - [`create_mock_client`] returns a [`RegistryClient`] wired to a channel the test
//!   controls, so catalog wrappers can be tested without running a registry.
//!
//! ## When to use Mocks vs a Real Registry
//!
//! | Feature | Mock | Real Registry |
//! |---------|------|---------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real prototypes and copies |
//! | **Use Case** | Logic *around* the presenter or client | Cloning behavior end to end |
//! | **Error Injection** | Easy (`Err(..)` on the responder) | Hard (requires specific state) |
//!
//! ## Presenter Example
//!
//! ```rust
//! use prototype_framework::mock::MockPresenter;
//! use prototype_framework::{prototype, Presenter, Text};
//!
//! #[derive(Debug, PartialEq)]
//! struct Card { title: Text }
//! prototype!(Card { title });
//!
//! let presenter = MockPresenter::<Card>::new();
//! presenter.expect_present().return_text("rendered");
//!
//! let card = Card { title: "base".into() };
//! assert_eq!(presenter.present(&card), "rendered");
//! assert_eq!(presenter.presented(), vec![Card { title: "base".into() }]);
//! presenter.verify();
//! ```

use crate::client::RegistryClient;
use crate::error::RegistryError;
use crate::message::{RegistryRequest, Revision};
use crate::presenter::Presenter;
use crate::prototype::Prototype;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// PRESENTER MOCK
// =============================================================================

struct MockState<T> {
    expectations: VecDeque<String>,
    presented: Vec<T>,
}

/// A presenter with expectation tracking.
///
/// Each call to [`Presenter::present`] consumes one expectation, in order. The presented
/// entity is copied at call time, so later mutation of the original does not change what
/// the mock recorded.
pub struct MockPresenter<T> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T> Default for MockPresenter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for MockPresenter<T> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<T> MockPresenter<T> {
    /// Creates a new mock presenter with no expectations.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(MockState {
                expectations: VecDeque::new(),
                presented: Vec::new(),
            })),
        }
    }

    /// Expects one `present` call.
    pub fn expect_present(&self) -> PresentExpectationBuilder<T> {
        PresentExpectationBuilder {
            state: Arc::clone(&self.state),
        }
    }

    /// Number of `present` calls seen so far.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().presented.len()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

impl<T: Prototype> MockPresenter<T> {
    /// Copies of every entity presented so far, in call order.
    pub fn presented(&self) -> Vec<T> {
        self.state.lock().unwrap().presented.copy()
    }
}

impl<T: Prototype> Presenter<T> for MockPresenter<T> {
    fn present(&self, item: &T) -> String {
        let mut state = self.state.lock().unwrap();
        let text = match state.expectations.pop_front() {
            Some(text) => text,
            None => panic!("Unexpected present call"),
        };
        state.presented.push(item.copy());
        text
    }
}

/// Builder for `present` expectations.
pub struct PresentExpectationBuilder<T> {
    state: Arc<Mutex<MockState<T>>>,
}

impl<T> PresentExpectationBuilder<T> {
    /// Sets the text the matching call returns.
    pub fn return_text(self, text: impl Into<String>) {
        self.state.lock().unwrap().expectations.push_back(text.into());
    }
}

// =============================================================================
// REGISTRY CLIENT HELPERS
// =============================================================================

/// Creates a registry client and the receiver its requests arrive on.
///
/// The test plays the registry: it pulls requests with the `expect_*` helpers below and
/// answers on the returned responder.
pub fn create_mock_client<P: Prototype>(
    buffer_size: usize,
) -> (RegistryClient<P>, mpsc::Receiver<RegistryRequest<P>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RegistryClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Register request
pub async fn expect_register<P: Prototype>(
    receiver: &mut mpsc::Receiver<RegistryRequest<P>>,
) -> Option<(String, P, oneshot::Sender<Result<bool, RegistryError>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Register {
            name,
            prototype,
            respond_to,
        }) => Some((name, prototype, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Spawn request
pub async fn expect_spawn<P: Prototype>(
    receiver: &mut mpsc::Receiver<RegistryRequest<P>>,
) -> Option<(String, oneshot::Sender<Result<P, RegistryError>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Spawn { name, respond_to }) => Some((name, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Revise request
pub async fn expect_revise<P: Prototype>(
    receiver: &mut mpsc::Receiver<RegistryRequest<P>>,
) -> Option<(String, Revision<P>, oneshot::Sender<Result<(), RegistryError>>)> {
    match receiver.recv().await {
        Some(RegistryRequest::Revise {
            name,
            edit,
            respond_to,
        }) => Some((name, edit, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Text;

    #[derive(Debug, PartialEq)]
    struct Card {
        title: Text,
        tags: Vec<Text>,
    }

    crate::prototype!(Card { title, tags });

    #[test]
    fn test_mock_presenter_records_snapshots() {
        let presenter = MockPresenter::<Card>::new();
        presenter.expect_present().return_text("first");
        presenter.expect_present().return_text("second");

        let mut card = Card {
            title: "base".into(),
            tags: vec![],
        };
        assert_eq!(presenter.present(&card), "first");
        card.tags.push("late".into());
        assert_eq!(presenter.present(&card), "second");

        let presented = presenter.presented();
        assert_eq!(presented.len(), 2);
        assert!(presented[0].tags.is_empty());
        assert_eq!(presented[1].tags.len(), 1);
        presenter.verify();
    }

    #[test]
    #[should_panic(expected = "Unexpected present call")]
    fn test_mock_presenter_rejects_unexpected_call() {
        let presenter = MockPresenter::<Card>::new();
        presenter.present(&Card {
            title: "x".into(),
            tags: vec![],
        });
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_mock_presenter_verify_fails_on_leftovers() {
        let presenter = MockPresenter::<Card>::new();
        presenter.expect_present().return_text("never");
        presenter.verify();
    }

    #[tokio::test]
    async fn test_mock_client_spawn() {
        let (client, mut receiver) = create_mock_client::<Card>(10);

        let spawn_task = tokio::spawn(async move { client.spawn("base").await });

        let (name, responder) = expect_spawn(&mut receiver)
            .await
            .expect("Expected Spawn request");
        assert_eq!(name, "base");
        responder
            .send(Ok(Card {
                title: "base".into(),
                tags: vec![],
            }))
            .unwrap();

        let card = spawn_task.await.unwrap().unwrap();
        assert_eq!(card.title.as_ref(), "base");
    }

    #[tokio::test]
    async fn test_mock_client_surfaces_not_found() {
        let (client, mut receiver) = create_mock_client::<Card>(10);

        let spawn_task = tokio::spawn(async move { client.spawn("missing").await });

        let (name, responder) = expect_spawn(&mut receiver).await.unwrap();
        responder.send(Err(RegistryError::NotFound(name))).unwrap();

        let result = spawn_task.await.unwrap();
        assert_eq!(result, Err(RegistryError::NotFound("missing".to_string())));
    }
}
