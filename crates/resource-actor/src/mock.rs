//! # Mock Framework
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`], but the requests it sends are
//! answered by a background task from a queue of expectations instead of a store. This
//! lets you test code that sits *around* a client (retry logic, error mapping, metrics
//! ordering) without spawning an actor, and inject failures that a real store would
//! rarely produce.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None (expectations) | Real store |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **Error Injection** | Easy (`return_err`) | Hard (needs specific state) |
//!
//! ## Example
//!
//! ```rust
//! use resource_actor::mock::MockClient;
//! use resource_actor::{ActorEntity, FrameworkError};
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u32 }
//! impl ActorEntity for Ticket {
//!     type Id = u32;
//!     fn id(&self) -> &u32 { &self.id }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Ticket>::new();
//!     mock.expect_insert().return_err(FrameworkError::DuplicateKey("1".into()));
//!     mock.expect_insert().return_ok();
//!
//!     let client = mock.client();
//!     assert!(client.insert(Ticket { id: 1 }).await.is_err());
//!     assert!(client.insert(Ticket { id: 2 }).await.is_ok());
//!
//!     assert_eq!(mock.inserted().len(), 2);
//!     mock.verify();
//! }
//! ```
//!
//! For full control over each reply, [`create_mock_client`] returns the raw receiver and
//! the `expect_*` helpers pull typed requests off it.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to send for it.
enum Expectation<T: ActorEntity> {
    Insert {
        response: Result<(), FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Len {
        response: Result<usize, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in FIFO order. A request that does not match the next
/// expectation panics the background task, which surfaces to the caller as
/// [`FrameworkError::ActorDropped`].
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    inserted: Arc<Mutex<Vec<T>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let inserted = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let inserted_clone = inserted.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Insert { item, respond_to },
                        Some(Expectation::Insert { response }),
                    ) => {
                        inserted_clone.lock().unwrap().push(item);
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Get for unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Len { respond_to }, Some(Expectation::Len { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            inserted,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects an `insert` operation.
    pub fn expect_insert(&mut self) -> InsertExpectationBuilder<T> {
        InsertExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `len` operation.
    pub fn expect_len(&mut self) -> LenExpectationBuilder<T> {
        LenExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Every item received by an `insert`, in arrival order, including rejected ones.
    pub fn inserted(&self) -> Vec<T> {
        self.inserted.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `insert` expectations.
pub struct InsertExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> InsertExpectationBuilder<T> {
    pub fn return_ok(self) {
        self.push(Ok(()));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<(), FrameworkError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Insert { response });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

/// Builder for `len` expectations.
pub struct LenExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> LenExpectationBuilder<T> {
    pub fn return_ok(self, len: usize) {
        self.push(Ok(len));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<usize, FrameworkError>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Len { response });
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client wired to a receiver the test controls.
///
/// The test pulls requests off `receiver` with [`expect_insert`] / [`expect_get`] and
/// answers them by hand, which allows asserting on payloads and delaying or dropping replies.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Returns the next request if it is an `Insert`.
pub async fn expect_insert<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Insert { item, respond_to }) => Some((item, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a `Get`.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
