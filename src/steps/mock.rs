//! Test doubles for the step transport

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::oneshot;

use crate::api::{ApiError, StepTransport};

/// Transport that answers each call with the next scripted result
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Value, ApiError>>>,
    paths: Mutex<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<Result<Value, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            paths: Mutex::new(Vec::new()),
        }
    }

    /// Paths requested so far, in call order
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl StepTransport for ScriptedTransport {
    async fn post(&self, path: &str) -> Result<Value, ApiError> {
        self.paths.lock().unwrap().push(path.to_string());
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(ApiError::network("no scripted response")))
    }
}

/// Transport whose calls stay pending until the test releases them
pub struct PendingTransport {
    receivers: Mutex<VecDeque<oneshot::Receiver<Result<Value, ApiError>>>>,
}

pub type ResponseSender = oneshot::Sender<Result<Value, ApiError>>;

impl PendingTransport {
    /// Create a transport for `calls` requests; the nth sender answers the nth call
    pub fn new(calls: usize) -> (Self, Vec<ResponseSender>) {
        let mut senders = Vec::with_capacity(calls);
        let mut receivers = VecDeque::with_capacity(calls);
        for _ in 0..calls {
            let (tx, rx) = oneshot::channel();
            senders.push(tx);
            receivers.push_back(rx);
        }

        (
            Self {
                receivers: Mutex::new(receivers),
            },
            senders,
        )
    }
}

#[async_trait]
impl StepTransport for PendingTransport {
    async fn post(&self, _path: &str) -> Result<Value, ApiError> {
        let receiver = self.receivers.lock().unwrap().pop_front();
        match receiver {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ApiError::network("response dropped"))),
            None => Err(ApiError::network("no pending response")),
        }
    }
}
