//! Mock backend for testing without an iTop instance.
//!
//! Replies are scripted per class; every submitted request is recorded for
//! assertion in tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use itop_protocol::{OperationDescriptor, OperationRequest, RawResult, LIST_OPERATIONS};

use crate::backend::Backend;
use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone)]
enum Reply {
    Result(RawResult),
    Transport(String),
}

/// Scripted implementation of the `Backend` trait.
///
/// Replies queued for a class are consumed in order; the last one keeps being
/// served. Classes with nothing queued get an empty successful result.
/// Thread-safe via `Mutex` (fine for test contexts).
pub struct MockBackend {
    replies: Mutex<HashMap<String, VecDeque<Reply>>>,
    operations: Vec<OperationDescriptor>,
    requests: Mutex<Vec<OperationRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            replies: Mutex::new(HashMap::new()),
            operations: Vec::new(),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a result for queries against `class`.
    pub fn respond(&self, class: &str, result: RawResult) -> &Self {
        self.push(class, Reply::Result(result));
        self
    }

    /// Queue a transport failure for queries against `class`.
    pub fn fail(&self, class: &str, message: &str) -> &Self {
        self.push(class, Reply::Transport(message.to_string()));
        self
    }

    /// Set the operations returned by `list_operations`.
    pub fn with_operations(mut self, operations: Vec<OperationDescriptor>) -> Self {
        self.operations = operations;
        self
    }

    /// A backend advertising the standard core operations.
    pub fn with_core_operations() -> Self {
        let ops = [
            ("core/get", "Search for objects"),
            ("core/create", "Create an object"),
            ("core/update", "Update an object"),
            ("core/delete", "Delete objects"),
            ("core/check_credentials", "Check user credentials"),
        ];
        Self::new().with_operations(
            ops.iter()
                .map(|(verb, description)| OperationDescriptor {
                    verb: verb.to_string(),
                    description: description.to_string(),
                })
                .collect(),
        )
    }

    /// All requests submitted so far.
    pub fn requests(&self) -> Vec<OperationRequest> {
        self.lock_requests().clone()
    }

    pub fn request_count(&self) -> usize {
        self.lock_requests().len()
    }

    /// Requests whose target class is `class`.
    pub fn requests_for(&self, class: &str) -> Vec<OperationRequest> {
        self.lock_requests()
            .iter()
            .filter(|r| r.class() == Some(class))
            .cloned()
            .collect()
    }

    /// Clear recorded requests and queued replies.
    pub fn reset(&self) {
        self.lock_requests().clear();
        self.lock_replies().clear();
    }

    fn push(&self, class: &str, reply: Reply) {
        self.lock_replies()
            .entry(class.to_string())
            .or_default()
            .push_back(reply);
    }

    fn next_reply(&self, class: &str) -> Option<Reply> {
        let mut replies = self.lock_replies();
        let queue = replies.get_mut(class)?;
        if queue.len() > 1 {
            queue.pop_front()
        } else {
            queue.front().cloned()
        }
    }

    fn lock_requests(&self) -> std::sync::MutexGuard<'_, Vec<OperationRequest>> {
        self.requests.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_replies(&self) -> std::sync::MutexGuard<'_, HashMap<String, VecDeque<Reply>>> {
        self.replies.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn submit(&self, request: &OperationRequest) -> ClientResult<RawResult> {
        self.lock_requests().push(request.clone());

        if request.operation == LIST_OPERATIONS {
            return Ok(RawResult {
                code: 0,
                message: Some(format!("Operations: {}", self.operations.len())),
                operations: self.operations.clone(),
                ..RawResult::default()
            });
        }

        let class = request.class().unwrap_or_default();
        match self.next_reply(class) {
            Some(Reply::Result(result)) => Ok(result),
            Some(Reply::Transport(message)) => Err(ClientError::Transport(message)),
            None => Ok(RawResult::with_objects(Vec::new())),
        }
    }
}
