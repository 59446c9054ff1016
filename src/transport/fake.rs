//! Scriptable transport for unit tests.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;

use super::traits::Transport;
use super::types::{FetchPolicy, GraphQlRequest};
use crate::error::ClientError;

type Reply = Result<Value, ClientError>;

enum Scripted {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

/// Answers requests from a FIFO of scripted replies.
///
/// Gated replies resolve only when the test sends on the paired channel,
/// which lets tests complete requests out of order.
#[derive(Default)]
pub(crate) struct FakeTransport {
    replies: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<(GraphQlRequest, FetchPolicy)>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(Scripted::Ready(reply));
    }

    pub(crate) fn gated(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.lock().unwrap().push_back(Scripted::Gated(rx));
        tx
    }

    pub(crate) fn requests(&self) -> Vec<GraphQlRequest> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|(request, _)| request.clone())
            .collect()
    }

    pub(crate) fn policies(&self) -> Vec<FetchPolicy> {
        self.requests.lock().unwrap().iter().map(|(_, p)| *p).collect()
    }

    pub(crate) fn count(&self, operation: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|(request, _)| request.operation_name == operation)
            .count()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn send(&self, request: &GraphQlRequest, policy: FetchPolicy) -> Reply {
        self.requests.lock().unwrap().push((request.clone(), policy));
        let scripted = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left");

        match scripted {
            Scripted::Ready(reply) => reply,
            Scripted::Gated(rx) => rx.await.expect("gate dropped"),
        }
    }
}
