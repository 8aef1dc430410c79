// src/core/test_support.rs
//! In-memory transport double that records requests and replays canned replies

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::transport::{HttpRequest, HttpResponse, Transport, TransportError};

pub enum Reply {
    Respond(HttpResponse),
    /// Connection-level failure with no response
    Fail,
    /// Never completes
    Hang,
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Self::Respond(HttpResponse {
            status,
            content_type: Some("application/json".to_string()),
            body: serde_json::to_vec(&body).unwrap(),
        })
    }

    pub fn bytes(status: u16, content_type: &str, body: &[u8]) -> Self {
        Self::Respond(HttpResponse {
            status,
            content_type: Some(content_type.to_string()),
            body: body.to_vec(),
        })
    }
}

#[derive(Default)]
pub struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    replies: Mutex<VecDeque<Reply>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        let reply = self.replies.lock().unwrap().pop_front();

        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Hang) => std::future::pending().await,
            Some(Reply::Fail) | None => Err(TransportError("connection refused".to_string())),
        }
    }
}
