//! In-memory stand-in for the users REST collection, recording every call.

use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::domain::{User, UserDraft, UserId};
use tokio::sync::Semaphore;

use crate::UsersApi;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List,
    Create(UserDraft),
    Update(UserId, UserDraft),
    Delete(UserId),
}

#[derive(Default)]
struct FakeServer {
    users: Vec<User>,
    next_id: i64,
    calls: Vec<ApiCall>,
    fail_reads: bool,
    fail_writes: bool,
}

#[derive(Clone, Default)]
pub struct RecordingApi {
    server: Arc<Mutex<FakeServer>>,
    gate: Option<Arc<Semaphore>>,
}

pub fn user(id: i64, name: &str, email: &str, phone_number: &str) -> User {
    User {
        id: UserId(id),
        name: name.into(),
        email: email.into(),
        phone_number: phone_number.into(),
    }
}

impl RecordingApi {
    pub fn with_users(users: Vec<User>) -> Self {
        let next_id = users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1;
        Self {
            server: Arc::new(Mutex::new(FakeServer {
                users,
                next_id,
                ..FakeServer::default()
            })),
            gate: None,
        }
    }

    /// Every call waits for a permit on the returned semaphore before it runs.
    pub fn gated(mut self) -> (Self, Arc<Semaphore>) {
        let gate = Arc::new(Semaphore::new(0));
        self.gate = Some(Arc::clone(&gate));
        (self, gate)
    }

    pub fn fail_reads(&self, fail: bool) {
        self.server.lock().expect("server").fail_reads = fail;
    }

    pub fn fail_writes(&self, fail: bool) {
        self.server.lock().expect("server").fail_writes = fail;
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.server.lock().expect("server").calls.clone()
    }

    pub fn server_users(&self) -> Vec<User> {
        self.server.lock().expect("server").users.clone()
    }

    async fn pass_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.acquire().await.expect("gate open").forget();
        }
    }
}

#[async_trait]
impl UsersApi for RecordingApi {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.pass_gate().await;
        let mut server = self.server.lock().expect("server");
        server.calls.push(ApiCall::List);
        if server.fail_reads {
            return Err(anyhow!("connection refused"));
        }
        Ok(server.users.clone())
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<()> {
        self.pass_gate().await;
        let mut server = self.server.lock().expect("server");
        server.calls.push(ApiCall::Create(draft.clone()));
        if server.fail_writes {
            return Err(anyhow!("HTTP status server error (500 Internal Server Error)"));
        }
        let id = UserId(server.next_id.max(1));
        server.next_id = id.0 + 1;
        server.users.push(User {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone_number: draft.phone_number.clone(),
        });
        Ok(())
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<()> {
        self.pass_gate().await;
        let mut server = self.server.lock().expect("server");
        server.calls.push(ApiCall::Update(id, draft.clone()));
        if server.fail_writes {
            return Err(anyhow!("HTTP status server error (500 Internal Server Error)"));
        }
        let existing = server
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| anyhow!("HTTP status client error (404 Not Found)"))?;
        existing.name = draft.name.clone();
        existing.email = draft.email.clone();
        existing.phone_number = draft.phone_number.clone();
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        self.pass_gate().await;
        let mut server = self.server.lock().expect("server");
        server.calls.push(ApiCall::Delete(id));
        if server.fail_writes {
            return Err(anyhow!("HTTP status server error (500 Internal Server Error)"));
        }
        server.users.retain(|u| u.id != id);
        Ok(())
    }
}
