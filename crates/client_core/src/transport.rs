//! `reqwest` implementation of [`UsersApi`] against the users REST collection.

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{User, UserDraft, UserId},
    protocol::{user_route, users_route},
};
use tracing::debug;
use url::Url;

use crate::{config::ClientSettings, error::ConfigError, UsersApi};

pub struct HttpUsersApi {
    http: Client,
    base_url: String,
}

impl HttpUsersApi {
    pub fn new(settings: &ClientSettings) -> Result<Self, ConfigError> {
        Ok(Self::with_base_url(settings.base_url()?))
    }

    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}{}", self.base_url, users_route())
    }

    fn user_url(&self, id: UserId) -> String {
        format!("{}{}", self.base_url, user_route(id))
    }
}

#[async_trait]
impl UsersApi for HttpUsersApi {
    async fn list_users(&self) -> Result<Vec<User>> {
        let url = self.users_url();
        debug!(%url, "GET users");
        let users = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("GET {url}"))?
            .error_for_status()?
            .json()
            .await
            .context("invalid users payload from server")?;
        Ok(users)
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<()> {
        let url = self.users_url();
        debug!(%url, "POST user");
        self.http
            .post(&url)
            .json(draft)
            .send()
            .await
            .with_context(|| format!("POST {url}"))?
            .error_for_status()?;
        Ok(())
    }

    async fn update_user(&self, id: UserId, draft: &UserDraft) -> Result<()> {
        let url = self.user_url(id);
        debug!(%url, "PUT user");
        self.http
            .put(&url)
            .json(draft)
            .send()
            .await
            .with_context(|| format!("PUT {url}"))?
            .error_for_status()?;
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> Result<()> {
        let url = self.user_url(id);
        debug!(%url, "DELETE user");
        self.http
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("DELETE {url}"))?
            .error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
