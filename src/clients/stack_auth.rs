use super::{join_segments, parse_base_url};
use crate::{config::StackAuthConfig, Error, Result};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

/// Snapshot of a user profile as asserted by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedUser {
    pub id: String,
    #[serde(default)]
    pub primary_email_verified: bool,
    #[serde(default)]
    pub signed_up_at_millis: i64,
    pub primary_email: Option<String>,
    pub display_name: Option<String>,
    pub profile_image_url: Option<String>,
    pub selected_team_id: Option<String>,
}

/// Stack Auth server API, used to look up users by their subject id.
#[derive(Debug, Clone)]
pub struct StackAuth {
    client: Client,
    base_url: Url,
    project_id: String,
    secret_server_key: String,
}

impl StackAuth {
    pub fn new(client: Client, config: &StackAuthConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(&config.base_url)?,
            project_id: config.project_id.clone(),
            secret_server_key: config.secret_server_key.clone(),
        })
    }

    pub async fn get_user(&self, user_id: &str) -> Result<VerifiedUser> {
        let url = join_segments(&self.base_url, &["users", user_id])?;

        let response = self
            .client
            .get(url)
            .header("x-stack-access-type", "server")
            .header("x-stack-project-id", &self.project_id)
            .header("x-stack-secret-server-key", &self.secret_server_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::upstream("Failed to fetch user data", status));
        }

        Ok(response.json().await?)
    }
}
