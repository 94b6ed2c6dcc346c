/**
 * API Client
 *
 * Typed async client for both service surfaces. One method per server
 * operation; bearer tokens go out on the Authorization header with the
 * standard `Bearer` scheme. Non-2xx responses are decoded from the
 * shared `{status: "error", message}` shape.
 */

use thiserror::Error;

use crate::auth::handlers::types::{LoginRequest, LoginResponse, ProfileResponse};
use crate::feed::handlers::{
    CreatePostRequest, FeedResponse, LikeResponse, PostResponse, PostViewResponse,
};

/// Client-side failure
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport-level failure (connection, timeout, decode)
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an error response
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Human-readable message from the error body
        message: String,
    },
}

/// Client for the identity and feed surfaces
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    auth_base: String,
    feed_base: String,
}

impl ApiClient {
    /// Client against explicit base URLs, one per service
    pub fn new(auth_base: impl Into<String>, feed_base: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth_base: auth_base.into(),
            feed_base: feed_base.into(),
        }
    }

    /// Log in and return the bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        let request = LoginRequest {
            username: Some(username.to_string()),
            password: Some(password.to_string()),
        };

        let response = self
            .http
            .post(format!("{}/login", self.auth_base))
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: LoginResponse = response.json().await?;
        Ok(body.token)
    }

    /// Fetch the caller's own profile
    pub async fn profile(&self, token: &str) -> Result<ProfileResponse, ClientError> {
        let response = self
            .http
            .get(format!("{}/profile", self.auth_base))
            .bearer_auth(token)
            .send()
            .await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    /// Publish a post
    pub async fn create_post(
        &self,
        token: &str,
        message: &str,
    ) -> Result<PostResponse, ClientError> {
        let request = CreatePostRequest {
            message: Some(message.to_string()),
        };

        let response = self
            .http
            .post(format!("{}/posts", self.feed_base))
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;
        let response = Self::check(response).await?;

        Ok(response.json().await?)
    }

    /// Fetch the feed, newest first
    pub async fn list_posts(&self, token: &str) -> Result<Vec<PostViewResponse>, ClientError> {
        let response = self
            .http
            .get(format!("{}/posts", self.feed_base))
            .bearer_auth(token)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: FeedResponse = response.json().await?;
        Ok(body.posts)
    }

    /// Like a post; returns the post's total like count
    pub async fn like_post(&self, token: &str, post_id: &str) -> Result<i64, ClientError> {
        let response = self
            .http
            .post(format!("{}/posts/{}/like", self.feed_base, post_id))
            .bearer_auth(token)
            .send()
            .await?;
        let response = Self::check(response).await?;

        let body: LikeResponse = response.json().await?;
        Ok(body.like_count)
    }

    /// Turn an error response into `ClientError::Api`
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| body["message"].as_str().map(str::to_string))
            .unwrap_or_else(|| status.to_string());

        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
