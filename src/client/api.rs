//! HTTP access to the Inkwell API.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use super::error::ClientError;
use crate::web::dto::{
    CommentResponse, CreateCommentRequest, LoginRequest, LoginResponse, MessageResponse,
    PostDraft, PostResponse, RegisterRequest, UserResponse,
};

/// Connect timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Total request timeout in seconds.
const TOTAL_TIMEOUT_SECS: u64 = 30;

/// User agent string sent with every request.
const USER_AGENT: &str = concat!("inkwell-client/", env!("CARGO_PKG_VERSION"));

/// Post and comment operations used by the home page.
pub trait PostApi {
    /// `GET /posts`.
    fn list_posts(&self) -> impl Future<Output = Result<Vec<PostResponse>, ClientError>> + Send;

    /// `POST /posts/:id/comments`.
    fn create_comment(
        &self,
        token: &str,
        post_id: i64,
        content: &str,
    ) -> impl Future<Output = Result<CommentResponse, ClientError>> + Send;

    /// `PUT /posts/:id`.
    fn update_post(
        &self,
        token: &str,
        post_id: i64,
        draft: &PostDraft,
    ) -> impl Future<Output = Result<PostResponse, ClientError>> + Send;

    /// `DELETE /posts/:id`.
    fn delete_post(
        &self,
        token: &str,
        post_id: i64,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;
}

/// Account operations.
pub trait AuthApi {
    /// `POST /login`.
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<LoginResponse, ClientError>> + Send;

    /// `POST /register`.
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<UserResponse, ClientError>> + Send;
}

/// Error body sent by the server.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Inkwell API client over `reqwest`.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        // Url::join replaces the last segment unless the path ends with '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(TOTAL_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `POST /posts`.
    pub async fn create_post(
        &self,
        token: &str,
        draft: &PostDraft,
    ) -> Result<PostResponse, ClientError> {
        let request = self
            .client
            .post(self.endpoint("posts")?)
            .bearer_auth(token)
            .json(draft);
        read_json(send(request).await?).await
    }

    /// `GET /posts/:id`.
    pub async fn get_post(&self, post_id: i64) -> Result<PostResponse, ClientError> {
        let request = self.client.get(self.endpoint(&format!("posts/{post_id}"))?);
        read_json(send(request).await?).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path)?)
    }
}

impl PostApi for ApiClient {
    async fn list_posts(&self) -> Result<Vec<PostResponse>, ClientError> {
        let request = self.client.get(self.endpoint("posts")?);
        read_json(send(request).await?).await
    }

    async fn create_comment(
        &self,
        token: &str,
        post_id: i64,
        content: &str,
    ) -> Result<CommentResponse, ClientError> {
        let body = CreateCommentRequest {
            content: content.to_string(),
        };
        let request = self
            .client
            .post(self.endpoint(&format!("posts/{post_id}/comments"))?)
            .bearer_auth(token)
            .json(&body);
        read_json(send(request).await?).await
    }

    async fn update_post(
        &self,
        token: &str,
        post_id: i64,
        draft: &PostDraft,
    ) -> Result<PostResponse, ClientError> {
        let request = self
            .client
            .put(self.endpoint(&format!("posts/{post_id}"))?)
            .bearer_auth(token)
            .json(draft);
        read_json(send(request).await?).await
    }

    async fn delete_post(&self, token: &str, post_id: i64) -> Result<(), ClientError> {
        let request = self
            .client
            .delete(self.endpoint(&format!("posts/{post_id}"))?)
            .bearer_auth(token);
        let _: MessageResponse = read_json(send(request).await?).await?;
        Ok(())
    }
}

impl AuthApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let request = self.client.post(self.endpoint("login")?).json(request);
        read_json(send(request).await?).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<UserResponse, ClientError> {
        let request = self.client.post(self.endpoint("register")?).json(request);
        read_json(send(request).await?).await
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ClientError> {
    Ok(request.send().await?)
}

/// Decode a success body, or turn an error status into [`ClientError::Status`].
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let message = response.json::<ErrorBody>().await.ok().map(|b| b.message);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let client = ApiClient::new("http://localhost:8800/api").unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8800/api/");
        assert_eq!(
            client.endpoint("posts/3/comments").unwrap().as_str(),
            "http://localhost:8800/api/posts/3/comments"
        );
    }

    #[test]
    fn test_root_base_url() {
        let client = ApiClient::new("http://localhost:8800").unwrap();
        assert_eq!(
            client.endpoint("login").unwrap().as_str(),
            "http://localhost:8800/login"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ClientError::Url(_))
        ));
    }
}
