//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;

use crate::auth::{authenticate, register as register_user, RegistrationRequest};
use crate::db::UserRepository;
use crate::web::dto::{LoginRequest, LoginResponse, RegisterRequest, UserResponse, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::middleware::JwtClaims;
use crate::Database;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle (the pool inside is shared).
    pub db: Database,
    /// JWT encoding key.
    pub encoding_key: EncodingKey,
    /// Access token expiry in seconds.
    pub access_token_expiry: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, jwt_secret: &str, access_expiry: u64) -> Self {
        Self {
            db,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            access_token_expiry: access_expiry,
        }
    }

    /// Generate an access token for a user.
    pub fn generate_access_token(&self, user_id: i64, username: &str) -> Result<String, ApiError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = JwtClaims {
            sub: user_id,
            username: username.to_string(),
            iat: now,
            exp: now + self.access_token_expiry,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            ApiError::internal("Failed to generate token")
        })
    }
}

/// POST /login - Exchange credentials for an access token.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if req.identifier.trim().is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request(
            "Username or email and password are required",
        ));
    }

    let repo = UserRepository::new(state.db.pool());
    let user = authenticate(&repo, req.identifier.trim(), &req.password).await?;

    let token = state.generate_access_token(user.id, &user.username)?;
    tracing::info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(LoginResponse { token: Some(token) }))
}

/// POST /register - Create a new account.
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let mut request = RegistrationRequest::new(req.username, req.password);
    if let Some(email) = req.email {
        request = request.with_email(email);
    }

    let repo = UserRepository::new(state.db.pool());
    let user = register_user(&repo, request).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
