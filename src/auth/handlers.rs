use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::instrument;

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, PublicUser, SignupRequest},
        errors::AuthError,
        services::CredentialService,
    },
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

#[instrument(skip(credentials, payload))]
pub async fn signup(
    State(credentials): State<CredentialService>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<PublicUser>), AuthError> {
    let user = credentials.signup(payload).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

#[instrument(skip(credentials, payload))]
pub async fn login(
    State(credentials): State<CredentialService>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AuthError> {
    let out = credentials.login(payload).await?;
    Ok(Json(LoginResponse {
        token: out.token,
        user: out.user.into(),
    }))
}
