//! Authentication route handlers.
//!
//! The session id is cycled on login and the whole session is flushed on
//! logout, cart included.

use axum::{
    Json,
    extract::State,
    Form,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::models::{CurrentUser, session_keys};
use crate::routes::current_user as session_user;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Create an account and log the new user in.
#[instrument(skip(state, session, form))]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Json<CurrentUser>> {
    let auth = AuthService::new(state.users());
    let user = auth.register(&form.name, &form.email, &form.password)?;

    let current = CurrentUser::from(&user);
    session.cycle_id().await?;
    session
        .insert(session_keys::CURRENT_USER, &current)
        .await?;

    Ok(Json(current))
}

/// Log in with email and password.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Json<CurrentUser>> {
    let auth = AuthService::new(state.users());
    let user = auth.login(&form.email, &form.password)?;

    let current = CurrentUser::from(&user);
    // Fresh session id on login; the cart built before login stays.
    session.cycle_id().await?;
    session
        .insert(session_keys::CURRENT_USER, &current)
        .await?;

    Ok(Json(current))
}

/// Log out, destroying the session and its cart.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Json<serde_json::Value>> {
    session.flush().await?;
    Ok(Json(serde_json::json!({"logged_out": true})))
}

/// The currently logged-in user.
#[instrument(skip(session))]
pub async fn me(session: Session) -> Result<Json<CurrentUser>> {
    let user = session_user(&session).await?;
    Ok(Json(user))
}
