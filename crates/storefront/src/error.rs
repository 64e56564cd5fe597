//! Unified error handling for the storefront.
//!
//! Every operation reports failures as explicit values of [`StoreError`].
//! At the HTTP boundary the error becomes a status code plus a tagged JSON
//! body `{"error": {"kind": ..., "message": ...}}`; internal details are
//! logged, never sent to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::MAX_UNITS_PER_LINE;
use crate::services::auth::AuthError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The operation requires a logged-in user.
    #[error("not authenticated")]
    Unauthenticated,

    /// Product, order, or cart line does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Requested quantity exceeds available stock.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        /// Units requested.
        requested: u32,
        /// Units available.
        available: u32,
    },

    /// A cart line would exceed the per-line unit cap.
    #[error("quantity limit exceeded: maximum {MAX_UNITS_PER_LINE} units per product")]
    QuantityLimitExceeded,

    /// Checkout requires a non-empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// Input was invalid in a way that cannot be defaulted away.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An order status change the lifecycle does not allow.
    #[error(transparent)]
    Status(#[from] stepup_core::InvalidTransition),

    /// Authentication failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Storage layer failed.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// Session store failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl StoreError {
    /// Stable machine-readable error kind for the JSON body.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::NotFound(_) => "not_found",
            Self::InsufficientStock { .. } => "insufficient_stock",
            Self::QuantityLimitExceeded => "quantity_limit_exceeded",
            Self::EmptyCart => "empty_cart",
            Self::InvalidInput(_) => "invalid_input",
            Self::Status(_) => "invalid_status_transition",
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "invalid_credentials",
                AuthError::UserAlreadyExists => "user_already_exists",
                AuthError::WeakPassword(_) => "weak_password",
                AuthError::InvalidEmail(_) => "invalid_email",
                AuthError::InvalidName => "invalid_name",
                AuthError::AccountDisabled => "account_disabled",
                AuthError::Repository(_) | AuthError::PasswordHash => "internal",
            },
            Self::Repository(_) | Self::Session(_) => "internal",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InsufficientStock { .. } | Self::QuantityLimitExceeded | Self::Status(_) => {
                StatusCode::CONFLICT
            }
            Self::EmptyCart | Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials | AuthError::AccountDisabled => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::WeakPassword(_) | AuthError::InvalidEmail(_) | AuthError::InvalidName => {
                    StatusCode::BAD_REQUEST
                }
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Repository(_) | Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Repository(_)
            | Self::Session(_)
            | Self::Auth(AuthError::Repository(_) | AuthError::PasswordHash) => {
                "internal server error".to_owned()
            }
            Self::Auth(AuthError::InvalidCredentials) => "invalid credentials".to_owned(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request error");
        }

        let body = json!({
            "error": {
                "kind": self.kind(),
                "message": self.client_message(),
            }
        });

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `StoreError`.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: StoreError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            status_of(StoreError::Unauthenticated),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(StoreError::NotFound("producto".into())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(StoreError::InsufficientStock {
                requested: 6,
                available: 2,
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(StoreError::QuantityLimitExceeded),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(StoreError::EmptyCart), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(StoreError::Auth(AuthError::UserAlreadyExists)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(StoreError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_cancel_rejection_maps_to_conflict() {
        use stepup_core::{InvalidTransition, OrderStatus};

        let err = StoreError::Status(InvalidTransition {
            from: OrderStatus::Shipped,
            to: OrderStatus::Cancelled,
        });
        assert_eq!(err.kind(), "invalid_status_transition");
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_kinds_are_stable() {
        assert_eq!(StoreError::Unauthenticated.kind(), "unauthenticated");
        assert_eq!(StoreError::EmptyCart.kind(), "empty_cart");
        assert_eq!(
            StoreError::QuantityLimitExceeded.kind(),
            "quantity_limit_exceeded"
        );
        assert_eq!(
            StoreError::Repository(RepositoryError::Storage("boom".into())).kind(),
            "internal"
        );
    }

    #[test]
    fn test_internal_details_not_exposed() {
        let err = StoreError::Repository(RepositoryError::Storage("disk on fire".into()));
        assert_eq!(err.client_message(), "internal server error");
    }
}
