//! Role-based authorization for Axum.
//!
//! Two equivalent forms are provided:
//! 1. Layer-based middleware: [`require_roles`] and the named helpers
//!    ([`require_admin`], [`require_editor`], ...) applied with
//!    `axum::middleware::from_fn_with_state`
//! 2. Extractor-based: [`RequireAdmin`], [`RequireEditor`], ... declared as
//!    handler arguments
//!
//! The policy is "any of": a principal passes when it holds at least one of
//! the required roles. An empty requirement denies everyone.

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use contentops_auth::{Principal, Role};
use contentops_core::AppError;
use contentops_observability::track_auth_denial;

use crate::middleware::auth::authenticate;
use crate::state::AppState;

pub const ADMIN_ROLES: &[Role] = &[Role::Owner, Role::Admin];
pub const EDITOR_ROLES: &[Role] = &[Role::Owner, Role::Admin, Role::Editor];
pub const REVIEWER_ROLES: &[Role] = &[Role::Owner, Role::Admin, Role::Reviewer];
pub const TRANSLATOR_ROLES: &[Role] = &[Role::Owner, Role::Admin, Role::Translator];
pub const CONTENT_ROLES: &[Role] = &[Role::Owner, Role::Admin, Role::Editor, Role::Reviewer];

/// Checks that the principal holds at least one of `allowed_roles`.
pub fn check_any_role(principal: &Principal, allowed_roles: &[Role]) -> Result<(), AppError> {
    if principal.has_any_role(allowed_roles) {
        return Ok(());
    }

    let required = allowed_roles
        .iter()
        .map(Role::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    warn!(
        user_id = %principal.user_id,
        organization_id = %principal.organization_id,
        required = %required,
        "Rejected request missing required role"
    );
    track_auth_denial("missing_role");

    Err(AppError::forbidden(format!(
        "Access denied. Required role: one of [{}]",
        required
    )))
}

/// Principal attached by `require_auth`, or resolved here if this gate was
/// composed without it.
pub async fn principal_from_parts(state: &AppState, parts: &mut Parts) -> Result<Principal, AppError> {
    if let Some(principal) = parts.extensions.get::<Principal>() {
        return Ok(principal.clone());
    }

    let principal = authenticate(state, parts).await?;
    parts.extensions.insert(principal.clone());
    Ok(principal)
}

/// Middleware function that lets the request through only if the principal
/// holds one of `allowed_roles`.
///
/// ```rust,ignore
/// use axum::{handler::Handler, middleware, routing::post};
///
/// let route = post(stop_automation.layer(middleware::from_fn_with_state(
///     state.clone(),
///     |state, req, next| require_roles(state, req, next, &[Role::Reviewer]),
/// )));
/// ```
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: &[Role],
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let principal = principal_from_parts(&state, &mut parts).await?;
    check_any_role(&principal, allowed_roles)?;

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Owners and admins.
pub async fn require_admin(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, ADMIN_ROLES).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Owners, admins, and editors.
pub async fn require_editor(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, EDITOR_ROLES).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Owners, admins, and reviewers.
pub async fn require_reviewer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, REVIEWER_ROLES).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Anyone who edits or reviews content.
pub async fn require_content_role(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(State(state), req, next, CONTENT_ROLES).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Declares a role-checking extractor yielding the authorized [`Principal`].
#[macro_export]
macro_rules! require_role {
    ($name:ident, $roles:expr) => {
        #[derive(Debug, Clone)]
        pub struct $name(pub contentops_auth::Principal);

        impl axum::extract::FromRequestParts<$crate::state::AppState> for $name {
            type Rejection = contentops_core::AppError;

            async fn from_request_parts(
                parts: &mut axum::http::request::Parts,
                state: &$crate::state::AppState,
            ) -> Result<Self, Self::Rejection> {
                let principal = $crate::middleware::role::principal_from_parts(state, parts).await?;
                $crate::middleware::role::check_any_role(&principal, $roles)?;
                Ok($name(principal))
            }
        }
    };
}

require_role!(RequireAdmin, ADMIN_ROLES);
require_role!(RequireEditor, EDITOR_ROLES);
require_role!(RequireReviewer, REVIEWER_ROLES);
require_role!(RequireTranslator, TRANSLATOR_ROLES);
