use std::ops::Deref;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tracing::warn;

use contentops_auth::Principal;
use contentops_core::AppError;
use contentops_observability::track_auth_denial;

use crate::state::AppState;

/// Resolves the caller or fails with 401.
pub(crate) async fn authenticate(state: &AppState, parts: &Parts) -> Result<Principal, AppError> {
    match state.resolver.resolve(parts).await? {
        Some(principal) => Ok(principal),
        None => {
            warn!(
                method = %parts.method,
                path = %parts.uri.path(),
                "Rejected unauthenticated request"
            );
            track_auth_denial("unauthenticated");
            Err(AppError::unauthorized("Authentication required"))
        }
    }
}

/// Authentication gate.
///
/// Attaches the resolved [`Principal`] to the request extensions before the
/// inner handler runs; unauthenticated requests never reach it.
pub async fn require_auth(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let principal = authenticate(&state, &parts).await?;
    parts.extensions.insert(principal);

    Ok(next.run(Request::from_parts(parts, body)).await)
}

/// Extractor for the principal attached by [`require_auth`].
#[derive(Debug, Clone)]
pub struct CurrentPrincipal(pub Principal);

impl Deref for CurrentPrincipal {
    type Target = Principal;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for CurrentPrincipal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(CurrentPrincipal)
            .ok_or_else(|| AppError::unauthorized("Authentication required"))
    }
}
