//! Request gating.
//!
//! Every authenticated route runs through two composable wrappers:
//!
//! 1. [`auth::require_auth`] resolves the session into a
//!    [`Principal`](contentops_auth::Principal) and attaches it to the
//!    request, or short-circuits with 401.
//! 2. [`role::require_roles`] (through helpers such as
//!    [`role::require_admin`]) short-circuits with 403 unless the principal
//!    holds at least one of the required roles.
//!
//! Handlers read the principal with the [`auth::CurrentPrincipal`]
//! extractor, which itself rejects with 401 when nothing is attached, so a
//! handler can never run with an anonymous caller.
//!
//! ```ignore
//! use axum::{handler::Handler, middleware, routing::patch};
//!
//! let route = authenticated(
//!     &state,
//!     patch(update_account.layer(middleware::from_fn_with_state(state.clone(), require_admin))),
//! );
//! ```

pub mod auth;
pub mod role;
pub mod session;
