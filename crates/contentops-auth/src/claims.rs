//! Claims carried by the session token.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::principal::{Principal, Role};

/// JWT claims stored in the session cookie.
///
/// Roles travel as plain strings so that a token minted by a newer identity
/// provider with roles this service does not know still decodes; unknown
/// names are dropped when the claims become a [`Principal`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// User ID (subject claim)
    pub sub: Uuid,
    /// Organization the session is scoped to
    pub org: Uuid,
    /// Account inside the organization, if one is selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acct: Option<Uuid>,
    pub email: String,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl From<SessionClaims> for Principal {
    fn from(claims: SessionClaims) -> Self {
        let roles: BTreeSet<Role> = claims
            .roles
            .iter()
            .filter_map(|name| name.parse().ok())
            .collect();

        Self {
            user_id: claims.sub,
            organization_id: claims.org,
            account_id: claims.acct,
            email: claims.email,
            roles,
        }
    }
}
