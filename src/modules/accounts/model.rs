use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use contentops_auth::Role;

/// Fields of the caller's account that may be changed. Omitted fields are
/// left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountDto {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    /// BCP 47 tag of the language new content is written in
    #[validate(length(min = 2, max = 35, message = "default_language must be a language tag"))]
    pub default_language: Option<String>,
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct InviteMemberDto {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "at least one role must be granted"))]
    pub roles: Vec<Role>,
}
