use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_empty;

// Credenciales para registro y login
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(max = 255), custom = "validate_not_empty")]
    pub username: String,

    #[validate(length(min = 1, max = 72, message = "password must be between 1 and 72 characters"))]
    pub password: String,
}
