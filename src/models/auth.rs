use serde::{Deserialize, Serialize};

use super::UserProfile;

/// Body of `POST /api/auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Successful (2xx) login body. `token` stays optional so a 2xx without a
/// token can be reported instead of failing to parse.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
    #[serde(default)]
    pub message: Option<String>,
}
