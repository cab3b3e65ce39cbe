use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Tokens issued by a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenPairDto {
    pub access: String,
    pub refresh: String,
    pub user_id: i32,
}

/// Refresh request body. When `refresh` is omitted the `refresh_token` cookie is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RefreshDto {
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Tokens issued by a refresh. `refresh` is only present when rotation is enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RefreshedTokenDto {
    pub access: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<String>,
}
