use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Public representation of an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AccountDto {
    pub id: i32,
    pub username: String,
}

/// Registration request body.
///
/// Both fields are optional at the wire level so that missing fields are reported as
/// field errors rather than as a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Query string of the account lookup endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AccountQueryDto {
    /// Id of the account to look up.
    pub user_id: Option<String>,
}
