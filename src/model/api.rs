use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Field-level validation errors keyed by field name.
///
/// Request-wide problems (malformed bodies) are reported under `non_field_errors`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldErrorsDto(pub BTreeMap<String, Vec<String>>);
