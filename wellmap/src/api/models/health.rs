use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness payload. Constant; never consults the database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = true)]
    pub ok: bool,
    #[schema(example = "API is running")]
    pub message: String,
}

impl HealthResponse {
    pub fn running() -> Self {
        Self {
            ok: true,
            message: "API is running".to_string(),
        }
    }
}
