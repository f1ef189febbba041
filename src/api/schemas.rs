// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

use crate::modules::portfolio::domain::ContentSource;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "experience[0].start_date: is required")]
    pub message: String,
}

/// A content section together with the store it came from
#[derive(Serialize, ToSchema)]
pub struct SectionResponse {
    /// Section content; its shape depends on the section
    #[schema(value_type = Object)]
    pub content: serde_json::Value,

    pub source: ContentSource,
}

/// Result of a section save
#[derive(Serialize, ToSchema)]
pub struct SaveResponse {
    /// The content as stored, with minted ids
    #[schema(value_type = Object)]
    pub content: serde_json::Value,

    /// `database`, or `fallback` while the database is unreachable
    pub stored_in: ContentSource,

    /// Repeated names removed before saving
    #[schema(example = json!(["rust"]))]
    pub dropped_duplicates: Vec<String>,
}
