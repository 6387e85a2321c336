use serde::Serialize;
use utoipa::ToSchema;

/// Response returned by the file upload endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Relative public path where the uploaded file is served from.
    pub path: String,
}
