use crate::AppState;
use crate::error::AppError;
use crate::services::storage::object_key;
use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

const UPLOAD_FIELD: &str = "file";

#[derive(Template)]
#[template(path = "audios.html")]
pub struct AudiosTemplate {
    pub audios: Vec<String>,
}

fn redirect_to_audios() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, "/audios")]).into_response()
}

pub async fn index_redirect() -> Response {
    redirect_to_audios()
}

/// Accepts exactly one file per request under the `file` field, buffers it in
/// memory, and forwards it to the blob container under a timestamped key.
pub async fn upload_audio(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        // A form field without a filename is not a file upload
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };

        let content_type = field
            .content_type()
            .map(str::to_owned)
            .unwrap_or_else(|| mime::APPLICATION_OCTET_STREAM.to_string());

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let key = object_key(&filename);
        state
            .store
            .put_object(&key, data, &content_type)
            .await
            .map_err(|e| {
                error!("❌ Upload error: {e:#}");
                AppError::Internal("Upload to blob storage failed".to_string())
            })?;

        info!("✅ Uploaded \"{}\" as \"{}\"", filename, key);
        return Ok(redirect_to_audios());
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}

/// Renders the listing page: every object in the container, in the store's
/// native order, as a public URL.
pub async fn list_audios(State(state): State<AppState>) -> Result<AudiosTemplate, AppError> {
    let objects = state.store.list_objects().await.map_err(|e| {
        error!("❌ Error listing audios: {e:#}");
        AppError::Internal("Failed to fetch audios".to_string())
    })?;

    let audios = objects.into_iter().map(|obj| obj.url).collect();
    Ok(AudiosTemplate { audios })
}
