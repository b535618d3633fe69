use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse};

use quotation_core::adapter::adapt;
use quotation_core::form::FormFields;

use crate::error::ApiError;
use crate::state::AppState;

const FORM_PAGE: &str = include_str!("../../assets/index.html");

/// Serve the quotation entry form.
pub async fn index_form() -> Html<&'static str> {
    Html(FORM_PAGE)
}

/// Generate a quotation from a url-encoded form and return it as a download.
///
/// The PDF stays in the output directory afterwards.
pub async fn generate_quotation(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let fields: FormFields = url::form_urlencoded::parse(&body).into_owned().collect();
    let request = adapt(&fields)?;

    let path = state.output.next_path();
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ApiError::Internal(format!("bad output path {}", path.display())))?
        .to_string();

    let renderer = Arc::clone(&state.renderer);
    let dest = path.clone();
    tokio::task::spawn_blocking(move || renderer.render(&request, &dest))
        .await
        .map_err(|e| ApiError::Internal(format!("render task failed: {e}")))??;

    let pdf = tokio::fs::read(&path).await?;
    tracing::info!(file = %file_name, bytes = pdf.len(), "quotation generated");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        pdf,
    ))
}
