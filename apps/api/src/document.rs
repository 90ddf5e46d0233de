//! Document text extraction for uploaded resumes.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Extracts plain text from PDF bytes on the blocking pool.
///
/// A parser error, a parser panic, or a document with no extractable text
/// are all reported as `AppError::Extraction`.
pub async fn extract_text(bytes: Bytes) -> Result<String, AppError> {
    let size = bytes.len();

    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Extraction(format!("PDF extraction aborted: {e}")))?
        .map_err(|e| AppError::Extraction(format!("Failed to extract text from PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction(
            "Failed to extract text from PDF".to_string(),
        ));
    }

    debug!("Extracted {} chars from {size}-byte document", text.len());
    Ok(text)
}
