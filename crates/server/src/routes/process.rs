use crate::error::{ServerError, ServerResult};
use crate::form::resolve_form_value;
use crate::state::ServerState;
use axum::extract::{Request, State};
use axum::http::Method;
use std::sync::Arc;

/// Form field carrying the text to normalize.
pub const TEXT_FIELD: &str = "text";

/// Normalize the whitespace of the `text` form field.
///
/// Registered for every method so the method check runs first and answers
/// with a plain-text body:
///
/// 1. method is not `POST` → 405 `Method not allowed`
/// 2. `text` absent or empty (body first, then query string) → 400
///    `No text provided`
/// 3. otherwise 200 with the normalized text, written verbatim
///
/// # Example
/// ```text
/// POST /process
/// Content-Type: application/x-www-form-urlencoded
///
/// text=hello%20%20%20world
///
/// 200 OK
/// hello world
/// ```
pub async fn process_text(
    State(state): State<Arc<ServerState>>,
    request: Request,
) -> ServerResult<String> {
    if *request.method() != Method::POST {
        return Err(ServerError::MethodNotAllowed);
    }

    let text = resolve_form_value(request, TEXT_FIELD, state.config.max_body_size())
        .await?
        .unwrap_or_default();

    Ok(textproc::process_text(&text)?)
}
