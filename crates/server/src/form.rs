//! Form value resolution.
//!
//! A field can arrive in a form body (`application/x-www-form-urlencoded`, or
//! `multipart/form-data` with the `multipart` feature) or in the query string.
//! When both carry the key, the body wins, even if the body value is empty.
//! Only the first occurrence of a key is considered.

use crate::error::{ServerError, ServerResult};
use axum::extract::Request;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method};
use http_body_util::LengthLimitError;
use url::form_urlencoded;

const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";
#[cfg(feature = "multipart")]
const FORM_MULTIPART: &str = "multipart/form-data";

/// Body encodings that can carry form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormBody {
    UrlEncoded,
    #[cfg(feature = "multipart")]
    Multipart,
    Absent,
}

/// Resolves `key` from the request body and query string.
///
/// The body is read (up to `limit` bytes) only for methods that carry one and
/// only when it is declared as a form; anything else falls through to the
/// query string. Returns `Ok(None)` when neither source has the key.
pub async fn resolve_form_value(
    request: Request,
    key: &str,
    limit: usize,
) -> ServerResult<Option<String>> {
    let uri = request.uri().clone();

    let from_body = match form_body(request.method(), request.headers()) {
        FormBody::UrlEncoded => {
            let bytes = axum::body::to_bytes(request.into_body(), limit)
                .await
                .map_err(|err| body_error(err, limit))?;
            first_value(&bytes, key)
        }
        #[cfg(feature = "multipart")]
        FormBody::Multipart => multipart_value(request, key, limit).await?,
        FormBody::Absent => None,
    };

    if from_body.is_some() {
        return Ok(from_body);
    }

    Ok(uri.query().and_then(|query| first_value(query.as_bytes(), key)))
}

/// First value for `key` in an urlencoded byte string, percent-decoded.
///
/// Pairs with a malformed percent escape or a `;` in the key are dropped.
/// Invalid UTF-8 after decoding is replaced with U+FFFD.
fn first_value(input: &[u8], key: &str) -> Option<String> {
    input
        .split(|&b| b == b'&')
        .filter(|pair| well_formed(pair))
        .filter_map(|pair| form_urlencoded::parse(pair).next())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

fn well_formed(pair: &[u8]) -> bool {
    let key_end = pair.iter().position(|&b| b == b'=').unwrap_or(pair.len());
    if pair[..key_end].contains(&b';') {
        return false;
    }

    let mut i = 0;
    while i < pair.len() {
        if pair[i] != b'%' {
            i += 1;
            continue;
        }
        match pair.get(i + 1..i + 3) {
            Some(hex) if hex.iter().all(u8::is_ascii_hexdigit) => i += 3,
            _ => return false,
        }
    }
    true
}

fn form_body(method: &Method, headers: &HeaderMap) -> FormBody {
    if !matches!(*method, Method::POST | Method::PUT | Method::PATCH) {
        return FormBody::Absent;
    }

    let essence = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::trim)
        .unwrap_or_default();

    if essence.eq_ignore_ascii_case(FORM_URLENCODED) {
        return FormBody::UrlEncoded;
    }
    #[cfg(feature = "multipart")]
    if essence.eq_ignore_ascii_case(FORM_MULTIPART) {
        return FormBody::Multipart;
    }
    FormBody::Absent
}

fn body_error(err: axum::Error, limit: usize) -> ServerError {
    if err.into_inner().is::<LengthLimitError>() {
        ServerError::PayloadTooLarge(limit)
    } else {
        ServerError::BadRequest("failed to read request body".to_string())
    }
}

/// First non-file multipart field named `key`.
///
/// The body cap comes from the router's `DefaultBodyLimit`; `limit` is only
/// reported back in the 413 error.
#[cfg(feature = "multipart")]
async fn multipart_value(
    request: Request,
    key: &str,
    limit: usize,
) -> ServerResult<Option<String>> {
    use axum::extract::multipart::MultipartError;
    use axum::extract::{FromRequest, Multipart};
    use axum::http::StatusCode;

    let multipart_error = |err: MultipartError| {
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge(limit)
        } else {
            ServerError::BadRequest(err.body_text())
        }
    };

    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.file_name().is_some() || field.name() != Some(key) {
            continue;
        }
        return field.text().await.map(Some).map_err(multipart_error);
    }

    Ok(None)
}
