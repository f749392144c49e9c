use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::BodyExt;

use crate::shared::error::InteractionError;
use crate::shared::structs::AppState;

// HeaderMap lookups are case-insensitive.
const SIGNATURE_HEADER: &str = "x-signature-ed25519";
const TIMESTAMP_HEADER: &str = "x-signature-timestamp";

const SIGNATURE_LENGTH: usize = 64;
const PUBLIC_KEY_LENGTH: usize = 32;

pub async fn validate_interaction(
    State(app_state): State<AppState>,
    headers: HeaderMap,
    request: axum::extract::Request,
    next: Next,
) -> Response {
    let (Some(signature), Some(timestamp)) = (
        header_value(&headers, SIGNATURE_HEADER),
        header_value(&headers, TIMESTAMP_HEADER),
    ) else {
        tracing::warn!("Rejected interaction without signature headers.");
        return InteractionError::Verification.into_response();
    };

    match buffer_request_body(
        request,
        &signature,
        &timestamp,
        &app_state.config.application_public_key,
    )
    .await
    {
        Ok(request) => next.run(request).await,
        Err(e) => e,
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().map(ToString::to_string).ok())
}

async fn buffer_request_body(
    request: axum::extract::Request,
    signature: &str,
    timestamp: &str,
    public_key: &str,
) -> Result<axum::extract::Request, Response> {
    let (parts, body) = request.into_parts();

    let bytes = body
        .collect()
        .await
        .map_err(|e| {
            let error_msg = format!("Internal server error when collecting body bytes: {e:?}");
            tracing::error!("{}", &error_msg);
            (StatusCode::INTERNAL_SERVER_ERROR, error_msg).into_response()
        })?
        .to_bytes();

    if verify(timestamp, &bytes, signature, public_key) {
        Ok(axum::extract::Request::from_parts(parts, Body::from(bytes)))
    } else {
        tracing::warn!("Rejected interaction with invalid signature.");
        Err(InteractionError::Verification.into_response())
    }
}

/// Checks a detached Ed25519 signature over `timestamp` followed by `body`.
///
/// Malformed hex or wrong lengths fail verification instead of erroring.
pub fn verify(timestamp: &str, body: &Bytes, signature_hex: &str, public_key_hex: &str) -> bool {
    let (Ok(signature_bytes), Ok(public_key_bytes)) =
        (hex::decode(signature_hex), hex::decode(public_key_hex))
    else {
        return false;
    };

    if signature_bytes.len() != SIGNATURE_LENGTH || public_key_bytes.len() != PUBLIC_KEY_LENGTH {
        return false;
    }

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    match nacl::sign::verify(&signature_bytes, &message, &public_key_bytes) {
        Ok(res) => res,
        Err(e) => {
            tracing::error!("Failed to verify: {e:?}");
            false
        }
    }
}
