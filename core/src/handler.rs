use tracing::{debug, warn};

use crate::body::encode_body;
use crate::catalog::MessageCatalog;
use crate::errors::{GreeterError, Result};
use crate::event::{ErrorBody, InboundEvent, LANG_PARAM, MessageBody, Response};

const QUERY_PARAMS_FIELD: &str = "queryStringParameters";

/// Returned only if a body cannot be encoded.
const INTERNAL_ERROR_BODY: &str = r#"{"error": "Encoding", "message": "Internal Server Error"}"#;

static CATALOG: MessageCatalog = MessageCatalog::new();

/// Resolves the language code carried by `event`.
///
/// A missing `lang` key resolves to the empty code; only a missing
/// query-parameters container is an error.
pub fn language_code(event: &InboundEvent) -> Result<&str> {
    let params = event
        .query_string_parameters
        .as_ref()
        .ok_or_else(|| GreeterError::MalformedRequest {
            field: QUERY_PARAMS_FIELD.to_string(),
        })?;

    Ok(params.get(LANG_PARAM).map(String::as_str).unwrap_or(""))
}

/// Handles one greeting request. Never fails: every outcome is a [`Response`].
pub fn handle(event: &InboundEvent) -> Response {
    match greet(event) {
        Ok(response) => response,
        Err(err) => error_response(&err),
    }
}

fn greet(event: &InboundEvent) -> Result<Response> {
    let code = language_code(event)?;
    let message = CATALOG.lookup(code);
    debug!(lang = code, supported = CATALOG.supports(code), "Resolved greeting");

    Ok(Response {
        status_code: 200,
        body: encode_body(&MessageBody { message })?,
    })
}

fn error_response(err: &GreeterError) -> Response {
    warn!(error = %err, status = err.status_code(), "Rejecting request");

    let message = err.to_string();
    let body = encode_body(&ErrorBody {
        error: err.kind(),
        message: &message,
    })
    .unwrap_or_else(|_| INTERNAL_ERROR_BODY.to_string());

    Response {
        status_code: err.status_code(),
        body,
    }
}
