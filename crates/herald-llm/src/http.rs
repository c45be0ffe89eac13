//! Status handling for chat-completions responses.
//!
//! OpenAI-compatible servers report failures as
//! `{"error": {"message": "...", "type": "...", "code": ...}}`. The message
//! is lifted into [`LlmError::Api`]; bodies of any other shape are passed
//! through trimmed.

use serde::Deserialize;

use crate::error::LlmError;

/// Used when a 429 carries no parsable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
}

/// Map a non-success response to an [`LlmError`]; successes pass through.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, LlmError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(LlmError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(LlmError::Api {
            status: status.as_u16(),
            message: api_error_message(&body),
        });
    }
    Ok(resp)
}

/// The server's own error message when the body is an error envelope.
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope {
            error: ErrorBody {
                message,
                kind: Some(kind),
            },
        }) => format!("{message} ({kind})"),
        Ok(envelope) => envelope.error.message,
        Err(_) => body.trim().to_string(),
    }
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const INVALID_KEY: &str = r#"{
        "error": {
            "message": "Incorrect API key provided: sk-test. You can find your API key at https://platform.openai.com/account/api-keys.",
            "type": "invalid_request_error",
            "param": null,
            "code": "invalid_api_key"
        }
    }"#;

    fn response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn rate_limited(retry_after: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("Retry-After", retry_after)
                .body("")
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn error_envelope_message_is_extracted() {
        let err = check_response(response(401, INVALID_KEY)).await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(
                    message,
                    "Incorrect API key provided: sk-test. You can find your API key at https://platform.openai.com/account/api-keys. (invalid_request_error)"
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn envelope_without_type_keeps_bare_message() {
        assert_eq!(
            api_error_message(r#"{"error": {"message": "model overloaded"}}"#),
            "model overloaded"
        );
    }

    #[tokio::test]
    async fn non_json_body_is_passed_through() {
        let err = check_response(response(502, "  Bad Gateway\n")).await.unwrap_err();
        assert!(
            matches!(&err, LlmError::Api { status: 502, message } if message == "Bad Gateway"),
            "{err}"
        );
    }

    #[tokio::test]
    async fn rate_limit_reads_retry_after() {
        let err = check_response(rate_limited("120")).await.unwrap_err();
        assert!(matches!(err, LlmError::RateLimited { retry_after_secs: 120 }));

        let err = check_response(rate_limited("soon")).await.unwrap_err();
        assert!(matches!(
            err,
            LlmError::RateLimited {
                retry_after_secs: DEFAULT_RETRY_AFTER_SECS
            }
        ));
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(check_response(response(200, "{}")).await.is_ok());
    }
}
