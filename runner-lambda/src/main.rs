use anyhow::Context as _;
use greeter_core::config::load_config;
use greeter_core::telemetry::init_tracing;
use greeter_core::{InboundEvent, Response, handle};
use lambda_runtime::{Error, LambdaEvent, service_fn};
use tracing::info;

/// Optional path to a YAML config file; falls back to `GREETER_CONFIG`.
const CONFIG_PATH_ENV: &str = "GREETER_CONFIG_PATH";

pub async fn lambda_handler(event: LambdaEvent<InboundEvent>) -> Result<Response, Error> {
    let (request, context) = event.into_parts();
    let response = handle(&request);
    info!(
        request_id = %context.request_id,
        status = response.status_code,
        "Handled greeting request"
    );
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config = load_config(config_path.as_deref())
        .context("Failed to load greeter configuration")?;
    init_tracing(&config.telemetry);

    lambda_runtime::run(service_fn(lambda_handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    async fn invoke(payload: serde_json::Value) -> Response {
        let request: InboundEvent = serde_json::from_value(payload).unwrap();
        lambda_handler(LambdaEvent::new(request, Context::default()))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_english_greeting() {
        let response = invoke(json!({"queryStringParameters": {"lang": "en"}})).await;

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"statusCode": 200, "body": "{\"message\": \"Hello World\"}"})
        );
    }

    #[tokio::test]
    async fn test_null_query_parameters() {
        let response = invoke(json!({"queryStringParameters": null})).await;
        assert_eq!(response.status_code, 422);
    }

    #[tokio::test]
    async fn test_wrongly_typed_query_parameters() {
        for params in [json!("abc"), json!(["en"]), json!(3)] {
            let response = invoke(json!({"queryStringParameters": params})).await;
            assert_eq!(response.status_code, 422);
        }
    }

    #[tokio::test]
    async fn test_non_string_values_ignored() {
        let response = invoke(json!({"queryStringParameters": {"lang": "en", "page": 2}})).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message": "Hello World"}"#);

        let response = invoke(json!({"queryStringParameters": {"lang": null}})).await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.body, r#"{"message": "Unsupported language"}"#);
    }

    #[tokio::test]
    async fn test_repeated_invocations_are_identical() {
        let payload = json!({"queryStringParameters": {"lang": "es"}});
        let first = invoke(payload.clone()).await;
        let second = invoke(payload).await;
        assert_eq!(first, second);
    }
}
