use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;

use crate::{
    config::GatewayConfig,
    remote::{RemoteCallResult, RemoteError, RemoteInvoker, RemoteOperation},
    utils,
};

use async_trait::async_trait;

/// Invokes remote operations through an HTTP gateway.
///
/// Every operation is exposed as `POST {base_url}/{function_name}`. The request
/// body is the serialized payload (empty when the operation takes none) and the
/// reply body is the operation's JSON envelope.
///
/// # Timeouts
///
/// The underlying client is built with the configured timeout, so a hung call
/// surfaces as a `Transport` error with code `Timeout` instead of blocking the
/// session forever.
pub struct GatewayInvoker {
    client: Client,
    config: GatewayConfig,
}

impl GatewayInvoker {
    pub fn new(config: GatewayConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self, operation: RemoteOperation) -> String {
        format!(
            "{uri}/{function}",
            uri = self.config.base_url,
            function = operation.function_name()
        )
    }
}

#[async_trait(?Send)]
impl RemoteInvoker for GatewayInvoker {
    async fn invoke(
        &self,
        operation: RemoteOperation,
        payload: Option<Vec<u8>>,
    ) -> RemoteCallResult {
        let api_url = self.endpoint(operation);
        log::debug!(
            "Invoking {} at {} ({} payload bytes)",
            operation,
            api_url,
            payload.as_ref().map_or(0, |p| p.len())
        );

        let mut request = self
            .client
            .post(&api_url)
            .header(CONTENT_TYPE, "application/json")
            .body(payload.unwrap_or_default());
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let pb = utils::spinner(&format!("Calling {}...", operation));
        let response = request.send().await;

        let response = match response {
            Ok(resp) => resp,
            Err(err) => {
                pb.finish_and_clear();
                log::debug!("{} failed before a response arrived: {}", operation, err);
                return Err(request_error(&err));
            } // network or reqwest error
        };

        let status = response.status();
        let body = response.bytes().await;
        pb.finish_and_clear();

        match body {
            Ok(body) => {
                let result = classify(operation, status.as_u16(), &body);
                log::debug!("{} answered {}: {:?}", operation, status, result.as_ref().err());
                result
            }
            Err(err) => Err(request_error(&err)),
        }
    }
}

fn request_error(err: &reqwest::Error) -> RemoteError {
    if err.is_timeout() {
        RemoteError::transport("Timeout", err.to_string())
    } else {
        RemoteError::transport("RequestFailed", err.to_string())
    }
}

/// Sorts a raw reply into success, transport failure or application failure.
///
/// The HTTP status is checked first; only a 2xx reply is parsed for
/// application fields. A top-level `errorMessage` marks an execution
/// exception raised inside the remote operation.
pub fn classify(operation: RemoteOperation, status: u16, body: &[u8]) -> RemoteCallResult {
    let parsed = serde_json::from_slice::<Value>(body);

    if !(200..300).contains(&status) {
        let message = parsed
            .as_ref()
            .ok()
            .and_then(provider_message)
            .or_else(|| {
                let text = String::from_utf8_lossy(body).trim().to_string();
                (!text.is_empty()).then_some(text)
            })
            .or_else(|| {
                StatusCode::from_u16(status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(RemoteError::transport(status.to_string(), message));
    }

    let envelope = parsed.map_err(|e| {
        RemoteError::transport(
            "MalformedResponse",
            format!("{} returned an unreadable body: {}", operation, e),
        )
    })?;

    if let Some(message) = envelope.get("errorMessage") {
        return Err(RemoteError::Application(format!(
            "Exception during {} execution: {}",
            operation,
            utils::value_text(message)
        )));
    }

    Ok(envelope)
}

fn provider_message(body: &Value) -> Option<String> {
    ["errorMessage", "message", "Message"]
        .iter()
        .find_map(|key| body.get(*key))
        .map(utils::value_text)
}
