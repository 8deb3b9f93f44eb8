//! `HttpService`: build, execute and parse in one call.

use serde_json::Value;

use crate::client::{build_request, parse_response};
use crate::error::ApiError;
use crate::http::HttpMethod;
use crate::transport::Transport;
use crate::types::Params;

/// One network round-trip per `request`. No retries, no timeout, no caching.
#[derive(Debug, Clone)]
pub struct HttpService<T> {
    transport: T,
}

impl<T: Transport> HttpService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn request(&self, path: &str, params: &Params, method: HttpMethod) -> Result<Value, ApiError> {
        let request = build_request(path, params, method)?;
        tracing::debug!(method = method.as_str(), url = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        parse_response(response)
    }

    pub async fn get(&self, path: &str, params: &Params) -> Result<Value, ApiError> {
        self.request(path, params, HttpMethod::Get).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transport::fake::RecordingTransport;

    #[tokio::test]
    async fn request_unwraps_envelope_from_transport() {
        let service = HttpService::new(RecordingTransport::new().respond(200, r#"{"data":{"id":1}}"#));
        let value = service.get("http://h/api/users/1", &Params::new()).await.unwrap();
        assert_eq!(value, json!({"id": 1}));
        assert_eq!(service.transport().request_count(), 1);
    }

    #[tokio::test]
    async fn request_surfaces_status_failure() {
        let service = HttpService::new(RecordingTransport::new().respond(404, "{}"));
        let err = service.get("http://h/api/users/99", &Params::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::Network { status: 404, .. }));
    }

    #[tokio::test]
    async fn get_sends_no_body() {
        let service = HttpService::new(RecordingTransport::new().respond(200, "[]"));
        service.get("http://h/api/users", &Params::new()).await.unwrap();
        let sent = service.transport().requests();
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert!(sent[0].body.is_none());
    }

    #[tokio::test]
    async fn transport_failure_propagates() {
        let service = HttpService::new(RecordingTransport::new());
        let err = service.get("http://h/api/users", &Params::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }
}
