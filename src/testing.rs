//! In-process transport used by unit tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::clients::{HttpError, HttpMethod, HttpResponse, HttpTransport};
use crate::config::{ApiToken, LinodeConfig};
use crate::rest::LinodeClient;

#[derive(Clone, Debug)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug)]
struct Route {
    method: HttpMethod,
    path: String,
    code: u16,
    body: serde_json::Value,
}

/// Records every call and answers from canned routes.
///
/// A route matches when the method is equal and the URL ends with its path.
/// Unmatched calls get `200 {}`.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    routes: Mutex<Vec<Route>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_with(&self, method: HttpMethod, path: &str, body: serde_json::Value) {
        self.respond_with_status(method, path, 200, body);
    }

    pub fn respond_with_status(
        &self,
        method: HttpMethod,
        path: &str,
        code: u16,
        body: serde_json::Value,
    ) {
        self.routes.lock().unwrap().push(Route {
            method,
            path: path.to_string(),
            code,
            body,
        });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_with(&self, method: HttpMethod) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.method == method)
            .count()
    }
}

impl HttpTransport for RecordingTransport {
    fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<&serde_json::Value>,
    ) -> Result<HttpResponse, HttpError> {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url: url.to_string(),
            headers: headers.clone(),
            body: body.cloned(),
        });

        let routes = self.routes.lock().unwrap();
        let (code, body) = routes
            .iter()
            .find(|route| route.method == method && url.ends_with(&route.path))
            .map_or((200, serde_json::json!({})), |route| {
                (route.code, route.body.clone())
            });

        Ok(HttpResponse::new(code, HashMap::new(), body))
    }
}

/// Builds a client with token `test-token` over `transport`.
pub fn client_with(transport: Arc<RecordingTransport>) -> LinodeClient {
    let config = LinodeConfig::builder()
        .token(ApiToken::new("test-token").unwrap())
        .build()
        .unwrap();
    LinodeClient::with_transport(&config, transport)
}
