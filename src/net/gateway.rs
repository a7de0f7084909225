//! Single point of egress to the EduAgent backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every view-initiated call funnels through `ApiGateway` so bearer-token
//! attachment and the 401 invalidation policy live in exactly one place.
//! The gateway never retries, queues, or coalesces; concurrent calls are
//! independent and unordered.
//!
//! On a 401 the gateway clears the persisted token and bumps its
//! `unauthorized` epoch signal. The root application watches that signal
//! and performs the session teardown + redirect, which keeps the gateway
//! free of any navigation dependency and fires even when the view that
//! issued the request has already unmounted.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "gateway_test.rs"]
mod gateway_test;

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::util::token_store;

/// HTTP methods the backend surface uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    #[cfg(not(feature = "hydrate"))]
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// Backend base address compiled in via `EDUAGENT_API_URL`; empty means
/// same-origin relative paths.
fn compiled_base() -> String {
    option_env!("EDUAGENT_API_URL")
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_owned()
}

/// Outbound HTTP client for the backend API.
///
/// Cheap to clone; construct once in `App` and share via context.
#[derive(Clone)]
pub struct ApiGateway {
    base: String,
    unauthorized: RwSignal<u64>,
}

impl Default for ApiGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiGateway {
    /// Gateway against the compiled-in base address.
    pub fn new() -> Self {
        Self::with_base(compiled_base())
    }

    /// Gateway against an explicit base address (no trailing slash).
    pub fn with_base(base: String) -> Self {
        Self { base, unauthorized: RwSignal::new(0) }
    }

    /// Epoch signal bumped once per 401 response. The root application
    /// wires this to session teardown and navigation exactly once.
    pub fn unauthorized_epoch(&self) -> RwSignal<u64> {
        self.unauthorized
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Get, path, None).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::Post, path, Some(encode_body(body)?)).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.request(Method::Put, path, Some(encode_body(body)?)).await
    }

    pub(crate) async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::Put, path, None).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let token = token_store::load();
        let url = self.url(path);
        let (status, payload) = self.transport(method, &url, token.as_deref(), body).await?;

        if status == 401 {
            token_store::clear();
            self.unauthorized.update(|epoch| *epoch += 1);
            return Err(ApiError::Unauthorized);
        }
        if !(200..300).contains(&status) {
            return Err(ApiError::failure(status, &payload));
        }
        serde_json::from_value(payload).map_err(|_| ApiError::Decode)
    }

    #[cfg(feature = "hydrate")]
    async fn transport(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, serde_json::Value), ApiError> {
        let builder = match method {
            Method::Get => gloo_net::http::Request::get(url),
            Method::Post => gloo_net::http::Request::post(url),
            Method::Put => gloo_net::http::Request::put(url),
        };
        let builder = match token {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        };
        let request = match body {
            Some(body) => builder.json(&body).map_err(|e| ApiError::Network(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let payload = response
            .text()
            .await
            .ok()
            .filter(|text| !text.is_empty())
            .and_then(|text| serde_json::from_str(&text).ok())
            .unwrap_or(serde_json::Value::Null);
        Ok((status, payload))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn transport(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, serde_json::Value), ApiError> {
        #[cfg(test)]
        {
            testing::respond(method.as_str(), url, token, body)
        }
        #[cfg(not(test))]
        {
            let _ = (method, url, token, body);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}

fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Network(format!("failed to encode request: {e}")))
}

/// Scripted transport for native tests: responses are dequeued in order
/// and every observed request is recorded for assertion.
#[cfg(all(test, not(feature = "hydrate")))]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::ApiError;

    /// A request the scripted transport observed.
    #[derive(Clone, Debug)]
    pub struct RecordedRequest {
        pub method: String,
        pub url: String,
        pub token: Option<String>,
        pub body: Option<serde_json::Value>,
    }

    thread_local! {
        static SCRIPT: RefCell<VecDeque<(u16, serde_json::Value)>> =
            const { RefCell::new(VecDeque::new()) };
        static RECORDED: RefCell<Vec<RecordedRequest>> = const { RefCell::new(Vec::new()) };
    }

    /// Queue the next response the transport will produce.
    pub fn enqueue(status: u16, body: serde_json::Value) {
        SCRIPT.with(|script| script.borrow_mut().push_back((status, body)));
    }

    /// Drop scripted responses and recorded requests. Tests run on their
    /// own threads, so this only matters within a single test.
    pub fn reset() {
        SCRIPT.with(|script| script.borrow_mut().clear());
        RECORDED.with(|recorded| recorded.borrow_mut().clear());
    }

    /// Requests observed since the last `reset`.
    pub fn recorded() -> Vec<RecordedRequest> {
        RECORDED.with(|recorded| recorded.borrow().clone())
    }

    pub(super) fn respond(
        method: &str,
        url: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> Result<(u16, serde_json::Value), ApiError> {
        RECORDED.with(|recorded| {
            recorded.borrow_mut().push(RecordedRequest {
                method: method.to_owned(),
                url: url.to_owned(),
                token: token.map(ToOwned::to_owned),
                body,
            });
        });
        SCRIPT
            .with(|script| script.borrow_mut().pop_front())
            .ok_or_else(|| ApiError::Network("no scripted response".to_owned()))
    }
}
