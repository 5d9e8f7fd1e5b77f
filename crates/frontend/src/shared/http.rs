//! HTTP plumbing shared by the session store and every screen.
//!
//! `ApiClient` owns the default bearer credential: once the session store sets
//! it, every request made through any clone of the client carries it.

use async_trait::async_trait;
use gloo_net::http::Request;
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use super::api_utils::join_url;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not authorized")]
    Unauthorized,
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to serialize request: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends a request and returns the raw response.
///
/// Only transport failures are errors here; status handling is left to
/// `ApiClient`.
#[async_trait(?Send)]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// `fetch`-backed transport used in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl Transport for BrowserTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Delete => Request::delete(&request.url),
        };
        if let Some(token) = &request.bearer {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}

/// Client bound to the fixed backend origin.
#[derive(Clone)]
pub struct ApiClient {
    origin: Arc<str>,
    transport: Arc<dyn Transport>,
    default_token: ArcRwSignal<Option<String>>,
}

impl ApiClient {
    pub fn new(origin: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            origin: Arc::from(origin),
            transport,
            default_token: ArcRwSignal::new(None),
        }
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.origin, path)
    }

    /// Attach `token` as the bearer credential of all subsequent requests.
    pub fn set_default_token(&self, token: &str) {
        self.default_token.set(Some(token.to_string()));
    }

    pub fn clear_default_token(&self) {
        self.default_token.set(None);
    }

    pub fn default_token(&self) -> Option<String> {
        self.default_token.get_untracked()
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let body = self.send(Method::Get, path, None).await?;
        decode(&body)
    }

    pub async fn post_json<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let encoded = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        let body = self.send(Method::Post, path, Some(encoded)).await?;
        decode(&body)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(Method::Delete, path, None).await.map(|_| ())
    }

    async fn send(&self, method: Method, path: &str, body: Option<String>) -> Result<String, ApiError> {
        let request = HttpRequest {
            method,
            url: self.url(path),
            bearer: self.default_token(),
            body,
        };
        let response = self.transport.send(request).await?;
        match response.status {
            200..=299 => Ok(response.body),
            401 => Err(ApiError::Unauthorized),
            status => Err(ApiError::Status(status)),
        }
    }
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    // Some endpoints answer 204 / empty bodies; treat those as JSON null.
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
