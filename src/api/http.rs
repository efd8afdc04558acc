//! JSON-over-HTTP transport on the browser fetch API.

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortSignal, Request, RequestInit, Response};

use crate::error::ServiceError;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpClient {
    base_url: String,
    timeout_ms: u32,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_ms,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let body = self.send("GET", path, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    pub async fn post_json<B, T>(&self, path: &str, payload: &B) -> Result<T, ServiceError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let json = serde_json::to_string(payload)?;
        let body = self.send("POST", path, Some(json)).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// POST without a request body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let body = self.send("POST", path, None).await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn send(&self, method: &str, path: &str, body: Option<String>) -> Result<String, ServiceError> {
        let window = web_sys::window().ok_or(ServiceError::Unavailable)?;
        let url = self.url(path);
        debug!("{} {}", method, url);

        let init = RequestInit::new();
        init.set_method(method);
        if let Some(json) = &body {
            init.set_body(&JsValue::from_str(json));
        }
        if self.timeout_ms > 0 {
            let signal = AbortSignal::timeout_with_u32(self.timeout_ms);
            init.set_signal(Some(&signal));
        }
        let request = Request::new_with_str_and_init(&url, &init).map_err(transport)?;
        if body.is_some() {
            request
                .headers()
                .set("Content-Type", "application/json")
                .map_err(transport)?;
        }

        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let response: Response = value.dyn_into().map_err(transport)?;
        let text = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?
            .as_string()
            .unwrap_or_default();
        if !response.ok() {
            return Err(ServiceError::Status {
                status: response.status(),
                body: text,
            });
        }
        Ok(text)
    }
}

fn transport(err: JsValue) -> ServiceError {
    let msg = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    ServiceError::Transport(msg)
}
