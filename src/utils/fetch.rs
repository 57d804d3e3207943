//! Catalog access over the browser Fetch API.
//!
//! Every request races a timer so a hung connection surfaces as
//! [`FetchError::Timeout`] instead of a spinner that never stops.

use js_sys::{Array, Promise};
use storefront_core::api::{decode_categories, decode_product, decode_products};
use storefront_core::{CatalogError, CatalogSource, Endpoint, FilterKey, Product, ProductId, StorefrontConfig};
use tracing::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response, Window};

use crate::error::FetchError;

// =============================================================================
// Transport
// =============================================================================

/// Await `promise`, giving up after `timeout_ms`.
///
/// The timer resolves with `undefined`, which a fetch never does.
async fn settle_within(window: &Window, promise: Promise, timeout_ms: i32) -> Result<JsValue, FetchError> {
    let timer = Promise::new(&mut |resolve, _reject| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let value = JsFuture::from(Promise::race(&Array::of2(&promise, &timer)))
        .await
        .map_err(|err| FetchError::Network(rejection_message(&err)))?;

    if value.is_undefined() {
        Err(FetchError::Timeout)
    } else {
        Ok(value)
    }
}

/// Fetch rejects with a `TypeError`, so prefer its message over the raw value.
fn rejection_message(err: &JsValue) -> String {
    err.dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| "request rejected".to_string())
}

/// GET `url` and return the body as text.
async fn get_text(url: &str, timeout_ms: i32) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request =
        Request::new_with_str_and_init(url, &init).map_err(|_| FetchError::RequestCreationFailed)?;

    let response: Response = settle_within(&window, window.fetch_with_request(&request), timeout_ms)
        .await?
        .dyn_into()
        .map_err(|_| FetchError::InvalidContent)?;
    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    let body = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(body)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}

// =============================================================================
// HttpCatalog
// =============================================================================

/// Remote catalog reached over the browser Fetch API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    timeout_ms: i32,
}

impl HttpCatalog {
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            timeout_ms: config.fetch_timeout_ms,
        }
    }

    async fn get(&self, endpoint: &Endpoint) -> Result<String, FetchError> {
        let url = endpoint.url(&self.base_url);
        debug!(%url, "GET");
        get_text(&url, self.timeout_ms).await
    }
}

impl CatalogSource for HttpCatalog {
    async fn products(&self, key: &FilterKey) -> Result<Vec<Product>, CatalogError> {
        let body = self.get(&Endpoint::for_key(key)).await?;
        decode_products(&body)
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let body = self.get(&Endpoint::Categories).await?;
        decode_categories(&body)
    }

    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        match self.get(&Endpoint::Product(id)).await {
            Ok(body) => decode_product(&body, id),
            Err(FetchError::Http(404)) => Err(CatalogError::NotFound(id)),
            Err(err) => Err(err.into()),
        }
    }
}
