//! HTTP client for the puzzle backend. The server owns grid generation and
//! word validation; this side only ships JSON back and forth over `fetch`.

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::AppConfig;
use crate::error::{ApiError, Result};
use crate::model::{Grid, NewGridResponse, SelectRequest, SelectResponse, Selection, Word};
use crate::util::clog;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    host: String,
}

impl ApiClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            host: config.api_host.clone(),
        }
    }

    pub fn new_grid_url(&self, width: u32) -> String {
        format!("{}/api/grid/new?width={}", self.host, width)
    }

    pub fn select_url(&self) -> String {
        format!("{}/api/grid/select", self.host)
    }

    pub async fn new_grid(&self, width: u32) -> Result<NewGridResponse> {
        let url = self.new_grid_url(width);
        let init = RequestInit::new();
        init.set_method("GET");
        let request = Request::new_with_str_and_init(&url, &init)?;
        fetch_json(request, &url).await
    }

    pub async fn select(
        &self,
        words: &[Word],
        grid: &Grid,
        selection: Selection,
    ) -> Result<SelectResponse> {
        let url = self.select_url();
        let body = encode_select(words, grid, selection)?;
        let headers = Headers::new()?;
        headers.set("Content-Type", "application/json")?;
        let init = RequestInit::new();
        init.set_method("POST");
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));
        let request = Request::new_with_str_and_init(&url, &init)?;
        fetch_json(request, &url).await
    }
}

pub fn encode_select(words: &[Word], grid: &Grid, selection: Selection) -> Result<String> {
    serde_json::to_string(&SelectRequest {
        words,
        grid,
        selection,
    })
    .map_err(ApiError::Encode)
}

async fn fetch_json<T: DeserializeOwned>(request: Request, url: &str) -> Result<T> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    let method = request.method();
    let started = js_sys::Date::now();
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    clog(&format!(
        "{} {} -> {} ({:.0} ms)",
        method,
        url,
        resp.status(),
        js_sys::Date::now() - started
    ));
    if !resp.ok() {
        return Err(ApiError::Status {
            status: resp.status(),
            url: url.to_string(),
        });
    }
    let text = JsFuture::from(resp.text()?).await?;
    let text = text.as_string().unwrap_or_default();
    Ok(serde_json::from_str(&text)?)
}
