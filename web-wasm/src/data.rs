//! 图鉴数据源
//!
//! 启动时加载一次：优先读取页面内嵌的 `<script id="DATA_JSON">`，
//! 没有再 fetch 同目录的 data.json。任何失败都是终态，不重试。

use craftdex_common::{Catalog, Error, Result};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

const EMBEDDED_DATA_ID: &str = "DATA_JSON";
const DATA_URL: &str = "./data.json";

/// 加载图鉴
pub async fn load_catalog() -> Result<Catalog> {
    if let Some(text) = embedded_data() {
        return Catalog::from_json(&text);
    }
    fetch_catalog().await
}

/// 页面内嵌数据（存在且非空才算数）
fn embedded_data() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(EMBEDDED_DATA_ID)?;
    let text = element.text_content()?;
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

async fn fetch_catalog() -> Result<Catalog> {
    let window =
        web_sys::window().ok_or_else(|| Error::Load("没有 window 环境".to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(DATA_URL, &opts)
        .map_err(|_| Error::Load(format!("{} 请求构建失败", DATA_URL)))?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| Error::Load(format!("{} 请求失败", DATA_URL)))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| Error::Load("fetch 响应类型异常".to_string()))?;

    if !resp.ok() {
        return Err(Error::Load(format!(
            "{} 加载失败：{} {}",
            DATA_URL,
            resp.status(),
            resp.status_text()
        )));
    }

    let text_promise = resp
        .text()
        .map_err(|_| Error::Load("响应体读取失败".to_string()))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|_| Error::Load("响应体读取失败".to_string()))?;
    let text = text_value
        .as_string()
        .ok_or_else(|| Error::Load("响应体不是文本".to_string()))?;

    Catalog::from_json(&text)
}
