//! カタログ取得

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use app_catalog_common::App;

pub const APPS_URL: &str = "https://pluga.co/ferramentas_search.json";

/// アプリ一覧を1回だけ取得する（リトライなし）
pub async fn fetch_apps(url: &str) -> Result<Vec<App>, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP error: {}", resp.status())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let apps: Vec<App> = serde_wasm_bindgen::from_value(json)?;
    Ok(apps)
}
