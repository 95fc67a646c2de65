//! Craftdex 物品图鉴 Web 端 (Leptos + WASM)

mod app;
mod components;
mod data;

use craftdex_common::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

const CONTAINER_ID: &str = "app";

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // 挂载点缺失是致命错误：记录后中止启动
    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONTAINER_ID));
    let Some(container) = container else {
        let err = Error::MissingContainer(format!("#{}", CONTAINER_ID));
        web_sys::console::error_1(&err.to_string().into());
        return Err(JsValue::from_str(&err.to_string()));
    };

    leptos::mount::mount_to(container.unchecked_into(), app::App).forget();
    Ok(())
}
