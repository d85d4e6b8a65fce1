use js_sys::Promise;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use shell_host::NetworkSnapshot;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen(inline_js = r#"
async function hostInvoke(command, args) {
  const internals = window.__TAURI_INTERNALS__;
  if (!internals || typeof internals.invoke !== 'function') {
    throw new Error('Tauri IPC is unavailable in this webview');
  }
  return await internals.invoke(command, args ?? {});
}

export async function jsHostInvoke(command, args) { return await hostInvoke(command, args); }
"#)]
extern "C" {
    #[wasm_bindgen(js_name = jsHostInvoke)]
    fn js_host_invoke(command: &str, args: JsValue) -> Promise;
}

async fn await_promise(promise: Promise) -> Result<JsValue, String> {
    JsFuture::from(promise).await.map_err(js_error_to_string)
}

fn js_error_to_string(err: JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Ok(message) = js_sys::Reflect::get(&err, &JsValue::from_str("message")) {
        if let Some(text) = message.as_string() {
            return text;
        }
    }
    format!("{err:?}")
}

fn to_js_args<T: Serialize>(args: &T) -> Result<JsValue, String> {
    args.serialize(&Serializer::json_compatible())
        .map_err(|e| e.to_string())
}

#[derive(Serialize)]
struct GreetArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct LogMessageArgs<'a> {
    message: &'a str,
}

pub async fn invoke_unit(command: &str) -> Result<(), String> {
    let _ = await_promise(js_host_invoke(command, JsValue::UNDEFINED)).await?;
    Ok(())
}

pub async fn invoke_network_details() -> Result<NetworkSnapshot, String> {
    let value = await_promise(js_host_invoke("get_network_details", JsValue::UNDEFINED)).await?;
    from_value(value).map_err(|e| e.to_string())
}

pub async fn invoke_greet(name: &str) -> Result<String, String> {
    let args = to_js_args(&GreetArgs { name })?;
    let value = await_promise(js_host_invoke("greet", args)).await?;
    value
        .as_string()
        .ok_or_else(|| "greet returned a non-string payload".to_string())
}

pub async fn invoke_log_message(message: &str) -> Result<(), String> {
    let args = to_js_args(&LogMessageArgs { message })?;
    let _ = await_promise(js_host_invoke("log_message", args)).await?;
    Ok(())
}
