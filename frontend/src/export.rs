use gloo_file::{Blob, ObjectUrl};
use js_sys::{Function, Object, Promise, Reflect};
use shared::ShareOutcome;
use shared::presenter::SHARE_TITLE;
use shared::report::REPORT_MIME_TYPE;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAnchorElement;

/// Saves `content` as a text file through a temporary download link.
pub fn download_text(file_name: &str, content: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let blob = Blob::new_with_options(content, Some(REPORT_MIME_TYPE));
    let url = ObjectUrl::from(blob);

    let anchor: HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(JsValue::from)?;
    anchor.set_href(&url.to_string());
    anchor.set_download(file_name);

    body.append_child(&anchor)?;
    anchor.click();
    anchor.remove();

    Ok(())
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

async fn await_call(function: &Function, this: &JsValue, arg: &JsValue) -> Result<JsValue, JsValue> {
    let promise: Promise = function.call1(this, arg)?.dyn_into()?;
    JsFuture::from(promise).await
}

/// Platform share sheet first, then the clipboard.
pub async fn share(text: &str) -> ShareOutcome {
    let Some(window) = web_sys::window() else {
        return ShareOutcome::Unsupported;
    };
    let navigator: JsValue = window.navigator().into();

    if let Some(share) = method(&navigator, "share") {
        let data = Object::new();
        let _ = Reflect::set(&data, &"title".into(), &SHARE_TITLE.into());
        let _ = Reflect::set(&data, &"text".into(), &text.into());
        if let Ok(href) = window.location().href() {
            let _ = Reflect::set(&data, &"url".into(), &href.into());
        }

        match await_call(&share, &navigator, &data).await {
            Ok(_) => {
                log::info!("Results shared successfully");
                return ShareOutcome::Shared;
            }
            Err(e) => log::warn!("Share sheet failed, trying clipboard: {:?}", e),
        }
    }

    copy_to_clipboard(&navigator, text).await
}

async fn copy_to_clipboard(navigator: &JsValue, text: &str) -> ShareOutcome {
    let clipboard = match Reflect::get(navigator, &JsValue::from_str("clipboard")) {
        Ok(clipboard) if !clipboard.is_undefined() && !clipboard.is_null() => clipboard,
        _ => return ShareOutcome::Unsupported,
    };
    let Some(write_text) = method(&clipboard, "writeText") else {
        return ShareOutcome::Unsupported;
    };

    match await_call(&write_text, &clipboard, &JsValue::from_str(text)).await {
        Ok(_) => ShareOutcome::Copied,
        Err(e) => {
            log::error!("Clipboard write failed: {:?}", e);
            ShareOutcome::Failed
        }
    }
}
