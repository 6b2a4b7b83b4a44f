use crate::core::{SceneInputs, Subscription};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Watches the `class` attribute of `<html>` and forwards dark/light flips.
pub struct ThemeObserver {
    observer: Option<web::MutationObserver>,
    callback: Option<Closure<dyn FnMut(js_sys::Array, web::MutationObserver)>>,
}

impl ThemeObserver {
    pub fn observe(document: &web::Document, inputs: SceneInputs) -> anyhow::Result<Self> {
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;
        let doc = document.clone();
        let callback = Closure::wrap(Box::new(
            move |records: js_sys::Array, _observer: web::MutationObserver| {
                let class_changed = records.iter().any(|r| {
                    r.unchecked_into::<web::MutationRecord>()
                        .attribute_name()
                        .is_some_and(|name| name == "class")
                });
                if class_changed {
                    let dark = dom::is_dark(&doc);
                    if inputs.theme_changed(dark) {
                        log::debug!("[theme] dark={}", dark);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::MutationObserver)>);
        let observer = web::MutationObserver::new(callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("MutationObserver: {:?}", e))?;
        let init = web::MutationObserverInit::new();
        init.set_attributes(true);
        init.set_attribute_filter(&js_sys::Array::of1(&"class".into()));
        observer
            .observe_with_options(&root, &init)
            .map_err(|e| anyhow::anyhow!("observe: {:?}", e))?;
        Ok(Self {
            observer: Some(observer),
            callback: Some(callback),
        })
    }
}

impl Subscription for ThemeObserver {
    fn cancel(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        self.callback.take();
    }
}

impl Drop for ThemeObserver {
    fn drop(&mut self) {
        self.cancel();
    }
}
