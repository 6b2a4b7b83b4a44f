//! Pointer-driven point-cloud hero background.
//!
//! `core` holds the platform-free scene (height fields, projection,
//! smoothing, orbit, lifecycle) and builds on any target. The browser layer
//! below it is compiled for `wasm32` only.

pub mod constants;
pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_entry::*;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::{EffectError, EffectHandle, Scene, SceneConfig, Theme};
    use crate::dom;
    use crate::events::{self, InputWiring, ThemeObserver};
    use crate::frame::RafScheduler;
    use crate::render::GpuState;
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(crate::constants::LOG_LEVEL).ok();
        log::info!("hero-field loaded");
        Ok(())
    }

    /// A mounted effect. Call `stop()` on unmount; dropping it does the same.
    #[wasm_bindgen]
    pub struct HeroHandle {
        inner: EffectHandle<GpuState, RafScheduler>,
    }

    #[wasm_bindgen]
    impl HeroHandle {
        pub fn stop(&mut self) {
            self.inner.stop();
        }

        #[wasm_bindgen(getter)]
        pub fn running(&self) -> bool {
            self.inner.is_running()
        }
    }

    /// Mount the effect into `container`, drawing on `canvas`.
    ///
    /// Resolves to a `HeroHandle`, or to `undefined` when the page cannot host
    /// it (detached container, zero size, no GPU). Callers may simply retry on
    /// their next mount.
    #[wasm_bindgen]
    pub async fn mount(
        container: web::HtmlElement,
        canvas: web::HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<JsValue, JsValue> {
        match try_mount(container, canvas, config_json).await {
            Ok(Some(handle)) => Ok(JsValue::from(handle)),
            Ok(None) => Ok(JsValue::UNDEFINED),
            Err(EffectError::Config(e)) => Err(JsValue::from_str(&e.to_string())),
            Err(e) => {
                log::warn!("hero effect skipped: {}", e);
                Ok(JsValue::UNDEFINED)
            }
        }
    }

    async fn try_mount(
        container: web::HtmlElement,
        canvas: web::HtmlCanvasElement,
        config_json: Option<String>,
    ) -> Result<Option<HeroHandle>, EffectError> {
        let config = match config_json.as_deref() {
            Some(json) => SceneConfig::from_json(json)?,
            None => SceneConfig::default(),
        };
        let Some((window, document)) = dom::window_document() else {
            return Ok(None);
        };
        if !container.is_connected() || !canvas.is_connected() {
            log::debug!("[mount] container not attached yet");
            return Ok(None);
        }

        let viewport = dom::sync_canvas_backing_size(&window, &container, &canvas);
        if viewport.is_empty() {
            log::debug!("[mount] container has no size yet");
            return Ok(None);
        }
        let theme = Theme::from_dark_flag(dom::is_dark(&document));
        let scene = Scene::new(config, viewport, theme)?;

        let gpu = GpuState::new(&canvas, &scene)
            .await
            .map_err(|e| EffectError::Unavailable(e.to_string()))?;

        // The container may have been unmounted while the adapter was pending.
        if !container.is_connected() {
            return Ok(None);
        }

        let mut inner = EffectHandle::start(scene, gpu, RafScheduler::new(window.clone()));
        let wiring = InputWiring {
            window,
            container,
            canvas,
            inputs: inner.inputs(),
        };
        let listeners = match events::wire_input_handlers(&wiring) {
            Ok(l) => l,
            Err(e) => {
                inner.stop();
                return Err(EffectError::Unavailable(e.to_string()));
            }
        };
        for listener in listeners {
            inner.track_listener(Box::new(listener));
        }
        match ThemeObserver::observe(&document, inner.inputs()) {
            Ok(observer) => inner.track_theme(Box::new(observer)),
            Err(e) => log::warn!("theme observer unavailable: {}", e),
        }

        log::info!(
            "[mount] {}x{} dark={}",
            viewport.width,
            viewport.height,
            theme.is_dark()
        );
        Ok(Some(HeroHandle { inner }))
    }
}
