use crate::core::SceneInputs;
use crate::dom;
use crate::events::Listener;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub container: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub inputs: SceneInputs,
}

/// Register every listener the effect needs. The returned guards remove
/// their listener when cancelled or dropped.
pub fn wire_input_handlers(w: &InputWiring) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        wire_pointermove(w)?,
        wire_pointerleave(w)?,
        wire_resize(w)?,
        wire_pointerdown(w)?,
        wire_pointerup(w)?,
        wire_wheel(w)?,
    ])
}

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointermove(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::add(
        w.container.unchecked_ref(),
        "pointermove",
        move |ev: web::PointerEvent| {
            if !w2.container.is_connected() {
                return;
            }
            let rect = dom::container_rect(&w2.container);
            w2.inputs.pointer_moved(client_pos(&ev), &rect);
        },
    )
}

fn wire_pointerleave(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::add(
        w.container.unchecked_ref(),
        "pointerleave",
        move |_ev: web::PointerEvent| {
            w2.inputs.pointer_left();
        },
    )
}

fn wire_resize(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::add(w.window.unchecked_ref(), "resize", move |_ev: web::Event| {
        if !w2.inputs.is_live() || !w2.container.is_connected() {
            return;
        }
        let size = dom::sync_canvas_backing_size(&w2.window, &w2.container, &w2.canvas);
        if !size.is_empty() && w2.inputs.resized(size.width, size.height) {
            log::debug!("[resize] {}x{}", size.width, size.height);
        }
    })
}

fn wire_pointerdown(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::add(
        w.canvas.unchecked_ref(),
        "pointerdown",
        move |ev: web::PointerEvent| {
            if w2.inputs.drag_started(client_pos(&ev)) {
                _ = w2.canvas.set_pointer_capture(ev.pointer_id());
            }
        },
    )
}

fn wire_pointerup(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::add(
        w.canvas.unchecked_ref(),
        "pointerup",
        move |ev: web::PointerEvent| {
            w2.inputs.drag_ended();
            _ = w2.canvas.release_pointer_capture(ev.pointer_id());
        },
    )
}

fn wire_wheel(w: &InputWiring) -> anyhow::Result<Listener> {
    let w2 = w.clone();
    Listener::add(w.canvas.unchecked_ref(), "wheel", move |ev: web::WheelEvent| {
        let zooms = w2
            .inputs
            .inspect(|s| s.orbit().is_enabled())
            .unwrap_or(false);
        if zooms && w2.inputs.wheel(ev.delta_y() as f32) {
            ev.prevent_default();
        }
    })
}
