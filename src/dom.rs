use crate::constants::DARK_CLASS;
use crate::core::{ContainerRect, Viewport};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn container_rect(container: &web::Element) -> ContainerRect {
    let rect = container.get_bounding_client_rect();
    ContainerRect::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Size the canvas backing store to the container's CSS size times the
/// device pixel ratio. Returns the container size in device pixels, which is
/// empty when the container has collapsed; only the backing store is kept at
/// one pixel or more.
pub fn sync_canvas_backing_size(
    window: &web::Window,
    container: &web::Element,
    canvas: &web::HtmlCanvasElement,
) -> Viewport {
    let rect = container.get_bounding_client_rect();
    let viewport = Viewport::from_css(rect.width(), rect.height(), window.device_pixel_ratio());
    let w_px = viewport.width.max(1);
    let h_px = viewport.height.max(1);
    if canvas.width() != w_px {
        canvas.set_width(w_px);
    }
    if canvas.height() != h_px {
        canvas.set_height(h_px);
    }
    viewport
}

/// Dark mode is signalled by a class on the root element.
#[inline]
pub fn is_dark(document: &web::Document) -> bool {
    document
        .document_element()
        .map(|el| el.class_list().contains(DARK_CLASS))
        .unwrap_or(false)
}
