use crate::core::FrameScheduler;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed scheduler.
///
/// The JS closure is built once from the first frame it is handed and reused
/// for every later request; `release` drops it after the loop has cancelled
/// its last request.
pub struct RafScheduler {
    window: web::Window,
    closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            closure: RefCell::new(None),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request(&self, frame: &Rc<dyn Fn()>) -> Option<i32> {
        let mut slot = self.closure.borrow_mut();
        let closure = slot.get_or_insert_with(|| {
            let frame = frame.clone();
            Closure::wrap(Box::new(move || frame()) as Box<dyn FnMut()>)
        });
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, id: i32) {
        _ = self.window.cancel_animation_frame(id);
    }

    fn release(&self) {
        self.closure.borrow_mut().take();
    }
}
