//! Effect lifecycle: the cancellable render loop, input routing and teardown.
//!
//! Platform pieces plug in through three small traits so the same lifecycle
//! runs in the browser (requestAnimationFrame, DOM listeners, wgpu) and in
//! host-side tests (manual scheduler, recording backend).

use crate::core::projector::ContainerRect;
use crate::core::scene::{FrameView, Scene};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EffectError {
    #[error("invalid scene config: {0}")]
    Config(#[from] crate::core::config::ConfigError),
    #[error("rendering unavailable: {0}")]
    Unavailable(String),
}

/// Schedules a callback for the next frame.
pub trait FrameScheduler {
    /// Queue `frame` once; returns a request id when one was issued.
    fn request(&self, frame: &Rc<dyn Fn()>) -> Option<i32>;
    fn cancel(&self, id: i32);
    /// Drop anything retained for `request`; called once when the loop stops.
    fn release(&self) {}
}

/// Draws frames produced by `Scene::tick`.
pub trait RenderBackend {
    fn resize(&mut self, width: u32, height: u32);
    fn draw(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()>;
    /// Free GPU-side resources. Called exactly once.
    fn dispose(&mut self);
}

/// A registered listener or observer. `cancel` must tolerate repeat calls.
pub trait Subscription {
    fn cancel(&mut self);
}

/// Cancellation flag shared between a running loop and its queued frames.
#[derive(Clone, Debug)]
pub struct LoopToken(Rc<Cell<bool>>);

impl LoopToken {
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.get()
    }

    fn cancel(&self) {
        self.0.set(false);
    }
}

type FrameSlot = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

/// Repeating per-frame tick with explicit start/stop.
pub struct RenderLoop<S: FrameScheduler> {
    scheduler: Rc<S>,
    token: Option<LoopToken>,
    pending: Rc<Cell<Option<i32>>>,
    slot: Option<FrameSlot>,
}

impl<S: FrameScheduler> RenderLoop<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler: Rc::new(scheduler),
            token: None,
            pending: Rc::new(Cell::new(None)),
            slot: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.token.as_ref().is_some_and(LoopToken::is_active)
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Invalidate the token first, then cancel the queued request and drop
    /// the frame closure. Safe to call repeatedly.
    pub fn stop(&mut self) {
        let Some(token) = self.token.take() else {
            return;
        };
        token.cancel();
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        if let Some(slot) = self.slot.take() {
            slot.borrow_mut().take();
        }
        self.scheduler.release();
    }
}

impl<S: FrameScheduler + 'static> RenderLoop<S> {
    /// Start ticking. Returns false (and does nothing) if already running.
    pub fn start(&mut self, tick: impl FnMut() + 'static) -> bool {
        if self.is_running() {
            return false;
        }
        let token = LoopToken::new();
        let slot: FrameSlot = Rc::new(RefCell::new(None));

        let frame_token = token.clone();
        let weak_slot: Weak<RefCell<Option<Rc<dyn Fn()>>>> = Rc::downgrade(&slot);
        let weak_scheduler = Rc::downgrade(&self.scheduler);
        let pending = self.pending.clone();
        let tick = RefCell::new(tick);
        let frame: Rc<dyn Fn()> = Rc::new(move || {
            // A request that was already queued when the loop stopped lands here.
            if !frame_token.is_active() {
                return;
            }
            pending.set(None);
            (tick.borrow_mut())();
            if !frame_token.is_active() {
                return;
            }
            let (Some(slot), Some(scheduler)) = (weak_slot.upgrade(), weak_scheduler.upgrade())
            else {
                return;
            };
            let next = slot.borrow().clone();
            if let Some(next) = next {
                pending.set(scheduler.request(&next));
            }
        });
        *slot.borrow_mut() = Some(frame.clone());

        self.pending.set(self.scheduler.request(&frame));
        self.token = Some(token);
        self.slot = Some(slot);
        true
    }
}

/// Cloneable entry point for external events.
///
/// Every method is a no-op returning `false` once the effect is stopped.
#[derive(Clone)]
pub struct SceneInputs {
    scene: Rc<RefCell<Option<Scene>>>,
}

impl SceneInputs {
    fn with_scene(&self, f: impl FnOnce(&mut Scene)) -> bool {
        match self.scene.try_borrow_mut() {
            Ok(mut guard) => match guard.as_mut() {
                Some(scene) => {
                    f(scene);
                    true
                }
                None => false,
            },
            Err(_) => false,
        }
    }

    pub fn is_live(&self) -> bool {
        self.scene.borrow().is_some()
    }

    pub fn pointer_moved(&self, client: Vec2, rect: &ContainerRect) -> bool {
        self.with_scene(|s| s.pointer_moved(client, rect))
    }

    pub fn pointer_left(&self) -> bool {
        self.with_scene(Scene::pointer_left)
    }

    pub fn drag_started(&self, client: Vec2) -> bool {
        self.with_scene(|s| s.drag_started(client))
    }

    pub fn drag_ended(&self) -> bool {
        self.with_scene(Scene::drag_ended)
    }

    pub fn wheel(&self, delta_y: f32) -> bool {
        self.with_scene(|s| s.wheel(delta_y))
    }

    pub fn resized(&self, width: u32, height: u32) -> bool {
        self.with_scene(|s| s.resized(width, height))
    }

    pub fn theme_changed(&self, dark: bool) -> bool {
        self.with_scene(|s| s.theme_changed(dark))
    }

    /// Read-only peek at the scene, `None` after teardown.
    pub fn inspect<R>(&self, f: impl FnOnce(&Scene) -> R) -> Option<R> {
        self.scene.borrow().as_ref().map(f)
    }
}

/// A running effect. Owns the loop, the listeners, the theme subscription,
/// the backend and the scene; `stop` releases them in that order.
pub struct EffectHandle<B: RenderBackend, S: FrameScheduler> {
    scene: Rc<RefCell<Option<Scene>>>,
    backend: Rc<RefCell<Option<B>>>,
    render_loop: RenderLoop<S>,
    listeners: Vec<Box<dyn Subscription>>,
    theme: Option<Box<dyn Subscription>>,
    stopped: bool,
}

impl<B, S> EffectHandle<B, S>
where
    B: RenderBackend + 'static,
    S: FrameScheduler + 'static,
{
    pub fn start(scene: Scene, backend: B, scheduler: S) -> Self {
        let scene = Rc::new(RefCell::new(Some(scene)));
        let backend = Rc::new(RefCell::new(Some(backend)));
        let mut render_loop = RenderLoop::new(scheduler);

        let tick_scene = scene.clone();
        let tick_backend = backend.clone();
        render_loop.start(move || run_tick(&tick_scene, &tick_backend));
        log::info!("[effect] started");

        Self {
            scene,
            backend,
            render_loop,
            listeners: Vec::new(),
            theme: None,
            stopped: false,
        }
    }
}

impl<B: RenderBackend, S: FrameScheduler> EffectHandle<B, S> {
    pub fn inputs(&self) -> SceneInputs {
        SceneInputs {
            scene: self.scene.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.render_loop.is_running()
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn scheduler(&self) -> &S {
        self.render_loop.scheduler()
    }

    /// Keep a listener alive until `stop`. After `stop` it is cancelled at once.
    pub fn track_listener(&mut self, mut listener: Box<dyn Subscription>) {
        if self.stopped {
            listener.cancel();
            return;
        }
        self.listeners.push(listener);
    }

    /// Keep the theme subscription alive until `stop`, replacing any previous one.
    pub fn track_theme(&mut self, mut subscription: Box<dyn Subscription>) {
        if self.stopped {
            subscription.cancel();
            return;
        }
        if let Some(mut old) = self.theme.replace(subscription) {
            old.cancel();
        }
    }

    /// Tear everything down exactly once: loop, listeners, theme observer,
    /// GPU resources, then the scene itself.
    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.render_loop.stop();
        for mut listener in self.listeners.drain(..) {
            listener.cancel();
        }
        if let Some(mut theme) = self.theme.take() {
            theme.cancel();
        }
        if let Some(mut backend) = self.backend.borrow_mut().take() {
            backend.dispose();
        }
        self.scene.borrow_mut().take();
        log::info!("[effect] stopped");
    }
}

impl<B: RenderBackend, S: FrameScheduler> Drop for EffectHandle<B, S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_tick<B: RenderBackend>(scene: &RefCell<Option<Scene>>, backend: &RefCell<Option<B>>) {
    let mut scene_ref = scene.borrow_mut();
    let Some(scene) = scene_ref.as_mut() else {
        return;
    };
    let mut backend_ref = backend.borrow_mut();
    let Some(backend) = backend_ref.as_mut() else {
        return;
    };
    let frame = scene.tick();
    backend.resize(frame.viewport.width, frame.viewport.height);
    if let Err(e) = backend.draw(&frame) {
        log::error!("render error: {:?}", e);
    }
}
