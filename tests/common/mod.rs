// Host-side fakes for the platform traits: a manually pumped frame
// scheduler, a backend that records what it was asked to draw, and
// subscriptions that count cancellations.

#![allow(dead_code)]

use glam::Vec3;
use hero_field::core::{FrameScheduler, FrameView, RenderBackend, Subscription};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type EventLog = Rc<RefCell<Vec<&'static str>>>;

#[derive(Clone, Default)]
pub struct ManualScheduler {
    queue: Rc<RefCell<Vec<(i32, Rc<dyn Fn()>)>>>,
    next_id: Rc<Cell<i32>>,
    pub cancelled: Rc<RefCell<Vec<i32>>>,
    pub released: Rc<Cell<u32>>,
    pub log: Option<EventLog>,
}

impl ManualScheduler {
    pub fn with_log(log: EventLog) -> Self {
        Self {
            log: Some(log),
            ..Self::default()
        }
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every queued frame once, including ones whose request was
    /// cancelled: a browser may already have dispatched them.
    pub fn fire(&self) {
        let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for (_, frame) in due {
            frame();
        }
    }

    pub fn fire_n(&self, n: usize) {
        for _ in 0..n {
            self.fire();
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request(&self, frame: &Rc<dyn Fn()>) -> Option<i32> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.queue.borrow_mut().push((id, frame.clone()));
        Some(id)
    }

    fn cancel(&self, id: i32) {
        self.cancelled.borrow_mut().push(id);
        if let Some(log) = &self.log {
            log.borrow_mut().push("cancel_frame");
        }
    }

    fn release(&self) {
        self.released.set(self.released.get() + 1);
    }
}

#[derive(Default)]
pub struct BackendRecord {
    pub draws: u32,
    pub uploads: u32,
    pub disposed: u32,
    pub resizes: Vec<(u32, u32)>,
    pub last_clear: [f32; 4],
    pub last_cloud_offset: Vec3,
    pub last_camera_right: Vec3,
}

pub struct RecordingBackend {
    pub record: Rc<RefCell<BackendRecord>>,
    pub log: Option<EventLog>,
    size: (u32, u32),
}

impl RecordingBackend {
    pub fn new() -> (Self, Rc<RefCell<BackendRecord>>) {
        let record = Rc::new(RefCell::new(BackendRecord::default()));
        (
            Self {
                record: record.clone(),
                log: None,
                size: (0, 0),
            },
            record,
        )
    }

    pub fn with_log(log: EventLog) -> (Self, Rc<RefCell<BackendRecord>>) {
        let (mut b, r) = Self::new();
        b.log = Some(log);
        (b, r)
    }
}

impl RenderBackend for RecordingBackend {
    fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != self.size {
            self.size = (width, height);
            self.record.borrow_mut().resizes.push((width, height));
        }
    }

    fn draw(&mut self, frame: &FrameView<'_>) -> anyhow::Result<()> {
        let mut r = self.record.borrow_mut();
        r.draws += 1;
        if frame.surface_positions.is_some() {
            r.uploads += 1;
        }
        r.last_clear = frame.clear_color;
        r.last_cloud_offset = frame.cloud_offset;
        r.last_camera_right = frame.camera_right;
        Ok(())
    }

    fn dispose(&mut self) {
        self.record.borrow_mut().disposed += 1;
        if let Some(log) = &self.log {
            log.borrow_mut().push("dispose_backend");
        }
    }
}

pub struct CountingSubscription {
    pub cancels: Rc<Cell<u32>>,
    pub label: &'static str,
    pub log: Option<EventLog>,
}

impl CountingSubscription {
    pub fn new(label: &'static str) -> (Self, Rc<Cell<u32>>) {
        let cancels = Rc::new(Cell::new(0));
        (
            Self {
                cancels: cancels.clone(),
                label,
                log: None,
            },
            cancels,
        )
    }

    pub fn logged(label: &'static str, log: &EventLog) -> (Self, Rc<Cell<u32>>) {
        let (mut s, c) = Self::new(label);
        s.log = Some(log.clone());
        (s, c)
    }
}

impl Subscription for CountingSubscription {
    fn cancel(&mut self) {
        self.cancels.set(self.cancels.get() + 1);
        if let Some(log) = &self.log {
            log.borrow_mut().push(self.label);
        }
    }
}

pub fn assert_vec3_near(a: Vec3, b: Vec3, tol: f32) {
    assert!(
        (a - b).length() <= tol,
        "expected {:?} within {} of {:?} (off by {})",
        a,
        tol,
        b,
        (a - b).length()
    );
}
