//! Render loop hook - Explicit per-frame observers
//!
//! Observers are registered with the [`RenderLoop`] and receive a
//! [`FrameContext`] after the scene has been drawn each frame. Registration
//! returns an [`ObserverId`]; dropping the id does not detach the observer,
//! [`RenderLoop::unregister`] does.

use crate::Overlay;
use meshprobe_camera::{Camera, Viewport};
use tracing::{debug, trace};

/// What an observer may read and touch during a frame
pub struct FrameContext<'a> {
    /// Camera used for this frame
    pub camera: &'a Camera,
    /// Surface rectangle for this frame
    pub viewport: Viewport,
    /// Artifact container
    pub overlay: &'a mut Overlay,
    /// Frame counter (starts at 1)
    pub frame: u64,
}

/// Per-frame callback
pub trait FrameObserver {
    /// Called once per rendered frame
    fn on_frame(&mut self, ctx: &mut FrameContext<'_>);
}

impl<F> FrameObserver for F
where
    F: FnMut(&mut FrameContext<'_>),
{
    fn on_frame(&mut self, ctx: &mut FrameContext<'_>) {
        self(ctx)
    }
}

/// Registration token for a frame observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Host render loop with an observer registry
#[derive(Default)]
pub struct RenderLoop {
    observers: Vec<(ObserverId, Box<dyn FrameObserver>)>,
    next_id: u64,
    frame: u64,
}

impl RenderLoop {
    /// Create a loop with no observers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer; it runs every frame until unregistered.
    pub fn register(&mut self, observer: Box<dyn FrameObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        debug!(observer = id.0, "frame observer registered");
        id
    }

    /// Detach an observer. Returns `false` if it was not registered.
    pub fn unregister(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(registered, _)| *registered != id);
        let removed = self.observers.len() != before;
        if removed {
            debug!(observer = id.0, "frame observer unregistered");
        }
        removed
    }

    /// Whether `id` is still registered
    pub fn is_registered(&self, id: ObserverId) -> bool {
        self.observers.iter().any(|(registered, _)| *registered == id)
    }

    /// Number of registered observers
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Frames rendered so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Run one frame: notify observers in registration order.
    pub fn run_frame(&mut self, camera: &Camera, viewport: Viewport, overlay: &mut Overlay) -> u64 {
        self.frame += 1;
        let mut ctx = FrameContext {
            camera,
            viewport,
            overlay,
            frame: self.frame,
        };
        for (_, observer) in &mut self.observers {
            observer.on_frame(&mut ctx);
        }
        trace!(frame = self.frame, observers = self.observers.len(), "frame rendered");
        self.frame
    }
}

impl std::fmt::Debug for RenderLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderLoop")
            .field("observers", &self.observers.len())
            .field("frame", &self.frame)
            .finish()
    }
}
