//! Seam to the external pannable-surface primitive.
//!
//! The pager never recognizes gestures or simulates springs itself. It
//! pushes a [`SurfaceConfig`] describing where the surface may rest and how
//! far it may be dragged, then observes settle notifications the host
//! forwards back through [`ScreenPager::handle_settle`].
//!
//! [`ScreenPager::handle_settle`]: crate::ScreenPager::handle_settle

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;

use crate::geometry::{Axis, Boundary, Point, SnapPoint};

/// Full configuration pushed to the surface on every compose.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceConfig {
    /// Rest positions the surface may settle into, one per screen.
    pub snap_points: Vec<SnapPoint>,
    /// Permitted pan range along the active axis.
    pub boundary: Boundary,
    /// The single axis motion is locked to.
    pub axis: Axis,
    /// Whether direct dragging is enabled. Programmatic animation requests
    /// are honored either way.
    pub drag_enabled: bool,
    /// Canvas translation the surface starts from.
    pub initial_position: Point,
}

/// Errors reported by a pannable-surface backend.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The surface has no snap point at the requested index.
    #[error("no snap point at index {0}")]
    InvalidSnapIndex(usize),
    /// The surface has not been configured yet.
    #[error("surface has not been configured")]
    NotConfigured,
    /// The backend rejected the operation.
    #[error("surface backend error: {0}")]
    Backend(String),
}

/// Capability interface over an external gesture/physics primitive.
///
/// Any backend can satisfy this: a native gesture recognizer, a pointer
/// event loop driving a spring simulation, or the headless
/// [`ScriptedSurface`]. Settle notifications travel outside this trait, on
/// the backend's own event path, and are fed to the pager by the host.
pub trait PannableSurface {
    /// Replaces the surface's snap points, boundaries, axis lock, drag flag,
    /// and resting position.
    fn configure(&mut self, config: SurfaceConfig) -> Result<(), SurfaceError>;

    /// Requests an animated transition to the snap point at `index`. The
    /// surface reports the outcome later as a settle notification.
    fn animate_to(&mut self, index: usize) -> Result<(), SurfaceError>;

    /// Repositions immediately to the snap point at `index`, skipping the
    /// physics simulation. Still produces a settle notification.
    fn jump_to(&mut self, index: usize) -> Result<(), SurfaceError>;
}

/// Stream of pending settle notifications from a [`ScriptedSurface`].
///
/// Obtain one with [`ScriptedSurface::settle_events`] before handing the
/// surface to the pager, then drain it and forward each index to
/// `ScreenPager::handle_settle`.
#[derive(Clone, Debug, Default)]
pub struct SettleEvents {
    queue: Arc<Mutex<VecDeque<usize>>>,
}

impl SettleEvents {
    /// Pops the oldest pending settle index, if any.
    pub fn next(&self) -> Option<usize> {
        self.queue.lock().pop_front()
    }

    fn push(&self, index: usize) {
        self.queue.lock().push_back(index);
    }
}

/// Headless surface backend for tests and demos.
///
/// Validates requests against the latest configuration and settles at the
/// requested snap point immediately, without simulating any motion.
#[derive(Debug, Default)]
pub struct ScriptedSurface {
    config: Option<SurfaceConfig>,
    settles: SettleEvents,
}

impl ScriptedSurface {
    /// Creates an unconfigured surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle to this surface's settle notifications.
    pub fn settle_events(&self) -> SettleEvents {
        self.settles.clone()
    }

    fn snap_count(&self) -> Result<usize, SurfaceError> {
        self.config
            .as_ref()
            .map(|config| config.snap_points.len())
            .ok_or(SurfaceError::NotConfigured)
    }

    fn settle_at(&mut self, index: usize) -> Result<(), SurfaceError> {
        if index >= self.snap_count()? {
            return Err(SurfaceError::InvalidSnapIndex(index));
        }
        self.settles.push(index);
        Ok(())
    }
}

impl PannableSurface for ScriptedSurface {
    fn configure(&mut self, config: SurfaceConfig) -> Result<(), SurfaceError> {
        self.config = Some(config);
        Ok(())
    }

    fn animate_to(&mut self, index: usize) -> Result<(), SurfaceError> {
        self.settle_at(index)
    }

    fn jump_to(&mut self, index: usize) -> Result<(), SurfaceError> {
        self.settle_at(index)
    }
}
