//! Multi-screen pager component.
//!
//! ## Usage
//!
//! Arrange full-viewport screens along one axis and snap between them with
//! physics-based motion supplied by a [`PannableSurface`] backend.

use std::sync::Arc;

use derive_setters::Setters;
use tracing::{debug, trace};

use crate::geometry::{Axis, Geometry, ScreenRect, Size, Viewport};
use crate::state::State;
use crate::surface::{PannableSurface, SurfaceConfig, SurfaceError};

const DEFAULT_DAMPING: f32 = 0.5;
const DEFAULT_TENSION: f32 = 600.0;

type ScreenChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration arguments for [`ScreenPager`].
///
/// Values are passed through to the physics backend uninterpreted; the
/// backend is the sole authority on what constitutes a legal spring.
#[derive(Clone, Setters)]
pub struct ScreenPagerArgs {
    /// Screen shown when the pager is first composed. Clamped to the child
    /// range once the child count is known.
    pub initial_screen: usize,
    /// Orientation of the swipe axis.
    pub axis: Axis,
    /// Elastic overscroll allowance past the first and last screens.
    pub bounce: f32,
    /// Spring damping attached to every snap point.
    pub damping: f32,
    /// Spring tension attached to every snap point.
    pub tension: f32,
    /// Disables direct dragging. Programmatic navigation still works.
    pub locked: bool,
    /// Callback invoked once per confirmed screen change.
    #[setters(skip)]
    pub on_screen_change: Option<ScreenChangeCallback>,
}

impl Default for ScreenPagerArgs {
    fn default() -> Self {
        Self {
            initial_screen: 0,
            axis: Axis::Horizontal,
            bounce: 0.0,
            damping: DEFAULT_DAMPING,
            tension: DEFAULT_TENSION,
            locked: false,
            on_screen_change: None,
        }
    }
}

impl ScreenPagerArgs {
    /// Sets the screen-change handler.
    pub fn on_screen_change(mut self, handler: impl Fn(usize) + Send + Sync + 'static) -> Self {
        self.on_screen_change = Some(Arc::new(handler));
        self
    }
}

/// Tracks the active screen and applies settle events.
///
/// The controller is the single writer of the active index; it changes only
/// when the surface reports that motion stopped at a snap point (or on an
/// explicit jump). In-flight drag state lives entirely in the backend.
#[derive(Clone, Debug)]
pub struct PagerController {
    current_screen: usize,
    screen_count: usize,
}

impl PagerController {
    /// Creates a controller resting at `initial_screen`.
    pub fn new(initial_screen: usize) -> Self {
        Self {
            current_screen: initial_screen,
            screen_count: 0,
        }
    }

    /// Returns the currently active screen.
    pub fn current_screen(&self) -> usize {
        self.current_screen
    }

    fn set_screen_count(&mut self, screen_count: usize) {
        self.screen_count = screen_count;
        self.current_screen = self.clamp_screen(self.current_screen);
    }

    fn clamp_screen(&self, screen: usize) -> usize {
        if self.screen_count == 0 {
            0
        } else {
            screen.min(self.screen_count - 1)
        }
    }

    /// Applies a settle notification. Returns the new index when the active
    /// screen actually changed; a repeated index is an idempotent no-op.
    fn apply_settle(&mut self, index: usize) -> Option<usize> {
        if self.screen_count == 0 {
            return None;
        }
        let index = self.clamp_screen(index);
        if index == self.current_screen {
            return None;
        }
        self.current_screen = index;
        Some(index)
    }
}

impl Default for PagerController {
    fn default() -> Self {
        Self::new(0)
    }
}

/// One positioned, wrapped child in the composed tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Screen<C> {
    /// Stable per-screen key for the host's tree differ.
    pub index: usize,
    /// The caller's child element.
    pub child: C,
    /// Absolute region the child occupies inside the canvas.
    pub rect: ScreenRect,
    /// Whether this screen is the active one. The sole pager-state signal
    /// children receive.
    pub active: bool,
}

/// Visual tree produced by one compose pass: an outer fixed-size frame, the
/// surface configuration for the pannable primitive, and one positioned
/// wrapper per child.
#[derive(Clone, Debug, PartialEq)]
pub struct PagerFrame<C> {
    /// Size of the outer frame and the pannable canvas.
    pub size: Size,
    /// Configuration pushed to the surface for this frame.
    pub surface: SurfaceConfig,
    /// Positioned children in index order.
    pub screens: Vec<Screen<C>>,
}

/// Wraps each child in a positioned container and attaches its `active`
/// flag. Pure: independent of any particular UI-tree representation.
pub fn layout_children<C>(
    children: Vec<C>,
    geometry: &Geometry,
    current_screen: usize,
) -> Vec<Screen<C>> {
    children
        .into_iter()
        .enumerate()
        .map(|(index, child)| Screen {
            index,
            child,
            rect: geometry.child_container_rect(index),
            active: index == current_screen,
        })
        .collect()
}

/// Multi-screen pager that owns its pannable surface.
///
/// The pager computes snap geometry from the viewport and the child count,
/// pushes it to the backend on every compose, and flips the active screen
/// only when the backend reports a settle. It never recognizes gestures or
/// simulates motion itself.
///
/// ## Usage
///
/// ```
/// use screen_pager::{ScreenPager, ScreenPagerArgs, ScriptedSurface, Viewport};
///
/// let surface = ScriptedSurface::new();
/// let settles = surface.settle_events();
/// let mut pager = ScreenPager::new(
///     ScreenPagerArgs::default(),
///     Viewport::new(320.0, 640.0),
///     surface,
/// );
///
/// let frame = pager.compose(vec!["home", "feed", "settings"])?;
/// assert_eq!(frame.screens.len(), 3);
/// assert!(frame.screens[0].active);
///
/// pager.move_to_screen(2)?;
/// while let Some(index) = settles.next() {
///     pager.handle_settle(index);
/// }
/// assert_eq!(pager.current_screen(), 2);
/// # Ok::<(), screen_pager::SurfaceError>(())
/// ```
pub struct ScreenPager<S: PannableSurface> {
    args: ScreenPagerArgs,
    viewport: Viewport,
    controller: State<PagerController>,
    surface: S,
}

impl<S: PannableSurface> ScreenPager<S> {
    /// Creates a pager over an owned surface handle. The viewport is read
    /// once here and treated as constant for the pager's lifetime.
    pub fn new(args: ScreenPagerArgs, viewport: Viewport, surface: S) -> Self {
        let controller = State::new(PagerController::new(args.initial_screen));
        Self {
            args,
            viewport,
            controller,
            surface,
        }
    }

    /// Shared handle to the controller, for external reads of the active
    /// screen.
    pub fn controller(&self) -> State<PagerController> {
        self.controller.clone()
    }

    /// Returns the currently active screen.
    pub fn current_screen(&self) -> usize {
        self.controller.with(|controller| controller.current_screen())
    }

    /// Builds the visual tree for `children` and pushes the fresh surface
    /// configuration to the backend.
    ///
    /// The child count is taken from `children` each call, so screens may be
    /// added or removed between composes. With no children the result is a
    /// defined no-op pager: empty snap list, collapsed canvas, settles
    /// ignored.
    pub fn compose<C>(&mut self, children: Vec<C>) -> Result<PagerFrame<C>, SurfaceError> {
        let geometry = Geometry::new(self.args.axis, self.viewport, children.len());
        self.controller
            .with_mut(|controller| controller.set_screen_count(geometry.screen_count()));
        let current_screen = self.current_screen();

        let config = SurfaceConfig {
            snap_points: geometry.snap_points(self.args.damping, self.args.tension),
            boundary: geometry.boundary(self.args.bounce),
            axis: self.args.axis,
            drag_enabled: !self.args.locked,
            initial_position: geometry.position_for_index(current_screen),
        };
        self.surface.configure(config.clone())?;
        trace!(
            screens = geometry.screen_count(),
            current_screen, "composed pager frame"
        );

        Ok(PagerFrame {
            size: geometry.container_size(),
            surface: config,
            screens: layout_children(children, &geometry, current_screen),
        })
    }

    /// Requests an animated transition to `index`.
    ///
    /// Fire-and-forget apart from the seam's `Result`: the active screen
    /// flips only once the resulting settle notification arrives, not on
    /// request. No local bounds check is performed; out-of-range behavior
    /// belongs to the backend.
    pub fn move_to_screen(&mut self, index: usize) -> Result<(), SurfaceError> {
        trace!(index, "requesting animated move");
        self.surface.animate_to(index)
    }

    /// Repositions to `index` immediately, without animation, updating the
    /// active screen right away. The backend's eventual settle notification
    /// for the same index is then an idempotent no-op.
    pub fn jump_to_screen(&mut self, index: usize) -> Result<(), SurfaceError> {
        trace!(index, "requesting immediate jump");
        self.surface.jump_to(index)?;
        self.commit_settle(index);
        Ok(())
    }

    /// Sink for settle notifications from the surface. The host wires the
    /// backend's settle events to this method.
    ///
    /// A settle at the already-active index changes nothing and fires no
    /// callback. Otherwise the state update commits first, then
    /// `on_screen_change` fires exactly once, synchronously.
    pub fn handle_settle(&mut self, index: usize) {
        self.commit_settle(index);
    }

    fn commit_settle(&mut self, index: usize) {
        let changed = self
            .controller
            .with_mut(|controller| controller.apply_settle(index));
        if let Some(screen) = changed {
            debug!(screen, "active screen changed");
            if let Some(on_screen_change) = &self.args.on_screen_change {
                on_screen_change(screen);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::surface::ScriptedSurface;

    fn pager(args: ScreenPagerArgs) -> ScreenPager<ScriptedSurface> {
        ScreenPager::new(args, Viewport::new(320.0, 640.0), ScriptedSurface::new())
    }

    #[test]
    fn test_compose_surface_config_scenario() {
        let mut pager = pager(ScreenPagerArgs::default());
        let frame = pager.compose(vec!["a", "b", "c"]).expect("request succeeds");

        let xs: Vec<f32> = frame.surface.snap_points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, -320.0, -640.0]);
        assert!(frame.surface.snap_points.iter().all(|p| p.y == 0.0));
        assert!(
            frame
                .surface
                .snap_points
                .iter()
                .all(|p| p.damping == 0.5 && p.tension == 600.0)
        );
        assert_eq!(frame.surface.boundary.min, -640.0);
        assert_eq!(frame.surface.boundary.max, 0.0);
        assert_eq!(frame.surface.boundary.bounce, 0.0);
        assert!(frame.surface.drag_enabled);
        assert_eq!(frame.surface.initial_position.x, 0.0);
        assert_eq!(frame.size.width, 960.0);
        assert_eq!(frame.size.height, 640.0);
    }

    #[test]
    fn test_compose_marks_single_active_screen() {
        let mut pager = pager(ScreenPagerArgs::default().initial_screen(1));
        let frame = pager.compose(vec![10, 20, 30]).expect("request succeeds");
        let active: Vec<usize> = frame
            .screens
            .iter()
            .filter(|screen| screen.active)
            .map(|screen| screen.index)
            .collect();
        assert_eq!(active, vec![1]);
        assert_eq!(frame.screens[2].rect.left, 640.0);
        assert_eq!(frame.screens[2].rect.top, 0.0);
        assert_eq!(frame.screens[2].child, 30);
    }

    #[test]
    fn test_settle_updates_state_and_notifies_once() {
        let changes = Arc::new(AtomicUsize::new(0));
        let seen = changes.clone();
        let mut pager = pager(
            ScreenPagerArgs::default()
                .on_screen_change(move |_| {
                    seen.fetch_add(1, Ordering::SeqCst);
                }),
        );
        pager.compose(vec!["a", "b", "c"]).expect("request succeeds");

        pager.handle_settle(2);
        assert_eq!(pager.current_screen(), 2);
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        // Repeated settle at the same index is an idempotent no-op.
        pager.handle_settle(2);
        assert_eq!(pager.current_screen(), 2);
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_receives_new_index() {
        let last = Arc::new(AtomicUsize::new(usize::MAX));
        let seen = last.clone();
        let mut pager = pager(
            ScreenPagerArgs::default()
                .on_screen_change(move |index| {
                    seen.store(index, Ordering::SeqCst);
                }),
        );
        pager.compose(vec!["a", "b"]).expect("request succeeds");
        pager.handle_settle(1);
        assert_eq!(last.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_move_to_screen_defers_state_to_settle() {
        let surface = ScriptedSurface::new();
        let settles = surface.settle_events();
        let mut pager = ScreenPager::new(
            ScreenPagerArgs::default(),
            Viewport::new(320.0, 640.0),
            surface,
        );
        pager.compose(vec!["a", "b", "c"]).expect("request succeeds");

        pager.move_to_screen(2).expect("request succeeds");
        assert_eq!(pager.current_screen(), 0);

        while let Some(index) = settles.next() {
            pager.handle_settle(index);
        }
        assert_eq!(pager.current_screen(), 2);
    }

    #[test]
    fn test_jump_to_screen_updates_immediately() {
        let changes = Arc::new(AtomicUsize::new(0));
        let seen = changes.clone();
        let surface = ScriptedSurface::new();
        let settles = surface.settle_events();
        let mut pager = ScreenPager::new(
            ScreenPagerArgs::default().on_screen_change(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            }),
            Viewport::new(320.0, 640.0),
            surface,
        );
        pager.compose(vec!["a", "b"]).expect("request succeeds");

        pager.jump_to_screen(1).expect("request succeeds");
        assert_eq!(pager.current_screen(), 1);
        assert_eq!(changes.load(Ordering::SeqCst), 1);

        // The backend's own settle for the jump must not notify again.
        while let Some(index) = settles.next() {
            pager.handle_settle(index);
        }
        assert_eq!(changes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_locked_disables_drag_but_not_navigation() {
        let mut pager = pager(ScreenPagerArgs::default().locked(true));
        let frame = pager.compose(vec!["a", "b"]).expect("request succeeds");
        assert!(!frame.surface.drag_enabled);

        pager.move_to_screen(1).expect("request succeeds");
    }

    #[test]
    fn test_out_of_range_initial_screen_is_clamped() {
        let mut pager = pager(ScreenPagerArgs::default().initial_screen(9));
        let frame = pager.compose(vec!["a", "b", "c"]).expect("request succeeds");
        assert_eq!(pager.current_screen(), 2);
        assert_eq!(frame.surface.initial_position.x, -640.0);
        assert!(frame.screens[2].active);
    }

    #[test]
    fn test_out_of_range_settle_is_clamped() {
        let mut pager = pager(ScreenPagerArgs::default());
        pager.compose(vec!["a", "b"]).expect("request succeeds");
        pager.handle_settle(7);
        assert_eq!(pager.current_screen(), 1);
    }

    #[test]
    fn test_zero_children_is_a_noop_pager() {
        let changes = Arc::new(AtomicUsize::new(0));
        let seen = changes.clone();
        let mut pager = pager(
            ScreenPagerArgs::default()
                .on_screen_change(move |_| {
                    seen.fetch_add(1, Ordering::SeqCst);
                }),
        );
        let frame = pager.compose(Vec::<&str>::new()).expect("request succeeds");
        assert!(frame.screens.is_empty());
        assert!(frame.surface.snap_points.is_empty());
        assert_eq!(frame.size.width, 0.0);

        pager.handle_settle(3);
        assert_eq!(pager.current_screen(), 0);
        assert_eq!(changes.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_vertical_axis_geometry_flows_through() {
        let mut pager = pager(ScreenPagerArgs::default().axis(Axis::Vertical));
        let frame = pager.compose(vec!["a", "b"]).expect("request succeeds");
        assert_eq!(frame.size.height, 1280.0);
        assert_eq!(frame.size.width, 320.0);
        assert_eq!(frame.screens[1].rect.top, 640.0);
        assert_eq!(frame.screens[1].rect.left, 0.0);
        assert_eq!(frame.surface.boundary.min, -640.0);
    }

    #[test]
    fn test_controller_handle_is_shared() {
        let mut pager = pager(ScreenPagerArgs::default());
        let controller = pager.controller();
        pager.compose(vec!["a", "b", "c"]).expect("request succeeds");
        pager.handle_settle(1);
        assert_eq!(controller.with(|c| c.current_screen()), 1);
    }

    #[test]
    fn test_defaults_match_documented_values() {
        let args = ScreenPagerArgs::default();
        assert_eq!(args.initial_screen, 0);
        assert_eq!(args.axis, Axis::Horizontal);
        assert_eq!(args.bounce, 0.0);
        assert_eq!(args.damping, 0.5);
        assert_eq!(args.tension, 600.0);
        assert!(!args.locked);
        assert!(args.on_screen_change.is_none());
    }
}
