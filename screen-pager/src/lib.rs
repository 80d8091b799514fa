//! A multi-screen swipe pager component.
//!
//! `screen-pager` arranges an arbitrary number of full-viewport screens
//! along a horizontal or vertical axis and snaps between them with
//! physics-based motion. It is a thin presentational wrapper: it derives
//! layout geometry (per-screen offsets, canvas size, snap points, drag
//! boundaries) and delegates gesture recognition, spring simulation, and
//! rendering to a [`PannableSurface`] backend and the host's tree renderer.
//!
//! # Usage
//!
//! Construct a [`ScreenPager`] over a surface backend, compose it with the
//! current children each frame, and feed the backend's settle notifications
//! back through [`ScreenPager::handle_settle`]:
//!
//! ```
//! use screen_pager::{Axis, ScreenPager, ScreenPagerArgs, ScriptedSurface, Viewport};
//!
//! let surface = ScriptedSurface::new();
//! let settles = surface.settle_events();
//!
//! let args = ScreenPagerArgs::default()
//!     .axis(Axis::Horizontal)
//!     .on_screen_change(|screen| println!("now showing screen {screen}"));
//! let mut pager = ScreenPager::new(args, Viewport::new(320.0, 640.0), surface);
//!
//! let frame = pager.compose(vec!["home", "feed", "settings"])?;
//! assert_eq!(frame.screens.len(), 3);
//!
//! pager.move_to_screen(1)?;
//! while let Some(index) = settles.next() {
//!     pager.handle_settle(index);
//! }
//! assert_eq!(pager.current_screen(), 1);
//! # Ok::<(), screen_pager::SurfaceError>(())
//! ```
//!
//! The composed [`PagerFrame`] is plain data: an outer frame size, the
//! surface configuration, and one positioned wrapper per child carrying its
//! `active` flag. The host renderer decides what to do with it.
#![deny(missing_docs, clippy::unwrap_used)]

mod geometry;
mod pager;
mod state;
mod surface;

pub use geometry::{Axis, Boundary, Geometry, Point, ScreenRect, Size, SnapPoint, Viewport};
pub use pager::{
    PagerController, PagerFrame, Screen, ScreenPager, ScreenPagerArgs, layout_children,
};
pub use state::State;
pub use surface::{
    PannableSurface, ScriptedSurface, SettleEvents, SurfaceConfig, SurfaceError,
};
