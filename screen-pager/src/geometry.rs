//! Pure layout geometry for the pager.
//!
//! Every formula hangs off a single per-axis `extent` (the viewport width or
//! height, chosen by the active axis). Snap points, boundaries, and child
//! placement all derive from the same per-index offset, so a settled surface
//! always lands a screen exactly on its container position.

/// Orientation of the pager's active axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Axis {
    /// Screens are laid out left-to-right and swiped horizontally.
    #[default]
    Horizontal,
    /// Screens are laid out top-to-bottom and swiped vertically.
    Vertical,
}

impl Axis {
    /// Viewport extent along this axis.
    pub fn extent(self, viewport: Viewport) -> f32 {
        match self {
            Self::Horizontal => viewport.width,
            Self::Vertical => viewport.height,
        }
    }

    fn pack_point(self, main: f32) -> Point {
        match self {
            Self::Horizontal => Point { x: main, y: 0.0 },
            Self::Vertical => Point { x: 0.0, y: main },
        }
    }

    fn pack_size(self, main: f32, cross: f32) -> Size {
        match self {
            Self::Horizontal => Size {
                width: main,
                height: cross,
            },
            Self::Vertical => Size {
                width: cross,
                height: main,
            },
        }
    }
}

/// Host viewport dimensions, read once when the pager is created and treated
/// as constant for its lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Viewport {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
}

impl Viewport {
    /// Creates a viewport from the host's reported dimensions.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A translation of the pannable canvas, in pixels.
///
/// The inactive axis component is always zero.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

/// A two-dimensional size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

/// Absolutely positioned region occupied by one screen inside the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    /// Offset from the canvas left edge.
    pub left: f32,
    /// Offset from the canvas top edge.
    pub top: f32,
    /// Region width; always one viewport wide.
    pub width: f32,
    /// Region height; always one viewport tall.
    pub height: f32,
}

/// A rest position the pannable surface may settle into, annotated with the
/// spring parameters the physics backend should use to reach it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SnapPoint {
    /// Horizontal rest offset.
    pub x: f32,
    /// Vertical rest offset.
    pub y: f32,
    /// Spring damping.
    pub damping: f32,
    /// Spring tension.
    pub tension: f32,
}

/// Inclusive pan range along the active axis, plus the elastic overscroll
/// allowance past either edge. The inactive axis is unconstrained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    /// Most negative permitted offset (last screen in view).
    pub min: f32,
    /// Most positive permitted offset (first screen in view).
    pub max: f32,
    /// Elastic overscroll allowance.
    pub bounce: f32,
}

/// Derived layout for one compose pass.
///
/// Stateless: a `Geometry` is rebuilt every compose from the axis, the
/// viewport, and the current child count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    axis: Axis,
    viewport: Viewport,
    screen_count: usize,
}

impl Geometry {
    /// Creates the layout for `screen_count` screens along `axis`.
    pub fn new(axis: Axis, viewport: Viewport, screen_count: usize) -> Self {
        Self {
            axis,
            viewport,
            screen_count,
        }
    }

    /// Number of screens in this layout.
    pub fn screen_count(&self) -> usize {
        self.screen_count
    }

    /// Active axis of this layout.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    fn extent(&self) -> f32 {
        self.axis.extent(self.viewport)
    }

    /// Canvas translation that places screen `index` at the viewport origin.
    ///
    /// Screens are laid out end-to-end along the active axis starting at
    /// offset 0, so showing screen `i` means translating the canvas by
    /// `-i * extent`.
    pub fn position_for_index(&self, index: usize) -> Point {
        self.axis.pack_point(-(index as f32) * self.extent())
    }

    /// Total extent of the pannable canvas: `extent * N` along the active
    /// axis, one viewport along the inactive axis.
    pub fn container_size(&self) -> Size {
        let cross = match self.axis {
            Axis::Horizontal => self.viewport.height,
            Axis::Vertical => self.viewport.width,
        };
        self.axis
            .pack_size(self.extent() * self.screen_count as f32, cross)
    }

    /// Fixed viewport-sized region for screen `index`, positioned at
    /// `+index * extent` along the active axis. The exact negation of
    /// [`position_for_index`](Self::position_for_index), so a settled snap
    /// lands the screen precisely at the viewport origin.
    pub fn child_container_rect(&self, index: usize) -> ScreenRect {
        let position = self.position_for_index(index);
        ScreenRect {
            left: -position.x,
            top: -position.y,
            width: self.viewport.width,
            height: self.viewport.height,
        }
    }

    /// One snap point per screen, each annotated with the configured spring
    /// parameters.
    pub fn snap_points(&self, damping: f32, tension: f32) -> Vec<SnapPoint> {
        (0..self.screen_count)
            .map(|index| {
                let position = self.position_for_index(index);
                SnapPoint {
                    x: position.x,
                    y: position.y,
                    damping,
                    tension,
                }
            })
            .collect()
    }

    /// Permitted pan range along the active axis: from the last screen's
    /// rest offset up to 0. With no screens the range collapses to `[0, 0]`.
    pub fn boundary(&self, bounce: f32) -> Boundary {
        Boundary {
            min: -(self.screen_count.saturating_sub(1) as f32) * self.extent(),
            max: 0.0,
            bounce,
        }
    }
}
