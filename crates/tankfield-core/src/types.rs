//! Fundamental geometric and simulation types.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in integer pixel coordinates.
///
/// `pos` is the top-left corner; y grows downward (screen coordinates).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    /// Rectangle of the given size centered on `center`.
    pub fn from_center(center: IVec2, size: IVec2) -> Self {
        Self {
            pos: center - size / 2,
            size,
        }
    }

    pub fn left(&self) -> i32 {
        self.pos.x
    }

    pub fn top(&self) -> i32 {
        self.pos.y
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> IVec2 {
        self.pos + self.size / 2
    }

    /// Midpoint of the top edge.
    pub fn mid_top(&self) -> IVec2 {
        IVec2::new(self.center().x, self.top())
    }

    /// Midpoint of the left edge.
    pub fn mid_left(&self) -> IVec2 {
        IVec2::new(self.left(), self.center().y)
    }

    /// Midpoint of the bottom edge.
    pub fn mid_bottom(&self) -> IVec2 {
        IVec2::new(self.center().x, self.bottom())
    }

    /// Midpoint of the right edge.
    pub fn mid_right(&self) -> IVec2 {
        IVec2::new(self.right(), self.center().y)
    }

    /// Move so that the midpoint of the top edge lands on `p`.
    pub fn set_mid_top(&mut self, p: IVec2) {
        self.pos = IVec2::new(p.x - self.size.x / 2, p.y);
    }

    /// Move so that the midpoint of the left edge lands on `p`.
    pub fn set_mid_left(&mut self, p: IVec2) {
        self.pos = IVec2::new(p.x, p.y - self.size.y / 2);
    }

    /// Move so that the midpoint of the bottom edge lands on `p`.
    pub fn set_mid_bottom(&mut self, p: IVec2) {
        self.pos = IVec2::new(p.x - self.size.x / 2, p.y - self.size.y);
    }

    /// Move so that the midpoint of the right edge lands on `p`.
    pub fn set_mid_right(&mut self, p: IVec2) {
        self.pos = IVec2::new(p.x - self.size.x, p.y - self.size.y / 2);
    }

    /// Recenter on `p`, keeping the size.
    pub fn set_center(&mut self, p: IVec2) {
        self.pos = p - self.size / 2;
    }

    /// The same rectangle shifted by `delta`.
    pub fn translated(&self, delta: IVec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }

    /// Strict AABB overlap: rectangles that merely touch at an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if `other` lies fully inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
