//! Geometric primitives
//!
//! Coordinates are whole pixels. Rectangles use inclusive corners, so
//! `Rect::from_corners(0, 0, 9, 9)` covers a 10×10 block.

/// A 2D pixel position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A (width, height) pixel-dimension pair
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The shorter side, used to scale layouts across aspect ratios
    pub fn min_side(&self) -> u32 {
        self.width.min(self.height)
    }

    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }
}

/// An axis-aligned rectangle with inclusive corners
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn from_corners(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x0: x,
            y0: y,
            x1: x + width - 1,
            y1: y + height - 1,
        }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    pub fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    /// Shrink every edge by `amount` pixels
    pub fn inset(&self, amount: i32) -> Self {
        Self {
            x0: self.x0 + amount,
            y0: self.y0 + amount,
            x1: self.x1 - amount,
            y1: self.y1 - amount,
        }
    }

    /// Clip to the `[0, width) x [0, height)` pixel grid
    pub fn clip_to(&self, width: u32, height: u32) -> Self {
        Self {
            x0: self.x0.max(0),
            y0: self.y0.max(0),
            x1: self.x1.min(width as i32 - 1),
            y1: self.y1.min(height as i32 - 1),
        }
    }
}

/// A rounded rectangle with a uniform corner radius
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f32,
}

impl RoundedRect {
    pub const fn new(rect: Rect, radius: f32) -> Self {
        Self { rect, radius }
    }

    /// Whether the pixel whose top-left corner is `(px, py)` is covered.
    ///
    /// Coverage is sampled at the pixel center against the shape spanning
    /// `[x0, x1 + 1] x [y0, y1 + 1]`.
    pub fn covers(&self, px: i32, py: i32) -> bool {
        let left = self.rect.x0 as f32;
        let top = self.rect.y0 as f32;
        let right = (self.rect.x1 + 1) as f32;
        let bottom = (self.rect.y1 + 1) as f32;
        if right <= left || bottom <= top {
            return false;
        }

        let x = px as f32 + 0.5;
        let y = py as f32 + 0.5;
        if x < left || x > right || y < top || y > bottom {
            return false;
        }

        let r = self
            .radius
            .max(0.0)
            .min((right - left) / 2.0)
            .min((bottom - top) / 2.0);
        if r <= 0.0 {
            return true;
        }

        // Distance from the nearest corner circle center
        let cx = x.clamp(left + r, right - r);
        let cy = y.clamp(top + r, bottom - r);
        let dx = x - cx;
        let dy = y - cy;
        dx * dx + dy * dy <= r * r
    }

    /// The same shape shrunk by `amount` on every side
    pub fn inset(&self, amount: i32) -> Self {
        Self {
            rect: self.rect.inset(amount),
            radius: (self.radius - amount as f32).max(0.0),
        }
    }
}

/// A circle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
}

impl Circle {
    pub const fn new(center: Point, radius: i32) -> Self {
        Self { center, radius }
    }

    /// Bounding box with inclusive corners `(cx - r, cy - r, cx + r, cy + r)`
    pub fn bounds(&self) -> Rect {
        Rect::from_corners(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.center.x + self.radius,
            self.center.y + self.radius,
        )
    }
}

/// An ellipse inscribed in a bounding rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Ellipse {
    pub bounds: Rect,
}

impl Ellipse {
    pub const fn new(bounds: Rect) -> Self {
        Self { bounds }
    }

    /// Whether the pixel whose top-left corner is `(px, py)` is covered,
    /// sampled at the pixel center.
    pub fn covers(&self, px: i32, py: i32) -> bool {
        let rx = (self.bounds.x1 + 1 - self.bounds.x0) as f32 / 2.0;
        let ry = (self.bounds.y1 + 1 - self.bounds.y0) as f32 / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return false;
        }
        let cx = self.bounds.x0 as f32 + rx;
        let cy = self.bounds.y0 as f32 + ry;
        let dx = (px as f32 + 0.5 - cx) / rx;
        let dy = (py as f32 + 0.5 - cy) / ry;
        dx * dx + dy * dy <= 1.0
    }
}
