//! Color types and utilities

/// RGBA color with u8 components (0 to 255)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Set alpha and return new color
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Self { a: alpha, ..self }
    }

    /// Per-channel linear blend towards `other`.
    ///
    /// Channels are truncated toward zero, never rounded, so a blend with
    /// `t` slightly below 1.0 can stay one step short of `other`. Alpha is
    /// taken from `self`.
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t) as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a,
        }
    }

    /// Composite this color over an opaque background pixel with extra coverage.
    ///
    /// `coverage` scales the source alpha (255 = full). The result is opaque.
    pub fn over(self, dst: [u8; 3], coverage: u8) -> [u8; 3] {
        let alpha = self.a as u32 * coverage as u32 / 255;
        if alpha == 0 {
            return dst;
        }
        if alpha == 255 {
            return [self.r, self.g, self.b];
        }
        let blend =
            |s: u8, d: u8| ((s as u32 * alpha + d as u32 * (255 - alpha) + 127) / 255) as u8;
        [
            blend(self.r, dst[0]),
            blend(self.g, dst[1]),
            blend(self.b, dst[2]),
        ]
    }

    /// Convert to u8 array [r, g, b, a]
    pub const fn to_rgba8(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub const fn to_rgb8(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Self::rgba(r, g, b, a)
    }
}
