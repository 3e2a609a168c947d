use serde::{Deserialize, Serialize};

/// A point in hex-relative coordinates, where one parsec is 1.0 wide
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const ORIGIN: PointF = PointF { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &PointF) -> PointF {
        PointF::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &PointF) -> PointF {
        PointF::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, scalar: f32) -> PointF {
        PointF::new(self.x * scalar, self.y * scalar)
    }
}

impl Default for PointF {
    fn default() -> Self {
        Self::ORIGIN
    }
}

/// Non-uniform scale factors, used for squashed or stretched labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeF {
    pub width: f32,
    pub height: f32,
}

impl SizeF {
    pub const UNIT: SizeF = SizeF {
        width: 1.0,
        height: 1.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_uniform(&self) -> bool {
        self.width == self.height
    }
}

impl Default for SizeF {
    fn default() -> Self {
        Self::UNIT
    }
}
