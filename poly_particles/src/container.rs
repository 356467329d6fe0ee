use cgmath::Vector2;

use crate::{
    debug_lines::{DebugLine, OUTLINE_GREEN},
    error::{require_positive, GeometryError},
};

pub const DEFAULT_BOUNDS_SIZE: [f32; 2] = [16.0, 10.0];

/// Axis aligned box the particles are spawned in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    pub center: Vector2<f32>,
    pub bounds_size: Vector2<f32>,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            center: Vector2::new(0.0, 0.0),
            bounds_size: DEFAULT_BOUNDS_SIZE.into(),
        }
    }
}

impl Container {
    pub fn new(center: Vector2<f32>, bounds_size: Vector2<f32>) -> Result<Self, GeometryError> {
        let container = Self {
            center,
            bounds_size,
        };
        container.validate()?;
        Ok(container)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        require_positive("bounds_size.x", self.bounds_size.x)?;
        require_positive("bounds_size.y", self.bounds_size.y)?;
        if !(self.center.x.is_finite() && self.center.y.is_finite()) {
            return Err(GeometryError::invalid(
                "center",
                format!("expected finite coordinates, got {:?}", self.center),
            ));
        }
        let (min, max) = (self.min(), self.max());
        let span = max - min;
        let finite = [min.x, min.y, max.x, max.y, span.x, span.y]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err(GeometryError::invalid(
                "bounds_size",
                format!(
                    "box around {:?} of size {:?} leaves the f32 range",
                    self.center, self.bounds_size
                ),
            ));
        }
        Ok(())
    }

    pub fn half_size(&self) -> Vector2<f32> {
        self.bounds_size * 0.5
    }

    pub fn min(&self) -> Vector2<f32> {
        self.center - self.half_size()
    }

    pub fn max(&self) -> Vector2<f32> {
        self.center + self.half_size()
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, point: Vector2<f32>) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Vector2<f32>; 4] {
        let (min, max) = (self.min(), self.max());
        [
            Vector2::new(min.x, max.y),
            Vector2::new(max.x, max.y),
            Vector2::new(min.x, min.y),
            Vector2::new(max.x, min.y),
        ]
    }

    /// Top, bottom, left and right edges
    pub fn outline(&self) -> [DebugLine; 4] {
        let [top_left, top_right, bottom_left, bottom_right] = self.corners();
        [
            DebugLine::new(top_left, top_right, OUTLINE_GREEN),
            DebugLine::new(bottom_left, bottom_right, OUTLINE_GREEN),
            DebugLine::new(top_left, bottom_left, OUTLINE_GREEN),
            DebugLine::new(top_right, bottom_right, OUTLINE_GREEN),
        ]
    }
}
