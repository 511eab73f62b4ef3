//! # Path Following
//!
//! Moves a point around a closed loop of control points, one segment at a
//! time, using either linear or Catmull-Rom interpolation.

use cgmath::Vector3;
use thiserror::Error;

use super::interpolation::{catmull_rom, lerp};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interpolation {
    Linear,
    CatmullRom { tension: f32 },
}

impl Default for Interpolation {
    fn default() -> Self {
        Interpolation::CatmullRom { tension: 0.5 }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("a closed path needs at least 2 control points, got {0}")]
    TooFewControlPoints(usize),
    #[error("path speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),
}

/// Walks a closed loop of control points.
///
/// Segment `i` runs from control point `i` to control point `i + 1`
/// (wrapping at the end). `speed` is measured in segments per second.
#[derive(Debug, Clone)]
pub struct PathFollower {
    control_points: Vec<Vector3<f32>>,
    interpolation: Interpolation,
    speed: f32,
    segment: usize,
    progress: f32,
}

impl PathFollower {
    pub fn new(
        control_points: Vec<Vector3<f32>>,
        interpolation: Interpolation,
        speed: f32,
    ) -> Result<Self, PathError> {
        if control_points.len() < 2 {
            return Err(PathError::TooFewControlPoints(control_points.len()));
        }
        if !speed.is_finite() || speed < 0.0 {
            return Err(PathError::InvalidSpeed(speed));
        }
        Ok(Self {
            control_points,
            interpolation,
            speed,
            segment: 0,
            progress: 0.0,
        })
    }

    pub fn control_points(&self) -> &[Vector3<f32>] {
        &self.control_points
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<(), PathError> {
        if !speed.is_finite() || speed < 0.0 {
            return Err(PathError::InvalidSpeed(speed));
        }
        self.speed = speed;
        Ok(())
    }

    /// Index of the control point the current segment starts from.
    pub fn segment(&self) -> usize {
        self.segment
    }

    /// Position along the current segment, in `[0, 1)`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Jumps back to the first control point.
    pub fn reset(&mut self) {
        self.segment = 0;
        self.progress = 0.0;
    }

    fn wrap(&self, index: isize) -> usize {
        index.rem_euclid(self.control_points.len() as isize) as usize
    }

    /// Current interpolated position.
    pub fn position(&self) -> Vector3<f32> {
        let i = self.segment as isize;
        let p1 = self.control_points[self.segment];
        let p2 = self.control_points[self.wrap(i + 1)];
        match self.interpolation {
            Interpolation::Linear => lerp(p1, p2, self.progress),
            Interpolation::CatmullRom { tension } => {
                let p0 = self.control_points[self.wrap(i - 1)];
                let p3 = self.control_points[self.wrap(i + 2)];
                catmull_rom(p0, p1, p2, p3, tension, self.progress)
            }
        }
    }

    /// Advances by `delta_time` seconds and returns the new position.
    ///
    /// Whole segments are skipped when the step is longer than one segment;
    /// the fractional remainder carries over into the next one. A step that
    /// is not finite leaves the follower where it is.
    pub fn advance(&mut self, delta_time: f32) -> Vector3<f32> {
        let step = delta_time.max(0.0) * self.speed;
        if !step.is_finite() {
            log::warn!("ignoring non-finite path step (delta_time {delta_time})");
            return self.position();
        }
        self.progress += step;
        if self.progress >= 1.0 {
            let whole = self.progress.floor();
            self.progress -= whole;
            let skipped = whole as usize % self.control_points.len();
            self.segment = (self.segment + skipped) % self.control_points.len();
        }
        self.position()
    }
}
