// SPDX: CC0-1.0

use crate::{Number, Point};
use core::fmt;

/// Fraction of the magnitude covered by one pan step.
pub const PAN_STEP: Number = 0.1;

/// View onto the real plane.
///
/// `magnitude` and `epsilon` are never clamped: a zero magnitude collapses
/// the view to a single real point and a negative one mirrors it, while a
/// non-positive epsilon makes the implicit test reject everything.
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub offset_x: Number,
    pub offset_y: Number,
    pub magnitude: Number,
    pub epsilon: Number,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            offset_x: 0.0,
            offset_y: 0.0,
            magnitude: 10.0,
            epsilon: 0.14,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Viewport")
            .field("size", &format_args!("{}x{}", self.width, self.height))
            .field("offset", &(self.offset_x, self.offset_y))
            .field("magnitude", &self.magnitude)
            .field("epsilon", &self.epsilon)
            .finish()
    }
}

impl Viewport {
    /// Maps a screen position to the real plane.
    ///
    /// With a zero width or height the result is non-finite; callers that
    /// iterate pixels should check [`Viewport::is_degenerate`] first.
    #[inline]
    pub fn to_real(&self, screen: Point<Number>) -> Point<Number> {
        Point {
            x: self.magnitude * (screen.x / Number::from(self.width)) + self.offset_x,
            y: self.magnitude * (screen.y / Number::from(self.height)) + self.offset_y,
        }
    }

    #[inline]
    pub const fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    // offset and magnitude are kept, so the visible real extent follows the window
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    /// Moves the view by whole steps, scaled by the magnitude so a step looks
    /// the same at every zoom level.
    pub fn pan(&mut self, dx_steps: Number, dy_steps: Number) {
        self.offset_x += PAN_STEP * self.magnitude * dx_steps;
        self.offset_y += PAN_STEP * self.magnitude * dy_steps;
    }

    pub fn zoom(&mut self, delta: Number) {
        self.magnitude += delta;
    }

    pub fn adjust_epsilon(&mut self, delta: Number) {
        self.epsilon += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_view() -> Viewport {
        Viewport {
            width: 640,
            height: 480,
            offset_x: -3.25,
            offset_y: 1.5,
            magnitude: 7.0,
            epsilon: 0.2,
        }
    }

    #[test]
    fn to_real_is_affine() {
        let view = sample_view();
        let origin = view.to_real(Point::new(0.0, 0.0));
        assert_relative_eq!(origin.x, view.offset_x);
        assert_relative_eq!(origin.y, view.offset_y);

        let step_x = view.magnitude / 640.0;
        let step_y = view.magnitude / 480.0;
        for (sx, sy) in [(0.0, 0.0), (17.0, 3.0), (320.0, 240.0), (639.0, 479.0)] {
            let p = view.to_real(Point::new(sx, sy));
            let px = view.to_real(Point::new(sx + 1.0, sy));
            let py = view.to_real(Point::new(sx, sy + 1.0));
            assert_relative_eq!(px.x - p.x, step_x, epsilon = 1e-12);
            assert_relative_eq!(px.y - p.y, 0.0);
            assert_relative_eq!(py.y - p.y, step_y, epsilon = 1e-12);
            assert_relative_eq!(py.x - p.x, 0.0);
        }
    }

    #[test]
    fn full_width_spans_magnitude() {
        let view = sample_view();
        let far = view.to_real(Point::new(640.0, 480.0));
        assert_relative_eq!(far.x, view.offset_x + view.magnitude);
        assert_relative_eq!(far.y, view.offset_y + view.magnitude);
    }

    #[test]
    fn pan_is_reversible() {
        for d in [1.0, -1.0, 3.0, 0.5] {
            let mut view = sample_view();
            view.pan(d, 0.0);
            view.pan(-d, 0.0);
            assert_relative_eq!(view.offset_x, sample_view().offset_x, epsilon = 1e-12);
            assert_eq!(view.offset_y, sample_view().offset_y);
        }
    }

    #[test]
    fn pan_scales_with_magnitude() {
        let mut view = Viewport::default();
        view.pan(0.0, 1.0);
        assert_relative_eq!(view.offset_y, 1.0);

        view.magnitude = 2.0;
        view.pan(0.0, -1.0);
        assert_relative_eq!(view.offset_y, 0.8);
    }

    #[test]
    fn resize_keeps_view_parameters() {
        let mut view = sample_view();
        view.resize(1024, 77);
        let Viewport {
            width,
            height,
            offset_x,
            offset_y,
            magnitude,
            epsilon,
        } = view;
        let before = sample_view();
        assert_eq!((width, height), (1024, 77));
        assert_eq!(offset_x, before.offset_x);
        assert_eq!(offset_y, before.offset_y);
        assert_eq!(magnitude, before.magnitude);
        assert_eq!(epsilon, before.epsilon);
    }

    #[test]
    fn degenerate_views_do_not_panic() {
        let mut view = Viewport::default();
        view.resize(0, 512);
        assert!(view.is_degenerate());
        assert!(!view.to_real(Point::new(0.0, 0.0)).x.is_finite());

        let mut view = Viewport::default();
        for _ in 0..200 {
            view.zoom(-0.1);
            view.adjust_epsilon(-0.01);
        }
        assert!(view.magnitude < 0.0);
        assert!(view.epsilon < 0.0);
        let p = view.to_real(Point::new(256.0, 256.0));
        assert!(p.x.is_finite() && p.y.is_finite());
    }

    #[test]
    fn display_lists_parameters() {
        let text = Viewport::default().to_string();
        assert!(text.contains("512x512"), "{text}");
        assert!(text.contains("magnitude: 10.0"), "{text}");
        assert!(text.contains("epsilon: 0.14"), "{text}");
    }
}
