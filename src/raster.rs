// SPDX: CC0-1.0

use crate::{
    ease,
    surface::{BlendMode, Surface},
    viewport::Viewport,
    Number, Point, Rgba,
};

/// Acceptance test applied to `|g(x, y)|`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Threshold {
    /// `|g| < viewport.epsilon`
    Epsilon,
    /// `|g| <= value`, independent of the viewport
    AtMost(Number),
}

/// Implicit curve `g(x, y) = 0`.
#[derive(Clone, Copy, Debug)]
pub struct Curve {
    pub name: &'static str,
    pub g: fn(Point<Number>) -> Number,
    pub threshold: Threshold,
}

impl Curve {
    /// NaN and infinite values of `g` never pass.
    #[inline]
    pub fn accepts(&self, p: Point<Number>, epsilon: Number) -> bool {
        let dist = (self.g)(p).abs();
        match self.threshold {
            Threshold::Epsilon => dist < epsilon,
            Threshold::AtMost(max) => dist <= max,
        }
    }
}

pub fn interference(Point { x, y }: Point<Number>) -> Number {
    (x * x - y * y).sin() - (x * y).sin() + (x * y).cos()
}

pub fn trig_identity(Point { x, y }: Point<Number>) -> Number {
    let r = x * x + y * y;
    r.sin().powi(2) + r.tan().powi(2) - 1.0
}

pub fn nested_trig(Point { x, y }: Point<Number>) -> Number {
    (x.sin() + y.cos()).sin() - ((x * y).sin() + x.cos()).cos()
}

pub const INTERFERENCE: Curve = Curve {
    name: "sin(x^2 - y^2) - sin(xy) + cos(xy)",
    g: interference,
    threshold: Threshold::Epsilon,
};

pub const TRIG_IDENTITY: Curve = Curve {
    name: "sin^2(x^2 + y^2) + tan^2(x^2 + y^2) - 1",
    g: trig_identity,
    threshold: Threshold::AtMost(0.0),
};

pub const NESTED_TRIG: Curve = Curve {
    name: "sin(sin x + cos y) - cos(sin(xy) + cos x)",
    g: nested_trig,
    threshold: Threshold::AtMost(0.4),
};

#[derive(Clone, Copy, Debug)]
pub enum Shape {
    Implicit(Curve),
    /// `y = f(x)` over `x` in `[0, 1)`, stretched over the whole window.
    Explicit {
        name: &'static str,
        f: fn(Number) -> Number,
    },
}

/// One sequential draw over the whole window.
#[derive(Clone, Copy, Debug)]
pub struct Pass {
    pub shape: Shape,
    pub color: Rgba,
    pub blend: BlendMode,
}

impl Pass {
    pub const fn name(&self) -> &'static str {
        match self.shape {
            Shape::Implicit(curve) => curve.name,
            Shape::Explicit { name, .. } => name,
        }
    }

    /// Draws the pass and returns the number of points drawn.
    pub fn draw<S: Surface>(&self, viewport: &Viewport, surface: &mut S) -> usize {
        surface.set_blend_mode(self.blend);
        surface.set_draw_color(self.color);
        let point = |p: Point<i32>| surface.draw_point(p.x, p.y);
        match self.shape {
            Shape::Implicit(curve) => rasterize(
                viewport,
                |real| curve.accepts(real, viewport.epsilon),
                point,
            ),
            Shape::Explicit { f, .. } => plot(viewport, f, point),
        }
    }
}

/// Ordered list of passes, later passes overdraw earlier ones.
#[derive(Clone, Debug)]
pub struct Scene {
    pub passes: Vec<Pass>,
}

impl Scene {
    pub const PRIMARY_COLOR: Rgba = Rgba::opaque(0xFF, 0xC3, 0x00);

    /// The interference curve alone.
    pub fn primary() -> Self {
        Self {
            passes: vec![Pass {
                shape: Shape::Implicit(INTERFERENCE),
                color: Self::PRIMARY_COLOR,
                blend: BlendMode::None,
            }],
        }
    }

    /// Every curve: the primary, the secondary curves tinting what is below,
    /// then the explicit reference curves.
    pub fn full() -> Self {
        let mut scene = Self::primary();
        scene.passes.extend([
            Pass {
                shape: Shape::Implicit(TRIG_IDENTITY),
                color: Rgba::opaque(0xC7, 0x00, 0x39),
                blend: BlendMode::Mod,
            },
            Pass {
                shape: Shape::Implicit(NESTED_TRIG),
                color: Rgba::opaque(0x58, 0x18, 0x45),
                blend: BlendMode::Mod,
            },
        ]);
        let references: [(&'static str, fn(Number) -> Number, Rgba); 4] = [
            ("sqrt(x)", ease::sqrt, Rgba::opaque(0x3D, 0xDC, 0x97)),
            ("2x^2", ease::double_square, Rgba::opaque(0x25, 0x6E, 0xFF)),
            ("ease in bounce", ease::ease_in_bounce, Rgba::WHITE),
            ("ease in out cubic", ease::ease_in_out_cubic, Rgba::opaque(0xFF, 0x49, 0x5C)),
        ];
        for (name, f, color) in references {
            scene.passes.push(Pass {
                shape: Shape::Explicit { name, f },
                color,
                blend: BlendMode::None,
            });
        }
        scene
    }

    pub fn draw<S: Surface>(&self, viewport: &Viewport, surface: &mut S) -> usize {
        self.passes
            .iter()
            .map(|pass| pass.draw(viewport, surface))
            .sum()
    }
}

fn screen_size(viewport: &Viewport) -> Option<(i32, i32)> {
    if viewport.is_degenerate() {
        return None;
    }
    Some((
        i32::try_from(viewport.width).unwrap_or(i32::MAX),
        i32::try_from(viewport.height).unwrap_or(i32::MAX),
    ))
}

/// Tests every pixel of the viewport and draws the accepted ones, flipped so
/// that real y grows upwards.
///
/// Returns the number of points drawn. A zero-sized viewport draws nothing.
pub fn rasterize<A, D>(viewport: &Viewport, mut accept: A, mut draw: D) -> usize
where
    A: FnMut(Point<Number>) -> bool, // real-space membership test
    D: FnMut(Point<i32>),            // draw at screen position
{
    let Some((width, height)) = screen_size(viewport) else {
        return 0;
    };

    let mut drawn = 0;
    for sy in 0..height {
        for sx in 0..width {
            let real = viewport.to_real(Point::new(Number::from(sx), Number::from(sy)));
            if accept(real) {
                draw(Point::new(sx, height - sy));
                drawn += 1;
            }
        }
    }
    drawn
}

/// Plots `y = f(x)` with `x = sx / width`, at `(sx, height - y * height)`.
///
/// Results that are not finite are skipped.
pub fn plot<F, D>(viewport: &Viewport, mut f: F, mut draw: D) -> usize
where
    F: FnMut(Number) -> Number,
    D: FnMut(Point<i32>),
{
    let Some((width, _)) = screen_size(viewport) else {
        return 0;
    };
    let (w, h) = (Number::from(viewport.width), Number::from(viewport.height));

    let mut drawn = 0;
    for sx in 0..width {
        let y = f(Number::from(sx) / w);
        if !y.is_finite() {
            continue;
        }
        // saturating cast, anything far off screen gets clipped by the surface
        let sy = (h - y * h) as i32;
        draw(Point::new(sx, sy));
        drawn += 1;
    }
    drawn
}
