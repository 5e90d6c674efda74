// SPDX: CC0-1.0

// reference curves over x in [0, 1], see https://easings.net

use crate::Number;

const N1: Number = 7.5625;
const D1: Number = 2.75;

pub fn ease_out_bounce(x: Number) -> Number {
    // each interval is a parabola n1*(x - offset)^2 + bias
    let (offset, bias) = if x < 1.0 / D1 {
        (0.0, 0.0)
    } else if x < 2.0 / D1 {
        (1.5 / D1, 0.75)
    } else if x < 2.5 / D1 {
        (2.25 / D1, 0.9375)
    } else {
        (2.625 / D1, 0.984375)
    };
    let x = x - offset;
    N1 * x * x + bias
}

pub fn ease_in_bounce(x: Number) -> Number {
    1.0 - ease_out_bounce(1.0 - x)
}

pub fn ease_in_out_cubic(x: Number) -> Number {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

#[inline]
pub fn sqrt(x: Number) -> Number {
    x.sqrt()
}

#[inline]
pub fn double_square(x: Number) -> Number {
    2.0 * x * x
}
