// SPDX: CC0-1.0

pub mod clock;
pub mod ease;
pub mod error;
pub mod frame;
pub mod input;
pub mod raster;
pub mod surface;
pub mod viewport;
#[cfg(feature = "window")]
pub mod window;

pub type Number = f64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::opaque(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::opaque(0xFF, 0xFF, 0xFF);

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_bytes([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}
