// SPDX: CC0-1.0

use crate::{error::PresentError, input::InputEvent, Rgba};
use std::collections::VecDeque;

/// How [`Surface::draw_point`] combines the draw color with the pixel below.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    /// Overwrite the destination.
    #[default]
    None,
    /// Multiply the destination channels by the source channels. Alpha is kept.
    Mod,
}

/// Something points can be drawn on and input events read from.
///
/// The surface is released on drop.
pub trait Surface {
    type Events: Iterator<Item = InputEvent>;

    /// Takes every event queued since the last call without blocking.
    fn poll_events(&mut self) -> Self::Events;

    fn set_draw_color(&mut self, color: Rgba);

    fn set_blend_mode(&mut self, mode: BlendMode);

    /// Points outside the surface are clipped.
    fn draw_point(&mut self, x: i32, y: i32);

    /// Fills the whole surface with the draw color, ignoring the blend mode.
    fn clear(&mut self);

    fn present(&mut self) -> Result<(), PresentError>;
}

/// In-memory RGBA framebuffer with a queue of pending input events.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    buf: Vec<u8>,
    color: Rgba,
    blend: BlendMode,
    events: VecDeque<InputEvent>,
    presented: usize,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buf: vec![0; Self::buf_len(width, height)],
            color: Rgba::WHITE,
            blend: BlendMode::None,
            events: VecDeque::new(),
            presented: 0,
        }
    }

    fn buf_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * 4
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA bytes, top row first.
    pub fn frame(&self) -> &[u8] {
        &self.buf
    }

    /// Number of frames presented so far.
    pub const fn presented(&self) -> usize {
        self.presented
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Reallocates the buffer; previous contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.buf = vec![0; Self::buf_len(width, height)];
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = u32::try_from(x).ok().filter(|x| *x < self.width)?;
        let y = u32::try_from(y).ok().filter(|y| *y < self.height)?;
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        let i = self.index(x, y)?;
        let mut px = [0; 4];
        px.copy_from_slice(&self.buf[i..i + 4]);
        Some(Rgba::from_bytes(px))
    }

    /// Counts the pixels currently holding `color`.
    pub fn count(&self, color: Rgba) -> usize {
        let bytes = color.to_bytes();
        self.buf.chunks_exact(4).filter(|px| *px == bytes).count()
    }
}

impl Surface for Canvas {
    type Events = std::vec::IntoIter<InputEvent>;

    fn poll_events(&mut self) -> Self::Events {
        let events: Vec<InputEvent> = self.events.drain(..).collect();
        // keep the buffer the size of the "window", like a real backend would
        for event in &events {
            if let InputEvent::Resized { width, height } = *event {
                self.resize(width, height);
            }
        }
        events.into_iter()
    }

    fn set_draw_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.blend = mode;
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let src = self.color.to_bytes();
        let dst = &mut self.buf[i..i + 4];
        match self.blend {
            BlendMode::None => dst.copy_from_slice(&src),
            BlendMode::Mod => {
                for (d, s) in dst.iter_mut().zip(src).take(3) {
                    *d = (u16::from(*d) * u16::from(s) / 255) as u8;
                }
            }
        }
    }

    fn clear(&mut self) {
        let px = self.color.to_bytes();
        for chunk in self.buf.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    fn present(&mut self) -> Result<(), PresentError> {
        self.presented += 1;
        Ok(())
    }
}
