// SPDX: CC0-1.0

// winit owns the window and the event pump, pixels uploads the canvas to it

use crate::{
    error::{InitError, PresentError},
    input::{InputEvent, Key},
    surface::{BlendMode, Canvas, Surface},
    Rgba,
};
use pixels::{Pixels, SurfaceTexture};
use std::time::Duration;
use tracing::warn;
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowBuilder},
};

pub const WINDOW_TITLE: &str = "implicit plot";

fn key_from_code(code: KeyCode) -> Option<Key> {
    Some(match code {
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyQ => Key::Q,
        _ => return None,
    })
}

fn translate(event: Event<()>) -> Option<InputEvent> {
    match event {
        Event::WindowEvent { event, .. } => Some(translate_window_event(event)),
        _ => None,
    }
}

fn translate_window_event(event: WindowEvent) -> InputEvent {
    match event {
        WindowEvent::CloseRequested => InputEvent::Quit,
        WindowEvent::Resized(size) => InputEvent::Resized {
            width: size.width,
            height: size.height,
        },
        WindowEvent::KeyboardInput {
            event:
                KeyEvent {
                    physical_key: PhysicalKey::Code(code),
                    state: ElementState::Pressed,
                    ..
                },
            ..
        } => key_from_code(code).map_or(InputEvent::Other, InputEvent::KeyPressed),
        _ => InputEvent::Other,
    }
}

/// A resizable window showing a [`Canvas`] one canvas pixel per window pixel.
pub struct WindowSurface {
    canvas: Canvas,
    // dropped before the window it draws into
    pixels: Pixels,
    window: Window,
    event_loop: EventLoop<()>,
}

impl WindowSurface {
    pub fn create(width: u32, height: u32) -> Result<Self, InitError> {
        let event_loop = EventLoop::new().map_err(|err| InitError::EventLoop(Box::new(err)))?;
        let window = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(true)
            .build(&event_loop)
            .map_err(|err| InitError::Window(Box::new(err)))?;

        // the platform may not honour the requested size
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let pixels = Pixels::new(size.width, size.height, surface_texture).map_err(|err| {
            InitError::Buffer {
                width: size.width,
                height: size.height,
                source: Box::new(err),
            }
        })?;

        Ok(Self {
            canvas: Canvas::new(size.width, size.height),
            pixels,
            window,
            event_loop,
        })
    }

    pub fn size(&self) -> PhysicalSize<u32> {
        self.window.inner_size()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.canvas.resize(width, height);
        // a minimized window has no area, keep the old buffers until it comes back
        if width == 0 || height == 0 {
            return;
        }
        if let Err(err) = self.pixels.resize_surface(width, height) {
            warn!("failed to resize surface: {err}");
        }
        if let Err(err) = self.pixels.resize_buffer(width, height) {
            warn!("failed to resize pixel buffer: {err}");
        }
    }
}

impl Surface for WindowSurface {
    type Events = std::vec::IntoIter<InputEvent>;

    fn poll_events(&mut self) -> Self::Events {
        let mut events = Vec::new();
        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _target| {
                events.extend(translate(event));
            });
        if let PumpStatus::Exit(_) = status {
            events.push(InputEvent::Quit);
        }

        for event in &events {
            if let InputEvent::Resized { width, height } = *event {
                self.resize(width, height);
            }
        }
        events.into_iter()
    }

    fn set_draw_color(&mut self, color: Rgba) {
        self.canvas.set_draw_color(color);
    }

    fn set_blend_mode(&mut self, mode: BlendMode) {
        self.canvas.set_blend_mode(mode);
    }

    fn draw_point(&mut self, x: i32, y: i32) {
        self.canvas.draw_point(x, y);
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn present(&mut self) -> Result<(), PresentError> {
        let frame = self.pixels.frame_mut();
        // sizes differ only while minimized, keep showing the last frame then
        if frame.len() == self.canvas.frame().len() {
            frame.copy_from_slice(self.canvas.frame());
        }
        self.pixels
            .render()
            .map_err(|err| PresentError(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_translate() {
        assert_eq!(key_from_code(KeyCode::ArrowRight), Some(Key::Right));
        assert_eq!(key_from_code(KeyCode::KeyQ), Some(Key::Q));
        assert_eq!(key_from_code(KeyCode::KeyW), None);
    }

    #[test]
    fn window_events_translate() {
        assert_eq!(
            translate_window_event(WindowEvent::CloseRequested),
            InputEvent::Quit
        );
        assert_eq!(
            translate_window_event(WindowEvent::Resized(PhysicalSize::new(640, 0))),
            InputEvent::Resized {
                width: 640,
                height: 0
            }
        );
        assert_eq!(
            translate_window_event(WindowEvent::Focused(true)),
            InputEvent::Other
        );
        assert_eq!(translate(Event::AboutToWait), None);
    }
}
