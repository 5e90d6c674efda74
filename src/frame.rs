// SPDX: CC0-1.0

use crate::{
    clock::FrameClock,
    input::{self, Control},
    raster::Scene,
    surface::{BlendMode, Surface},
    viewport::Viewport,
    Rgba,
};
use std::{thread, time::Duration};
use tracing::{info, trace, warn};

/// Sleep at the end of every frame, capping the loop at roughly 33 fps.
pub const FRAME_DELAY: Duration = Duration::from_millis(30);

pub const DEFAULT_BACKGROUND: Rgba = Rgba::BLACK;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Everything a frame needs, owned by the frame loop.
#[derive(Debug)]
pub struct RenderContext<S> {
    pub viewport: Viewport,
    pub clock: FrameClock,
    pub background: Rgba,
    pub scene: Scene,
    pub surface: S,
    state: LoopState,
}

impl<S: Surface> RenderContext<S> {
    pub fn new(viewport: Viewport, scene: Scene, surface: S) -> Self {
        Self {
            viewport,
            clock: FrameClock::start(),
            background: DEFAULT_BACKGROUND,
            scene,
            surface,
            state: LoopState::Running,
        }
    }

    pub const fn state(&self) -> LoopState {
        self.state
    }

    /// Runs frames until a quit event arrives.
    pub fn run(&mut self) {
        info!(viewport = %self.viewport, "frame loop started");
        while self.step() == LoopState::Running {
            thread::sleep(FRAME_DELAY);
        }
        info!("frame loop stopped");
    }

    /// One frame without the trailing sleep.
    ///
    /// A quit event stops the loop at once: later events in the same batch are
    /// dropped and the frame is not redrawn.
    pub fn step(&mut self) -> LoopState {
        if self.state == LoopState::Stopped {
            return self.state;
        }

        let delta = self.clock.tick();

        for event in self.surface.poll_events() {
            if input::handle(&mut self.viewport, event) == Control::Quit {
                self.state = LoopState::Stopped;
                return self.state;
            }
        }

        self.redraw(delta);
        self.state
    }

    fn redraw(&mut self, delta: Duration) {
        self.surface.set_blend_mode(BlendMode::None);
        self.surface.set_draw_color(self.background);
        self.surface.clear();

        let drawn = self.scene.draw(&self.viewport, &mut self.surface);

        if let Err(err) = self.surface.present() {
            warn!("{err}, dropping frame");
        }
        trace!(delta_ms = delta.as_secs_f64() * 1e3, drawn, "frame");
    }
}
