// SPDX: CC0-1.0

use crate::{viewport::Viewport, Number};
use tracing::{debug, info};

pub const ZOOM_STEP: Number = 0.1;
pub const EPSILON_STEP: Number = 0.01;

/// Keys bound to an [`Action`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    A,
    D,
    E,
    Q,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Resized { width: u32, height: u32 },
    KeyPressed(Key),
    Quit,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    PanUp,
    PanDown,
    PanLeft,
    PanRight,
    ZoomIn,
    ZoomOut,
    EpsilonUp,
    EpsilonDown,
}

impl Action {
    pub const fn exhaustive() -> &'static [Action] {
        &[
            Self::PanUp,
            Self::PanDown,
            Self::PanLeft,
            Self::PanRight,
            Self::ZoomIn,
            Self::ZoomOut,
            Self::EpsilonUp,
            Self::EpsilonDown,
        ]
    }

    pub const fn from_key(key: Key) -> Self {
        match key {
            Key::Up => Self::PanUp,
            Key::Down => Self::PanDown,
            Key::Left => Self::PanLeft,
            Key::Right => Self::PanRight,
            Key::Q => Self::ZoomIn,
            Key::E => Self::ZoomOut,
            Key::D => Self::EpsilonUp,
            Key::A => Self::EpsilonDown,
        }
    }

    pub const fn key(&self) -> Key {
        match self {
            Self::PanUp => Key::Up,
            Self::PanDown => Key::Down,
            Self::PanLeft => Key::Left,
            Self::PanRight => Key::Right,
            Self::ZoomIn => Key::Q,
            Self::ZoomOut => Key::E,
            Self::EpsilonUp => Key::D,
            Self::EpsilonDown => Key::A,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::PanUp => "pan up",
            Self::PanDown => "pan down",
            Self::PanLeft => "pan left",
            Self::PanRight => "pan right",
            Self::ZoomIn => "zoom in",
            Self::ZoomOut => "zoom out",
            Self::EpsilonUp => "epsilon up",
            Self::EpsilonDown => "epsilon down",
        }
    }

    pub const fn help(&self) -> &'static str {
        match self {
            Self::PanUp | Self::PanDown | Self::PanLeft | Self::PanRight => {
                "move the view by a tenth of the magnitude"
            }
            Self::ZoomIn => "shrink the magnitude, showing less of the plane",
            Self::ZoomOut => "grow the magnitude, showing more of the plane",
            Self::EpsilonUp => "loosen the curve threshold (thicker curves)",
            Self::EpsilonDown => "tighten the curve threshold (thinner curves)",
        }
    }

    pub fn apply(&self, viewport: &mut Viewport) {
        match self {
            Self::PanUp => viewport.pan(0.0, 1.0),
            Self::PanDown => viewport.pan(0.0, -1.0),
            Self::PanLeft => viewport.pan(-1.0, 0.0),
            Self::PanRight => viewport.pan(1.0, 0.0),
            Self::ZoomIn => viewport.zoom(-ZOOM_STEP),
            Self::ZoomOut => viewport.zoom(ZOOM_STEP),
            Self::EpsilonUp => viewport.adjust_epsilon(EPSILON_STEP),
            Self::EpsilonDown => viewport.adjust_epsilon(-EPSILON_STEP),
        }
    }
}

/// What the frame loop should do after an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub fn handle(viewport: &mut Viewport, event: InputEvent) -> Control {
    match event {
        InputEvent::Resized { width, height } => {
            viewport.resize(width, height);
            info!(width, height, "window resized");
            Control::Continue
        }

        InputEvent::KeyPressed(key) => {
            let action = Action::from_key(key);
            action.apply(viewport);
            debug!(action = action.name(), %viewport, "applied key action");
            Control::Continue
        }

        InputEvent::Quit => Control::Quit,

        InputEvent::Other => Control::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn key_table_is_a_bijection() {
        for action in Action::exhaustive() {
            assert_eq!(Action::from_key(action.key()), *action);
        }
        let keys: HashSet<Key> = Action::exhaustive().iter().map(Action::key).collect();
        assert_eq!(keys.len(), Action::exhaustive().len());
    }

    #[test]
    fn each_key_changes_exactly_one_parameter() {
        for action in Action::exhaustive() {
            let mut view = Viewport::default();
            let before = view.clone();
            assert_eq!(
                handle(&mut view, InputEvent::KeyPressed(action.key())),
                Control::Continue
            );

            let changed = [
                view.offset_x != before.offset_x,
                view.offset_y != before.offset_y,
                view.magnitude != before.magnitude,
                view.epsilon != before.epsilon,
            ];
            assert_eq!(
                changed.iter().filter(|c| **c).count(),
                1,
                "{} changed {changed:?}",
                action.name()
            );
            assert_eq!((view.width, view.height), (before.width, before.height));
        }
    }

    #[test]
    fn key_directions() {
        let mut view = Viewport::default();
        handle(&mut view, InputEvent::KeyPressed(Key::Left));
        assert_eq!(view.offset_x, -1.0);
        handle(&mut view, InputEvent::KeyPressed(Key::Down));
        assert_eq!(view.offset_y, -1.0);
        handle(&mut view, InputEvent::KeyPressed(Key::E));
        assert_eq!(view.magnitude, 10.0 + ZOOM_STEP);
        handle(&mut view, InputEvent::KeyPressed(Key::A));
        assert_eq!(view.epsilon, 0.14 - EPSILON_STEP);
    }

    #[test]
    fn repeated_presses_step_discretely() {
        let mut view = Viewport::default();
        for _ in 0..3 {
            handle(&mut view, InputEvent::KeyPressed(Key::D));
        }
        approx::assert_relative_eq!(view.epsilon, 0.17, epsilon = 1e-12);
    }

    #[test]
    fn resize_quit_and_other() {
        let mut view = Viewport::default();
        assert_eq!(
            handle(
                &mut view,
                InputEvent::Resized {
                    width: 300,
                    height: 200
                }
            ),
            Control::Continue
        );
        assert_eq!((view.width, view.height), (300, 200));

        let before = view.clone();
        assert_eq!(handle(&mut view, InputEvent::Other), Control::Continue);
        assert_eq!(handle(&mut view, InputEvent::Quit), Control::Quit);
        assert_eq!(view, before);
    }
}
