//! Pointer tracking and the keyboard control surface.
//!
//! [`PointerState`] is the simulation's view of the cursor: a last-known
//! screen-pixel position (or absent, once the cursor leaves the surface)
//! plus the raw pixel delta of the most recent motion event. Every motion
//! behavior is a strict no-op while the pointer is absent.
//!
//! [`Input`] translates winit events into pointer updates. Position comes
//! from `CursorMoved`, movement from the unfiltered `MouseMotion` device
//! stream, so the first move after the cursor re-enters the surface still
//! carries its real delta. Keyboard events map to [`ControlAction`]s for
//! the demo controls: digits 1-8 select a behavior, Up/Down change the
//! particle count, Left/Right shift the hue.

use glam::Vec2;
use winit::event::{DeviceEvent, ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::math::to_device;
use crate::rules::Behavior;

/// Keyboard step applied per Up/Down press.
const COUNT_STEP: i32 = 10;
/// Keyboard step applied per Left/Right press, in degrees.
const HUE_STEP: f32 = 10.0;

/// Last-known pointer position and movement, in screen pixels.
///
/// `position` is `None` until the first move event and again whenever the
/// cursor leaves the tracked surface. `delta` holds the most recent raw
/// motion and keeps that value between events; behaviors only read it
/// while `position` is present.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerState {
    position: Option<Vec2>,
    delta: Vec2,
}

impl PointerState {
    /// Pointer state with no position and zero delta.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Pointer state pinned at a pixel position, for tests and synthetic
    /// contexts.
    pub fn at(position: Vec2) -> Self {
        Self {
            position: Some(position),
            delta: Vec2::ZERO,
        }
    }

    /// Whether a pointer position is currently known.
    pub fn is_present(&self) -> bool {
        self.position.is_some()
    }

    /// Screen-pixel position, if the pointer is on the surface.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Raw pixel movement of the most recent motion event.
    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    /// Pointer position mapped to device coordinates for a surface of
    /// `width` x `height` pixels.
    pub fn device_position(&self, width: f32, height: f32) -> Option<Vec2> {
        self.position.map(|p| to_device(p, width, height))
    }

    /// Record a cursor position on the surface.
    pub fn move_to(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    /// Record raw pointer motion, independent of surface position.
    pub fn motion(&mut self, delta: Vec2) {
        self.delta = delta;
    }

    /// Record that the cursor left the surface. Motion is kept; it stays
    /// inert until the position is known again.
    pub fn left(&mut self) {
        self.position = None;
    }
}

/// A configuration change requested through the keyboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    /// Switch the active motion behavior.
    SelectBehavior(Behavior),
    /// Add to the particle count (negative to remove). Triggers a full
    /// pool rebuild.
    AdjustCount(i32),
    /// Shift the shared hue by degrees. Triggers a recolor, not a rebuild.
    AdjustHue(f32),
}

/// Window-event translation for the simulation app.
#[derive(Debug, Default)]
pub struct Input {
    pointer: PointerState,
    surface_size: (u32, u32),
}

impl Input {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pointer: PointerState::absent(),
            surface_size: (width, height),
        }
    }

    /// Current pointer state snapshot.
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Surface size in pixels.
    pub fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    /// Track a surface resize.
    pub fn set_surface_size(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.surface_size = (width, height);
        }
    }

    /// Process a winit window event. Returns a [`ControlAction`] when the
    /// event maps to one of the demo controls.
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<ControlAction> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer
                    .move_to(Vec2::new(position.x as f32, position.y as f32));
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.left();
                None
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed {
                    return None;
                }
                let PhysicalKey::Code(key) = event.physical_key else {
                    return None;
                };
                Self::action_for_key(key)
            }
            _ => None,
        }
    }

    /// Process a winit device event. Pointer deltas come from the raw
    /// motion stream rather than `CursorMoved` position differences.
    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.pointer.motion(Vec2::new(*dx as f32, *dy as f32));
        }
    }

    fn action_for_key(key: KeyCode) -> Option<ControlAction> {
        let behavior = match key {
            KeyCode::Digit1 => Some(Behavior::Chase),
            KeyCode::Digit2 => Some(Behavior::CircleChase),
            KeyCode::Digit3 => Some(Behavior::SloppyOrbit),
            KeyCode::Digit4 => Some(Behavior::SharpOrbit),
            KeyCode::Digit5 => Some(Behavior::Galaxy),
            KeyCode::Digit6 => Some(Behavior::Spray),
            KeyCode::Digit7 => Some(Behavior::Fire),
            KeyCode::Digit8 => Some(Behavior::Bounce),
            _ => None,
        };
        if let Some(b) = behavior {
            return Some(ControlAction::SelectBehavior(b));
        }

        match key {
            KeyCode::ArrowUp => Some(ControlAction::AdjustCount(COUNT_STEP)),
            KeyCode::ArrowDown => Some(ControlAction::AdjustCount(-COUNT_STEP)),
            KeyCode::ArrowRight => Some(ControlAction::AdjustHue(HUE_STEP)),
            KeyCode::ArrowLeft => Some(ControlAction::AdjustHue(-HUE_STEP)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_starts_absent() {
        let pointer = PointerState::absent();
        assert!(!pointer.is_present());
        assert_eq!(pointer.delta(), Vec2::ZERO);
    }

    #[test]
    fn test_pointer_delta_tracks_motion_events() {
        let mut pointer = PointerState::absent();
        pointer.move_to(Vec2::new(100.0, 100.0));
        assert_eq!(pointer.delta(), Vec2::ZERO);

        pointer.motion(Vec2::new(30.0, -10.0));
        assert_eq!(pointer.delta(), Vec2::new(30.0, -10.0));
        // Delta persists until the next motion event.
        pointer.move_to(Vec2::new(130.0, 90.0));
        assert_eq!(pointer.delta(), Vec2::new(30.0, -10.0));
    }

    #[test]
    fn test_first_move_after_reentry_keeps_raw_motion() {
        let mut input = Input::new(800, 600);
        input.pointer.move_to(Vec2::new(400.0, 300.0));
        input.pointer.left();

        // Cursor re-enters: the motion event lands before the position.
        input.handle_device_event(&DeviceEvent::MouseMotion { delta: (6.0, -2.0) });
        assert!(!input.pointer().is_present());

        input.pointer.move_to(Vec2::new(10.0, 580.0));
        assert!(input.pointer().is_present());
        assert_eq!(input.pointer().delta(), Vec2::new(6.0, -2.0));
    }

    #[test]
    fn test_pointer_leave_clears_position() {
        let mut pointer = PointerState::at(Vec2::new(10.0, 10.0));
        pointer.left();
        assert!(!pointer.is_present());
        assert_eq!(pointer.device_position(800.0, 600.0), None);
    }

    #[test]
    fn test_device_position_flips_y() {
        let pointer = PointerState::at(Vec2::new(0.0, 600.0));
        let device = pointer.device_position(800.0, 600.0).unwrap();
        assert_eq!(device, Vec2::new(-1.0, -1.0));
    }

    #[test]
    fn test_digit_keys_select_behaviors() {
        assert_eq!(
            Input::action_for_key(KeyCode::Digit1),
            Some(ControlAction::SelectBehavior(Behavior::Chase))
        );
        assert_eq!(
            Input::action_for_key(KeyCode::Digit8),
            Some(ControlAction::SelectBehavior(Behavior::Bounce))
        );
        assert_eq!(Input::action_for_key(KeyCode::KeyQ), None);
    }
}
