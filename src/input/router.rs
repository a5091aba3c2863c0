//! Per-frame event buffering and translation

use glam::Vec2;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::Key;

use crate::input::command::{Bindings, Command};

/// Buffers raw input as the platform delivers it and hands the frame's
/// commands to the loop exactly once, in delivery order.
///
/// Only the commands for the current frame are ever held; a drain empties
/// the buffer completely.
#[derive(Debug)]
pub struct InputRouter {
    bindings: Bindings,
    cursor: Vec2,
    pending: Vec<Command>,
}

impl InputRouter {
    /// Router with the stock bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: Bindings::default(),
            cursor: Vec2::ZERO,
            pending: Vec::new(),
        }
    }

    /// Feed one window event. Key presses translate through the binding
    /// table and pointer presses (any button) become spiral activations at
    /// the tracked cursor position. Releases and anything unrecognized are
    /// dropped here; auto-repeated presses translate like any other, so a
    /// held `+` keeps accelerating.
    pub fn process(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    self.push_key(&event.logical_key);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                ..
            } => {
                self.push_pointer(self.cursor);
            }
            _ => {}
        }
    }

    /// Translate one logical key press; unbound keys queue nothing.
    pub fn push_key(&mut self, key: &Key) {
        if let Some(command) = self.bindings.lookup(key) {
            self.pending.push(command);
        }
    }

    /// Record a pointer press at `position`.
    pub fn push_pointer(&mut self, position: Vec2) {
        self.pending.push(Command::ActivateSpiral(position));
    }

    /// Drain the commands queued since the previous drain, in the order the
    /// platform delivered them.
    pub fn drain(&mut self) -> impl Iterator<Item = Command> + '_ {
        self.pending.drain(..)
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{NamedKey, SmolStr};

    #[test]
    fn commands_drain_in_delivery_order() {
        let mut router = InputRouter::new();
        router.push_key(&Key::Named(NamedKey::Space));
        router.push_pointer(Vec2::new(100.0, 100.0));
        router.push_key(&Key::Character(SmolStr::new("+")));

        let commands: Vec<Command> = router.drain().collect();
        assert_eq!(
            commands,
            vec![
                Command::RandomizeColors,
                Command::ActivateSpiral(Vec2::new(100.0, 100.0)),
                Command::Accelerate,
            ]
        );
    }

    #[test]
    fn drain_empties_the_buffer() {
        let mut router = InputRouter::new();
        router.push_key(&Key::Named(NamedKey::Space));
        assert_eq!(router.drain().count(), 1);
        assert_eq!(router.drain().count(), 0);
    }

    #[test]
    fn unbound_keys_queue_nothing() {
        let mut router = InputRouter::new();
        router.push_key(&Key::Character(SmolStr::new("z")));
        router.push_key(&Key::Named(NamedKey::Tab));
        assert_eq!(router.drain().count(), 0);
    }

    #[test]
    fn held_keys_deliver_one_command_per_press_event() {
        // Holding a key auto-repeats at the platform level; every delivered
        // press maps to its own command, so a held `+` keeps accelerating.
        let mut router = InputRouter::new();
        for _ in 0..3 {
            router.push_key(&Key::Character(SmolStr::new("+")));
        }

        let commands: Vec<Command> = router.drain().collect();
        assert_eq!(
            commands,
            vec![Command::Accelerate, Command::Accelerate, Command::Accelerate]
        );
    }

    #[test]
    fn multiple_pointer_presses_all_queue() {
        // Collapsing to the latest activation is the spiral slot's job, not
        // the router's; both presses must arrive in order.
        let mut router = InputRouter::new();
        router.push_pointer(Vec2::new(1.0, 2.0));
        router.push_pointer(Vec2::new(3.0, 4.0));

        let commands: Vec<Command> = router.drain().collect();
        assert_eq!(
            commands,
            vec![
                Command::ActivateSpiral(Vec2::new(1.0, 2.0)),
                Command::ActivateSpiral(Vec2::new(3.0, 4.0)),
            ]
        );
    }
}
