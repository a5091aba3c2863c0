//! Closed command set and the key-binding table

use glam::Vec2;
use rustc_hash::FxHashMap;
use winit::keyboard::{Key, NamedKey, SmolStr};

/// A state mutation decoded from one input event.
///
/// Every recognized event maps to exactly one variant; anything else is
/// dropped at translation time, so dispatch below the router stays
/// exhaustive over this enum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Start (or restart) the spiral overlay at a pointer position
    ActivateSpiral(Vec2),
    /// Reroll every shape's color
    RandomizeColors,
    /// Multiply every angular velocity by the accelerate factor
    Accelerate,
    /// Multiply every angular velocity by the decelerate factor
    Decelerate,
    /// Leave the main loop at the top of the next cycle
    Quit,
}

/// Maps logical key presses to commands.
///
/// Logical keys (rather than physical key codes) so `+` and `-` resolve the
/// same way on any layout.
#[derive(Debug, Clone)]
pub struct Bindings {
    keys: FxHashMap<Key, Command>,
}

impl Bindings {
    /// An empty binding table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: FxHashMap::default(),
        }
    }

    /// The stock control scheme: Space rerolls colors, `+`/`-` scale speed,
    /// `q`/`Q`/Escape quit.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut bindings = Self::new();
        bindings.bind(Key::Named(NamedKey::Space), Command::RandomizeColors);
        bindings.bind(Key::Character(SmolStr::new("+")), Command::Accelerate);
        bindings.bind(Key::Character(SmolStr::new("-")), Command::Decelerate);
        bindings.bind(Key::Character(SmolStr::new("q")), Command::Quit);
        bindings.bind(Key::Character(SmolStr::new("Q")), Command::Quit);
        bindings.bind(Key::Named(NamedKey::Escape), Command::Quit);
        bindings
    }

    /// Bind a key to a command, replacing any previous binding for the key.
    pub fn bind(&mut self, key: Key, command: Command) {
        let _ = self.keys.insert(key, command);
    }

    /// Look up the command for a key, if any.
    #[must_use]
    pub fn lookup(&self, key: &Key) -> Option<Command> {
        self.keys.get(key).copied()
    }
}

impl Default for Bindings {
    fn default() -> Self {
        Self::with_defaults()
    }
}
