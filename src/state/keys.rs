// Held-key set shared between the DOM listeners and the movement tick.
use crate::model::Direction;

/// The keys the game claims for itself; everything else stays with the
/// browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    W,
    A,
    S,
    D,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
}

impl GameKey {
    /// Maps a DOM `KeyboardEvent::key` value to a game key,
    /// case-insensitively.
    pub fn from_event_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "w" => Some(GameKey::W),
            "a" => Some(GameKey::A),
            "s" => Some(GameKey::S),
            "d" => Some(GameKey::D),
            "arrowup" => Some(GameKey::ArrowUp),
            "arrowdown" => Some(GameKey::ArrowDown),
            "arrowleft" => Some(GameKey::ArrowLeft),
            "arrowright" => Some(GameKey::ArrowRight),
            "enter" => Some(GameKey::Enter),
            " " => Some(GameKey::Space),
            _ => None,
        }
    }

    fn bit(self) -> u16 {
        1 << self as u16
    }
}

/// Which game keys are currently down, as a bitmask. Snapshots of this are
/// carried inside tick actions so the reducer stays pure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    mask: u16,
}

impl HeldKeys {
    pub fn press(&mut self, key: GameKey) {
        self.mask |= key.bit();
    }

    pub fn release(&mut self, key: GameKey) {
        self.mask &= !key.bit();
    }

    pub fn is_held(&self, key: GameKey) -> bool {
        self.mask & key.bit() != 0
    }

    /// True if either binding for the direction (WASD or arrows) is down.
    pub fn direction_held(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.is_held(GameKey::W) || self.is_held(GameKey::ArrowUp),
            Direction::Down => self.is_held(GameKey::S) || self.is_held(GameKey::ArrowDown),
            Direction::Left => self.is_held(GameKey::A) || self.is_held(GameKey::ArrowLeft),
            Direction::Right => self.is_held(GameKey::D) || self.is_held(GameKey::ArrowRight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_keys_map_case_insensitively() {
        assert_eq!(GameKey::from_event_key("w"), Some(GameKey::W));
        assert_eq!(GameKey::from_event_key("W"), Some(GameKey::W));
        assert_eq!(GameKey::from_event_key("ArrowUp"), Some(GameKey::ArrowUp));
        assert_eq!(GameKey::from_event_key(" "), Some(GameKey::Space));
        assert_eq!(GameKey::from_event_key("Enter"), Some(GameKey::Enter));
        assert_eq!(GameKey::from_event_key("Escape"), None);
        assert_eq!(GameKey::from_event_key("x"), None);
    }

    #[test]
    fn press_and_release_round_trip() {
        let mut held = HeldKeys::default();
        assert!(!held.is_held(GameKey::A));
        held.press(GameKey::A);
        held.press(GameKey::Enter);
        assert!(held.is_held(GameKey::A));
        assert!(held.is_held(GameKey::Enter));
        held.release(GameKey::A);
        assert!(!held.is_held(GameKey::A));
        assert!(held.is_held(GameKey::Enter));
        // Releasing a key that is not down changes nothing.
        held.release(GameKey::S);
        assert_eq!(held, {
            let mut h = HeldKeys::default();
            h.press(GameKey::Enter);
            h
        });
    }

    #[test]
    fn either_binding_counts_as_the_direction() {
        let mut held = HeldKeys::default();
        held.press(GameKey::ArrowLeft);
        assert!(held.direction_held(Direction::Left));
        assert!(!held.direction_held(Direction::Right));
        held.press(GameKey::D);
        assert!(held.direction_held(Direction::Right));
    }
}
