pub mod keys;

pub use keys::{GameKey, HeldKeys};
