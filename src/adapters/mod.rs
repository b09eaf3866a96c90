// Adapters: everything between the outside world and the engine.

pub mod display;
pub mod keyboard;
pub mod keypad;
