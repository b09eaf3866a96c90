pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::display::{MemoryDisplay, OutputFormat, TerminalDisplay};
pub use adapters::keyboard::Keymap;
pub use adapters::keypad::Keypad;
pub use config::{toml_config::TomlConfig, CliConfig, Settings};
pub use core::{engine::CalculatorEngine, session::Session};
pub use domain::model::{Digit, InputEvent, Operator, SessionState, Snapshot};
pub use domain::ports::Render;
pub use utils::error::{CalcError, Result};
