pub mod engine;
pub mod session;

pub use crate::domain::model::{Digit, InputEvent, Operator, SessionState, Snapshot};
pub use crate::domain::ports::Render;
pub use crate::utils::error::Result;
