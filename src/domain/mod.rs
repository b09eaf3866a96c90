// Domain layer: input vocabulary, session state and the render port. std/serde only.

pub mod model;
pub mod ports;
