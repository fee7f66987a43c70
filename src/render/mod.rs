//! Render output: control strip for the host

mod controls;

pub use controls::{Control, ControlStrip};
