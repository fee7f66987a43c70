//! Navigation: intents in, clamped page indices out

mod controller;
mod intent;

pub use controller::{last_page, next_page};
pub use intent::{NavigationIntent, PageChanged};
