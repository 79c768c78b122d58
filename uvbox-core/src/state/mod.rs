//! Operating state machine
//!
//! Every transition is one arm of a `match` over `(mode, event)`, guarded
//! by the current safety status, returning the `Action` to apply.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{AbortReason, Action, MenuItem, Mode};
