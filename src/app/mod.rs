//! Application state and logic

mod event;
mod selection;
mod state;

pub use event::{Event, Handler};
pub use selection::Selection;
pub use state::{App, Mode};
