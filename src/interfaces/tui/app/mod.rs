//! App state and behavior
//!
//! State lives in `state`, form input in `form_state`, selection movement in
//! `navigation`, and every API round trip in `operations`.

mod form_state;
mod navigation;
mod operations;
mod state;

pub use form_state::EditingField;
pub use state::{App, CurrentScreen, CurrentTab, ViewState};
