mod input_field;
mod popup;

pub use input_field::draw_input_field;
pub use popup::{Popup, centered_rect};
