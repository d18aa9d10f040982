pub mod buttons;
pub mod keyboard;

pub use buttons::{wire_buttons, wire_track_ended};
pub use keyboard::wire_global_keydown;
