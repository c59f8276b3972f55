mod keyboard;
mod pointer;
mod window;

pub use keyboard::wire_snow_toggle_key;
pub use pointer::wire_orbit_controls;
pub use window::{wire_mousemove, wire_resize, wire_scroll};
