//! Control for the panel's sunlight readability enhancement (SRE) mode,
//! exposed by the display driver at `/sys/class/graphics/fb0/sre`.
//!
//! Everything here is stateless: each call stats, reads or writes the node
//! and collapses any failure into the documented boolean default. The
//! display manager owns the lux-threshold policy; this crate only flips
//! the switch.

mod constants;
#[cfg(target_os = "android")]
mod ffi;
pub mod fileutils;
mod logging;
mod paths;
mod properties;
mod sunlight;

pub use paths::sre_path;
pub use sunlight::{
    is_adaptive_backlight_required, is_enabled, is_self_managed, is_supported, set_enabled,
};
