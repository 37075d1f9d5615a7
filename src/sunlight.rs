use std::path::Path;

use crate::constants::{SRE_DISABLE, SRE_ENABLE};
use crate::fileutils::{read_one_line, write_line};
use crate::logging::{log_d, log_e};
use crate::paths::sre_path;
use crate::properties::dbg_on;

/// Whether the panel exposes the SRE node at all.
///
/// Any stat failure, permission problems included, counts as unsupported.
pub fn is_supported() -> bool {
    supported_at(sre_path())
}

/// Current activation status. False when the node is missing, unreadable
/// or holds anything that does not parse to an integer above zero.
pub fn is_enabled() -> bool {
    enabled_at(sre_path())
}

/// Switches SRE on or off. Returns whether the node write went through.
pub fn set_enabled(status: bool) -> bool {
    set_enabled_at(sre_path(), status)
}

/// Adaptive backlight (CABL/CABC) is not a dependency for this panel.
pub fn is_adaptive_backlight_required() -> bool {
    false
}

/// SRE does no ambient sensing of its own; the display manager calls
/// `set_enabled` when its lux threshold is crossed.
pub fn is_self_managed() -> bool {
    false
}

fn supported_at<P: AsRef<Path>>(node: P) -> bool {
    node.as_ref().exists()
}

fn enabled_at<P: AsRef<Path>>(node: P) -> bool {
    let node = node.as_ref();
    let line = match read_one_line(node) {
        Ok(line) => line,
        Err(e) => {
            log_e(&format!("[SRE] Failed to read {}: {}", node.display(), e));
            return false;
        }
    };
    match line.trim().parse::<i32>() {
        Ok(val) => val > 0,
        Err(e) => {
            log_e(&format!("[SRE] Bad value '{}' in {}: {}", line, node.display(), e));
            false
        }
    }
}

fn set_enabled_at<P: AsRef<Path>>(node: P, status: bool) -> bool {
    let node = node.as_ref();
    let value = if status { SRE_ENABLE } else { SRE_DISABLE };
    if dbg_on() { log_d(&format!("[SRE] Writing {} to {}", value, node.display())); }
    match write_line(node, value) {
        Ok(()) => true,
        Err(e) => {
            log_e(&format!("[SRE] Failed to write {} to {}: {}", value, node.display(), e));
            false
        }
    }
}
