// file paths & property keys
pub fn sre_path() -> &'static str { "/sys/class/graphics/fb0/sre" }
pub(crate) fn log_tag() -> &'static str { "SunlightControl" }
#[cfg(target_os = "android")]
pub(crate) fn persist_dbg() -> &'static str { "persist.sys.sre.debug" } // set true for debug logs
