use std::os::raw::c_int;

use crate::constants::{LOG_DEBUG, LOG_ERROR};
use crate::paths::log_tag;

// logging utilities
#[cfg(target_os = "android")]
pub(crate) fn log_write(level: c_int, msg: &str) {
    use std::ffi::CString;

    use crate::ffi::__android_log_print;

    let tag = CString::new(log_tag()).unwrap();
    let fmt = CString::new("%s").unwrap();
    let c_msg = match CString::new(msg) {
        Ok(c) => c,
        Err(_) => return,
    };
    unsafe { __android_log_print(level, tag.as_ptr(), fmt.as_ptr(), c_msg.as_ptr()) };
}

// off-device fallback so host builds and tests still link without liblog
#[cfg(not(target_os = "android"))]
pub(crate) fn log_write(level: c_int, msg: &str) {
    let prio = if level == LOG_ERROR { "E" } else { "D" };
    eprintln!("{}/{}: {}", prio, log_tag(), msg);
}

pub(crate) fn log_d(msg: &str) { log_write(LOG_DEBUG, msg); }
pub(crate) fn log_e(msg: &str) { log_write(LOG_ERROR, msg); }
