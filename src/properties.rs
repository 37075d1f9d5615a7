// system property utilities
#[cfg(target_os = "android")]
pub(crate) fn get_prop(key: &str) -> Option<String> {
    use std::ffi::{CStr, CString};
    use std::os::raw::c_char;

    use crate::ffi::__system_property_get;

    const PROP_VALUE_MAX: usize = 92;
    let c_key = CString::new(key).ok()?;
    let mut buffer = vec![0u8; PROP_VALUE_MAX];
    let len = unsafe { __system_property_get(c_key.as_ptr() as *const u8, buffer.as_mut_ptr() as *mut u8) };
    if len > 0 {
        let c_str = unsafe { CStr::from_ptr(buffer.as_ptr() as *const c_char) };
        Some(c_str.to_string_lossy().into_owned())
    } else { None }
}

// debug check
#[cfg(target_os = "android")]
pub(crate) fn dbg_on() -> bool {
    get_prop(crate::paths::persist_dbg()).as_deref() == Some("true")
}

#[cfg(not(target_os = "android"))]
pub(crate) fn dbg_on() -> bool {
    std::env::var("SRE_DEBUG").ok().as_deref() == Some("true")
}
