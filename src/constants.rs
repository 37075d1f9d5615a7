use std::os::raw::c_int;

// global constants
pub(crate) const LOG_DEBUG: c_int = 3; // android log prio d
pub(crate) const LOG_ERROR: c_int = 6; // android log prio e
pub(crate) const SRE_ENABLE: &str = "2"; // driver-defined on value, not a plain boolean
pub(crate) const SRE_DISABLE: &str = "0";
