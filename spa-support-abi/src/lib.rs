#![no_std]
#![allow(non_camel_case_types)]

//! `repr(C)` mirror of the SPA log and system interfaces.
//!
//! Field order and count are part of the binary contract with the plugin
//! host. When a version constant changes, the matching struct must change with
//! it.

use core::ffi::{CStr, c_char, c_int, c_ulong, c_void};

/// Version stamped into `spa_interface.version` of a log record.
pub const SPA_VERSION_LOG: u32 = 1;
/// Version of the `spa_log_methods` table (six slots).
pub const SPA_VERSION_LOG_METHODS: u32 = 1;
/// Version of `spa_log_topic`.
pub const SPA_VERSION_LOG_TOPIC: u32 = 0;

pub const SPA_TYPE_INTERFACE_LOG: &CStr = c"Spa:Pointer:Interface:Log";

/// Capacity of the stack buffer each log call is rendered into, terminator
/// included.
pub const SPA_SUPPORT_LOG_BUFFER_SIZE: usize = 16384;

// Severity levels. Kept as plain integers so that any value a C caller passes
// is representable on the Rust side.
pub type spa_log_level = u32;

pub const SPA_LOG_LEVEL_NONE: spa_log_level = 0;
pub const SPA_LOG_LEVEL_ERROR: spa_log_level = 1;
pub const SPA_LOG_LEVEL_WARN: spa_log_level = 2;
pub const SPA_LOG_LEVEL_INFO: spa_log_level = 3;
pub const SPA_LOG_LEVEL_DEBUG: spa_log_level = 4;
pub const SPA_LOG_LEVEL_TRACE: spa_log_level = 5;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct spa_callbacks {
    pub funcs: *const c_void,
    pub data: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct spa_interface {
    pub type_: *const c_char,
    pub version: u32,
    pub cb: spa_callbacks,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct spa_log_topic {
    pub version: u32,
    /// Null-terminated topic name.
    pub topic: *const c_char,
    pub level: spa_log_level,
    /// Whether `level` was set explicitly for this topic rather than inherited.
    pub has_custom_level: bool,
}

/// The dispatch record handed to the host.
#[repr(C)]
#[derive(Debug)]
pub struct spa_log {
    pub iface: spa_interface,
    /// Minimum severity the host should forward.
    pub level: spa_log_level,
}

pub type spa_log_fn = unsafe extern "C" fn(
    object: *mut c_void,
    level: spa_log_level,
    file: *const c_char,
    line: c_int,
    func: *const c_char,
    fmt: *const c_char,
    ...
);

pub type spa_logt_fn = unsafe extern "C" fn(
    object: *mut c_void,
    level: spa_log_level,
    topic: *const spa_log_topic,
    file: *const c_char,
    line: c_int,
    func: *const c_char,
    fmt: *const c_char,
    ...
);

pub type spa_log_topic_init_fn = unsafe extern "C" fn(object: *mut c_void, topic: *mut spa_log_topic);

#[repr(C)]
#[derive(Copy, Clone)]
pub struct spa_log_methods {
    pub version: u32,

    /// Renders `fmt` and the variadic tail, then forwards the text.
    pub log: spa_log_fn,

    /// Same as `log` but takes a `va_list`. `va_list` has no stable Rust
    /// spelling, so the slot is kept opaque and only ever called from C.
    pub logv: *const c_void,

    /// Topic-qualified `log`.
    pub logt: spa_logt_fn,

    /// Topic-qualified `logv`, opaque for the same reason.
    pub logtv: *const c_void,

    /// Deprecated. Always null.
    pub topic_init: Option<spa_log_topic_init_fn>,
}

/// Device control with a single variadic word argument.
pub type spa_ioctl_fn =
    unsafe extern "C" fn(object: *mut c_void, fd: c_int, request: c_ulong, ...) -> c_int;

/// Sizes and offsets as seen by the C compiler.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
pub struct spa_support_layout {
    pub callbacks_size: usize,
    pub interface_size: usize,
    pub interface_version_offset: usize,
    pub interface_cb_offset: usize,
    pub log_size: usize,
    pub log_level_offset: usize,
    pub methods_size: usize,
    pub methods_log_offset: usize,
    pub methods_logv_offset: usize,
    pub methods_logt_offset: usize,
    pub methods_logtv_offset: usize,
    pub methods_topic_init_offset: usize,
    pub topic_size: usize,
    pub topic_topic_offset: usize,
    pub topic_level_offset: usize,
    pub topic_has_custom_level_offset: usize,
    pub log_buffer_size: usize,
}
