//! Symbols provided by the C shim in `csrc/`.

use std::ffi::{c_char, c_int, c_ulong, c_void};

use spa_support_abi::{spa_log, spa_log_level, spa_log_methods, spa_log_topic, spa_support_layout};

unsafe extern "C" {
    /// Static methods table: `log`, `logv`, `logt`, `logtv`, null `topic_init`.
    pub static spa_support_log_methods: spa_log_methods;

    pub fn spa_support_log(
        object: *mut c_void,
        level: spa_log_level,
        file: *const c_char,
        line: c_int,
        func: *const c_char,
        fmt: *const c_char,
        ...
    );

    pub fn spa_support_logt(
        object: *mut c_void,
        level: spa_log_level,
        topic: *const spa_log_topic,
        file: *const c_char,
        line: c_int,
        func: *const c_char,
        fmt: *const c_char,
        ...
    );

    pub fn spa_support_ioctl(object: *mut c_void, fd: c_int, request: c_ulong, ...) -> c_int;

    /// Calls `log`'s `logv` slot with a `va_list` built from the tail.
    pub fn spa_support_forward_logv(
        log: *const spa_log,
        level: spa_log_level,
        file: *const c_char,
        line: c_int,
        func: *const c_char,
        fmt: *const c_char,
        ...
    );

    /// Calls `log`'s `logtv` slot with a `va_list` built from the tail.
    pub fn spa_support_forward_logtv(
        log: *const spa_log,
        level: spa_log_level,
        topic: *const spa_log_topic,
        file: *const c_char,
        line: c_int,
        func: *const c_char,
        fmt: *const c_char,
        ...
    );

    pub fn spa_support_layout(out: *mut spa_support_layout);
}

#[cfg(test)]
mod tests {
    use super::*;
    use spa_support_abi::{SPA_SUPPORT_LOG_BUFFER_SIZE, spa_callbacks, spa_interface};
    use std::mem::{offset_of, size_of};

    fn c_layout() -> spa_support_layout {
        let mut out = spa_support_layout::default();
        unsafe { spa_support_layout(&mut out) };
        out
    }

    #[test]
    fn rust_and_c_agree_on_interface_layout() {
        let c = c_layout();
        assert_eq!(c.callbacks_size, size_of::<spa_callbacks>());
        assert_eq!(c.interface_size, size_of::<spa_interface>());
        assert_eq!(c.interface_version_offset, offset_of!(spa_interface, version));
        assert_eq!(c.interface_cb_offset, offset_of!(spa_interface, cb));
        assert_eq!(c.log_size, size_of::<spa_log>());
        assert_eq!(c.log_level_offset, offset_of!(spa_log, level));
    }

    #[test]
    fn rust_and_c_agree_on_methods_layout() {
        let c = c_layout();
        assert_eq!(c.methods_size, size_of::<spa_log_methods>());
        assert_eq!(c.methods_log_offset, offset_of!(spa_log_methods, log));
        assert_eq!(c.methods_logv_offset, offset_of!(spa_log_methods, logv));
        assert_eq!(c.methods_logt_offset, offset_of!(spa_log_methods, logt));
        assert_eq!(c.methods_logtv_offset, offset_of!(spa_log_methods, logtv));
        assert_eq!(
            c.methods_topic_init_offset,
            offset_of!(spa_log_methods, topic_init)
        );
    }

    #[test]
    fn rust_and_c_agree_on_topic_layout() {
        let c = c_layout();
        assert_eq!(c.topic_size, size_of::<spa_log_topic>());
        assert_eq!(c.topic_topic_offset, offset_of!(spa_log_topic, topic));
        assert_eq!(c.topic_level_offset, offset_of!(spa_log_topic, level));
        assert_eq!(
            c.topic_has_custom_level_offset,
            offset_of!(spa_log_topic, has_custom_level)
        );
    }

    #[test]
    fn render_buffer_capacity_matches() {
        assert_eq!(c_layout().log_buffer_size, SPA_SUPPORT_LOG_BUFFER_SIZE);
    }

    #[test]
    fn static_table_is_fully_wired() {
        let m = unsafe { &spa_support_log_methods };
        assert_eq!(m.version, spa_support_abi::SPA_VERSION_LOG_METHODS);
        assert_eq!(m.log as usize, spa_support_log as usize);
        assert_eq!(m.logt as usize, spa_support_logt as usize);
        assert!(!m.logv.is_null());
        assert!(!m.logtv.is_null());
        assert!(m.topic_init.is_none());
    }
}
