use std::ffi::{CStr, c_void};
use std::ptr;

use spa_support_abi::{
    SPA_TYPE_INTERFACE_LOG, SPA_VERSION_LOG, spa_callbacks, spa_interface, spa_log,
    spa_log_methods,
};

use crate::ffi;
use crate::logging::level::LogLevel;
use crate::logging::sink::LogSink;

/// A `spa_log` dispatch record that routes every call into a [`LogSink`].
///
/// The sink is borrowed, never owned: dropping the interface frees the record
/// and nothing else. The record is fully initialised here and never written
/// again, so it can be shared with the host across threads.
pub struct LogInterface<'a> {
    // Boxed so the addresses handed to C stay put when the interface moves.
    record: Box<spa_log>,
    receiver: Box<&'a dyn LogSink>,
}

// SAFETY: the record is immutable after `new`, the methods table is a C
// constant and the receiver is `Sync`.
unsafe impl Send for LogInterface<'_> {}
unsafe impl Sync for LogInterface<'_> {}

impl<'a> LogInterface<'a> {
    pub fn new(receiver: &'a dyn LogSink, level: LogLevel) -> Self {
        let receiver = Box::new(receiver);
        let data = &*receiver as *const &'a dyn LogSink as *mut c_void;

        let record = Box::new(spa_log {
            iface: spa_interface {
                type_: SPA_TYPE_INTERFACE_LOG.as_ptr(),
                version: SPA_VERSION_LOG,
                cb: spa_callbacks {
                    funcs: ptr::addr_of!(ffi::spa_support_log_methods) as *const c_void,
                    data,
                },
            },
            level: level.as_raw(),
        });

        log::trace!("created log interface {:p} at level {}", &*record, level);
        Self { record, receiver }
    }

    /// The record to hand to the host. Valid for as long as `self` lives.
    pub fn as_ptr(&self) -> *const spa_log {
        &*self.record
    }

    pub fn record(&self) -> &spa_log {
        &self.record
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_raw(self.record.level)
    }

    pub fn type_name(&self) -> &'static CStr {
        SPA_TYPE_INTERFACE_LOG
    }

    pub fn methods(&self) -> &'static spa_log_methods {
        unsafe { &*ptr::addr_of!(ffi::spa_support_log_methods) }
    }

    pub fn receiver(&self) -> &'a dyn LogSink {
        *self.receiver
    }

    /// Releases the record. Equivalent to dropping it.
    pub fn destroy(self) {}
}
