//! Fixed-arity access to the variadic `ioctl` adapter.
//!
//! The C side pulls exactly one word off the variadic tail and calls
//! `ioctl(fd, request, arg)`. Return values and `errno` come back untouched.

use std::ffi::{c_int, c_long, c_ulong, c_void};
use std::os::fd::RawFd;
use std::ptr;

use nix::errno::Errno;
use spa_support_abi::spa_ioctl_fn;

use crate::ffi;

/// The variadic adapter itself, for hosts that build their own system
/// method tables.
pub fn ioctl_adapter() -> spa_ioctl_fn {
    ffi::spa_support_ioctl
}

/// Issues `ioctl(fd, request, arg)` through the adapter and returns its raw
/// result: `-1` with `errno` set on failure.
pub fn ioctl(fd: RawFd, request: c_ulong, arg: c_long) -> c_int {
    unsafe { ffi::spa_support_ioctl(ptr::null_mut(), fd, request, arg) }
}

/// [`ioctl`] with a pointer argument.
///
/// # Safety
/// `arg` must be valid for whatever `request` does with it.
pub unsafe fn ioctl_ptr<T>(fd: RawFd, request: c_ulong, arg: *mut T) -> c_int {
    unsafe { ffi::spa_support_ioctl(ptr::null_mut(), fd, request, arg as *mut c_void) }
}

/// [`ioctl`] with the return convention mapped onto `nix::Result`.
pub fn ioctl_result(fd: RawFd, request: c_ulong, arg: c_long) -> nix::Result<c_int> {
    Errno::result(ioctl(fd, request, arg))
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::*;
    use nix::fcntl::{FcntlArg, FdFlag, OFlag, fcntl};
    use nix::libc;
    use nix::unistd::{pipe, write};
    use std::os::fd::AsRawFd;

    #[test]
    fn fionread_reports_pending_bytes() {
        let (r, w) = pipe().unwrap();
        write(&w, b"hello").unwrap();

        let mut pending: c_int = -1;
        let ret = unsafe { ioctl_ptr(r.as_raw_fd(), libc::FIONREAD as c_ulong, &mut pending) };
        assert_eq!(ret, 0);
        assert_eq!(pending, 5);
    }

    #[test]
    fn fionbio_sets_non_blocking() {
        let (r, _w) = pipe().unwrap();
        let mut on: c_int = 1;

        let ret = unsafe { ioctl_ptr(r.as_raw_fd(), libc::FIONBIO as c_ulong, &mut on) };
        assert_eq!(ret, 0);

        let flags = OFlag::from_bits_truncate(fcntl(&r, FcntlArg::F_GETFL).unwrap());
        assert!(flags.contains(OFlag::O_NONBLOCK));
    }

    #[test]
    fn fioclex_takes_integer_word() {
        let (r, _w) = pipe().unwrap();
        fcntl(&r, FcntlArg::F_SETFD(FdFlag::empty())).unwrap();

        assert_eq!(ioctl(r.as_raw_fd(), libc::FIOCLEX as c_ulong, 7), 0);

        let flags = FdFlag::from_bits_truncate(fcntl(&r, FcntlArg::F_GETFD).unwrap());
        assert!(flags.contains(FdFlag::FD_CLOEXEC));
    }

    #[test]
    fn invalid_fd_fails_with_ebadf() {
        let ret = ioctl(-1, libc::FIONREAD as c_ulong, 0);
        assert_eq!(ret, -1);
        assert_eq!(Errno::last(), Errno::EBADF);

        assert_eq!(
            ioctl_result(-1, libc::FIONREAD as c_ulong, 0),
            Err(Errno::EBADF)
        );
    }

    #[test]
    fn adapter_pointer_is_the_c_function() {
        let f = ioctl_adapter();
        let mut pending: c_int = -1;
        let (r, w) = pipe().unwrap();
        write(&w, b"abc").unwrap();

        let ret = unsafe {
            f(
                ptr::null_mut(),
                r.as_raw_fd(),
                libc::FIONREAD as c_ulong,
                &mut pending as *mut c_int,
            )
        };
        assert_eq!(ret, 0);
        assert_eq!(pending, 3);
    }
}
