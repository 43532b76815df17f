//! Linux binder device access
//!
//! Talks to the binder driver through /dev/binder. Works without any
//! special privileges where the node is world-accessible (stock
//! Android); on other systems the open step typically fails with
//! ENOENT or EACCES, which the probe reports rather than treats as
//! exceptional.

use std::io;
use std::os::unix::io::RawFd;

use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::unistd::close;

use super::traits::BinderDevice;
use super::wire::{VersionReply, BINDER_PATH, BINDER_VERSION};

/// The real binder device node
pub struct KernelBinder;

impl BinderDevice for KernelBinder {
    type Handle = RawFd;

    fn open(&mut self) -> io::Result<RawFd> {
        // O_CLOEXEC so the descriptor is not inherited by children the
        // host process spawns later.
        open(BINDER_PATH, OFlag::O_RDWR | OFlag::O_CLOEXEC, Mode::empty())
            .map_err(io::Error::from)
    }

    fn request_version(&mut self, fd: &mut RawFd, reply: &mut VersionReply) -> io::Result<()> {
        // SAFETY: fd is an open descriptor and reply is the 4-byte
        // #[repr(C)] buffer the BINDER_VERSION code describes.
        let ret = unsafe { libc::ioctl(*fd, BINDER_VERSION as _, reply as *mut VersionReply) };
        if ret < 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    fn release(&mut self, fd: RawFd) {
        let _ = close(fd);
    }
}
