//! Probe trait definitions
//!
//! Defines the device interface the probe routine runs against, so the
//! same routine drives the real kernel device and mocks in tests.

use std::io;
use thiserror::Error;

use super::wire::{VersionReply, VERSION_SENTINEL};

/// Errors that can occur while querying the binder version
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    /// The device node could not be opened (missing, or access denied).
    #[error("binder device unavailable (os error {0})")]
    Unavailable(i32),

    /// The device opened but rejected the version request.
    #[error("binder version query not supported (os error {0})")]
    Unsupported(i32),

    /// The kernel accepted the request without writing a version.
    #[error("kernel did not report a protocol version")]
    Indeterminate,
}

impl ProbeError {
    /// Collapse into the signed encoding used at the plain call
    /// boundary: negated errno magnitude for OS failures, the sentinel
    /// when the kernel stayed silent. Always strictly negative.
    pub fn to_raw(self) -> i32 {
        match self {
            ProbeError::Unavailable(errno) | ProbeError::Unsupported(errno) => -errno.abs(),
            ProbeError::Indeterminate => VERSION_SENTINEL,
        }
    }
}

pub type ProbeResult<T> = Result<T, ProbeError>;

/// One binder device, as seen by the probe routine
///
/// Implementations map these calls onto the real open/ioctl/close
/// syscalls or onto scripted test behavior.
pub trait BinderDevice {
    type Handle;

    /// Open the device read/write with close-on-exec set.
    fn open(&mut self) -> io::Result<Self::Handle>;

    /// Issue the version request against an open handle.
    fn request_version(
        &mut self,
        handle: &mut Self::Handle,
        reply: &mut VersionReply,
    ) -> io::Result<()>;

    /// Release the handle. Called on every path once open succeeded;
    /// failures here must not surface.
    fn release(&mut self, handle: Self::Handle);
}

/// Raw OS error code of an I/O failure. Synthetic errors without one
/// are reported as a generic I/O failure.
pub(crate) fn os_error_code(err: &io::Error) -> i32 {
    err.raw_os_error().unwrap_or(libc::EIO)
}
