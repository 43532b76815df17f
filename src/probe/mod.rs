//! Probe module - Binder protocol version detection
//!
//! This module provides:
//! - The kernel wire contract for the version query (reply layout,
//!   request code, device path)
//! - A probe routine that opens the device, issues the request, and
//!   releases the handle on every path
//! - Entry points returning either a typed result or the plain signed
//!   encoding (version if non-negative, encoded failure if negative)
//!
//! Each call performs a fresh kernel query. There is no caching, no
//! retry, and no shared state between calls, so concurrent callers
//! need no coordination. The probe itself never logs.

mod traits;
mod wire;

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;

// Re-export common types
pub use traits::{BinderDevice, ProbeError, ProbeResult};
pub use wire::{VersionReply, BINDER_PATH, BINDER_VERSION, VERSION_SENTINEL};

#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::KernelBinder;

use traits::os_error_code;

/// Query the version through any [`BinderDevice`].
///
/// The reply buffer starts at the sentinel, so a kernel that reports
/// success without touching it is detected as [`ProbeError::Indeterminate`].
/// The handle is released before the request outcome is inspected.
pub fn query_with<D: BinderDevice>(dev: &mut D) -> ProbeResult<i32> {
    let mut reply = VersionReply::unset();

    let mut handle = dev
        .open()
        .map_err(|e| ProbeError::Unavailable(os_error_code(&e)))?;

    let outcome = dev.request_version(&mut handle, &mut reply);
    dev.release(handle);

    outcome.map_err(|e| ProbeError::Unsupported(os_error_code(&e)))?;

    if reply.protocol_version == VERSION_SENTINEL {
        return Err(ProbeError::Indeterminate);
    }
    Ok(reply.protocol_version)
}

/// Like [`query_with`], collapsed into the signed encoding: the
/// kernel-reported version when non-negative, a strictly negative
/// value otherwise.
pub fn probe_with<D: BinderDevice>(dev: &mut D) -> i32 {
    match query_with(dev) {
        Ok(version) => version,
        Err(err) => err.to_raw(),
    }
}

/// Query the version of the Binder IPC protocol supported by the
/// running kernel.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn query_binder_version() -> ProbeResult<i32> {
    query_with(&mut KernelBinder)
}

/// Signed-encoding variant of [`query_binder_version`]: the protocol
/// version if non-negative, the negated OS error code (or the
/// sentinel) otherwise. Never panics.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn probe_binder_version() -> i32 {
    probe_with(&mut KernelBinder)
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn query_binder_version() -> ProbeResult<i32> {
    Err(ProbeError::Unavailable(libc::ENOSYS))
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub fn probe_binder_version() -> i32 {
    -libc::ENOSYS
}
