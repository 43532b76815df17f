//! Binderver - Binder kernel protocol version probe
//!
//! Queries the version of the Binder IPC protocol supported by the
//! running kernel: open /dev/binder read/write with close-on-exec,
//! issue the BINDER_VERSION ioctl, close the descriptor, and hand the
//! outcome back as a single signed integer.
//!
//! The plain boundary is [`probe_binder_version`]: non-negative means
//! the kernel reported that protocol version, negative encodes the
//! failure (negated OS error code, or [`VERSION_SENTINEL`] when the
//! kernel stayed silent). [`query_binder_version`] is the same query
//! with a typed error instead.
//!
//! The probe performs no logging, keeps no state, and leaves no
//! descriptor open on any path.

pub mod probe;

pub use probe::{
    probe_binder_version, probe_with, query_binder_version, query_with, BinderDevice, ProbeError,
    ProbeResult, VersionReply, BINDER_PATH, BINDER_VERSION, VERSION_SENTINEL,
};

#[cfg(any(target_os = "linux", target_os = "android"))]
pub use probe::KernelBinder;
