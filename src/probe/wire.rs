//! Kernel wire contract for the binder version query
//!
//! The reply layout and the ioctl request code are fixed by the kernel
//! driver and must match it exactly.

use std::mem;

/// Device node exposed by the binder driver. Not configurable.
pub const BINDER_PATH: &str = "/dev/binder";

/// Value the reply buffer holds before the request is issued. A kernel
/// that reports success without writing a version leaves this in place.
pub const VERSION_SENTINEL: i32 = i32::MIN;

// ioctl direction bits (asm-generic encoding)
const IOC_WRITE: u32 = 1;
const IOC_READ: u32 = 2;

/// Reply buffer for the version request (matches the kernel's
/// `struct binder_version`)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionReply {
    pub protocol_version: i32,
}

impl VersionReply {
    /// A reply initialized to the sentinel, ready to hand to the kernel.
    pub fn unset() -> Self {
        Self {
            protocol_version: VERSION_SENTINEL,
        }
    }
}

/// BINDER_VERSION request code: read/write direction, 4-byte payload,
/// type tag 'b', sequence number 9. The payload size is part of the
/// code, so the reply struct must stay exactly one i32.
pub const BINDER_VERSION: u32 = (IOC_READ | IOC_WRITE) << 30
    | (mem::size_of::<VersionReply>() as u32) << 16
    | (b'b' as u32) << 8
    | 9;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_is_four_bytes() {
        assert_eq!(mem::size_of::<VersionReply>(), 4);
    }

    #[test]
    fn test_request_code_bit_pattern() {
        // The exact constant the binder driver compares against.
        assert_eq!(BINDER_VERSION, 0xC004_6209);
    }

    #[test]
    fn test_request_code_fields() {
        assert_eq!(BINDER_VERSION >> 30, 3); // both directions
        assert_eq!((BINDER_VERSION >> 16) & 0x3FFF, 4); // payload size
        assert_eq!((BINDER_VERSION >> 8) & 0xFF, b'b' as u32);
        assert_eq!(BINDER_VERSION & 0xFF, 9);
    }

    #[test]
    fn test_sentinel_outside_version_range() {
        // Protocol versions are small non-negative integers; the
        // sentinel must never be mistaken for one.
        assert!(VERSION_SENTINEL < 0);
        assert_eq!(VERSION_SENTINEL, i32::MIN);
        assert_eq!(VersionReply::unset().protocol_version, VERSION_SENTINEL);
    }
}
