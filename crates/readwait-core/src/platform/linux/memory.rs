//! # Remote Memory Reads
//!
//! Copies bounded byte ranges out of the tracee's address space using
//! `process_vm_readv(2)`, the single-syscall alternative to looping over
//! `PTRACE_PEEKDATA` words.
//!
//! The tracee is stopped whenever this is called, so the copied bytes cannot
//! be racing with the tracee's own writes.

use std::io::IoSliceMut;

use nix::errno::Errno;
use nix::sys::uio::{process_vm_readv, RemoteIoVec};
use nix::unistd::Pid;

use crate::error::ReadError;

/// Copy up to `buf.len()` bytes from the tracee at `addr` into `buf`.
///
/// Returns the number of bytes actually copied, which can be short if the
/// range crosses into unmapped memory.
///
/// ## Errors
///
/// - [`ReadError::Unsupported`] when the host kernel lacks
///   `process_vm_readv` (`ENOSYS`). Reported once by callers and treated as
///   "no data decoded", never as a fatal abort.
/// - [`ReadError::Failed`] for any other failure (`EFAULT` on an unmapped
///   address, `ESRCH` on a dead tracee, ...). Same recovery: no data
///   decoded.
pub fn read_bytes(pid: Pid, addr: u64, buf: &mut [u8]) -> Result<usize, ReadError>
{
    if buf.is_empty() {
        return Ok(0);
    }

    let len = buf.len();
    let mut local = [IoSliceMut::new(buf)];
    let remote = [RemoteIoVec {
        base: addr as usize,
        len,
    }];

    match process_vm_readv(pid, &mut local, &remote) {
        Ok(copied) => Ok(copied),
        Err(Errno::ENOSYS) => Err(ReadError::Unsupported),
        Err(errno) => Err(ReadError::Failed(errno)),
    }
}
