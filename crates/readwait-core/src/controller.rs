//! # Process Control Trait
//!
//! The interface the dispatcher drives to step a traced process between
//! syscall boundaries.
//!
//! ## Why use a trait?
//!
//! - The dispatcher's policy (what to do at each syscall) is pure logic; the
//!   trait keeps the ptrace plumbing out of it.
//! - Tests exercise the full stall/track/give-up policy against a scripted
//!   implementation, without spawning a real tracee.
//! - Another platform's debug facility plugs in without touching the loop.
//!
//! ## Lifecycle
//!
//! 1. The launch path spawns the child with tracing enabled and waits for
//!    its first stop.
//! 2. The dispatcher alternates [`ProcessControl::step_to_syscall`] (park at
//!    the next syscall entry) and [`ProcessControl::finish_syscall`] (let
//!    the parked syscall run to its exit stop).
//! 3. [`ProcessControl::detach_and_continue`] releases the tracee; no
//!    further calls follow in the same session.
//!
//! The tracee is completely suspended between a stop and the next resume,
//! so register and memory reads taken in that window cannot race with it.

use crate::error::{ReadError, Result};
use crate::types::SyscallEvent;

/// Debug-control operations over one traced process
///
/// Implemented for Linux by
/// [`TracedProcess`](crate::platform::linux::TracedProcess); tests provide
/// scripted implementations.
pub trait ProcessControl
{
    /// Resume the tracee until the next syscall-entry stop and capture its
    /// registers.
    ///
    /// ## Errors
    ///
    /// Any failure of the underlying stop/resume/register primitives, or
    /// the tracee ending, is returned as a fatal
    /// [`TraceError`](crate::error::TraceError). This is the loop's
    /// termination signal; callers do not retry.
    fn step_to_syscall(&mut self) -> Result<SyscallEvent>;

    /// Let the syscall the tracee is currently parked at actually execute,
    /// resume until the matching syscall-exit stop, and read back the
    /// return register.
    ///
    /// Side effect: the tracee's filesystem/IO state changes exactly as if
    /// it were untraced.
    fn finish_syscall(&mut self) -> Result<i64>;

    /// Release tracing and let the tracee run to completion with no further
    /// interception.
    ///
    /// Terminal operation: the dispatcher makes no further calls after this
    /// one.
    fn detach_and_continue(&mut self) -> Result<()>;

    /// Copy up to `buf.len()` bytes from the tracee's address space at
    /// `addr` into `buf`, returning the number of bytes copied.
    ///
    /// ## Errors
    ///
    /// [`ReadError`] is recoverable: the caller must treat any failure as
    /// "no data decoded" and must not abort the run over it.
    fn read_remote(&self, addr: u64, buf: &mut [u8]) -> std::result::Result<usize, ReadError>;
}
