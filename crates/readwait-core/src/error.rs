//! # Error Types
//!
//! General error handling for the monitor.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! The taxonomy mirrors how failures propagate through the interception loop:
//!
//! 1. **Control failures** ([`TraceError::ControlFailed`],
//!    [`TraceError::TraceeExited`], [`TraceError::TraceeKilled`]): the
//!    debug-control primitive itself broke, usually because the tracee is
//!    gone. Always fatal to the loop; never retried.
//! 2. **Bootstrap failures** ([`TraceError::SpawnFailed`],
//!    [`TraceError::InvalidArgument`]): the traced child could not be
//!    created in the first place.
//! 3. **Remote-memory failures** ([`ReadError`]): recoverable. The caller
//!    treats them as "no data decoded" and lets the intercepted syscall run
//!    anyway.
//! 4. **Size-query failures** ([`SizeQueryError`]): recoverable. A query
//!    that fails is treated as "no growth observed" and feeds the ordinary
//!    stall/give-up policy.

use nix::errno::Errno;
use thiserror::Error;

/// Identity of the debug-control primitive that failed.
///
/// Carried inside [`TraceError::ControlFailed`] so diagnostics name the exact
/// operation instead of an anonymous ptrace failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlOp
{
    /// `PTRACE_SYSCALL`: resume the tracee until the next syscall stop
    Resume,
    /// `waitpid(2)`: wait for the tracee to stop
    Wait,
    /// `PTRACE_GETREGS`: capture the register snapshot at a stop
    ReadRegisters,
    /// `PTRACE_DETACH`: release the tracee
    Detach,
}

impl std::fmt::Display for ControlOp
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        let name = match self {
            ControlOp::Resume => "resume",
            ControlOp::Wait => "wait",
            ControlOp::ReadRegisters => "read registers",
            ControlOp::Detach => "detach",
        };
        f.write_str(name)
    }
}

/// Main error type for monitor operations
///
/// Any variant of this type ends the interception loop; recoverable
/// conditions (undecodable remote memory, failed size queries) have their
/// own types and never become a `TraceError`.
#[derive(Error, Debug)]
pub enum TraceError
{
    /// A debug-control primitive failed
    ///
    /// This is the loop's termination signal. The typical cause is the
    /// tracee having exited between stops, in which case ptrace reports
    /// `ESRCH`.
    #[error("debug control failed during {operation}: {source}")]
    ControlFailed
    {
        /// The primitive that failed
        operation: ControlOp,
        /// The underlying errno
        source: Errno,
    },

    /// The tracee exited while still being traced
    ///
    /// Observed as a `WaitStatus::Exited` at a point where the loop expected
    /// a syscall stop. The monitor treats this as an abnormal loop end: the
    /// watched file was never closed and the monitor never chose to detach.
    #[error("tracee exited with status {0} while traced")]
    TraceeExited(i32),

    /// The tracee was killed by a signal while still being traced
    #[error("tracee killed by signal {0} while traced")]
    TraceeKilled(nix::sys::signal::Signal),

    /// Failed to create the traced child process
    #[error("failed to spawn traced child: {0}")]
    SpawnFailed(Errno),

    /// Invalid argument passed to a monitor function
    ///
    /// Examples:
    /// - A command or argument containing an interior NUL byte
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Cross-process memory copy failure
///
/// Always recovered locally: the caller must assume no bytes were decoded
/// and let the intercepted syscall execute regardless. The discriminants
/// exist so "the host cannot do this at all" is reported differently from a
/// transient per-address failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError
{
    /// The host kernel lacks `process_vm_readv` (`ENOSYS`)
    #[error("cross-process memory reads unsupported on this host (process_vm_readv: ENOSYS)")]
    Unsupported,

    /// The copy failed for this particular address range
    #[error("cross-process memory read failed: {0}")]
    Failed(Errno),
}

/// On-disk size query failure
///
/// Distinguishes "the file is not there" (absent or rotated away) from any
/// other stat failure, instead of silently collapsing both to a size of 0.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeQueryError
{
    /// The file does not exist (absent or rotated)
    #[error("watched file is missing")]
    Missing,

    /// stat(2) failed for another reason
    #[error("size query failed: {0}")]
    Failed(Errno),
}

/// Convenience type alias for `Result<T, TraceError>`
///
/// ```rust
/// use readwait_core::error::Result;
/// fn foo() -> Result<()>
/// {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, TraceError>;
