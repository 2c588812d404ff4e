//! # Traced Child Launch
//!
//! Spawns the target program with tracing enabled from its very first
//! instruction: fork, mark the child with `PTRACE_TRACEME`, then `execvp`
//! the program image. The kernel stops the child with SIGTRAP when the exec
//! completes, which is the stop
//! [`wait_initial_stop`](super::TracedProcess::wait_initial_stop) collects.
//!
//! The child half runs between `fork` and `execvp`, so it sticks to
//! async-signal-safe territory: the argument `CString`s are built before
//! forking, and the child leaves through `_exit` rather than the normal
//! runtime teardown.

use std::ffi::{CString, OsStr, OsString};
use std::os::unix::ffi::OsStrExt;

use nix::sys::ptrace;
use nix::unistd::{execvp, fork, ForkResult};

use crate::error::{Result, TraceError};
use crate::types::ProcessId;

/// Exit status the child reports when its program image cannot be loaded
/// (or tracing cannot be requested). The monitor itself then fails its loop
/// on the tracee's death; this status is what the child's own waiters see.
pub const CHILD_EXEC_FAILURE: i32 = 3;

/// Fork a child that requests tracing and loads `program` with `args`.
///
/// On return the child may not have reached its first stop yet; call
/// [`TracedProcess::wait_initial_stop`](super::TracedProcess::wait_initial_stop)
/// before stepping.
///
/// ## Errors
///
/// - [`TraceError::InvalidArgument`] if the program or an argument contains
///   an interior NUL byte
/// - [`TraceError::SpawnFailed`] if `fork` itself fails
///
/// A child-side failure (traceme or execvp) is not an error here: the child
/// reports it on stderr and exits with [`CHILD_EXEC_FAILURE`], and the
/// monitor's loop subsequently fails on the dead tracee.
pub fn spawn_traced(program: &OsStr, args: &[OsString]) -> Result<ProcessId>
{
    // Everything the child needs is allocated before the fork.
    let c_program = to_cstring(program)?;
    let mut c_argv = Vec::with_capacity(args.len() + 1);
    c_argv.push(c_program.clone());
    for arg in args {
        c_argv.push(to_cstring(arg)?);
    }

    match unsafe { fork() } {
        Ok(ForkResult::Parent { child }) => Ok(ProcessId(child.as_raw() as u32)),
        Ok(ForkResult::Child) => {
            if let Err(errno) = ptrace::traceme() {
                eprintln!("readwait: ptrace traceme: {errno}");
                unsafe { libc::_exit(CHILD_EXEC_FAILURE) }
            }
            let errno = match execvp(&c_program, &c_argv) {
                Err(errno) => errno,
                Ok(never) => match never {},
            };
            eprintln!("readwait: execvp: {errno}");
            unsafe { libc::_exit(CHILD_EXEC_FAILURE) }
        }
        Err(errno) => Err(TraceError::SpawnFailed(errno)),
    }
}

fn to_cstring(value: &OsStr) -> Result<CString>
{
    CString::new(value.as_bytes()).map_err(|_| {
        TraceError::InvalidArgument(format!("argument contains interior NUL: {}", value.to_string_lossy()))
    })
}
