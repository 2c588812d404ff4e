//! # Linux Process Controller
//!
//! Owns one attached tracee and implements [`ProcessControl`] over the
//! `ptrace` syscall-boundary primitives.
//!
//! Every operation here follows the same shape: issue the ptrace request,
//! wait for the resulting stop, read back registers. Each primitive gets a
//! result-returning wrapper carrying the identity of the failed operation
//! ([`ControlOp`]), so a dead tracee surfaces as a diagnosable error rather
//! than an anonymous `-1`.
//!
//! The loop treats the tracee's stops strictly as an entry/exit alternation:
//! [`TracedProcess::step_to_syscall`] is always the entry side and
//! [`TracedProcess::finish_syscall`] the exit side. A tracee that dies
//! between them shows up as `TraceeExited`/`TraceeKilled` from the wait.

use libc::user_regs_struct;
use nix::sys::ptrace;
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::Pid;

use super::memory;
use crate::controller::ProcessControl;
use crate::error::{ControlOp, ReadError, Result, TraceError};
use crate::types::{ProcessId, SyscallEvent, SyscallRegisterView};

/// One traced process, exclusively owned by the monitor
///
/// Created right after [`spawn_traced`](super::spawn_traced) returns;
/// consumed by the dispatcher until it detaches or the tracee dies.
#[derive(Debug)]
pub struct TracedProcess
{
    pid: Pid,
}

impl TracedProcess
{
    /// Take control of an already-spawned, already-traced child.
    pub fn new(pid: ProcessId) -> Self
    {
        Self {
            pid: Pid::from_raw(pid.0 as i32),
        }
    }

    /// Process identifier of the tracee.
    pub fn pid(&self) -> ProcessId
    {
        ProcessId(self.pid.as_raw() as u32)
    }

    /// Wait for the tracee's very first stop (the SIGTRAP the kernel
    /// delivers when a `PTRACE_TRACEME` child reaches `execve`).
    ///
    /// Must be called exactly once, before the first
    /// [`ProcessControl::step_to_syscall`].
    pub fn wait_initial_stop(&self) -> Result<()>
    {
        self.wait_stop()
    }

    /// Block until the tracee stops again; a tracee that ended instead is a
    /// fatal loop-termination error.
    fn wait_stop(&self) -> Result<()>
    {
        match waitpid(self.pid, None) {
            Ok(WaitStatus::Exited(_, code)) => Err(TraceError::TraceeExited(code)),
            Ok(WaitStatus::Signaled(_, signal, _)) => Err(TraceError::TraceeKilled(signal)),
            Ok(_) => Ok(()),
            Err(errno) => Err(TraceError::ControlFailed {
                operation: ControlOp::Wait,
                source: errno,
            }),
        }
    }

    /// Resume in syscall-stepping mode and wait for the next stop.
    fn resume_to_stop(&self) -> Result<()>
    {
        ptrace::syscall(self.pid, None).map_err(|errno| TraceError::ControlFailed {
            operation: ControlOp::Resume,
            source: errno,
        })?;
        self.wait_stop()
    }

    /// Capture the register snapshot at the current stop.
    fn read_registers(&self) -> Result<user_regs_struct>
    {
        ptrace::getregs(self.pid).map_err(|errno| TraceError::ControlFailed {
            operation: ControlOp::ReadRegisters,
            source: errno,
        })
    }
}

impl ProcessControl for TracedProcess
{
    fn step_to_syscall(&mut self) -> Result<SyscallEvent>
    {
        self.resume_to_stop()?;
        let regs = self.read_registers()?;
        Ok(SyscallEvent::from_regs(&regs))
    }

    fn finish_syscall(&mut self) -> Result<i64>
    {
        self.resume_to_stop()?;
        let regs = self.read_registers()?;
        Ok(regs.ret() as i64)
    }

    fn detach_and_continue(&mut self) -> Result<()>
    {
        ptrace::detach(self.pid, None).map_err(|errno| TraceError::ControlFailed {
            operation: ControlOp::Detach,
            source: errno,
        })
    }

    fn read_remote(&self, addr: u64, buf: &mut [u8]) -> std::result::Result<usize, ReadError>
    {
        memory::read_bytes(self.pid, addr, buf)
    }
}
