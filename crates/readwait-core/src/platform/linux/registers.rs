//! # x86_64 Syscall ABI Mapping
//!
//! Maps the raw `user_regs_struct` captured by `PTRACE_GETREGS` onto the
//! logical fields the dispatcher cares about. This is the only place that
//! knows which hardware register carries which value; everything above works
//! with [`SyscallRegisterView`] accessors.
//!
//! x86_64 Linux syscall convention:
//!
//! | Logical field  | Register   |
//! |----------------|------------|
//! | syscall number | `orig_rax` |
//! | argument 1     | `rdi`      |
//! | argument 2     | `rsi`      |
//! | return value   | `rax`      |
//!
//! `orig_rax` rather than `rax` for the number: the kernel clobbers `rax`
//! with `-ENOSYS` on syscall entry.

use crate::types::SyscallRegisterView;

#[cfg(target_arch = "x86_64")]
impl SyscallRegisterView for libc::user_regs_struct
{
    fn syscall_number(&self) -> u64
    {
        self.orig_rax
    }

    fn arg1(&self) -> u64
    {
        self.rdi
    }

    fn arg2(&self) -> u64
    {
        self.rsi
    }

    fn ret(&self) -> u64
    {
        self.rax
    }
}
