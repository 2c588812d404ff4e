//! # Linux Interception Implementation
//!
//! Linux-specific syscall interception built on `ptrace`.
//!
//! The monitor forks the target itself: the child calls `PTRACE_TRACEME`
//! before loading its program image, so every syscall the program ever makes
//! stops under the monitor's control. From there the loop alternates
//! `PTRACE_SYSCALL` resumes with `waitpid` stops, reading registers with
//! `PTRACE_GETREGS` at each boundary.
//!
//! ## Key interfaces used
//!
//! - `ptrace(2)` via the `nix` wrappers: `traceme`, `syscall`, `getregs`,
//!   `detach`
//! - `waitpid(2)`: observe syscall-entry/exit stops and tracee death
//! - `process_vm_readv(2)`: copy pathname bytes out of the tracee
//!
//! ## References
//!
//! - [ptrace(2) man page](https://man7.org/linux/man-pages/man2/ptrace.2.html)
//! - [process_vm_readv(2) man page](https://man7.org/linux/man-pages/man2/process_vm_readv.2.html)

pub mod controller;
pub mod launch;
pub mod memory;
pub mod registers;

pub use controller::TracedProcess;
pub use launch::spawn_traced;
