//! # readwait-core
//!
//! Syscall interception and blocking-read emulation primitives for readwait.
//!
//! readwait makes a read of one specific file appear to block ("wait for
//! more data") even though the underlying descriptor would return a short
//! read or EOF. It does this by attaching to the target process as a
//! debugger and intercepting its open/read/close syscalls at the kernel
//! boundary:
//!
//! - A matching `openat` teaches the monitor which file descriptor to watch.
//! - A `read` on that descriptor is held back until the file on disk has
//!   grown past what the consumer already read.
//! - A `close` of that descriptor (or exhausting the stall retries) ends the
//!   monitor's involvement; the tracee runs on untouched.
//!
//! ## Platform Support
//!
//! - **Linux** (x86_64): `PTRACE_SYSCALL` stepping plus `process_vm_readv`
//!   for reading the tracee's address space.
//!
//! Other architectures would only need a new [`SyscallRegisterView`]
//! mapping; the dispatcher never touches raw registers.
//!
//! ## Why unsafe code is needed
//!
//! Spawning the traced child uses `fork(2)`, which is inherently unsafe in a
//! multi-threaded host. The unsafe surface is confined to the launch module;
//! everything else goes through safe `nix` wrappers.

#![allow(unsafe_code)] // Required for fork() in the launch path

pub mod controller;
pub mod error;
pub mod filter;
pub mod growth;
pub mod platform;
pub mod types;

pub use controller::ProcessControl;
// Re-export commonly used types
pub use error::{ReadError, Result, SizeQueryError, TraceError};
pub use filter::{run_filter, FilterOutcome, StallPolicy};
pub use growth::{FileSizeOracle, GrowthSource};
#[cfg(target_os = "linux")]
pub use platform::linux::{spawn_traced, TracedProcess};
pub use types::{ProcessId, SyscallEvent, SyscallRegisterView, TargetState};
