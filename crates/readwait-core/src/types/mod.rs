//! # Types
//!
//! Platform-agnostic types used throughout the monitor.
//!
//! These types abstract away platform-specific details, allowing the
//! dispatcher to work with concepts like "syscall event" and "tracked
//! target" without knowing the register layout or the ptrace flavor
//! underneath.

pub mod process;
pub mod registers;
pub mod target;

// Re-export all public types
pub use process::ProcessId;
pub use registers::{SyscallEvent, SyscallRegisterView};
pub use target::TargetState;
