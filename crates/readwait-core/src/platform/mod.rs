//! # Platform-Specific Implementations
//!
//! This module contains platform-specific interception backends.
//!
//! Each platform has its own submodule that implements the `ProcessControl`
//! trait using that platform's native debugging APIs:
//!
//! - **Linux**: Uses the `ptrace` system call in syscall-boundary mode plus
//!   `process_vm_readv` for remote memory
//!   - See: [ptrace(2) man page](https://man7.org/linux/man-pages/man2/ptrace.2.html)
//!
//! ## Why separate modules?
//!
//! - **Clean separation**: Platform-specific code is isolated
//! - **Conditional compilation**: Only compile code for the current platform
//! - **Easy to extend**: Adding a new platform is just adding a new module

#[cfg(target_os = "linux")]
pub mod linux;
