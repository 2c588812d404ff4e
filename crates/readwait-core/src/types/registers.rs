//! Register snapshot abstraction.
//!
//! The dispatcher only ever needs three facts from a stopped tracee: which
//! syscall it is parked at, and the first two argument words. Which hardware
//! registers carry those facts is an ABI detail, so the raw register struct
//! stays behind [`SyscallRegisterView`] and the dispatcher consumes the
//! architecture-free [`SyscallEvent`] derived from it.
//!
//! Supporting another architecture means implementing the trait for its
//! register struct (see `platform/linux/registers.rs` for the x86_64
//! mapping); nothing above this layer changes.

/// Accessors over a captured register snapshot, one per logical field of the
/// syscall ABI.
///
/// Implemented for the platform's raw register struct. At a syscall-entry
/// stop all four accessors are meaningful; at a syscall-exit stop only
/// [`SyscallRegisterView::ret`] is.
pub trait SyscallRegisterView
{
    /// The syscall number the tracee is parked at
    fn syscall_number(&self) -> u64;

    /// First syscall argument word
    fn arg1(&self) -> u64;

    /// Second syscall argument word
    fn arg2(&self) -> u64;

    /// The syscall return register (valid at a syscall-exit stop)
    fn ret(&self) -> u64;
}

/// A decoded view of the syscall the tracee is currently parked at
///
/// Derived from the most recent register snapshot; only valid until the
/// tracee is resumed. Copy semantics keep it cheap to pass through the
/// dispatcher's policy table.
///
/// ## Example
///
/// ```rust
/// use readwait_core::types::SyscallEvent;
///
/// let event = SyscallEvent::new(libc::SYS_read as u64, 3, 0x7000_0000);
/// assert_eq!(event.number as i64, libc::SYS_read);
/// assert_eq!(event.arg1, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyscallEvent
{
    /// Syscall number
    pub number: u64,
    /// First argument word (descriptor for read/close)
    pub arg1: u64,
    /// Second argument word (pathname pointer for openat, buffer for read)
    pub arg2: u64,
}

impl SyscallEvent
{
    /// Create an event from already-decoded words.
    pub fn new(number: u64, arg1: u64, arg2: u64) -> Self
    {
        Self { number, arg1, arg2 }
    }

    /// Derive an event from a register snapshot.
    pub fn from_regs<R: SyscallRegisterView>(regs: &R) -> Self
    {
        Self {
            number: regs.syscall_number(),
            arg1: regs.arg1(),
            arg2: regs.arg2(),
        }
    }
}
