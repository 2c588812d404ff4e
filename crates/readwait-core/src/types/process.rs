//! Process identifier type.

/// Process identifier (PID)
///
/// A PID is a unique number assigned to each running process by the
/// operating system. On Linux it is a positive 32-bit integer.
///
/// ## Why wrap it in a struct?
///
/// Using a newtype pattern (`struct ProcessId(u32)`) instead of a raw `u32`
/// provides:
/// - **Type safety**: prevents accidentally passing a descriptor or byte
///   count where a PID is expected
/// - **Self-documenting code**: makes it clear what the value represents
///
/// ## Example
///
/// ```rust
/// use readwait_core::types::ProcessId;
///
/// let pid = ProcessId::from(12345);
/// assert_eq!(u32::from(pid), 12345);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProcessId(pub u32);

impl From<u32> for ProcessId
{
    fn from(pid: u32) -> Self
    {
        ProcessId(pid)
    }
}

impl From<ProcessId> for u32
{
    fn from(pid: ProcessId) -> Self
    {
        pid.0
    }
}

impl std::fmt::Display for ProcessId
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        write!(f, "{}", self.0)
    }
}
