//! Tests for platform-agnostic types

use readwait_core::types::{ProcessId, SyscallEvent, SyscallRegisterView, TargetState};

#[test]
fn test_process_id_from_u32()
{
    let pid = ProcessId::from(12345);
    assert_eq!(pid.0, 12345);
}

#[test]
fn test_process_id_to_u32()
{
    let pid = ProcessId::from(54321);
    let value: u32 = pid.into();
    assert_eq!(value, 54321);
}

#[test]
fn test_process_id_equality()
{
    let pid1 = ProcessId::from(12345);
    let pid2 = ProcessId::from(12345);
    let pid3 = ProcessId::from(54321);

    assert_eq!(pid1, pid2);
    assert_ne!(pid1, pid3);
}

#[test]
fn test_process_id_display()
{
    let pid = ProcessId::from(4242);
    assert_eq!(pid.to_string(), "4242");
}

#[test]
fn test_syscall_event_new()
{
    let event = SyscallEvent::new(libc::SYS_read as u64, 3, 0x7000_0000);
    assert_eq!(event.number as i64, libc::SYS_read);
    assert_eq!(event.arg1, 3);
    assert_eq!(event.arg2, 0x7000_0000);
}

/// Minimal register snapshot for exercising the view trait without a real
/// tracee.
struct FakeRegs
{
    number: u64,
    arg1: u64,
    arg2: u64,
    ret: u64,
}

impl SyscallRegisterView for FakeRegs
{
    fn syscall_number(&self) -> u64
    {
        self.number
    }

    fn arg1(&self) -> u64
    {
        self.arg1
    }

    fn arg2(&self) -> u64
    {
        self.arg2
    }

    fn ret(&self) -> u64
    {
        self.ret
    }
}

#[test]
fn test_syscall_event_from_register_view()
{
    let regs = FakeRegs {
        number: libc::SYS_openat as u64,
        arg1: libc::AT_FDCWD as u64,
        arg2: 0x5000,
        ret: 0,
    };

    let event = SyscallEvent::from_regs(&regs);
    assert_eq!(event.number as i64, libc::SYS_openat);
    assert_eq!(event.arg1, libc::AT_FDCWD as u64);
    assert_eq!(event.arg2, 0x5000);
}

#[test]
fn test_new_state_tracks_nothing()
{
    let state = TargetState::new(b"/tmp/data.log".to_vec());
    assert_eq!(state.tracked(), None);
    assert!(!state.is_tracked(3));
    assert_eq!(state.bytes_consumed(), 0);
    assert_eq!(state.last_size(), 0);
}

#[test]
fn test_state_path_match_is_byte_exact()
{
    let state = TargetState::new(b"/tmp/data.log".to_vec());

    assert!(state.matches(b"/tmp/data.log"));
    // No canonicalization: a relative spelling of the same file is a miss.
    assert!(!state.matches(b"data.log"));
    assert!(!state.matches(b"/tmp/data.log2"));
    assert!(!state.matches(b"/tmp/data.lo"));
    assert!(!state.matches(b""));
}

#[test]
fn test_track_and_is_tracked()
{
    let mut state = TargetState::new(b"/tmp/data.log".to_vec());

    state.track(3);
    assert_eq!(state.tracked(), Some(3));
    assert!(state.is_tracked(3));
    assert!(!state.is_tracked(4));
}

#[test]
fn test_retrack_keeps_byte_accounting()
{
    let mut state = TargetState::new(b"/tmp/data.log".to_vec());

    state.track(3);
    state.record_read(100);
    state.track(5);

    // A re-open continues the same logical stream.
    assert_eq!(state.tracked(), Some(5));
    assert!(!state.is_tracked(3));
    assert_eq!(state.bytes_consumed(), 100);
}

#[test]
fn test_record_read_sums_positive_returns_only()
{
    let mut state = TargetState::new(b"/tmp/data.log".to_vec());
    state.track(3);

    state.record_read(64);
    state.record_read(0);
    state.record_read(-11);
    state.record_read(36);

    assert_eq!(state.bytes_consumed(), 100);
}

#[test]
fn test_caught_up_boundary()
{
    let mut state = TargetState::new(b"/tmp/data.log".to_vec());
    state.track(3);

    // Nothing observed, nothing consumed: caught up.
    assert!(state.caught_up());

    state.observe_size(100);
    assert!(!state.caught_up());

    state.record_read(99);
    assert!(!state.caught_up());

    // Exactly at the observed size counts as caught up.
    state.record_read(1);
    assert!(state.caught_up());

    state.observe_size(150);
    assert!(!state.caught_up());
}
