//! Tests for error types and their diagnostics

use nix::errno::Errno;
use readwait_core::error::{ControlOp, ReadError, Result, SizeQueryError, TraceError};

#[test]
fn test_control_failed_names_the_operation()
{
    let err = TraceError::ControlFailed {
        operation: ControlOp::Resume,
        source: Errno::ESRCH,
    };

    let msg = err.to_string();
    assert!(msg.contains("resume"));
    assert!(msg.contains("ESRCH"));
}

#[test]
fn test_control_op_display()
{
    assert_eq!(ControlOp::Resume.to_string(), "resume");
    assert_eq!(ControlOp::Wait.to_string(), "wait");
    assert_eq!(ControlOp::ReadRegisters.to_string(), "read registers");
    assert_eq!(ControlOp::Detach.to_string(), "detach");
}

#[test]
fn test_tracee_exited_display()
{
    let err = TraceError::TraceeExited(0);
    let msg = err.to_string();
    assert!(msg.contains("exited"));
    assert!(msg.contains('0'));
}

#[test]
fn test_tracee_killed_display()
{
    let err = TraceError::TraceeKilled(nix::sys::signal::Signal::SIGKILL);
    assert!(err.to_string().contains("SIGKILL"));
}

#[test]
fn test_spawn_failed_display()
{
    let err = TraceError::SpawnFailed(Errno::EAGAIN);
    let msg = err.to_string();
    assert!(msg.contains("spawn"));
    assert!(msg.contains("EAGAIN"));
}

#[test]
fn test_invalid_argument_display()
{
    let err = TraceError::InvalidArgument("command contains an interior NUL byte".to_string());
    assert!(err.to_string().contains("interior NUL"));
}

#[test]
fn test_read_error_distinguishes_unsupported_from_failed()
{
    let unsupported = ReadError::Unsupported;
    assert!(unsupported.to_string().contains("process_vm_readv"));

    let failed = ReadError::Failed(Errno::EFAULT);
    assert!(failed.to_string().contains("EFAULT"));
    assert_ne!(unsupported, failed);
}

#[test]
fn test_size_query_error_display()
{
    let missing = SizeQueryError::Missing;
    assert!(missing.to_string().contains("missing"));

    let failed = SizeQueryError::Failed(Errno::EACCES);
    assert!(failed.to_string().contains("EACCES"));
    assert_ne!(missing, failed);
}

#[test]
fn test_result_alias()
{
    fn ok_fn() -> Result<u64>
    {
        Ok(42)
    }

    fn err_fn() -> Result<u64>
    {
        Err(TraceError::TraceeExited(1))
    }

    assert_eq!(ok_fn().ok(), Some(42));
    assert!(err_fn().is_err());
}

#[test]
fn test_trace_error_implements_std_error()
{
    fn assert_error<E: std::error::Error>(_: &E) {}

    assert_error(&TraceError::TraceeExited(0));
    assert_error(&ReadError::Unsupported);
    assert_error(&SizeQueryError::Missing);
}
