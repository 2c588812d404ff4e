//! End-to-end tests for the readwait binary.
//!
//! These drive the real binary against a real traced child (the
//! `test-helper` consumer) and assert on exit codes only, which is what the
//! tool contracts to its callers. Stall knobs are turned down so the give-up
//! paths finish in about a second instead of ten.

#![cfg(target_os = "linux")]

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::process::Command;
use std::thread;
use std::time::Duration;

const READWAIT: &str = env!("CARGO_BIN_EXE_readwait");
const HELPER: &str = env!("CARGO_BIN_EXE_test-helper");

#[test]
fn test_missing_arguments_exit_with_usage_error()
{
    let status = Command::new(READWAIT).status().unwrap();
    assert_eq!(status.code(), Some(1));

    let status = Command::new(READWAIT).arg("/tmp/data.log").status().unwrap();
    assert_eq!(status.code(), Some(1));
}

#[test]
fn test_help_is_not_a_usage_error()
{
    let status = Command::new(READWAIT).arg("--help").status().unwrap();
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_consumer_closing_the_file_is_success()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.log");
    fs::write(&path, vec![b'x'; 100]).unwrap();

    // The file already holds everything the consumer wants: every read is
    // behind the on-disk size and passes straight through.
    let status = Command::new(READWAIT)
        .arg(&path)
        .arg(HELPER)
        .arg(&path)
        .arg("100")
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_giving_up_on_a_stalled_file_is_success()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.log");
    fs::write(&path, vec![b'x'; 10]).unwrap();

    // The consumer wants 20 bytes but the file stops at 10 and never grows:
    // the monitor stalls once, retries once, then detaches and succeeds.
    let status = Command::new(READWAIT)
        .arg("--stall-delay")
        .arg("1")
        .arg("--stall-retries")
        .arg("1")
        .arg(&path)
        .arg(HELPER)
        .arg(&path)
        .arg("20")
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_read_unblocks_when_the_file_grows()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.log");
    fs::write(&path, vec![b'x'; 10]).unwrap();

    let mut child = Command::new(READWAIT)
        .arg("--stall-delay")
        .arg("1")
        .arg("--stall-retries")
        .arg("10")
        .arg(&path)
        .arg(HELPER)
        .arg(&path)
        .arg("20")
        .spawn()
        .unwrap();

    // Let the consumer drain the first 10 bytes and park on its next read,
    // then produce the rest.
    thread::sleep(Duration::from_millis(1500));
    let mut file = OpenOptions::new().append(true).open(&path).unwrap();
    file.write_all(&vec![b'y'; 10]).unwrap();
    drop(file);

    let status = child.wait().unwrap();
    assert_eq!(status.code(), Some(0));
}

#[test]
fn test_target_exiting_while_traced_is_a_monitoring_failure()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.log");
    fs::write(&path, b"irrelevant").unwrap();

    // `true` never opens the watched file and exits almost immediately, so
    // the loop observes an exit where it expected a syscall stop.
    let status = Command::new(READWAIT)
        .arg(&path)
        .arg("true")
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(4));
}

#[test]
fn test_exec_failure_in_the_child_is_a_monitoring_failure()
{
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.log");
    fs::write(&path, b"irrelevant").unwrap();

    // The child reports the failed exec by exiting 3; the monitor sees an
    // exit before the first syscall stop and reports a loop failure.
    let status = Command::new(READWAIT)
        .arg(&path)
        .arg("this-command-does-not-exist-4d1a")
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(4));
}
