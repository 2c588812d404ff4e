//! # Syscall Dispatcher
//!
//! The main interception loop. Drives a [`ProcessControl`] implementation
//! from syscall boundary to syscall boundary, tracks which descriptor (if
//! any) refers to the watched file, and applies per-syscall policy:
//!
//! | Syscall       | Policy |
//! |---------------|--------|
//! | `openat`      | Decode the path argument, always execute, start tracking the returned descriptor on an exact match |
//! | `read`        | Pass through unless it is on the tracked descriptor; then hold it until the file has grown, or give up |
//! | `close`       | Pass through unless it is on the tracked descriptor; then execute it and detach |
//! | anything else | Execute and continue |
//!
//! Interception is scoped to exactly the syscalls that can affect "has the
//! consumer caught up with the producer". Everything else is transparent so
//! the traced program's unrelated behavior is not perturbed.
//!
//! Only a control-primitive failure is fatal here. Remote-memory failures
//! and "no growth" oracle answers are ordinary policy branches.

use std::thread;
use std::time::Duration;

use tracing::{debug, warn};

use crate::controller::ProcessControl;
use crate::error::{ReadError, Result};
use crate::growth::GrowthSource;
use crate::types::TargetState;

/// Decode buffer for open paths: up to 1023 path bytes plus a terminator
/// byte that is never overwritten.
const PATH_DECODE_BUF: usize = 1024;

/// Stall/retry/give-up policy for a held-back read
///
/// The default reproduces the fixed historical behavior: one immediate size
/// check, then one more after a 10 second sleep, then give up. Both knobs
/// are adjustable so callers (and tests) can swap the mechanism without
/// changing the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StallPolicy
{
    /// How long to sleep between size re-queries
    pub delay: Duration,
    /// How many delayed re-queries to attempt before giving up
    pub max_retries: u32,
}

impl Default for StallPolicy
{
    fn default() -> Self
    {
        Self {
            delay: Duration::from_secs(10),
            max_retries: 1,
        }
    }
}

/// How a monitoring run ended, short of an error
///
/// Both variants are successes: the monitor's job is over and the tracee
/// runs unobstructed from that point on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOutcome
{
    /// The tracked descriptor was closed; nothing left to watch
    FileClosed,
    /// Growth-wait retries were exhausted; monitoring was abandoned
    GaveUp,
}

/// Run the interception loop until the watched file is closed, the stall
/// policy gives up, or a control primitive fails.
///
/// `state` carries the filter path and accumulates the tracked descriptor
/// and byte accounting; it is only ever touched here, between stops, while
/// the tracee is suspended.
///
/// ## Errors
///
/// Propagates any [`TraceError`](crate::error::TraceError) from the
/// controller, including the tracee exiting while still traced. That is the
/// loop's only failure mode.
pub fn run_filter<C, G>(
    control: &mut C,
    oracle: &mut G,
    state: &mut TargetState,
    policy: &StallPolicy,
) -> Result<FilterOutcome>
where
    C: ProcessControl,
    G: GrowthSource,
{
    loop {
        let event = control.step_to_syscall()?;

        match event.number as i64 {
            libc::SYS_openat => {
                // Pathname is the second argument (the first is the dirfd).
                let decoded = decode_open_path(control, event.arg2);
                let ret = control.finish_syscall()?;
                if let Some(path) = decoded {
                    if state.matches(&path) {
                        // The returned value is tracked as-is; a failed open
                        // yields a negative value no read will ever carry.
                        debug!(fd = ret, "watched file opened");
                        state.track(ret as u64);
                    }
                }
            }

            libc::SYS_read if state.is_tracked(event.arg1) => {
                if !wait_for_growth(oracle, state, policy) {
                    // Retries exhausted: abandon monitoring and let the
                    // parked read (and everything after it) run untraced.
                    warn!(
                        consumed = state.bytes_consumed(),
                        size = state.last_size(),
                        "no growth observed; giving up"
                    );
                    control.detach_and_continue()?;
                    return Ok(FilterOutcome::GaveUp);
                }
                let ret = control.finish_syscall()?;
                state.record_read(ret);
                debug!(ret, consumed = state.bytes_consumed(), "tracked read executed");
            }

            libc::SYS_close if state.is_tracked(event.arg1) => {
                // The watched file is going away: let the close land, then
                // step aside for good.
                control.finish_syscall()?;
                debug!(fd = event.arg1, "watched file closed; detaching");
                control.detach_and_continue()?;
                return Ok(FilterOutcome::FileClosed);
            }

            _ => {
                // Pure pass-through for everything else, including reads and
                // closes on unrelated descriptors.
                control.finish_syscall()?;
            }
        }
    }
}

/// Decide whether a read on the tracked descriptor may proceed.
///
/// Returns `true` as soon as the on-disk size exceeds the consumed byte
/// count: first against the cached size, then after an immediate re-query,
/// then after up to `policy.max_retries` sleep-and-re-query rounds. Returns
/// `false` when every check came up short, which is the give-up signal.
fn wait_for_growth<G: GrowthSource>(oracle: &mut G, state: &mut TargetState, policy: &StallPolicy) -> bool
{
    if !state.caught_up() {
        return true;
    }

    refresh_size(oracle, state);
    if !state.caught_up() {
        return true;
    }

    for attempt in 1..=policy.max_retries {
        warn!(
            attempt,
            consumed = state.bytes_consumed(),
            size = state.last_size(),
            "waiting for file to grow"
        );
        thread::sleep(policy.delay);

        refresh_size(oracle, state);
        if !state.caught_up() {
            return true;
        }
    }

    false
}

/// Re-query the oracle, keeping the previous observation on failure.
///
/// A failed query (file missing, rotated, or stat error) counts as "no
/// growth observed" and flows into the normal stall/give-up policy instead
/// of aborting the run.
fn refresh_size<G: GrowthSource>(oracle: &mut G, state: &mut TargetState)
{
    match oracle.current_size() {
        Ok(size) => state.observe_size(size),
        Err(err) => warn!(%err, "size query failed; treating as no growth"),
    }
}

/// Decode the pathname argument of an open-family syscall.
///
/// Reads up to 1023 bytes from the tracee at `addr` into a bounded buffer
/// whose final byte stays NUL, and returns the bytes up to the first NUL.
/// Any copy failure means `None`: the caller must not assume a filename was
/// obtained, and the syscall executes regardless.
fn decode_open_path<C: ProcessControl>(control: &C, addr: u64) -> Option<Vec<u8>>
{
    let mut buf = [0u8; PATH_DECODE_BUF];
    let limit = PATH_DECODE_BUF - 1;

    match control.read_remote(addr, &mut buf[..limit]) {
        Ok(_) => {
            let len = buf.iter().position(|&b| b == 0).unwrap_or(limit);
            Some(buf[..len].to_vec())
        }
        Err(ReadError::Unsupported) => {
            warn!("cross-process memory reads unsupported; cannot match open paths");
            None
        }
        Err(err) => {
            debug!(%err, addr, "could not decode open path");
            None
        }
    }
}
