//! Tracked-file state.

/// Everything the dispatcher knows about the watched file
///
/// Created once per run with no descriptor tracked; mutated only by the
/// dispatcher between stops (the tracee is suspended whenever this is
/// touched, so there is no sharing to guard against).
///
/// ## Invariants
///
/// - At most one descriptor is tracked at a time. A later matching open
///   overwrites the tracked descriptor but keeps the running byte count:
///   the new descriptor is treated as a continuation of the same logical
///   stream.
/// - `bytes_consumed` is monotonically non-decreasing and grows only by the
///   positive return values of executed reads on the tracked descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetState
{
    /// The filter path, matched byte-for-byte against decoded open paths.
    /// No canonicalization: a tracee opening `log.txt` will never match a
    /// filter of `/tmp/log.txt`.
    filter_path: Vec<u8>,
    /// The kernel descriptor currently being watched, if any
    tracked: Option<u64>,
    /// Total bytes the tracee has successfully read from the tracked stream
    bytes_consumed: u64,
    /// Last on-disk size observed by the growth oracle
    last_size: u64,
}

impl TargetState
{
    /// Create the state for one monitoring run.
    ///
    /// No descriptor is tracked yet; both counters start at zero.
    pub fn new(filter_path: impl Into<Vec<u8>>) -> Self
    {
        Self {
            filter_path: filter_path.into(),
            tracked: None,
            bytes_consumed: 0,
            last_size: 0,
        }
    }

    /// The raw filter path bytes.
    pub fn filter_path(&self) -> &[u8]
    {
        &self.filter_path
    }

    /// Does a decoded open path match the filter exactly?
    pub fn matches(&self, decoded: &[u8]) -> bool
    {
        self.filter_path == decoded
    }

    /// Start (or restart) watching a descriptor.
    ///
    /// Overwrites any previously tracked descriptor. The byte count is
    /// deliberately left alone: a re-open of the same path continues the
    /// previous stream's accounting.
    pub fn track(&mut self, fd: u64)
    {
        self.tracked = Some(fd);
    }

    /// The currently tracked descriptor, if any.
    pub fn tracked(&self) -> Option<u64>
    {
        self.tracked
    }

    /// Is `fd` the tracked descriptor?
    pub fn is_tracked(&self, fd: u64) -> bool
    {
        self.tracked == Some(fd)
    }

    /// Record the result of an executed read on the tracked descriptor.
    ///
    /// Only positive return values advance the count; zero (EOF) and
    /// negative (errno) results leave it untouched.
    pub fn record_read(&mut self, ret: i64)
    {
        if ret > 0 {
            self.bytes_consumed += ret as u64;
        }
    }

    /// Bytes consumed so far from the tracked stream.
    pub fn bytes_consumed(&self) -> u64
    {
        self.bytes_consumed
    }

    /// Remember the latest size reported by the oracle.
    pub fn observe_size(&mut self, size: u64)
    {
        self.last_size = size;
    }

    /// The most recently observed on-disk size.
    pub fn last_size(&self) -> u64
    {
        self.last_size
    }

    /// Has the consumer caught up with everything known to be on disk?
    ///
    /// When true, a read on the tracked descriptor must not execute until
    /// the oracle observes growth.
    pub fn caught_up(&self) -> bool
    {
        self.bytes_consumed >= self.last_size
    }
}
