//! Frame-by-frame code accumulation for a dual-code scan.

use crate::model::article::Record;
use crate::scan::classify::{classify_scan_pair, ClassifyError};
use log::info;

/// Source of decoded code strings, one batch per captured frame.
///
/// Implementations wrap the camera/decoder hardware. A frame where capture
/// or decoding failed is reported as an empty batch and silently skipped by
/// the session; `None` means the stream ended (user closed the window).
pub trait CodeSource {
    fn next_frame(&mut self) -> Option<Vec<String>>;
}

/// Result of one scan session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The source ended before two distinct codes were seen.
    Cancelled,
    /// Two distinct codes were seen and classified.
    Pair(Record),
}

/// Accumulates distinct decoded strings across frames until two are seen.
#[derive(Debug, Default)]
pub struct ScanSession {
    seen: Vec<String>,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one frame of decoded strings.
    ///
    /// Returns `true` once at least two distinct codes have been observed.
    /// Repeats of already-seen codes are ignored; observation order is kept.
    pub fn observe<I>(&mut self, codes: I) -> bool
    where
        I: IntoIterator<Item = String>,
    {
        for code in codes {
            if !self.seen.contains(&code) {
                self.seen.push(code);
            }
        }
        self.seen.len() >= 2
    }

    pub fn distinct_count(&self) -> usize {
        self.seen.len()
    }

    /// The first two distinct codes, once available.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match self.seen.as_slice() {
            [first, second, ..] => Some((first.as_str(), second.as_str())),
            _ => None,
        }
    }
}

/// Drives a source until a pair is captured or the stream ends.
///
/// Blocks the calling thread between frames; cancellation is cooperative
/// through the source returning `None`.
pub fn run_scan<S: CodeSource>(source: &mut S) -> Result<ScanOutcome, ClassifyError> {
    let mut session = ScanSession::new();
    let mut frames = 0u64;

    while let Some(codes) = source.next_frame() {
        frames += 1;
        if session.observe(codes) {
            // pair() is Some by the observe contract; avoid unwrap anyway.
            if let Some((first, second)) = session.pair() {
                let record = classify_scan_pair(first, second)?;
                info!(
                    "event=scan_pair module=scan status=ok frames={} article={}",
                    frames, record.article
                );
                return Ok(ScanOutcome::Pair(record));
            }
        }
    }

    info!(
        "event=scan_session module=scan status=cancelled frames={} distinct={}",
        frames,
        session.distinct_count()
    );
    Ok(ScanOutcome::Cancelled)
}
