//! Download progress reporting

use indicatif::{ProgressBar, ProgressStyle};

/// CLI progress report of an ongoing download
///
/// To avoid corrupted terminal output, you should not write anything to stderr
/// yourself as long as the report is being displayed. Please use logs for
/// debug messages.
#[derive(Clone, Debug)]
pub struct DownloadProgress(ProgressBar);
//
impl DownloadProgress {
    /// Start reporting on a download of known or unknown size
    pub fn new(what: impl Into<String>, total_bytes: Option<u64>) -> Self {
        let (bar, style_trailer) = match total_bytes {
            Some(total) => (
                ProgressBar::new(total),
                "{wide_bar} {decimal_bytes}/{decimal_total_bytes} ({decimal_bytes_per_sec})",
            ),
            None => (
                ProgressBar::new_spinner(),
                "{spinner} {decimal_bytes} ({decimal_bytes_per_sec})",
            ),
        };
        let bar = bar.with_prefix(what.into()).with_style(
            ProgressStyle::with_template(&format!("{{prefix}} {style_trailer}"))
                .expect("all styles above should be valid indicatif styles"),
        );
        Self(bar)
    }

    /// Report that a block of bytes was received
    pub fn add_bytes(&self, bytes: usize) {
        self.0.inc(bytes as u64);
    }

    /// Number of bytes received so far
    pub fn bytes(&self) -> u64 {
        self.0.position()
    }

    /// Hide the progress bar once the download is over
    pub fn finish(&self) {
        self.0.finish_and_clear();
    }
}
