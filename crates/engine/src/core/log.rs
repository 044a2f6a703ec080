//! Append-only execution log.
//!
//! The log is the machine's only diagnostic surface: every executed
//! instruction, clamp warning, and fatal halt appends exactly one entry, each
//! prefixed with the 1-based source line that produced it. Entries are never
//! removed or reordered; a reset clears the log and reseeds the fixed banner.

/// Banner seeded as the first entry of every reset/run.
pub const RESET_BANNER: &str = "Resetting all registers to their defaults...";

/// Ordered, append-only execution transcript.
///
/// Exposed to the host as a single newline-joined string via
/// [`TraceLog::transcript`].
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    entries: Vec<String>,
}

impl TraceLog {
    /// Creates an empty log. Callers are expected to [`reset`](Self::reset)
    /// before the first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears the log and seeds the reset banner.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.push(RESET_BANNER.to_string());
    }

    /// Appends `"Line {line_index + 1}: {message}"`.
    ///
    /// `line_index` is the 0-based program-counter value; the rendered line
    /// number is 1-based to match the source text the user sees.
    pub fn append(&mut self, line_index: usize, message: &str) {
        self.entries.push(format!("Line {}: {message}", line_index + 1));
    }

    /// Number of entries, including the banner.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the log holds no entries (only before the first
    /// reset).
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view of the individual entries.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// The whole transcript, newline-joined, for display.
    pub fn transcript(&self) -> String {
        self.entries.join("\n")
    }
}
