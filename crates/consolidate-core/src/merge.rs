// Rust guideline compliant 2026-02-06

//! Streaming merge driver.
//!
//! Consumes an ordered map of open line-oriented readers and writes their
//! union to a single output: lexicographically sorted, blank lines dropped,
//! consecutive duplicates collapsed, every emitted line terminated. Inputs
//! must already be sorted ascending; that contract is not checked here.

use crate::frontier::{Frontier, PendingEntry};
use crate::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// Per-source read count reported after a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceReport {
    /// Source identifier (its path, for file-backed sources).
    pub source: String,
    /// Non-blank lines read from this source.
    pub lines_read: u64,
}

/// Summary of one completed merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeStats {
    /// Number of input sources consulted.
    pub sources: usize,
    /// Lines written to the output.
    pub lines_written: u64,
    /// Candidate lines discarded as consecutive duplicates.
    pub duplicates_collapsed: u64,
    /// Blank input lines skipped before queueing.
    pub blank_lines_skipped: u64,
    /// Non-blank lines read from each source, ordered by identifier.
    pub per_source: Vec<SourceReport>,
}

/// Merges sorted line-oriented sources into a single deduplicated output.
///
/// Each source contributes at most one pending line to the frontier at a
/// time; the smallest pending line is written unless it repeats the line
/// just written, and the source that supplied it is consulted for its next
/// non-blank line. A source that reaches end-of-stream is dropped, which
/// closes it. The output is flushed once the frontier drains.
///
/// # Arguments
///
/// * `sources` - Map from unique source identifier to an open reader
///   positioned at its start
/// * `output` - Destination writer
///
/// # Returns
///
/// Statistics for the completed merge.
///
/// # Errors
///
/// Returns an error on the first failed read or write. Nothing is retried;
/// output already written stays as written.
pub fn consolidate<R, W>(sources: BTreeMap<String, R>, output: W) -> Result<MergeStats>
where
    R: BufRead,
    W: Write,
{
    Merger::new(sources, output).run()
}

/// State for a single merge invocation.
struct Merger<R, W> {
    sources: BTreeMap<String, R>,
    output: W,
    frontier: Frontier,
    last_written: Option<String>,
    reads: BTreeMap<String, u64>,
    source_count: usize,
    lines_written: u64,
    duplicates_collapsed: u64,
    blank_lines_skipped: u64,
}

impl<R, W> Merger<R, W>
where
    R: BufRead,
    W: Write,
{
    fn new(sources: BTreeMap<String, R>, output: W) -> Self {
        Self {
            source_count: sources.len(),
            sources,
            output,
            frontier: Frontier::new(),
            last_written: None,
            reads: BTreeMap::new(),
            lines_written: 0,
            duplicates_collapsed: 0,
            blank_lines_skipped: 0,
        }
    }

    fn run(mut self) -> Result<MergeStats> {
        self.fill_initial()?;

        while let Some(PendingEntry { line, source }) = self.frontier.pop() {
            if self.last_written.as_deref() == Some(line.as_str()) {
                self.duplicates_collapsed += 1;
            } else {
                self.output.write_all(line.as_bytes())?;
                self.output.write_all(b"\n")?;
                self.lines_written += 1;
                self.last_written = Some(line);
            }
            self.refill(source)?;
        }

        self.output.flush()?;
        Ok(self.into_stats())
    }

    /// Queues the first non-blank line of every source.
    ///
    /// Sources that are already exhausted never enter the frontier and are
    /// dropped here.
    fn fill_initial(&mut self) -> Result<()> {
        let mut exhausted = Vec::new();

        for (source, reader) in self.sources.iter_mut() {
            self.reads.insert(source.clone(), 0);
            match read_next_non_blank(reader, &mut self.blank_lines_skipped)? {
                Some(line) => {
                    if let Some(count) = self.reads.get_mut(source) {
                        *count += 1;
                    }
                    self.frontier.push(line, source.clone());
                }
                None => exhausted.push(source.clone()),
            }
        }

        for source in exhausted {
            self.sources.remove(&source);
        }
        Ok(())
    }

    /// Consults the source that supplied the last popped entry.
    ///
    /// Its next non-blank line goes back onto the frontier; at end-of-stream
    /// the source is removed instead, so the frontier never holds an entry
    /// for an exhausted source.
    fn refill(&mut self, source: String) -> Result<()> {
        // Every popped entry refers to a source still in the map.
        if let Some(reader) = self.sources.get_mut(&source) {
            match read_next_non_blank(reader, &mut self.blank_lines_skipped)? {
                Some(line) => {
                    if let Some(count) = self.reads.get_mut(&source) {
                        *count += 1;
                    }
                    self.frontier.push(line, source);
                }
                None => {
                    self.sources.remove(&source);
                }
            }
        }
        Ok(())
    }

    fn into_stats(self) -> MergeStats {
        MergeStats {
            sources: self.source_count,
            lines_written: self.lines_written,
            duplicates_collapsed: self.duplicates_collapsed,
            blank_lines_skipped: self.blank_lines_skipped,
            per_source: self
                .reads
                .into_iter()
                .map(|(source, lines_read)| SourceReport { source, lines_read })
                .collect(),
        }
    }
}

/// Reads the next non-blank line from a reader.
///
/// A blank line is one consisting of exactly a terminator; such lines are
/// counted and discarded. The returned line has its terminator stripped
/// (`\r\n` and `\n` both terminate). End-of-stream is `Ok(None)`, distinct
/// from any line content.
fn read_next_non_blank<R: BufRead>(
    reader: &mut R,
    blanks_skipped: &mut u64,
) -> std::io::Result<Option<String>> {
    let mut buf = String::new();
    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        if buf.is_empty() {
            *blanks_skipped += 1;
            continue;
        }
        return Ok(Some(buf));
    }
}
