use serde::Serialize;

use crate::grammar::classify_line;
use crate::record::Record;

/// One non-blank transcript line and what it classified as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    /// 0-based position among the non-blank lines.
    pub index: usize,
    pub text: String,
    /// `None` when the line matched neither grammar.
    pub record: Option<Record>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TranscriptStats {
    pub calls: usize,
    pub waits: usize,
    pub dropped: usize,
}

/// A parsed transcript, in replay order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    pub lines: Vec<ParsedLine>,
    pub stats: TranscriptStats,
}

impl Transcript {
    /// Classified records with their line index, skipping dropped lines.
    pub fn records(&self) -> impl Iterator<Item = (usize, &Record)> + '_ {
        self.lines
            .iter()
            .filter_map(|l| l.record.as_ref().map(|r| (l.index, r)))
    }

    /// Index of the last line that classified as a call or a wait.
    pub fn last_record_index(&self) -> Option<usize> {
        self.records().last().map(|(idx, _)| idx)
    }
}

/// Split a transcript into trimmed non-blank lines and classify each one.
///
/// Unmatched lines are kept with `record: None` so callers can report them;
/// they never abort parsing.
pub fn parse_transcript(input: &str) -> Transcript {
    let mut transcript = Transcript::default();

    for (index, text) in input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .enumerate()
    {
        let record = classify_line(text);
        match &record {
            Some(Record::Call(call)) => {
                transcript.stats.calls += 1;
                tracing::trace!(index, invocation = %call.invocation, "call line");
            }
            Some(Record::Wait(_)) => {
                transcript.stats.waits += 1;
                tracing::trace!(index, "wait line");
            }
            None => {
                transcript.stats.dropped += 1;
                tracing::debug!(index, line = text, "dropping unrecognized transcript line");
            }
        }
        transcript.lines.push(ParsedLine {
            index,
            text: text.to_string(),
            record,
        });
    }

    transcript
}
