use fuzzreplay_transcript::{parse_transcript, Record, Transcript};
use serde::Serialize;
use std::fmt;

use crate::emit::emit_record;
use crate::options::{ConvertOptions, FinalCallPolicy};
use crate::statement::Statement;

/// A generated replay function: one statement block per emitting record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replay {
    pub function_name: String,
    pub blocks: Vec<Vec<Statement>>,
}

impl Replay {
    pub fn build(transcript: &Transcript, options: &ConvertOptions) -> Self {
        let final_index = select_final_index(transcript, options);
        let blocks = transcript
            .records()
            .map(|(idx, record)| emit_record(record, Some(idx) == final_index, options))
            .filter(|block| !block.is_empty())
            .collect();
        Self {
            function_name: options.function_name.clone(),
            blocks,
        }
    }

    /// Statements in output order, separators included.
    pub fn statements(&self) -> impl Iterator<Item = &Statement> + '_ {
        self.blocks.iter().flatten()
    }
}

impl fmt::Display for Replay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "function {}() public {{", self.function_name)?;
        for stmt in self.statements() {
            writeln!(f, "{stmt}")?;
        }
        writeln!(f, "}}")
    }
}

/// Line index of the record whose call is left unwrapped, if any.
pub fn select_final_index(transcript: &Transcript, options: &ConvertOptions) -> Option<usize> {
    match options.final_call {
        FinalCallPolicy::LastRecord => transcript.last_record_index(),
        FinalCallPolicy::LastCall => transcript
            .records()
            .filter(|(_, record)| match record {
                Record::Call(call) => !options.is_excluded(&call.invocation),
                Record::Wait(_) => false,
            })
            .last()
            .map(|(idx, _)| idx),
    }
}

/// Convert a transcript into a replay function using default options.
pub fn convert(transcript: &str) -> String {
    convert_with(transcript, &ConvertOptions::default())
}

/// Convert a transcript into a replay function.
///
/// Never fails: unrecognized lines are dropped and an empty transcript yields
/// an empty function body.
pub fn convert_with(transcript: &str, options: &ConvertOptions) -> String {
    let parsed = parse_transcript(transcript);
    tracing::debug!(
        calls = parsed.stats.calls,
        waits = parsed.stats.waits,
        dropped = parsed.stats.dropped,
        "parsed transcript"
    );
    Replay::build(&parsed, options).to_string()
}
