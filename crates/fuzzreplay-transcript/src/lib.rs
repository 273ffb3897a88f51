mod grammar;
mod parse;
mod record;

pub use grammar::{classify_line, WAIT_MARKER};
pub use parse::{parse_transcript, ParsedLine, Transcript, TranscriptStats};
pub use record::{CallRecord, Delays, Record, WaitRecord};
