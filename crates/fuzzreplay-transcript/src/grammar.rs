use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::record::{CallRecord, Delays, Record, WaitRecord};

/// Token that opens a pure time/block advance line.
pub const WAIT_MARKER: &str = "*wait*";

/// `Qualifier.name(args)` with trailing fields in fixed order:
/// ` from: 0x<40 hex>`, ` Gas: N`, ` Time delay: N seconds`, ` Block delay: N`.
/// Not anchored: the call may sit anywhere in the line.
static CALL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:\w+\.)?(\w+\([^)]*\))",
        r"(?: from: (0x[0-9a-fA-F]{40}))?",
        r"(?: Gas: ([0-9]+))?",
        r"(?: Time delay: ([0-9]+) seconds)?",
        r"(?: Block delay: ([0-9]+))?",
    ))
    .unwrap()
});

static WAIT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        "{}{}",
        regex::escape(WAIT_MARKER),
        concat!(
            r"(?: Time delay: ([0-9]+) seconds)?",
            r"(?: Block delay: ([0-9]+))?",
        ),
    ))
    .unwrap()
});

fn group(caps: &Captures<'_>, idx: usize) -> Option<String> {
    caps.get(idx).map(|m| m.as_str().to_string())
}

/// Classify one transcript line.
///
/// The call grammar takes priority: a line containing both a call and a wait
/// marker is a call. Lines matching neither grammar return `None`.
pub fn classify_line(line: &str) -> Option<Record> {
    if let Some(caps) = CALL_PATTERN.captures(line) {
        return Some(Record::Call(CallRecord {
            invocation: caps[1].to_string(),
            origin: group(&caps, 2),
            gas: group(&caps, 3),
            delays: Delays {
                time_seconds: group(&caps, 4),
                blocks: group(&caps, 5),
            },
        }));
    }

    WAIT_PATTERN.captures(line).map(|caps| {
        Record::Wait(WaitRecord {
            delays: Delays {
                time_seconds: group(&caps, 1),
                blocks: group(&caps, 2),
            },
        })
    })
}
