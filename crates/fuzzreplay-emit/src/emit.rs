use fuzzreplay_transcript::{Delays, Record};

use crate::options::ConvertOptions;
use crate::statement::Statement;

fn push_advances(delays: &Delays, out: &mut Vec<Statement>) {
    if let Some(seconds) = &delays.time_seconds {
        out.push(Statement::Warp {
            seconds: seconds.clone(),
        });
    }
    if let Some(blocks) = &delays.blocks {
        out.push(Statement::Roll {
            blocks: blocks.clone(),
        });
    }
}

/// Translate one record into its statement block.
///
/// Warp and roll always come first. An excluded call stops right after them,
/// with no call and no trailing separator. `is_final` leaves the call
/// unwrapped so its revert propagates.
pub fn emit_record(record: &Record, is_final: bool, options: &ConvertOptions) -> Vec<Statement> {
    let mut out = Vec::new();
    push_advances(record.delays(), &mut out);

    match record {
        Record::Call(call) => {
            if options.is_excluded(&call.invocation) {
                tracing::debug!(invocation = %call.invocation, "skipping excluded call");
                return out;
            }
            if options.prank_origin {
                if let Some(origin) = &call.origin {
                    out.push(Statement::Prank {
                        origin: origin.clone(),
                    });
                }
            }
            out.push(Statement::Call {
                invocation: call.invocation.clone(),
                wrapped: !is_final,
            });
        }
        Record::Wait(_) => {}
    }

    out.push(Statement::Separator);
    out
}
