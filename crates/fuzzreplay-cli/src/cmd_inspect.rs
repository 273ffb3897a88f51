use fuzzreplay_transcript::{parse_transcript, ParsedLine, Record, Transcript};

use crate::io::read_input;

pub fn execute(input: Option<&std::path::Path>, json: bool) -> anyhow::Result<()> {
    let transcript = parse_transcript(&read_input(input)?);
    if json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
    } else {
        print!("{}", render_table(&transcript));
    }
    Ok(())
}

fn describe(line: &ParsedLine) -> String {
    let Some(record) = &line.record else {
        return format!("{:>4}  {:<7} {}", line.index, "dropped", line.text);
    };

    let mut fields = Vec::new();
    if let Record::Call(call) = record {
        fields.push(call.invocation.clone());
        if let Some(origin) = &call.origin {
            fields.push(format!("from={origin}"));
        }
        if let Some(gas) = &call.gas {
            fields.push(format!("gas={gas}"));
        }
    }
    let delays = record.delays();
    if let Some(t) = &delays.time_seconds {
        fields.push(format!("+{t}s"));
    }
    if let Some(b) = &delays.blocks {
        fields.push(format!("+{b} blocks"));
    }
    format!("{:>4}  {:<7} {}", line.index, record.kind(), fields.join(" "))
}

fn render_table(transcript: &Transcript) -> String {
    let mut out = String::new();
    for line in &transcript.lines {
        out.push_str(&describe(line));
        out.push('\n');
    }
    let s = transcript.stats;
    out.push_str(&format!(
        "\n{} call(s), {} wait(s), {} dropped\n",
        s.calls, s.waits, s.dropped
    ));
    out
}
