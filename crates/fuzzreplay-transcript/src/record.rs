use serde::Serialize;

/// Clock and block advances attached to a transcript line.
///
/// Values are kept as the digit strings found in the transcript; they are
/// copied into the output verbatim and never parsed as numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Delays {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_seconds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocks: Option<String>,
}

impl Delays {
    pub fn is_empty(&self) -> bool {
        self.time_seconds.is_none() && self.blocks.is_none()
    }
}

/// One contract invocation recorded by the fuzzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRecord {
    /// `name(args)` exactly as it appeared, without any `Contract.` qualifier.
    pub invocation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    #[serde(flatten)]
    pub delays: Delays,
}

impl CallRecord {
    /// Function name portion of the invocation (text before the first `(`).
    pub fn function_name(&self) -> &str {
        self.invocation
            .split_once('(')
            .map(|(name, _)| name)
            .unwrap_or(&self.invocation)
    }
}

/// A pure time/block advance with no invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WaitRecord {
    #[serde(flatten)]
    pub delays: Delays,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Call(CallRecord),
    Wait(WaitRecord),
}

impl Record {
    pub fn delays(&self) -> &Delays {
        match self {
            Record::Call(call) => &call.delays,
            Record::Wait(wait) => &wait.delays,
        }
    }

    pub fn as_call(&self) -> Option<&CallRecord> {
        match self {
            Record::Call(call) => Some(call),
            Record::Wait(_) => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Record::Call(_) => "call",
            Record::Wait(_) => "wait",
        }
    }
}
