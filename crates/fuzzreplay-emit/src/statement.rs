use serde::Serialize;
use std::fmt;

const INDENT: &str = "    ";

/// One line of the generated replay body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "stmt", rename_all = "snake_case")]
pub enum Statement {
    /// `vm.warp(block.timestamp + N);`
    Warp { seconds: String },
    /// `vm.roll(block.number + N);`
    Roll { blocks: String },
    /// `vm.prank(ADDR);`
    Prank { origin: String },
    /// A replayed call. Wrapped calls swallow reverts via `try/catch`.
    Call { invocation: String, wrapped: bool },
    /// Blank line between records.
    Separator,
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Warp { seconds } => {
                write!(f, "{INDENT}vm.warp(block.timestamp + {seconds});")
            }
            Statement::Roll { blocks } => write!(f, "{INDENT}vm.roll(block.number + {blocks});"),
            Statement::Prank { origin } => write!(f, "{INDENT}vm.prank({origin});"),
            Statement::Call {
                invocation,
                wrapped: true,
            } => write!(f, "{INDENT}try this.{invocation} {{}} catch {{}}"),
            Statement::Call {
                invocation,
                wrapped: false,
            } => write!(f, "{INDENT}{invocation};"),
            Statement::Separator => Ok(()),
        }
    }
}
