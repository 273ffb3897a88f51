mod assemble;
mod emit;
mod options;
mod statement;

pub use assemble::{convert, convert_with, select_final_index, Replay};
pub use emit::emit_record;
pub use options::{ConvertOptions, FinalCallPolicy, OptionsError, DEFAULT_EXCLUDED};
pub use statement::Statement;
