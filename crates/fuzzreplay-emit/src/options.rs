use serde::{Deserialize, Serialize};
use std::path::Path;

/// Accessor calls that are never replayed by default.
pub const DEFAULT_EXCLUDED: &[&str] = &["collateralToMarketId"];

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("reading {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid options in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Which record keeps its call unwrapped so the final revert surfaces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinalCallPolicy {
    /// The last line that classified as a call or a wait. A trailing wait
    /// means no call is left unwrapped.
    #[default]
    LastRecord,
    /// The last call that actually emits a statement; trailing waits and
    /// excluded calls are passed over.
    LastCall,
}

/// Knobs for [`convert_with`](crate::convert_with).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ConvertOptions {
    /// Name of the generated test function.
    pub function_name: String,
    /// Substrings that suppress the call statement when found in an invocation.
    pub excluded: Vec<String>,
    pub final_call: FinalCallPolicy,
    /// Emit `vm.prank(origin)` before each replayed call that has an origin.
    pub prank_origin: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            function_name: "test_replay".into(),
            excluded: DEFAULT_EXCLUDED.iter().map(|s| s.to_string()).collect(),
            final_call: FinalCallPolicy::default(),
            prank_origin: false,
        }
    }
}

impl ConvertOptions {
    /// Parse options from YAML. Missing keys keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load options from a YAML file.
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path).map_err(|source| OptionsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| OptionsError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Whether the invocation text contains any excluded identifier.
    pub fn is_excluded(&self, invocation: &str) -> bool {
        self.excluded
            .iter()
            .any(|name| !name.is_empty() && invocation.contains(name.as_str()))
    }
}
