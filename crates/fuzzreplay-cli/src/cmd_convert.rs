use anyhow::Context;
use fuzzreplay_emit::{ConvertOptions, FinalCallPolicy};
use std::path::{Path, PathBuf};

use crate::io::{read_input, write_atomic};

/// Options file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "fuzzreplay.yaml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum FinalCallArg {
    LastRecord,
    LastCall,
}

impl From<FinalCallArg> for FinalCallPolicy {
    fn from(arg: FinalCallArg) -> Self {
        match arg {
            FinalCallArg::LastRecord => FinalCallPolicy::LastRecord,
            FinalCallArg::LastCall => FinalCallPolicy::LastCall,
        }
    }
}

pub struct ConvertParams<'a> {
    pub cwd: &'a Path,
    pub input: Option<&'a Path>,
    pub output: Option<&'a Path>,
    pub config: Option<&'a Path>,
    pub function_name: Option<String>,
    pub excludes: Vec<String>,
    pub no_default_excludes: bool,
    pub final_call: Option<FinalCallArg>,
    pub prank: bool,
}

pub fn execute(params: ConvertParams<'_>) -> anyhow::Result<()> {
    let options = resolve_options(&params)?;
    let transcript = read_input(params.input)?;
    let code = fuzzreplay_emit::convert_with(&transcript, &options);

    match params.output {
        Some(out) => {
            write_atomic(out, code.as_bytes())?;
            eprintln!("Wrote {} to {}", options.function_name, out.display());
        }
        None => print!("{code}"),
    }
    Ok(())
}

fn config_path(cwd: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(p) => Some(p.to_path_buf()),
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            candidate.is_file().then_some(candidate)
        }
    }
}

/// File options first, then command-line overrides on top.
fn resolve_options(params: &ConvertParams<'_>) -> anyhow::Result<ConvertOptions> {
    let mut options = match config_path(params.cwd, params.config) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading options");
            ConvertOptions::load(&path).context("loading convert options")?
        }
        None => ConvertOptions::default(),
    };

    if let Some(name) = &params.function_name {
        options.function_name = name.clone();
    }
    if params.no_default_excludes {
        options.excluded.clear();
    }
    for name in &params.excludes {
        if !options.excluded.contains(name) {
            options.excluded.push(name.clone());
        }
    }
    if let Some(policy) = params.final_call {
        options.final_call = policy.into();
    }
    if params.prank {
        options.prank_origin = true;
    }
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(cwd: &Path) -> ConvertParams<'_> {
        ConvertParams {
            cwd,
            input: None,
            output: None,
            config: None,
            function_name: None,
            excludes: vec![],
            no_default_excludes: false,
            final_call: None,
            prank: false,
        }
    }

    #[test]
    fn defaults_without_config_file() {
        let tmp = tempfile::tempdir().unwrap();
        let opts = resolve_options(&params(tmp.path())).unwrap();
        assert_eq!(opts, ConvertOptions::default());
    }

    #[test]
    fn picks_up_config_in_cwd() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(
            tmp.path().join(DEFAULT_CONFIG_FILE),
            "function_name: test_from_file\nfinal_call: last_call\n",
        )
        .unwrap();
        let opts = resolve_options(&params(tmp.path())).unwrap();
        assert_eq!(opts.function_name, "test_from_file");
        assert_eq!(opts.final_call, FinalCallPolicy::LastCall);
    }

    #[test]
    fn flags_override_file() {
        let tmp = tempfile::tempdir().unwrap();
        let cfg = tmp.path().join("custom.yaml");
        std::fs::write(&cfg, "function_name: test_from_file\nexcluded: [IS_TEST]\n").unwrap();
        let mut p = params(tmp.path());
        p.config = Some(&cfg);
        p.function_name = Some("test_flag".into());
        p.excludes = vec!["IS_TEST".into(), "failed".into()];
        p.final_call = Some(FinalCallArg::LastCall);
        p.prank = true;
        let opts = resolve_options(&p).unwrap();
        assert_eq!(opts.function_name, "test_flag");
        assert_eq!(opts.excluded, vec!["IS_TEST", "failed"]);
        assert_eq!(opts.final_call, FinalCallPolicy::LastCall);
        assert!(opts.prank_origin);
    }

    #[test]
    fn no_default_excludes_clears_list() {
        let tmp = tempfile::tempdir().unwrap();
        let mut p = params(tmp.path());
        p.no_default_excludes = true;
        p.excludes = vec!["targetSenders".into()];
        let opts = resolve_options(&p).unwrap();
        assert_eq!(opts.excluded, vec!["targetSenders"]);
    }

    #[test]
    fn missing_explicit_config_is_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope.yaml");
        let mut p = params(tmp.path());
        p.config = Some(&missing);
        assert!(resolve_options(&p).is_err());
    }

    #[test]
    fn execute_writes_output_file() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("seq.txt");
        let output = tmp.path().join("out").join("Replay.sol");
        std::fs::write(&input, "Fuzz.foo(1) Time delay: 5 seconds\nFuzz.bar(2)\n").unwrap();
        let mut p = params(tmp.path());
        p.input = Some(&input);
        p.output = Some(&output);
        execute(p).unwrap();
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "function test_replay() public {\n    vm.warp(block.timestamp + 5);\n    try this.foo(1) {} catch {}\n\n    bar(2);\n\n}\n"
        );
    }
}
