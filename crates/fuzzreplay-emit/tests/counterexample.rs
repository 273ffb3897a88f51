use fuzzreplay_emit::{convert, convert_with, ConvertOptions, FinalCallPolicy, Replay, Statement};
use fuzzreplay_transcript::parse_transcript;

const FIXTURE: &str = include_str!("fixtures/counterexample.txt");

fn count_lines(out: &str, pred: impl Fn(&str) -> bool) -> usize {
    out.lines().filter(|l| pred(l)).count()
}

#[test]
fn fixture_classifies_every_line() {
    let t = parse_transcript(FIXTURE);
    assert_eq!(t.stats.calls, 37);
    assert_eq!(t.stats.waits, 15);
    assert_eq!(t.stats.dropped, 0);
}

#[test]
fn fixture_output_shape() {
    let out = convert(FIXTURE);
    assert!(out.starts_with("function test_replay() public {\n    vm.warp(block.timestamp + 408350);\n    vm.roll(block.number + 82678);\n\n"));
    assert!(out.ends_with(
        "    fuzz_decreaseLiquidityPosition(115792089237316195423570985008687907853269984665640564039457584007913129639935);\n\n}\n"
    ));

    assert_eq!(count_lines(&out, |l| l.starts_with("    vm.warp(")), 52);
    assert_eq!(count_lines(&out, |l| l.starts_with("    vm.roll(")), 52);
    assert_eq!(count_lines(&out, |l| l.starts_with("    try this.")), 36);
    assert_eq!(count_lines(&out, str::is_empty), 52);
    assert!(!out.contains("vm.prank"));
}

#[test]
fn fixture_preserves_call_order() {
    let t = parse_transcript(FIXTURE);
    let expected: Vec<&str> = t
        .records()
        .filter_map(|(_, r)| r.as_call())
        .map(|c| c.invocation.as_str())
        .collect();

    let replay = Replay::build(&t, &ConvertOptions::default());
    let emitted: Vec<&str> = replay
        .statements()
        .filter_map(|s| match s {
            Statement::Call { invocation, .. } => Some(invocation.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(emitted, expected);
}

#[test]
fn fixture_with_prank_and_exclusions() {
    let opts = ConvertOptions {
        excluded: vec![
            "IS_TEST".into(),
            "excludeContracts".into(),
            "excludeSenders".into(),
            "targetArtifactSelectors".into(),
            "targetArtifacts".into(),
            "targetInterfaces".into(),
            "targetSelectors".into(),
            "targetSenders".into(),
            "failed".into(),
        ],
        prank_origin: true,
        final_call: FinalCallPolicy::LastCall,
        ..Default::default()
    };
    let out = convert_with(FIXTURE, &opts);
    assert!(!out.contains("IS_TEST"));
    assert!(!out.contains("excludeContracts"));
    // Advances are kept even for the skipped accessor calls.
    assert_eq!(count_lines(&out, |l| l.starts_with("    vm.warp(")), 52);
    let calls = count_lines(&out, |l| l.starts_with("    try this.") || l.starts_with("    fuzz_"));
    let pranks = count_lines(&out, |l| l.starts_with("    vm.prank(0x"));
    assert_eq!(calls, pranks);
    assert!(out.contains("    vm.prank(0x0000000000000000000000000000000000030000);\n    fuzz_decreaseLiquidityPosition("));
}
