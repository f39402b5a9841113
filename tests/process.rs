use textproc::{normalize, process_text, words, ProcessError};

#[test]
fn collapses_runs_of_spaces() {
    assert_eq!(process_text("hello   world").expect("processed"), "hello world");
}

#[test]
fn empty_text_returns_no_text_error() {
    let result = process_text("");
    assert!(matches!(result, Err(ProcessError::NoText)));
}

#[test]
fn whitespace_only_text_is_not_an_error() {
    assert_eq!(process_text("   ").expect("processed"), "");
    assert_eq!(process_text("\n\t\r").expect("processed"), "");
}

#[test]
fn mixed_separators_become_single_spaces() {
    assert_eq!(process_text("a\nb\tc").expect("processed"), "a b c");
}

#[test]
fn output_matches_normalizer_and_preserves_words() {
    let inputs = [
        "x",
        " leading",
        "trailing ",
        "many\u{2003}\u{2003}kinds\u{00A0}of\u{3000}space",
        "%s %d %% {} {0}",
    ];
    for input in inputs {
        let processed = process_text(input).expect("processed");
        assert_eq!(processed, normalize(input));
        assert_eq!(
            words(&processed).collect::<Vec<_>>(),
            words(input).collect::<Vec<_>>()
        );
    }
}

#[test]
fn processing_is_deterministic() {
    let input = "  The quick\tbrown\n\nfox  ";
    let first = process_text(input).expect("first");
    let second = process_text(input).expect("second");
    assert_eq!(first, second);
    assert_eq!(process_text(&first).expect("reprocessed"), first);
}
