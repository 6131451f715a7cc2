//! Output shape assertions shared across test binaries.

/// Fail when the output carries any ANSI escape sequence.
pub fn assert_no_ansi(output: &str) {
    assert!(
        !output.contains("\u{1b}["),
        "output should be plain text but contains ANSI escapes:\n{output}"
    );
}

/// Fail on the first expected substring the output lacks.
pub fn assert_contains_all(output: &str, expected: &[&str]) {
    for needle in expected {
        assert!(
            output.contains(needle),
            "output lacks {needle:?}:\n{output}"
        );
    }
}
