mod common;

use common::run_ytbrief;

#[test]
fn summarize_subcommand_is_available() {
    let output = run_ytbrief(&["summarize", "--help"]);

    assert!(
        output.status.success(),
        "summarize --help should succeed\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn summarize_rejects_invalid_url() {
    let output = run_ytbrief(&["summarize", "https://www.youtube.com/"]);

    assert!(
        !output.status.success(),
        "summarize should fail for a URL without a video id\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid YouTube URL"),
        "expected invalid URL error, got:\n{}",
        stderr
    );
}

#[test]
fn transcript_rejects_invalid_url() {
    let output = run_ytbrief(&["transcript", "not-a-video-link"]);

    assert!(
        !output.status.success(),
        "transcript should fail for an invalid URL\nstdout:\n{}\nstderr:\n{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid YouTube URL"),
        "expected invalid URL error, got:\n{}",
        stderr
    );
}
