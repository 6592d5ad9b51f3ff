use std::process::{Command, Output};

fn groq_prompt() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_groq-prompt"));
    // Present-but-empty values keep a developer's .env from filling them in.
    cmd.env("GROQ_API_KEY", "")
        .env("GROQ_BASE_URL", "")
        .env("RUST_LOG", "off");
    cmd
}

fn assert_failed_quietly(output: &Output, expected: &[&str]) {
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8_lossy(&output.stderr);
    for needle in expected {
        assert!(stderr.contains(needle), "stderr was: {stderr}");
    }
}

#[test]
fn missing_key_exits_non_zero_without_stdout() {
    let output = groq_prompt().output().expect("binary runs");

    assert_failed_quietly(&output, &["ConfigurationError", "GROQ_API_KEY not set."]);
}

#[test]
fn unreachable_endpoint_exits_non_zero_without_stdout() {
    // Grab a free port, then close it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/openai/v1", listener.local_addr().unwrap());
    drop(listener);

    let output = groq_prompt()
        .env("GROQ_API_KEY", "gsk_present")
        .env("GROQ_BASE_URL", base_url)
        .output()
        .expect("binary runs");

    assert_failed_quietly(&output, &["NetworkError"]);
}

#[cfg(unix)]
#[test]
fn non_unicode_key_is_not_reported_as_missing() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let output = groq_prompt()
        .env("GROQ_API_KEY", OsStr::from_bytes(b"gsk_\xff"))
        .output()
        .expect("binary runs");

    assert_failed_quietly(
        &output,
        &["ConfigurationError", "GROQ_API_KEY is set but is not valid UTF-8."],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("GROQ_API_KEY not set."), "stderr was: {stderr}");
}
