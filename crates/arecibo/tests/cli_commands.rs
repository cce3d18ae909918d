#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "arecibo-cli-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn arecibo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_arecibo"))
        .args(["--log-level", "error"])
        .args(args)
        .output()
        .expect("arecibo should run")
}

fn arecibo_with_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_arecibo"))
        .args(["--log-level", "error"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("arecibo should start");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(input.as_bytes())
        .expect("stdin should be writable");
    child.wait_with_output().expect("arecibo should finish")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("stderr should be UTF-8")
}

#[test]
fn encode_raw_emits_framed_binary() {
    let output = arecibo(&["encode", "A", "--format", "raw"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let bits = stdout(&output);
    let bits = bits.trim_end();
    assert_eq!(bits.len(), 1000);
    assert!(bits.starts_with(&"0".repeat(280)));
    assert!(bits.ends_with(&"1".repeat(200)));
}

#[test]
fn hex_signal_round_trips_through_stdin() {
    let encoded = arecibo(&["encode", "Hello, World!", "--radix", "hex", "--format", "raw"]);
    assert!(encoded.status.success(), "stderr: {}", stderr(&encoded));
    let hex = stdout(&encoded);

    let decoded = arecibo_with_stdin(&["decode", "--radix", "hex", "--format", "raw"], &hex);
    assert!(decoded.status.success(), "stderr: {}", stderr(&decoded));
    assert_eq!(stdout(&decoded), "Hello, World!");
}

#[test]
fn wrapped_signal_still_decodes() {
    let encoded = arecibo(&["encode", "wrap me", "--wrap", "64", "--format", "raw"]);
    let wrapped = stdout(&encoded);
    assert!(wrapped.lines().all(|line| line.len() <= 64));
    assert!(wrapped.lines().count() > 1);

    let decoded = arecibo_with_stdin(&["decode", "--format", "raw"], &wrapped);
    assert!(decoded.status.success(), "stderr: {}", stderr(&decoded));
    assert_eq!(stdout(&decoded), "wrap me");
}

#[test]
fn encode_json_lists_units() {
    let output = arecibo(&["encode", "Hi", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("output should be valid JSON");
    assert_eq!(value["table"], "USCII-5x7-ENGLISH-C0");
    assert_eq!(value["chars"], 2);
    assert_eq!(value["bits"], 1040);
    assert_eq!(value["units"][1]["char"], "i");
    assert_eq!(value["units"][1]["offset"], 520);
}

#[test]
fn unsupported_text_is_data_invalid() {
    let output = arecibo(&["encode", "caf\u{e9}", "--format", "raw"]);
    assert_eq!(output.status.code(), Some(60));
    let err = stderr(&output);
    assert!(err.starts_with("error: encode failed (invalid_input)"), "{err}");
    assert!(err.contains("233"), "{err}");
}

#[test]
fn corrupted_silence_reports_framing() {
    let encoded = arecibo(&["encode", "A", "--format", "raw"]);
    let mut bits = stdout(&encoded).trim_end().to_string();
    bits.replace_range(0..1, "1");

    let output = arecibo(&["decode", &bits, "--format", "raw"]);
    assert_eq!(output.status.code(), Some(60));
    let err = stderr(&output);
    assert!(err.contains("invalid_framing"), "{err}");
    assert!(err.contains("leading silence"), "{err}");
}

#[test]
fn short_signal_is_malformed() {
    let output = arecibo(&["decode", "0101", "--format", "raw"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(stderr(&output).contains("malformed_signal"));
}

#[test]
fn non_binary_signal_is_invalid_input() {
    let output = arecibo(&["decode", "0102", "--format", "raw"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(stderr(&output).contains("invalid_input"));
}

#[test]
fn size_limit_applies_to_decode() {
    let encoded = arecibo(&["encode", "A", "--format", "raw"]);
    let bits = stdout(&encoded);
    let output = arecibo(&["decode", bits.trim_end(), "--max-bits", "999"]);
    assert_eq!(output.status.code(), Some(60));
    assert!(stderr(&output).contains("max 999"));
}

#[test]
fn table_json_reports_metadata() {
    let output = arecibo(&["table", "--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("output should be valid JSON");
    assert_eq!(value["name"], "USCII-5x7-ENGLISH-C0");
    assert_eq!(value["width"], 5);
    assert_eq!(value["height"], 7);
    assert_eq!(value["size"], 128);
    assert!(value.get("glyphs").is_none());
}

#[test]
fn custom_table_drives_encode_and_decode() {
    let dir = unique_temp_dir("custom-table");
    let path = dir.join("tiny.json");
    std::fs::write(
        &path,
        r#"{
            "name": "TINY-2x2",
            "version": "0.1",
            "width": 2,
            "height": 2,
            "glyphs": ["0001", "0010", "0100", "1000", "0110", "1001"]
        }"#,
    )
    .expect("table file should be writable");
    let table = path.to_str().expect("temp path should be UTF-8");

    let encoded = arecibo(&["--table", table, "encode", "\u{1}\u{5}", "--format", "raw"]);
    assert!(encoded.status.success(), "stderr: {}", stderr(&encoded));
    let bits = stdout(&encoded);
    assert_eq!(bits.trim_end().len(), (2 + 2 + 2 + 2 + 2) * 6);

    let decoded = arecibo(&["--table", table, "decode", bits.trim_end(), "--format", "json"]);
    assert!(decoded.status.success(), "stderr: {}", stderr(&decoded));
    let value: serde_json::Value =
        serde_json::from_str(&stdout(&decoded)).expect("output should be valid JSON");
    assert_eq!(value["table"], "TINY-2x2");
    assert_eq!(value["text"], "\u{1}\u{5}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn invalid_table_file_is_rejected() {
    let dir = unique_temp_dir("bad-table");
    let path = dir.join("bad.json");
    std::fs::write(&path, r#"{"name": "BAD", "version": "1", "width": 2}"#)
        .expect("table file should be writable");

    let output = Command::new(env!("CARGO_BIN_EXE_arecibo"))
        .arg("--table")
        .arg(&path)
        .args(["table", "--format", "json"])
        .output()
        .expect("arecibo should run");
    assert_eq!(output.status.code(), Some(60));
    assert!(stderr(&output).contains("failed loading table"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn raw_table_document_loads_back() {
    let output = arecibo(&["table", "--format", "raw"]);
    assert!(output.status.success());

    let dir = unique_temp_dir("table-export");
    let path = dir.join("uscii.json");
    std::fs::write(&path, output.stdout).expect("table file should be writable");
    let table = path.to_str().expect("temp path should be UTF-8");

    let encoded = arecibo(&["--table", table, "encode", "DEL", "--format", "raw"]);
    let builtin = arecibo(&["encode", "DEL", "--format", "raw"]);
    assert!(encoded.status.success(), "stderr: {}", stderr(&encoded));
    assert_eq!(encoded.stdout, builtin.stdout);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn glyph_renders_bitmap_art() {
    let output = arecibo(&["glyph", "A", "--format", "raw"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        ".###.\n#...#\n#...#\n#...#\n#####\n#...#\n#...#\n"
    );
}

#[test]
fn version_prints_package_version() {
    let output = arecibo(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        format!("arecibo {}", env!("CARGO_PKG_VERSION"))
    );

    let extended = arecibo(&["version", "--extended"]);
    assert!(stdout(&extended).contains("builtin_table: USCII-5x7-ENGLISH-C0"));
}

#[test]
fn conflicting_inputs_are_usage_errors() {
    let output = arecibo(&["encode", "Hi", "--file", "/tmp/message.txt"]);
    assert_eq!(output.status.code(), Some(64));
}
