use std::env;
use std::io;
use std::process::{Command, Output};
use stamplog::{layout, Logger};

/// Selects what the child process does before exiting
const CHILD_CASE: &str = "STAMPLOG_FATAL_CASE";

struct FailingSink;

impl io::Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs in the child process only; a no-op in a normal test run.
#[test]
fn fatal_child() {
    let Ok(case) = env::var(CHILD_CASE) else {
        return;
    };
    let logger = Logger::new(io::stderr(), layout::DATE_ONLY);
    match case.as_str() {
        "fatal" => logger.fatal(&[&"goodbye ", &42]),
        "fatalf" => logger.fatalf(format_args!("goodbye {:03}", 7)),
        "fatalln" => logger.fatalln(&[&"goodbye", &"world"]),
        "failing" => Logger::new(FailingSink, layout::DATE_ONLY).fatal(&[&"lost"]),
        "default" => stamplog::fatalf!("default goodbye {}", 1),
        other => panic!("Unknown case {}", other),
    }
}

fn run_child(case: &str) -> Output {
    let exe = env::current_exe().expect("Failed to locate test binary");
    Command::new(exe)
        .args(["--exact", "fatal_child", "--nocapture", "--test-threads=1"])
        .env(CHILD_CASE, case)
        .output()
        .expect("Failed to run child process")
}

fn assert_fatal(case: &str, expected_line_end: &str) {
    let output = run_child(case);
    let stderr = String::from_utf8_lossy(&output.stderr);
    println!("[TEST]   {} stderr: {:?}", case, stderr);
    assert_eq!(output.status.code(), Some(1), "case {}", case);
    assert!(stderr.contains(expected_line_end), "case {}: {:?}", case, stderr);
}

/// Tests that every fatal variant writes its line, then exits with status 1.
#[test]
fn test_fatal_variants_exit_with_status_one() {
    println!("\n=== Starting test_fatal_variants_exit_with_status_one ===");
    assert_fatal("fatal", " goodbye 42\n");
    assert_fatal("fatalf", " goodbye 007\n");
    assert_fatal("fatalln", " goodbye world\n");
    assert_fatal("default", " default goodbye 1\n");
}

/// Tests that a failed write does not stop the exit.
#[test]
fn test_fatal_exits_when_write_fails() {
    let output = run_child("failing");
    assert_eq!(output.status.code(), Some(1));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("lost"));
}
