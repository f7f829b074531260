// tests/process_runner.rs

#![cfg(unix)]

mod common;
use crate::common::init_tracing;

use std::error::Error;
use std::io::ErrorKind;

use web_optimizer::errors::WebOptimizerError;
use web_optimizer::exec::{ToolInvocation, execute, run_tool};

type TestResult = Result<(), Box<dyn Error>>;

fn sh(script: &str) -> ToolInvocation {
    ToolInvocation::new("sh", vec!["-c".to_string(), script.to_string()])
}

#[tokio::test]
async fn zero_exit_is_success_and_output_is_merged() -> TestResult {
    init_tracing();

    let result = run_tool(&sh("echo hello; echo oops >&2")).await?;

    assert_eq!(result.exit_code, 0);
    assert!(result.success());
    assert!(result.output.contains("hello\n"));
    assert!(result.output.contains("oops\n"));
    Ok(())
}

#[tokio::test]
async fn zero_exit_succeeds_regardless_of_output_content() -> TestResult {
    init_tracing();

    let result = run_tool(&sh("echo 'ERROR: this looks bad' >&2; exit 0")).await?;

    assert!(result.success());
    assert!(result.output.contains("ERROR: this looks bad"));
    Ok(())
}

#[tokio::test]
async fn exit_code_two_fails_naming_tool_and_code() -> TestResult {
    init_tracing();

    let err = run_tool(&sh("echo 'parse error' >&2; exit 2"))
        .await
        .expect_err("non-zero exit must fail");

    match &err {
        WebOptimizerError::ToolInvocation {
            tool,
            exit_code,
            source,
        } => {
            assert_eq!(tool, "sh");
            assert_eq!(*exit_code, Some(2));
            assert!(source.is_none());
        }
        other => panic!("Expected ToolInvocation, got: {:?}", other),
    }
    assert_eq!(err.to_string(), "sh failed with exit code 2");
    Ok(())
}

#[tokio::test]
async fn every_non_zero_exit_code_fails() -> TestResult {
    init_tracing();

    for code in [1, 3, 42, 127, 255] {
        let inv = sh(&format!("exit {code}"));

        let raw = execute(&inv).await?;
        assert_eq!(raw.exit_code, code);
        assert!(!raw.success());

        let err = run_tool(&inv).await.expect_err("non-zero exit must fail");
        assert_eq!(err.exit_code(), Some(code));
    }
    Ok(())
}

#[tokio::test]
async fn missing_executable_preserves_io_cause() -> TestResult {
    init_tracing();

    let inv = ToolInvocation::new("web-optimizer-no-such-tool", vec!["-o".to_string()]);
    let err = run_tool(&inv).await.expect_err("spawn must fail");

    match err {
        WebOptimizerError::ToolInvocation {
            tool,
            exit_code,
            source,
        } => {
            assert_eq!(tool, "web-optimizer-no-such-tool");
            assert_eq!(exit_code, None);
            let source = source.expect("io cause preserved");
            assert_eq!(source.kind(), ErrorKind::NotFound);
        }
        other => panic!("Expected ToolInvocation, got: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn killed_process_is_reported_as_interrupted() -> TestResult {
    init_tracing();

    let err = run_tool(&sh("kill -9 $$"))
        .await
        .expect_err("signal termination must fail");

    match err {
        WebOptimizerError::ToolInvocation {
            exit_code, source, ..
        } => {
            assert_eq!(exit_code, None);
            assert_eq!(source.map(|e| e.kind()), Some(ErrorKind::Interrupted));
        }
        other => panic!("Expected ToolInvocation, got: {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn large_output_on_both_streams_does_not_deadlock() -> TestResult {
    init_tracing();

    // Well past the usual 64 KiB pipe buffer on each stream.
    let result = run_tool(&sh("seq 1 50000; seq 1 50000 >&2")).await?;

    assert_eq!(result.output.lines().count(), 100_000);
    Ok(())
}
