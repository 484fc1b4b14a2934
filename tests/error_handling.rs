// tests/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;
use threadsim::config::load_and_validate;
use threadsim::engine::RunRequest;
use threadsim::errors::ThreadsimError;
use threadsim_test_utils::init_tracing;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn test_zero_quantum_is_rejected_before_the_engine_runs() {
    init_tracing();

    let file = config_file(
        r#"
[simulation]
model = "many-to-many"
time_quantum = 0

[[thread]]
arrival = 0
burst = 100
"#,
    );

    match load_and_validate(file.path()) {
        Err(ThreadsimError::InvalidParameter(msg)) => assert!(msg.contains("quantum")),
        Err(e) => panic!("Expected InvalidParameter, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_too_many_threads_returns_invalid_parameter() {
    init_tracing();

    let file = config_file(
        r#"
[simulation]
model = "one-to-one"
threads = 7
"#,
    );

    match load_and_validate(file.path()) {
        Err(ThreadsimError::InvalidParameter(msg)) => assert!(msg.contains("between 1 and 6")),
        Err(e) => panic!("Expected InvalidParameter, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_burst_above_limit_names_the_thread() {
    init_tracing();

    let file = config_file(
        r#"
[simulation]
model = "many-to-many"
time_quantum = 100

[[thread]]
arrival = 0
burst = 100

[[thread]]
arrival = 0
burst = 6001
"#,
    );

    match load_and_validate(file.path()) {
        Err(ThreadsimError::InvalidParameter(msg)) => assert!(msg.contains("thread 2")),
        Err(e) => panic!("Expected InvalidParameter, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_missing_execution_time_returns_config_error() {
    init_tracing();

    let file = config_file(
        r#"
[simulation]
model = "many-to-one"
threads = 2
"#,
    );

    match load_and_validate(file.path()) {
        Err(ThreadsimError::ConfigError(msg)) => assert!(msg.contains("execution_time")),
        Err(e) => panic!("Expected ConfigError, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn test_negative_time_and_unknown_model_are_toml_errors() {
    init_tracing();

    let negative = config_file(
        r#"
[simulation]
model = "many-to-one"
threads = 2
execution_time = -5
"#,
    );
    assert!(matches!(
        load_and_validate(negative.path()),
        Err(ThreadsimError::TomlError(_))
    ));

    let unknown = config_file(
        r#"
[simulation]
model = "two-to-two"
threads = 2
"#,
    );
    assert!(matches!(
        load_and_validate(unknown.path()),
        Err(ThreadsimError::TomlError(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    init_tracing();

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_and_validate(dir.path().join("nope.toml")),
        Err(ThreadsimError::IoError(_))
    ));
}

#[test]
fn test_valid_round_robin_config_keeps_entry_order() {
    init_tracing();

    let file = config_file(
        r#"
[simulation]
model = "many-to-many"
threads = 2
time_quantum = 100
idle_step = 25

[[thread]]
arrival = 10
burst = 250

[[thread]]
arrival = 0
burst = 100

[output]
gantt_chart = "charts/rr.txt"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();
    assert_eq!(cfg.output().gantt_chart, std::path::PathBuf::from("charts/rr.txt"));
    assert_eq!(
        cfg.output().execution_log,
        std::path::PathBuf::from("execution_logs.txt")
    );
    match cfg.request() {
        RunRequest::ManyToMany {
            threads,
            time_quantum,
            idle_step,
        } => {
            assert_eq!((*time_quantum, *idle_step), (100, 25));
            let ids: Vec<_> = threads.iter().map(|t| (t.id(), t.arrival_time())).collect();
            assert_eq!(ids, vec![(1, 10), (2, 0)]);
        }
        other => panic!("unexpected request: {other:?}"),
    }
}
