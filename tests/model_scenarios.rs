// tests/model_scenarios.rs

use std::error::Error;
use std::path::PathBuf;

use threadsim::config::load_and_validate;
use threadsim::engine::RunRequest;
use threadsim::errors::ThreadsimError;
use threadsim::sim::{run_many_to_many, run_many_to_one, run_one_to_one, CancelFlag, LogEvent};
use threadsim_test_utils::builders::thread_states;
use threadsim_test_utils::{chart, init_tracing};

type TestResult = Result<(), Box<dyn Error>>;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn many_to_one_three_threads_of_200ms() -> TestResult {
    init_tracing();

    let outcome = run_many_to_one(3, 200)?;
    assert_eq!(chart(&outcome), vec![(1, 0, 200), (2, 200, 400), (3, 400, 600)]);
    Ok(())
}

#[test]
fn one_to_one_two_threads() -> TestResult {
    init_tracing();

    let outcome = run_one_to_one(2)?;
    assert_eq!(chart(&outcome), vec![(1, 0, 500), (2, 500, 1000)]);
    Ok(())
}

#[test]
fn one_to_one_has_the_shape_of_many_to_one_with_500ms() -> TestResult {
    init_tracing();

    for n in 1..=6 {
        assert_eq!(chart(&run_one_to_one(n)?), chart(&run_many_to_one(n, 500)?));
    }
    Ok(())
}

#[test]
fn round_robin_quantum_slicing() -> TestResult {
    init_tracing();

    let threads = thread_states(&[(0, 250), (0, 100)]);
    let outcome = run_many_to_many(&threads, 100)?;

    assert_eq!(
        chart(&outcome),
        vec![(1, 0, 100), (2, 100, 200), (1, 200, 300), (1, 300, 350)]
    );
    let completions: Vec<_> = outcome
        .events
        .iter()
        .filter_map(|e| match e {
            LogEvent::ThreadCompleted { thread } => Some(*thread),
            _ => None,
        })
        .collect();
    assert_eq!(completions, vec![2, 1]);
    Ok(())
}

#[test]
fn round_robin_leaves_caller_threads_untouched() -> TestResult {
    init_tracing();

    let threads = thread_states(&[(0, 250), (0, 100)]);
    run_many_to_many(&threads, 100)?;
    assert_eq!(threads[0].remaining_time(), 250);
    assert_eq!(threads[1].remaining_time(), 100);
    Ok(())
}

#[test]
fn zero_quantum_fails_instead_of_hanging() {
    init_tracing();

    let threads = thread_states(&[(0, 100)]);
    match run_many_to_many(&threads, 0) {
        Err(ThreadsimError::InvalidParameter(msg)) => assert!(msg.contains("quantum")),
        other => panic!("expected InvalidParameter, got {other:?}"),
    }
}

#[test]
fn rerunning_yields_identical_charts() -> TestResult {
    init_tracing();

    let threads = thread_states(&[(300, 120), (0, 450), (50, 80)]);
    let first = run_many_to_many(&threads, 70)?;
    let second = run_many_to_many(&threads, 70)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn late_arrivals_demo_idles_in_configured_steps() -> TestResult {
    init_tracing();

    let cfg = load_and_validate(demo("late-arrivals.toml"))?;
    match cfg.request() {
        RunRequest::ManyToMany { idle_step, .. } => assert_eq!(*idle_step, 50),
        other => panic!("unexpected request: {other:?}"),
    }

    let outcome = cfg.request().simulate(&CancelFlag::new())?;
    assert_eq!(
        chart(&outcome),
        vec![(1, 150, 300), (1, 300, 450), (2, 450, 550)]
    );
    let idles = outcome
        .events
        .iter()
        .filter(|e| matches!(e, LogEvent::CpuIdle { .. }))
        .count();
    assert_eq!(idles, 3);
    Ok(())
}

#[test]
fn every_demo_config_runs() -> TestResult {
    init_tracing();

    for name in [
        "many-to-one.toml",
        "round-robin.toml",
        "late-arrivals.toml",
        "one-to-one.toml",
    ] {
        let cfg = load_and_validate(demo(name))?;
        let outcome = cfg.request().simulate(&CancelFlag::new())?;
        assert_eq!(outcome.model, cfg.request().model(), "{name}");
        assert!(!outcome.entries.is_empty(), "{name}");
    }
    Ok(())
}
