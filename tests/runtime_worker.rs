// tests/runtime_worker.rs

use std::error::Error;

use threadsim::engine::{run_on_worker, RunRequest, Runtime};
use threadsim::errors::ThreadsimError;
use threadsim::fs::mock::MockFileSystem;
use threadsim::report::Reporter;
use threadsim::sim::CancelFlag;
use threadsim::types::ThreadingModel;
use threadsim_test_utils::builders::{thread_states, ConfigFileBuilder};
use threadsim_test_utils::{chart, init_tracing, with_timeout};

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn worker_returns_the_same_outcome_as_a_direct_call() -> TestResult {
    with_timeout(async {
        init_tracing();

        let request = RunRequest::ManyToMany {
            threads: thread_states(&[(0, 250), (0, 100)]),
            time_quantum: 100,
            idle_step: 100,
        };
        let direct = request.simulate(&CancelFlag::new())?;
        let on_worker = run_on_worker(request, CancelFlag::new()).await?;

        assert_eq!(direct, on_worker);
        Ok::<(), Box<dyn Error>>(())
    })
    .await
}

#[tokio::test]
async fn runtime_publishes_config_driven_run() -> TestResult {
    with_timeout(async {
        init_tracing();

        let cfg = ConfigFileBuilder::round_robin(100)
            .thread(0, 250)
            .thread(0, 100)
            .output_dir("runs")
            .build();
        let (request, output) = cfg.into_parts();

        let fs = MockFileSystem::new();
        let runtime = Runtime::new(
            Reporter::new(fs.clone(), output.clone()).with_echo(false),
            CancelFlag::new(),
        );
        let outcome = runtime.run(request).await?;

        assert_eq!(outcome.model, ThreadingModel::ManyToMany);
        assert_eq!(
            chart(&outcome),
            vec![(1, 0, 100), (2, 100, 200), (1, 200, 300), (1, 300, 350)]
        );
        let written = fs.read_to_string(&output.gantt_chart)?;
        assert_eq!(written.lines().count(), 5);
        assert!(fs.exists(&output.execution_log));
        Ok::<(), Box<dyn Error>>(())
    })
    .await
}

#[tokio::test]
async fn cancelled_run_writes_nothing() -> TestResult {
    with_timeout(async {
        init_tracing();

        let configs = [
            ConfigFileBuilder::many_to_one(4, 1000).build(),
            ConfigFileBuilder::round_robin(100)
                .thread(0, 250)
                .thread(300, 100)
                .build(),
        ];

        for cfg in configs {
            let (request, output) = cfg.into_parts();
            let model = request.model();
            let fs = MockFileSystem::new();
            let runtime = Runtime::new(
                Reporter::new(fs.clone(), output).with_echo(false),
                CancelFlag::new(),
            );

            runtime.cancel_flag().cancel();
            let result = runtime.run(request).await;

            assert!(matches!(result, Err(ThreadsimError::Cancelled)), "{model}");
            assert!(fs.paths().is_empty(), "{model}");
        }
        Ok::<(), Box<dyn Error>>(())
    })
    .await
}

#[tokio::test]
async fn invalid_request_surfaces_error_without_output() -> TestResult {
    with_timeout(async {
        init_tracing();

        let fs = MockFileSystem::new();
        let runtime = Runtime::new(
            Reporter::new(fs.clone(), Default::default()).with_echo(false),
            CancelFlag::new(),
        );
        let request = RunRequest::ManyToMany {
            threads: thread_states(&[(500, 100)]),
            time_quantum: 100,
            idle_step: 0,
        };

        let result = runtime.run(request).await;

        assert!(matches!(result, Err(ThreadsimError::NonTerminatingSchedule(_))));
        assert!(fs.paths().is_empty());
        Ok::<(), Box<dyn Error>>(())
    })
    .await
}
