//! Simulated test execution with a single-in-flight guard.
//!
//! A test run validates the input, generates a template, and waits a fixed
//! simulated delay before reporting, standing in for a real transformation
//! engine. Runs are not cancellable once started, so the runner enforces a
//! single-in-flight invariant: a second run request while one is
//! outstanding is rejected instead of overlapping.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::info;

use xst_generate::{fallback_template, generate};
use xst_model::{
    DataFormat, GeneratedArtifact, MappingRule, TransformationConfig, ValidationResult,
};
use xst_validate::validate;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("a test run is already in flight")]
    AlreadyRunning,
}

/// Result of one simulated run.
#[derive(Debug)]
pub struct RunOutcome {
    pub validation: ValidationResult,
    pub artifact: GeneratedArtifact,
    pub elapsed: Duration,
    /// True when validation failed and the artifact is the empty-root
    /// fallback.
    pub used_fallback: bool,
}

/// Serializes simulated test runs.
#[derive(Debug)]
pub struct TestRunner {
    in_flight: AtomicBool,
    delay: Duration,
}

impl TestRunner {
    pub fn new(delay: Duration) -> Self {
        Self {
            in_flight: AtomicBool::new(false),
            delay,
        }
    }

    /// Execute one simulated run.
    ///
    /// Returns [`RunError::AlreadyRunning`] if another run is outstanding.
    pub fn run(
        &self,
        input: &str,
        format: DataFormat,
        config: &TransformationConfig,
        rules: &[MappingRule],
    ) -> Result<RunOutcome, RunError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(RunError::AlreadyRunning);
        }
        let _guard = InFlightGuard {
            flag: &self.in_flight,
        };

        let started = Instant::now();
        let validation = validate(input, format);
        let used_fallback = !validation.is_valid;
        let artifact = if used_fallback {
            GeneratedArtifact::new(fallback_template(config), format, config.output_format)
        } else {
            generate(format, config, rules)
        };
        std::thread::sleep(self.delay);
        let elapsed = started.elapsed();
        info!(?elapsed, used_fallback, "test run finished");

        Ok(RunOutcome {
            validation,
            artifact,
            elapsed,
            used_fallback,
        })
    }
}

struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use xst_model::samples::{sample_document, sample_rules};

    use super::*;

    #[test]
    fn run_produces_artifact_for_valid_input() {
        let runner = TestRunner::new(Duration::from_millis(0));
        let outcome = runner
            .run(
                sample_document(DataFormat::Json),
                DataFormat::Json,
                &TransformationConfig::default(),
                &sample_rules(DataFormat::Json),
            )
            .unwrap();
        assert!(outcome.validation.is_valid);
        assert!(!outcome.used_fallback);
        assert!(outcome.artifact.template.contains("<xsl:stylesheet"));
    }

    #[test]
    fn invalid_input_falls_back_to_empty_root() {
        let runner = TestRunner::new(Duration::from_millis(0));
        let outcome = runner
            .run(
                "{broken",
                DataFormat::Json,
                &TransformationConfig::default(),
                &[],
            )
            .unwrap();
        assert!(!outcome.validation.is_valid);
        assert!(outcome.used_fallback);
        assert!(outcome.artifact.template.contains("<root/>"));
    }

    #[test]
    fn overlapping_runs_are_rejected() {
        let runner = Arc::new(TestRunner::new(Duration::from_millis(200)));
        let background = Arc::clone(&runner);
        let handle = std::thread::spawn(move || {
            background.run(
                "{\"a\":1}",
                DataFormat::Json,
                &TransformationConfig::default(),
                &[],
            )
        });
        // Let the background run acquire the in-flight flag.
        std::thread::sleep(Duration::from_millis(50));
        let second = runner.run(
            "{\"a\":1}",
            DataFormat::Json,
            &TransformationConfig::default(),
            &[],
        );
        assert!(matches!(second, Err(RunError::AlreadyRunning)));
        assert!(handle.join().unwrap().is_ok());
    }

    #[test]
    fn runner_is_reusable_after_completion() {
        let runner = TestRunner::new(Duration::from_millis(0));
        let config = TransformationConfig::default();
        runner
            .run("{\"a\":1}", DataFormat::Json, &config, &[])
            .unwrap();
        assert!(
            runner
                .run("{\"a\":1}", DataFormat::Json, &config, &[])
                .is_ok()
        );
    }
}
