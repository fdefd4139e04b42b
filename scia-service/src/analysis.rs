//! Build, serialize, run, and read back one foundation analysis

use std::path::{Path, PathBuf};
use std::time::Duration;

use foundation_model::builder::{build_foundation_model, COMBINATION_NAME};
use foundation_model::error::ModelError;
use foundation_model::params::FoundationParams;
use foundation_model::scia::{max_pile_reaction, write_definition_file, write_input_xml};

use crate::executor::{AnalysisEngine, AnalysisInput, ExecutorError};

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Template file not found: {0:?}")]
    TemplateMissing(PathBuf),
    #[error("Failed to read template file {path:?}: {message}")]
    TemplateRead { path: PathBuf, message: String },
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
    #[error(transparent)]
    Executor(#[from] ExecutorError),
}

/// Read the `.esa` template the engine applies the input to
pub async fn load_template(path: &Path) -> Result<Vec<u8>, AnalysisError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AnalysisError::TemplateMissing(path.to_path_buf()))
        }
        Err(e) => Err(AnalysisError::TemplateRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        }),
    }
}

/// Engine input for the model built from `params`
pub fn prepare_input(
    params: &FoundationParams,
    template: Vec<u8>,
) -> Result<AnalysisInput, AnalysisError> {
    let model = build_foundation_model(params)?;
    Ok(AnalysisInput {
        input_xml: write_input_xml(&model)?,
        definition_xml: write_definition_file()?,
        template,
    })
}

/// Maximum vertical pile reaction in N for the foundation described by `params`
pub async fn run_analysis<E: AnalysisEngine>(
    engine: &E,
    params: &FoundationParams,
    template: Vec<u8>,
    timeout: Duration,
) -> Result<f64, AnalysisError> {
    let input = prepare_input(params, template)?;
    tracing::debug!("Engine input is {} bytes", input.input_xml.len());

    let output = engine.execute(input, timeout).await?;
    let reaction = max_pile_reaction(&output, COMBINATION_NAME)?;

    tracing::info!("Maximum pile reaction: {:.2} N", reaction);
    Ok(reaction)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    pub(crate) const STUB_OUTPUT: &str = r#"<project xmlns="http://www.scia.cz">
  <table name="Reactions" parent="Combinations - C1">
    <section name="Nodal reactions">
      <h><h0 t="Node"/><h1 t="R_z"/></h>
      <obj id="1"><p0 v="K:p1_b"/><p1 v="12500.125"/></obj>
      <obj id="2"><p0 v="K:p2_b"/><p1 v="18250.5"/></obj>
    </section>
  </table>
</project>"#;

    pub(crate) enum StubOutcome {
        Output(String),
        Failure,
        Timeout,
    }

    /// Engine returning canned results and recording what it was given
    pub(crate) struct StubEngine {
        outcome: StubOutcome,
        pub seen: Mutex<Vec<(AnalysisInput, Duration)>>,
    }

    impl StubEngine {
        fn with_outcome(outcome: StubOutcome) -> Self {
            Self {
                outcome,
                seen: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn returning(output: &str) -> Self {
            Self::with_outcome(StubOutcome::Output(output.to_string()))
        }

        pub(crate) fn failing() -> Self {
            Self::with_outcome(StubOutcome::Failure)
        }

        pub(crate) fn timing_out() -> Self {
            Self::with_outcome(StubOutcome::Timeout)
        }
    }

    impl AnalysisEngine for StubEngine {
        fn execute(
            &self,
            input: AnalysisInput,
            timeout: Duration,
        ) -> impl Future<Output = Result<String, ExecutorError>> + Send {
            self.seen.lock().unwrap().push((input, timeout));
            let result = match &self.outcome {
                StubOutcome::Output(xml) => Ok(xml.clone()),
                StubOutcome::Failure => {
                    Err(ExecutorError::AnalysisFailed("stub failure".to_string()))
                }
                StubOutcome::Timeout => Err(ExecutorError::Timeout(timeout)),
            };
            async move { result }
        }
    }

    #[tokio::test]
    async fn test_returns_max_reaction_from_engine() {
        let engine = StubEngine::returning(STUB_OUTPUT);
        let reaction = run_analysis(
            &engine,
            &FoundationParams::default(),
            b"esa".to_vec(),
            Duration::from_secs(300),
        )
        .await
        .unwrap();
        assert_eq!(reaction, 18250.5);

        let seen = engine.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (input, timeout) = &seen[0];
        assert_eq!(*timeout, Duration::from_secs(300));
        assert_eq!(input.template, b"esa");
        assert!(input.input_xml.contains("K:p12_b"));
        assert_eq!(input.definition_xml, write_definition_file().unwrap());
    }

    #[tokio::test]
    async fn test_engine_errors_propagate() {
        let engine = StubEngine::failing();
        let err = run_analysis(&engine, &FoundationParams::default(), Vec::new(), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Executor(ExecutorError::AnalysisFailed(_))));
    }

    #[tokio::test]
    async fn test_missing_result_is_a_model_error() {
        let engine = StubEngine::returning("<project/>");
        let err = run_analysis(&engine, &FoundationParams::default(), Vec::new(), Duration::from_secs(1))
            .await
            .unwrap_err();
        assert!(matches!(err, AnalysisError::Model(ModelError::ResultNotFound { .. })));
    }

    #[tokio::test]
    async fn test_load_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.esa");

        let err = load_template(&path).await.unwrap_err();
        assert!(matches!(err, AnalysisError::TemplateMissing(_)));

        std::fs::write(&path, [7u8, 8, 9]).unwrap();
        assert_eq!(load_template(&path).await.unwrap(), vec![7, 8, 9]);
    }
}
