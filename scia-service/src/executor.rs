use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use foundation_model::scia::{
    DEFINITION_FILE_NAME, INPUT_FILE_NAME, OUTPUT_FILE_NAME, TEMPLATE_FILE_NAME,
};
use tempfile::TempDir;
use tokio::process::Command;
use uuid::Uuid;

use crate::config::ServiceConfig;

/// How long the availability check waits for the runner to exit
pub const AVAILABILITY_TIMEOUT: Duration = Duration::from_secs(5);

/// Files handed to the engine for one run
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub input_xml: String,
    pub definition_xml: String,
    /// Binary `.esa` project the input is applied to
    pub template: Vec<u8>,
}

/// Something that turns an analysis input into result XML
pub trait AnalysisEngine: Send + Sync + 'static {
    fn execute(
        &self,
        input: AnalysisInput,
        timeout: Duration,
    ) -> impl Future<Output = Result<String, ExecutorError>> + Send;

    /// Whether the engine can be reached at all
    fn is_available(&self) -> impl Future<Output = bool> + Send {
        async { true }
    }
}

/// Runs the SCIA command line tool in a scratch directory
#[derive(Debug, Clone)]
pub struct SciaExecutor {
    runner: PathBuf,
    leading_args: Vec<String>,
    debug_export: Option<PathBuf>,
    availability_timeout: Duration,
}

impl SciaExecutor {
    pub fn new(runner: impl Into<PathBuf>) -> Self {
        Self {
            runner: runner.into(),
            leading_args: Vec::new(),
            debug_export: None,
            availability_timeout: AVAILABILITY_TIMEOUT,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        let executor = Self::new(&config.runner_path);
        match &config.debug_export {
            Some(dir) => executor.with_debug_export(dir),
            None => executor,
        }
    }

    /// Arguments placed before the analysis arguments, e.g. a script for an interpreter
    pub fn with_leading_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.leading_args = args.into_iter().map(Into::into).collect();
        self
    }

    /// Copy input and output files of every run into `dir`
    pub fn with_debug_export(mut self, dir: impl Into<PathBuf>) -> Self {
        self.debug_export = Some(dir.into());
        self
    }

    /// Limit for the availability check, a runner still running after it counts as unavailable
    pub fn with_availability_timeout(mut self, limit: Duration) -> Self {
        self.availability_timeout = limit;
        self
    }

    pub fn runner(&self) -> &Path {
        &self.runner
    }

    /// Whether the runner starts and exits within the availability timeout
    pub async fn runner_available(&self) -> bool {
        let mut command = Command::new(&self.runner);
        command
            .args(&self.leading_args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        match tokio::time::timeout(self.availability_timeout, command.status()).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::warn!("Failed to start {}: {}", self.runner.display(), e);
                false
            }
            Err(_) => {
                tracing::warn!(
                    "{} did not exit within {:?}",
                    self.runner.display(),
                    self.availability_timeout
                );
                false
            }
        }
    }

    async fn run(&self, input: AnalysisInput, timeout: Duration) -> Result<String, ExecutorError> {
        let analysis_id = Uuid::new_v4();
        let temp_dir = TempDir::new().map_err(|e| ExecutorError::IoError(e.to_string()))?;
        let work_path = temp_dir.path();

        tracing::info!("Starting analysis {} in {:?}", analysis_id, work_path);

        write_file(&work_path.join(TEMPLATE_FILE_NAME), &input.template).await?;
        let input_path = work_path.join(INPUT_FILE_NAME);
        write_file(&input_path, input.input_xml.as_bytes()).await?;
        write_file(
            &work_path.join(DEFINITION_FILE_NAME),
            input.definition_xml.as_bytes(),
        )
        .await?;

        self.maybe_export_debug_file(&input_path, &analysis_id, "input.xml")
            .await;

        let mut command = Command::new(&self.runner);
        command
            .args(&self.leading_args)
            .arg("LIN")
            .arg(TEMPLATE_FILE_NAME)
            .arg(INPUT_FILE_NAME)
            .arg("-tXML")
            .arg(format!("-o{OUTPUT_FILE_NAME}"))
            .current_dir(work_path)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        tracing::info!("Running command: {:?}", command.as_std());

        let child = command.spawn().map_err(|e| {
            ExecutorError::ExecutionError(format!(
                "Failed to start {}: {}",
                self.runner.display(),
                e
            ))
        })?;

        // Dropping the child on timeout kills the process
        let output = match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| ExecutorError::IoError(e.to_string()))?,
            Err(_) => {
                tracing::error!("Analysis {} timed out after {:?}", analysis_id, timeout);
                return Err(ExecutorError::Timeout(timeout));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            tracing::error!("Engine failed. Stderr: {}\nStdout: {}", stderr, stdout);
            return Err(ExecutorError::AnalysisFailed(format!(
                "engine exited with status {}",
                output.status
            )));
        }

        let output_path = work_path.join(OUTPUT_FILE_NAME);
        let result = match tokio::fs::read_to_string(&output_path).await {
            Ok(xml) => xml,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ExecutorError::MissingOutput(OUTPUT_FILE_NAME.to_string()));
            }
            Err(e) => return Err(ExecutorError::IoError(e.to_string())),
        };

        self.maybe_export_debug_file(&output_path, &analysis_id, "output.xml")
            .await;

        tracing::info!("Analysis {} finished ({} bytes of results)", analysis_id, result.len());
        Ok(result)
    }

    async fn maybe_export_debug_file(&self, path: &Path, analysis_id: &Uuid, suffix: &str) {
        let Some(dest_dir) = &self.debug_export else {
            return;
        };
        if let Err(err) = tokio::fs::create_dir_all(dest_dir).await {
            tracing::warn!("Failed to create debug export directory {:?}: {}", dest_dir, err);
            return;
        }

        let dest_file = dest_dir.join(format!("analysis_{}.{}", analysis_id, suffix));
        if let Err(err) = tokio::fs::copy(path, &dest_file).await {
            tracing::warn!("Failed to export debug file {:?}: {}", dest_file, err);
        } else {
            tracing::info!("Exported debug file to {:?}", dest_file);
        }
    }
}

impl AnalysisEngine for SciaExecutor {
    fn execute(
        &self,
        input: AnalysisInput,
        timeout: Duration,
    ) -> impl Future<Output = Result<String, ExecutorError>> + Send {
        self.run(input, timeout)
    }

    fn is_available(&self) -> impl Future<Output = bool> + Send {
        self.runner_available()
    }
}

async fn write_file(path: &Path, contents: &[u8]) -> Result<(), ExecutorError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| ExecutorError::IoError(format!("Failed to write {:?}: {}", path, e)))
}

#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Execution error: {0}")]
    ExecutionError(String),
    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
    #[error("Analysis timed out after {0:?}")]
    Timeout(Duration),
    #[error("Engine produced no {0}")]
    MissingOutput(String),
}
