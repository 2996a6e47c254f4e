//! External script generators
//!
//! A script generator runs `<interpreter> <script>`, writes the raw input to
//! the child's stdin in full, closes it, and takes stdout as the generated
//! code. A non-zero exit status or output starting with `Error:` is a
//! failure; stderr is folded into the error message.
//!
//! Execution blocks the calling thread until the child exits. There is no
//! timeout here; callers that need one enforce it around [`ScriptGenerator::generate`].

use crate::{GenerateError, GenerateResult};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Output, Stdio};

/// Interpreters tried in order when none is pinned
pub const DEFAULT_INTERPRETERS: &[&str] = &["/opt/venv/bin/python", "python3", "python"];

/// Prefix a script prints on stdout to report failure
const ERROR_SENTINEL: &str = "Error:";

/// Generator backed by an out-of-process script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptGenerator {
    script: PathBuf,
    interpreter: Option<String>,
}

impl ScriptGenerator {
    /// Create a generator for a script, resolving the interpreter from
    /// [`DEFAULT_INTERPRETERS`]
    pub fn new(script: impl Into<PathBuf>) -> Self {
        Self {
            script: script.into(),
            interpreter: None,
        }
    }

    /// Pin the interpreter used to run the script
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = Some(interpreter.into());
        self
    }

    /// Path of the script
    pub fn script(&self) -> &Path {
        &self.script
    }

    /// Pinned interpreter, if any
    pub fn interpreter(&self) -> Option<&str> {
        self.interpreter.as_deref()
    }

    /// Run the script on `input` and return its trimmed stdout.
    pub fn generate(&self, input: &str) -> GenerateResult<String> {
        let output = self.run(input)?;
        interpret_output(&output)
    }

    fn run(&self, input: &str) -> GenerateResult<Output> {
        let mut child = self.spawn()?;

        // Feed stdin from another thread so a child that writes a lot before
        // draining its input cannot deadlock against us.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = input.to_owned();
            std::thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child.wait_with_output().map_err(|e| {
            GenerateError::Execution(format!(
                "failed to wait for script {}: {e}",
                self.script.display()
            ))
        })?;

        if let Some(handle) = writer {
            check_input_written(handle.join()).inspect_err(|e| {
                tracing::warn!(script = %self.script.display(), error = %e, "input not delivered");
            })?;
        }

        Ok(output)
    }

    fn spawn(&self) -> GenerateResult<Child> {
        let candidates: Vec<&str> = match &self.interpreter {
            Some(interpreter) => vec![interpreter.as_str()],
            None => DEFAULT_INTERPRETERS.to_vec(),
        };

        for candidate in &candidates {
            let spawned = Command::new(candidate)
                .arg(&self.script)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .spawn();

            match spawned {
                Ok(child) => {
                    tracing::debug!(
                        interpreter = candidate,
                        script = %self.script.display(),
                        "started script generator"
                    );
                    return Ok(child);
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!(interpreter = candidate, "interpreter not found");
                }
                Err(e) => {
                    return Err(GenerateError::Execution(format!(
                        "failed to start {candidate} {}: {e}",
                        self.script.display()
                    )));
                }
            }
        }

        Err(GenerateError::Execution(format!(
            "no interpreter found; tried: {}",
            candidates.join(", ")
        )))
    }
}

/// Outcome of the stdin writer thread.
///
/// A broken pipe means the child exited without draining its input, which
/// is allowed; the exit status and stdout decide the result. Any other write
/// failure leaves the child with partial input.
fn check_input_written(joined: std::thread::Result<std::io::Result<()>>) -> GenerateResult<()> {
    match joined {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Ok(Err(e)) => Err(GenerateError::Execution(format!(
            "failed to write input to script: {e}"
        ))),
        Err(_) => Err(GenerateError::Execution(
            "stdin writer thread panicked".to_string(),
        )),
    }
}

/// Turn a finished child's output into code or an execution error.
fn interpret_output(output: &Output) -> GenerateResult<String> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim_end();

    if !output.status.success() {
        return Err(GenerateError::Execution(with_stderr(
            format!("script exited with {}", output.status),
            stderr,
        )));
    }

    let code = stdout.trim();
    if code.starts_with(ERROR_SENTINEL) {
        return Err(GenerateError::Execution(with_stderr(code.to_string(), stderr)));
    }

    if !stderr.is_empty() {
        tracing::warn!(stderr, "script succeeded but wrote to stderr");
    }

    Ok(code.to_string())
}

fn with_stderr(message: String, stderr: &str) -> String {
    if stderr.is_empty() {
        message
    } else {
        format!("{message}; stderr: {stderr}")
    }
}

#[cfg(test)]
#[path = "script/script_tests.rs"]
mod script_tests;
