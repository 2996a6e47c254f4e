#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

/// Write a shell script and return a generator that runs it with `sh`.
#[cfg(unix)]
fn sh_generator(dir: &TempDir, body: &str) -> ScriptGenerator {
    let path = dir.path().join("gen.sh");
    fs::write(&path, body).unwrap();
    ScriptGenerator::new(path).with_interpreter("sh")
}

#[test]
fn ScriptGenerator___new___has_no_pinned_interpreter() {
    let generator = ScriptGenerator::new("plugins/official/ts_interface_gen.py");

    assert_eq!(generator.interpreter(), None);
    assert_eq!(
        generator.script(),
        Path::new("plugins/official/ts_interface_gen.py")
    );
}

#[cfg(unix)]
#[test]
fn ScriptGenerator___generate___forwards_stdin_verbatim() {
    let dir = TempDir::new().unwrap();
    let generator = sh_generator(&dir, "cat\n");

    let code = generator.generate("{\"a\": 1}\n{\"b\": 2}").unwrap();

    assert_eq!(code, "{\"a\": 1}\n{\"b\": 2}");
}

#[cfg(unix)]
#[test]
fn ScriptGenerator___generate___trims_surrounding_whitespace() {
    let dir = TempDir::new().unwrap();
    let generator = sh_generator(&dir, "printf '\\n\\n  interface X {}  \\n\\n'\n");

    let code = generator.generate("{}").unwrap();

    assert_eq!(code, "interface X {}");
}

#[cfg(unix)]
#[test]
fn ScriptGenerator___nonzero_exit___returns_execution_error_with_stderr() {
    let dir = TempDir::new().unwrap();
    let generator = sh_generator(&dir, "echo 'traceback: boom' >&2\nexit 3\n");

    let err = generator.generate("{}").unwrap_err();

    let GenerateError::Execution(message) = err else {
        panic!("expected execution error");
    };
    assert!(message.contains("script exited with"));
    assert!(message.contains("traceback: boom"));
}

#[cfg(unix)]
#[test]
fn ScriptGenerator___error_sentinel___returns_execution_error() {
    let dir = TempDir::new().unwrap();
    let generator = sh_generator(&dir, "echo 'Error: Input must be a JSON object'\n");

    let err = generator.generate("[]").unwrap_err();

    assert_eq!(
        err,
        GenerateError::Execution("Error: Input must be a JSON object".into())
    );
}

#[cfg(unix)]
#[test]
fn ScriptGenerator___error_sentinel___appends_stderr() {
    let dir = TempDir::new().unwrap();
    let generator = sh_generator(&dir, "echo 'details' >&2\necho 'Error: bad'\n");

    let err = generator.generate("{}").unwrap_err();

    assert_eq!(
        err,
        GenerateError::Execution("Error: bad; stderr: details".into())
    );
}

#[cfg(unix)]
#[test]
fn ScriptGenerator___stderr_on_success___is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let generator = sh_generator(&dir, "echo 'warning' >&2\necho 'ok'\n");

    assert_eq!(generator.generate("{}").unwrap(), "ok");
}

#[cfg(unix)]
#[test]
fn ScriptGenerator___script_ignoring_large_input___does_not_hang() {
    let dir = TempDir::new().unwrap();
    let generator = sh_generator(&dir, "echo done\n");
    let input = "x".repeat(4 * 1024 * 1024);

    assert_eq!(generator.generate(&input).unwrap(), "done");
}

#[test]
fn ScriptGenerator___missing_interpreter___returns_execution_error() {
    let generator = ScriptGenerator::new("whatever.py")
        .with_interpreter("structgen-test-no-such-interpreter");

    let err = generator.generate("{}").unwrap_err();

    assert_eq!(
        err,
        GenerateError::Execution(
            "no interpreter found; tried: structgen-test-no-such-interpreter".into()
        )
    );
}

#[test]
fn check_input_written___complete_write___is_ok() {
    assert_eq!(check_input_written(Ok(Ok(()))), Ok(()));
}

#[test]
fn check_input_written___broken_pipe___is_ok() {
    let err = std::io::Error::new(ErrorKind::BrokenPipe, "closed");

    assert_eq!(check_input_written(Ok(Err(err))), Ok(()));
}

#[test]
fn check_input_written___other_write_error___returns_execution_error() {
    let err = std::io::Error::other("disk on fire");

    assert_eq!(
        check_input_written(Ok(Err(err))),
        Err(GenerateError::Execution(
            "failed to write input to script: disk on fire".into()
        ))
    );
}

#[test]
fn check_input_written___writer_panicked___returns_execution_error() {
    let joined = std::thread::spawn(|| -> std::io::Result<()> { panic!("writer died") }).join();

    assert!(matches!(
        check_input_written(joined),
        Err(GenerateError::Execution(_))
    ));
}
