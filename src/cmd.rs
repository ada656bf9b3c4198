use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use std::process::{Command, ExitStatus, Stdio};

/// Execute a command with inherited stdio and hand back its exit status unchecked
pub fn execute(ctx: &Context, program: &str, args: &[&str]) -> Result<ExitStatus> {
    if ctx.verbose {
        println!("Executing: {} {}", program, args.join(" "));
    }

    let status = Command::new(program)
        .args(args)
        .current_dir(&ctx.base_dir)
        .status()?;

    Ok(status)
}

/// Execute a command and capture its output
///
/// stderr is passed through to the terminal so build tool diagnostics stay visible.
pub fn execute_with_output(ctx: &Context, program: &str, args: &[&str]) -> Result<String> {
    if ctx.verbose {
        println!("Executing: {} {}", program, args.join(" "));
    }

    let output = Command::new(program)
        .args(args)
        .current_dir(&ctx.base_dir)
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()?;

    if !output.status.success() {
        return Err(Error::CommandFailed(format!(
            "{} {} failed with exit code: {}",
            program,
            args.join(" "),
            output.status.code().unwrap_or(-1)
        )));
    }

    String::from_utf8(output.stdout).map_err(|_| {
        Error::custom(format!(
            "{} {} produced non-UTF-8 output",
            program,
            args.join(" ")
        ))
    })
}
