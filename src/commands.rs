//! Shell-safe `echo` helper. A standalone sanitization utility: it never
//! takes part in the wizard flow, only the entry point calls it.

use anyhow::{bail, Context, Result};
use std::process::Command;

const MAX_INPUT_LEN: usize = 1000;

/// Characters rejected outright before anything reaches a process argv.
const DANGEROUS_CHARS: &[char] = &[
    '`', '$', '|', '&', ';', '<', '>', '(', ')', '{', '}', '[', ']', '!', '*', '?', '~', '#',
    '%', '^', '=',
];

/// Reject inputs that could be abused if they ever reached a shell: empty
/// strings, NUL bytes, shell metacharacters, and oversized values.
pub fn validate_input(input: &str) -> Result<()> {
    if input.is_empty() {
        bail!("input cannot be empty");
    }
    if input.contains('\0') {
        bail!("input contains null bytes");
    }
    if let Some(ch) = input.chars().find(|ch| DANGEROUS_CHARS.contains(ch)) {
        bail!("input contains potentially dangerous character: {ch}");
    }
    if input.len() > MAX_INPUT_LEN {
        bail!("input too long (max {MAX_INPUT_LEN} characters)");
    }
    Ok(())
}

/// Run the system `echo` with `text` as a single argv element, printing the
/// captured output. No shell ever interprets the text.
pub fn execute_echo(text: &str) -> Result<()> {
    validate_input(text).context("invalid input")?;

    let mut cmd = if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/c", "echo"]).arg(text);
        cmd
    } else {
        let mut cmd = Command::new("echo");
        cmd.arg(text);
        cmd
    };

    let output = cmd.output().context("echo command failed")?;
    if !output.status.success() {
        bail!("echo command exited with {}", output.status);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    println!("{}", stdout.trim_end_matches('\n'));
    Ok(())
}

/// Echo the final configuration, one line per field, each validated first.
pub fn echo_project_config(project_name: &str, app_type: &str, package: &str) -> Result<()> {
    if project_name.is_empty() {
        bail!("project name cannot be empty");
    }

    execute_echo(&format!("Name: {project_name}"))
        .with_context(|| format!("failed to echo project name '{project_name}'"))?;
    execute_echo(&format!("Type: {app_type}"))
        .with_context(|| format!("failed to echo app type '{app_type}'"))?;
    execute_echo(&format!("Package: {package}"))
        .with_context(|| format!("failed to echo package '{package}'"))?;
    Ok(())
}
