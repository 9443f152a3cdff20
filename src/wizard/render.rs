//! Pure stage rendering. Every function maps state to a display string and
//! leaves the state untouched; error acknowledgement is the driver's job.

use console::style;
use std::fmt::Write;

use super::{Stage, TextInput, WizardState};

/// Render the whole screen for the current stage.
pub fn render(state: &WizardState) -> String {
    match state.stage() {
        Stage::NameInput { input } => render_name_input(input, state.peek_error()),
        Stage::TypeSelect { cursor, .. } => render_select(
            "Select application type:",
            state.app_types(),
            *cursor,
            state.peek_error(),
        ),
        Stage::PackageSelect { cursor, .. } => render_select(
            "Select package:",
            state.packages(),
            *cursor,
            state.peek_error(),
        ),
        Stage::Summary {
            name,
            app_type,
            package,
        } => render_summary(name, app_type, package, state.peek_error()),
        Stage::Success { name } => render_success(name),
    }
}

/// Display form of the target directory for a given project name.
pub fn target_display(name: &str) -> String {
    if name == "." {
        "./".to_string()
    } else {
        format!("./{name}/")
    }
}

fn render_name_input(input: &TextInput, error: Option<&str>) -> String {
    let mut s = String::from("Enter your project name (or '.' for current directory):\n\n> ");

    // Inline `|` cursor marker.
    for (idx, ch) in input.as_str().chars().enumerate() {
        if idx == input.cursor() {
            s.push('|');
        }
        s.push(ch);
    }
    if input.cursor() == input.as_str().chars().count() {
        s.push('|');
    }

    push_error(&mut s, error);
    s.push_str("\n\n(Enter to submit, Esc to quit)\n");
    s
}

fn render_select(prompt: &str, options: &[String], cursor: usize, error: Option<&str>) -> String {
    let mut s = format!("{prompt}\n\n");
    for (idx, option) in options.iter().enumerate() {
        if idx == cursor {
            let _ = writeln!(s, "> {}", style(option).bold());
        } else {
            let _ = writeln!(s, "  {option}");
        }
    }
    push_error(&mut s, error);
    s.push_str("\n(Use arrow keys to navigate, Enter to continue, q to quit)\n");
    s
}

fn render_summary(name: &str, app_type: &str, package: &str, error: Option<&str>) -> String {
    let mut s = String::from("Project Configuration Summary\n\n");
    let _ = writeln!(s, "Name:     {}", style(name).bold());
    let _ = writeln!(s, "Type:     {}", style(app_type).bold());
    let _ = writeln!(s, "Package:  {}", style(package).bold());
    let _ = writeln!(s, "Location: {}", style(target_display(name)).bold());

    if let Some(message) = error {
        let _ = write!(s, "\n{}\n", style(format!("Error: {message}")).red());
        s.push_str("\nPress Enter to retry or q to quit\n");
    } else {
        s.push_str("\nPress Enter to generate or q to quit\n");
    }
    s
}

fn render_success(name: &str) -> String {
    let target = target_display(name);
    let mut s = format!("{}\n\n", style("✓ Project created successfully!").green());
    s.push_str("Next steps:\n");
    if name != "." {
        let _ = writeln!(s, "cd {target}");
    }
    s.push_str("go mod tidy\n");
    s.push_str("go run ./cmd/api\n\n");
    let _ = writeln!(s, "Your project is ready at: {target}");
    s.push_str("\nPress any key to exit\n");
    s
}

fn push_error(s: &mut String, error: Option<&str>) {
    if let Some(message) = error {
        let _ = write!(s, "\n\n{}", style(format!("Error: {message}")).red());
    }
}
