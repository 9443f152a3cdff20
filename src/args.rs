use std::path::PathBuf;

use clap::Parser;
use std::env;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
            .error(ERROR)
    };
}

mod heading {
    pub const TEMPLATE_SELECTION: &str = "Template Selection";
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
}

/// Without flags the interactive wizard runs; with `--silent` everything
/// comes from the command line.
#[derive(Clone, Debug, Parser)]
#[command(
    name = "gostart",
    version,
    about,
    arg_required_else_help(false),
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Directory to create / project name; `.` generates into the current directory
    #[arg(long, short, value_parser, help_heading = heading::OUTPUT_PARAMETERS)]
    pub name: Option<String>,

    /// Application type of the generated project
    #[arg(long = "app-type", short = 't', value_parser, value_name="TYPE", help_heading = heading::TEMPLATE_SELECTION)]
    pub app_type: Option<String>,

    /// Package flavor of the generated project
    #[arg(long, short, value_parser, value_name="PACKAGE", help_heading = heading::TEMPLATE_SELECTION)]
    pub package: Option<String>,

    /// Generate the project under the given base directory instead of the current one
    #[arg(long, value_parser, value_name="PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Skip the interactive wizard and take every value from the command line
    #[arg(long, short, requires("name"), action)]
    pub silent: bool,

    /// Allow the generator to replace existing files in the target directory
    #[arg(short, long, action, help_heading = heading::OUTPUT_PARAMETERS)]
    pub overwrite: bool,

    /// List the embedded template sets and exit
    #[arg(long = "list-templates", action, help_heading = heading::TEMPLATE_SELECTION)]
    pub list_templates: bool,

    /// Enables more verbose output
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> AppArgs {
    AppArgs::parse_from(env::args())
}
