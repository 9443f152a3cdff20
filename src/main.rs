/// Main file
mod app_log;
mod args;
mod commands;
mod progressbar;
mod project_config;
mod template;
mod template_source;
mod user_parsed_input;
mod wizard;

use app_log::log_env_init;
use args::resolve_args;
use project_config::ProjectConfig;
use template::TemplateSource;
use template_source::EmbeddedTemplates;
use user_parsed_input::UserParsedInput;
use wizard::terminal::WizardOutcome;
use wizard::WizardState;

use anyhow::{anyhow, bail, Context, Result};
use console::{style, Term};
use log::{error, info, warn};

fn main() -> Result<()> {
    log_env_init();
    let args = resolve_args();
    let user_input = UserParsedInput::try_from_args(&args);

    if args.list_templates {
        for name in EmbeddedTemplates.set_names() {
            info!("{name}");
        }
        return Ok(());
    }

    if let Ok(marker_file) = project_config::check_marker_file() {
        let marker = project_config::ProjectMarker::from_path(&marker_file).unwrap_or_default();
        let existing = marker
            .project
            .as_ref()
            .and_then(|project| project.get("project_name"))
            .and_then(|value| value.as_str())
            .unwrap_or("unknown");
        warn!(
            "running inside the generated project `{existing}` ({})",
            style(marker_file.display()).bold()
        );
    }

    if user_input.is_silent() {
        let name = user_input
            .name()
            .context("--silent requires a project name")?;
        wizard::validate_project_name(name).map_err(|message| anyhow!(message))?;
        let config = ProjectConfig::from_selections(
            name,
            user_input.app_type(),
            user_input.package(),
            user_input.destination(),
            user_input.overwrite(),
        )?;
        generate(&config, user_input.is_verbose())?;
        commands::echo_project_config(
            config.project_name(),
            config.app_type(),
            config.package(),
        )?;
        return Ok(());
    }

    let term = Term::stdout();
    if !term.is_term() {
        bail!("not a terminal: the interactive wizard needs a tty (use --silent with --name)");
    }

    let state = WizardState::new(
        wizard::APP_TYPES.iter().map(ToString::to_string).collect(),
        wizard::PACKAGES.iter().map(ToString::to_string).collect(),
    );

    let mut generated: Option<ProjectConfig> = None;
    let verbose = user_input.is_verbose();
    let outcome = wizard::terminal::run(&term, state, |name, app_type, package| {
        let config = ProjectConfig::from_selections(
            name,
            app_type,
            package,
            user_input.destination(),
            user_input.overwrite(),
        )?;
        generate(&config, verbose)?;
        generated = Some(config);
        Ok(())
    })?;

    match outcome {
        WizardOutcome::Cancelled => bail!("project generation cancelled"),
        WizardOutcome::Completed => {
            if let Some(config) = generated {
                commands::echo_project_config(
                    config.project_name(),
                    config.app_type(),
                    config.package(),
                )?;
            }
            Ok(())
        }
    }
}

/// To generate a Go project from the embedded template set
fn generate(config: &ProjectConfig, verbose: bool) -> Result<()> {
    if verbose {
        info!("🔧 {}", style(format!("{config:?}")).dim());
    }
    info!(
        "🔧 {}",
        style(format!("Destination: {} ...", config.target_dir().display()))
            .bold()
            .yellow()
    );
    info!(
        "🔧 {}",
        style(format!("project-name: {} ...", config.project_name()))
            .bold()
            .yellow()
    );
    info!("🔧 {}", style("Generating template ...").bold().yellow());

    if let Err(err) = template::materialize(config, &EmbeddedTemplates) {
        // An unresolved placeholder is a defect in the shipped template,
        // not bad user input; make that visible in the log.
        if matches!(err, template::GenerateError::Placeholder { .. }) {
            error!("template authoring defect: {err}");
        }
        return Err(err.into());
    }
    project_config::write_project_marker(config)?;

    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New project created").bold(),
        style(config.target_dir().display()).underlined()
    );
    Ok(())
}
