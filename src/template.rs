use console::style;
use indicatif::ProgressBar;
use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::progressbar;
use crate::project_config::ProjectConfig;

/// Suffix marking a file for placeholder substitution; stripped from the
/// output path.
pub const TEMPLATE_MARKER_SUFFIX: &str = ".tmpl";

/// One entry of a template set, relative to the set root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub is_dir: bool,
    pub is_template: bool,
}

impl TemplateEntry {
    pub fn file(path: impl Into<PathBuf>, bytes: impl Into<Vec<u8>>) -> Self {
        let path = path.into();
        let is_template = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(TEMPLATE_MARKER_SUFFIX));
        Self {
            path,
            bytes: bytes.into(),
            is_dir: false,
            is_template,
        }
    }

    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            bytes: Vec::new(),
            is_dir: true,
            is_template: false,
        }
    }
}

/// Read-only template storage, injected so the materializer can run against
/// in-memory fixtures. `list_files` returns entries in lexical path order.
pub trait TemplateSource {
    fn set_names(&self) -> Vec<String>;
    fn list_files(&self, set_id: &str) -> Result<Vec<TemplateEntry>, GenerateError>;
}

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("template set `{set_id}` not found (available: {available})")]
    TemplateNotFound { set_id: String, available: String },

    #[error("template set `{set_id}` contains no files")]
    EmptyTemplateSet { set_id: String },

    /// A template-authoring defect, not a user error.
    #[error("template `{}`: {message}", path.display())]
    Placeholder { path: PathBuf, message: String },

    #[error("filesystem error at `{}`: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Materialize `config` from `source` into the target directory.
///
/// Aborts on the first failing entry; files already written stay on disk
/// (the error names the entry that failed).
pub fn materialize(config: &ProjectConfig, source: &dyn TemplateSource) -> Result<(), GenerateError> {
    if !config.use_current_dir() {
        create_directory(config.target_dir())?;
    }

    let set_id = config.template_set_id();
    let available = source.set_names();
    if !available.iter().any(|name| name == &set_id) {
        return Err(GenerateError::TemplateNotFound {
            set_id,
            available: available.join(", "),
        });
    }

    let entries = source.list_files(&set_id)?;
    if entries.is_empty() {
        return Err(GenerateError::EmptyTemplateSet { set_id });
    }

    let engine = create_liquid_engine();
    let liquid_object = create_liquid_object(config);

    let mp = progressbar::new();
    let spinner_style = progressbar::spinner();
    let total = entries.len().to_string();

    for (progress, entry) in entries.iter().enumerate() {
        let pb = mp.add(ProgressBar::new(50));
        pb.set_style(spinner_style.clone());
        pb.set_prefix(format!(
            "[{:width$}/{}]",
            progress + 1,
            total,
            width = total.len()
        ));
        pb.set_message(format!("Processing: {}", entry.path.display()));

        write_entry(config, &engine, &liquid_object, entry)?;

        pb.finish_with_message(format!("Done: {}", entry.path.display()));
    }

    Ok(())
}

fn write_entry(
    config: &ProjectConfig,
    engine: &Parser,
    liquid_object: &Object,
    entry: &TemplateEntry,
) -> Result<(), GenerateError> {
    let target_path = config.target_dir().join(&entry.path);

    if entry.is_dir {
        return create_directory(&target_path);
    }

    if entry.is_template {
        let content = std::str::from_utf8(&entry.bytes).map_err(|_| GenerateError::Placeholder {
            path: entry.path.clone(),
            message: "template is not valid UTF-8".to_string(),
        })?;
        let rendered =
            render_template(engine, content, liquid_object).map_err(|message| {
                GenerateError::Placeholder {
                    path: entry.path.clone(),
                    message,
                }
            })?;
        let output_path = strip_marker_suffix(&target_path);
        write_file(&output_path, rendered.as_bytes(), config.overwrite())
    } else {
        write_file(&target_path, &entry.bytes, config.overwrite())
    }
}

pub fn create_liquid_engine() -> Parser {
    ParserBuilder::with_stdlib()
        .build()
        .expect("can't fail due to no partials support")
}

/// Placeholder slots exposed to templates, one per config field.
pub fn create_liquid_object(config: &ProjectConfig) -> Object {
    let mut liquid_object = Object::new();
    liquid_object.insert(
        "ProjectName".into(),
        Value::Scalar(config.project_name().to_owned().into()),
    );
    liquid_object.insert(
        "ModuleName".into(),
        Value::Scalar(config.module_name().to_owned().into()),
    );
    liquid_object.insert(
        "AppType".into(),
        Value::Scalar(config.app_type().to_owned().into()),
    );
    liquid_object.insert(
        "Package".into(),
        Value::Scalar(config.package().to_owned().into()),
    );
    liquid_object
}

/// Substitute placeholders, failing closed: a placeholder without a slot in
/// the object is an error, never an empty string.
fn render_template(engine: &Parser, content: &str, object: &Object) -> Result<String, String> {
    let template = engine.parse(content).map_err(|e| e.to_string())?;
    template.render(object).map_err(|e| e.to_string())
}

fn strip_marker_suffix(path: &Path) -> PathBuf {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) if name.ends_with(TEMPLATE_MARKER_SUFFIX) => {
            path.with_file_name(&name[..name.len() - TEMPLATE_MARKER_SUFFIX.len()])
        }
        _ => path.to_path_buf(),
    }
}

/// Idempotent directory creation: an existing directory is success.
fn create_directory(path: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(path).map_err(|source| GenerateError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, bytes: &[u8], overwrite: bool) -> Result<(), GenerateError> {
    if path.exists() && !overwrite {
        return Err(GenerateError::Filesystem {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!(
                    "refusing to overwrite existing file (pass {} to replace it)",
                    style("--overwrite").bold()
                ),
            ),
        });
    }
    if let Some(parent) = path.parent() {
        create_directory(parent)?;
    }
    fs::write(path, bytes).map_err(|source| GenerateError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}
