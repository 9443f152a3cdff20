use anyhow::{bail, Result};
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

pub const PROJECT_MARKER_FILE_NAME: &str = ".gostart.toml";

/// Finished configuration handed to the materializer. Built once at the
/// summary confirmation, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    project_name: String,
    module_name: String,
    app_type: String,
    package: String,
    target_dir: PathBuf,
    use_current_dir: bool,
    overwrite: bool,
}

impl ProjectConfig {
    /// Derive the configuration from the wizard selections. The `.` sentinel
    /// generates in place and takes the project name from the base
    /// directory's own name.
    pub fn from_selections(
        name: &str,
        app_type: &str,
        package: &str,
        base: &Path,
        overwrite: bool,
    ) -> Result<Self> {
        let (project_name, target_dir, use_current_dir) = if name == "." {
            (current_dir_name(base)?, base.to_path_buf(), true)
        } else {
            (name.to_string(), base.join(name), false)
        };

        Ok(Self {
            module_name: project_name.clone(),
            project_name,
            app_type: app_type.to_string(),
            package: package.to_string(),
            target_dir,
            use_current_dir,
            overwrite,
        })
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn app_type(&self) -> &str {
        &self.app_type
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn target_dir(&self) -> &Path {
        self.target_dir.as_path()
    }

    pub const fn use_current_dir(&self) -> bool {
        self.use_current_dir
    }

    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Template set identifier, `{app_type}-{package}`.
    pub fn template_set_id(&self) -> String {
        format!("{}-{}", self.app_type, self.package)
    }
}

/// Base name of `path`, used as the project name for in-place generation.
/// Fails when the path has no meaningful name (filesystem root).
pub fn current_dir_name(path: &Path) -> Result<String> {
    match path.file_name().and_then(|name| name.to_str()) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => bail!("cannot determine a project name from `{}`", path.display()),
    }
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Default, Clone)]
pub struct ProjectMarker {
    pub project: Option<HashMap<String, toml::Value>>,
}

impl TryFrom<String> for ProjectMarker {
    type Error = toml::de::Error;

    fn try_from(contents: String) -> Result<Self, Self::Error> {
        let marker: Self = toml::from_str(&contents)?;
        Ok(marker)
    }
}

impl ProjectMarker {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let marker = match fs::read_to_string(path) {
            Ok(contents) => Self::try_from(contents)?,
            Err(e) => match e.kind() {
                ErrorKind::NotFound => Self::default(),
                _ => anyhow::bail!(e),
            },
        };
        Ok(marker)
    }
}

/// Look for a project marker file in the current directory or any parent.
pub fn check_marker_file() -> Result<PathBuf> {
    let mut search_path = env::current_dir()?;
    loop {
        let marker_file = search_path.join(PROJECT_MARKER_FILE_NAME);
        if marker_file.exists() {
            return Ok(marker_file);
        }
        if let Some(path) = search_path.parent() {
            search_path = path.to_path_buf();
        } else {
            break;
        }
    }
    bail!("Project marker file not found!");
}

/// Record what was generated into the target directory.
pub fn write_project_marker(config: &ProjectConfig) -> Result<()> {
    let marker = ProjectMarker {
        project: Some(HashMap::from([
            (
                "project_name".to_string(),
                toml::Value::String(config.project_name().to_string()),
            ),
            (
                "app_type".to_string(),
                toml::Value::String(config.app_type().to_string()),
            ),
            (
                "package".to_string(),
                toml::Value::String(config.package().to_string()),
            ),
        ])),
    };
    let marker_file = config.target_dir().join(PROJECT_MARKER_FILE_NAME);
    let toml_string = toml::to_string(&marker)?;
    fs::write(marker_file, toml_string)?;
    Ok(())
}
