//! Input from user but after parse

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::args::AppArgs;
use crate::wizard;

/// Contains parsed information from user, with defaults applied.
#[derive(Debug)]
pub struct UserParsedInput {
    name: Option<String>,
    app_type: String,
    package: String,
    destination: PathBuf,
    overwrite: bool,
    silent: bool,
    verbose: bool,
}

impl UserParsedInput {
    pub fn try_from_args(args: &AppArgs) -> Self {
        let destination = args
            .destination
            .clone()
            .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| ".".into()));

        Self {
            name: args.name.clone(),
            app_type: args
                .app_type
                .clone()
                .unwrap_or_else(|| wizard::APP_TYPES[0].to_string()),
            package: args
                .package
                .clone()
                .unwrap_or_else(|| wizard::PACKAGES[0].to_string()),
            destination,
            overwrite: args.overwrite,
            silent: args.silent,
            verbose: args.verbose,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn app_type(&self) -> &str {
        &self.app_type
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn destination(&self) -> &Path {
        self.destination.as_path()
    }

    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub const fn is_silent(&self) -> bool {
        self.silent
    }

    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }
}
