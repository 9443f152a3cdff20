use assert_cmd::Command;
use std::path::Path;

pub fn binary() -> Command {
    Command::cargo_bin("gostart").unwrap()
}

/// Flag shorthands: `binary().arg_name("demo").arg_silent()...`
pub trait ArgBuilderExt {
    fn arg_name(&mut self, name: &str) -> &mut Self;
    fn arg_app_type(&mut self, app_type: &str) -> &mut Self;
    fn arg_package(&mut self, package: &str) -> &mut Self;
    fn arg_destination(&mut self, path: &Path) -> &mut Self;
    fn arg_silent(&mut self) -> &mut Self;
    fn arg_overwrite(&mut self) -> &mut Self;
}

impl ArgBuilderExt for Command {
    fn arg_name(&mut self, name: &str) -> &mut Self {
        self.arg("--name").arg(name)
    }

    fn arg_app_type(&mut self, app_type: &str) -> &mut Self {
        self.arg("--app-type").arg(app_type)
    }

    fn arg_package(&mut self, package: &str) -> &mut Self {
        self.arg("--package").arg(package)
    }

    fn arg_destination(&mut self, path: &Path) -> &mut Self {
        self.arg("--destination").arg(path)
    }

    fn arg_silent(&mut self) -> &mut Self {
        self.arg("--silent")
    }

    fn arg_overwrite(&mut self) -> &mut Self {
        self.arg("--overwrite")
    }
}
