use crate::helpers::prelude::*;
use indoc::indoc;

#[test]
fn it_need_input_projectname() {
    let dir = tempdir();

    binary()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not a terminal").from_utf8());
}

#[test]
fn it_can_generate_in_silent_mode() {
    let dir = tempdir();

    binary()
        .arg_name("foobar-project")
        .arg_silent()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Done").from_utf8());

    assert_eq!(
        dir.read("foobar-project/go.mod"),
        indoc! {r"
            module foobar-project

            go 1.22
        "}
    );
    assert!(dir.exists("foobar-project/cmd/api/main.go"));
    assert!(dir.exists("foobar-project/Makefile"));
    assert!(!dir.exists("foobar-project/Makefile.tmpl"));
    assert!(dir.exists("foobar-project/.gostart.toml"));
    assert!(dir
        .read("foobar-project/README.md")
        .contains("# foobar-project"));
}

#[test]
fn it_echoes_the_configuration_after_generation() {
    let dir = tempdir();

    binary()
        .arg_name("foobar-project")
        .arg_silent()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains("Name: foobar-project")
                .from_utf8()
                .and(predicates::str::contains("Type: web-api").from_utf8())
                .and(predicates::str::contains("Package: stdlib").from_utf8()),
        );
}

#[test]
fn it_rejects_an_invalid_project_name() {
    let dir = tempdir();

    binary()
        .arg_name("foo/bar")
        .arg_silent()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("letters, numbers").from_utf8());

    assert!(!dir.exists("foo"));
}

#[test]
fn it_fails_on_an_unknown_template_set() {
    let dir = tempdir();

    binary()
        .arg_name("demo")
        .arg_app_type("grpc")
        .arg_silent()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("not found").from_utf8());

    assert!(!dir.exists("demo/go.mod"));
}

#[test]
fn it_generates_in_place_with_the_dot_sentinel() {
    let dir = tempdir();
    let sandbox = dir.subdir("sandbox");

    binary()
        .arg_name(".")
        .arg_silent()
        .current_dir(&sandbox)
        .assert()
        .success()
        .stdout(predicates::str::contains("Done").from_utf8());

    assert!(dir.exists("sandbox/cmd/api/main.go"));
    assert!(dir.read("sandbox/go.mod").contains("module sandbox"));
    assert!(dir.read("sandbox/.gostart.toml").contains("sandbox"));
}

#[test]
fn it_honors_an_explicit_destination() {
    let dir = tempdir();
    let base = dir.subdir("workspace");

    binary()
        .arg_name("demo")
        .arg_destination(&base)
        .arg_silent()
        .assert()
        .success();

    assert!(dir.exists("workspace/demo/go.mod"));
}

#[test]
fn it_refuses_to_overwrite_existing_files() {
    let dir = tempdir();

    binary()
        .arg_name("foobar-project")
        .arg_silent()
        .current_dir(dir.path())
        .assert()
        .success();

    binary()
        .arg_name("foobar-project")
        .arg_silent()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("refusing to overwrite").from_utf8());
}

#[test]
fn it_overwrites_with_the_flag() {
    let dir = tempdir();

    binary()
        .arg_name("foobar-project")
        .arg_silent()
        .current_dir(dir.path())
        .assert()
        .success();

    binary()
        .arg_name("foobar-project")
        .arg_silent()
        .arg_overwrite()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Done").from_utf8());

    assert!(dir.read("foobar-project/go.mod").contains("foobar-project"));
}

#[test]
fn it_rejects_an_unknown_package_flavor() {
    let dir = tempdir();

    binary()
        .arg_name("demo")
        .arg_package("gin")
        .arg_silent()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicates::str::contains("web-api-gin").from_utf8());
}
