use crate::helpers::prelude::*;

#[test]
fn it_lists_the_embedded_template_sets() {
    binary()
        .arg("--list-templates")
        .assert()
        .success()
        .stdout(predicates::str::contains("web-api-stdlib").from_utf8());
}
