pub use super::arg_builder::{binary, ArgBuilderExt};
pub use super::project::{tempdir, Project};

pub use assert_cmd::prelude::*;
pub use predicates::prelude::*;
