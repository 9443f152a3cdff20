pub mod arg_builder;
pub mod prelude;
pub mod project;
