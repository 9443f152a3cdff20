use indicatif::{MultiProgress, ProgressStyle};

pub fn new() -> MultiProgress {
    MultiProgress::new()
}

/// Spinner style used while processing template entries.
pub fn spinner() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:.bold.dim} {spinner} {wide_msg}")
        .expect("spinner template is valid")
        .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
}
