use env_logger::fmt::Formatter;
use log::Record;
use std::io::Write;

/// Initialize the logger: bare messages on stdout, emoji markers for
/// warnings and errors, overridable through `RUST_LOG`.
pub fn log_env_init() {
    env_logger::builder()
        .format(log_formatter)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .format_module_path(false)
        .format_level(false)
        .target(env_logger::Target::Stdout)
        .init();
}

fn log_formatter(buf: &mut Formatter, record: &Record) -> std::result::Result<(), std::io::Error> {
    let prefix = match record.level() {
        log::Level::Error => "⛔ ",
        log::Level::Warn => "⚠️ ",
        _ => "",
    };
    writeln!(buf, "{}{}", prefix, record.args())
}
