use owo_colors::{OwoColorize, Stream::Stdout};

/// Padded and colored tag for a log level
fn level_tag(level: log::Level) -> String {
    let tag = match level {
        log::Level::Error => "ERROR".if_supports_color(Stdout, |text| text.red()).to_string(),
        log::Level::Warn => "WARN ".if_supports_color(Stdout, |text| text.yellow()).to_string(),
        log::Level::Info => "INFO ".if_supports_color(Stdout, |text| text.green()).to_string(),
        log::Level::Debug => "DEBUG"
            .if_supports_color(Stdout, |text| text.bright_blue())
            .to_string(),
        log::Level::Trace => "TRACE"
            .if_supports_color(Stdout, |text| text.bright_white())
            .to_string(),
    };
    tag.if_supports_color(Stdout, |text| text.bold()).to_string()
}

/// Enable the logger.
///
/// `PAIRMAP_TRACE` in the environment turns on trace output from the library.
pub fn enable_logger(verbose: bool) -> Result<(), log::SetLoggerError> {
    let level = match (std::env::var_os("PAIRMAP_TRACE"), verbose) {
        (Some(_), _) => log::LevelFilter::Trace,
        (None, true) => log::LevelFilter::Debug,
        (None, false) => log::LevelFilter::Info,
    };

    fern::Dispatch::new()
        .format(move |out, message, record| {
            // Name the emitting crate when verbose
            let origin = match verbose {
                true => format!(" [{}]", record.target().split("::").next().unwrap_or_default()),
                false => String::new(),
            };
            out.finish(format_args!(
                "{}{}: {}",
                level_tag(record.level()),
                origin.if_supports_color(Stdout, |text| text.bright_black()),
                message
            ));
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
}
