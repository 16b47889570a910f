use tracing_subscriber::EnvFilter;

/// Install the stderr subscriber. `RUST_LOG` wins over everything;
/// otherwise `-v` means info, `-vv` debug, `-vvv` trace.
pub fn init(config_level: &str, verbose: u8) {
    let level = match verbose {
        0 => config_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
