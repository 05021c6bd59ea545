use log::LevelFilter;

/// Installs the process logger. Reads `RUST_LOG`; defaults to `info`.
pub fn init() {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Info);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_err() {
        log::debug!("Logger already installed");
    }
}
