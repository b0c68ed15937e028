use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive, e.g. `debug`.
pub const LOG_ENV: &str = "WEB_ENCODER_LOG";

pub fn setup_logging(verbose: u8) {
    let dirs = match verbose {
        0 => "warn",
        1 => "warn,web_encoder=debug",
        _ => "warn,web_encoder=trace",
    };

    let main_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(dirs)))
        .with(main_layer)
        .init()
}
