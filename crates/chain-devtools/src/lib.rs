// chain-devtools/src/lib.rs
pub mod config;

pub use config::ServerConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Logs go to stderr so stdout only carries
/// the messages meant for the user.
pub fn init_tracing(debug: bool) {
    let log_level = if debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{},hyper=warn", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
