use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes console logging. `RUST_LOG` overrides the default level.
pub fn init_logging() {
    let console_layer = fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("fdo2rdf=info".parse().unwrap()))
        .with(console_layer)
        .init();
}
