use heartfetch::{collect_info_lines, config::load_config, display::render_output};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_env("HEARTFETCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let config = load_config();
    debug!(?config, "loaded config");

    let info = collect_info_lines(&config);
    if let Err(error) = render_output(&config, &info) {
        // Usually a closed pipe; the exit status stays 0 either way
        debug!(%error, "failed to write output");
    }
}
