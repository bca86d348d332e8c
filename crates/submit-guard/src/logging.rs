use tracing_subscriber::EnvFilter;

pub fn init(log_level: &str) {
    // RUST_LOG wins when set; otherwise --log-level applies to this crate and
    // everything else stays at warn.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,submit_guard={log_level}")));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
