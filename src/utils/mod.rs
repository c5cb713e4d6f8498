/// Installs the global tracing subscriber with sensible defaults; guarded
/// by the `Once` in [`crate::init`].
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("stipend_core=info"));

    fmt().with_env_filter(filter).init();
}
