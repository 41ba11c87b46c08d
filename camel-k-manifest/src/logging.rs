/// Log to stderr so rendered manifests on stdout stay parseable.
pub fn setup_for_cli(env_filter: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(env_filter)
        .without_time()
        .compact()
        .init();
}
