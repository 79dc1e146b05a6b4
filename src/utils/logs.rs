// structured JSON logs, one object per line
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // ANSI color codes would end up verbatim in collected logs.
        .with_ansi(false)
        // the log collector stamps the ingestion time.
        .without_time()
        .json()
        .init();
}
