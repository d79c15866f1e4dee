use crate::core::domain::Configuration;

// logs go to stderr as json lines so the menus on stdout stay readable
pub fn setup_tracing(config: &Configuration) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .with_writer(std::io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        .json()
        .try_init();
}
