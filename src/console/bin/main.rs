use libsys::console;
use libsys::core::domain::Configuration;
use libsys::core::library::LibraryError;
use libsys::utils::trace::setup_tracing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), LibraryError> {
    let config = Configuration::from_env();
    setup_tracing(&config);
    console::start(config).await
}
