use anyhow::Context;
use tearoom::{
    logging::{init_logging, LoggingConfig},
    AppConfig, TearoomApp,
};

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let config = AppConfig::from_env();
    log::info!(
        "starting {} ({}x{}), textures from {}",
        config.title,
        config.width,
        config.height,
        config.texture_dir.display()
    );

    TearoomApp::new(config)
        .context("failed to initialise the application")?
        .run()
        .context("application exited with an error")
}
