mod bootstrap;

use anyhow::Result;
use bikeshare_core::settings::Settings;
use bikeshare_ui::session::run_session;
use clap::Parser;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level(), settings.log_file.as_ref())?;

    tracing::info!("Bikeshare explorer v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("Data directory: {}", settings.data_dir.display());

    bootstrap::ensure_data_dir(&settings.data_dir)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    run_session(&mut input, &mut output, &settings.data_dir)?;

    Ok(())
}
