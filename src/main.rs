use anyhow::Context;
use clap::Parser;
use postboard::cli::{run_command, Cli};
use postboard::logging::init_tracing;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.load_config()?;
    tracing::info!(base_url = %config.api.base_url, "starting");

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    match cli.command {
        Some(command) => {
            let mut stdout = std::io::stdout().lock();
            runtime.block_on(run_command(&config, command, &mut stdout))
        }
        None => postboard::ui::run(&config, runtime.handle()).context("Terminal UI failed"),
    }
}
