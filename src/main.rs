use clap::Parser;
use gscloud::cli::dispatcher::Dispatcher;
use gscloud::cli::main_types::Cli;
use gscloud::utils::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dispatcher = Dispatcher::from_cli(&cli);
    let mut stdout = std::io::stdout();

    if let Err(e) = dispatcher.dispatch(cli.command, &mut stdout).await {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("Hint: {}", hint);
        }
        std::process::exit(1);
    }
}
