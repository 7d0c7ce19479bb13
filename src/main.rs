use case_filter::app::{handle_fatal_error, init_logging, AppConfig};
use case_filter::cli::{execute_command, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let app = match AppConfig::new(cli.verbose) {
        Ok(app) => app,
        Err(e) => handle_fatal_error(e, cli.verbose),
    };
    init_logging(&app);

    match execute_command(cli.command, cli.config.as_deref(), &app).await {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => handle_fatal_error(e, cli.verbose),
    }
}
