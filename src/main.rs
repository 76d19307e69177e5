use clap::Parser;
use roi::cli::{Cli, Command, run_project};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    roi::logging::init_logger(cli.verbose);

    match cli.command {
        Command::Serve { port } => {
            if let Err(e) = roi::api::run_http_server(port).await {
                tracing::error!(error = %e, "server stopped");
                eprintln!("Server error: {e}");
                std::process::exit(1);
            }
        }
        Command::Project(args) => match run_project(&args) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(error = %e, "projection failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        },
    }
}
