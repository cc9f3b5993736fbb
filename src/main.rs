use std::process::ExitCode;

use clap::Parser;

use mailsweep::cli::{handle_token_reset, Cli};
use mailsweep::gmail_api::authenticate;
use mailsweep::menu::run_menu;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.reset_token {
        if let Err(e) = handle_token_reset() {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    }

    println!("Authenticating with Gmail...");
    let client = match authenticate().await {
        Ok(client) => client,
        Err(e) => {
            // No credential means nothing below can run.
            eprintln!("Authentication failed: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    if let Err(e) = run_menu(&client, &mut input, &mut out).await {
        eprintln!("I/O error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
