use clap::Parser;

use crate::gmail_api::auth::TOKEN_FILE;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Delete the persisted OAuth token cache and exit. The next run will
    /// go through the browser authorization flow again.
    #[clap(long)]
    pub reset_token: bool,
}

pub fn handle_token_reset() -> Result<(), Box<dyn std::error::Error>> {
    match std::fs::remove_file(TOKEN_FILE) {
        Ok(()) => println!("Removed {}. Exiting.", TOKEN_FILE),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("No token cache at {}; nothing to do.", TOKEN_FILE);
        }
        Err(e) => return Err(format!("Failed to remove {}: {}", TOKEN_FILE, e).into()),
    }
    Ok(())
}
