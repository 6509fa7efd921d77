//! Binary entry point.

use std::process;

use gmail_hotkey_sender::cli;

#[tokio::main]
async fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    process::exit(cli::run(&args).await);
}
