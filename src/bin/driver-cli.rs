//! `driver-cli`: talk to a running driver-api from the shell.
//!
//! Prints the JSON reply pretty-printed and exits non-zero on any
//! non-2xx status.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "driver-cli")]
#[command(about = "Command-line client for the driver applications API", long_about = None)]
struct Cli {
    #[arg(short, long, env = "DRIVER_API_URL", default_value = "http://localhost:4000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service liveness
    Status,
    /// List submitted applications, newest first
    List,
    /// Submit an application from a JSON file
    Submit {
        /// Path to a JSON object with the application fields
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::Status => client.get(endpoint(&cli.url, "/")).send().await?,
        Commands::List => client.get(endpoint(&cli.url, "/applications")).send().await?,
        Commands::Submit { file } => {
            let body: Value = serde_json::from_str(&std::fs::read_to_string(&file)?)?;
            client
                .post(endpoint(&cli.url, "/applications"))
                .json(&body)
                .send()
                .await?
        }
    };

    print_response(res).await
}

fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    let rendered = match serde_json::from_str::<Value>(&text) {
        Ok(json) => serde_json::to_string_pretty(&json)?,
        Err(_) => text,
    };

    if status.is_success() {
        println!("{}", rendered);
    } else {
        eprintln!("Error: API returned status {}", status);
        eprintln!("{}", rendered);
        std::process::exit(1);
    }
    Ok(())
}
