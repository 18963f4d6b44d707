//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::form::dispatch::HttpDispatcher;
use crate::form::QuestionForm;
use crate::server::app::serve;
use clap::Parser;
use std::io;

/// Port used when neither `--port` nor the `PORT` env var is set.
const DEFAULT_PORT: u16 = 5000;

/// Recapp serves and submits question records.
/// Run `serve` to start the API, or `submit` to send a
/// question to a running instance.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Recapp cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Run the question service
    Serve {
        /// Port on which to serve the API.
        /// Falls back to the PORT env var, then 5000.
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Submit a question to a running question service
    Submit {
        /// Name of the submitter.
        #[arg(long)]
        name: String,
        /// Free-text body of the question.
        #[arg(long)]
        text: String,
        /// Link to the repository the question is about.
        #[arg(long)]
        repo: String,
        /// Link to a live demo.
        #[arg(long)]
        live: String,
        /// Base URL of the service to submit to.
        #[arg(long, default_value_t = String::from("http://127.0.0.1:5000"))]
        service_url: String,
    },
}

///
fn init_tracing() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();
}

/// Resolve the port to serve on: flag, then `PORT` env var, then 5000.
fn resolve_port(flag: Option<u16>) -> u16 {
    flag.or_else(|| {
        std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse().ok())
    })
    .unwrap_or(DEFAULT_PORT)
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind its port or the submission cannot be
/// serialized for printing.
pub fn run() -> io::Result<()> {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();

    match cli.subcommands {
        Subcommands::Serve { port } => serve(resolve_port(port)),
        Subcommands::Submit {
            name,
            text,
            repo,
            live,
            service_url,
        } => submit(&name, &text, &repo, &live, &service_url),
    }
}

/// Fill a submission form from the CLI arguments and post it.
#[actix_web::main]
async fn submit(
    name: &str,
    text: &str,
    repo: &str,
    live: &str,
    service_url: &str,
) -> io::Result<()> {
    let mut form = QuestionForm::new();
    form.set_name(name);
    form.set_text(text);
    form.set_repo(repo);
    form.set_live(live);

    let dispatcher = HttpDispatcher::new(service_url);
    match dispatcher.submit_question(&form.question()).await {
        Ok(stored) => {
            let rendered = serde_json::to_string_pretty(&stored).map_err(io::Error::other)?;
            println!("{rendered}");
            Ok(())
        }
        Err(err) => {
            tracing::error!("error: could not submit question to '{service_url}'.");
            tracing::error!("Error: {:?}", err);
            std::process::exit(1);
        }
    }
}
