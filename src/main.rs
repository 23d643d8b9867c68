//! Interactive translator REPL
//!
//! Line-oriented frontend over the session core: type text to translate
//! it, use slash commands to drive the selectors, swap, and history.

use clap::Parser;
use std::io::{BufRead, Write};
use std::sync::Arc;

use polyglot::gateway::{GoogleTranslateProvider, MockGateway, MockMode, TranslationGateway};
use polyglot::session::{SourceSelection, TranslationController};

#[derive(Parser, Debug)]
#[command(name = "polyglot", about = "Interactive text translator", version)]
struct Args {
    /// Initial target language code
    #[arg(long, default_value = "en")]
    target: String,

    /// Use the offline mock gateway instead of Google Translate
    /// (no API key required; translations are placeholders)
    #[arg(long)]
    mock: bool,
}

const HELP: &str = "\
Commands:
  /source <code>|auto   set the source language
  /target <code>        set the target language
  /swap                 swap source and target, move output to input
  /history              show the last 5 translations
  /help                 show this help
  /quit                 exit
Anything else is translated.";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("warn".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let gateway: Arc<dyn TranslationGateway> = if args.mock {
        Arc::new(MockGateway::new(MockMode::Suffix))
    } else {
        Arc::new(GoogleTranslateProvider::from_env()?)
    };

    let mut session = TranslationController::new(gateway);
    session
        .select_target(&args.target)
        .map_err(|e| format!("--target: {}", e))?;

    println!("polyglot — type text to translate, /help for commands");

    let stdin = std::io::stdin();
    loop {
        print!(
            "[{} → {}] ",
            session.state().source_lang,
            session.state().target_lang
        );
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim_end_matches(['\r', '\n']);

        if let Some(command) = line.strip_prefix('/') {
            if !run_command(&mut session, command) {
                break;
            }
            continue;
        }

        session.edit_input(line);
        match session.translate().await {
            Ok(()) => {
                if !session.state().output_text.is_empty() {
                    if let Some(detected) = &session.state().last_detected_source {
                        println!(
                            "({}) {}",
                            session.catalog().display_name(detected),
                            session.state().output_text
                        );
                    } else {
                        println!("{}", session.state().output_text);
                    }
                }
            }
            Err(err) => eprintln!("Translation failed: {}", err.message()),
        }
    }

    Ok(())
}

/// Handle a slash command; returns false when the loop should exit
fn run_command(session: &mut TranslationController, command: &str) -> bool {
    let mut parts = command.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some("quit"), _) | (Some("exit"), _) => return false,
        (Some("help"), _) => println!("{}", HELP),
        (Some("swap"), _) => {
            session.swap();
            if !session.state().input_text.is_empty() {
                println!("input: {}", session.state().input_text);
            }
        }
        (Some("source"), Some("auto")) => {
            // Always valid for the source side
            let _ = session.select_source(SourceSelection::Auto);
        }
        (Some("source"), Some(code)) => {
            if let Err(err) = session.select_source(SourceSelection::language(code)) {
                eprintln!("{}", err);
            }
        }
        (Some("target"), Some(code)) => {
            if let Err(err) = session.select_target(code) {
                eprintln!("{}", err);
            }
        }
        (Some("history"), _) => {
            let recent = session.state().history.recent();
            if recent.is_empty() {
                println!("No translations yet.");
            }
            for entry in recent {
                println!("{}\n", entry);
            }
        }
        _ => eprintln!("Unknown command. /help for the list."),
    }
    true
}
