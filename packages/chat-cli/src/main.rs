//! Terminal chat front-end for the health responder.
//!
//! Stands in for the original desktop widget tree: a two-styled
//! transcript, a single input affordance, and fully synchronous turn
//! processing.

use anyhow::{Context, Result};
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Input};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use responder::{
    empathy_prefix, Corpus, HashedEmbedder, LexiconSentiment, Responder, SentimentAnalyzer,
    WordTokenizer,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,responder=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let term = Term::stdout();
    print_banner(&term)?;

    tracing::info!("embedding corpus questions");
    let responder = Responder::new(Corpus::health(), HashedEmbedder::default(), WordTokenizer)
        .await
        .context("Failed to build responder")?;
    let sentiment = LexiconSentiment::new();

    println!(
        "{}",
        "Ask a health question, or type 'exit' to leave.".dimmed()
    );

    loop {
        println!();
        let user_text: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("You")
            .allow_empty(true)
            .interact_text_on(&term)?;

        let user_text = user_text.trim();
        // Empty input is a no-op turn, matching the send-button behavior.
        if user_text.is_empty() {
            continue;
        }
        if user_text.eq_ignore_ascii_case("exit") || user_text.eq_ignore_ascii_case("quit") {
            println!("{}", "Take care!".bright_blue());
            break;
        }

        let mut reply = responder.respond(user_text).await;
        if let Some(prefix) = empathy_prefix(sentiment.polarity(user_text)) {
            reply = format!("{prefix}{reply}");
        }

        println!(
            "{} {}",
            "Health Bot:".bright_blue().bold(),
            reply.bright_blue()
        );
    }

    Ok(())
}

fn print_banner(term: &Term) -> Result<()> {
    term.clear_screen()?;
    println!(
        "{}",
        "╔════════════════════════════════════════╗".bright_cyan()
    );
    println!(
        "{}",
        "║           Health Companion             ║".bright_cyan()
    );
    println!(
        "{}",
        "╚════════════════════════════════════════╝".bright_cyan()
    );
    println!();
    Ok(())
}
