//! Terminal front end for the chat session.
//!
//! Purely a rendering layer: it owns the pending input buffer, redraws
//! from published transcript snapshots, and never mutates the transcript
//! itself.

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use chat_client::{ChatApiClient, ClientConfig};
use chat_core::Role;
use chat_state::{ChatSession, TranscriptSnapshot, TransitionError};
use clap::Parser;
use tokio::io::AsyncBufReadExt;

#[derive(Parser)]
#[command(name = "chat-cli")]
#[command(about = "Terminal client for the chat relay")]
#[command(version)]
struct Cli {
    /// Base URL of the chat relay
    #[arg(long, default_value = "http://localhost:8080")]
    server_url: String,

    /// Whole-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = ClientConfig {
        base_url: cli.server_url,
        timeout: Duration::from_secs(cli.timeout_secs),
    };
    let transport = Arc::new(ChatApiClient::new(config)?);
    let mut session = ChatSession::new(transport);

    // Redraw on every published snapshot.
    let mut snapshots = session.subscribe();
    tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow_and_update().clone();
            render(&snapshot);
        }
    });

    println!("Chat ready. Type a message and press Enter (Ctrl-D to quit).");
    print_prompt();

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match session.submit(&line).await {
            Ok(()) => {}
            Err(TransitionError::EmptyMessage) => println!("(nothing to send)"),
            Err(err) => println!("({err})"),
        }
        print_prompt();
    }

    println!();
    Ok(())
}

fn render(snapshot: &TranscriptSnapshot) {
    if snapshot.loading {
        println!("AI is typing...");
        return;
    }
    if let Some(last) = snapshot.messages.last() {
        if last.role() == Role::Assistant {
            println!("assistant: {}", last.content());
        }
    }
}

fn print_prompt() {
    print!("> ");
    io::stdout().flush().ok();
}
