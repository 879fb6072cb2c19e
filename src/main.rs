//! Mnemo CLI entry point.
//!
//! `mnemo` starts the interactive chat session; `mnemo memories` prints the
//! current store without calling the model.

use clap::{Parser, Subcommand};
use mnemo::{
    prompt::build_system_prompt, Agent, ChatMessage, Config, MemoryStore, OpenAIClient, Result,
};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "mnemo")]
#[command(author, version, about = "Mnemo - a terminal chat agent that remembers")]
struct Cli {
    /// Memory store file (overrides MNEMO_MEMORY_FILE)
    #[arg(short = 'f', long, global = true)]
    memory_file: Option<PathBuf>,

    /// Model to use (overrides MNEMO_MODEL)
    #[arg(short, long, global = true)]
    model: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive chat session (same as running without subcommand)
    Chat,

    /// Print the stored memories and exit
    Memories,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Memories) => {
            // The store subcommand has no use for a credential.
            dotenvy::dotenv().ok();
            let memory_file = cli
                .memory_file
                .or_else(|| std::env::var("MNEMO_MEMORY_FILE").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(mnemo::config::DEFAULT_MEMORY_FILE));
            run_memories(MemoryStore::new(memory_file)).await
        }
        None | Some(Commands::Chat) => {
            let mut config = Config::from_env()?;
            if let Some(memory_file) = cli.memory_file {
                config.memory_file = memory_file;
            }
            if let Some(model) = cli.model {
                config.model = model;
            }
            run_chat(config).await
        }
    }
}

/// Print the store, one memory per line.
async fn run_memories(store: MemoryStore) -> Result<()> {
    let memories = store.load().await?;
    if memories.is_empty() {
        println!("{}", "(no memories yet)".dimmed());
        return Ok(());
    }
    for memory in &memories {
        println!("{} {}", "-".dimmed(), memory);
    }
    Ok(())
}

/// Interactive chat session.
///
/// The session owns the message history; the system message is rebuilt from
/// the store before every call so the model always sees current memories.
async fn run_chat(config: Config) -> Result<()> {
    let store = MemoryStore::new(&config.memory_file);
    let client = OpenAIClient::new(
        config.api_key.clone(),
        config.api_base.clone(),
        config.model.clone(),
    );
    let agent = Agent::with_save_memory(Box::new(client), store.clone());

    let greeting = "How can I help you?";
    let mut history = vec![
        ChatMessage::system(build_system_prompt("", &store.load().await?)),
        ChatMessage::assistant(greeting),
    ];

    println!("{}", "Mnemo - a chat agent that remembers".green().bold());
    println!("Type 'quit' or 'exit' to quit");
    println!("{}", "---".dimmed());
    println!("{} {}", "mnemo>".cyan().bold(), greeting);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    loop {
        print!("{} ", "you>".yellow().bold());
        stdout.flush().ok();

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            break;
        }
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        history[0] = ChatMessage::system(build_system_prompt(line, &store.load().await?));
        history.push(ChatMessage::user(line));

        match agent.respond(&history).await {
            Ok(reply) => {
                println!("{} {}", "mnemo>".cyan().bold(), reply);
                history.push(ChatMessage::assistant(reply));
            }
            Err(e) => {
                // A faulted turn leaves the transcript unchanged.
                history.pop();
                eprintln!("{} {}", "Error:".red().bold(), e);
            }
        }
    }

    Ok(())
}
