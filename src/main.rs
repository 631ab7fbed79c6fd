use clap::Parser;
use cryptochat::cli::commands::{Cli, Commands};
use cryptochat::config::ChatConfig;
use cryptochat::domain::entities::market::MarketCoin;
use cryptochat::CryptoChat;
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();
    let cli = Cli::parse();

    let chat = match ChatConfig::from_env().and_then(CryptoChat::new) {
        Ok(chat) => chat,
        Err(e) => {
            eprintln!("Error initializing cryptochat: {e}");
            std::process::exit(1);
        }
    };

    let result = run_command(chat, cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("CRYPTOCHAT_LOG"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_command(chat: CryptoChat, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Ask { message } => {
            println!("{}", chat.ask(&message).await);
        }
        Commands::Chat => repl(&chat).await?,
        Commands::Classify { message } => {
            let c = chat.classify(&message);
            match c.matched {
                Some(m) => println!("{} (matched \"{m}\")", c.intent),
                None => println!("{}", c.intent),
            }
        }
        Commands::Learn { term } => {
            let entries = chat.search_education(&term);
            if entries.is_empty() {
                println!("No glossary entry for \"{term}\"");
            }
            for e in entries {
                println!("{}\n  {}\n", e.term, e.answer);
            }
        }
        Commands::Reports { query } => match query {
            Some(q) => {
                let hits = chat.search_reports(&q);
                if hits.is_empty() {
                    println!("No reports match \"{q}\"");
                }
                for hit in hits {
                    let r = &hit.report;
                    println!("[{}] {} ({}, {}) {}", hit.score, r.title, r.date, r.report_type, r.id);
                }
            }
            None => {
                for r in chat.reports() {
                    println!("{} ({}, {}) {}", r.title, r.date, r.report_type, r.id);
                }
            }
        },
        Commands::Movers { count } => {
            let movers = chat.movers(count).await?;
            println!("Gainers:");
            for coin in &movers.gainers {
                println!("{}", mover_line(coin));
            }
            println!("Losers:");
            for coin in &movers.losers {
                println!("{}", mover_line(coin));
            }
        }
    }
    Ok(())
}

async fn repl(chat: &CryptoChat) -> std::io::Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if matches!(message.to_lowercase().as_str(), "exit" | "quit") {
            break;
        }
        println!("{}\n", chat.ask(message).await);
    }
    Ok(())
}

fn mover_line(coin: &MarketCoin) -> String {
    format!(
        "  {:<20} {:>6} {:+.2}%",
        coin.name,
        coin.symbol.to_uppercase(),
        coin.change_24h()
    )
}
