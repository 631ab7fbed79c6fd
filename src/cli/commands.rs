use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cryptochat", about = "Conversational crypto market assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Answer a single message
    Ask {
        /// The question, e.g. "price of bitcoin"
        message: String,
    },
    /// Interactive session over stdin (type `exit` or `quit` to leave)
    Chat,
    /// Print the intent a message classifies as
    Classify { message: String },
    /// Look up a glossary term
    Learn { term: String },
    /// Search research reports, or list them all without a query
    Reports { query: Option<String> },
    /// Top gainers and losers by 24h change
    Movers {
        #[arg(long, default_value = "5")]
        count: usize,
    },
}
