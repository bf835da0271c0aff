use clap::Parser;

use crate::commands::greet::{GreetRequest, QuoteStyle};

/// Command-line arguments for the greet CLI.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "greet",
    version,
    about = "A customizable greeter",
    long_about = "A customizable greeter\n\nDemonstrating how a declarative argument parser works"
)]
pub struct Args {
    /// Custom introduction text. Defaults to "Hello"
    #[arg(value_name = "CONTENT")]
    pub content: Vec<String>,

    /// Name to greet. Defaults to "World".
    #[arg(long, value_name = "NAME", num_args = 1..)]
    pub name: Vec<String>,

    /// Add styled quote: wrap the greeting in single quotes
    #[arg(long, conflicts_with = "double_quote")]
    pub single_quote: bool,

    /// Add styled quote: wrap the greeting in double quotes
    #[arg(long)]
    pub double_quote: bool,

    /// Number of exclamation points. Defaults to 1. Max 5.
    #[arg(short, long, value_name = "POINTS", allow_negative_numbers = true)]
    pub points: Option<i64>,
}

impl Args {
    /// Collapses the two quote flags into a single style.
    pub fn quote_style(&self) -> QuoteStyle {
        match (self.single_quote, self.double_quote) {
            (true, _) => QuoteStyle::Single,
            (false, true) => QuoteStyle::Double,
            (false, false) => QuoteStyle::None,
        }
    }

    pub fn request(&self) -> GreetRequest {
        GreetRequest {
            content: self.content.clone(),
            name: self.name.clone(),
            quote_style: self.quote_style(),
            points: self.points,
        }
    }
}
