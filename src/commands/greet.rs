use crate::error::{CommandResult, GreetError};

pub const DEFAULT_GREETING: &str = "Hello";
pub const DEFAULT_NAME: &str = "World";
pub const MAX_POINTS: i64 = 5;

/// Character wrapped around the whole greeting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteStyle {
    #[default]
    None,
    Single,
    Double,
}

impl QuoteStyle {
    pub fn mark(self) -> &'static str {
        match self {
            QuoteStyle::None => "",
            QuoteStyle::Single => "'",
            QuoteStyle::Double => "\"",
        }
    }
}

/// Inputs for a single greeting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetRequest {
    pub content: Vec<String>,
    pub name: Vec<String>,
    pub quote_style: QuoteStyle,
    pub points: Option<i64>,
}

/// Validates the request and renders the greeting line.
pub fn message(request: &GreetRequest) -> CommandResult<String> {
    let points = validate_points(request.points)?;

    let quote = request.quote_style.mark();
    let greet_output = join_or(&request.content, DEFAULT_GREETING);
    let name_output = join_or(&request.name, DEFAULT_NAME);

    tracing::debug!(
        greeting = %greet_output,
        name = %name_output,
        points,
        quote_style = ?request.quote_style,
        "rendering greeting"
    );

    Ok(format!(
        "{quote}{greet_output} {name_output}{}{quote}",
        "!".repeat(points)
    ))
}

fn validate_points(points: Option<i64>) -> CommandResult<usize> {
    match points {
        None => Ok(1),
        Some(n) if n <= 0 => {
            tracing::debug!(points = n, "rejecting non-positive point count");
            Err(GreetError::NonPositivePoints)
        }
        Some(n) if n > MAX_POINTS => {
            tracing::debug!(points = n, max = MAX_POINTS, "rejecting point count");
            Err(GreetError::TooManyPoints)
        }
        // 1..=MAX_POINTS always fits
        Some(n) => Ok(n as usize),
    }
}

fn join_or(words: &[String], fallback: &str) -> String {
    let joined = words.join(" ");
    if joined.is_empty() {
        fallback.to_string()
    } else {
        joined
    }
}
