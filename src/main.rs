use anyhow::Result;
use clap::Parser;
use log::debug;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Upper bound of the sequence (inclusive)
    ///
    /// A non-positive bound yields an empty sequence, printed as an
    /// empty line.
    #[arg(default_value_t = 100, allow_negative_numbers = true)]
    bound: i64,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    debug!("CLI: {:?}", cli);

    let tokens = sequence_tokens(cli.bound);
    debug!("Tokens: {}", tokens.len());

    println!("{}", tokens.join(", "));

    Ok(())
}

/// Produce one token per integer in `1..=bound`, in numeric order.
fn sequence_tokens(bound: i64) -> Vec<String> {
    let mut tokens = Vec::new();
    for number in 1..=bound {
        tokens.push(token_for(number));
    }
    tokens
}

// Rule tokens accumulate rather than exclude each other, and 3 is
// checked before 5, so 15 renders as "fizz buzz"
fn token_for(number: i64) -> String {
    let mut parts = Vec::new();
    if is_divisible(number, 3) {
        parts.push("fizz".to_string());
    }
    if is_divisible(number, 5) {
        parts.push("buzz".to_string());
    }
    if parts.is_empty() {
        parts.push(number.to_string());
    }
    parts.join(" ")
}

fn is_divisible(number: i64, divisor: i64) -> bool {
    number % divisor == 0
}
