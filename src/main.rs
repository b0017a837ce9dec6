use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use keycalc::calculator::{Calculator, Token};
use keycalc::config::Config;
use keycalc::repl::Repl;

/// Keystroke-driven four-function calculator.
///
/// With no KEYS, starts an interactive session reading one line at a time.
/// With KEYS, presses them in order and prints the final display.
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Keys to press, e.g. `5 + 3 =` (use `+/-` or `neg` to toggle sign)
    #[arg(value_name = "KEYS", allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Config file (default: <config dir>/keycalc/config.toml)
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the display after every key instead of only at the end
    #[arg(long)]
    each: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("keycalc={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let calculator = Calculator::with_config(config.calculator.clone());

    if cli.keys.is_empty() {
        tracing::info!("starting interactive session");
        let mut repl = Repl::new(calculator, config.repl);
        repl.run(io::stdin().lock(), io::stdout().lock())
            .context("Interactive session failed")?;
        return Ok(());
    }

    run_keys(calculator, &cli.keys, cli.each, config.repl.show_operator)
}

fn run_keys(
    mut calculator: Calculator,
    keys: &[String],
    each: bool,
    show_operator: bool,
) -> anyhow::Result<()> {
    let mut tokens = Vec::new();
    for key in keys {
        let parsed: Vec<Token> = match key.parse::<Token>() {
            Ok(token) => vec![token],
            Err(_) => keycalc::calculator::tokenize(key)
                .with_context(|| format!("Invalid key {key:?}"))?,
        };
        tokens.extend(parsed);
    }

    let render = |calculator: &Calculator| {
        let snapshot = calculator.display();
        if show_operator {
            snapshot.render()
        } else {
            snapshot.text
        }
    };

    for token in tokens {
        calculator.press(token);
        if each {
            println!("{:>4}  {}", token.to_string(), render(&calculator));
        }
    }
    if !each {
        println!("{}", render(&calculator));
    }

    Ok(())
}
