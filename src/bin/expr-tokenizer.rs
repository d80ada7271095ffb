use clap::Parser;
use expr_tokenizer::{compare::Comparison, config::DemoConfig, tokenize, InternalResult};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expressions to tokenize. Falls back to the config file's list.
    expressions: Vec<String>,

    /// Path to config file
    #[arg(short, long, default_value = "tokenizer.json")]
    config: PathBuf,

    /// Print each comparison as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,
}

fn print_comparison(comparison: &Comparison, json: bool) -> InternalResult<()> {
    if json {
        let out = serde_json::to_string_pretty(comparison).map_err(|e| {
            expr_tokenizer::Error::internal(format!("Failed to serialize result: {}", e))
        })?;
        println!("{}", out);
        return Ok(());
    }

    println!("Input: {}", comparison.expression);
    println!("Quick tokenizer: {:?}", comparison.quick);
    match &comparison.rule {
        Ok(tokens) => {
            let typed: Vec<String> = tokens.iter().map(ToString::to_string).collect();
            println!("Rule tokenizer: [{}]", typed.join(", "));
            println!("Rule tokenizer (values only): {:?}", comparison.rule_values());
        }
        Err(e) => println!("Rule tokenizer failed: {}", e),
    }
    println!("Results match: {}", comparison.matches);
    if !comparison.matches {
        for line in comparison.diff() {
            println!("{}", line);
        }
    }
    println!();
    Ok(())
}

fn run(cli: &Cli) -> InternalResult<()> {
    let config = DemoConfig::load_or_default(&cli.config)?;

    info!("config loaded.");
    debug!("config: {:?}", config);

    let expressions = config.expressions_or_default(&cli.expressions);
    let json = cli.json || config.json;

    for expression in &expressions {
        let comparison = Comparison::run(expression);
        print_comparison(&comparison, json)?;
    }

    println!("Error handling demo:");
    match tokenize(&config.error_demo) {
        Ok(tokens) => println!("Tokenized without error: {} tokens", tokens.len()),
        Err(e) => println!("Caught error: {}", e),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
