use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};

use surtr_lex::{LexError, Lexer, Token, TokenKind, dump, logging};

#[derive(Parser, Debug)]
#[command(name = "surtr-lex", about = "Tokenize Surtr script and configuration files")]
struct Cli {
    /// Source file to tokenize
    file: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    format: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Run the lexer until a terminal token or error, keeping what was produced.
fn lex_source(source: &str) -> (Vec<Token>, Option<LexError>) {
    let mut tokens = Vec::new();
    for result in Lexer::new(source).tokens() {
        match result {
            Ok(token) if token.kind == TokenKind::Error => {
                let err = LexError::from_error_token(&token, source);
                tokens.push(token);
                return (tokens, Some(err));
            }
            Ok(token) => tokens.push(token),
            Err(err) => return (tokens, Some(err)),
        }
    }
    (tokens, None)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose).context("install logger")?;

    let source = std::fs::read_to_string(&cli.file)
        .with_context(|| format!("read source file '{}'", cli.file.display()))?;
    tracing::info!("tokenizing '{}' ({} bytes)", cli.file.display(), source.len());

    let (tokens, error) = lex_source(&source);
    match cli.format.as_str() {
        "json" => println!("{}", dump::to_json(&tokens).context("serialize tokens to JSON")?),
        _ => print!("{}", dump::to_table(&tokens)),
    }

    if let Some(err) = error {
        let name = cli.file.display().to_string();
        let report = miette::Report::new(err.with_source_code(name, source));
        eprintln!("{report:?}");
        bail!("tokenizing '{}' failed", cli.file.display());
    }
    Ok(())
}
