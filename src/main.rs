use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::Parser as _;
use sql_parser::{sql::Scanner, Error, SelectStatement};

#[derive(clap::Parser)]
#[command(name = "sqlparse")]
#[command(about = "Parse a SELECT <fields> FROM <table> [LIMIT <n>] query")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Query text; read from stdin when omitted
    query: Option<String>,

    /// Print the token stream instead of the parsed statement
    #[arg(long)]
    tokens: bool,

    /// Verbose output (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match (cli.query, cli.tokens) {
        (Some(query), true) => print_tokens(&query),
        (None, true) => {
            let mut query = String::new();
            io::stdin()
                .read_to_string(&mut query)
                .context("read query from stdin")?;
            print_tokens(&query);
        }
        (Some(query), false) => report(sql_parser::parse(&query).map_err(Error::from))?,
        (None, false) => report(sql_parser::parse_reader(io::stdin().lock()))?,
    }

    Ok(())
}

fn print_tokens(query: &str) {
    for token in Scanner::new(query).tokens() {
        println!("{}\t{}\t{:?}", token.position, token.kind, token.literal);
    }
}

fn report(result: sql_parser::Result<SelectStatement>) -> Result<()> {
    match result {
        Ok(stmt) => {
            println!("{stmt}");
            println!("{stmt:#?}");
            Ok(())
        }
        Err(Error::Syntax(err)) => bail!("syntax error at {}: {err}", err.position()),
        Err(err) => Err(err).context("parse query"),
    }
}
