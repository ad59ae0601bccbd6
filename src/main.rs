use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use geoexpr::tree::{parse_tree, value_to_json};
use geoexpr::{EvalContext, EvalError, StringTemplate, evaluate, init_tracing};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate an expression tree given as JSON
  Eval {
    /// File holding the tree, or `-` for stdin
    input: PathBuf,

    /// Maximum number of printed decimals
    #[arg(long, default_value_t = 2)]
    decimals: usize,

    /// Tolerance for numeric comparisons
    #[arg(long, default_value_t = 1e-8)]
    tolerance: f64,

    /// Print the result as LaTeX
    #[arg(long, conflicts_with = "json")]
    latex: bool,

    /// Print the result as a JSON object
    #[arg(long)]
    json: bool,
  },
}

fn read_input(input: &Path) -> Result<String> {
  if input.as_os_str() == "-" {
    let mut buf = String::new();
    std::io::stdin()
      .read_to_string(&mut buf)
      .context("failed to read tree from stdin")?;
    Ok(buf)
  } else {
    std::fs::read_to_string(input)
      .with_context(|| format!("failed to read {}", input.display()))
  }
}

fn main() -> Result<ExitCode> {
  init_tracing();
  let cli = Cli::parse();

  match cli.command {
    Commands::Eval {
      input,
      decimals,
      tolerance,
      latex,
      json,
    } => {
      let source = read_input(&input)?;
      let node = parse_tree(&source).context("invalid expression tree")?;
      let tpl = StringTemplate::DEFAULT.with_decimals(decimals);
      let ctx = EvalContext::new().with_tolerance(tolerance);

      match evaluate(&node, &tpl, &ctx) {
        Ok(value) if json => println!("{}", value_to_json(&value, &tpl)),
        Ok(value) if latex => println!("{}", value.to_latex_string(&tpl)),
        Ok(value) => println!("{}", value.to_value_string(&tpl)),
        Err(EvalError::Illegal(descriptor)) => {
          eprintln!("Error: {descriptor}");
          return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
          return Err(anyhow::Error::new(e).context("evaluation failed"));
        }
      }
    }
  }
  Ok(ExitCode::SUCCESS)
}
