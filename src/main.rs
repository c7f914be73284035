use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use fable::ast::printer;
use fable::error::CompileError;
use fable::interpreter::Interpreter;
use fable::parser::Parser as FableParser;
use fable::scanner;

#[derive(Parser, Debug)]
#[command(name = "fable", about = "A tiny string-only scripting language")]
struct Cli {
    /// Fable source file to run (omit for REPL)
    file: Option<PathBuf>,

    /// Dump tokens and exit
    #[arg(long)]
    dump_tokens: bool,

    /// Dump AST and exit
    #[arg(long)]
    dump_ast: bool,

    /// AST output format
    #[arg(long, default_value = "sexp", value_parser = ["sexp", "json"])]
    ast_format: String,
}

fn read_source(cli: &Cli) -> Result<String> {
    match &cli.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("read source file '{}'", path.display())),
        None => bail!("source file required for this operation"),
    }
}

fn report_compile_error(error: CompileError, cli: &Cli, source: &str) -> anyhow::Error {
    let name = cli
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<script>".to_string());
    let report = miette::Report::new(error.with_source_code(name, source));
    eprintln!("{report:?}");
    anyhow::anyhow!("compilation failed")
}

fn run_source(cli: &Cli, source: &str) -> Result<()> {
    let tokens = scanner::scan(source).map_err(|e| report_compile_error(e, cli, source))?;
    let program = FableParser::new(tokens)
        .parse()
        .map_err(|e| report_compile_error(e, cli, source))?;
    let mut interpreter = Interpreter::new();
    interpreter
        .interpret(&program)
        .map_err(|e| anyhow::anyhow!("{}", e.display_with_line(source)))?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.dump_tokens {
        let source = read_source(&cli)?;
        let tokens =
            scanner::scan(&source).map_err(|e| report_compile_error(e, &cli, &source))?;
        for token in &tokens {
            println!("{token}");
        }
        return Ok(());
    }

    if cli.dump_ast {
        let source = read_source(&cli)?;
        let tokens =
            scanner::scan(&source).map_err(|e| report_compile_error(e, &cli, &source))?;
        let program = FableParser::new(tokens)
            .parse()
            .map_err(|e| report_compile_error(e, &cli, &source))?;
        match cli.ast_format.as_str() {
            "json" => print!("{}", printer::to_json(&program)),
            _ => print!("{}", printer::to_sexp(&program)),
        }
        return Ok(());
    }

    match cli.file {
        Some(_) => {
            let source = read_source(&cli)?;
            run_source(&cli, &source)
        }
        None => {
            fable::repl::run_repl();
            Ok(())
        }
    }
}
