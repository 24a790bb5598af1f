use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use exprtree::error::ExprResult;
use exprtree::lexer::Lexer;
use exprtree::pipeline::{self, Evaluation, EvaluationState, Pipeline};

#[derive(Parser)]
#[command(name = "exprtree")]
#[command(author, version, about = "Arithmetic expression parser and evaluator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an expression, print its notations and evaluate it
    Eval {
        /// The expression to evaluate (read from stdin when omitted)
        expression: Option<String>,

        /// Dump tokens to stdout
        #[arg(long)]
        dump_tokens: bool,

        /// Dump the postfix token sequence to stdout
        #[arg(long)]
        dump_postfix: bool,

        /// Dump the AST as JSON to stdout
        #[arg(long)]
        dump_ast: bool,
    },

    /// Check an expression for errors without evaluating it
    Check {
        /// The expression to check
        expression: String,
    },

    /// Evaluate every non-blank line of a file
    File {
        /// The file to read expressions from
        input: PathBuf,
    },

    /// Start an interactive REPL
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over the verbose flag
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Eval {
            expression,
            dump_tokens,
            dump_postfix,
            dump_ast,
        } => eval(expression, dump_tokens, dump_postfix, dump_ast, cli.verbose),
        Commands::Check { expression } => check(expression, cli.verbose),
        Commands::File { input } => file(input),
        Commands::Repl => repl(cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

/// Report a failed stage as a diagnostic and turn it into an `anyhow` error
fn stage<T>(pipeline: &Pipeline, result: ExprResult<T>, name: &str) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(e) => {
            pipeline.report_error(&e)?;
            anyhow::bail!("{} failed", name)
        }
    }
}

fn read_expression() -> Result<String> {
    print!("Enter an expression: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read expression from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn eval(
    expression: Option<String>,
    dump_tokens: bool,
    dump_postfix: bool,
    dump_ast: bool,
    verbose: bool,
) -> Result<()> {
    let expression = match expression {
        Some(expression) => expression,
        None => read_expression()?,
    };

    let state = EvaluationState::new_from_string("<input>", expression);
    let pipeline = Pipeline::new(state, verbose);

    // 1. Tokenize
    if dump_tokens {
        // Unrecognised characters show up as <error>
        println!("{}", "=== Tokens ===".blue().bold());
        for (i, token) in Lexer::new(&pipeline.state().source).enumerate() {
            println!(
                "{:4}: {:<7} {}..{}",
                i,
                token.token.to_string(),
                token.span.start,
                token.span.end
            );
        }
        println!();
    }
    let tokens = stage(&pipeline, pipeline.tokenize(), "Tokenizing")?;

    // 2. Infix to postfix
    let postfix = stage(&pipeline, pipeline.postfix(&tokens), "Postfix conversion")?;
    if dump_postfix {
        println!("{}", "=== Postfix ===".blue().bold());
        println!("{}", postfix.join(" "));
        println!();
    }

    // 3. Build the tree
    let ast = stage(&pipeline, pipeline.build(&postfix), "Parsing")?;
    if dump_ast {
        println!("{}", "=== AST ===".blue().bold());
        println!("{}", serde_json::to_string_pretty(&ast)?);
        println!();
    }

    // 4. Render and evaluate
    let evaluation = Evaluation::from_ast(&pipeline.state().source, &ast);
    print_evaluation(&evaluation);

    // The evaluation error was already printed above
    if evaluation.result.is_err() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_evaluation(evaluation: &Evaluation) {
    print!("{}", format_evaluation(evaluation));
}

fn format_evaluation(evaluation: &Evaluation) -> String {
    let mut out = String::new();
    out.push_str(&format!("Prefix notation: {}\n", evaluation.prefix));
    out.push_str(&format!("Postfix notation: {}\n", evaluation.postfix));
    out.push_str(&format!("Infix notation: {}\n", evaluation.infix));
    out.push_str(&format!("AST structure (formatted):\n{}\n", evaluation.tree));
    match &evaluation.result {
        Ok(value) => out.push_str(&format!("{}: {}\n", "Result".green().bold(), value)),
        Err(e) => out.push_str(&format!("{}: {}\n", "Evaluation error".red().bold(), e)),
    }
    out
}

fn check(expression: String, verbose: bool) -> Result<()> {
    log::info!("Checking {:?}", expression);

    let state = EvaluationState::new_from_string("<input>", expression);
    let pipeline = Pipeline::new(state, verbose);

    let tokens = stage(&pipeline, pipeline.tokenize(), "Tokenizing")?;
    let postfix = stage(&pipeline, pipeline.postfix(&tokens), "Postfix conversion")?;
    let ast = stage(&pipeline, pipeline.build(&postfix), "Parsing")?;

    log::debug!("tree has {} nodes, depth {}", ast.node_count(), ast.depth());
    println!("{}: No errors found", "success".green().bold());
    Ok(())
}

fn file(input: PathBuf) -> Result<()> {
    let outcomes = pipeline::evaluate_file(&input)
        .with_context(|| format!("Failed to evaluate {:?}", input))?;

    let mut failures = 0;
    for outcome in &outcomes {
        match &outcome.outcome {
            Ok(value) => println!("{:4}: {} = {}", outcome.line, outcome.expression, value),
            Err(e) => {
                failures += 1;
                println!(
                    "{:4}: {} => {}",
                    outcome.line,
                    outcome.expression,
                    e.to_string().red()
                );
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{} of {} expressions failed", failures, outcomes.len());
    }
    println!("{}: Evaluated {} expressions", "success".green().bold(), outcomes.len());
    Ok(())
}

fn repl(verbose: bool) -> Result<()> {
    println!("{}", "exprtree REPL".blue().bold());
    println!("Type ':quit' or ':q' to exit, ':help' for help\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line_number = 1;

    loop {
        print!("exprtree:{:03}> ", line_number);
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            println!();
            break;
        }
        let input = input.trim();

        match input {
            ":quit" | ":q" => {
                println!("Goodbye!");
                break;
            }
            ":help" | ":h" => {
                println!("REPL commands:");
                println!("  :quit, :q    Exit the REPL");
                println!("  :help, :h    Show this help message");
                println!("\nEnter an expression using numbers, + - * / ^ and parentheses.");
                continue;
            }
            "" => continue,
            _ => {}
        }

        let state = EvaluationState::new_from_string("<repl>", input.to_string());
        let pipeline = Pipeline::new(state, verbose);
        match pipeline.run() {
            Ok(evaluation) => print_evaluation(&evaluation),
            Err(e) => pipeline.report_error(&e)?,
        }

        line_number += 1;
    }

    Ok(())
}
