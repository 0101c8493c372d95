use std::{fs, io};

use clap::{Parser, Subcommand};
use notation::{Command, NumericMode, repl::Session, run};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// notation converts arithmetic expressions between infix, postfix and prefix
/// notation, and evaluates postfix and prefix expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Arithmetic used when evaluating.
    #[arg(short, long, value_enum, default_value_t = NumericMode::Real, global = true)]
    mode: NumericMode,

    /// Treat the expression argument as a file path and process every
    /// non-blank line of that file.
    #[arg(short, long, global = true)]
    file: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// Convert an infix expression to postfix notation.
    Postfix { expression: String },
    /// Convert an infix expression to prefix notation.
    Prefix { expression: String },
    /// Evaluate a postfix expression.
    EvalPostfix { expression: String },
    /// Evaluate a prefix expression.
    EvalPrefix { expression: String },
    /// Start the interactive menu.
    Menu,
}

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=notation=debug`.
fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let (command, contents) = match args.action {
        Action::Postfix { expression } => (Command::ToPostfix, expression),
        Action::Prefix { expression } => (Command::ToPrefix, expression),
        Action::EvalPostfix { expression } => (Command::EvalPostfix, expression),
        Action::EvalPrefix { expression } => (Command::EvalPrefix, expression),
        Action::Menu => {
            let stdin = io::stdin();
            if let Err(e) = Session::new(stdin.lock(), io::stdout(), args.mode).run() {
                eprintln!("{e}");
                std::process::exit(1);
            }
            return;
        },
    };

    let expressions = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
                                         eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                                         std::process::exit(1);
                                     })
                                     .lines()
                                     .map(str::trim)
                                     .filter(|line| !line.is_empty())
                                     .map(str::to_owned)
                                     .collect()
    } else {
        vec![contents]
    };

    let mut failed = false;
    for expr in &expressions {
        match run(command, expr, args.mode) {
            Ok(result) => println!("{result}"),
            Err(e) => {
                eprintln!("{expr}: {e}");
                failed = true;
            },
        }
    }

    if failed {
        std::process::exit(1);
    }
}
