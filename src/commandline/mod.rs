use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(about = "A front end for a small Lisp")]
pub struct Options {
    #[clap(subcommand)]
    pub operation: Operation,
    #[clap(short, long, default_value_t = 1)]
    pub verbose: usize,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Print the tokens of a program
    Tokens { file: String },
    /// Check a program for errors and list the functions it defines
    Check { file: String },
}

impl Operation {
    /// The source file to operate on. `-` means standard input.
    pub fn file(&self) -> &str {
        match self {
            Operation::Tokens { file } | Operation::Check { file } => file,
        }
    }
}
