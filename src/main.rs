use std::{
    fs,
    io::{self, Read},
    iter,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use commandline::{Operation, Options};
use lispc::{
    compiler::{compile_tokens, CompilationState},
    error::PositionalError,
    lexer::lex,
    source_map::find_line,
};

mod commandline;

fn main() -> Result<ExitCode> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(options.verbose)
        .init()?;

    let content = read_source(options.operation.file())?;
    let tokens = lex(&content);

    match &options.operation {
        Operation::Tokens { .. } => {
            for token in tokens.iter() {
                println!("{:>9}  {}", token.source.to_string(), token.text);
            }
        }
        Operation::Check { file } => {
            let mut state = CompilationState::new();
            compile_tokens(&tokens, &mut state);

            if let Some(diagnostic) = state.diagnostic() {
                describe_error(diagnostic, &content);
                return Ok(ExitCode::FAILURE);
            }

            info!("{} defines {} function(s)", file, state.functions().len());
            for (name, function) in state.functions().iter() {
                println!("{} [{}]", name, function.params().join(" "));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_source(file: &str) -> Result<String> {
    if file == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from standard input")?;
        Ok(content)
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))
    }
}

fn describe_error(err: &impl PositionalError, content: &str) {
    let range = err.range();
    let Some(line) = find_line(content, range.start()) else {
        eprintln!("error: {}", err.describe());
        return;
    };

    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let gutter = format!("{}", line.line_no());
    let padding = line.column(range.start());
    let width = line.column(range.end()).saturating_sub(padding).max(1);

    eprintln!("{}| {}", gutter, line.for_display());
    eprintln!(
        "{}| {}{}--- {}",
        pad_char(' ', gutter.len()),
        pad_char(' ', padding),
        pad_char('^', width),
        err.describe()
    );
}
