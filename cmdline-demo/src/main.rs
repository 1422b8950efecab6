mod error;

use std::{fmt::Display, process::ExitCode};

use anyhow::Context;
use cmdline::{
    MultiPositional, OptionFlag, OptionParam, Parameter, Parser, Program, Status, Style, Tags,
    ValueOption,
};
use lazy_format::lazy_format;
use tracing_subscriber::{EnvFilter, fmt};

use crate::error::CommandLineError;

fn field_option(long: &str, short: char, description: &str) -> anyhow::Result<ValueOption> {
    let option = ValueOption::new(Tags::LongShort { long, short }, description)
        .with_context(|| format!("failed to define --{long}"))?
        .with_param(OptionParam::new("song", "the title of the song")?)?
        .with_param(OptionParam::new("artist", "the song artist")?)?
        .with_param(OptionParam::new("album", "the album of the song")?)?;

    Ok(option)
}

/// The `name=value` fields an option was given, one per line.
fn fields(option: &ValueOption) -> impl Display + '_ {
    let given = option
        .params()
        .iter()
        .filter(|param| param.is_specified())
        .map(|param| lazy_format!("{} = {:?}", param.name(), param.value().unwrap_or_default()));

    lazy_format!("\n  {field}" for field in given.clone())
}

fn run(args: impl IntoIterator<Item = String>) -> anyhow::Result<()> {
    let mut program = Program::new("mediaedit", "prints and edits tags in media files");
    let mut print = field_option("print", 'p', "prints the specified fields")?;
    let mut edit = field_option("edit", 'e', "edits the specified fields")?;
    let mut verbose = OptionFlag::new(
        Tags::LongShort {
            long: "verbose",
            short: 'v',
        },
        "prints verbose info",
    )?;
    let mut files = MultiPositional::new("filenames", "the media files to process")?.mandatory();

    let mut parser = Parser::new(&mut program, args).context("no command line arguments")?;
    parser.add_option(&mut print)?;
    parser.add_option(&mut edit)?;
    parser.add_option(&mut verbose)?;
    parser.set_multi_positional(&mut files);

    if cfg!(windows) {
        parser.set_style(Style::Windows);
    }

    let status = parser.parse();

    if parser.help_requested() {
        print!("{}", parser.help());
        return Ok(());
    }

    let usage = parser.usage().to_string();

    if status == Status::Failure {
        return Err(CommandLineError::Rejected { usage }.into());
    }

    if !parser.all_mandatory_specified() {
        return Err(CommandLineError::MissingMandatory { usage }.into());
    }

    tracing::debug!(files = files.values().len(), "parsed command line");

    if verbose.is_specified() {
        println!("print values: {:?}", print.values());
        println!("edit values: {:?}", edit.values());
    }

    println!("print:{}", fields(&print));
    println!("edit:{}", fields(&edit));
    println!(
        "files:{}",
        lazy_format!("\n  {file}" for file in files.values())
    );

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    match run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error:#}");
            ExitCode::FAILURE
        }
    }
}
