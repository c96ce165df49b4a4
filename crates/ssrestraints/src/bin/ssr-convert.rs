use std::io::Write;
use std::path::Path;
use log::{debug, info};
use colored::*;
use env_logger::Builder;
use clap::Parser;
use clap::ArgAction;
use anyhow::{bail, Context, Result};

use ssrestraints::restraints::formats::render;

use ssrestraints::input_parsers::read_fasta_input;
use ssrestraints::input_parsers::read_dotbracket_input;
use ssrestraints::restraint_parsers::RestraintArguments;


#[derive(Debug, Parser)]
#[command(name = "ssr-convert")]
#[command(author, version)]
#[command(about = "Generate QRNAS and/or Phenix base-pair restraints from FASTA + dot-bracket")]
pub struct Cli {
    /// FASTA file with the RNA sequence, or "-" for stdin
    #[arg(value_name = "FASTA")]
    pub fasta: String,

    /// Dot-bracket secondary structure file, or "-" for stdin
    #[arg(value_name = "STRUCTURE")]
    pub structure: String,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(flatten, next_help_heading = "Restraint parameters")]
    pub restraints: RestraintArguments,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn check_input(label: &str, input: &str) -> Result<()> {
    if input != "-" && !Path::new(input).exists() {
        bail!("{} file '{}' not found.", label, input);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    cli.restraints.validate()?;

    if cli.fasta == "-" && cli.structure == "-" {
        bail!("only one of FASTA and STRUCTURE can be read from stdin");
    }
    check_input("FASTA", &cli.fasta)?;
    check_input("structure", &cli.structure)?;
    debug!("FASTA input: {}, structure input: {}", cli.fasta, cli.structure);

    let (header, sequence) = read_fasta_input(&cli.fasta)
        .with_context(|| format!("failed to read FASTA file '{}'", cli.fasta))?;
    if let Some(h) = header {
        info!("{}", h.yellow());
    }
    info!("{}", sequence);

    let structure = read_dotbracket_input(&cli.structure)
        .with_context(|| format!("failed to read structure file '{}'", cli.structure))?;
    info!("{}", structure);

    let restraints = cli.restraints.build_restraints(&sequence, &structure)
        .with_context(|| format!("malformed dot-bracket structure in '{}'", cli.structure))?;

    println!("{}", render(cli.restraints.format, &restraints, &cli.restraints.chain));

    Ok(())
}
