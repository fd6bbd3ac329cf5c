mod printer;

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use classdump_class_file::ClassFile;
use log::{debug, info};

use crate::printer::Printer;

#[derive(Debug, Parser)]
#[command(name = "classdump")]
#[command(about = "Decode a class file and print its structure section by section")]
struct Cli {
    #[arg(value_name = "CLASS_FILE")]
    path: PathBuf,

    /// Only validate the class file, print nothing on success.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let bytes = fs::read(&cli.path)
        .with_context(|| format!("failed to read {}", cli.path.display()))?;
    debug!("Found {} bytes in {}", bytes.len(), cli.path.display());

    let class_file = if cli.quiet {
        ClassFile::parse(&bytes)
    } else {
        let mut printer = Printer::new(io::stdout().lock());
        let class_file = ClassFile::parse_with(&bytes, &mut printer);
        printer.finish().context("failed to write to stdout")?;
        class_file
    }
    .with_context(|| {
        format!(
            "failed to decode {}, did you supply a valid class file?",
            cli.path.display()
        )
    })?;

    info!(
        "Decoded {} ({} methods, {} attributes)",
        class_file.class_name().unwrap_or("<unnamed>"),
        class_file.methods.len(),
        class_file.attributes.len()
    );

    Ok(())
}
