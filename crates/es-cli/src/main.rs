use std::fs::File;
use std::io::{BufReader, Seek};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use es_core::{scan, BlockReader, Label, LineReader, Method, ScanConfig, UnitMode};

#[derive(Parser)]
#[command(
    name = "entroscan",
    version,
    about = "Calculates the Shannon entropy of files, per line or per byte block"
)]
struct Cli {
    /// Score each text line (default).
    #[arg(short, long, conflicts_with = "block")]
    line: bool,

    /// Score fixed-size byte blocks instead of lines.
    #[arg(short, long)]
    block: bool,

    /// Block size in bytes (block mode).
    #[arg(short, long, default_value_t = 16, value_parser = clap::value_parser!(u64).range(1..))]
    size: u64,

    /// Probability model: recomputed per unit, or once over the whole file.
    #[arg(short, long, value_enum, default_value_t = MethodArg::Local)]
    method: MethodArg,

    /// Logarithm base for the entropy sum (2 gives bits).
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(2..))]
    base: u32,

    /// Print only the entropy values, no labels or headers.
    #[arg(short = 'e', long)]
    entropy_only: bool,

    /// Files to score.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    Local,
    Global,
}

impl Cli {
    fn to_config(&self) -> ScanConfig {
        ScanConfig {
            unit_mode: if self.block {
                UnitMode::Block
            } else {
                UnitMode::Line
            },
            block_size: self.size as usize,
            method: match self.method {
                MethodArg::Local => Method::Local,
                MethodArg::Global => Method::Global,
            },
            base: self.base,
            terse: self.entropy_only,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.to_config();
    if let Err(e) = config.validate() {
        log::error!("{}", e);
        return ExitCode::from(2);
    }

    let mut failures = 0u32;
    for path in &cli.files {
        if let Err(e) = scan_file(path, &config) {
            log::error!("{}: {:#}", path.display(), e);
            failures += 1;
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Score one file to completion, printing a result line per unit.
fn scan_file(path: &Path, config: &ScanConfig) -> Result<()> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    // The global method rereads the input, so probe seekability up front
    // instead of failing halfway through the output.
    if config.method == Method::Global {
        (&file).stream_position().with_context(|| {
            format!(
                "{} is not seekable; the global method reads the input twice",
                path.display()
            )
        })?;
    }

    let unit_word = match config.unit_mode {
        UnitMode::Line => "line",
        UnitMode::Block => "block",
    };
    let method_word = match config.method {
        Method::Local => "local",
        Method::Global => "global",
    };

    if !config.terse {
        println!(
            "{}: {} units, {} probabilities, base {}",
            path.display(),
            unit_word,
            method_word,
            config.base
        );
    }
    log::info!(
        "scanning {} ({} units, {} probabilities, base {})",
        path.display(),
        unit_word,
        method_word,
        config.base
    );

    let emit = |label: &Label, value: f64| {
        if config.terse {
            println!("{:.6}", value);
        } else {
            println!("{} : {:.6}", label, value);
        }
    };

    match config.unit_mode {
        UnitMode::Line => {
            let mut reader = LineReader::new(BufReader::new(file));
            scan(&mut reader, config.method, config.base, emit)?;
        }
        UnitMode::Block => {
            let mut reader = BlockReader::new(file, config.block_size);
            scan(&mut reader, config.method, config.base, emit)?;
        }
    }

    Ok(())
}
