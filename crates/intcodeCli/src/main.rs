//! Command-line driver for the Intcode virtual machine.
//!
//! All VM logic lives in `intcode-vm`; this binary is an ordinary caller:
//! it parses a program literal from a file, applies address patches, and
//! either runs the image once or explores the noun/verb parameter space.

use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use intcode_vm::{Interpreter, ProgramImage};

#[derive(Debug, Parser)]
#[command(name = "intcode", about = "Run Intcode programs", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a program once and print the final I/O register.
    Run {
        /// Path to the comma-separated program literal.
        program: PathBuf,
        /// The single scalar input for the run.
        #[arg(long, default_value_t = 0)]
        input: i64,
        /// Address patches applied before the run.
        #[arg(long, value_name = "ADDR=VALUE")]
        patch: Vec<String>,
        /// Log one line per decoded instruction (at trace level).
        #[arg(long)]
        trace: bool,
    },
    /// Search noun/verb patches (addresses 1 and 2) for a pair that leaves
    /// the target value at address 0, and print `100 * noun + verb`.
    Search {
        /// Path to the comma-separated program literal.
        program: PathBuf,
        /// The value expected at address 0 after a successful run.
        #[arg(long)]
        target: i64,
        /// Inclusive upper bound of the noun and verb ranges.
        #[arg(long, default_value_t = 99)]
        max: i64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Run {
            program,
            input,
            patch,
            trace,
        } => run(&program, input, &patch, trace),
        Command::Search {
            program,
            target,
            max,
        } => {
            let base = load_image(&program)?;
            match search(&base, target, max) {
                Some((noun, verb)) => {
                    log::info!("found noun={noun} verb={verb}");
                    println!("{}", 100 * noun + verb);
                    Ok(())
                }
                None => bail!("no noun/verb pair in 0..={max} produces {target} at address 0"),
            }
        }
    }
}

fn load_image(path: &Path) -> anyhow::Result<ProgramImage> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(ProgramImage::parse(&text)?)
}

fn run(path: &Path, input: i64, patches: &[String], trace: bool) -> anyhow::Result<()> {
    let mut image = load_image(path)?;
    for patch in patches {
        let (address, value) = parse_patch(patch)?;
        image.write(address, value)?;
    }

    let output = if trace {
        Interpreter::with_observer(|step| {
            log::trace!(
                "pc={} io={} instruction={:?}",
                step.pc,
                step.io,
                step.instruction
            );
        })
        .run(&mut image, input)?
    } else {
        Interpreter::new().run(&mut image, input)?
    };

    println!("{output}");
    Ok(())
}

/// Parses an `ADDR=VALUE` patch argument.
fn parse_patch(patch: &str) -> anyhow::Result<(i64, i64)> {
    let (address, value) = patch
        .split_once('=')
        .with_context(|| format!("patch '{patch}' is not of the form ADDR=VALUE"))?;
    let address = address
        .parse()
        .with_context(|| format!("patch address '{address}' is not an integer"))?;
    let value = value
        .parse()
        .with_context(|| format!("patch value '{value}' is not an integer"))?;
    Ok((address, value))
}

/// Exhaustive noun/verb exploration: per attempt, deep-copy the base image,
/// patch addresses 1 and 2, run with input 0 and compare the value left at
/// address 0 against `target`. A failed run just means "try the next
/// candidate".
fn search(base: &ProgramImage, target: i64, max: i64) -> Option<(i64, i64)> {
    for noun in 0..=max {
        for verb in 0..=max {
            let mut attempt = base.clone();
            if attempt.write(1, noun).is_err() || attempt.write(2, verb).is_err() {
                return None;
            }
            match Interpreter::new().run(&mut attempt, 0) {
                Ok(_) => {}
                Err(err) => {
                    log::debug!("noun={noun} verb={verb} failed: {err}");
                    continue;
                }
            }
            if attempt.read(0) == Ok(target) {
                return Some((noun, verb));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_patch() {
        assert_eq!(parse_patch("1=12").unwrap(), (1, 12));
        assert_eq!(parse_patch("2=-5").unwrap(), (2, -5));
        assert!(parse_patch("12").is_err());
        assert!(parse_patch("a=1").is_err());
    }

    #[test]
    fn test_search_finds_matching_pair() {
        // Immediate operands: mem[0] = noun + verb, first reached at (0, 7).
        let base = ProgramImage::parse("1101,0,0,0,99").unwrap();
        assert_eq!(search(&base, 7, 99), Some((0, 7)));
    }

    #[test]
    fn test_search_skips_failing_candidates() {
        // Position operands: mem[0] = mem[noun] + mem[verb]. 198 needs both
        // reads to hit the 99 cell, so the search must survive every
        // out-of-bounds attempt with noun or verb past the image first.
        let base = ProgramImage::parse("1,0,0,0,99").unwrap();
        assert_eq!(search(&base, 198, 99), Some((4, 4)));
    }

    #[test]
    fn test_search_exhausts_without_match() {
        let base = ProgramImage::parse("1101,0,0,0,99").unwrap();
        assert_eq!(search(&base, -1, 10), None);
    }
}
