use std::fs;
use std::process::Command;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Project automation commands", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run cargo nextest with default configuration
    Nextest {
        #[arg(long)]
        profile: Option<String>,
        #[arg(long)]
        release: bool,
    },
    /// Run lineselect in a scratch directory holding a generated input.txt
    Demo {
        /// Selector passed as the final argument
        selector: String,
        #[arg(long, default_value = "Hello\nWorld")]
        input: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Nextest { profile, release } => run_nextest(profile, release)?,
        Commands::Demo { selector, input } => run_demo(&selector, &input)?,
    }
    Ok(())
}

fn run_nextest(profile: Option<String>, release: bool) -> Result<()> {
    let mut cmd = Command::new("cargo");
    cmd.arg("nextest").arg("run").arg("--workspace");
    if let Some(profile) = profile {
        cmd.arg("--profile").arg(profile);
    }
    if release {
        cmd.arg("--release");
    }
    let status = cmd.status()?;
    if !status.success() {
        anyhow::bail!("cargo nextest run failed");
    }
    Ok(())
}

fn run_demo(selector: &str, input: &str) -> Result<()> {
    let manifest = std::env::current_dir()?.join("Cargo.toml");
    let scratch = tempfile::tempdir().context("failed to create scratch directory")?;
    fs::write(scratch.path().join("input.txt"), input)
        .context("failed to write scratch input.txt")?;

    let status = Command::new("cargo")
        .args(["run", "--quiet", "--package", "lineselect", "--manifest-path"])
        .arg(&manifest)
        .arg("--")
        .arg(selector)
        .current_dir(scratch.path())
        .status()?;
    if !status.success() {
        anyhow::bail!("lineselect exited with {status}");
    }
    Ok(())
}
