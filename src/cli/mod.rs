pub mod commands;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{CalcArgs, Commands};
use layer_dims::{compute_output_dimensions, LayerKind, Shell};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "layer_dims=warn";

#[derive(Parser, Debug)]
#[command(
    name = "layer-dims",
    version,
    about = "Compute output dimensions of convolution and pooling layers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            None | Some(Commands::Interactive) => run_interactive(),
            Some(Commands::Calc(args)) => run_calc(args),
        }
    }
}

/// Log filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn log_filter() -> EnvFilter {
    filter_from(std::env::var("RUST_LOG").ok().as_deref())
}

fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn run_interactive() -> Result<()> {
    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout().lock());
    let completed = shell.run().context("interactive session failed")?;
    tracing::info!("session ended after {} calculations", completed);
    Ok(())
}

fn run_calc(args: CalcArgs) -> Result<()> {
    let kind: LayerKind = args.layer.parse()?;
    let output = compute_output_dimensions(kind, &args.input, &args.hyperparameters)
        .with_context(|| format!("cannot compute {} layer output", kind))?;

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn calc_args(args: &[&str]) -> CalcArgs {
        let cli = Cli::try_parse_from(["layer-dims", "calc"].iter().chain(args)).unwrap();
        match cli.command {
            Some(Commands::Calc(args)) => args,
            other => panic!("expected calc, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let cli = Cli::try_parse_from(["layer-dims"]).unwrap();
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["layer-dims", "interactive"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Interactive)));
    }

    #[test]
    fn test_parse_calc() {
        let args = calc_args(&["-l", "Pool", "-i", "2", "2", "4", "-p", "9", "2"]);
        assert_eq!(args.layer, "Pool");
        assert_eq!(args.input, vec![2, 2, 4]);
        assert_eq!(args.hyperparameters, vec![9, 2]);
    }

    #[test]
    fn test_parse_calc_negative_values() {
        let args = calc_args(&["--layer", "Pool", "--input", "-5", "5", "1", "--hyper", "0", "-2"]);
        assert_eq!(args.input, vec![-5, 5, 1]);
        assert_eq!(args.hyperparameters, vec![0, -2]);
    }

    #[test]
    fn test_calc_missing_values_rejected() {
        assert!(Cli::try_parse_from(["layer-dims", "calc", "-l", "Conv", "-p", "1"]).is_err());
    }

    #[test]
    fn test_run_calc() {
        let args = calc_args(&["-l", "Conv", "-i", "32", "32", "3", "-p", "16", "5", "1", "2"]);
        assert!(run_calc(args).is_ok());
    }

    #[test]
    fn test_run_calc_errors() {
        let args = calc_args(&["-l", "Fc", "-i", "32", "32", "3", "-p", "2", "2"]);
        assert!(run_calc(args).is_err());

        let args = calc_args(&["-l", "Conv", "-i", "32", "32", "3", "-p", "2", "2"]);
        let err = run_calc(args).unwrap_err();
        assert!(format!("{:#}", err).contains("expected 4 values, got 2"));
    }

    #[test]
    fn test_log_filter_respects_directives() {
        assert_eq!(filter_from(None).to_string(), DEFAULT_LOG_FILTER);
        assert_eq!(filter_from(Some("layer_dims=debug")).to_string(), "layer_dims=debug");
    }
}
