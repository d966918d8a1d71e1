use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for layers interactively (the default)
    Interactive,

    /// Compute the output dimensions of one layer and exit
    Calc(CalcArgs),
}

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Layer type: Conv or Pool
    #[arg(long, short = 'l')]
    pub layer: String,

    /// Input dimensions: width height depth
    #[arg(long, short = 'i', num_args = 1.., required = true, allow_negative_numbers = true)]
    pub input: Vec<i64>,

    /// Hyperparameters: `k f s p` for Conv, `f s` for Pool
    #[arg(long = "hyper", short = 'p', num_args = 1.., required = true, allow_negative_numbers = true)]
    pub hyperparameters: Vec<i64>,
}
