use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-calc")]
#[command(about = "Prints the results of two fixed arithmetic operations")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
