mod og_image;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hodl_client::metadata::{SHARE_IMAGE_HEIGHT, SHARE_IMAGE_WIDTH};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    OgImage(#[from] og_image::OgImageError),
}

#[derive(Parser, Debug)]
#[command(name = "hodl-cli", about = "hodlCoin web client asset tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the default social share image from the site logo.
    OgImage(OgImageCommand),
}

#[derive(Args, Debug)]
struct OgImageCommand {
    #[arg(long, default_value = "public/hodlcoin.png")]
    input: PathBuf,

    #[arg(long, default_value = "public/hodlcoin-og.png")]
    output: PathBuf,

    #[arg(long, default_value_t = SHARE_IMAGE_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = SHARE_IMAGE_HEIGHT)]
    height: u32,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::OgImage(cmd) => run_og_image(cmd),
    }
}

fn run_og_image(cmd: OgImageCommand) -> Result<(), CliError> {
    let layout = og_image::generate(&cmd.input, &cmd.output, (cmd.width, cmd.height))?;
    println!("wrote {}", cmd.output.display());
    println!("{}", layout.summary());
    Ok(())
}
