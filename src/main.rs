use anyhow::Result;
use clap::Parser;
use pwa_icon_gen::icon_gen::{DEFAULT_SIZES, MAX_SIZE};
use pwa_icon_gen::{generate_icons, IconConfig};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icon-gen",
    about = "Render the gradient cart icons for the PWA in every required size"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = "./icons")]
    output: PathBuf,

    /// Custom PNG icon sizes to generate. When set, only these sizes are generated.
    #[clap(
        short,
        long,
        value_delimiter = ',',
        value_name = "SIZES",
        value_parser = clap::value_parser!(u32).range(1..=MAX_SIZE as i64)
    )]
    png: Option<Vec<u32>>,

    /// Also write manifest-icons.json with the `icons` array for the web app manifest
    #[clap(long)]
    manifest: bool,
}

impl From<Args> for IconConfig {
    fn from(args: Args) -> Self {
        IconConfig {
            output: args.output,
            sizes: args.png.unwrap_or_else(|| DEFAULT_SIZES.to_vec()),
            manifest: args.manifest,
            ..IconConfig::default()
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    generate_icons(&args.into())?;
    Ok(())
}
