use anyhow::Result;
use clap::Parser;
use kamerai_icons::icon_gen;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "kamerai-icons",
    about = "Render the Kamerai launcher icon for every Android density"
)]
struct Args {
    /// Project root; icons are written under app/src/main/res.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// JSON file overriding the palette and/or density table.
    #[clap(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Create missing mipmap directories instead of failing.
    #[clap(long)]
    create_dirs: bool,

    /// Clip the round variant to a circular mask instead of copying the regular icon.
    #[clap(long)]
    round_mask: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        config: args.config,
        create_dirs: args.create_dirs,
        round_mask: args.round_mask,
    })
}
