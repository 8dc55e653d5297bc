use anyhow::Result;
use clap::Args;
use projector_core::fit::compute_padding;
use projector_core::geometry::Size;

use super::parse_size;

#[derive(Args)]
pub struct PaddingArgs {
    /// Container size in pixels, e.g. 400x400
    #[arg(long, value_parser = parse_size)]
    pub container: Size,

    /// Natural image size in pixels, e.g. 1920x1080
    #[arg(long, value_parser = parse_size)]
    pub image: Size,
}

pub fn run(args: &PaddingArgs) -> Result<()> {
    let padding = compute_padding(args.container, args.image);

    println!("Container:   {}x{}", args.container.w, args.container.h);
    println!("Image:       {}x{}", args.image.w, args.image.h);
    println!("Padding W:   {:.2}", padding.w);
    println!("Padding H:   {:.2}", padding.h);

    Ok(())
}
