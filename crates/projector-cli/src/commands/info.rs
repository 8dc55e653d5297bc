use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use projector_core::io::image_size;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let size = image_size(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let bytes = std::fs::metadata(&args.file)?.len();

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", size.w, size.h);
    println!("Aspect:      {:.4}", size.aspect_ratio());
    println!("File size:   {:.1} KB", bytes as f64 / 1024.0);

    Ok(())
}
