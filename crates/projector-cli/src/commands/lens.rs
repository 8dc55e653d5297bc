use anyhow::Result;
use clap::Args;
use projector_core::fit::compute_padding;
use projector_core::geometry::{Point, Rect, Size};
use projector_core::lens::compute_lens_view;

use super::{parse_point, parse_size};
use crate::summary::print_lens_view;

#[derive(Args)]
pub struct LensArgs {
    /// Container size in pixels, e.g. 400x400
    #[arg(long, value_parser = parse_size)]
    pub container: Size,

    /// Projector size in pixels, e.g. 500x400
    #[arg(long, value_parser = parse_size)]
    pub projector: Size,

    /// Natural image size in pixels, e.g. 1920x1080
    #[arg(long, value_parser = parse_size)]
    pub image: Size,

    /// Pointer position inside the container, e.g. 200,150
    #[arg(long, value_parser = parse_point)]
    pub pointer: Point,

    /// Zoom level
    #[arg(long, default_value_t = 2.0)]
    pub zoom: f64,
}

pub fn run(args: &LensArgs) -> Result<()> {
    if !(args.zoom.is_finite() && args.zoom > 0.0) {
        anyhow::bail!("Zoom level must be a positive number (got {})", args.zoom);
    }

    let container = Rect::from_size(args.container);
    let projector = Rect::from_size(args.projector);
    let padding = compute_padding(args.container, args.image);

    let Some(view) = compute_lens_view(args.pointer, padding, &container, &projector, args.zoom)
    else {
        anyhow::bail!("Container and projector must both have a positive width and height");
    };

    print_lens_view(args.zoom, &padding, &view);
    Ok(())
}
