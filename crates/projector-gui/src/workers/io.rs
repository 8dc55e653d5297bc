use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use projector_core::io::load_image;
use projector_core::source::LoadTicket;

use crate::convert::loaded_to_color_image;
use crate::messages::WorkerResult;

use super::{send, send_log};

pub(super) fn handle_load_image(
    ticket: LoadTicket,
    path: &Path,
    tx: &mpsc::Sender<WorkerResult>,
    ctx: &egui::Context,
) {
    let start = Instant::now();
    match load_image(path) {
        Ok(loaded) => {
            let size = loaded.size;
            let image = loaded_to_color_image(loaded);
            send_log(
                tx,
                ctx,
                format!(
                    "Decoded {} ({}x{}) in {:.0}ms",
                    path.display(),
                    size.w,
                    size.h,
                    start.elapsed().as_secs_f64() * 1000.0
                ),
            );
            send(
                tx,
                ctx,
                WorkerResult::ImageLoaded {
                    ticket,
                    path: path.to_path_buf(),
                    size,
                    image,
                },
            );
        }
        Err(e) => {
            send(
                tx,
                ctx,
                WorkerResult::LoadFailed {
                    ticket,
                    message: format!("Failed to load {}: {e}", path.display()),
                },
            );
        }
    }
}
