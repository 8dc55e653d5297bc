use std::path::PathBuf;

use projector_core::config::InspectorConfig;
use projector_core::geometry::Size;
use projector_core::source::{LoadTicket, SourceKind};

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Decode an image for the given load ticket.
    LoadImage { ticket: LoadTicket, path: PathBuf },
}

/// Results sent from worker (and dialog) threads back to UI thread.
pub enum WorkerResult {
    /// Decoded pixels plus the natural size of the file.
    ImageLoaded {
        ticket: LoadTicket,
        path: PathBuf,
        size: Size,
        image: egui::ColorImage,
    },
    LoadFailed {
        ticket: LoadTicket,
        message: String,
    },
    /// A file dialog returned a path for one of the two sources.
    SourcePicked { kind: SourceKind, path: PathBuf },
    ConfigImported { config: InspectorConfig },
    Error { message: String },
    Log { message: String },
}
