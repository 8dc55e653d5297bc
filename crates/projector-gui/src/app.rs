use std::path::PathBuf;
use std::sync::mpsc;

use projector_core::config::InspectorConfig;
use projector_core::error::Result as CoreResult;
use projector_core::inspector::Inspector;
use projector_core::source::{LoadRequest, SourceKind, SourceSet};
use projector_core::throttle::PointerThrottle;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{ConfigState, SourceTextures, UIState};
use crate::workers;

pub struct ProjectorApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub inspector: Inspector,
    pub throttle: PointerThrottle,
    pub textures: SourceTextures,
    pub ui_state: UIState,
    pub config: ConfigState,
    pub show_about: bool,
}

impl ProjectorApp {
    pub fn new(ctx: &egui::Context) -> std::io::Result<Self> {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = workers::spawn_worker(result_tx.clone(), ctx.clone())?;
        let config = ConfigState::default();

        Ok(Self {
            cmd_tx,
            result_tx,
            result_rx,
            inspector: Inspector::new(config.applied.zoom.clone()),
            throttle: PointerThrottle::new(config.applied.rewrite_interval()),
            textures: SourceTextures::default(),
            ui_state: UIState::default(),
            config,
            show_about: false,
        })
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::ImageLoaded {
                    ticket,
                    path,
                    size,
                    image,
                } => {
                    self.ui_state.finish_loading(ticket.kind);
                    if !self.inspector.image_loaded(ticket, size) {
                        continue;
                    }
                    let texture = ctx.load_texture(
                        format!("{:?}", ticket.kind).to_lowercase(),
                        image,
                        egui::TextureOptions::LINEAR,
                    );
                    self.textures.set(ticket.kind, texture);
                    self.ui_state.add_log(format!(
                        "{}: {} ({}x{})",
                        ticket.kind,
                        path.display(),
                        size.w,
                        size.h
                    ));
                }
                WorkerResult::LoadFailed { ticket, message } => {
                    self.ui_state.finish_loading(ticket.kind);
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::SourcePicked { kind, path } => {
                    self.pick_source(kind, path);
                }
                WorkerResult::ConfigImported { config } => {
                    self.config.draft = config;
                    match self.apply_config() {
                        Ok(()) => self.ui_state.add_log("Config imported".into()),
                        Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
                    }
                }
                WorkerResult::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// A new thumbnail starts a new image; a full-resolution file pairs with
    /// the thumbnail already open. Either way the source set changes.
    fn pick_source(&mut self, kind: SourceKind, path: PathBuf) {
        match kind {
            SourceKind::Thumb => {
                self.ui_state.thumb_path = Some(path);
                self.ui_state.full_path = None;
            }
            SourceKind::Full => {
                if self.ui_state.thumb_path.is_none() {
                    self.ui_state
                        .add_log("Open a thumbnail before its full-resolution file".into());
                    return;
                }
                self.ui_state.full_path = Some(path);
            }
        }
        self.reload_sources();
    }

    /// Hand the current source set to the inspector and queue the thumbnail decode.
    pub fn reload_sources(&mut self) {
        let Some(ref thumb) = self.ui_state.thumb_path else {
            return;
        };
        let sources = SourceSet::new(
            thumb.to_string_lossy().into_owned(),
            self.ui_state
                .full_path
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
        );
        self.textures.clear();
        self.ui_state.loading.clear();
        self.throttle.reset();
        let request = self.inspector.set_source(sources);
        self.request_load(request);
    }

    pub fn request_load(&mut self, request: LoadRequest) {
        self.ui_state.loading.push(request.ticket.kind);
        self.send_command(WorkerCommand::LoadImage {
            ticket: request.ticket,
            path: PathBuf::from(request.uri),
        });
    }

    /// Validate the draft config and hand it to the inspector and throttle.
    pub fn apply_config(&mut self) -> CoreResult<()> {
        let config: InspectorConfig = self.config.draft.validated()?;
        self.inspector.set_zoom_config(config.zoom.clone());
        self.throttle.set_interval(config.rewrite_interval());
        self.config.applied = config;
        Ok(())
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for ProjectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::projector::show(ctx, self);
        panels::thumbnail::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("About Projector")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Projector");
                        ui.label("Magnifying-glass image inspector");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
