use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use projector_core::config::InspectorConfig;
use projector_core::geometry::{Point, Rect, Size};
use projector_core::inspector::Inspector;
use projector_core::io::image_size;
use projector_core::source::{LoadRequest, SourceKind, SourceSet};
use serde::Deserialize;
use tracing::debug;

use crate::summary::{print_replay_header, print_step};

#[derive(Args)]
pub struct ReplayArgs {
    /// TOML trace file with an [[event]] array
    pub trace: PathBuf,

    /// Inspector config (TOML). Defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct Trace {
    #[serde(default, rename = "event")]
    events: Vec<TraceEvent>,
}

/// One recorded input to the inspector.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum TraceEvent {
    Container {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        w: f64,
        h: f64,
    },
    Projector {
        #[serde(default)]
        x: f64,
        #[serde(default)]
        y: f64,
        w: f64,
        h: f64,
    },
    Source {
        thumb: String,
        #[serde(default)]
        full: Option<String>,
    },
    /// Completes the most recent pending load of `source`. Without an explicit
    /// size the image file is probed, relative to the trace file.
    Loaded {
        source: SourceKind,
        #[serde(default)]
        w: Option<f64>,
        #[serde(default)]
        h: Option<f64>,
    },
    Enter,
    Move {
        x: f64,
        y: f64,
    },
    Wheel {
        delta: f64,
    },
    Leave,
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container { x, y, w, h } => write!(f, "container {w}x{h} at ({x}, {y})"),
            Self::Projector { x, y, w, h } => write!(f, "projector {w}x{h} at ({x}, {y})"),
            Self::Source { thumb, full } => match full {
                Some(full) => write!(f, "source {thumb} / {full}"),
                None => write!(f, "source {thumb}"),
            },
            Self::Loaded { source, .. } => write!(f, "loaded {source}"),
            Self::Enter => write!(f, "enter"),
            Self::Move { x, y } => write!(f, "move ({x}, {y})"),
            Self::Wheel { delta } => write!(f, "wheel {delta}"),
            Self::Leave => write!(f, "leave"),
        }
    }
}

pub fn run(args: &ReplayArgs) -> Result<()> {
    let config = match args.config {
        Some(ref path) => super::config::load(path)?,
        None => InspectorConfig::default(),
    };

    let text = std::fs::read_to_string(&args.trace)
        .with_context(|| format!("Failed to read trace {}", args.trace.display()))?;
    let trace: Trace = toml::from_str(&text)
        .with_context(|| format!("Failed to parse trace {}", args.trace.display()))?;
    let base_dir = args.trace.parent().unwrap_or(Path::new("."));

    print_replay_header(&args.trace, trace.events.len(), &config);

    let mut session = Session::new(config, base_dir);
    for (i, event) in trace.events.iter().enumerate() {
        debug!(step = i + 1, %event, "Replaying event");
        let note = session.apply(event)?;
        print_step(i + 1, &event.to_string(), note.as_deref(), &session.inspector.snapshot());
    }

    Ok(())
}

/// Inspector plus the loads it has requested but that have not completed yet.
struct Session<'a> {
    inspector: Inspector,
    pending: Vec<LoadRequest>,
    base_dir: &'a Path,
}

impl<'a> Session<'a> {
    fn new(config: InspectorConfig, base_dir: &'a Path) -> Self {
        Self {
            inspector: Inspector::new(config.zoom),
            pending: Vec::new(),
            base_dir,
        }
    }

    /// Feed one event; returns a note worth printing alongside the state.
    fn apply(&mut self, event: &TraceEvent) -> Result<Option<String>> {
        let note = match event {
            TraceEvent::Container { x, y, w, h } => {
                self.inspector.set_container(Rect::new(*x, *y, *w, *h));
                None
            }
            TraceEvent::Projector { x, y, w, h } => {
                self.inspector.set_projector(Rect::new(*x, *y, *w, *h));
                None
            }
            TraceEvent::Source { thumb, full } => {
                let request = self
                    .inspector
                    .set_source(SourceSet::new(thumb.clone(), full.clone()));
                let note = format!("requested {}", request.uri);
                self.pending.clear();
                self.pending.push(request);
                Some(note)
            }
            TraceEvent::Loaded { source, w, h } => self.complete(*source, *w, *h)?,
            TraceEvent::Enter => {
                self.inspector.pointer_enter();
                None
            }
            TraceEvent::Move { x, y } => {
                self.inspector.pointer_move(Point::new(*x, *y));
                None
            }
            TraceEvent::Wheel { delta } => match self.inspector.wheel(*delta) {
                Some(request) => {
                    let note = format!("requested {}", request.uri);
                    self.pending.push(request);
                    Some(note)
                }
                None => None,
            },
            TraceEvent::Leave => {
                self.inspector.pointer_leave();
                None
            }
        };
        Ok(note)
    }

    fn complete(
        &mut self,
        source: SourceKind,
        w: Option<f64>,
        h: Option<f64>,
    ) -> Result<Option<String>> {
        let Some(index) = self.pending.iter().rposition(|r| r.ticket.kind == source) else {
            return Ok(Some(format!("no pending {source} load")));
        };
        let request = self.pending.remove(index);

        let size = match (w, h) {
            (Some(w), Some(h)) => Size::new(w, h),
            (None, None) => {
                let path = self.base_dir.join(&request.uri);
                image_size(&path)
                    .with_context(|| format!("Failed to probe {}", path.display()))?
            }
            _ => anyhow::bail!("loaded event needs both w and h, or neither"),
        };

        let note = if self.inspector.image_loaded(request.ticket, size) {
            format!("{} is {}x{}", request.uri, size.w, size.h)
        } else {
            format!("{} load discarded", request.uri)
        };
        Ok(Some(note))
    }
}
