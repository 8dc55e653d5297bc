use std::path::Path;

use console::Style;
use projector_core::config::InspectorConfig;
use projector_core::fit::Padding;
use projector_core::geometry::Rect;
use projector_core::inspector::InspectorSnapshot;
use projector_core::lens::{AnchorMode, LensView};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    mode: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            mode: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

fn rule(len: usize) -> String {
    "\u{2550}".repeat(len)
}

fn fmt_rect(r: &Rect) -> String {
    format!("{:.1}x{:.1} at ({:.1}, {:.1})", r.w, r.h, r.x, r.y)
}

pub fn print_lens_view(zoom: f64, padding: &Padding, view: &LensView) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Lens"));
    println!("  {}", s.title.apply_to(rule(4)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!("{zoom:.2}x"))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Padding"),
        s.value.apply_to(format!("{:.2} x {:.2}", padding.w, padding.h))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Active area"),
        s.value
            .apply_to(format!("{:.2} x {:.2}", view.area.w, view.area.h))
    );
    println!();

    println!("  {}", s.header.apply_to("Mask"));
    let m = &view.mask;
    for (name, r) in [
        ("Top", &m.top),
        ("Left", &m.left),
        ("Right", &m.right),
        ("Bottom", &m.bottom),
    ] {
        println!(
            "    {:<12}{}",
            s.label.apply_to(name),
            s.value.apply_to(fmt_rect(r))
        );
    }
    println!();

    let t = &view.transform;
    println!("  {}", s.header.apply_to("Projection"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Anchor"),
        s.mode.apply_to(t.anchor)
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Image"),
        s.value.apply_to(format!("{:.2} x {:.2}", t.width, t.height))
    );
    match t.anchor {
        AnchorMode::Margin => {
            print_offset(&s, "Margin top", t.margin_top);
            print_offset(&s, "Margin left", t.margin_left);
        }
        AnchorMode::CropX => {
            print_offset(&s, "Margin top", t.margin_top);
            print_offset(&s, "Crop x", t.crop_x);
        }
        AnchorMode::CropY => {
            print_offset(&s, "Margin left", t.margin_left);
            print_offset(&s, "Crop y", t.crop_y);
        }
        AnchorMode::CropBoth => {
            print_offset(&s, "Crop x", t.crop_x);
            print_offset(&s, "Crop y", t.crop_y);
        }
    }
    println!();
}

fn print_offset(s: &Styles, label: &str, value: f64) {
    println!(
        "    {:<12}{}",
        s.label.apply_to(label),
        s.value.apply_to(format!("{value:.2}"))
    );
}

pub fn print_replay_header(trace: &Path, events: usize, config: &InspectorConfig) {
    let s = Styles::new();
    let z = &config.zoom;

    println!();
    println!("  {}", s.title.apply_to("Projector Replay"));
    println!("  {}", s.title.apply_to(rule(16)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Trace"),
        s.path.apply_to(trace.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Events"),
        s.value.apply_to(events)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Zoom"),
        s.value.apply_to(format!(
            "{} in [{}, {}], load above {}, step {}",
            z.initial, z.min, z.max, z.load_threshold, z.wheel_sensitivity
        ))
    );
    println!();
}

pub fn print_step(index: usize, event: &str, note: Option<&str>, snap: &InspectorSnapshot) {
    let s = Styles::new();

    print!(
        "  {} {}",
        s.label.apply_to(format!("{index:>3}")),
        s.header.apply_to(event)
    );
    if let Some(note) = note {
        print!("  {}", s.disabled.apply_to(format!("({note})")));
    }
    println!();

    let projected = match snap.projected_source {
        Some(kind) => s.mode.apply_to(kind.to_string()),
        None => s.disabled.apply_to("nothing".to_string()),
    };
    println!(
        "      {:<12}{}  {:<10}{}  {:<10}{}",
        s.label.apply_to("zoom"),
        s.value.apply_to(format!("{:.2}", snap.zoom_level)),
        s.label.apply_to("active"),
        s.mode.apply_to(snap.active_source),
        s.label.apply_to("showing"),
        projected,
    );

    match snap.view {
        Some(ref view) => {
            let t = &view.transform;
            let (x, y) = t.offset();
            println!(
                "      {:<12}{}  {:<10}{}  {:<10}{}",
                s.label.apply_to("area"),
                s.value
                    .apply_to(format!("{:.2}x{:.2}", view.area.w, view.area.h)),
                s.label.apply_to("anchor"),
                s.mode.apply_to(t.anchor),
                s.label.apply_to("offset"),
                s.value.apply_to(format!("({x:.2}, {y:.2})")),
            );
        }
        None if snap.hovering => {
            println!(
                "      {}",
                s.disabled.apply_to("hovering, projector not measured")
            );
        }
        None => {
            println!("      {}", s.disabled.apply_to("projector hidden"));
        }
    }
}
