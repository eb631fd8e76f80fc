// What you SEE:
// • A gray canvas. Hold Left Mouse and drag to paint a smooth red line.
// • C opens the hue ring (click a hue, then the center disc to apply).
// • E emboss, B blur (press again to turn off), X erase, A src-atop (half-strength tint over paint).
// • S saves a PNG, N starts a new canvas, H hides the status line. ESC closes the picker, then quits.

mod config;
mod draw;
mod error;
mod filter;
mod input;
mod menu;
mod paint;
mod picker;
mod render;
mod snapshot;
mod stroke;
mod surface;
mod types;

use clap::Parser;
use config::Args;
use draw::{draw_text_5x7, Drawer};
use error::Error;
use input::{Command, PointerEvent, PointerTracker};
use menu::MenuOutcome;
use picker::{ColorPicker, PickerEvent};
use surface::DrawingSurface;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use types::{FrameBuffer, Point};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut drawer = Drawer::new(&args.title, args.width as usize, args.height as usize, args.fps)?;
    let mut surface = DrawingSurface::new(args.width, args.height)?;
    let mut frame = FrameBuffer::new(args.width as usize, args.height as usize);

    let mut pointer = PointerTracker::default();
    let mut picker: Option<ColorPicker> = None;
    let mut show_hud = !args.no_hud;

    'frames: while drawer.is_open() {
        /* 1) Follow the window size. A minimized window reports 0x0; keep the old canvas then.
              A resize mid-stroke waits for the release. */
        let (w, h) = drawer.size();
        if w > 0 && h > 0 && !pointer.is_held() {
            surface.resize(w as u32, h as u32)?;
        }
        let center = Point::new(surface.width() as f32 / 2.0, surface.height() as f32 / 2.0);

        /* 2) Keyboard commands */
        for command in drawer.commands() {
            match command {
                Command::Menu(item) => {
                    if item.apply(&mut surface) == MenuOutcome::OpenColorPicker {
                        picker = Some(ColorPicker::new(center, surface.paint_color()));
                    }
                }
                Command::Snapshot => {
                    let path = snapshot::default_path(&args.output_dir);
                    match snapshot::save_png(&surface, &path) {
                        Ok(()) => info!(path = %path.display(), "snapshot saved"),
                        Err(e) => warn!(path = %path.display(), error = %e, "snapshot failed"),
                    }
                }
                Command::ClearCanvas => surface.clear(),
                Command::ToggleHud => show_hud = !show_hud,
                Command::Escape => {
                    if picker.take().is_none() {
                        break 'frames;
                    }
                }
            }
        }

        /* 3) Pointer: presses go to the picker while it is open, everything else to the canvas. */
        match pointer.update(drawer.left_mouse_down(), drawer.mouse_pos()) {
            Some(PointerEvent::Down(p)) => match picker.as_mut() {
                Some(open) => match open.click(p) {
                    PickerEvent::Picked(color) => {
                        surface.set_paint_color(color);
                        picker = None;
                    }
                    PickerEvent::Cancelled => picker = None,
                    PickerEvent::Pending => {}
                },
                None => surface.pointer_down(p.x, p.y),
            },
            Some(PointerEvent::Move(p)) => surface.pointer_move(p.x, p.y),
            Some(PointerEvent::Up) => surface.pointer_up(),
            None => {}
        }

        /* 4) Compose the frame: canvas, picker overlay, status line. */
        surface.render(&mut frame);
        if let Some(open) = picker.as_mut() {
            open.recenter(center);
            open.render(&mut frame);
        }
        if show_hud {
            draw_text_5x7(&mut frame, 8, 8, &hud_line(&surface, picker.as_ref()), 0x00_FF_FF_FF);
        }

        /* 5) Present */
        drawer.present(&frame)?;
    }

    info!(strokes = surface.committed_strokes(), "bye");
    Ok(())
}

fn hud_line(surface: &DrawingSurface, picker: Option<&ColorPicker>) -> String {
    if let Some(open) = picker {
        return format!("PICK A HUE, THEN CLICK THE CENTER | #{:06X} | ESC: CANCEL", open.candidate().rgb());
    }
    let paint = surface.paint();
    format!(
        "{} | {} | #{:06X} | STROKES: {}",
        paint.mask_filter().map_or("NO FILTER", |f| f.label()),
        paint.xfermode().map_or("SRC-OVER", |m| m.label()),
        paint.color().rgb(),
        surface.committed_strokes(),
    )
}
