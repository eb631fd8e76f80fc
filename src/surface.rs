// The drawing surface: offscreen raster buffer + the stroke in progress + the paint style.
// Visual: everything you see inside the window except the HUD and the color picker.

use crate::error::Error;
use crate::paint::PaintStyle;
use crate::render::{draw_stroke, pixmap_to_frame};
use crate::stroke::ActivePath;
use crate::types::{Argb, FrameBuffer, Point};
use tiny_skia::{Pixmap, PixmapPaint, Transform};
use tracing::{debug, info};

/// Canvas color behind the committed strokes.
pub const BACKGROUND: Argb = Argb(0xFFAA_AAAA);

pub struct DrawingSurface {
    raster: Pixmap,    // committed strokes, premultiplied RGBA
    screen: Pixmap,    // scratch for render(): background + raster + active path
    path: ActivePath,
    paint: PaintStyle,
    committed: usize,  // strokes committed since the raster buffer was created
}

fn alloc(width: u32, height: u32) -> Result<Pixmap, Error> {
    Pixmap::new(width, height).ok_or(Error::RasterAlloc { width, height })
}

impl DrawingSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let surface = Self {
            raster: alloc(width, height)?,
            screen: alloc(width, height)?,
            path: ActivePath::new(),
            paint: PaintStyle::default(),
            committed: 0,
        };
        info!(width, height, "surface created");
        Ok(surface)
    }

    pub fn width(&self) -> u32 { self.raster.width() }
    pub fn height(&self) -> u32 { self.raster.height() }

    /// Replace the raster buffer with an empty one of the new size.
    /// Committed strokes do not survive a size change.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == self.width() && height == self.height() {
            return Ok(());
        }
        let raster = alloc(width, height)?;
        let screen = alloc(width, height)?;
        self.raster = raster;
        self.screen = screen;
        self.committed = 0;
        info!(width, height, "surface resized");
        Ok(())
    }

    /// Throw away every committed stroke.
    pub fn clear(&mut self) {
        self.raster.fill(tiny_skia::Color::TRANSPARENT);
        self.path.clear();
        self.committed = 0;
        debug!("canvas cleared");
    }

    /* ---------- pointer events ---------- */

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.path.start(Point::new(x, y));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.path.extend(Point::new(x, y));
    }

    /// Finish the stroke and burn it into the raster buffer.
    pub fn pointer_up(&mut self) {
        if !self.path.finish() {
            return;
        }
        let drawn = match self.path.to_path() {
            Some(path) => draw_stroke(&mut self.raster, &path, &self.paint),
            None => false,
        };
        self.committed += 1;
        debug!(segments = self.path.len(), drawn, total = self.committed, "stroke committed");
        self.path.clear();
    }

    /* ---------- drawing ---------- */

    /// Background, then the raster buffer, then the stroke still under the finger.
    pub fn render(&mut self, frame: &mut FrameBuffer) {
        self.screen.fill(BACKGROUND.to_skia());
        self.screen.draw_pixmap(0, 0, self.raster.as_ref(), &PixmapPaint::default(), Transform::identity(), None);
        if let Some(path) = self.path.to_path() {
            draw_stroke(&mut self.screen, &path, &self.paint);
        }
        pixmap_to_frame(&self.screen, frame);
    }

    /// The committed strokes over the background, as straight (opaque) RGBA bytes.
    pub fn flatten_rgba(&self) -> Result<Vec<u8>, Error> {
        let mut flat = alloc(self.width(), self.height())?;
        flat.fill(BACKGROUND.to_skia());
        flat.draw_pixmap(0, 0, self.raster.as_ref(), &PixmapPaint::default(), Transform::identity(), None);
        Ok(flat.take())
    }

    /* ---------- paint style ---------- */

    pub fn paint(&self) -> &PaintStyle { &self.paint }
    pub fn paint_color(&self) -> Argb { self.paint.color() }
    pub fn set_paint_color(&mut self, color: Argb) { self.paint.set_color(color); }
    pub fn reset_paint(&mut self) { self.paint.reset(); }
    pub fn emboss(&mut self) { self.paint.emboss(); }
    pub fn blur(&mut self) { self.paint.blur(); }
    pub fn erase(&mut self) { self.paint.erase(); }
    pub fn src_atop(&mut self) { self.paint.src_atop(); }

    /* ---------- inspection ---------- */

    pub fn committed_strokes(&self) -> usize { self.committed }
    #[cfg(test)]
    pub fn active_path(&self) -> &ActivePath { &self.path }
    #[cfg(test)]
    pub fn raster(&self) -> &Pixmap { &self.raster }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(s: &DrawingSurface, x: usize, y: usize) -> u8 {
        s.raster().data()[(y * s.width() as usize + x) * 4 + 3]
    }

    fn swipe(s: &mut DrawingSurface, y: f32) {
        s.pointer_down(10.0, y);
        s.pointer_move(30.0, y);
        s.pointer_move(50.0, y);
        s.pointer_up();
    }

    #[test]
    fn zero_size_is_an_error() {
        assert!(matches!(DrawingSurface::new(0, 10), Err(Error::RasterAlloc { width: 0, height: 10 })));
    }

    #[test]
    fn jitter_never_grows_the_path() {
        let mut s = DrawingSurface::new(64, 64).unwrap();
        s.pointer_down(20.0, 20.0);
        for i in 0..20 {
            let d = (i % 4) as f32 - 1.5;
            s.pointer_move(20.0 + d, 20.0 - d);
            assert_eq!(s.active_path().len(), 1);
        }
    }

    #[test]
    fn down_move_up_commits_exactly_one_stroke() {
        let mut s = DrawingSurface::new(64, 64).unwrap();
        s.pointer_down(10.0, 32.0);
        s.pointer_move(40.0, 32.0);
        assert_eq!(alpha_at(&s, 20, 32), 0, "nothing is committed before release");
        s.pointer_up();
        assert_eq!(s.committed_strokes(), 1);
        assert!(s.active_path().is_empty());
        assert_eq!(alpha_at(&s, 20, 32), 255);
    }

    #[test]
    fn stray_up_and_move_are_ignored() {
        let mut s = DrawingSurface::new(32, 32).unwrap();
        s.pointer_move(10.0, 10.0);
        s.pointer_up();
        assert_eq!(s.committed_strokes(), 0);
        assert!(s.raster().data().iter().all(|&b| b == 0));
    }

    #[test]
    fn erase_removes_paint_under_the_stroke() {
        let mut s = DrawingSurface::new(64, 64).unwrap();
        swipe(&mut s, 32.0);
        s.reset_paint();
        s.erase();
        swipe(&mut s, 32.0);
        assert_eq!(alpha_at(&s, 30, 32), 0);
        assert_eq!(s.committed_strokes(), 2);
    }

    #[test]
    fn render_shows_background_raster_and_active_path() {
        let mut s = DrawingSurface::new(64, 64).unwrap();
        swipe(&mut s, 16.0);
        s.set_paint_color(Argb(0xFF00_FF00));
        s.pointer_down(10.0, 48.0);
        s.pointer_move(50.0, 48.0);

        let mut frame = FrameBuffer::new(0, 0);
        s.render(&mut frame);
        assert_eq!(frame.pixels[2 * 64 + 2], 0x00AA_AAAA);
        assert_eq!(frame.pixels[16 * 64 + 20], 0x00FF_0000);
        // The in-progress curve runs from (10,48) to the midpoint (30,48).
        assert_eq!(frame.pixels[48 * 64 + 20], 0x0000_FF00);
        assert_eq!(alpha_at(&s, 20, 48), 0, "active path is not committed");
    }

    #[test]
    fn resize_drops_committed_strokes() {
        let mut s = DrawingSurface::new(64, 64).unwrap();
        swipe(&mut s, 32.0);
        s.resize(64, 64).unwrap();
        assert_eq!(s.committed_strokes(), 1, "same size is a no-op");
        s.resize(80, 40).unwrap();
        assert_eq!((s.width(), s.height(), s.committed_strokes()), (80, 40, 0));
        assert!(s.raster().data().iter().all(|&b| b == 0));
    }

    #[test]
    fn clear_empties_the_canvas() {
        let mut s = DrawingSurface::new(64, 64).unwrap();
        swipe(&mut s, 32.0);
        s.clear();
        assert_eq!(s.committed_strokes(), 0);
        assert_eq!(alpha_at(&s, 30, 32), 0);
    }

    #[test]
    fn flatten_is_opaque() {
        let mut s = DrawingSurface::new(16, 16).unwrap();
        s.pointer_down(2.0, 8.0);
        s.pointer_move(14.0, 8.0);
        s.pointer_up();
        let flat = s.flatten_rgba().unwrap();
        assert_eq!(flat.len(), 16 * 16 * 4);
        assert!(flat.chunks_exact(4).all(|px| px[3] == 255));
        assert_eq!(&flat[..4], &[0xAA, 0xAA, 0xAA, 0xFF]);
    }
}
