// Software stroke rendering: coverage -> mask filter -> compositing.
// Visual: this is where a finished (or in-progress) stroke actually turns into pixels.

use crate::filter::{self, Region, Shading};
use crate::paint::{PaintStyle, Xfermode};
use crate::types::{Argb, FrameBuffer};
use tiny_skia::{BlendMode, FillRule, Mask, Path, Pixmap, PixmapPaint, Transform};

/// Round-to-nearest `a * b / 255` for 8-bit channels.
#[inline]
pub fn mul255(a: u8, b: u8) -> u8 {
    let p = a as u32 * b as u32 + 128;
    ((p + (p >> 8)) >> 8) as u8
}

/// Stroke `path` onto `target` with everything the paint style asks for.
/// Returns false when the path covers no pixels of `target`.
pub fn draw_stroke(target: &mut Pixmap, path: &Path, paint: &PaintStyle) -> bool {
    let (w, h) = (target.width(), target.height());
    let Some(outline) = path.stroke(&paint.stroke(), 1.0) else { return false };

    let mask_filter = paint.mask_filter();
    let pad = mask_filter.as_ref().map_or(0, filter::reach);
    let Some(region) = Region::around(outline.bounds(), pad, w as usize, h as usize) else {
        return false;
    };

    let Some(mut coverage) = Mask::new(w, h) else { return false };
    coverage.fill_path(&outline, FillRule::Winding, true, Transform::identity());

    let shading = mask_filter.and_then(|f| filter::apply(&f, coverage.data_mut(), w as usize, region));
    composite(target, coverage.data(), region, paint, shading.as_ref());
    true
}

/// Blend the paint color, weighted by `coverage`, into `dst`.
///
/// The stroke becomes a premultiplied source pixmap over `region`, and tiny-skia
/// blends it in. Outside the stroke the source is transparent, so every mode
/// leaves those pixels alone:
/// - source-over: `D = S + D(1 - Sa)`
/// - clear:       destination-out with `Sa = c`, i.e. `D = D(1 - c)`
/// - src-atop:    `D = S·Da + D(1 - Sa)`
pub fn composite(dst: &mut Pixmap, coverage: &[u8], region: Region, paint: &PaintStyle, shading: Option<&Shading>) {
    let Some(src) = stroke_source(coverage, dst.width() as usize, region, paint, shading) else { return };
    let blend_mode = match paint.xfermode() {
        None => BlendMode::SourceOver,
        Some(Xfermode::Clear) => BlendMode::DestinationOut,
        Some(Xfermode::SrcAtop) => BlendMode::SourceAtop,
    };
    let pixmap_paint = PixmapPaint { blend_mode, ..PixmapPaint::default() };
    dst.draw_pixmap(region.x0 as i32, region.y0 as i32, src.as_ref(), &pixmap_paint, Transform::identity(), None);
}

/// The colored stroke over `region`: paint color (shaded when embossed) × alpha × coverage.
/// Clear only needs the coverage, so it ignores color and alpha.
fn stroke_source(
    coverage: &[u8],
    stride: usize,
    region: Region,
    paint: &PaintStyle,
    shading: Option<&Shading>,
) -> Option<Pixmap> {
    let mut src = Pixmap::new(region.width() as u32, region.height() as u32)?;
    let color = paint.color();
    let clear = paint.xfermode() == Some(Xfermode::Clear);
    let data = src.data_mut();

    for y in region.y0..region.y1 {
        for x in region.x0..region.x1 {
            let c = coverage[y * stride + x];
            if c == 0 { continue; }
            let i = ((y - region.y0) * region.width() + (x - region.x0)) * 4;
            if clear {
                data[i + 3] = c;
                continue;
            }
            let sa = mul255(color.alpha(), c);
            let [r, g, b] = shaded_rgb(color, shading, x, y);
            data[i..i + 4].copy_from_slice(&[mul255(r, sa), mul255(g, sa), mul255(b, sa), sa]);
        }
    }
    Some(src)
}

#[inline]
fn shaded_rgb(color: Argb, shading: Option<&Shading>, x: usize, y: usize) -> [u8; 3] {
    let rgb = [color.red(), color.green(), color.blue()];
    match shading {
        Some(s) => {
            let (mul, add) = s.at(x, y);
            rgb.map(|c| mul255(c, mul).saturating_add(add))
        }
        None => rgb,
    }
}

/// Copy a premultiplied pixmap into the window's 0x00RRGGBB frame.
/// Transparent pixels come out black.
pub fn pixmap_to_frame(src: &Pixmap, frame: &mut FrameBuffer) {
    frame.resize(src.width() as usize, src.height() as usize);
    for (out, px) in frame.pixels.iter_mut().zip(src.data().chunks_exact(4)) {
        *out = ((px[0] as u32) << 16) | ((px[1] as u32) << 8) | px[2] as u32;
    }
}
