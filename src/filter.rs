// Mask filters: effects that reshape a stroke's coverage before it gets colored.
// Visual outcomes:
// - Blur: the stroke's edge fades out over several pixels.
// - Emboss: the stroke keeps its shape but gets a bevel lit from the light direction.

use crate::paint::{BlurParams, EmbossParams, MaskFilter};

/// A pixel rectangle [x0, x1) × [y0, y1) inside the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Region {
    /// Bounds grown by `pad` pixels on every side, clipped to a `width` × `height` canvas.
    /// None when nothing is left after clipping.
    pub fn around(bounds: tiny_skia::Rect, pad: usize, width: usize, height: usize) -> Option<Region> {
        let pad = pad as f32 + 1.0; // +1 for anti-aliased edge pixels
        let clip = |v: f32, max: usize| v.max(0.0).min(max as f32) as usize;
        let region = Region {
            x0: clip((bounds.left() - pad).floor(), width),
            y0: clip((bounds.top() - pad).floor(), height),
            x1: clip((bounds.right() + pad).ceil(), width),
            y1: clip((bounds.bottom() + pad).ceil(), height),
        };
        (region.x0 < region.x1 && region.y0 < region.y1).then_some(region)
    }

    pub fn width(&self) -> usize { self.x1 - self.x0 }
    pub fn height(&self) -> usize { self.y1 - self.y0 }
}

/// Per-pixel lighting from the emboss filter, laid out over a `Region`.
/// Color channels become `min(255, c * mul / 255 + add)`.
pub struct Shading {
    pub region: Region,
    pub mul: Vec<u8>,
    pub add: Vec<u8>,
}

impl Shading {
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> (u8, u8) {
        let i = (y - self.region.y0) * self.region.width() + (x - self.region.x0);
        (self.mul[i], self.add[i])
    }
}

/// Gaussian sigma for a blur radius, the usual radius→sigma conversion.
pub fn radius_to_sigma(radius: f32) -> f32 {
    if radius > 0.0 { 0.57735 * radius + 0.5 } else { 0.0 }
}

/// How far (in pixels) a filter can push coverage past the stroke outline.
pub fn reach(filter: &MaskFilter) -> usize {
    let radius = match filter {
        MaskFilter::Blur(p) => p.radius,
        MaskFilter::Emboss(p) => p.blur_radius,
    };
    (3.0 * radius_to_sigma(radius)).ceil() as usize
}

/// Apply `filter` to an 8-bit coverage plane of `stride` columns, only inside `region`.
/// Blur rewrites the coverage; emboss leaves it alone and returns the lighting.
pub fn apply(filter: &MaskFilter, coverage: &mut [u8], stride: usize, region: Region) -> Option<Shading> {
    match filter {
        MaskFilter::Blur(p) => {
            blur_region(coverage, stride, region, p);
            None
        }
        MaskFilter::Emboss(p) => Some(emboss_region(coverage, stride, region, p)),
    }
}

fn blur_region(coverage: &mut [u8], stride: usize, region: Region, params: &BlurParams) {
    let mut local = copy_region(coverage, stride, region);
    gaussian_blur(&mut local, region.width(), region.height(), radius_to_sigma(params.radius));
    for y in region.y0..region.y1 {
        let src = &local[(y - region.y0) * region.width()..][..region.width()];
        coverage[y * stride + region.x0..y * stride + region.x1].copy_from_slice(src);
    }
}

fn emboss_region(coverage: &[u8], stride: usize, region: Region, params: &EmbossParams) -> Shading {
    let (w, h) = (region.width(), region.height());
    let mut height_map = copy_region(coverage, stride, region);
    gaussian_blur(&mut height_map, w, h, radius_to_sigma(params.blur_radius));

    let [lx, ly, lz] = params.direction;
    let len = (lx * lx + ly * ly + lz * lz).sqrt().max(f32::EPSILON);
    let (lx, ly, lz) = (lx / len, ly / len, lz / len);
    // Height differences are in 0..255 units; this is the normal's z so flat areas face straight up.
    const NZ: f32 = 32.0;

    let at = |x: isize, y: isize| -> f32 {
        if x < 0 || y < 0 || x >= w as isize || y >= h as isize {
            0.0
        } else {
            height_map[y as usize * w + x as usize] as f32
        }
    };

    let mut mul = vec![0u8; w * h];
    let mut add = vec![0u8; w * h];
    for y in 0..h as isize {
        for x in 0..w as isize {
            let nx = at(x - 1, y) - at(x + 1, y);
            let ny = at(x, y - 1) - at(x, y + 1);
            let n_len = (nx * nx + ny * ny + NZ * NZ).sqrt();
            let dot = ((nx * lx + ny * ly + NZ * lz) / n_len).max(0.0);

            let i = y as usize * w + x as usize;
            mul[i] = ((params.ambient + (1.0 - params.ambient) * dot) * 255.0).round() as u8;
            add[i] = (dot.powf(params.specular) * 255.0).round() as u8;
        }
    }
    Shading { region, mul, add }
}

fn copy_region(coverage: &[u8], stride: usize, region: Region) -> Vec<u8> {
    let mut out = Vec::with_capacity(region.width() * region.height());
    for y in region.y0..region.y1 {
        out.extend_from_slice(&coverage[y * stride + region.x0..y * stride + region.x1]);
    }
    out
}

/// Three box blurs in a row look close enough to a gaussian.
fn gaussian_blur(plane: &mut [u8], w: usize, h: usize, sigma: f32) {
    if sigma <= 0.0 || w == 0 || h == 0 {
        return;
    }
    let mut tmp = vec![0u8; plane.len()];
    for size in box_sizes(sigma, 3) {
        let r = size / 2;
        box_blur_h(plane, &mut tmp, w, h, r);
        box_blur_v(&tmp, plane, w, h, r);
    }
}

/// Odd box widths whose repeated application approximates a gaussian of `sigma`.
fn box_sizes(sigma: f32, passes: usize) -> Vec<usize> {
    let n = passes as f32;
    let ideal = (12.0 * sigma * sigma / n + 1.0).sqrt();
    let mut wl = ideal.floor() as i32;
    if wl % 2 == 0 {
        wl -= 1;
    }
    let wl = wl.max(1);
    let wu = wl + 2;
    let wlf = wl as f32;
    let m = ((12.0 * sigma * sigma - n * wlf * wlf - 4.0 * n * wlf - 3.0 * n) / (-4.0 * wlf - 4.0)).round() as i32;
    (0..passes as i32).map(|i| if i < m { wl as usize } else { wu as usize }).collect()
}

/* ---- Sliding-window box blur over one channel. Outside the plane counts as empty. ---- */

fn box_blur_h(src: &[u8], dst: &mut [u8], w: usize, h: usize, r: usize) {
    for y in 0..h {
        let row = y * w;
        blur_line(|i| src[row + i], |i, v| dst[row + i] = v, w, r);
    }
}

fn box_blur_v(src: &[u8], dst: &mut [u8], w: usize, h: usize, r: usize) {
    for x in 0..w {
        blur_line(|i| src[i * w + x], |i, v| dst[i * w + x] = v, h, r);
    }
}

#[inline]
fn blur_line(read: impl Fn(usize) -> u8, mut write: impl FnMut(usize, u8), n: usize, r: usize) {
    let win = (2 * r + 1) as u32;
    // Prime the window [0..r]
    let mut sum: u32 = (0..=r.min(n - 1)).map(|i| read(i) as u32).sum();
    for i in 0..n {
        write(i, ((sum + win / 2) / win) as u8);
        // Slide: add the new right sample, drop the old left one
        if i + r + 1 < n {
            sum += read(i + r + 1) as u32;
        }
        if i >= r {
            sum -= read(i - r) as u32;
        }
    }
}
