// Paint style: the color, width and effects a stroke is drawn with.
// Menu commands only ever flip fields here; nothing in this file touches pixels.

use crate::types::Argb;

pub const STROKE_WIDTH: f32 = 12.0;
pub const DEFAULT_COLOR: Argb = Argb(0xFFFF_0000);
pub const OPAQUE: u8 = 0xFF;
pub const SRC_ATOP_ALPHA: u8 = 0x80;

/// Emboss lighting. Visual: the stroke looks raised; with the default direction the bottom-right bevel is lit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmbossParams {
    pub direction: [f32; 3], // light direction, not normalized
    pub ambient: f32,        // 0..1 base light
    pub specular: f32,       // highlight exponent
    pub blur_radius: f32,    // softness of the bevel
}

impl EmbossParams {
    pub const DEFAULT: EmbossParams =
        EmbossParams { direction: [1.0, 1.0, 1.0], ambient: 0.4, specular: 6.0, blur_radius: 3.5 };
}

/// Normal-style blur. Visual: the stroke bleeds softly past its edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurParams {
    pub radius: f32,
}

impl BlurParams {
    pub const DEFAULT: BlurParams = BlurParams { radius: 8.0 };
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MaskFilter {
    Emboss(EmbossParams),
    Blur(BlurParams),
}

impl MaskFilter {
    pub fn label(&self) -> &'static str {
        match self {
            MaskFilter::Emboss(_) => "EMBOSS",
            MaskFilter::Blur(_) => "BLUR",
        }
    }
}

/// How a stroke combines with what is already in the raster buffer.
/// `None` on the paint style means plain source-over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Xfermode {
    Clear,
    SrcAtop,
}

impl Xfermode {
    pub fn label(&self) -> &'static str {
        match self {
            Xfermode::Clear => "ERASE",
            Xfermode::SrcAtop => "SRCATOP",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaintStyle {
    color: Argb,
    mask_filter: Option<MaskFilter>,
    xfermode: Option<Xfermode>,
}

impl Default for PaintStyle {
    fn default() -> Self {
        Self { color: DEFAULT_COLOR, mask_filter: None, xfermode: None }
    }
}

impl PaintStyle {
    pub fn color(&self) -> Argb { self.color }
    #[cfg(test)]
    pub fn alpha(&self) -> u8 { self.color.alpha() }
    pub fn mask_filter(&self) -> Option<MaskFilter> { self.mask_filter }
    pub fn xfermode(&self) -> Option<Xfermode> { self.xfermode }

    /// Width, cap and join are fixed: 12px, round, round.
    pub fn stroke(&self) -> tiny_skia::Stroke {
        tiny_skia::Stroke {
            width: STROKE_WIDTH,
            line_cap: tiny_skia::LineCap::Round,
            line_join: tiny_skia::LineJoin::Round,
            ..tiny_skia::Stroke::default()
        }
    }

    /// Replace the whole ARGB value, alpha included.
    pub fn set_color(&mut self, color: Argb) {
        self.color = color;
    }

    /// Back to plain source-over at full opacity. Color RGB and mask filter stay.
    pub fn reset(&mut self) {
        self.xfermode = None;
        self.color = self.color.with_alpha(OPAQUE);
    }

    pub fn emboss(&mut self) {
        self.mask_filter = match self.mask_filter {
            Some(MaskFilter::Emboss(_)) => None,
            _ => Some(MaskFilter::Emboss(EmbossParams::DEFAULT)),
        };
    }

    pub fn blur(&mut self) {
        self.mask_filter = match self.mask_filter {
            Some(MaskFilter::Blur(_)) => None,
            _ => Some(MaskFilter::Blur(BlurParams::DEFAULT)),
        };
    }

    /// Strokes punch holes instead of adding paint. Alpha is left alone.
    pub fn erase(&mut self) {
        self.xfermode = Some(Xfermode::Clear);
    }

    /// Strokes only land where paint already is, at half opacity.
    pub fn src_atop(&mut self) {
        self.xfermode = Some(Xfermode::SrcAtop);
        self.color = self.color.with_alpha(SRC_ATOP_ALPHA);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_canvas() {
        let p = PaintStyle::default();
        assert_eq!(p.color(), Argb(0xFFFF_0000));
        assert_eq!(p.mask_filter(), None);
        assert_eq!(p.xfermode(), None);
        let s = p.stroke();
        assert_eq!(s.width, 12.0);
        assert_eq!(s.line_cap, tiny_skia::LineCap::Round);
        assert_eq!(s.line_join, tiny_skia::LineJoin::Round);
    }

    #[test]
    fn emboss_twice_clears_the_filter() {
        let mut p = PaintStyle::default();
        p.emboss();
        assert!(matches!(p.mask_filter(), Some(MaskFilter::Emboss(_))));
        p.emboss();
        assert_eq!(p.mask_filter(), None);
    }

    #[test]
    fn blur_replaces_emboss() {
        let mut p = PaintStyle::default();
        p.emboss();
        p.blur();
        assert_eq!(p.mask_filter(), Some(MaskFilter::Blur(BlurParams::DEFAULT)));
        p.blur();
        assert_eq!(p.mask_filter(), None);
    }

    #[test]
    fn src_atop_sets_half_alpha() {
        let mut p = PaintStyle::default();
        p.src_atop();
        assert_eq!(p.xfermode(), Some(Xfermode::SrcAtop));
        assert_eq!(p.alpha(), 0x80);
        assert_eq!(p.color().rgb(), 0x00FF_0000);
    }

    #[test]
    fn erase_leaves_alpha_unchanged() {
        let mut p = PaintStyle::default();
        p.set_color(Argb(0xC000_FF00));
        p.erase();
        assert_eq!(p.xfermode(), Some(Xfermode::Clear));
        assert_eq!(p.alpha(), 0xC0);
    }

    #[test]
    fn reset_keeps_filter_and_rgb() {
        let mut p = PaintStyle::default();
        p.set_color(Argb(0xFF00_00FF));
        p.blur();
        p.src_atop();
        p.reset();
        assert_eq!(p.xfermode(), None);
        assert_eq!(p.color(), Argb(0xFF00_00FF));
        assert!(matches!(p.mask_filter(), Some(MaskFilter::Blur(_))));
    }
}
