// Core types shared by the drawing surface, the color picker and the window.

/// What the window shows each frame.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Match a new window size. Old contents are dropped; the next render repaints everything.
    pub fn resize(&mut self, width: usize, height: usize) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels = vec![0u32; width * height];
    }
}

/// A packed 0xAARRGGBB color, the layout the paint style stores and the picker hands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const fn from_channels(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[inline] pub const fn alpha(self) -> u8 { (self.0 >> 24) as u8 }
    #[inline] pub const fn red(self) -> u8 { (self.0 >> 16) as u8 }
    #[inline] pub const fn green(self) -> u8 { (self.0 >> 8) as u8 }
    #[inline] pub const fn blue(self) -> u8 { self.0 as u8 }

    /// Same RGB, different alpha byte.
    pub const fn with_alpha(self, alpha: u8) -> Self {
        Argb((self.0 & 0x00FF_FFFF) | ((alpha as u32) << 24))
    }

    /// Drop the alpha byte: 0x00RRGGBB, the window's pixel format.
    pub const fn rgb(self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    pub fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.red(), self.green(), self.blue(), self.alpha())
    }
}

/// A pointer position in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argb_channels_unpack() {
        let c = Argb(0x80FF_4020);
        assert_eq!((c.alpha(), c.red(), c.green(), c.blue()), (0x80, 0xFF, 0x40, 0x20));
        assert_eq!(Argb::from_channels(0x80, 0xFF, 0x40, 0x20), c);
        assert_eq!(c.rgb(), 0x00FF_4020);
    }

    #[test]
    fn with_alpha_keeps_rgb() {
        assert_eq!(Argb(0xFF12_3456).with_alpha(0x80), Argb(0x8012_3456));
    }

    #[test]
    fn resize_reallocates_only_on_change() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.pixels[0] = 7;
        fb.resize(4, 3);
        assert_eq!(fb.pixels[0], 7);
        fb.resize(2, 2);
        assert_eq!(fb.pixels.len(), 4);
        assert_eq!(fb.pixels[0], 0);
    }
}
