// Hue-ring color picker drawn over the canvas.
// Visual: a rainbow ring around the canvas center; the disc in the middle shows the candidate.
// Click the ring to choose a hue, click the disc to apply it.

use crate::types::{Argb, FrameBuffer, Point};
use std::f32::consts::TAU;

pub const RING_OUTER: f32 = 100.0;
pub const RING_INNER: f32 = 68.0;
pub const CENTER_RADIUS: f32 = 32.0;

/// Hue sweep around the ring, starting at angle 0 and ending where it began.
pub const HUE_STOPS: [Argb; 7] = [
    Argb(0xFFFF_0000),
    Argb(0xFFFF_00FF),
    Argb(0xFF00_00FF),
    Argb(0xFF00_FFFF),
    Argb(0xFF00_FF00),
    Argb(0xFFFF_FF00),
    Argb(0xFFFF_0000),
];

#[inline]
fn ave(s: u8, d: u8, p: f32) -> u8 {
    (s as f32 + (p * (d as f32 - s as f32)).round()).clamp(0.0, 255.0) as u8
}

/// Color at `unit` in [0, 1] along the hue stops. Out-of-range values clamp to the ends.
pub fn interp_color(unit: f32) -> Argb {
    if unit.is_nan() || unit <= 0.0 {
        return HUE_STOPS[0];
    }
    if unit >= 1.0 {
        return HUE_STOPS[HUE_STOPS.len() - 1];
    }
    let p = unit * (HUE_STOPS.len() - 1) as f32;
    let i = p as usize;
    let p = p - i as f32;
    let (c0, c1) = (HUE_STOPS[i], HUE_STOPS[i + 1]);
    Argb::from_channels(
        ave(c0.alpha(), c1.alpha(), p),
        ave(c0.red(), c1.red(), p),
        ave(c0.green(), c1.green(), p),
        ave(c0.blue(), c1.blue(), p),
    )
}

/// Angle of (dx, dy) as a fraction of a full turn, in [0, 1).
pub fn angle_unit(dx: f32, dy: f32) -> f32 {
    let unit = dy.atan2(dx) / TAU;
    if unit < 0.0 { unit + 1.0 } else { unit }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickerEvent {
    Pending,        // hue changed or nothing hit the ring; keep the picker open
    Picked(Argb),   // center disc clicked: apply this color
    Cancelled,      // clicked outside everything
}

pub struct ColorPicker {
    center: Point,
    candidate: Argb,
}

impl ColorPicker {
    /// Open centered on the canvas, seeded with the color currently in use.
    pub fn new(center: Point, initial: Argb) -> Self {
        Self { center, candidate: initial }
    }

    pub fn candidate(&self) -> Argb {
        self.candidate
    }

    pub fn recenter(&mut self, center: Point) {
        self.center = center;
    }

    pub fn click(&mut self, p: Point) -> PickerEvent {
        let (dx, dy) = (p.x - self.center.x, p.y - self.center.y);
        let dist = (dx * dx + dy * dy).sqrt();
        if dist <= CENTER_RADIUS {
            PickerEvent::Picked(self.candidate)
        } else if (RING_INNER..=RING_OUTER).contains(&dist) {
            self.candidate = interp_color(angle_unit(dx, dy));
            PickerEvent::Pending
        } else if dist < RING_INNER {
            PickerEvent::Pending // gap between disc and ring
        } else {
            PickerEvent::Cancelled
        }
    }

    /// Paint ring and disc straight into the window frame (opaque, no blending).
    pub fn render(&self, fb: &mut FrameBuffer) {
        let r = RING_OUTER.ceil() as i32;
        let (cx, cy) = (self.center.x.round() as i32, self.center.y.round() as i32);
        for y in (cy - r)..=(cy + r) {
            if y < 0 || y >= fb.height as i32 { continue; }
            for x in (cx - r)..=(cx + r) {
                if x < 0 || x >= fb.width as i32 { continue; }
                let dx = x as f32 - self.center.x;
                let dy = y as f32 - self.center.y;
                let dist = (dx * dx + dy * dy).sqrt();
                let color = if dist <= CENTER_RADIUS {
                    self.candidate
                } else if (RING_INNER..=RING_OUTER).contains(&dist) {
                    interp_color(angle_unit(dx, dy))
                } else {
                    continue;
                };
                fb.pixels[y as usize * fb.width + x as usize] = color.rgb();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interp_hits_stops_and_clamps() {
        assert_eq!(interp_color(0.0), Argb(0xFFFF_0000));
        assert_eq!(interp_color(-3.0), Argb(0xFFFF_0000));
        assert_eq!(interp_color(1.0), Argb(0xFFFF_0000));
        assert_eq!(interp_color(2.0 / 6.0 + 1e-6), Argb(0xFF00_00FF));
        assert_eq!(interp_color(4.0 / 6.0 + 1e-6), Argb(0xFF00_FF00));
    }

    #[test]
    fn interp_blends_between_stops() {
        // A quarter of the way from red to magenta.
        assert_eq!(interp_color(1.0 / 24.0), Argb(0xFFFF_0040));
    }

    #[test]
    fn angle_unit_wraps_into_range() {
        assert_eq!(angle_unit(1.0, 0.0), 0.0);
        assert!((angle_unit(0.0, 1.0) - 0.25).abs() < 1e-6);
        assert!((angle_unit(0.0, -1.0) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn ring_click_then_center_click_picks() {
        let mut picker = ColorPicker::new(Point::new(200.0, 200.0), Argb(0xFF12_3456));
        // Straight down is a quarter turn: between magenta and blue.
        assert_eq!(picker.click(Point::new(200.0, 285.0)), PickerEvent::Pending);
        let picked = picker.candidate();
        assert_ne!(picked, Argb(0xFF12_3456));
        assert_eq!(picker.click(Point::new(205.0, 195.0)), PickerEvent::Picked(picked));
    }

    #[test]
    fn click_far_away_cancels() {
        let mut picker = ColorPicker::new(Point::new(200.0, 200.0), Argb(0xFF12_3456));
        assert_eq!(picker.click(Point::new(10.0, 10.0)), PickerEvent::Cancelled);
        assert_eq!(picker.click(Point::new(250.0, 200.0)), PickerEvent::Pending);
        assert_eq!(picker.candidate(), Argb(0xFF12_3456), "gap clicks change nothing");
    }

    #[test]
    fn render_clips_to_frame() {
        let mut fb = FrameBuffer::new(50, 50);
        let picker = ColorPicker::new(Point::new(0.0, 0.0), Argb(0xFF00_00FF));
        picker.render(&mut fb);
        assert_eq!(fb.pixels[0], 0x0000_00FF);
        assert_eq!(fb.pixels[30 * 50 + 30], 0, "gap between disc and ring");
        assert_ne!(fb.pixels[49 * 50 + 49], 0);
    }
}
