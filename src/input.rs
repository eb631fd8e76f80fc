// Turns polled window state into discrete events.
// minifb only tells us "is the button down right now" and "where is the mouse";
// the surface wants down / move / up.

use crate::menu::MenuCommand;
use crate::types::Point;
use minifb::Key;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
}

#[derive(Default)]
pub struct PointerTracker {
    held: bool,
    last: Option<Point>,
}

impl PointerTracker {
    /// Feed this frame's button state and position; get at most one event back.
    pub fn update(&mut self, button_down: bool, pos: Option<Point>) -> Option<PointerEvent> {
        match (self.held, button_down, pos) {
            (false, true, Some(p)) => {
                self.held = true;
                self.last = Some(p);
                Some(PointerEvent::Down(p))
            }
            (true, true, Some(p)) if self.last != Some(p) => {
                self.last = Some(p);
                Some(PointerEvent::Move(p))
            }
            (true, false, _) => {
                self.held = false;
                self.last = None;
                Some(PointerEvent::Up)
            }
            _ => None,
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

/// Everything the keyboard can ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Menu(MenuCommand),
    Snapshot,
    ClearCanvas,
    ToggleHud,
    Escape,
}

impl Command {
    pub fn from_key(key: Key) -> Option<Command> {
        Some(match key {
            Key::C => Command::Menu(MenuCommand::Color),
            Key::E => Command::Menu(MenuCommand::Emboss),
            Key::B => Command::Menu(MenuCommand::Blur),
            Key::X => Command::Menu(MenuCommand::Erase),
            Key::A => Command::Menu(MenuCommand::SrcAtop),
            Key::S => Command::Snapshot,
            Key::N => Command::ClearCanvas,
            Key::H => Command::ToggleHud,
            Key::Escape => Command::Escape,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_drag_release() {
        let mut t = PointerTracker::default();
        let a = Point::new(1.0, 1.0);
        let b = Point::new(9.0, 1.0);
        assert_eq!(t.update(false, Some(a)), None);
        assert_eq!(t.update(true, Some(a)), Some(PointerEvent::Down(a)));
        assert_eq!(t.update(true, Some(a)), None, "no move without motion");
        assert_eq!(t.update(true, Some(b)), Some(PointerEvent::Move(b)));
        assert!(t.is_held());
        assert_eq!(t.update(false, Some(b)), Some(PointerEvent::Up));
        assert_eq!(t.update(false, Some(b)), None);
    }

    #[test]
    fn press_outside_window_waits_for_a_position() {
        let mut t = PointerTracker::default();
        assert_eq!(t.update(true, None), None);
        let p = Point::new(3.0, 4.0);
        assert_eq!(t.update(true, Some(p)), Some(PointerEvent::Down(p)));
    }

    #[test]
    fn keys_map_to_menu_commands() {
        assert_eq!(Command::from_key(Key::E), Some(Command::Menu(MenuCommand::Emboss)));
        assert_eq!(Command::from_key(Key::A), Some(Command::Menu(MenuCommand::SrcAtop)));
        assert_eq!(Command::from_key(Key::S), Some(Command::Snapshot));
        assert_eq!(Command::from_key(Key::Q), None);
    }
}
