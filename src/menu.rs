// The paint menu: five commands that each reset the paint and then change one thing.

use crate::surface::DrawingSurface;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuCommand {
    Color,
    Emboss,
    Blur,
    Erase,
    SrcAtop,
}

/// What the host has to do after a command ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuOutcome {
    Applied,
    OpenColorPicker,
}

impl MenuCommand {
    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::Color => "Color",
            MenuCommand::Emboss => "Emboss",
            MenuCommand::Blur => "Blur",
            MenuCommand::Erase => "Erase",
            MenuCommand::SrcAtop => "SrcATop",
        }
    }

    /// Compositing mode and opacity always go back to defaults first.
    pub fn apply(self, surface: &mut DrawingSurface) -> MenuOutcome {
        surface.reset_paint();
        let outcome = match self {
            MenuCommand::Color => MenuOutcome::OpenColorPicker,
            MenuCommand::Emboss => { surface.emboss(); MenuOutcome::Applied }
            MenuCommand::Blur => { surface.blur(); MenuOutcome::Applied }
            MenuCommand::Erase => { surface.erase(); MenuOutcome::Applied }
            MenuCommand::SrcAtop => { surface.src_atop(); MenuOutcome::Applied }
        };
        debug!(command = self.label(), ?outcome, "menu command");
        outcome
    }
}
