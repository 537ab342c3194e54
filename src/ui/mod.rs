mod button;

pub use button::Button;

use macroquad::prelude::Color;

use crate::application::{Action, PatternEntry, SettingsDraft};
use crate::config::{PALETTE, Rgb};

pub const BUTTON_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 50.0;
const SWATCH_SIZE: f32 = 60.0;
const SWATCH_STEP: f32 = 90.0;

pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb[0], rgb[1], rgb[2], 255)
}

/// A screen's clickable buttons, each bound to the action it triggers
#[derive(Clone, Debug, Default)]
pub struct Menu {
    pub items: Vec<(Button, Action)>,
}

impl Menu {
    fn push(&mut self, button: Button, action: Action) {
        self.items.push((button, action));
    }

    /// Action of the button under `pos`, if any
    pub fn hit(&self, pos: (f32, f32)) -> Option<Action> {
        self.items
            .iter()
            .find(|(button, _)| button.contains(pos))
            .map(|(_, action)| *action)
    }

    pub fn draw(&self, mouse_pos: (f32, f32)) {
        self.items.iter().for_each(|(btn, _)| btn.draw(mouse_pos));
    }
}

fn centered_column(screen_width: f32, top: f32, step: f32, height: f32, labels: &[(&str, Action)]) -> Menu {
    let x = screen_width / 2.0 - BUTTON_WIDTH / 2.0;
    let mut menu = Menu::default();
    for (i, (label, action)) in labels.iter().enumerate() {
        let y = top + i as f32 * step;
        menu.push(Button::new(x, y, BUTTON_WIDTH, height, *label), *action);
    }
    menu
}

/// Baseline of the one-line message along the bottom edge of a menu screen
pub fn footer_y(screen_height: u32) -> f32 {
    screen_height as f32 - 30.0
}

pub fn main_menu(screen_width: f32) -> Menu {
    centered_column(
        screen_width,
        150.0,
        80.0,
        BUTTON_HEIGHT,
        &[
            ("Start", Action::StartNew),
            ("Load Save", Action::LoadSave),
            ("Choose Pattern", Action::OpenPatternPicker),
            ("Settings", Action::OpenSettings),
            ("Quit", Action::Quit),
        ],
    )
}

pub fn pause_menu(screen_width: f32) -> Menu {
    centered_column(
        screen_width,
        200.0,
        100.0,
        60.0,
        &[
            ("Continue", Action::Continue),
            ("Save", Action::Save),
            ("Main Menu", Action::BackToMenu),
        ],
    )
}

/// Description of the picker entry under the pointer
pub fn hovered_description<'a>(menu: &Menu, entries: &'a [PatternEntry], pos: (f32, f32)) -> Option<&'a str> {
    match menu.hit(pos)? {
        Action::PickPattern(i) => entries.get(i).map(|e| e.description.as_str()),
        _ => None,
    }
}

/// One button per entry, filling columns top to bottom, plus Back in the last slot
pub fn pattern_picker(screen_width: f32, screen_height: f32, entries: &[PatternEntry]) -> Menu {
    const TOP: f32 = 90.0;
    const STEP: f32 = 50.0;
    const HEIGHT: f32 = 40.0;
    const GAP: f32 = 20.0;
    // Space kept free for the hovered entry's description
    const FOOTER: f32 = 50.0;

    let slots = entries.len() + 1;
    let per_column = (((screen_height - TOP - FOOTER) / STEP) as usize).max(1);
    let columns = slots.div_ceil(per_column);
    let total_width = columns as f32 * BUTTON_WIDTH + (columns.saturating_sub(1)) as f32 * GAP;
    let left = (screen_width - total_width).max(0.0) / 2.0;

    let labels = entries
        .iter()
        .enumerate()
        .map(|(i, e)| (e.name.as_str(), Action::PickPattern(i)))
        .chain(std::iter::once(("Back", Action::BackToMenu)));

    let mut menu = Menu::default();
    for (slot, (label, action)) in labels.enumerate() {
        let x = left + (slot / per_column) as f32 * (BUTTON_WIDTH + GAP);
        let y = TOP + (slot % per_column) as f32 * STEP;
        menu.push(Button::new(x, y, BUTTON_WIDTH, HEIGHT, label), action);
    }
    menu
}

/// Vertical positions of the two swatch rows on the settings screen
pub const ALIVE_ROW_Y: f32 = 200.0;
pub const DEAD_ROW_Y: f32 = 320.0;

pub fn settings(draft: &SettingsDraft) -> Menu {
    let mut menu = Menu::default();
    for (i, rgb) in PALETTE.iter().enumerate() {
        let x = 80.0 + i as f32 * SWATCH_STEP;
        menu.push(
            Button::swatch(x, ALIVE_ROW_Y, SWATCH_SIZE, to_color(*rgb), draft.alive == Some(i)),
            Action::SelectAlive(i),
        );
        menu.push(
            Button::swatch(x, DEAD_ROW_Y, SWATCH_SIZE, to_color(*rgb), draft.dead == Some(i)),
            Action::SelectDead(i),
        );
    }
    menu.push(Button::new(250.0, 450.0, 130.0, 60.0, "Apply"), Action::ApplySettings);
    menu.push(Button::new(420.0, 450.0, 130.0, 60.0, "Back"), Action::BackToMenu);
    menu
}
