use macroquad::prelude::*;

use crate::application::{Action, App, Screen};
use crate::ui::{self, Menu};

/// Convert a pointer position in pixels to (row, col) by integer division.
/// Positions left of or above the board have no cell; positions past the
/// right/bottom edge are passed through and ignored by the grid.
pub fn pixel_to_cell(pos: (f32, f32), cell_size: u32) -> Option<(usize, usize)> {
    let (x, y) = pos;
    if x < 0.0 || y < 0.0 || cell_size == 0 {
        return None;
    }
    let size = cell_size as usize;
    Some((y as usize / size, x as usize / size))
}

/// Key bindings while the board is showing
pub fn game_key_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Space => Some(Action::TogglePause),
        KeyCode::C => Some(Action::Clear),
        KeyCode::R => Some(Action::Randomize),
        KeyCode::P => Some(Action::ToggleMenu),
        _ => None,
    }
}

const GAME_KEYS: [KeyCode; 4] = [KeyCode::Space, KeyCode::C, KeyCode::R, KeyCode::P];

/// The clickable menu of the current screen, if it has one
pub fn current_menu(app: &App) -> Option<Menu> {
    let (w, h) = app.config.window_size();
    let (w, h) = (w as f32, h as f32);
    match &app.screen {
        Screen::MainMenu => Some(ui::main_menu(w)),
        Screen::Game(session) if session.menu_open => Some(ui::pause_menu(w)),
        Screen::Game(_) => None,
        Screen::PatternPicker(entries) => Some(ui::pattern_picker(w, h, entries)),
        Screen::Settings(draft) => Some(ui::settings(draft)),
    }
}

/// Drain this frame's input into actions, in the order they should apply
pub fn collect_actions(app: &App, menu: Option<&Menu>) -> Vec<Action> {
    let mouse_pos = mouse_position();
    let mut actions = Vec::new();

    if let Some(menu) = menu {
        if is_mouse_button_pressed(MouseButton::Left) {
            actions.extend(menu.hit(mouse_pos));
        }
    } else if app.session().is_some() {
        if let Some((row, col)) = pixel_to_cell(mouse_pos, app.config.cell_size) {
            if is_mouse_button_pressed(MouseButton::Left) {
                actions.push(Action::Press { row, col });
            } else if is_mouse_button_down(MouseButton::Left) {
                actions.push(Action::Drag { row, col });
            }
        }
        if is_mouse_button_released(MouseButton::Left) {
            actions.push(Action::Release);
        }
    }

    match &app.screen {
        Screen::Game(session) if session.menu_open => {
            if is_key_pressed(KeyCode::P) {
                actions.push(Action::ToggleMenu);
            }
        }
        Screen::Game(_) => actions.extend(
            GAME_KEYS
                .iter()
                .filter(|key| is_key_pressed(**key))
                .filter_map(|key| game_key_action(*key)),
        ),
        Screen::PatternPicker(_) | Screen::Settings(_) => {
            if is_key_pressed(KeyCode::Escape) {
                actions.push(Action::BackToMenu);
            }
        }
        Screen::MainMenu => {}
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_cell_divides_by_cell_size() {
        assert_eq!(pixel_to_cell((0.0, 0.0), 10), Some((0, 0)));
        assert_eq!(pixel_to_cell((19.9, 9.9), 10), Some((0, 1)));
        assert_eq!(pixel_to_cell((795.0, 599.0), 10), Some((59, 79)));
    }

    #[test]
    fn test_pixel_to_cell_outside_board() {
        assert_eq!(pixel_to_cell((-1.0, 5.0), 10), None);
        assert_eq!(pixel_to_cell((5.0, -0.5), 10), None);
        // Past the far edges: a cell index the grid will ignore
        assert_eq!(pixel_to_cell((805.0, 10.0), 10), Some((1, 80)));
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(game_key_action(KeyCode::Space), Some(Action::TogglePause));
        assert_eq!(game_key_action(KeyCode::C), Some(Action::Clear));
        assert_eq!(game_key_action(KeyCode::P), Some(Action::ToggleMenu));
        assert_eq!(game_key_action(KeyCode::Q), None);
        assert!(GAME_KEYS.iter().all(|k| game_key_action(*k).is_some()));
    }
}
