use macroquad::prelude::*;

use crate::application::{App, Screen, Session};
use crate::config::ColorSettings;
use crate::ui::{self, Menu, to_color};

const BG_COLOR: Color = Color::new(40.0 / 255.0, 40.0 / 255.0, 40.0 / 255.0, 1.0);

/// Draw every cell as a filled square with a one-pixel outline
pub fn draw_grid(session: &Session, colors: &ColorSettings, cell_size: f32) {
    let alive = to_color(colors.alive);
    let dead = to_color(colors.dead);
    let lines = to_color(colors.grid_lines);

    for (row, col, cell) in session.grid.iter_cells() {
        let x = col as f32 * cell_size;
        let y = row as f32 * cell_size;
        draw_rectangle(x, y, cell_size, cell_size, if cell.is_alive() { alive } else { dead });
        draw_rectangle_lines(x, y, cell_size, cell_size, 1.0, lines);
    }
}

fn draw_centered(text: &str, center_x: f32, y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(text, center_x - dims.width / 2.0, y, size as f32, color);
}

/// Paused / generation readout in the corner of the board
fn draw_status_bar(session: &Session) {
    let state = if session.paused { "Paused" } else { "Running" };
    let text = format!(
        "{state} | Gen {} | Pop {}",
        session.generation,
        session.grid.population()
    );
    draw_text(&text, 8.0, 18.0, 18.0, Color::from_rgba(200, 200, 200, 220));
}

/// Draw the active screen
pub fn draw(app: &App, menu: Option<&Menu>) {
    let (w, h) = app.config.window_size();
    let center = w as f32 / 2.0;
    let footer = ui::footer_y(h);
    let mouse_pos = mouse_position();

    match &app.screen {
        Screen::Game(session) if session.menu_open => {
            clear_background(BG_COLOR);
        }
        Screen::Game(session) => {
            clear_background(to_color(app.colors().dead));
            draw_grid(session, app.colors(), app.config.cell_size as f32);
            draw_status_bar(session);
        }
        Screen::MainMenu => {
            clear_background(BG_COLOR);
            draw_centered("Game of Life", center, 90.0, 48, WHITE);
            if let Some(status) = &app.status {
                draw_centered(status, center, footer, 18, Color::from_rgba(255, 200, 120, 255));
            }
        }
        Screen::PatternPicker(entries) => {
            clear_background(BG_COLOR);
            let title = if entries.is_empty() { "No patterns" } else { "Choose Pattern" };
            draw_centered(title, center, 60.0, 32, WHITE);
            let hint = menu.and_then(|m| ui::hovered_description(m, entries, mouse_pos));
            if let Some(hint) = hint {
                draw_centered(hint, center, footer, 18, Color::from_rgba(200, 200, 200, 255));
            }
        }
        Screen::Settings(_) => {
            clear_background(BG_COLOR);
            draw_centered("Settings", center, 110.0, 36, WHITE);
            draw_text("Alive Cell Color:", 80.0, ui::ALIVE_ROW_Y - 20.0, 28.0, WHITE);
            draw_text("Dead Cell Color:", 80.0, ui::DEAD_ROW_Y - 20.0, 28.0, WHITE);
        }
    }

    if let Some(menu) = menu {
        menu.draw(mouse_pos);
    }
}
