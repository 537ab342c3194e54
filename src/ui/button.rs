use macroquad::prelude::*;

/// Button UI component with hover and click detection
#[derive(Clone, Debug)]
pub struct Button {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
    color: Color,
    hover_color: Color,
    /// Fixed fill, no hover effect (color swatches)
    swatch: Option<Color>,
    pub selected: bool,
}

impl Button {
    pub fn new(x: f32, y: f32, width: f32, height: f32, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            width,
            height,
            text: text.into(),
            color: Color::from_rgba(0, 200, 0, 255),
            hover_color: Color::from_rgba(0, 150, 0, 255),
            swatch: None,
            selected: false,
        }
    }

    /// Text-less square filled with `color`
    pub fn swatch(x: f32, y: f32, size: f32, color: Color, selected: bool) -> Self {
        Self {
            swatch: Some(color),
            selected,
            ..Self::new(x, y, size, size, "")
        }
    }

    /// Check if a point is over the button
    pub fn contains(&self, pos: (f32, f32)) -> bool {
        pos.0 >= self.x
            && pos.0 <= self.x + self.width
            && pos.1 >= self.y
            && pos.1 <= self.y + self.height
    }

    /// Draw button with hover effect
    pub fn draw(&self, mouse_pos: (f32, f32)) {
        let color = match self.swatch {
            Some(fill) => fill,
            None if self.contains(mouse_pos) => self.hover_color,
            None => self.color,
        };

        draw_rectangle(self.x, self.y, self.width, self.height, color);
        if self.selected {
            draw_rectangle_lines(self.x, self.y, self.width, self.height, 3.0, WHITE);
        }

        if !self.text.is_empty() {
            let text_size = measure_text(&self.text, None, 24, 1.0);
            draw_text(
                &self.text,
                self.x + (self.width - text_size.width) / 2.0,
                self.y + (self.height + text_size.height) / 2.0,
                24.0,
                WHITE,
            );
        }
    }
}
