use macroquad::prelude::{
    Color, DARKGRAY, DARKGREEN, GRAY, GREEN, LIGHTGRAY, LIME, RED, Rect, WHITE, YELLOW,
    draw_circle, draw_rectangle, draw_rectangle_lines, draw_text, measure_text, screen_height,
    screen_width,
};

use crate::app::{App, FIELD_HEIGHT, FIELD_WIDTH, Screen};
use crate::dialog::{Dialog, DialogKind};
use crate::game::{Phase, SnakeGame};
use crate::grid::Cell;
use crate::menu::{MainMenu, MenuEntry, SettingsEditor};
use crate::wall::WallState;

const HEAD: Color = DARKGREEN;
const BODY: Color = GREEN;
const WALL_FLASHING: Color = YELLOW;
const WALL_SOLID: Color = GRAY;
const FIELD_BACKGROUND: Color = Color::new(0.05, 0.05, 0.08, 1.0);
const TIMER_BAR_HEIGHT: f32 = 5.0;

pub fn draw_app(app: &App) {
    match app.screen() {
        Screen::Menu(menu) => draw_menu(menu),
        Screen::Settings(editor) => draw_settings(editor),
        Screen::Snake(game) => draw_game(game),
    }
    if let Some(dialog) = app.dialogs().current() {
        draw_dialog(dialog);
    }
}

fn field_origin() -> (f32, f32) {
    let off_x = ((screen_width() - FIELD_WIDTH as f32) * 0.5).max(0.0);
    let off_y = ((screen_height() - FIELD_HEIGHT as f32) * 0.5).max(0.0);
    (off_x, off_y)
}

fn cell_rect(cell: Cell, size: f32, origin: (f32, f32)) -> Rect {
    Rect::new(
        origin.0 + cell.x as f32 * size,
        origin.1 + cell.y as f32 * size,
        size,
        size,
    )
}

fn draw_centered(text: &str, y: f32, font_size: u16, color: Color) {
    let m = measure_text(text, None, font_size, 1.0);
    draw_text(text, (screen_width() - m.width) * 0.5, y, font_size as f32, color);
}

fn draw_dot(rect: Rect, color: Color) {
    draw_circle(rect.x + rect.w * 0.5, rect.y + rect.h * 0.5, rect.w * 0.5, color);
}

fn draw_menu(menu: &MainMenu) {
    let mut y = screen_height() * 0.25;
    draw_centered("ARCADE HUB", y, 48, LIME);
    y += 64.0;

    for entry in MenuEntry::ALL {
        let color = if entry == menu.selected() { WHITE } else { GRAY };
        draw_centered(entry.label(), y, 28, color);
        y += 36.0;
    }

    draw_centered("Up/Down: Select   Enter: Open", screen_height() - 40.0, 18, DARKGRAY);
}

fn draw_settings(editor: &SettingsEditor) {
    let mut y = screen_height() * 0.25;
    draw_centered("SETTINGS", y, 40, LIME);
    y += 56.0;

    for (row, text) in editor.rows() {
        let color = if row == editor.selected() { WHITE } else { GRAY };
        draw_centered(&text, y, 24, color);
        y += 32.0;
    }

    y += 16.0;
    draw_centered("Left/Right or -/+ : Adjust", y, 18, GRAY);
    draw_centered("Enter/Esc: Save and back", y + 24.0, 18, GRAY);
}

fn draw_game(game: &SnakeGame) {
    let origin = field_origin();
    let size = game.settings().size as f32;
    let grid = game.grid();
    draw_rectangle(
        origin.0,
        origin.1,
        grid.width() as f32 * size,
        grid.height() as f32 * size,
        FIELD_BACKGROUND,
    );

    for wall in game.walls() {
        let color = match wall.state() {
            WallState::Flashing => WALL_FLASHING,
            WallState::Solid => WALL_SOLID,
        };
        for block in wall.blocks() {
            let r = cell_rect(*block, size, origin);
            draw_rectangle(r.x, r.y, r.w, r.h, color);
        }
    }

    for (i, cell) in game.snake().cells().iter().enumerate() {
        let color = if i == 0 { HEAD } else { BODY };
        draw_dot(cell_rect(*cell, size, origin), color);
    }

    if let Some(food) = game.food() {
        let freshness = food.freshness();
        let r = cell_rect(food.cell(), size, origin);
        draw_dot(r, Color::new(RED.r, RED.g, RED.b, freshness));

        let bar_y = r.y + r.h + 2.0;
        draw_rectangle(r.x, bar_y, r.w, TIMER_BAR_HEIGHT, GRAY);
        draw_rectangle(r.x, bar_y, r.w * freshness, TIMER_BAR_HEIGHT, LIME);
    }

    draw_text(
        &format!("Score: {}", game.score()),
        origin.0 + 5.0,
        origin.1 + 21.0,
        24.0,
        WHITE,
    );

    if game.phase() == Phase::Paused {
        draw_centered("Paused", screen_height() * 0.5, 40, YELLOW);
    }
}

fn draw_dialog(dialog: &Dialog) {
    let sw = screen_width();
    let sh = screen_height();
    draw_rectangle(0.0, 0.0, sw, sh, Color::new(0.0, 0.0, 0.0, 0.5));

    let lines: Vec<&str> = dialog.message.lines().collect();
    let box_w = (sw * 0.6).min(520.0);
    let box_h = 110.0 + lines.len() as f32 * 26.0;
    let box_x = (sw - box_w) * 0.5;
    let box_y = (sh - box_h) * 0.5;

    draw_rectangle(box_x, box_y, box_w, box_h, Color::new(0.12, 0.12, 0.16, 1.0));
    let border = match dialog.kind {
        DialogKind::Error => RED,
        _ => LIGHTGRAY,
    };
    draw_rectangle_lines(box_x, box_y, box_w, box_h, 2.0, border);

    let mut y = box_y + 34.0;
    draw_centered(&dialog.title, y, 26, WHITE);
    y += 36.0;
    for line in &lines {
        draw_centered(line, y, 20, LIGHTGRAY);
        y += 26.0;
    }

    let footer_y = box_y + box_h - 18.0;
    match dialog.kind {
        DialogKind::Question { yes_selected, .. } => {
            let yes = if yes_selected { "[Yes]" } else { " Yes " };
            let no = if yes_selected { " No " } else { "[No]" };
            draw_centered(&format!("{yes}     {no}"), footer_y, 22, WHITE);
        }
        DialogKind::Info | DialogKind::Error => {
            draw_centered("Enter: OK", footer_y, 18, GRAY);
        }
    }
}
