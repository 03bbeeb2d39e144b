use crate::app::{App, Status};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use nqueens_core::{Coordinates, SquareColor, SquareContent};
use std::io::{self, Write};

/// Each square is three characters wide: " Q "
const SQUARE_WIDTH: u16 = 3;
const PANEL_WIDTH: u16 = 28;

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    queue!(stdout, Hide, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    let size = app.board_size() as u16;
    let grid_width = size * SQUARE_WIDTH + 2;
    let grid_height = size + 2;

    // Center the board horizontally, leave room for the info panel
    let total_width = grid_width + 3 + PANEL_WIDTH;
    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = if term_height > grid_height + 8 { 2 } else { 1 };

    render_board(stdout, app, start_x, start_y)?;
    render_info_panel(stdout, app, start_x + grid_width + 3, start_y)?;
    render_controls(stdout, app, start_x, start_y + grid_height + 1)?;

    queue!(stdout, ResetColor, Show)?;
    stdout.flush()
}

fn render_board(stdout: &mut io::Stdout, app: &mut App, x: u16, y: u16) -> io::Result<()> {
    let size = app.board_size();
    let horizontal = "─".repeat(size * SQUARE_WIDTH as usize);

    queue!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(app.theme.bg),
        SetForegroundColor(app.theme.border),
        Print(format!("┌{}┐", horizontal))
    )?;

    for row in 0..size {
        let line_y = y + 1 + row as u16;
        queue!(
            stdout,
            MoveTo(x, line_y),
            SetBackgroundColor(app.theme.bg),
            SetForegroundColor(app.theme.border),
            Print("│")
        )?;

        for column in 0..size {
            let pos = Coordinates::new(row, column);
            let content = app.content_at(pos);
            let (glyph, fg) = match content {
                SquareContent::Queen => ("Q", app.theme.queen),
                SquareContent::Empty => ("·", app.theme.free),
                SquareContent::Blocked => (" ", app.theme.fg),
            };
            queue!(
                stdout,
                SetBackgroundColor(square_background(app, pos)),
                SetForegroundColor(fg),
                Print(format!(" {} ", glyph))
            )?;
        }

        queue!(
            stdout,
            SetBackgroundColor(app.theme.bg),
            SetForegroundColor(app.theme.border),
            Print("│")
        )?;
    }

    queue!(
        stdout,
        MoveTo(x, y + 1 + size as u16),
        SetBackgroundColor(app.theme.bg),
        SetForegroundColor(app.theme.border),
        Print(format!("└{}┘", horizontal))
    )
}

fn square_background(app: &App, pos: Coordinates) -> Color {
    if pos == app.cursor && !app.is_playing() {
        return app.theme.cursor_bg;
    }
    match SquareColor::of(pos.row, pos.column) {
        SquareColor::White => app.theme.light_square,
        SquareColor::Black => app.theme.dark_square,
    }
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let (status_text, status_color) = match app.status {
        Status::Editing => ("Editing", theme.info),
        Status::Searching => ("Searching...", theme.key),
        Status::Paused => ("Paused", theme.info),
        Status::Solved => ("Solved", theme.success),
        Status::NoSolution => ("No solution", theme.error),
    };

    let lines = [
        (format!("N-QUEENS {}x{}", app.board_size(), app.board_size()), theme.fg),
        (String::new(), theme.fg),
        (format!("Engine:  {}", app.engine()), theme.info),
        (format!("Queens:  {}/{}", app.board.queen_count(), app.board_size()), theme.info),
        (format!("Steps:   {}", app.steps), theme.info),
        (format!("Status:  {}", status_text), status_color),
    ];

    for (i, (text, color)) in lines.iter().enumerate() {
        queue!(
            stdout,
            MoveTo(x, y + i as u16),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(*color),
            Print(text)
        )?;
    }

    if let Some(ref msg) = app.message {
        queue!(
            stdout,
            MoveTo(x, y + lines.len() as u16 + 1),
            SetForegroundColor(theme.key),
            Print(msg)
        )?;
    }
    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let controls = [
        [("←↑↓→", "move"), ("Enter", "queen"), ("s", "solve"), ("e", "engine")],
        [("p", "play/pause"), ("n", "step"), ("+/-", "size"), ("c", "clear")],
        [("t", "theme"), ("q", "quit"), ("", ""), ("", "")],
    ];

    for (i, line) in controls.iter().enumerate() {
        queue!(stdout, MoveTo(x, y + i as u16), SetBackgroundColor(app.theme.bg))?;
        for (key, label) in line.iter().filter(|(key, _)| !key.is_empty()) {
            queue!(
                stdout,
                SetForegroundColor(app.theme.key),
                Print(key),
                SetForegroundColor(app.theme.info),
                Print(format!(" {}   ", label))
            )?;
        }
    }
    Ok(())
}
