//! Play command implementation - Interactive TUI game.

// CLI play uses intentional casts for display sizing
#![allow(clippy::cast_possible_truncation, clippy::needless_pass_by_value)]

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridhunt::error::Severity;
use gridhunt::game::{
    Cell, Coord, Direction as MoveDirection, Engine, Phase, PlaceKind, invariants,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io::stdout;
use std::time::Duration;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the grid dimensions are invalid or the TUI fails.
pub(crate) fn execute(width: u16, height: u16) -> Result<(), CliError> {
    let engine = Engine::new(width, height)
        .ok_or_else(|| CliError::new(format!("invalid grid dimensions {width}x{height}")))?;

    run_tui(engine)
}

/// App state for the TUI.
struct App {
    engine: Engine,
    cursor: Coord,
    message: String,
    severity: Severity,
}

impl App {
    fn new(engine: Engine) -> Self {
        Self {
            engine,
            cursor: Coord::new(0, 0),
            message: "Select a cell and place the hunter to begin.".to_string(),
            severity: Severity::Info,
        }
    }

    /// Record the reply (or rejection) of a command.
    fn report(&mut self, result: gridhunt::CommandResult<gridhunt::Reply>) {
        match result {
            Ok(reply) => {
                self.message = reply.message;
                self.severity = reply.severity;
            }
            Err(e) => {
                self.message = e.to_string();
                self.severity = e.severity();
            }
        }
        invariants::assert_invariants(&self.engine);
    }

    /// Move the setup cursor, clamped to the grid.
    fn nudge_cursor(&mut self, direction: MoveDirection) {
        let (dx, dy) = direction.delta();
        if let Some(next) = self.cursor.offset(dx, dy)
            && self.engine.grid().in_bounds(next)
        {
            self.cursor = next;
        }
    }

    fn place(&mut self, key: char) {
        let result = PlaceKind::from_key(key)
            .and_then(|kind| {
                self.engine.select_cell(self.cursor.x, self.cursor.y)?;
                self.engine.place_object(kind)
            });
        self.report(result);
    }

    fn steer(&mut self, direction: MoveDirection) {
        match self.engine.phase() {
            Phase::Setup => self.nudge_cursor(direction),
            Phase::Play => {
                let result = self.engine.move_hunter(direction);
                self.report(result);
            }
            Phase::End => {}
        }
    }

    fn restart(&mut self) {
        let reply = self.engine.restart();
        self.cursor = Coord::new(0, 0);
        self.message = reply.message;
        self.severity = reply.severity;
        invariants::assert_invariants(&self.engine);
    }
}

fn run_tui(engine: Engine) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(engine);

    loop {
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        if event::poll(Duration::from_millis(50)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Up => app.steer(MoveDirection::Up),
                KeyCode::Down => app.steer(MoveDirection::Down),
                KeyCode::Left => app.steer(MoveDirection::Left),
                KeyCode::Right => app.steer(MoveDirection::Right),
                KeyCode::Char('w') => app.steer(MoveDirection::Up),
                KeyCode::Char('s') => app.steer(MoveDirection::Down),
                KeyCode::Char('a') => app.steer(MoveDirection::Left),
                KeyCode::Char('d') => app.steer(MoveDirection::Right),
                KeyCode::Char(c @ ('h' | 'm' | 'o' | '1'..='9'))
                    if app.engine.phase() == Phase::Setup =>
                {
                    app.place(c);
                }
                KeyCode::Char('g') => {
                    let result = app.engine.end_setup();
                    app.report(result);
                }
                KeyCode::Char('e') => {
                    let result = app.engine.end_game();
                    app.report(result);
                }
                KeyCode::Char('r') => app.restart(),
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Grid
            Constraint::Length(3), // Message
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_grid(f, chunks[1], app);
    render_message(f, chunks[2], app);
    render_footer(f, chunks[3], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let engine = &app.engine;
    let title = match engine.phase() {
        Phase::Setup => format!(
            " Gridhunt | Setup | Treasures placed: {} ",
            engine.treasures_remaining()
        ),
        Phase::Play | Phase::End => format!(
            " Gridhunt | {} | Round {} | Hunter: {} | Monsters: {} | Treasures left: {} ",
            engine.phase(),
            engine.round(),
            engine.hunter_score(),
            engine.monster_score(),
            engine.treasures_remaining()
        ),
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, area: Rect, app: &App) {
    let grid = app.engine.grid();
    let mut lines: Vec<Line> = Vec::new();

    let fence_style = Style::default().fg(Color::DarkGray);
    let fence: String = "#".repeat(grid.width() as usize + 2);
    lines.push(Line::from(Span::styled(fence.clone(), fence_style)));

    for y in 0..grid.height() {
        let mut spans = vec![Span::styled("#", fence_style)];
        for x in 0..grid.width() {
            let coord = Coord::new(x, y);
            if let Some(cell) = grid.get(coord) {
                let mut style = Style::default().fg(cell_color(cell));
                if app.engine.phase() == Phase::Setup && coord == app.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(cell.glyph().to_string(), style));
            }
        }
        spans.push(Span::styled("#", fence_style));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(Span::styled(fence, fence_style)));

    let grid_widget =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Grid "));

    f.render_widget(grid_widget, area);
}

fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::Empty => Color::DarkGray,
        Cell::Hunter => Color::Green,
        Cell::Monster => Color::Red,
        Cell::Obstacle => Color::White,
        Cell::Treasure(_) => Color::Yellow,
    }
}

fn render_message(f: &mut Frame, area: Rect, app: &App) {
    let color = match app.severity {
        Severity::Info => Color::Gray,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    };

    let message = Paragraph::new(app.message.as_str())
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(message, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = match app.engine.phase() {
        Phase::Setup => {
            " [arrows/wasd] Cursor  [h] Hunter  [m] Monster  [o] Obstacle  [1-9] Treasure  [g] Go  [q] Quit "
        }
        Phase::Play => " [arrows/wasd] Move  [e] End game  [r] Restart  [q] Quit ",
        Phase::End => " [r] Restart  [q] Quit ",
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
