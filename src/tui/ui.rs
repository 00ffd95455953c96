//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use gridlock::{Board, Cell, Coord, GameMode, Mark};

use super::app::App;

/// Width of one rendered cell, padding included.
const CELL_WIDTH: u16 = 3;

/// Renders sidebar, board, status line and key help.
pub fn draw(frame: &mut Frame, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(30)])
        .split(frame.area());

    draw_sidebar(frame, columns[0], app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(columns[1]);

    let title = Paragraph::new("LET'S PLAY TIC TAC TOE")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.session().board(), app.cursor());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Arrows/hjkl: move | Enter: place | N: new game | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[3]);
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let pending = app.pending();
    let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled("Game Mode", heading)),
        Line::from(format!(" [m] {}", pending.mode().label())),
        Line::from(""),
        Line::from(Span::styled("Game Board", heading)),
        Line::from(format!(" [s] {}", pending.board_size())),
        Line::from(" Get 3 in 3x3, 4 in 5x5"),
        Line::from(" and 5 in 7x7 to WIN the game"),
    ];

    if *pending.mode() == GameMode::VersusComputer {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Player", heading)));
        lines.push(Line::from(format!(" [i] Your icon: {}", pending.player_mark())));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(" [n] Start New Game"));

    let session = app.session();
    if *session.settings().mode() == GameMode::VersusComputer {
        let score = session.scoreboard();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Statistics", heading)));
        lines.push(Line::from(format!(" - Player Wins: {}", score.player_wins())));
        lines.push(Line::from(format!(" - Computer Wins: {}", score.computer_wins())));
        lines.push(Line::from(format!(" - Ties: {}", score.ties())));
    }

    let sidebar = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Settings"));
    frame.render_widget(sidebar, area);
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Coord) {
    let side = board.size().side();
    let grid = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(side * 2);
    for row in 0..side {
        if row > 0 {
            let separator = vec!["─".repeat(CELL_WIDTH as usize); side].join("┼");
            lines.push(Line::from(Span::styled(separator, grid)));
        }
        let mut spans = Vec::with_capacity(side * 2);
        for col in 0..side {
            if col > 0 {
                spans.push(Span::styled("│", grid));
            }
            let coord = Coord::new(row, col);
            spans.push(cell_span(board.get(coord), coord == cursor));
        }
        lines.push(Line::from(spans));
    }

    let width = side as u16 * (CELL_WIDTH + 1) - 1;
    let height = side as u16 * 2 - 1;
    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, center_rect(area, width, height));
}

fn cell_span(cell: Option<Cell>, highlighted: bool) -> Span<'static> {
    let (symbol, base_style) = match cell {
        Some(Cell::Occupied(Mark::X)) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Occupied(Mark::O)) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Empty) | None => ("   ", Style::default().fg(Color::DarkGray)),
    };

    let style = if highlighted {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };
    Span::styled(symbol, style)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
