//! Stateless rendering of the game window.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position as ScreenPos, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::input::Command;
use super::status::{status_line, tally_line, time_line};
use crate::games::tictactoe::{Cell, Player, Position, Snapshot};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
const TALLY_WIDTH: u16 = 31;
const MENU_PREFIX: &str = "Game: ";
const MENU_ITEMS: [(&str, Command); 3] = [
    (" New Game (n) ", Command::NewGame),
    (" Switch Sides (s) ", Command::SwitchSides),
    (" Quit (q) ", Command::Quit),
];

/// Where everything goes for a given terminal size.
///
/// Rebuilt on every frame and kept around so mouse clicks can be mapped
/// back to cells and menu entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    menu: Rect,
    time: Rect,
    tally: Rect,
    status: Rect,
    cells: [Rect; 9],
    menu_items: [(Rect, Command); 3],
}

impl ScreenLayout {
    /// Lays out the window inside `area`.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),               // Menu
                Constraint::Length(3),               // Elapsed time
                Constraint::Min(CELL_HEIGHT * 3),    // Board and tally
                Constraint::Length(3),               // Status
            ])
            .split(area);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(CELL_WIDTH * 3), Constraint::Length(TALLY_WIDTH)])
            .split(chunks[2]);

        let grid = center_rect(body[0], CELL_WIDTH * 3, CELL_HEIGHT * 3);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                grid.x + pos.col() as u16 * CELL_WIDTH,
                grid.y + pos.row() as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        let menu = chunks[0];
        let mut x = menu.x + MENU_PREFIX.len() as u16;
        let menu_items = MENU_ITEMS.map(|(label, command)| {
            let width = label.len() as u16;
            let rect = Rect::new(x, menu.y, width, 1).intersection(menu);
            x += width + 1;
            (rect, command)
        });

        Self {
            menu,
            time: chunks[1],
            tally: body[1],
            status: chunks[3],
            cells,
            menu_items,
        }
    }

    /// Screen area of a board cell.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        self.cells[pos.index()]
    }

    /// Board cell under the given terminal coordinates.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ScreenPos::new(column, row);
        self.cells
            .iter()
            .position(|rect| rect.contains(point))
            .and_then(Position::from_index)
    }

    /// Menu command under the given terminal coordinates.
    pub fn menu_at(&self, column: u16, row: u16) -> Option<Command> {
        let point = ScreenPos::new(column, row);
        self.menu_items
            .iter()
            .find(|(rect, _)| rect.contains(point))
            .map(|(_, command)| *command)
    }
}

/// Renders one frame.
pub fn draw(frame: &mut Frame, layout: &ScreenLayout, snapshot: &Snapshot, cursor: Position) {
    draw_menu(frame, layout);

    let state = snapshot.state();
    let time = Paragraph::new(time_line(state))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic Tac Toe"));
    frame.render_widget(time, layout.time);

    let over = state.outcome().is_terminal();
    for pos in Position::ALL {
        draw_cell(frame, layout.cell_rect(pos), state.board().get(pos), pos == cursor, over);
    }

    let tally = Paragraph::new(tally_line(snapshot.tally()))
        .style(Style::default().fg(Color::Green))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Session"));
    frame.render_widget(tally, layout.tally);

    let status = Paragraph::new(status_line(state))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);
}

fn draw_menu(frame: &mut Frame, layout: &ScreenLayout) {
    let mut spans = vec![Span::styled(
        MENU_PREFIX,
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for (label, _) in MENU_ITEMS {
        spans.push(Span::styled(
            label,
            Style::default().fg(Color::Black).bg(Color::Gray),
        ));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), layout.menu);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, selected: bool, disabled: bool) {
    let (symbol, mut style) = match cell {
        Cell::Empty => (" ", Style::default()),
        Cell::Occupied(Player::X) => (
            "X",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Player::O) => (
            "O",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let mut border = Style::default().fg(Color::DarkGray);

    if disabled {
        style = style.add_modifier(Modifier::DIM);
        border = border.add_modifier(Modifier::DIM);
    } else if selected {
        style = style.bg(Color::White);
        border = Style::default().fg(Color::White);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
