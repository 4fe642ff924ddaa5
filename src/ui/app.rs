//! Main UI Application
//!
//! Renders the match and feeds key presses into the game core. The UI
//! never mutates match state directly: it issues commands and renders
//! whatever events come back on the log.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::events::{EventKind, GameEvent};
use crate::game::{Game, MatchPhase};

/// How many log lines to keep around for display
const LOG_CAPACITY: usize = 50;

/// Main UI application
pub struct App {
    /// Inventory cursor position
    cursor: usize,
    /// Retained message history, newest last
    log: Vec<GameEvent>,
}

impl App {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            log: Vec::new(),
        }
    }

    /// Pull pending events out of the game into the display log.
    pub fn sync(&mut self, game: &mut Game) {
        for event in game.drain_events() {
            // Stat snapshots are already reflected by the stats panel
            if !matches!(event.kind, EventKind::StatsChanged(_)) {
                self.log.push(event);
            }
        }
        if self.log.len() > LOG_CAPACITY {
            let excess = self.log.len() - LOG_CAPACITY;
            self.log.drain(..excess);
        }
    }

    /// Handle a key press. Returns true when the app should exit.
    pub fn handle_input(&mut self, key: KeyEvent, game: &mut Game) -> Result<bool> {
        match key.code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Up => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Down => {
                if self.cursor + 1 < game.inventory().count() {
                    self.cursor += 1;
                }
            }
            // Controls are disabled once the match is over; the core
            // would reject these anyway
            KeyCode::Enter if game.phase() == MatchPhase::Active => {
                let _ = game.select_item(self.cursor);
            }
            KeyCode::Char('u') if game.phase() == MatchPhase::Active => {
                let _ = game.use_selected_item();
            }
            KeyCode::Char('q') if game.phase() == MatchPhase::Active => {
                let _ = game.quit();
            }
            _ => {}
        }
        self.sync(game);
        Ok(false)
    }

    pub fn render(&self, frame: &mut Frame, game: &Game) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5),
                Constraint::Min(8),
                Constraint::Length(8),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[0]);

        self.render_stats(frame, top[0], game);
        self.render_enemy(frame, top[1], game);
        self.render_inventory(frame, chunks[1], game);
        self.render_log(frame, chunks[2]);
        self.render_help(frame, chunks[3], game);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let stats = game.player();
        let lines = vec![
            Line::from(vec![
                Span::styled("Health  ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    stats.health.to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Attack  ", Style::default().fg(Color::DarkGray)),
                Span::styled(stats.attack.to_string(), Style::default().fg(Color::Yellow)),
            ]),
            Line::from(vec![
                Span::styled("Defense ", Style::default().fg(Color::DarkGray)),
                Span::styled(stats.defense.to_string(), Style::default().fg(Color::Cyan)),
            ]),
        ];
        let block = Block::default().borders(Borders::ALL).title(" Character ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_enemy(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let current = game.enemy_health().max(0);
        let max = game.enemy_max_health().max(1);
        let ratio = f64::from(current) / f64::from(max);

        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Enemy "))
            .gauge_style(Style::default().fg(Color::Red))
            .ratio(ratio.clamp(0.0, 1.0))
            .label(format!("{}/{}", current, max));
        frame.render_widget(gauge, area);
    }

    fn render_inventory(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let selected_index = game.inventory().selected_index();
        let items: Vec<ListItem> = game
            .inventory()
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let marker = if Some(i) == selected_index { "▸" } else { " " };
                let line = format!(
                    "{} {}. {} - {} ({})",
                    marker,
                    i + 1,
                    item.name,
                    item.kind.name(),
                    item.value
                );
                let style = if Some(i) == selected_index {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(line).style(style)
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(" Inventory "))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

        let mut state = ListState::default();
        state.select(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_log(&self, frame: &mut Frame, area: Rect) {
        let visible = area.rows().count().saturating_sub(2);
        let lines: Vec<Line> = self
            .log
            .iter()
            .rev()
            .take(visible.max(1))
            .rev()
            .map(|event| {
                Line::from(Span::styled(
                    event.text.clone(),
                    Style::default().fg(event_color(event.kind)),
                ))
            })
            .collect();

        let block = Block::default().borders(Borders::ALL).title(" Messages ");
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect, game: &Game) {
        let text = match game.phase() {
            MatchPhase::Active => "↑/↓ move  Enter select  u use item  q quit match  Esc exit",
            _ => "Match over - press Esc to exit",
        };
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn event_color(kind: EventKind) -> Color {
    match kind {
        EventKind::DamageTaken(_) | EventKind::Lost => Color::Red,
        EventKind::DamageAbsorbed => Color::Cyan,
        EventKind::Won => Color::Green,
        EventKind::ItemUsed | EventKind::ItemSelected => Color::Yellow,
        EventKind::NoSelection | EventKind::OutOfRange | EventKind::InvalidState => {
            Color::Magenta
        }
        _ => Color::Gray,
    }
}
