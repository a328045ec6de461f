//! Interactive demo for the data-provider card.
//!
//! Cycles the card through representative invocation states: streaming,
//! success via marker tag, failure via keyword, and an unlisted marker
//! value. Tab/Space/arrows switch states, `q` or Esc quits.

use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use serde_json::json;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use datacard_tui::{ProviderCard, palette};
use datacard_types::{ToolContent, ToolInvocationView, UiOptions};

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let backend = CrosstermBackend::new(out);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let mut out = stdout();
                let _ = execute!(out, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn sample_views() -> Vec<(&'static str, ToolInvocationView)> {
    let now = Utc::now();
    vec![
        (
            "streaming",
            ToolInvocationView {
                assistant_content: Some(ToolContent::from(
                    r#"<get-data-provider-endpoints service_name="weather">"#,
                )),
                is_streaming: true,
                assistant_timestamp: Some(now),
                ..Default::default()
            },
        ),
        (
            "success via marker",
            ToolInvocationView {
                assistant_content: Some(ToolContent::from(
                    r#"<get-data-provider-endpoints service_name="real_estate">"#,
                )),
                tool_content: Some(ToolContent::from(json!({
                    "endpoints": ["search", "property_details", "zestimate"],
                }))),
                assistant_timestamp: Some(now),
                tool_timestamp: Some(now),
                ..Default::default()
            },
        ),
        (
            "failure via keyword",
            ToolInvocationView {
                assistant_content: Some(ToolContent::from(
                    "look up senior engineers on linkedin",
                )),
                is_success: false,
                assistant_timestamp: Some(now),
                tool_timestamp: Some(now),
                ..Default::default()
            },
        ),
        (
            "unlisted marker value",
            ToolInvocationView {
                assistant_content: Some(ToolContent::from(
                    r#"<get-data-provider-endpoints service_name="Orbital-Mechanics">"#,
                )),
                assistant_timestamp: Some(now),
                tool_timestamp: Some(now),
                ..Default::default()
            },
        ),
    ]
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let mut session = TerminalSession::new()?;
    run(&mut session.terminal)
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let views = sample_views();
    let options = UiOptions::default();
    let mut card = ProviderCard::new();
    let mut index = 0usize;
    let mut tick = 0usize;
    let mut last_tick = Instant::now();
    let tick_rate = Duration::from_millis(100);

    loop {
        let (label, view) = &views[index];

        terminal.draw(|frame| {
            let palette = palette(options);
            let area = frame.area();
            frame.render_widget(
                Block::default().style(Style::default().bg(palette.bg_dark)),
                area,
            );

            let card_area = Rect {
                x: area.x + 2,
                y: area.y + 1,
                width: area.width.saturating_sub(4).min(70),
                height: area.height.saturating_sub(4).min(18),
            };
            card.draw(frame, card_area, view, tick, options);

            let hint_area = Rect {
                x: area.x + 2,
                y: area.bottom().saturating_sub(2),
                width: area.width.saturating_sub(4),
                height: 1,
            };
            let hints = Line::from(vec![
                Span::styled(
                    format!(" {label} "),
                    Style::default()
                        .fg(palette.bg_dark)
                        .bg(palette.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("  Tab/Space", Style::default().fg(palette.warning)),
                Span::styled(" next  ", Style::default().fg(palette.text_muted)),
                Span::styled("q", Style::default().fg(palette.warning)),
                Span::styled(" quit", Style::default().fg(palette.text_muted)),
            ]);
            frame.render_widget(Paragraph::new(hints), hint_area);
        })?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab | KeyCode::Char(' ') | KeyCode::Right => {
                    index = (index + 1) % views.len();
                    tracing::debug!(state = views[index].0, "switched demo state");
                }
                KeyCode::Left => {
                    index = (index + views.len() - 1) % views.len();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            tick = tick.wrapping_add(1);
            last_tick = Instant::now();
        }
    }
}
