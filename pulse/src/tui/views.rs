//! TUI rendering
//!
//! Stateless rendering of AppState. All layout lives here; key handling
//! lives in the app module.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use feedbackstore::{Mood, mood_histogram};

use super::state::{AppState, Phase, View};

/// Bar colors per mood level, ascending (red through teal, as the web
/// dashboard colored them)
const MOOD_COLORS: [Color; 5] = [Color::Red, Color::LightRed, Color::Yellow, Color::Green, Color::Cyan];

/// Render the whole frame
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(state, frame, chunks[0]);

    match state.view {
        View::Submit => render_submit_view(state, frame, chunks[1]),
        View::Dashboard => render_dashboard_view(state, frame, chunks[1]),
    }

    render_footer(state, frame, chunks[2]);
}

/// Header with title and tabs
fn render_header(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut spans = vec![
        Span::styled("⚡ CulturePulse", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
    ];

    for view in [View::Submit, View::Dashboard] {
        let style = if view == state.view {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", view.display_name()), style));
    }

    if !state.store_persistent {
        spans.push(Span::styled(
            "  [storage unavailable - session only]",
            Style::default().fg(Color::Yellow),
        ));
    }

    if state.phase == Phase::Summarizing {
        spans.push(Span::styled(
            format!("  ✨ {}...", state.streaming_word),
            Style::default().fg(Color::Magenta),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// The submission form: mood picker and comment box
fn render_submit_view(state: &AppState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Mood picker
            Constraint::Min(5),    // Comment input
        ])
        .split(area);

    let mut mood_spans = vec![Span::raw(" ")];
    for mood in Mood::ALL {
        let selected = state.form.mood == Some(mood.value());
        let style = if selected {
            Style::default()
                .fg(MOOD_COLORS[(mood.value() - 1) as usize])
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        mood_spans.push(Span::styled(format!(" {} {} ", mood.value(), mood.label()), style));
        mood_spans.push(Span::raw(" "));
    }

    let picker = Paragraph::new(vec![
        Line::from("How are you feeling about work today?"),
        Line::from(mood_spans),
    ])
    .block(Block::default().borders(Borders::ALL).title(" Mood (↑/↓) "));
    frame.render_widget(picker, chunks[0]);

    let comment = Paragraph::new(format!("{}█", state.form.comment))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Tell us more... (Enter submits) "));
    frame.render_widget(comment, chunks[1]);
}

/// The dashboard: histogram, optional plan panel, recent comments
fn render_dashboard_view(state: &AppState, frame: &mut Frame, area: Rect) {
    // Theme line + blank + one line per point + borders
    let plan_height = match &state.plan {
        Some(plan) => (plan.points.len() + 4) as u16,
        None => 0,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),           // Histogram
            Constraint::Length(plan_height), // Action plan (0 when hidden)
            Constraint::Min(3),              // Comments
        ])
        .split(area);

    render_histogram(state, frame, chunks[0]);
    if state.plan.is_some() {
        render_plan(state, frame, chunks[1]);
    }
    render_comments(state, frame, chunks[2]);
}

/// Five fixed bars, mood-ascending, zero counts included
fn render_histogram(state: &AppState, frame: &mut Frame, area: Rect) {
    let histogram = mood_histogram(&state.entries);
    let max_count = histogram.iter().map(|b| b.count).max().unwrap_or(0).max(1);
    let bar_width = area.width.saturating_sub(16) as usize;

    let lines: Vec<Line> = histogram
        .iter()
        .map(|bucket| {
            let filled = bucket.count * bar_width / max_count;
            Line::from(vec![
                Span::styled(format!("{:>5} ", bucket.label), Style::default().fg(Color::Gray)),
                Span::styled(
                    "█".repeat(filled),
                    Style::default().fg(MOOD_COLORS[(bucket.mood - 1) as usize]),
                ),
                Span::raw(format!(" {}", bucket.count)),
            ])
        })
        .collect();

    let chart = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Team Mood Overview "));
    frame.render_widget(chart, area);
}

/// The derived action plan panel
fn render_plan(state: &AppState, frame: &mut Frame, area: Rect) {
    let Some(plan) = &state.plan else {
        return;
    };

    let mut lines = Vec::new();

    let mut theme_spans = vec![Span::styled("Themes: ", Style::default().fg(Color::DarkGray))];
    for theme in &plan.themes {
        theme_spans.push(Span::styled(
            format!("#{} ", theme),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(theme_spans));
    lines.push(Line::from(""));

    for (i, point) in plan.points.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}. ", i + 1), Style::default().fg(Color::Green)),
            Span::raw(point.clone()),
        ]));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" ✨ Management Action Plan (x dismisses) "));
    frame.render_widget(panel, area);
}

/// Recent anonymous comments, most recent first
fn render_comments(state: &AppState, frame: &mut Frame, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;

    let lines: Vec<Line> = state
        .entries
        .iter()
        .skip(state.comment_scroll)
        .take(visible)
        .map(|entry| {
            let when = chrono::DateTime::from_timestamp_millis(entry.timestamp)
                .map(|t| t.format("%b %d").to_string())
                .unwrap_or_else(|| "-".to_string());
            let color = Mood::from_value(entry.mood)
                .map(|m| MOOD_COLORS[(m.value() - 1) as usize])
                .unwrap_or(Color::DarkGray);
            Line::from(vec![
                Span::styled(format!("{:>6}  ", when), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("[{}/5] ", entry.mood), Style::default().fg(color)),
                Span::raw(entry.comment.clone()),
            ])
        })
        .collect();

    let list = if lines.is_empty() {
        Paragraph::new("No feedback yet").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(lines)
    };
    let list = list.block(Block::default().borders(Borders::ALL).title(" Recent Anonymous Comments "));
    frame.render_widget(list, area);
}

/// Footer with keybinds or the transient status line
fn render_footer(state: &AppState, frame: &mut Frame, area: Rect) {
    let content = if let Some(status) = &state.status {
        Line::from(Span::styled(status.clone(), Style::default().fg(Color::Yellow)))
    } else {
        let keys = match state.view {
            View::Submit => "↑/↓ mood · type comment · Enter submit · Tab dashboard · Ctrl-C quit",
            View::Dashboard => "g generate plan · x dismiss · ↑/↓ scroll · Tab submit · q quit",
        };
        Line::from(Span::styled(keys, Style::default().fg(Color::DarkGray)))
    };

    let footer = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
