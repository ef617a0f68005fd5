//! Interactive terminal UI: pattern list, color pickers and live preview.

mod app;

use std::io::{self, stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use ratatui_image::StatefulImage;

use pattex::{Role, Session};

use crate::cli::CommonArgs;
use app::{App, InputKind};

pub fn run_tui(args: CommonArgs) -> Result<(), String> {
    // Initialize terminal
    enable_raw_mode().map_err(|e| e.to_string())?;
    stdout().execute(EnterAlternateScreen).map_err(|e| e.to_string())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout())).map_err(|e| e.to_string())?;

    let mut app = App::new(args);

    // Main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().map_err(|e| e.to_string())?;
    stdout().execute(LeaveAlternateScreen).map_err(|e| e.to_string())?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<(), String> {
    loop {
        // Check for the loaded session (non-blocking)
        app.check_load()?;

        // Repaint the surface and preview if needed
        app.update_image();

        // Animate spinner while loading
        if app.is_loading() {
            app.spinner_frame = (app.spinner_frame + 1) % 8;
        }

        terminal.draw(|frame| ui(frame, app)).map_err(|_| "Draw error".to_string())?;

        if event::poll(Duration::from_millis(50)).map_err(|e| e.to_string())? {
            if let Event::Key(key) = event::read().map_err(|e| e.to_string())? {
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if let Some(input) = app.input.as_mut() {
        match key.code {
            KeyCode::Enter => app.commit_input(),
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Backspace => {
                input.buffer.pop();
            }
            KeyCode::Char(c) if input.kind.accepts(c) => {
                if input.buffer.len() < input.kind.max_len() {
                    input.buffer.push(c);
                }
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.cycle_pattern(-1),
        KeyCode::Down | KeyCode::Char('j') => app.cycle_pattern(1),
        KeyCode::Char('b') => app.cycle_color(Role::Base, 1),
        KeyCode::Char('B') => app.cycle_color(Role::Base, -1),
        KeyCode::Char('a') => app.cycle_color(Role::Accent, 1),
        KeyCode::Char('A') => app.cycle_color(Role::Accent, -1),
        KeyCode::Char('c') => app.start_input(Role::Accent, InputKind::Hex),
        KeyCode::Char('C') => app.start_input(Role::Base, InputKind::Hex),
        KeyCode::Char('g') => app.start_input(Role::Accent, InputKind::Rgb),
        KeyCode::Char('G') => app.start_input(Role::Base, InputKind::Rgb),
        KeyCode::Char('+') | KeyCode::Char('=') => app.zoom(1),
        KeyCode::Char('-') | KeyCode::Char('_') => app.zoom(-1),
        KeyCode::Char('r') => app.randomize(),
        KeyCode::Char('s') => app.save_png(),
        KeyCode::Char('y') => app.copy_clipboard(),
        KeyCode::Char('w') => app.save_session(),
        _ => {}
    }
}

fn color_line(session: &Session, role: Role) -> Line<'static> {
    let selection = session.selection().role(role);
    let label = selection.describe();
    match session.resolve(role) {
        Ok(rgb) => Line::from(vec![
            Span::styled("  ", Style::default().bg(Color::Rgb(rgb.r, rgb.g, rgb.b))),
            Span::raw(format!(" {:6} {} {}", role.name(), label, rgb.to_hex())),
        ]),
        Err(e) => Line::from(Span::styled(format!("{:6} {}", role.name(), e), Style::default().fg(Color::Red))),
    }
}

fn ui(frame: &mut Frame, app: &mut App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(frame.area());

    let top_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(40)])
        .split(main_layout[0]);

    // Split left sidebar into patterns list and colors
    let sidebar_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(top_layout[0]);

    // Pattern list
    let items: Vec<ListItem> = app
        .session
        .as_ref()
        .map(|s| {
            s.patterns()
                .specs()
                .iter()
                .map(|p| ListItem::new(format!("{} ({})", p.name, p.type_tag)))
                .collect()
        })
        .unwrap_or_default();

    let list = List::new(items)
        .block(
            Block::default()
                .title(" Patterns ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    frame.render_stateful_widget(list, sidebar_layout[0], &mut app.pattern_state.clone());

    // Colors panel
    let color_lines = match &app.session {
        Some(session) => vec![color_line(session, Role::Base), color_line(session, Role::Accent)],
        None => vec![Line::from("...")],
    };
    let colors = Paragraph::new(color_lines).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(colors, sidebar_layout[1]);

    // Spinner animation frames
    let spinner_chars = ['|', '/', '-', '\\', '|', '/', '-', '\\'];
    let spinner = spinner_chars[app.spinner_frame % spinner_chars.len()];

    let image_title = match &app.session {
        None => format!(" [{}] Loading catalogs... ", spinner),
        Some(s) => format!(
            " {} @ {}x ",
            s.selection().pattern.as_deref().unwrap_or("-"),
            app.scale
        ),
    };
    let border_color = if app.is_loading() { Color::Yellow } else { Color::Green };

    let image_block = Block::default()
        .title(image_title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = image_block.inner(top_layout[1]);
    frame.render_widget(image_block, top_layout[1]);

    if let Some(ref mut image_state) = app.image_state {
        let image_widget = StatefulImage::new(None);
        frame.render_stateful_widget(image_widget, inner_area, image_state);
    }

    // Bottom: status / input and help
    let bottom_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_layout[1]);

    let (status_title, status_text, status_style) = match &app.input {
        Some(input) => (
            format!(" Custom {} {} (Enter/Esc) ", input.role, input.kind.label()),
            format!("{}_", input.buffer),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        None => (" Status ".to_string(), app.status.clone(), Style::default().fg(Color::White)),
    };
    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(Block::default().title(status_title).borders(Borders::ALL));
    frame.render_widget(status, bottom_layout[0]);

    let help = Paragraph::new(
        "↑↓ pattern  b/B base  a/A accent  c/C hex\ng/G rgb  +/- scale  r random  s save\ny copy  w session  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, bottom_layout[1]);
}
