use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, Paragraph},
};

use moodbox::constants::{COVER_PLACEHOLDER, LOAD_ERROR_TITLE};
use moodbox::lyrics::format_time;
use moodbox::playlist::PlaylistSource;

use super::app::App;
use super::mood_dialog_ui::{centered_rect, draw_mood_dialog};
use super::search::SongSearch;

const ACCENT: Color = Color::Rgb(255, 175, 197);

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    draw_main_ui(f, app);

    if let Some(ref search) = app.search {
        draw_search(f, size, search, app);
    }

    if let Some(ref dialog) = app.mood_dialog {
        draw_mood_dialog(f, size, dialog, app.moods.moods(), app.active_mood());
    }
}

fn draw_main_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title + playlist
            Constraint::Length(4), // Now playing
            Constraint::Length(3), // Progress bar
            Constraint::Min(3),    // Lyrics
            Constraint::Length(1), // Status
            Constraint::Length(3), // Controls
        ])
        .split(f.area());

    draw_header(f, chunks[0], app);
    draw_now_playing(f, chunks[1], app);
    draw_progress_bar(f, chunks[2], app);
    draw_lyrics(f, chunks[3], app);
    draw_status(f, chunks[4], app);
    draw_controls(f, chunks[5], app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(30)])
        .split(area);

    let title = Paragraph::new("🎵 moodbox")
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    let icon = match app.playlist.source() {
        PlaylistSource::AllSongs => "♫ ",
        PlaylistSource::Mood { .. } => "♥ ",
    };
    let playlist = Paragraph::new(Line::from(vec![
        Span::styled(icon, Style::default().fg(ACCENT)),
        Span::styled(
            app.playlist.label().to_string(),
            Style::default().fg(Color::White),
        ),
    ]))
    .alignment(Alignment::Right);
    f.render_widget(playlist, chunks[1]);
}

fn draw_now_playing(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(7), Constraint::Min(10)])
        .split(area);

    let song = app.playlist.current_song();

    // Cover slot: a filled square when the song has art, a note otherwise
    let cover_text = match song.and_then(|s| s.cover_path.as_deref()) {
        Some(_) => "▣",
        None => COVER_PLACEHOLDER,
    };
    let cover_color = if app.is_playing { ACCENT } else { Color::DarkGray };
    let cover = Paragraph::new(cover_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(cover_color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(cover_color)),
        );
    f.render_widget(cover, chunks[0]);

    let (title, artist) = if app.load_error.is_some() {
        (LOAD_ERROR_TITLE.to_string(), String::new())
    } else if let Some(song) = song {
        (song.title.clone(), song.artist.clone())
    } else {
        ("No songs".to_string(), "Catalog is empty".to_string())
    };

    let position = if app.playlist.is_empty() {
        String::new()
    } else {
        format!(
            "{} of {}",
            app.playlist.current_index() + 1,
            app.playlist.len()
        )
    };

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(artist, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(position, Style::default().fg(Color::DarkGray))),
    ];
    let info = Paragraph::new(lines).block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(info, chunks[1]);
}

fn draw_progress_bar(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),    // Progress bar
            Constraint::Length(16), // Time display
        ])
        .split(area);

    let progress = app.progress();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(ACCENT))
        .ratio(progress)
        .label(if app.is_playing { "▶" } else { "❚❚" });
    f.render_widget(gauge, chunks[0]);

    let total = app.duration.map(|d| d.as_secs_f64()).unwrap_or(0.0);
    let time_info = format!(
        "{} / {}",
        format_time(app.position.as_secs_f64()),
        format_time(total)
    );
    let time_widget = Paragraph::new(time_info)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(time_widget, chunks[1]);
}

fn draw_lyrics(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Lyrics ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = app.lyrics.display_lines();
    let active = app.lyrics.active();

    // Keep the active line roughly in the middle of the panel
    let height = inner.height as usize;
    let offset = active
        .map(|i| i.saturating_sub(height / 2))
        .unwrap_or(0)
        .min(lines.len().saturating_sub(height));

    let rendered: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, text)| {
            let style = if app.lyrics.is_empty() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC)
            } else if Some(i) == active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else if active.is_some_and(|a| i < a) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(text.to_string(), style))
        })
        .collect();

    let lyrics = Paragraph::new(rendered).alignment(Alignment::Center);
    f.render_widget(lyrics, inner);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let text = match (&app.status_message, &app.load_error) {
        (Some(message), _) => message.clone(),
        (None, Some(error)) => error.clone(),
        (None, None) => String::new(),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    f.render_widget(status, area);
}

fn draw_controls(f: &mut Frame, area: Rect, app: &App) {
    let control_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let controls_row1 = vec![
        if app.is_playing {
            Span::styled("[space]", Style::default().fg(Color::Yellow))
        } else {
            Span::styled("[space]", Style::default().fg(Color::Green))
        },
        Span::raw(if app.is_playing { " pause  " } else { " play  " }),
        Span::styled("[p/n]", Style::default().fg(Color::Magenta)),
        Span::raw(" prev/next  "),
        Span::styled("[←→]", Style::default().fg(Color::Magenta)),
        Span::raw(" seek  "),
        Span::styled("[0-9]", Style::default().fg(Color::Magenta)),
        Span::raw(" jump  "),
        Span::styled("[+/-]", Style::default().fg(Color::Magenta)),
        Span::raw(format!(" vol {:.0}%", app.volume() * 100.0)),
    ];

    let controls_row2 = vec![
        Span::styled("[m]", Style::default().fg(ACCENT)),
        Span::raw(" moods  "),
        Span::styled("[a]", Style::default().fg(ACCENT)),
        Span::raw(" add to mood  "),
        Span::styled("[A]", Style::default().fg(Color::Cyan)),
        Span::raw(" all songs  "),
        Span::styled("[/]", Style::default().fg(Color::Blue)),
        Span::raw(" search  "),
        Span::styled("[q]", Style::default().fg(Color::Red)),
        Span::raw(" quit"),
    ];

    let border_widget = Block::default().borders(Borders::TOP);
    f.render_widget(border_widget, control_chunks[0]);

    f.render_widget(
        Paragraph::new(Line::from(controls_row1)).alignment(Alignment::Center),
        control_chunks[1],
    );
    f.render_widget(
        Paragraph::new(Line::from(controls_row2)).alignment(Alignment::Center),
        control_chunks[2],
    );
}

fn draw_search(f: &mut Frame, area: Rect, search: &SongSearch, app: &App) {
    let modal_area = centered_rect(area, 64, 22);
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(" Find a song ")
        .title_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));
    let inner = block.inner(modal_area);
    f.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    let query = Paragraph::new(search.query.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(format!(" {} matches ", search.results.len())),
    );
    f.render_widget(query, chunks[0]);

    let cursor_x = chunks[0].x + 1 + search.query.chars().count() as u16;
    if cursor_x < chunks[0].x + chunks[0].width.saturating_sub(1) {
        f.set_cursor_position((cursor_x, chunks[0].y + 1));
    }

    let visible = chunks[1].height.max(1) as usize;
    let offset = search.selected.saturating_sub(visible - 1);
    let items: Vec<ListItem> = search
        .results
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .filter_map(|(i, &song_idx)| {
            let song = app.catalog.songs.get(song_idx)?;
            let style = if i == search.selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Some(
                ListItem::new(Line::from(vec![
                    Span::styled(song.title.clone(), style),
                    Span::styled(
                        format!("  {}", song.artist),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])),
            )
        })
        .collect();

    f.render_widget(List::new(items), chunks[1]);
}
