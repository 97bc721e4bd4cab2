use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use moodbox::moods::Mood;

use super::mood_dialog::{MoodDialog, MoodDialogFocus, MoodDialogMode};

pub fn draw_mood_dialog(
    f: &mut Frame,
    area: Rect,
    dialog: &MoodDialog,
    moods: &[Mood],
    active_mood: Option<usize>,
) {
    // Create a centered modal
    let modal_area = centered_rect(area, 56, 20);

    // Clear the background
    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(dialog.title())
        .title_style(
            Style::default()
                .fg(Color::LightMagenta)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(block, modal_area);

    let inner_area = modal_area.inner(ratatui::layout::Margin {
        horizontal: 1,
        vertical: 1,
    });

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Mood list
            Constraint::Length(3), // New mood field
            Constraint::Length(2), // Controls
        ])
        .split(inner_area);

    draw_mood_list(f, chunks[0], dialog, moods, active_mood);

    let field_block = Block::default()
        .borders(Borders::ALL)
        .border_style(if dialog.focus == MoodDialogFocus::NameField {
            Style::default().fg(Color::LightMagenta)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(" New mood ");
    let field = Paragraph::new(dialog.new_name.as_str())
        .style(Style::default().fg(Color::White))
        .block(field_block);
    f.render_widget(field, chunks[1]);

    if dialog.focus == MoodDialogFocus::NameField {
        let cursor_x = chunks[1].x + 1 + dialog.new_name.chars().count() as u16;
        let cursor_y = chunks[1].y + 1;
        if cursor_x < chunks[1].x + chunks[1].width.saturating_sub(1) {
            f.set_cursor_position((cursor_x, cursor_y));
        }
    }

    let controls = if dialog.pending_delete.is_some() {
        vec![
            Span::styled("[y]", Style::default().fg(Color::Red)),
            Span::raw(" delete mood  "),
            Span::styled("[any]", Style::default().fg(Color::Yellow)),
            Span::raw(" keep it"),
        ]
    } else {
        let mut spans = vec![
            Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
            Span::raw(" switch  "),
            Span::styled("[Enter]", Style::default().fg(Color::Green)),
        ];
        match (dialog.focus, dialog.mode) {
            (MoodDialogFocus::NameField, _) => spans.push(Span::raw(" create  ")),
            (_, MoodDialogMode::Browse) => {
                spans.push(Span::raw(" play  "));
                spans.push(Span::styled("[d]", Style::default().fg(Color::Red)));
                spans.push(Span::raw(" delete  "));
                spans.push(Span::styled("[A]", Style::default().fg(Color::Cyan)));
                spans.push(Span::raw(" all  "));
            }
            (_, MoodDialogMode::AddSong) => spans.push(Span::raw(" add  ")),
        }
        spans.push(Span::styled("[Esc]", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" close"));
        spans
    };
    let controls_widget = Paragraph::new(Line::from(controls)).alignment(Alignment::Center);
    f.render_widget(controls_widget, chunks[2]);
}

fn draw_mood_list(
    f: &mut Frame,
    area: Rect,
    dialog: &MoodDialog,
    moods: &[Mood],
    active_mood: Option<usize>,
) {
    if moods.is_empty() {
        let empty = Paragraph::new("No moods yet.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(empty, area);
        return;
    }

    // Keep the selection visible in short terminals
    let visible = area.height.max(1) as usize;
    let offset = dialog.selected_index.saturating_sub(visible - 1);

    let items: Vec<ListItem> = moods
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, mood)| {
            let is_selected =
                i == dialog.selected_index && dialog.focus == MoodDialogFocus::MoodList;
            let is_active = active_mood == Some(i) && dialog.mode == MoodDialogMode::Browse;
            let is_pending = dialog.pending_delete == Some(i);

            let mut style = Style::default();
            if is_active {
                style = style.fg(Color::LightMagenta);
            }
            if is_selected {
                style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
            }
            if is_pending {
                style = style.fg(Color::Red);
            }

            let marker = if is_active { "▶ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{marker}{}", mood.name), style),
                Span::styled(
                    format!(" ({})", mood.songs.len()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::NONE));
    f.render_widget(list, area);
}

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4)).max(1);
    let height = height.min(area.height.saturating_sub(4)).max(1);

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
