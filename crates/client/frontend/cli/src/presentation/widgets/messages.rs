//! Notice panel: one line per logical notice, newest at the bottom.

use client_frontend_core::{
    message::{MessageEntry, MessageLog},
    view_model::PresentationMapper,
};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListDirection, ListItem},
};

pub fn render<T: PresentationMapper<Style = Style>>(
    frame: &mut Frame,
    area: Rect,
    log: &MessageLog,
    visible: usize,
    theme: &T,
) {
    let mut items: Vec<ListItem> = log
        .recent(visible)
        .map(|entry| ListItem::new(notice_line(entry, theme.style_message(entry.level))))
        .collect();
    items.resize_with(visible.max(items.len()), || ListItem::new(""));

    let title = match log.latest() {
        Some(latest) => format!("Notices (last #{})", latest.sequence),
        None => "Notices".to_string(),
    };
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .direction(ListDirection::BottomToTop);

    frame.render_widget(list, area);
}

fn notice_line(entry: &MessageEntry, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<5} ", entry.level.tag()), style),
        Span::raw(notice_text(entry)),
    ])
}

/// Notice text with a repeat counter once it has fired more than once.
fn notice_text(entry: &MessageEntry) -> String {
    match entry.repeats {
        0 | 1 => entry.text.clone(),
        n => format!("{} (x{n})", entry.text),
    }
}
