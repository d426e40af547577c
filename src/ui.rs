use ratatui::{prelude::*, widgets::*};

use crate::messages::render::ButtonView;

/// Renders a text input field
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

/// Renders a page button with its key hint, dimmed when disabled
pub fn button_span(button: &ButtonView, key: &str) -> Span<'static> {
    let style = if button.disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Black).bg(Color::Cyan).bold()
    };
    Span::styled(format!(" {} [{}] ", button.label, key), style)
}

/// Renders a list of text blocks, newest last
pub fn render_lines<'a>(items: &'a [String], title: &'a str, empty: &'a str) -> List<'a> {
    let items: Vec<ListItem> = if items.is_empty() {
        vec![ListItem::new(Span::styled(
            empty,
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        items.iter().map(|s| ListItem::new(s.as_str())).collect()
    };

    List::new(items).block(Block::default().borders(Borders::ALL).title(title))
}

/// Tail of `items` that fits in `height` rows inside a bordered block
pub fn visible_tail(items: &[String], height: u16) -> &[String] {
    let rows = height.saturating_sub(2) as usize;
    &items[items.len().saturating_sub(rows)..]
}

/// Counter value color: green above zero, red below
pub fn counter_color(counter: &str) -> Color {
    match counter.parse::<i64>() {
        Ok(n) if n > 0 => Color::Green,
        Ok(n) if n < 0 => Color::Red,
        _ => Color::White,
    }
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_tail_keeps_newest() {
        let items: Vec<String> = (1..=5).map(|i| i.to_string()).collect();
        assert_eq!(visible_tail(&items, 5), ["3", "4", "5"]);
        assert_eq!(visible_tail(&items, 40).len(), 5);
        assert!(visible_tail(&items, 1).is_empty());
    }

    #[test]
    fn test_counter_color() {
        assert_eq!(counter_color("3"), Color::Green);
        assert_eq!(counter_color("-1"), Color::Red);
        assert_eq!(counter_color("0"), Color::White);
    }

    #[test]
    fn test_disabled_button_dimmed() {
        let mut button = ButtonView::new("+");
        button.disabled = true;
        let span = button_span(&button, "+");
        assert_eq!(span.content, " + [+] ");
        assert_eq!(span.style.fg, Some(Color::DarkGray));
    }
}
