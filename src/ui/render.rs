use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::layout::layout_regions;
use crate::ui::row::CoinRow;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, MUTED_TEXT, PLACEHOLDER, PRICE_FALLING, PRICE_RISING, ROW_BORDER,
    SEARCH_BACKGROUND, TEXT,
};
use ratatui::layout::Position;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const SYMBOL_WIDTH: usize = 8;
const NAME_WIDTH: usize = 24;
const PRICE_WIDTH: usize = 18;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let browser = app.browser();

    let query = browser.query();
    let search_line = if query.is_empty() {
        Line::from(Span::styled("Search", Style::default().fg(PLACEHOLDER)))
    } else {
        Line::from(Span::styled(query.to_string(), Style::default().fg(TEXT)))
    };
    let search = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(ROW_BORDER))
            .style(Style::default().bg(SEARCH_BACKGROUND)),
    );
    frame.render_widget(search, regions.search);
    if regions.search.width > 2 && regions.search.height > 2 {
        let typed = query.chars().count() as u16;
        let x = regions.search.x + 1 + typed.min(regions.search.width.saturating_sub(3));
        frame.set_cursor_position(Position::new(x, regions.search.y + 1));
    }

    frame.render_widget(
        Paragraph::new(Span::styled(" All Coins", Style::default().fg(MUTED_TEXT))),
        regions.caption,
    );

    let items: Vec<ListItem<'static>> = browser
        .visible()
        .map(|coin| row_item(&CoinRow::from(coin)))
        .collect();
    let list = List::new(items).highlight_style(
        Style::default()
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
    );
    let mut state = ListState::default().with_selected(if browser.visible_len() == 0 {
        None
    } else {
        Some(app.selected())
    });
    frame.render_stateful_widget(list, regions.list, &mut state);

    let footer = Footer::new();
    frame.render_widget(footer.widget(regions.footer, browser), regions.footer);
}

fn row_item(row: &CoinRow) -> ListItem<'static> {
    let change_color = if row.rising { PRICE_RISING } else { PRICE_FALLING };
    ListItem::new(Line::from(vec![
        Span::styled(
            format!(" {:<width$}", row.symbol, width = SYMBOL_WIDTH),
            Style::default().fg(TEXT),
        ),
        Span::styled(
            format!("{:<width$}", truncate(&row.name, NAME_WIDTH), width = NAME_WIDTH),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::styled(
            format!("{:>width$}", row.price, width = PRICE_WIDTH),
            Style::default().fg(TEXT),
        ),
        Span::styled(format!("{:>10}", row.change), Style::default().fg(change_color)),
    ]))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max.saturating_sub(2)).collect();
    cut.push('…');
    cut.push(' ');
    cut
}
