use crate::browser::CoinBrowser;
use crate::ui::theme::MUTED_TEXT;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ↑↓ PgUp/PgDn: Scroll │ Ctrl+U: Clear │ Esc: Quit";

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, browser: &CoinBrowser) -> Paragraph<'static> {
        let status = status_text(browser);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count.
        let used = status.chars().count() + HINTS.chars().count() + version.chars().count();
        let padding = (area.width as usize).saturating_sub(used);

        let text_style = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(status, Style::default().fg(MUTED_TEXT)),
            Span::styled(HINTS, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left)
    }
}

pub fn status_text(browser: &CoinBrowser) -> String {
    let mut status = format!(" {}/{} coins", browser.visible_len(), browser.dataset_len());
    if browser.loading() {
        status.push_str(" · Loading…");
    } else if !browser.has_more() {
        status.push_str(" · end of list");
    }
    status
}
