use crate::browser::CoinBrowser;
use crate::store::{FetchCompletion, PendingFetch};
use crate::ui::input::{InputAction, Movement};
use crate::ui::layout::list_rows;

/// Terminal screen state around a [`CoinBrowser`].
///
/// Methods that may trigger a page load return the [`PendingFetch`] for the
/// runtime to spawn.
pub struct App {
    browser: CoinBrowser,
    selected: usize,
    viewport_rows: u16,
    end_threshold: f32,
    should_quit: bool,
}

impl App {
    pub fn new(browser: CoinBrowser, end_threshold: f32) -> Self {
        Self {
            browser,
            selected: 0,
            viewport_rows: 0,
            end_threshold,
            should_quit: false,
        }
    }

    pub fn browser(&self) -> &CoinBrowser {
        &self.browser
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.viewport_rows = list_rows(cols, rows);
    }

    /// First page, requested once at startup.
    pub fn initial_load(&mut self) -> Option<PendingFetch> {
        self.browser.on_near_end_of_list()
    }

    pub fn apply(&mut self, action: InputAction) -> Option<PendingFetch> {
        match action {
            InputAction::Quit => {
                self.request_quit();
                None
            }
            InputAction::InsertChar(ch) => {
                let mut query = self.browser.query().to_string();
                query.push(ch);
                self.set_query(query);
                None
            }
            InputAction::DeleteChar => {
                let mut query = self.browser.query().to_string();
                if query.pop().is_some() {
                    self.set_query(query);
                }
                None
            }
            InputAction::ClearQuery => {
                if !self.browser.query().is_empty() {
                    self.set_query(String::new());
                }
                None
            }
            InputAction::Move(movement) => {
                self.move_selection(movement);
                if self.near_end() {
                    self.browser.on_near_end_of_list()
                } else {
                    None
                }
            }
        }
    }

    /// Pasted text is appended to the query, line breaks dropped.
    pub fn on_paste(&mut self, text: &str) {
        let pasted: String = text.chars().filter(|c| !c.is_control()).collect();
        if pasted.is_empty() {
            return;
        }
        let mut query = self.browser.query().to_string();
        query.push_str(&pasted);
        self.set_query(query);
    }

    /// Applies a page completion. When the page grew the list but it still
    /// does not reach past the near-end band, the next page is requested
    /// right away so a short list keeps filling the screen.
    pub fn on_page_fetched(&mut self, completion: FetchCompletion) -> Option<PendingFetch> {
        let outcome = self.browser.on_page_fetched(completion);
        tracing::debug!(?outcome, "Page completion applied");
        self.clamp_selection();
        if outcome.grew() && self.near_end() {
            self.browser.on_near_end_of_list()
        } else {
            None
        }
    }

    fn set_query(&mut self, query: String) {
        self.browser.on_query_changed(query);
        self.selected = 0;
    }

    fn move_selection(&mut self, movement: Movement) {
        let len = self.browser.visible_len();
        if len == 0 {
            self.selected = 0;
            return;
        }
        let last = len - 1;
        let page = usize::from(self.viewport_rows.max(1));
        self.selected = match movement {
            Movement::Up => self.selected.saturating_sub(1),
            Movement::Down => (self.selected + 1).min(last),
            Movement::PageUp => self.selected.saturating_sub(page),
            Movement::PageDown => (self.selected + page).min(last),
            Movement::Home => 0,
            Movement::End => last,
        };
    }

    fn clamp_selection(&mut self) {
        let len = self.browser.visible_len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }

    fn near_end(&self) -> bool {
        is_near_end(
            self.selected,
            self.browser.visible_len(),
            self.viewport_rows,
            self.end_threshold,
        )
    }
}

/// True when at most `threshold * viewport_rows` rows remain below `selected`.
pub fn is_near_end(selected: usize, len: usize, viewport_rows: u16, threshold: f32) -> bool {
    let below = len.saturating_sub(selected + 1);
    below as f32 <= threshold * f32::from(viewport_rows)
}
