//! App state and input handling
//!
//! Wraps the phrase view with what the terminal needs on top of it:
//! the last rendered text area, scroll offset, keyboard focus.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::layout::{wrap, WrappedText};
use crate::models::PhraseId;
use crate::view::{PhraseView, Tap};

/// Rows moved per mouse wheel notch
const WHEEL_STEP: usize = 1;

pub struct App {
    /// The interactive phrase view
    pub view: PhraseView,
    /// Whether the app is running
    pub running: bool,
    /// Phrase with keyboard focus
    pub focus: Option<PhraseId>,
    /// First visible wrapped row
    scroll: usize,
    /// Inner area of the text block at the last render
    text_area: Rect,
    wrapped: WrappedText,
}

impl App {
    pub fn new(view: PhraseView) -> Self {
        let wrapped = wrap(view.text().as_str(), 0);
        Self {
            view,
            running: true,
            focus: None,
            scroll: 0,
            text_area: Rect::default(),
            wrapped,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn wrapped(&self) -> &WrappedText {
        &self.wrapped
    }

    pub fn text_area(&self) -> Rect {
        self.text_area
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Scroll offset in the form `Paragraph::scroll` takes
    pub fn scroll_offset(&self) -> u16 {
        self.scroll.min(u16::MAX as usize) as u16
    }

    /// Record where the text was laid out; rewraps when the width changes
    pub fn set_text_area(&mut self, area: Rect) {
        if area.width != self.wrapped.width() {
            self.wrapped = wrap(self.view.text().as_str(), area.width);
        }
        self.text_area = area;
        self.clamp_scroll();
    }

    fn max_scroll(&self) -> usize {
        self.wrapped
            .row_count()
            .saturating_sub(self.text_area.height as usize)
    }

    fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta);
        self.clamp_scroll();
    }

    /// Make sure the first row of `id` is on screen
    fn scroll_to(&mut self, id: PhraseId) {
        let Some(range) = self.view.text().range(id) else {
            return;
        };
        let Some(row) = self.wrapped.row_of(range.start) else {
            return;
        };
        let height = (self.text_area.height as usize).max(1);
        if row < self.scroll {
            self.scroll = row;
        } else if row >= self.scroll + height {
            self.scroll = row + 1 - height;
        }
        self.clamp_scroll();
    }

    // =========================================================================
    // Taps
    // =========================================================================

    /// Resolve a terminal cell to a tap target
    pub fn tap_at(&self, column: u16, row: u16) -> Option<Tap> {
        let area = self.text_area;
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }
        let line = (row - area.y) as usize + self.scroll;
        let char_index = self.wrapped.char_at(column - area.x, line)?;
        self.view.link_at(char_index)
    }

    /// Tap whatever is under the cell. Returns whether a tap was handled.
    pub fn click(&mut self, column: u16, row: u16) -> bool {
        match self.tap_at(column, row) {
            Some(tap) => {
                let handled = self.view.handle_tap(&tap.link, tap.range);
                if handled {
                    self.focus = self.view.last_tapped();
                }
                handled
            }
            None => false,
        }
    }

    /// Tap the focused phrase
    pub fn tap_focused(&mut self) -> bool {
        let Some(tap) = self.focus.and_then(|id| self.view.link_for(id)) else {
            return false;
        };
        self.view.handle_tap(&tap.link, tap.range)
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Move focus to the next interactive phrase, wrapping around
    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    /// Move focus to the previous interactive phrase, wrapping around
    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.view.phrases().len();
        if count == 0 {
            return;
        }
        let start = match (self.focus, forward) {
            (Some(PhraseId(i)), true) => i + 1,
            (Some(PhraseId(i)), false) => i + count - 1,
            (None, true) => 0,
            (None, false) => count - 1,
        };

        let next = (0..count)
            .map(|step| {
                if forward {
                    (start + step) % count
                } else {
                    (start + count - step) % count
                }
            })
            .map(PhraseId)
            .find(|&id| self.view.link_for(id).is_some_and(|t| !t.range.is_empty()));

        if let Some(id) = next {
            self.focus = Some(id);
            self.scroll_to(id);
        }
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a key event. Returns true if the event was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return true;
        }

        let page = (self.text_area.height as isize).max(1);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.quit();
                true
            }
            KeyCode::Tab | KeyCode::Right => {
                self.focus_next();
                true
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.focus_prev();
                true
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.tap_focused(),
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_by(-1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_by(1);
                true
            }
            KeyCode::PageUp => {
                self.scroll_by(-page);
                true
            }
            KeyCode::PageDown => {
                self.scroll_by(page);
                true
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll = 0;
                true
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.scroll = self.max_scroll();
                true
            }
            _ => false,
        }
    }

    /// Handle a mouse event. Returns true if the event was consumed.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(mouse.column, mouse.row),
            MouseEventKind::ScrollUp => {
                self.scroll_by(-(WHEEL_STEP as isize));
                true
            }
            MouseEventKind::ScrollDown => {
                self.scroll_by(WHEEL_STEP as isize);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PhraseList;

    fn app(phrases: &[&str]) -> App {
        let mut app = App::new(PhraseView::new(
            PhraseList::new(phrases.iter().copied()),
            None,
        ));
        app.set_text_area(Rect::new(1, 1, 20, 3));
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut a = app(&["Hi. ", "Bye."]);
        a.handle_key(key(KeyCode::Char('q')));
        assert!(!a.running);

        let mut a = app(&["Hi. ", "Bye."]);
        a.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!a.running);
    }

    #[test]
    fn test_click_taps_phrase_under_cell() {
        let mut a = app(&["Hi. ", "Bye."]);
        // Text starts at (1, 1); "Bye." spans columns 5..9
        assert!(a.click(6, 1));
        assert_eq!(a.view.last_tapped(), Some(PhraseId(1)));
        assert_eq!(a.focus, Some(PhraseId(1)));
    }

    #[test]
    fn test_click_outside_text_ignored() {
        let mut a = app(&["Hi. ", "Bye."]);
        assert!(!a.click(0, 0));
        assert!(!a.click(15, 1));
        assert!(!a.click(2, 2));
        assert!(a.view.styles().tapped().is_empty());
    }

    #[test]
    fn test_click_on_tapped_phrase_is_inert() {
        let mut a = app(&["Hi. ", "Bye."]);
        assert!(a.click(6, 1));
        assert!(!a.click(7, 1));
        assert_eq!(a.view.styles().tapped(), vec![PhraseId(1)]);
    }

    #[test]
    fn test_focus_cycles_and_skips_tapped() {
        let mut a = app(&["a ", "b ", "c"]);
        a.focus_next();
        assert_eq!(a.focus, Some(PhraseId(0)));
        assert!(a.handle_key(key(KeyCode::Enter)));
        a.focus_next();
        assert_eq!(a.focus, Some(PhraseId(1)));
        a.focus_next();
        assert_eq!(a.focus, Some(PhraseId(2)));
        // Phrase 0 is tapped and inert, so focus wraps to 1
        a.focus_next();
        assert_eq!(a.focus, Some(PhraseId(1)));
        a.focus_prev();
        assert_eq!(a.focus, Some(PhraseId(2)));
    }

    #[test]
    fn test_enter_without_focus_does_nothing() {
        let mut a = app(&["Hi. ", "Bye."]);
        assert!(!a.handle_key(key(KeyCode::Enter)));
        assert!(a.view.styles().tapped().is_empty());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut a = app(&["one two three four five six seven eight nine ten"]);
        a.set_text_area(Rect::new(0, 0, 6, 2));
        let rows = a.wrapped().row_count();
        assert!(rows > 2);

        a.scroll_by(-5);
        assert_eq!(a.scroll(), 0);
        a.scroll_by(100);
        assert_eq!(a.scroll(), rows - 2);
        a.handle_key(key(KeyCode::Home));
        assert_eq!(a.scroll(), 0);
    }

    #[test]
    fn test_click_accounts_for_scroll() {
        let mut a = app(&["aaaa ", "bbbb ", "cccc"]);
        a.set_text_area(Rect::new(0, 0, 5, 1));
        a.scroll_by(2);
        assert!(a.click(0, 0));
        assert_eq!(a.view.last_tapped(), Some(PhraseId(2)));
    }

    #[test]
    fn test_focus_scrolls_into_view() {
        let mut a = app(&["aaaa ", "bbbb ", "cccc"]);
        a.set_text_area(Rect::new(0, 0, 5, 1));
        a.focus_prev();
        assert_eq!(a.focus, Some(PhraseId(2)));
        assert_eq!(a.scroll(), 2);
    }
}
