//! Interactive phrase view
//!
//! Owns the composed text, the pristine tagging and the current style table.
//! Every accepted tap rebuilds the table from the pristine tagging, so all
//! ranges except the tapped one are back to untapped and interactive.

use std::ops::Range;

use crate::audio::Cue;
use crate::models::{ComposedText, PhraseId, PhraseList, StyleTable, StyledRange};

/// A resolved tap: the link string under the pointer and its char range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tap {
    pub link: String,
    pub range: Range<usize>,
}

pub struct PhraseView {
    phrases: PhraseList,
    text: ComposedText,
    pristine: StyleTable,
    styles: StyleTable,
    cue: Option<Box<dyn Cue>>,
    /// Play requested during this turn, run by `run_deferred`
    cue_pending: bool,
    last_tapped: Option<PhraseId>,
}

impl PhraseView {
    pub fn new(phrases: PhraseList, cue: Option<Box<dyn Cue>>) -> Self {
        let text = ComposedText::compose(&phrases);
        let pristine = StyleTable::pristine(&text);
        Self {
            styles: pristine.clone(),
            phrases,
            text,
            pristine,
            cue,
            cue_pending: false,
            last_tapped: None,
        }
    }

    pub fn phrases(&self) -> &PhraseList {
        &self.phrases
    }

    pub fn text(&self) -> &ComposedText {
        &self.text
    }

    pub fn styles(&self) -> &StyleTable {
        &self.styles
    }

    pub fn has_sound(&self) -> bool {
        self.cue.is_some()
    }

    pub fn last_tapped(&self) -> Option<PhraseId> {
        self.last_tapped
    }

    /// Text of the phrase with this id
    pub fn phrase(&self, id: PhraseId) -> Option<&str> {
        self.phrases.get(id.0)
    }

    /// Tap target at a char index, if that range is currently interactive
    pub fn link_at(&self, char_index: usize) -> Option<Tap> {
        self.styles.at(char_index).and_then(tap_for)
    }

    /// Tap target for a phrase id, if that range is currently interactive
    pub fn link_for(&self, id: PhraseId) -> Option<Tap> {
        self.styles.get(id).and_then(tap_for)
    }

    /// Handle a tap on `link` covering `range`.
    ///
    /// Returns `false` and changes nothing when the link is not a phrase
    /// index or the range does not belong to that phrase.
    pub fn handle_tap(&mut self, link: &str, range: Range<usize>) -> bool {
        let Some(id) = PhraseId::parse_link(link, self.phrases.len()) else {
            tracing::debug!(link, "tap rejected: not a phrase link");
            return false;
        };
        if self.text.range(id) != Some(range.clone()) {
            tracing::debug!(link, ?range, "tap rejected: range mismatch");
            return false;
        }

        let phrase = self.phrases.get(id.0).unwrap_or_default();
        tracing::info!(id = id.0, "Tapped on : {}", phrase);

        self.cue_pending = true;
        self.styles = self.pristine.with_tapped(id);
        self.last_tapped = Some(id);
        true
    }

    /// Whether a play is waiting for the next turn
    pub fn cue_pending(&self) -> bool {
        self.cue_pending
    }

    /// Run work deferred from tap handling. Called once per loop turn,
    /// after the frame is drawn.
    pub fn run_deferred(&mut self) {
        if !std::mem::take(&mut self.cue_pending) {
            return;
        }
        if let Some(cue) = self.cue.as_mut() {
            cue.play();
        }
    }
}

fn tap_for(record: &StyledRange) -> Option<Tap> {
    record.link.as_ref().map(|link| Tap {
        link: link.clone(),
        range: record.range.clone(),
    })
}

impl std::fmt::Debug for PhraseView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseView")
            .field("text", &self.text.as_str())
            .field("styles", &self.styles)
            .field("has_sound", &self.has_sound())
            .field("cue_pending", &self.cue_pending)
            .finish()
    }
}
