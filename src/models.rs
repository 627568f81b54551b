//! Data structures for TapText
//!
//! - **Phrases**: the ordered phrase list and its composed text
//! - **Styles**: per-range style records and the style table

use std::fmt;
use std::ops::Range;

// =============================================================================
// Phrases
// =============================================================================

/// Phrases shown when no configuration overrides them
pub const DEFAULT_PHRASES: &[&str] = &[
    "Roses 🌹 are red, violets  are blue. ",
    "A fool and his money are soon parted, ",
    "A journey of a thousand miles begins with a single step.",
    "All things come to those who wait",
];

/// Ordered phrase list, fixed at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseList(Vec<String>);

impl PhraseList {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(phrases.into_iter().map(Into::into).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for PhraseList {
    fn default() -> Self {
        Self::new(DEFAULT_PHRASES.iter().copied())
    }
}

/// Identifier of a phrase: its position in the phrase list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhraseId(pub usize);

impl PhraseId {
    /// Link string embedded in the interactive tag
    pub fn link(&self) -> String {
        self.0.to_string()
    }

    /// Parse a link string back into an identifier, bounded by `count`
    pub fn parse_link(link: &str, count: usize) -> Option<Self> {
        link.trim()
            .parse::<usize>()
            .ok()
            .filter(|&i| i < count)
            .map(PhraseId)
    }
}

impl fmt::Display for PhraseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Composed Text
// =============================================================================

/// All phrases concatenated in order, with the char range of each phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedText {
    text: String,
    /// Char index of each char's first byte, plus a trailing `text.len()`
    char_bytes: Vec<usize>,
    ranges: Vec<Range<usize>>,
}

impl ComposedText {
    /// Concatenate the phrases and locate each one.
    ///
    /// A phrase is found at its first occurrence at or after the end of the
    /// previous phrase, so repeated phrases never alias an earlier range.
    pub fn compose(phrases: &PhraseList) -> Self {
        let text: String = phrases.iter().collect();

        let mut char_bytes: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_bytes.push(text.len());

        let mut ranges = Vec::with_capacity(phrases.len());
        let mut from_byte = 0;
        for phrase in phrases.iter() {
            let start_byte = text[from_byte..]
                .find(phrase)
                .map(|offset| from_byte + offset)
                .unwrap_or(from_byte);
            let end_byte = start_byte + phrase.len();

            let start = byte_to_char(&char_bytes, start_byte);
            let end = byte_to_char(&char_bytes, end_byte);
            ranges.push(start..end);
            from_byte = end_byte;
        }

        Self {
            text,
            char_bytes,
            ranges,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in chars
    pub fn char_len(&self) -> usize {
        self.char_bytes.len() - 1
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    pub fn range(&self, id: PhraseId) -> Option<Range<usize>> {
        self.ranges.get(id.0).cloned()
    }

    /// Slice of the text covered by a char range
    pub fn slice(&self, range: Range<usize>) -> &str {
        let end = range.end.min(self.char_len());
        let start = range.start.min(end);
        &self.text[self.char_bytes[start]..self.char_bytes[end]]
    }

    /// Identifier of the phrase whose range contains `char_index`
    pub fn phrase_at(&self, char_index: usize) -> Option<PhraseId> {
        self.ranges
            .iter()
            .position(|r| r.contains(&char_index))
            .map(PhraseId)
    }
}

fn byte_to_char(char_bytes: &[usize], byte: usize) -> usize {
    char_bytes.partition_point(|&b| b < byte)
}

// =============================================================================
// Styles
// =============================================================================

/// Named set of visual attributes applied to a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StyleVariant {
    /// Regular weight, black, no underline
    #[default]
    Untapped,
    /// Red, underlined in light gray
    Tapped,
}

/// Style record for one phrase range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRange {
    pub id: PhraseId,
    pub range: Range<usize>,
    pub variant: StyleVariant,
    /// Link string when the range is tappable, `None` when inert
    pub link: Option<String>,
}

impl StyledRange {
    /// Pristine record: untapped and interactive
    pub fn untapped(id: PhraseId, range: Range<usize>) -> Self {
        Self {
            link: Some(id.link()),
            id,
            range,
            variant: StyleVariant::Untapped,
        }
    }

    pub fn is_interactive(&self) -> bool {
        self.link.is_some()
    }

    pub fn is_tapped(&self) -> bool {
        self.variant == StyleVariant::Tapped
    }
}

/// Style records for every phrase, in phrase order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable(Vec<StyledRange>);

impl StyleTable {
    /// Original tagging: every range untapped and interactive
    pub fn pristine(text: &ComposedText) -> Self {
        Self(
            text.ranges()
                .iter()
                .enumerate()
                .map(|(i, r)| StyledRange::untapped(PhraseId(i), r.clone()))
                .collect(),
        )
    }

    /// Copy of this table with `id` made inert and styled as tapped
    pub fn with_tapped(&self, id: PhraseId) -> Self {
        let mut records = self.0.clone();
        if let Some(record) = records.get_mut(id.0) {
            record.link = None;
            record.variant = StyleVariant::Tapped;
        }
        Self(records)
    }

    pub fn records(&self) -> &[StyledRange] {
        &self.0
    }

    pub fn get(&self, id: PhraseId) -> Option<&StyledRange> {
        self.0.get(id.0)
    }

    /// Ids of the ranges currently styled as tapped
    pub fn tapped(&self) -> Vec<PhraseId> {
        self.0.iter().filter(|r| r.is_tapped()).map(|r| r.id).collect()
    }

    /// Record whose range contains `char_index`
    pub fn at(&self, char_index: usize) -> Option<&StyledRange> {
        self.0.iter().find(|r| r.range.contains(&char_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_two_phrases() {
        let text = ComposedText::compose(&PhraseList::new(["Hi. ", "Bye."]));
        assert_eq!(text.as_str(), "Hi. Bye.");
        assert_eq!(text.ranges(), &[0..4, 4..8]);
        assert_eq!(text.char_len(), 8);
    }

    #[test]
    fn test_compose_ranges_are_chars_not_bytes() {
        let text = ComposedText::compose(&PhraseList::default());
        let first = text.range(PhraseId(0)).unwrap();
        assert_eq!(first.len(), DEFAULT_PHRASES[0].chars().count());
        assert_eq!(text.slice(first), DEFAULT_PHRASES[0]);
    }

    #[test]
    fn test_compose_repeated_phrases_do_not_alias() {
        let text = ComposedText::compose(&PhraseList::new(["ab", "ab", "ab"]));
        assert_eq!(text.ranges(), &[0..2, 2..4, 4..6]);
    }

    #[test]
    fn test_compose_empty_phrase() {
        let text = ComposedText::compose(&PhraseList::new(["a", "", "b"]));
        assert_eq!(text.ranges(), &[0..1, 1..1, 1..2]);
        assert_eq!(text.phrase_at(1), Some(PhraseId(2)));
    }

    #[test]
    fn test_ranges_cover_text_in_order() {
        let text = ComposedText::compose(&PhraseList::default());
        let mut next = 0;
        for range in text.ranges() {
            assert_eq!(range.start, next);
            next = range.end;
        }
        assert_eq!(next, text.char_len());
    }

    #[test]
    fn test_parse_link() {
        assert_eq!(PhraseId::parse_link("1", 2), Some(PhraseId(1)));
        assert_eq!(PhraseId::parse_link("2", 2), None);
        assert_eq!(PhraseId::parse_link("x", 2), None);
        assert_eq!(PhraseId::parse_link("-1", 2), None);
        assert_eq!(PhraseId::parse_link("", 2), None);
    }

    #[test]
    fn test_pristine_table() {
        let text = ComposedText::compose(&PhraseList::new(["Hi. ", "Bye."]));
        let table = StyleTable::pristine(&text);
        assert!(table.records().iter().all(|r| r.is_interactive()));
        assert!(table.tapped().is_empty());
        assert_eq!(table.get(PhraseId(1)).unwrap().link.as_deref(), Some("1"));
    }

    #[test]
    fn test_with_tapped_leaves_original_untouched() {
        let text = ComposedText::compose(&PhraseList::new(["Hi. ", "Bye."]));
        let pristine = StyleTable::pristine(&text);
        let tapped = pristine.with_tapped(PhraseId(1));

        assert_eq!(tapped.tapped(), vec![PhraseId(1)]);
        assert!(!tapped.get(PhraseId(1)).unwrap().is_interactive());
        assert!(pristine.tapped().is_empty());
    }
}
