//! Phrase text component
//!
//! Turns the current style table into pre-wrapped ratatui lines, one span
//! per phrase fragment on each row.

use ratatui::text::{Line, Span, Text};

use crate::layout::WrappedText;
use crate::models::PhraseId;
use crate::view::PhraseView;

use super::theme::Theme;

/// Styled lines for the whole composed text
pub fn phrase_text<'a>(
    view: &'a PhraseView,
    wrapped: &WrappedText,
    focus: Option<PhraseId>,
) -> Text<'a> {
    let text = view.text();
    let records = view.styles().records();

    let lines: Vec<Line<'a>> = wrapped
        .rows()
        .iter()
        .map(|row| {
            let spans: Vec<Span<'a>> = records
                .iter()
                .filter_map(|record| {
                    let start = record.range.start.max(row.start);
                    let end = record.range.end.min(row.end);
                    if start >= end {
                        return None;
                    }

                    let mut style = Theme::variant(record.variant);
                    if focus == Some(record.id) {
                        style = style.patch(Theme::focused());
                    }
                    Some(Span::styled(text.slice(start..end), style))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    Text::from(lines).style(Theme::text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::wrap;
    use crate::models::PhraseList;

    #[test]
    fn test_one_span_per_phrase_on_a_row() {
        let view = PhraseView::new(PhraseList::new(["Hi. ", "Bye."]), None);
        let wrapped = wrap(view.text().as_str(), 40);
        let text = phrase_text(&view, &wrapped, None);

        assert_eq!(text.lines.len(), 1);
        let spans = &text.lines[0].spans;
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].content, "Hi. ");
        assert_eq!(spans[1].content, "Bye.");
        assert_eq!(spans[0].style, Theme::untapped());
    }

    #[test]
    fn test_phrase_split_across_rows() {
        let view = PhraseView::new(PhraseList::new(["one two ", "three"]), None);
        let wrapped = wrap(view.text().as_str(), 5);
        let text = phrase_text(&view, &wrapped, None);

        let contents: Vec<Vec<String>> = text
            .lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.to_string()).collect())
            .collect();
        assert_eq!(
            contents,
            vec![vec!["one ".to_string()], vec!["two ".to_string()], vec!["three".to_string()]]
        );
    }

    #[test]
    fn test_tapped_and_focused_styles() {
        let mut view = PhraseView::new(PhraseList::new(["Hi. ", "Bye."]), None);
        assert!(view.handle_tap("1", 4..8));
        let wrapped = wrap(view.text().as_str(), 40);
        let text = phrase_text(&view, &wrapped, Some(PhraseId(0)));

        let spans = &text.lines[0].spans;
        assert_eq!(spans[0].style, Theme::untapped().patch(Theme::focused()));
        assert_eq!(spans[1].style, Theme::tapped());
    }
}
