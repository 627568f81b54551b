//! Word wrapping and hit testing for the composed text
//!
//! The text is wrapped here rather than by `Paragraph` so that a clicked
//! terminal cell can be mapped back to a char index.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

/// Composed text broken into visual rows of char ranges
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WrappedText {
    width: u16,
    rows: Vec<Range<usize>>,
    cells: Vec<usize>,
}

/// Wrap `text` at spaces to fit `width` cells.
///
/// Words wider than a row are hard-broken. A space that overflows a row
/// stays at the end of that row. `\n` always ends a row and belongs to none.
pub fn wrap(text: &str, width: u16) -> WrappedText {
    let max = width.max(1) as usize;
    let cells: Vec<usize> = text
        .chars()
        .map(|c| if c == '\n' { 0 } else { c.width().unwrap_or(0) })
        .collect();

    let mut rows = Vec::new();
    let mut start = 0;
    let mut used = 0;
    // Char index just past the last space in this row, and width since it
    let mut brk: Option<usize> = None;
    let mut since_brk = 0;

    for (i, c) in text.chars().enumerate() {
        let w = cells[i];

        if c == '\n' {
            rows.push(start..i);
            start = i + 1;
            used = 0;
            brk = None;
            since_brk = 0;
            continue;
        }

        if used + w > max && used > 0 {
            if c == ' ' {
                rows.push(start..i + 1);
                start = i + 1;
                used = 0;
                brk = None;
                since_brk = 0;
                continue;
            }
            match brk {
                Some(b) if b > start => {
                    rows.push(start..b);
                    start = b;
                    used = since_brk;
                }
                _ => {
                    rows.push(start..i);
                    start = i;
                    used = 0;
                    since_brk = 0;
                }
            }
            brk = None;
        }

        used += w;
        if c == ' ' {
            brk = Some(i + 1);
            since_brk = 0;
        } else {
            since_brk += w;
        }
    }

    if start < cells.len() || rows.is_empty() {
        rows.push(start..cells.len());
    }

    WrappedText { width, rows, cells }
}

impl WrappedText {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn rows(&self) -> &[Range<usize>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Char index under cell (`column`, `row`), or `None` past the row's end
    pub fn char_at(&self, column: u16, row: usize) -> Option<usize> {
        let range = self.rows.get(row)?;
        let column = column as usize;
        let mut x = 0;
        for i in range.clone() {
            let w = self.cells[i];
            if column < x + w {
                return Some(i);
            }
            x += w;
        }
        None
    }

    /// Row holding `char_index`
    pub fn row_of(&self, char_index: usize) -> Option<usize> {
        self.rows.iter().position(|r| r.contains(&char_index))
    }
}
