//! Human-readable table rendering.

use super::engine::Table;
use crate::cards::CardRun;

/// Width of one card cell in the rendered grid.
const CELL_WIDTH: usize = 6;

/// Smallest `n` with `n * n >= len`.
fn row_length(len: usize) -> usize {
    let mut n = 0;
    while n * n < len {
        n += 1;
    }
    n
}

impl Table {
    /// Render the table as a roughly square grid under a header line.
    ///
    /// ```text
    /// [TABLE] -- LAST: [5♠]
    ///   [2♠]  [3♠]
    ///   [4♠]  [5♠]
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let header = if self.is_empty() { "[EMPTY TABLE]" } else { "[TABLE]" };
        let last = self
            .last()
            .map_or_else(|| "None".to_string(), |card| card.to_string());

        let mut out = format!("{header} -- LAST: {last}\n");
        let per_row = row_length(self.len());

        for (i, card) in self.cards().iter().enumerate() {
            // Card's Display ignores width, so pad the rendered string.
            out.push_str(&format!("{:>width$}", card.to_string(), width = CELL_WIDTH));
            if i % per_row == per_row - 1 {
                out.push('\n');
            }
        }
        if self.len() % per_row.max(1) != 0 {
            out.push('\n');
        }
        out
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cards: Vec<_> = self.cards().iter().copied().collect();
        write!(f, "{}", CardRun(&cards))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn table_with(ids: &[i32]) -> Table {
        let mut table = Table::new();
        for &i in ids {
            table.place(Card::new(i).unwrap()).unwrap();
        }
        table
    }

    #[test]
    fn test_row_length() {
        assert_eq!(row_length(0), 0);
        assert_eq!(row_length(1), 1);
        assert_eq!(row_length(4), 2);
        assert_eq!(row_length(5), 3);
        assert_eq!(row_length(52), 8);
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(Table::new().render(), "[EMPTY TABLE] -- LAST: None\n");
    }

    #[test]
    fn test_render_square() {
        let table = table_with(&[1, 2, 3, 4]);
        assert_eq!(
            table.render(),
            "[TABLE] -- LAST: [5♠]\n  [2♠]  [3♠]\n  [4♠]  [5♠]\n"
        );
    }

    #[test]
    fn test_render_partial_last_row() {
        let table = table_with(&[0, 9, 48]);
        assert_eq!(
            table.render(),
            "[TABLE] -- LAST: [10♦]\n  [A♠] [10♠]\n [10♦]\n"
        );
    }

    #[test]
    fn test_display_concatenates() {
        assert_eq!(table_with(&[1, 2]).to_string(), "[2♠][3♠]");
        assert_eq!(Table::new().to_string(), "");
    }
}
