//! Outcome matrix shown when the player asks for help.

use super::{GameRules, MoveSet};
use std::fmt;

/// (N+1)×(N+1) grid of outcomes from the row move's point of view.
///
/// Row 0 and column 0 hold the move names, the top-left cell is blank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HelpTable {
    cells: Vec<Vec<String>>,
}

impl HelpTable {
    pub fn new(moves: &MoveSet) -> Self {
        let rules = GameRules::new(moves);
        let n = moves.len();

        let mut header = Vec::with_capacity(n + 1);
        header.push(String::new());
        header.extend(moves.iter().map(str::to_string));

        let mut cells = Vec::with_capacity(n + 1);
        cells.push(header);
        for (row, row_move) in moves.iter().enumerate() {
            let mut line = Vec::with_capacity(n + 1);
            line.push(row_move.to_string());
            line.extend((0..n).map(|col| rules.resolve_indices(row, col).as_str().to_string()));
            cells.push(line);
        }

        Self { cells }
    }

    /// All rows, header first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    /// Cell at the given grid position
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }
}

impl fmt::Display for HelpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "{}", row.join("\t"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_table_text() {
        let moves = MoveSet::new(["rock", "paper", "scissors"]).unwrap();
        let table = HelpTable::new(&moves);

        assert_eq!(
            table.to_string(),
            "\trock\tpaper\tscissors\n\
             rock\tDraw\tLose\tWin\n\
             paper\tWin\tDraw\tLose\n\
             scissors\tLose\tWin\tDraw\n"
        );
    }

    #[test]
    fn test_table_dimensions() {
        let moves = MoveSet::new(["a", "b", "c", "d", "e", "f", "g"]).unwrap();
        let table = HelpTable::new(&moves);

        assert_eq!(table.rows().len(), 8);
        assert!(table.rows().iter().all(|row| row.len() == 8));
        assert_eq!(table.cell(0, 0), Some(""));
        assert_eq!(table.cell(0, 3), Some("c"));
        assert_eq!(table.cell(3, 0), Some("c"));
        assert_eq!(table.cell(8, 0), None);
    }

    #[test]
    fn test_table_matches_rules() {
        let moves = MoveSet::new(["rock", "paper", "scissors", "lizard", "spock"]).unwrap();
        let rules = GameRules::new(&moves);
        let table = HelpTable::new(&moves);

        for (i, row_move) in moves.iter().enumerate() {
            for (j, col_move) in moves.iter().enumerate() {
                let expected = rules.resolve(row_move, col_move).unwrap();
                assert_eq!(table.cell(i + 1, j + 1), Some(expected.as_str()));
            }
        }
    }
}
