#![cfg(feature = "std")]

use std::collections::HashMap;
use std::string::String;

use crate::ui::{CellMark, CellMarker, Notifier};
use crate::{Cell, MAX_BOARD_SIZE};

/// Terminal collaborator: prints notices and remembers highlighted cells so
/// the board can be redrawn.
#[derive(Debug, Default)]
pub struct CliUi {
    marks: HashMap<usize, CellMark>,
}

impl CliUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_at(&self, index: usize) -> Option<CellMark> {
        self.marks.get(&index).copied()
    }

    /// Print the board with `#` for selected cells and `*` for the final one.
    pub fn print_board(&self, width: usize, height: usize) {
        std::print!("   ");
        for c in 0..width {
            std::print!(" {}", column_label(c).unwrap_or('?'));
        }
        std::println!();
        for r in 0..height {
            std::print!("{:2} ", r + 1);
            for c in 0..width {
                let ch = match self.mark_at(r * width + c) {
                    Some(CellMark::Final) => '*',
                    Some(CellMark::Selected) => '#',
                    None => '.',
                };
                std::print!(" {}", ch);
            }
            std::println!();
        }
    }
}

impl Notifier for CliUi {
    fn notify(&mut self, message: &str, _duration_ms: u32) {
        std::println!("! {}", message);
    }
}

impl CellMarker for CliUi {
    fn mark_cell(&mut self, index: usize, mark: CellMark) {
        self.marks.insert(index, mark);
    }
}

/// Letter for column `c`, `None` past `Z`.
fn column_label(c: usize) -> Option<char> {
    u8::try_from(c)
        .ok()
        .filter(|c| usize::from(*c) < MAX_BOARD_SIZE)
        .map(|c| char::from(b'A' + c))
}

/// Format a cell as `A1` style text, or as `col row` when the column has no
/// letter. Either form is accepted by [`parse_cell`].
pub fn coord_to_string(col: usize, row: usize) -> String {
    match column_label(col) {
        Some(label) => std::format!("{}{}", label, row + 1),
        None => std::format!("{} {}", col, row),
    }
}

/// Parse `A5` (column letter, 1-based row) or `0 4` (0-based column and row)
/// into a cell on a `width` × `height` board.
pub fn parse_cell(input: &str, width: usize, height: usize) -> Option<Cell> {
    let input = input.trim();
    let (col, row) = match input.split_whitespace().collect::<Vec<_>>().as_slice() {
        [col, row] => (col.parse::<usize>().ok()?, row.parse::<usize>().ok()?),
        [single] if single.len() >= 2 => {
            let mut chars = single.chars();
            let col_ch = chars.next()?.to_ascii_uppercase();
            if !col_ch.is_ascii_uppercase() {
                return None;
            }
            let col = (col_ch as u8 - b'A') as usize;
            let row: usize = chars.as_str().parse().ok()?;
            if row == 0 {
                return None;
            }
            (col, row - 1)
        }
        _ => return None,
    };
    if col >= width || row >= height {
        return None;
    }
    Some(Cell::at(col, row, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_letter_number() {
        assert_eq!(parse_cell("A1", 10, 10), Some(Cell::at(0, 0, 10)));
        assert_eq!(parse_cell("c10", 10, 10), Some(Cell::at(2, 9, 10)));
    }

    #[test]
    fn parses_pair() {
        assert_eq!(parse_cell(" 3 4 ", 10, 10), Some(Cell::at(3, 4, 10)));
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert_eq!(parse_cell("K1", 10, 10), None);
        assert_eq!(parse_cell("A0", 10, 10), None);
        assert_eq!(parse_cell("A11", 10, 10), None);
        assert_eq!(parse_cell("10 0", 10, 10), None);
        assert_eq!(parse_cell("hello", 10, 10), None);
        assert_eq!(parse_cell("", 10, 10), None);
    }

    #[test]
    fn round_trips_at_largest_board() {
        let n = MAX_BOARD_SIZE;
        assert_eq!(coord_to_string(n - 1, n - 1), "Z26");
        for col in 0..n {
            let cell = parse_cell(&coord_to_string(col, n - 1), n, n).unwrap();
            assert_eq!((cell.col, cell.row), (col, n - 1));
        }
    }

    #[test]
    fn unlettered_columns_fall_back_to_numbers() {
        assert_eq!(coord_to_string(26, 0), "26 0");
        assert_eq!(coord_to_string(300, 4), "300 4");
        assert_eq!(parse_cell(&coord_to_string(26, 0), 30, 30), Some(Cell::at(26, 0, 30)));
        assert_eq!(column_label(usize::MAX), None);
    }

    #[test]
    fn formats_like_it_parses() {
        assert_eq!(coord_to_string(2, 9), "C10");
        let cell = parse_cell(&coord_to_string(7, 3), 10, 10).unwrap();
        assert_eq!((cell.col, cell.row), (7, 3));
    }
}
