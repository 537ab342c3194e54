//! On-disk representation of a board.
//!
//! A grid is stored as JSON with its dimensions and one string of `0`/`1`
//! characters per row, so saved boards stay readable and hand-editable:
//!
//! ```json
//! {"height":2,"width":3,"rows":["010","001"]}
//! ```

use anyhow::{Context, Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::domain::{Cell, Grid};

#[derive(Serialize, Deserialize)]
struct GridFile {
    height: usize,
    width: usize,
    rows: Vec<String>,
}

impl From<&Grid> for GridFile {
    fn from(grid: &Grid) -> Self {
        let (height, width) = grid.dimensions();
        let rows = grid
            .cells()
            .chunks(width.max(1))
            .map(|row| row.iter().map(|c| char::from(b'0' + c.as_bit())).collect())
            .collect();
        Self { height, width, rows }
    }
}

impl TryFrom<GridFile> for Grid {
    type Error = anyhow::Error;

    fn try_from(file: GridFile) -> Result<Self> {
        let GridFile { height, width, rows } = file;
        ensure!(height > 0 && width > 0, "grid dimensions must be non-zero, got {height}x{width}");
        ensure!(
            rows.len() == height,
            "expected {height} rows, found {}",
            rows.len()
        );

        let mut cells = Vec::with_capacity(height * width);
        for (r, row) in rows.iter().enumerate() {
            ensure!(
                row.len() == width,
                "row {r} has {} cells, expected {width}",
                row.len()
            );
            for (c, ch) in row.bytes().enumerate() {
                let Some(cell) = ch.checked_sub(b'0').and_then(Cell::from_bit) else {
                    bail!("invalid cell {:?} at row {r}, column {c}", ch as char);
                };
                cells.push(cell);
            }
        }

        Grid::from_cells(height, width, cells).context("cell count does not match dimensions")
    }
}

/// Encode the full board
pub fn serialize(grid: &Grid) -> Result<Vec<u8>> {
    serde_json::to_vec(&GridFile::from(grid)).context("failed to encode grid")
}

/// Decode a board written by `serialize`. Truncated or malformed input is an error.
pub fn deserialize(bytes: &[u8]) -> Result<Grid> {
    let file: GridFile = serde_json::from_slice(bytes).context("malformed grid data")?;
    Grid::try_from(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_round_trip_extremes_and_random() {
        let dead = Grid::default();
        let mut alive = Grid::default();
        alive.randomize_with(&mut StdRng::seed_from_u64(0), 1.0);
        let mut mixed = Grid::new(7, 13);
        mixed.randomize_with(&mut StdRng::seed_from_u64(5), 0.4);

        for grid in [dead, alive, mixed] {
            let bytes = serialize(&grid).unwrap();
            assert_eq!(deserialize(&bytes).unwrap(), grid);
        }
    }

    #[test]
    fn test_layout_is_row_major_text() {
        let mut grid = Grid::new(2, 3);
        grid.toggle_cell(0, 1);
        grid.toggle_cell(1, 2);
        let text = String::from_utf8(serialize(&grid).unwrap()).unwrap();
        assert_eq!(text, r#"{"height":2,"width":3,"rows":["010","001"]}"#);
    }

    #[test]
    fn test_truncated_data_is_error() {
        let bytes = serialize(&Grid::new(3, 3)).unwrap();
        assert!(deserialize(&bytes[..bytes.len() / 2]).is_err());
        assert!(deserialize(b"").is_err());
    }

    #[test]
    fn test_inconsistent_data_is_error() {
        let cases: [&[u8]; 5] = [
            br#"{"height":2,"width":2,"rows":["01"]}"#,
            br#"{"height":1,"width":2,"rows":["011"]}"#,
            br#"{"height":1,"width":2,"rows":["02"]}"#,
            br#"{"height":0,"width":0,"rows":[]}"#,
            br#"{"width":2,"rows":["01"]}"#,
        ];
        for bytes in cases {
            assert!(deserialize(bytes).is_err(), "{}", String::from_utf8_lossy(bytes));
        }
    }

    #[test]
    fn test_rejects_bytes_around_the_digit_range() {
        // '/' sits just below '0' and '2' just above '1'
        for row in ["0/", "02", "1:"] {
            let json = format!(r#"{{"height":1,"width":2,"rows":["{row}"]}}"#);
            assert!(deserialize(json.as_bytes()).is_err(), "{row:?}");
        }
    }

    #[test]
    fn test_error_message_names_the_problem() {
        let err = deserialize(br#"{"height":1,"width":2,"rows":["0x"]}"#).unwrap_err();
        assert!(err.to_string().contains("row 0, column 1"));
    }
}
