// src/layout/grid.rs

use crate::model::positions::{ACTINIDE_ROW, DISPLAY_ROWS, GROUPS, LANTHANIDE_ROW};
use crate::model::{Category, ElementRecord, Position};

/// One cell of the periodic-table display.
#[derive(Debug, Clone, PartialEq)]
pub enum Tile<'a> {
    Empty,
    /// Marks where the f-block rows would slot into the main body.
    Placeholder { label: &'static str, category: Category },
    Element(&'a ElementRecord),
}

impl<'a> Tile<'a> {
    pub fn element(&self) -> Option<&'a ElementRecord> {
        match self {
            Tile::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the tile belongs to `filter` (no filter matches everything).
    pub fn matches(&self, filter: Option<Category>) -> bool {
        match (self, filter) {
            (_, None) => true,
            (Tile::Element(e), Some(c)) => e.category == c,
            (Tile::Placeholder { category, .. }, Some(c)) => *category == c,
            (Tile::Empty, Some(_)) => false,
        }
    }
}

const PLACEHOLDERS: [(Position, &str, Category); 2] = [
    (Position::new(3, 6), "57-71", Category::Lanthanide),
    (Position::new(3, 7), "89-103", Category::Actinide),
];

/// The full 18 × 10 grid, row-major.
#[derive(Debug, Clone)]
pub struct PeriodicGrid<'a> {
    cells: Vec<Tile<'a>>,
}

impl<'a> PeriodicGrid<'a> {
    pub fn build(records: &'a [ElementRecord]) -> Self {
        let mut cells = vec![Tile::Empty; GROUPS as usize * DISPLAY_ROWS as usize];

        for (pos, label, category) in PLACEHOLDERS {
            cells[cell_index(pos)] = Tile::Placeholder { label, category };
        }

        for r in records {
            let pos = r.position();
            if !pos.is_valid() {
                log::warn!("{} has no place in the grid ({:?})", r.symbol, pos);
                continue;
            }
            let slot = &mut cells[cell_index(pos)];
            if let Tile::Element(existing) = slot {
                log::warn!("{} and {} share cell {:?}", existing.symbol, r.symbol, pos);
                continue;
            }
            *slot = Tile::Element(r);
        }

        Self { cells }
    }

    /// Tile at (group, row), both 1-based. Out-of-range cells are empty.
    pub fn tile(&self, group: u8, row: u8) -> &Tile<'a> {
        let pos = Position::new(group, row);
        if !pos.is_valid() {
            return &Tile::Empty;
        }
        &self.cells[cell_index(pos)]
    }

    /// Rows top to bottom, each with its 18 tiles.
    pub fn rows(&self) -> impl Iterator<Item = (u8, &[Tile<'a>])> {
        self.cells
            .chunks(GROUPS as usize)
            .enumerate()
            .map(|(i, row)| (i as u8 + 1, row))
    }

    pub fn element_count(&self) -> usize {
        self.cells.iter().filter(|t| t.element().is_some()).count()
    }
}

/// Header text for a display row: period number, blank spacer, L or A.
pub fn row_label(row: u8) -> String {
    match row {
        LANTHANIDE_ROW => "L".to_string(),
        ACTINIDE_ROW => "A".to_string(),
        r if r <= 7 => r.to_string(),
        _ => String::new(),
    }
}

fn cell_index(pos: Position) -> usize {
    (pos.period as usize - 1) * GROUPS as usize + (pos.group as usize - 1)
}
