use std::collections::{HashMap, HashSet};

use crate::core::bounds::GridBounds;
use crate::core::models::{BoxId, GridPos, Occupant};

/// Hash-map spatial index answering "what occupies this cell". All positions
/// are integer-aligned, so plain containment lookups replace physics point
/// queries. Box entries always reflect the current logical position; the
/// session updates them in the same call that mutates a box, before any
/// animation catches up.
pub struct OccupancyGrid {
    bounds: GridBounds,
    walls: HashSet<GridPos>,
    box_cells: HashMap<GridPos, BoxId>,
}

impl OccupancyGrid {
    pub fn new(bounds: GridBounds, walls: HashSet<GridPos>, boxes: &[GridPos]) -> OccupancyGrid {
        let box_cells = boxes
            .iter()
            .enumerate()
            .map(|(id, &pos)| (pos, id))
            .collect();
        OccupancyGrid {
            bounds,
            walls,
            box_cells,
        }
    }

    /// Cells outside the bounds answer Wall, so they block like one.
    pub fn occupant_at(&self, pos: &GridPos, excluding: Option<BoxId>) -> Occupant {
        if !self.bounds.contains(pos) || self.walls.contains(pos) {
            return Occupant::Wall;
        }
        match self.box_cells.get(pos) {
            Some(&id) if excluding != Some(id) => Occupant::Box(id),
            _ => Occupant::Empty,
        }
    }

    pub fn move_box(&mut self, id: BoxId, from: &GridPos, to: &GridPos) {
        let removed = self.box_cells.remove(from);
        assert_eq!(removed, Some(id), "box index out of sync with position");
        self.box_cells.insert(*to, id);
    }
}
