use crate::types::{Dims, PlacedItem, Position};
use std::collections::HashSet;

/// A single loading container. Capacity is fixed at construction; the only
/// mutation is the append-only [`commit`](Container::commit).
#[derive(Debug, Clone)]
pub struct Container {
    pub dims: Dims,
    pub max_weight: f64,
    pub items: Vec<PlacedItem>,
    pub current_weight: f64,
}

impl Container {
    pub fn new(dims: Dims, max_weight: f64) -> Self {
        Self {
            dims,
            max_weight,
            items: Vec::new(),
            current_weight: 0.0,
        }
    }

    pub fn used_volume(&self) -> u64 {
        self.items.iter().map(|p| p.dims.volume()).sum()
    }

    /// Fraction of container volume occupied by placed items, in percent.
    pub fn utilization_percent(&self) -> f64 {
        let total = self.dims.volume();
        if total == 0 {
            return 0.0;
        }
        self.used_volume() as f64 / total as f64 * 100.0
    }

    // Corner sums are widened to u64: coordinates and dimensions each fit
    // in u32, but their sum may not.
    fn overlaps(dims: Dims, pos: Position, other: &PlacedItem) -> bool {
        let p = other.position;
        let d = other.dims;
        !(pos.x as u64 + dims.length as u64 <= p.x as u64
            || pos.x as u64 >= p.x as u64 + d.length as u64
            || pos.y as u64 + dims.width as u64 <= p.y as u64
            || pos.y as u64 >= p.y as u64 + d.width as u64
            || pos.z as u64 + dims.height as u64 <= p.z as u64
            || pos.z as u64 >= p.z as u64 + d.height as u64)
    }

    /// Checks whether a box with the given active dimensions and weight may
    /// be committed at `pos`. Bounds first, then weight, then a scan of all
    /// placed items for AABB overlap.
    pub fn is_valid(&self, dims: Dims, weight: f64, pos: Position) -> bool {
        if pos.x as u64 + dims.length as u64 > self.dims.length as u64 {
            return false;
        }
        if pos.y as u64 + dims.width as u64 > self.dims.width as u64 {
            return false;
        }
        if pos.z as u64 + dims.height as u64 > self.dims.height as u64 {
            return false;
        }
        if self.current_weight + weight > self.max_weight {
            return false;
        }
        !self
            .items
            .iter()
            .any(|other| Self::overlaps(dims, pos, other))
    }

    /// Records a placement. Caller must have checked [`is_valid`] first;
    /// items are kept in placement order.
    pub fn commit(&mut self, item: PlacedItem) {
        self.current_weight += item.weight;
        self.items.push(item);
    }

    /// Extreme-corner candidate positions derived from current contents:
    /// the origin plus, for every placed item, the three corners past its
    /// length, width, and height. Deduplicated, then ordered by
    /// (x, z, y) ascending so the floor plane and low length-positions fill
    /// before the stack climbs.
    pub fn candidate_positions(&self) -> Vec<Position> {
        let mut seen: HashSet<(u32, u32, u32)> = HashSet::new();
        seen.insert((0, 0, 0));
        for item in &self.items {
            let Position { x, y, z } = item.position;
            let d = item.dims;
            seen.insert((x + d.length, y, z));
            seen.insert((x, y + d.width, z));
            seen.insert((x, y, z + d.height));
        }
        let mut positions: Vec<Position> = seen
            .into_iter()
            .map(|(x, y, z)| Position::new(x, y, z))
            .collect();
        positions.sort_by_key(|p| (p.x, p.z, p.y));
        positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Orientation;

    fn placed(name: &str, dims: Dims, pos: Position, weight: f64) -> PlacedItem {
        PlacedItem {
            name: name.to_string(),
            dims,
            orientation: Orientation::Lwh,
            position: pos,
            weight,
            color: "#FF6B6B".to_string(),
            item_type: "box".to_string(),
        }
    }

    #[test]
    fn test_empty_container_accepts_origin() {
        let c = Container::new(Dims::new(100, 100, 100), 1000.0);
        assert!(c.is_valid(Dims::new(50, 50, 50), 10.0, Position::new(0, 0, 0)));
    }

    #[test]
    fn test_bounds_rejected_per_axis() {
        let c = Container::new(Dims::new(100, 80, 60), 1000.0);
        let d = Dims::new(50, 50, 50);
        assert!(!c.is_valid(d, 1.0, Position::new(51, 0, 0)));
        assert!(!c.is_valid(d, 1.0, Position::new(0, 31, 0)));
        assert!(!c.is_valid(d, 1.0, Position::new(0, 0, 11)));
        // Touching a wall exactly is fine.
        assert!(c.is_valid(d, 1.0, Position::new(50, 30, 10)));
    }

    #[test]
    fn test_weight_limit_rejected() {
        let mut c = Container::new(Dims::new(100, 100, 100), 25.0);
        c.commit(placed("a_1", Dims::new(10, 10, 10), Position::new(0, 0, 0), 20.0));
        let d = Dims::new(10, 10, 10);
        assert!(!c.is_valid(d, 10.0, Position::new(50, 0, 0)));
        assert!(c.is_valid(d, 5.0, Position::new(50, 0, 0)));
    }

    #[test]
    fn test_overlap_rejected_touching_allowed() {
        let mut c = Container::new(Dims::new(100, 100, 100), 1000.0);
        c.commit(placed("a_1", Dims::new(40, 40, 40), Position::new(0, 0, 0), 1.0));
        let d = Dims::new(40, 40, 40);
        // Interpenetrating on all three axes.
        assert!(!c.is_valid(d, 1.0, Position::new(20, 20, 20)));
        assert!(!c.is_valid(d, 1.0, Position::new(39, 0, 0)));
        // Face contact is not overlap.
        assert!(c.is_valid(d, 1.0, Position::new(40, 0, 0)));
        assert!(c.is_valid(d, 1.0, Position::new(0, 40, 0)));
        assert!(c.is_valid(d, 1.0, Position::new(0, 0, 40)));
    }

    #[test]
    fn test_overlap_requires_all_three_axes() {
        let mut c = Container::new(Dims::new(100, 100, 100), 1000.0);
        c.commit(placed("a_1", Dims::new(40, 40, 40), Position::new(0, 0, 0), 1.0));
        // Overlapping x and y ranges but stacked clear on z.
        assert!(c.is_valid(Dims::new(40, 40, 40), 1.0, Position::new(10, 10, 40)));
    }

    #[test]
    fn test_near_u32_max_dimensions_do_not_overflow() {
        let mut c = Container::new(Dims::new(4_000_000_000, 10, 10), 1000.0);
        c.commit(placed(
            "a_1",
            Dims::new(3_000_000_000, 10, 10),
            Position::new(0, 0, 0),
            1.0,
        ));
        // 3e9 + 3e9 exceeds both the container and u32; the check must
        // reject it rather than wrap or panic.
        let big = Dims::new(3_000_000_000, 10, 10);
        assert!(!c.is_valid(big, 1.0, Position::new(3_000_000_000, 0, 0)));
        // The remaining 1e9 of length is genuinely free.
        let small = Dims::new(1_000_000_000, 10, 10);
        assert!(c.is_valid(small, 1.0, Position::new(3_000_000_000, 0, 0)));
        assert!(!c.is_valid(small, 1.0, Position::new(3_000_000_001, 0, 0)));
    }

    #[test]
    fn test_commit_tracks_weight_and_order() {
        let mut c = Container::new(Dims::new(100, 100, 100), 1000.0);
        c.commit(placed("a_1", Dims::new(10, 10, 10), Position::new(0, 0, 0), 10.0));
        c.commit(placed("b_1", Dims::new(10, 10, 10), Position::new(10, 0, 0), 2.5));
        assert_eq!(c.current_weight, 12.5);
        assert_eq!(c.items[0].name, "a_1");
        assert_eq!(c.items[1].name, "b_1");
    }

    #[test]
    fn test_candidates_empty_container() {
        let c = Container::new(Dims::new(100, 100, 100), 1000.0);
        assert_eq!(c.candidate_positions(), vec![Position::new(0, 0, 0)]);
    }

    #[test]
    fn test_candidates_from_one_placement() {
        let mut c = Container::new(Dims::new(100, 100, 100), 1000.0);
        c.commit(placed("a_1", Dims::new(30, 20, 10), Position::new(0, 0, 0), 1.0));
        let positions = c.candidate_positions();
        // (x, z, y) ascending: origin, then y-corner, then z-corner, then
        // x-corner.
        assert_eq!(
            positions,
            vec![
                Position::new(0, 0, 0),
                Position::new(0, 20, 0),
                Position::new(0, 0, 10),
                Position::new(30, 0, 0),
            ]
        );
    }

    #[test]
    fn test_candidates_deduplicate() {
        let mut c = Container::new(Dims::new(100, 100, 100), 1000.0);
        // a_1's length-corner and b_1's width-corner both land on (10, 5, 0).
        c.commit(placed("a_1", Dims::new(10, 5, 10), Position::new(0, 5, 0), 1.0));
        c.commit(placed("b_1", Dims::new(10, 5, 10), Position::new(10, 0, 0), 1.0));
        let positions = c.candidate_positions();
        let hits = positions
            .iter()
            .filter(|p| **p == Position::new(10, 5, 0))
            .count();
        assert_eq!(hits, 1);
        let unique: std::collections::HashSet<_> = positions.iter().collect();
        assert_eq!(unique.len(), positions.len());
        assert_eq!(positions.len(), 6);
    }
}
