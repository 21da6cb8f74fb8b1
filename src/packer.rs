use crate::container::Container;
use crate::error::{PackError, ValidationError};
use crate::types::{Dims, ItemSpec, Orientation, PlacedItem, Position, UnitItem};
use std::cmp::Ordering;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

/// Outcome of one packing run: the loaded container plus the identities of
/// every expanded unit that found no feasible placement.
#[derive(Debug, Clone)]
pub struct PackResult {
    pub container: Container,
    pub unplaced: Vec<String>,
}

impl PackResult {
    pub fn placed_count(&self) -> usize {
        self.container.items.len()
    }

    pub fn unplaced_count(&self) -> usize {
        self.unplaced.len()
    }
}

/// Deterministic first-fit loader: expand quantities, sort heaviest and
/// bulkiest first, then take the first valid (position, orientation) for
/// each unit. Placed units are never moved afterwards.
pub struct Packer {
    dims: Dims,
    max_weight: f64,
    specs: Vec<ItemSpec>,
}

impl Packer {
    pub fn new(dims: Dims, max_weight: f64, specs: Vec<ItemSpec>) -> Self {
        Self {
            dims,
            max_weight,
            specs,
        }
    }

    pub fn pack(&self) -> Result<PackResult, PackError> {
        self.pack_with_cancel(&AtomicBool::new(false))
    }

    /// Like [`pack`](Packer::pack), but checks `cancel` between units so a
    /// caller can abort long runs; candidate regeneration makes dense runs
    /// roughly quadratic in the unit count.
    pub fn pack_with_cancel(&self, cancel: &AtomicBool) -> Result<PackResult, PackError> {
        self.validate()?;

        let mut units = self.expand();
        // Stable sort keeps expansion order on full ties, so output is
        // reproducible for identical input.
        units.sort_by(|a, b| {
            b.weight
                .partial_cmp(&a.weight)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.volume().cmp(&a.volume()))
        });

        let mut container = Container::new(self.dims, self.max_weight);
        let mut unplaced = Vec::new();

        for unit in units {
            if cancel.load(AtomicOrdering::Relaxed) {
                return Err(PackError::Cancelled);
            }
            match Self::find_placement(&container, &unit) {
                Some((position, orientation)) => {
                    container.commit(PlacedItem {
                        name: unit.name,
                        dims: orientation.apply(unit.nominal),
                        orientation,
                        position,
                        weight: unit.weight,
                        color: unit.color,
                        item_type: unit.item_type,
                    });
                }
                None => unplaced.push(unit.name),
            }
        }

        Ok(PackResult {
            container,
            unplaced,
        })
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.dims.length == 0 || self.dims.width == 0 || self.dims.height == 0 {
            return Err(ValidationError::ContainerDims(self.dims));
        }
        // NaN fails both orderings, so test for the good range and reject
        // everything else; a NaN cap would disable the weight check
        // entirely.
        if self.max_weight.is_nan() || self.max_weight <= 0.0 {
            return Err(ValidationError::ContainerMaxWeight(self.max_weight));
        }
        for spec in &self.specs {
            if spec.dims.length == 0 || spec.dims.width == 0 || spec.dims.height == 0 {
                return Err(ValidationError::ItemDims {
                    name: spec.name.clone(),
                    dims: spec.dims,
                });
            }
            if spec.weight.is_nan() || spec.weight <= 0.0 {
                return Err(ValidationError::ItemWeight {
                    name: spec.name.clone(),
                    weight: spec.weight,
                });
            }
            if spec.quantity == 0 {
                return Err(ValidationError::ItemQuantity {
                    name: spec.name.clone(),
                });
            }
            if spec.orientation_preference.is_empty() {
                return Err(ValidationError::EmptyOrientations {
                    name: spec.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Expands each spec into `quantity` independently owned units named
    /// `{name}_{i}`, 1-based.
    fn expand(&self) -> Vec<UnitItem> {
        let mut units = Vec::new();
        for spec in &self.specs {
            for i in 1..=spec.quantity {
                units.push(UnitItem {
                    name: format!("{}_{}", spec.name, i),
                    nominal: spec.dims,
                    weight: spec.weight,
                    orientation_preference: spec.orientation_preference.clone(),
                    fragile: spec.fragile,
                    can_stack: spec.can_stack,
                    can_stack_same_type: spec.can_stack_same_type,
                    color: spec.color.clone(),
                    item_type: spec.item_type.clone(),
                });
            }
        }
        units
    }

    /// First-fit search: candidate positions in their sorted order, and for
    /// each one the unit's orientation preferences in their given order.
    fn find_placement(container: &Container, unit: &UnitItem) -> Option<(Position, Orientation)> {
        let candidates = container.candidate_positions();
        for position in candidates {
            for &orientation in &unit.orientation_preference {
                let dims = orientation.apply(unit.nominal);
                if container.is_valid(dims, unit.weight, position) {
                    return Some((position, orientation));
                }
            }
        }
        None
    }
}
