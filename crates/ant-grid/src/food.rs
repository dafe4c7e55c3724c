//! Depletable food piles.

use ant_core::Cell;

/// One pile of food.  `amount` is always positive while the pile is stored.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoodPile {
    pub position: Cell,
    pub amount:   u32,
}

/// Ordered collection of food piles.
///
/// Store order matters: both merging and pickup take the *first* pile in
/// range, not the nearest one.
#[derive(Clone, Debug, Default)]
pub struct FoodStore {
    piles:        Vec<FoodPile>,
    pile_radius:  f32,
    merge_radius: f32,
}

impl FoodStore {
    /// An empty store.
    ///
    /// `pile_radius` is the pickup reach of a pile; new food within
    /// `merge_radius + 1` cells of an existing pile is added to it.
    pub fn new(pile_radius: f32, merge_radius: f32) -> Self {
        Self { piles: Vec::new(), pile_radius, merge_radius }
    }

    /// Add `amount` units at `cell`, merging into the first pile close
    /// enough or starting a new one.  Zero is a no-op.
    pub fn add_food(&mut self, cell: Cell, amount: u32) {
        if amount == 0 {
            return;
        }
        let reach = self.merge_radius + 1.0;
        match self.piles.iter_mut().find(|p| p.position.within(cell, reach)) {
            Some(pile) => pile.amount = pile.amount.saturating_add(amount),
            None => self.piles.push(FoodPile { position: cell, amount }),
        }
    }

    /// Take one unit from the first non-empty pile within reach of `cell`.
    ///
    /// The pile is removed once empty.  Returns `false` when nothing is in
    /// reach.
    pub fn try_pickup(&mut self, cell: Cell) -> bool {
        let radius = self.pile_radius;
        let Some(i) = self
            .piles
            .iter()
            .position(|p| p.amount > 0 && p.position.within(cell, radius))
        else {
            return false;
        };

        self.piles[i].amount -= 1;
        if self.piles[i].amount == 0 {
            self.piles.remove(i);
        }
        true
    }

    #[inline]
    pub fn piles(&self) -> &[FoodPile] {
        &self.piles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Units of food left across all piles.
    pub fn total_amount(&self) -> u64 {
        self.piles.iter().map(|p| p.amount as u64).sum()
    }

    pub fn clear(&mut self) {
        self.piles.clear();
    }
}
