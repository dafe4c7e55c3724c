//! Unit tests for ant-grid.

use ant_core::{Cell, Grid};

use crate::{FoodStore, Nest, ObstacleMask, ScentField};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid() -> Grid {
    Grid::new(20, 20)
}

fn nest() -> Nest {
    Nest::new(Cell::new(10, 10), 3.0)
}

// ── ScentField ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scent_field {
    use super::*;

    #[test]
    fn deposit_saturates_at_max() {
        let mut f = ScentField::new(grid(), 10.0);
        f.deposit(Cell::new(1, 1), 6.0);
        f.deposit(Cell::new(1, 1), 6.0);
        assert_eq!(f.get(Cell::new(1, 1)), 10.0);
    }

    #[test]
    fn non_positive_and_off_grid_deposits_ignored() {
        let mut f = ScentField::new(grid(), 10.0);
        f.deposit(Cell::new(1, 1), 0.0);
        f.deposit(Cell::new(1, 1), -5.0);
        f.deposit(Cell::new(1, 1), f32::NAN);
        f.deposit(Cell::new(-1, 3), 5.0);
        f.deposit(Cell::new(20, 3), 5.0);
        assert_eq!(f.total(), 0.0);
    }

    #[test]
    fn sample_average_skips_off_grid_and_reads_empty_as_zero() {
        let mut f = ScentField::new(grid(), 10.0);
        f.deposit(Cell::new(0, 0), 4.0);
        f.deposit(Cell::new(1, 0), 2.0);
        let avg = f.sample_average([Cell::new(0, 0), Cell::new(1, 0), Cell::new(-1, 0)]);
        assert!((avg - 3.0).abs() < 1e-6);
        assert_eq!(f.sample_average(std::iter::empty()), 0.0);
        assert_eq!(f.sample_average([Cell::new(-5, -5)]), 0.0);
    }

    #[test]
    fn evaporation_scales_every_cell() {
        let mut f = ScentField::new(grid(), 100.0);
        f.deposit(Cell::new(5, 5), 50.0);
        f.advance(0.1, 0.0, 0.0);
        assert!((f.get(Cell::new(5, 5)) - 45.0).abs() < 1e-4);
        assert_eq!(f.get(Cell::new(5, 6)), 0.0);
    }

    #[test]
    fn decay_is_strictly_monotone_and_reaches_zero() {
        let mut f = ScentField::new(grid(), 100.0);
        f.deposit(Cell::new(3, 4), 100.0);
        f.deposit(Cell::new(9, 9), 0.5);

        let mut prev = f.values().to_vec();
        let mut ticks = 0;
        while f.total() > 0.0 {
            f.advance(0.05, 0.0, 0.001);
            for (before, after) in prev.iter().zip(f.values()) {
                if *before > 0.0 {
                    assert!(after < before, "positive cell did not decrease");
                } else {
                    assert_eq!(*after, 0.0);
                }
            }
            prev = f.values().to_vec();
            ticks += 1;
            assert!(ticks < 10_000, "field never drained");
        }
        // Stays at zero.
        f.advance(0.05, 0.0, 0.001);
        assert_eq!(f.total(), 0.0);
    }

    #[test]
    fn diffusion_reads_a_consistent_snapshot() {
        // A single spike: with an in-place update, the cell right after the
        // spike would see an already-blended neighbour.  Double buffering
        // gives both horizontal neighbours the same value.
        let mut f = ScentField::new(grid(), 100.0);
        f.deposit(Cell::new(10, 10), 80.0);
        f.advance(0.0, 1.0, 0.0);

        let left = f.get(Cell::new(9, 10));
        let right = f.get(Cell::new(11, 10));
        assert!((left - 10.0).abs() < 1e-5);
        assert!((right - 10.0).abs() < 1e-5);
        // Full diffusion: the spike itself only sees its (empty) neighbours.
        assert_eq!(f.get(Cell::new(10, 10)), 0.0);
    }

    #[test]
    fn diffusion_clamps_at_edges() {
        // Corner cell: 3 real neighbours plus 5 clamped reads of itself or
        // its edge neighbours; a uniform field must stay uniform.
        let mut f = ScentField::new(Grid::new(3, 3), 100.0);
        for y in 0..3 {
            for x in 0..3 {
                f.deposit(Cell::new(x, y), 7.0);
            }
        }
        f.advance(0.0, 0.5, 0.0);
        for v in f.values() {
            assert!((v - 7.0).abs() < 1e-5);
        }
    }

    #[test]
    fn values_stay_in_bounds_under_stress() {
        let mut f = ScentField::new(grid(), 5.0);
        for i in 0..200 {
            let c = Cell::new(i % 20, (i * 7) % 20);
            f.deposit(c, 3.0);
            f.advance(0.01, 0.3, 0.001);
            assert!(f.values().iter().all(|&v| (0.0..=5.0).contains(&v)));
        }
    }

    #[test]
    fn clear_zeroes_field() {
        let mut f = ScentField::new(grid(), 5.0);
        f.deposit(Cell::new(2, 2), 3.0);
        f.clear();
        assert_eq!(f.max_value(), 0.0);
    }
}

// ── ObstacleMask ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod obstacle_mask {
    use super::*;

    #[test]
    fn paints_a_disc() {
        let mut m = ObstacleMask::new(grid(), nest());
        let changed = m.set_region(Cell::new(2, 2), 1.0, true);
        assert_eq!(changed, 5);
        assert!(m.is_blocked(Cell::new(2, 2)));
        assert!(m.is_blocked(Cell::new(3, 2)));
        assert!(!m.is_blocked(Cell::new(3, 3)));
    }

    #[test]
    fn nest_zone_is_never_blocked() {
        let mut m = ObstacleMask::new(grid(), nest());
        m.set_region(Cell::new(10, 10), 5.0, true);
        for cell in grid().cells_within(Cell::new(10, 10), 3.0) {
            assert!(!m.is_blocked(cell), "{cell} inside the nest zone was blocked");
        }
        // The ring outside the zone was painted.
        assert!(m.is_blocked(Cell::new(14, 10)));
    }

    #[test]
    fn erase_clears_cells() {
        let mut m = ObstacleMask::new(grid(), nest());
        m.set_region(Cell::new(2, 2), 2.0, true);
        m.set_region(Cell::new(2, 2), 2.0, false);
        assert_eq!(m.blocked_count(), 0);
    }

    #[test]
    fn off_grid_is_blocked_but_not_open() {
        let m = ObstacleMask::new(grid(), nest());
        assert!(m.is_blocked(Cell::new(-1, 0)));
        assert!(!m.is_open(Cell::new(-1, 0)));
        assert!(m.is_open(Cell::new(0, 0)));
    }

    #[test]
    fn painting_off_grid_centre_is_clipped() {
        let mut m = ObstacleMask::new(grid(), nest());
        m.set_region(Cell::new(-1, -1), 2.0, true);
        assert!(m.is_blocked(Cell::new(0, 0)));
        assert!(m.blocked_count() > 0);
    }
}

// ── FoodStore ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod food_store {
    use super::*;

    fn store() -> FoodStore {
        FoodStore::new(2.0, 3.0)
    }

    #[test]
    fn nearby_additions_merge() {
        let mut s = store();
        s.add_food(Cell::new(5, 5), 3);
        // distance 4 == merge_radius + 1
        s.add_food(Cell::new(9, 5), 2);
        assert_eq!(s.len(), 1);
        assert_eq!(s.piles()[0].amount, 5);
        assert_eq!(s.piles()[0].position, Cell::new(5, 5));
    }

    #[test]
    fn distant_additions_create_piles() {
        let mut s = store();
        s.add_food(Cell::new(0, 0), 3);
        s.add_food(Cell::new(10, 10), 2);
        assert_eq!(s.len(), 2);
        assert_eq!(s.total_amount(), 5);
    }

    #[test]
    fn zero_amount_is_noop() {
        let mut s = store();
        s.add_food(Cell::new(0, 0), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn pickup_decrements_then_removes() {
        let mut s = store();
        s.add_food(Cell::new(5, 5), 2);
        assert!(s.try_pickup(Cell::new(6, 6)));
        assert_eq!(s.piles()[0].amount, 1);
        assert!(s.try_pickup(Cell::new(5, 5)));
        assert!(s.is_empty());
        assert!(!s.try_pickup(Cell::new(5, 5)));
    }

    #[test]
    fn pickup_out_of_reach_fails() {
        let mut s = store();
        s.add_food(Cell::new(5, 5), 2);
        assert!(!s.try_pickup(Cell::new(8, 5)));
        assert_eq!(s.total_amount(), 2);
    }

    #[test]
    fn first_pile_in_store_order_wins() {
        let mut s = FoodStore::new(3.0, 0.0);
        s.add_food(Cell::new(0, 0), 1);
        s.add_food(Cell::new(3, 0), 1);
        // (2, 0) reaches both; the first pile is farther but still wins.
        assert!(s.try_pickup(Cell::new(2, 0)));
        assert_eq!(s.len(), 1);
        assert_eq!(s.piles()[0].position, Cell::new(3, 0));
    }

    #[test]
    fn conservation_over_many_pickups() {
        let mut s = store();
        s.add_food(Cell::new(5, 5), 10);
        let mut taken = 0;
        for _ in 0..25 {
            if s.try_pickup(Cell::new(5, 5)) {
                taken += 1;
            }
            assert_eq!(s.total_amount() + taken, 10);
        }
        assert_eq!(taken, 10);
    }
}

// ── Nest ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod nest_tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let n = nest();
        assert!(n.contains(Cell::new(13, 10)));
        assert!(!n.contains(Cell::new(14, 10)));
        assert_eq!(n.target().x, 10.5);
    }
}
