//! Unit tests for ant-agent.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use ant_core::{AgentId, AgentRng, Cell, ColonyConfig, Point};
use ant_grid::{FoodStore, Nest, ObstacleMask, ScentField};

use crate::{Ant, AntState, SensorReading, StepContext, StepOutcome, Steering};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 40 x 40 grid, nest at (20, 20) with radius 5.
fn small_config() -> ColonyConfig {
    ColonyConfig { width: 40, height: 40, ..ColonyConfig::default() }
}

/// Owns the grid state so tests can build a `StepContext` on demand.
struct Fixture {
    config:    ColonyConfig,
    field:     ScentField,
    obstacles: ObstacleMask,
    food:      FoodStore,
    nest:      Nest,
}

impl Fixture {
    fn new(config: ColonyConfig) -> Self {
        let grid = config.grid();
        let nest = Nest::new(config.nest_cell(), config.nest_radius);
        Self {
            field:     ScentField::new(grid, config.max_strength),
            obstacles: ObstacleMask::new(grid, nest),
            food:      FoodStore::new(config.food_pile_radius, config.food_merge_radius),
            nest,
            config,
        }
    }

    fn ctx(&mut self) -> StepContext<'_> {
        StepContext::new(
            &self.config,
            &mut self.field,
            &self.obstacles,
            &mut self.food,
            self.nest,
        )
    }

    fn step(&mut self, ant: &mut Ant, rng: &mut AgentRng) -> StepOutcome {
        let mut ctx = self.ctx();
        ant.step(&mut ctx, 1.0, rng)
    }
}

fn rng() -> AgentRng {
    AgentRng::new(7, AgentId(0))
}

// ── AntState ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod state {
    use super::*;

    #[test]
    fn carrying_matches_state() {
        assert!(!AntState::Searching.is_carrying());
        assert!(AntState::Returning.is_carrying());
        assert_eq!(AntState::default(), AntState::Searching);
    }

    #[test]
    fn display() {
        assert_eq!(AntState::Returning.to_string(), "returning");
    }
}

// ── Sensing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sensing {
    use super::*;
    use crate::sense::{cone_cells, sample_cone, sense};

    #[test]
    fn cone_covers_offset_times_width_samples() {
        let cells: Vec<Cell> = cone_cells(Point::new(10.5, 10.5), 0.0, 3, 1).collect();
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&Cell::new(11, 10)));
        assert!(cells.contains(&Cell::new(13, 9)));
        assert!(cells.contains(&Cell::new(13, 11)));
    }

    #[test]
    fn empty_field_reads_zero() {
        let fx = Fixture::new(small_config());
        let r = sense(&fx.field, &fx.obstacles, &fx.config, Point::new(5.5, 5.5), 0.0);
        assert_eq!(r, SensorReading::default());
    }

    #[test]
    fn off_grid_cone_reads_zero() {
        let mut fx = Fixture::new(small_config());
        fx.field.deposit(Cell::new(0, 0), 50.0);
        // Facing straight off the left edge from the corner.
        let v = sample_cone(&fx.field, &fx.obstacles, Point::new(0.5, 0.5), PI, 3, 0);
        assert_eq!(v, 0.0);
    }

    #[test]
    fn blocked_cells_are_excluded() {
        let mut fx = Fixture::new(small_config());
        for x in 6..=8 {
            fx.field.deposit(Cell::new(x, 5), 90.0);
        }
        fx.obstacles.set_region(Cell::new(7, 5), 1.0, true);
        let v = sample_cone(&fx.field, &fx.obstacles, Point::new(5.5, 5.5), 0.0, 3, 0);
        // (6, 5) and (7, 5) and (8, 5) are all blocked now.
        assert_eq!(v, 0.0);
    }

    #[test]
    fn stronger_left_cone_is_reported() {
        let mut fx = Fixture::new(small_config());
        let pos = Point::new(20.5, 10.5);
        let max = fx.config.max_strength;
        for c in cone_cells(pos, FRAC_PI_4, 3, 1) {
            fx.field.deposit(c, max);
        }
        let r = sense(&fx.field, &fx.obstacles, &fx.config, pos, 0.0);
        assert_eq!(r.left, max);
        assert!(r.left > r.forward);
        assert!(r.left > r.right);
        assert_eq!(Steering::decide(&r, fx.config.scent_threshold), Steering::Left);
    }
}

// ── Steering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod steering {
    use super::*;
    use crate::steer::homing_turn;

    const T: f32 = 0.05;

    #[test]
    fn weak_signal_wanders() {
        let r = SensorReading::new(0.01, 0.04, 0.0);
        assert_eq!(Steering::decide(&r, T), Steering::Wander);
    }

    #[test]
    fn forward_wins_ties() {
        assert_eq!(Steering::decide(&SensorReading::new(1.0, 1.0, 0.5), T), Steering::Hold);
        assert_eq!(Steering::decide(&SensorReading::new(1.0, 1.0, 1.0), T), Steering::Hold);
    }

    #[test]
    fn side_preferences() {
        assert_eq!(Steering::decide(&SensorReading::new(0.1, 1.0, 0.5), T), Steering::Left);
        assert_eq!(Steering::decide(&SensorReading::new(0.1, 0.5, 1.0), T), Steering::Right);
        assert_eq!(Steering::decide(&SensorReading::new(0.1, 1.0, 1.0), T), Steering::Tiebreak);
    }

    #[test]
    fn turn_magnitudes() {
        let cfg = ColonyConfig::default();
        let mut rng = rng();
        assert_eq!(Steering::Hold.turn(&cfg, &mut rng), 0.0);
        assert_eq!(Steering::Left.turn(&cfg, &mut rng), cfg.sensor_angle);
        assert_eq!(Steering::Right.turn(&cfg, &mut rng), -cfg.sensor_angle);
        for _ in 0..500 {
            let w = Steering::Wander.turn(&cfg, &mut rng);
            assert!(w.abs() <= cfg.max_turn_per_tick * 0.5);
            let t = Steering::Tiebreak.turn(&cfg, &mut rng);
            assert!(t.abs() <= cfg.max_turn_per_tick);
        }
    }

    #[test]
    fn homing_turn_is_clamped() {
        let from = Point::new(10.0, 10.0);
        // Target straight behind: needs ±π, gets the clamp.
        let t = homing_turn(from, 0.0, Point::new(0.0, 10.0), 0.4);
        assert!((t.abs() - 0.4).abs() < 1e-6);
        // Small correction passes through untouched.
        let t = homing_turn(from, FRAC_PI_2 - 0.1, Point::new(10.0, 20.0), 0.4);
        assert!((t - 0.1).abs() < 1e-5);
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use super::*;
    use crate::Motion;
    use crate::motion::resolve_move;

    #[test]
    fn free_move_advances() {
        let fx = Fixture::new(small_config());
        let m = resolve_move(Point::new(5.5, 5.5), 0.0, 1.0, fx.config.grid(), &fx.obstacles, 0.3, &mut rng());
        assert_eq!(m, Motion::Moved(Point::new(6.5, 5.5)));
    }

    #[test]
    fn right_edge_reflects_about_vertical() {
        let fx = Fixture::new(small_config());
        let m = resolve_move(Point::new(39.5, 5.5), 0.2, 1.0, fx.config.grid(), &fx.obstacles, 0.3, &mut rng());
        let Motion::Bounced { heading } = m else { panic!("expected bounce, got {m:?}") };
        assert!(heading.cos() < 0.0);
        assert!((heading.sin() - 0.2_f32.sin()).abs() < 1e-5);
    }

    #[test]
    fn top_edge_reflects_about_horizontal() {
        let fx = Fixture::new(small_config());
        let m = resolve_move(Point::new(5.5, 0.2), -FRAC_PI_2, 1.0, fx.config.grid(), &fx.obstacles, 0.3, &mut rng());
        let Motion::Bounced { heading } = m else { panic!("expected bounce, got {m:?}") };
        assert!(heading.sin() > 0.0);
    }

    #[test]
    fn corner_reflects_both_axes() {
        let fx = Fixture::new(small_config());
        let h = 5.0 * FRAC_PI_4; // up-left
        let m = resolve_move(Point::new(0.3, 0.3), h, 1.0, fx.config.grid(), &fx.obstacles, 0.3, &mut rng());
        let Motion::Bounced { heading } = m else { panic!("expected bounce, got {m:?}") };
        assert!(heading.cos() > 0.0);
        assert!(heading.sin() > 0.0);
    }

    #[test]
    fn obstacle_turns_a_quarter_plus_jitter() {
        let mut fx = Fixture::new(small_config());
        fx.obstacles.set_region(Cell::new(25, 10), 1.0, true);
        let m = resolve_move(Point::new(23.5, 10.5), 0.0, 1.0, fx.config.grid(), &fx.obstacles, 0.3, &mut rng());
        let Motion::Bounced { heading } = m else { panic!("expected bounce, got {m:?}") };
        assert!((heading - FRAC_PI_2).abs() <= 0.3 + 1e-5, "heading {heading}");
    }

    #[test]
    fn ant_inside_fresh_wall_can_walk_out() {
        let mut fx = Fixture::new(small_config());
        fx.obstacles.set_region(Cell::new(5, 5), 2.0, true);
        let m = resolve_move(Point::new(5.5, 5.5), 0.0, 1.0, fx.config.grid(), &fx.obstacles, 0.3, &mut rng());
        assert!(matches!(m, Motion::Moved(_)));
    }
}

// ── Ant step ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step {
    use super::*;

    #[test]
    fn edge_bounce_keeps_position() {
        let mut fx = Fixture::new(small_config());
        let mut rng = rng();
        let start = Point::new(39.5, 10.5);
        let mut ant = Ant::new(start, 0.0);

        let outcome = fx.step(&mut ant, &mut rng);

        assert_eq!(outcome, StepOutcome::Bounced);
        assert_eq!(ant.position, start);
        assert!(ant.heading.cos() < 0.0, "x component should flip, heading {}", ant.heading);
    }

    #[test]
    fn pickup_turns_for_home_without_depositing() {
        let mut fx = Fixture::new(small_config());
        fx.food.add_food(Cell::new(10, 10), 1);
        let mut rng = rng();
        let mut ant = Ant::new(Point::new(10.5, 10.5), 0.0);

        assert_eq!(fx.step(&mut ant, &mut rng), StepOutcome::PickedUp);
        assert_eq!(ant.state, AntState::Returning);
        assert!(fx.food.is_empty());
        assert_eq!(fx.field.total(), 0.0);

        let bearing = ant.position.bearing_to(fx.nest.target());
        assert!((ant_core::angle_diff(bearing, ant.heading)).abs() < 1e-5);

        // Next tick the carrying ant starts laying scent.
        fx.step(&mut ant, &mut rng);
        assert!(fx.field.get(ant.cell()) > 0.0);
    }

    #[test]
    fn delivery_inside_nest_radius() {
        let mut fx = Fixture::new(small_config());
        let mut rng = rng();
        let mut ant = Ant { position: Point::new(22.5, 20.5), heading: PI, state: AntState::Returning };

        assert_eq!(fx.step(&mut ant, &mut rng), StepOutcome::Delivered);
        assert_eq!(ant.state, AntState::Searching);
        // Deposit happens before the delivery check.
        assert!(fx.field.total() > 0.0);
    }

    #[test]
    fn searching_ants_never_deposit() {
        let mut fx = Fixture::new(small_config());
        let mut rng = rng();
        let mut ant = Ant::new(Point::new(5.5, 5.5), 0.3);
        for _ in 0..500 {
            fx.step(&mut ant, &mut rng);
            assert_eq!(ant.state, AntState::Searching);
        }
        assert_eq!(fx.field.total(), 0.0);
    }

    #[test]
    fn returning_ant_homes_in() {
        let mut fx = Fixture::new(small_config());
        let mut rng = rng();
        let mut ant = Ant { position: Point::new(3.5, 3.5), heading: PI, state: AntState::Returning };
        let mut delivered = false;
        for _ in 0..200 {
            if fx.step(&mut ant, &mut rng) == StepOutcome::Delivered {
                delivered = true;
                break;
            }
        }
        assert!(delivered, "returning ant never reached the nest");
    }

    #[test]
    fn follows_a_trail_to_the_left() {
        let mut fx = Fixture::new(small_config());
        let pos = Point::new(20.5, 8.5);
        let max = fx.config.max_strength;
        for c in crate::sense::cone_cells(pos, FRAC_PI_4, 3, 1) {
            fx.field.deposit(c, max);
        }
        let mut ant = Ant::new(pos, 0.0);
        assert_eq!(fx.step(&mut ant, &mut rng()), StepOutcome::Moved);
        assert!((ant.heading - FRAC_PI_4).abs() < 1e-5);
    }

    #[test]
    fn stays_on_grid_with_walls_and_speed() {
        let mut fx = Fixture::new(ColonyConfig { width: 12, height: 9, nest_radius: 1.0, ..ColonyConfig::default() });
        fx.obstacles.set_region(Cell::new(2, 2), 1.5, true);
        fx.obstacles.set_region(Cell::new(9, 6), 1.0, true);
        let grid = fx.config.grid();
        let mut rng = rng();
        let mut ant = Ant::new(Point::new(6.5, 4.5), 1.0);
        for i in 0..5_000 {
            let mut ctx = fx.ctx();
            let speed = if i % 3 == 0 { 2.5 } else { 1.0 };
            ant.step(&mut ctx, speed, &mut rng);
            assert!(grid.contains(ant.cell()), "left the grid at {}", ant.position);
        }
    }

    #[test]
    fn invalid_speed_is_zero() {
        let mut fx = Fixture::new(small_config());
        let start = Point::new(5.5, 5.5);
        let mut ant = Ant::new(start, 0.0);
        let mut ctx = fx.ctx();
        assert_eq!(ant.step(&mut ctx, f32::NAN, &mut rng()), StepOutcome::Moved);
        assert_eq!(ant.position, start);
    }
}
