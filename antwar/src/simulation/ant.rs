use macroquad::math::DVec2;
use rand::Rng;
use shared::util::heading;
use shared::{AntView, ELIMINATED_SENTINEL};
use slotmap::new_key_type;
use std::f64::consts::TAU;

use super::colony::Nest;
use super::food::FoodRegistry;
use super::scent::ScentField;
use super::{
    EDGE_INSET, HOMING_SPEED, SCOUT_CHANCE, SCOUT_STEP, TRAIL_FOLLOW_CHANCE, TRAIL_JITTER,
    TRAIL_STEP, WANDER_STEP,
};

new_key_type! {
    /// Key for ant slotmap.
    pub struct AntKey;
}

/// Behavior branch an ant runs each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntState {
    Searching,
    Carrying,
}

/// Notable outcome of one behavior step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntEvent {
    None,
    PickedUpFood,
    DeliveredFood,
}

/// Everything an ant reads or writes during its step, lent by its colony.
pub struct AntContext<'a> {
    pub nest: &'a Nest,
    pub bounds: DVec2,
    pub food_scent: &'a mut ScentField,
    pub nest_scent: &'a mut ScentField,
    pub food: &'a mut FoodRegistry,
    pub food_stored: &'a mut u32,
}

/// Keeps `pos` within `[0, bounds)`, so an ant pressed against the far edge
/// still sits in the last scent cell.
pub(crate) fn clamp_to_area(pos: DVec2, bounds: DVec2) -> DVec2 {
    let max = (bounds - DVec2::splat(EDGE_INSET)).max(DVec2::ZERO);
    pos.clamp(DVec2::ZERO, max)
}

/// State of an ant.
#[derive(Debug, Clone, PartialEq)]
pub struct Ant {
    pub pos: DVec2,
    pub carrying: bool,
    pub state: AntState,
    pub target: Option<DVec2>, // Nest position while carrying
}

impl Ant {
    /// Create a new searching ant.
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            carrying: false,
            state: AntState::Searching,
            target: None,
        }
    }

    /// Create an ant already on its way home with food.
    pub fn new_carrying(pos: DVec2, nest_pos: DVec2) -> Self {
        Self {
            pos,
            carrying: true,
            state: AntState::Carrying,
            target: Some(nest_pos),
        }
    }

    /// Run one behavior step.
    pub fn update<R: Rng + ?Sized>(&mut self, ctx: &mut AntContext, rng: &mut R) -> AntEvent {
        match self.state {
            AntState::Searching => self.search(ctx, rng),
            AntState::Carrying => self.carry(ctx, rng),
        }
    }

    fn search<R: Rng + ?Sized>(&mut self, ctx: &mut AntContext, rng: &mut R) -> AntEvent {
        if !self.follow_trail(ctx.food_scent, rng) {
            self.wander(rng);
        }
        self.clamp_to(ctx.bounds);

        let Some(id) = ctx.food.find_nearest(self.pos) else {
            return AntEvent::None;
        };
        let within_reach = ctx
            .food
            .get(id)
            .is_some_and(|source| self.pos.distance(source.pos) < source.radius);
        if !within_reach {
            return AntEvent::None;
        }

        self.carrying = true;
        self.state = AntState::Carrying;
        self.target = Some(ctx.nest.pos);
        ctx.food.consume_one(id);
        ctx.food_scent.deposit(self.pos);
        AntEvent::PickedUpFood
    }

    fn carry<R: Rng + ?Sized>(&mut self, ctx: &mut AntContext, rng: &mut R) -> AntEvent {
        let target = *self.target.get_or_insert(ctx.nest.pos);
        if !self.follow_trail(ctx.nest_scent, rng) {
            self.head_towards(target);
        }
        self.clamp_to(ctx.bounds);
        ctx.nest_scent.deposit(self.pos);

        if self.pos.distance(target) >= ctx.nest.radius {
            return AntEvent::None;
        }

        *ctx.food_stored += 1;
        self.carrying = false;
        self.state = AntState::Searching;
        self.target = None;
        AntEvent::DeliveredFood
    }

    /// Steps along the strongest neighboring scent most of the time.
    /// Returns false when there is no trail or the ant chose to ignore it.
    fn follow_trail<R: Rng + ?Sized>(&mut self, field: &ScentField, rng: &mut R) -> bool {
        let Some((dx, dy)) = field.strongest_neighbor_direction(self.pos) else {
            return false;
        };
        if !rng.random_bool(TRAIL_FOLLOW_CHANCE) {
            return false;
        }
        let jitter_x = rng.random_range(-TRAIL_JITTER..=TRAIL_JITTER);
        let jitter_y = rng.random_range(-TRAIL_JITTER..=TRAIL_JITTER);
        self.pos += DVec2::new(
            dx as f64 * TRAIL_STEP + jitter_x,
            dy as f64 * TRAIL_STEP + jitter_y,
        );
        true
    }

    /// Random-heading step; occasionally a long scouting stride.
    fn wander<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let stride = if rng.random_bool(SCOUT_CHANCE) {
            SCOUT_STEP
        } else {
            WANDER_STEP
        };
        let (dx, dy) = heading(rng.random_range(0.0..TAU));
        self.pos += DVec2::new(dx, dy) * stride;
    }

    fn head_towards(&mut self, target: DVec2) {
        let offset = target - self.pos;
        let dist = offset.length();
        if dist > 0.0 {
            self.pos += offset / dist * HOMING_SPEED;
        }
    }

    fn clamp_to(&mut self, bounds: DVec2) {
        self.pos = clamp_to_area(self.pos, bounds);
    }

    /// Parks the ant at the out-of-bounds sentinel.
    pub fn eliminate(&mut self) {
        self.pos = DVec2::new(ELIMINATED_SENTINEL.0, ELIMINATED_SENTINEL.1);
        self.carrying = false;
        self.target = None;
    }

    pub fn is_eliminated(&self) -> bool {
        self.pos.x < 0.0 || self.pos.y < 0.0
    }

    pub fn view(&self, colony_id: u32) -> AntView {
        AntView {
            colony_id,
            x: self.pos.x,
            y: self.pos.y,
            carrying: self.carrying,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::testing::AlwaysRng;
    use crate::simulation::{SCENT_CELL_SIZE, SCENT_STRENGTH};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WIDTH: f64 = 800.0;
    const HEIGHT: f64 = 600.0;

    struct World {
        nest: Nest,
        food_scent: ScentField,
        nest_scent: ScentField,
        food: FoodRegistry,
        food_stored: u32,
    }

    impl World {
        fn new() -> Self {
            Self {
                nest: Nest {
                    pos: DVec2::new(400.0, 300.0),
                    radius: 40.0,
                },
                food_scent: ScentField::new(WIDTH, HEIGHT, SCENT_CELL_SIZE),
                nest_scent: ScentField::new(WIDTH, HEIGHT, SCENT_CELL_SIZE),
                food: FoodRegistry::new(WIDTH, HEIGHT),
                food_stored: 0,
            }
        }

        fn step<R: Rng>(&mut self, ant: &mut Ant, rng: &mut R) -> AntEvent {
            let mut ctx = AntContext {
                nest: &self.nest,
                bounds: DVec2::new(WIDTH, HEIGHT),
                food_scent: &mut self.food_scent,
                nest_scent: &mut self.nest_scent,
                food: &mut self.food,
                food_stored: &mut self.food_stored,
            };
            ant.update(&mut ctx, rng)
        }
    }

    #[test]
    fn searching_ant_on_last_unit_picks_it_up() {
        let mut world = World::new();
        let food_pos = DVec2::new(100.0, 100.0);
        let id = world.food.place_with_amount(food_pos, 1);
        let mut ant = Ant::new(food_pos);

        let event = world.step(&mut ant, &mut StdRng::seed_from_u64(3));

        assert_eq!(event, AntEvent::PickedUpFood);
        assert_eq!(ant.state, AntState::Carrying);
        assert!(ant.carrying);
        assert_eq!(ant.target, Some(world.nest.pos));
        assert_eq!(world.food.get(id).unwrap().amount, 0);
        assert_eq!(world.food.find_nearest(food_pos), None);
        assert_eq!(world.food_scent.intensity_at_pos(ant.pos), Some(SCENT_STRENGTH));
    }

    #[test]
    fn carrying_ant_inside_nest_delivers() {
        let mut world = World::new();
        let mut ant = Ant::new_carrying(world.nest.pos, world.nest.pos);

        let event = world.step(&mut ant, &mut StdRng::seed_from_u64(9));

        assert_eq!(event, AntEvent::DeliveredFood);
        assert_eq!(world.food_stored, 1);
        assert_eq!(ant.state, AntState::Searching);
        assert!(!ant.carrying);
        assert_eq!(ant.target, None);
    }

    #[test]
    fn carrying_ant_heads_home_and_marks_trail() {
        let mut world = World::new();
        let start = DVec2::new(200.0, 300.0);
        let mut ant = Ant::new_carrying(start, world.nest.pos);

        let event = world.step(&mut ant, &mut AlwaysRng);

        assert_eq!(event, AntEvent::None);
        assert!((ant.pos - DVec2::new(201.5, 300.0)).length() < 1e-9);
        assert_eq!(world.nest_scent.intensity_at_pos(ant.pos), Some(SCENT_STRENGTH));
        assert_eq!(world.food_stored, 0);
    }

    #[test]
    fn searching_ant_follows_food_scent() {
        let mut world = World::new();
        let start = DVec2::new(210.0, 210.0);
        world
            .food_scent
            .deposit(start + DVec2::new(SCENT_CELL_SIZE, 0.0));
        let mut ant = Ant::new(start);

        world.step(&mut ant, &mut AlwaysRng);

        // AlwaysRng picks the low end of the jitter range.
        let expected = start + DVec2::new(TRAIL_STEP - TRAIL_JITTER, -TRAIL_JITTER);
        assert!((ant.pos - expected).length() < 1e-9);
    }

    #[test]
    fn carrying_ant_follows_nest_scent() {
        let mut world = World::new();
        let start = DVec2::new(210.0, 210.0);
        world
            .nest_scent
            .deposit(start + DVec2::new(0.0, SCENT_CELL_SIZE));
        let mut ant = Ant::new_carrying(start, world.nest.pos);

        world.step(&mut ant, &mut AlwaysRng);

        let expected = start + DVec2::new(-TRAIL_JITTER, TRAIL_STEP - TRAIL_JITTER);
        assert!((ant.pos - expected).length() < 1e-9);
    }

    #[test]
    fn wandering_steps_stay_within_scout_range() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(11);
        let mut ant = Ant::new(DVec2::new(100.0, 500.0));
        let mut long_strides = 0;
        for _ in 0..2000 {
            let before = ant.pos;
            world.step(&mut ant, &mut rng);
            let stride = before.distance(ant.pos);
            assert!(stride <= SCOUT_STEP + 1e-6);
            if stride > WANDER_STEP + 0.1 {
                long_strides += 1;
            }
        }
        assert!(long_strides > 0);
        assert_eq!(ant.state, AntState::Searching);
    }

    #[test]
    fn ants_never_leave_the_play_area() {
        let mut world = World::new();
        let mut rng = StdRng::seed_from_u64(5);
        let mut ant = Ant::new(DVec2::new(0.5, 0.5));
        for _ in 0..1000 {
            world.step(&mut ant, &mut rng);
            assert!(!ant.is_eliminated());
            assert!(ant.pos.x <= WIDTH && ant.pos.y <= HEIGHT);
        }
    }

    #[test]
    fn ant_at_far_corner_still_marks_scent() {
        let mut world = World::new();
        let mut ant = Ant::new(DVec2::new(WIDTH + 50.0, HEIGHT + 50.0));
        ant.clamp_to(DVec2::new(WIDTH, HEIGHT));

        assert!(ant.pos.x < WIDTH && ant.pos.y < HEIGHT);
        world.nest_scent.deposit(ant.pos);
        let last_col = world.nest_scent.cols() - 1;
        let last_row = world.nest_scent.rows() - 1;
        assert_eq!(
            world.nest_scent.intensity_at(last_col, last_row),
            Some(SCENT_STRENGTH)
        );
        assert_eq!(world.nest_scent.intensity_at_pos(ant.pos), Some(SCENT_STRENGTH));
    }

    #[test]
    fn eliminated_ant_sits_at_sentinel() {
        let mut ant = Ant::new_carrying(DVec2::new(50.0, 50.0), DVec2::ZERO);
        ant.eliminate();
        assert!(ant.is_eliminated());
        assert!(ant.view(1).is_eliminated());
        assert!(!ant.carrying);
    }
}
