use anyhow::Result;
use macroquad::math::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use shared::{AntView, ColonyStats, FoodView, TickSummary};
use tracing::{debug, info};

use crate::config::SimulationConfig;

use super::colony::{Colony, Nest};
use super::combat;
use super::food::{FoodId, FoodRegistry, FoodTier};

/// The whole world: two rival colonies and the food they compete for.
pub struct Simulation<R = StdRng> {
    tick: u64,
    config: SimulationConfig,
    colonies: [Colony; 2],
    food: FoodRegistry,
    rng: R,
    extinct_reported: [bool; 2],
}

impl Simulation<StdRng> {
    /// Builds a populated world, seeding from `config.seed` or from entropy.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(seed, "seeding simulation");
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Simulation<R> {
    /// Builds a populated world drawing every random choice from `rng`.
    pub fn with_rng(config: &SimulationConfig, rng: R) -> Result<Self> {
        let mut sim = Self::empty(config, rng)?;
        sim.populate();
        Ok(sim)
    }

    /// Builds a world with nests but no ants and no food.
    pub fn empty(config: &SimulationConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let make_colony = |id: usize| {
            let nest = &config.nests[id];
            Colony::new(
                id as u32,
                nest.name.clone(),
                Nest {
                    pos: nest.pos(),
                    radius: nest.radius,
                },
                config.width,
                config.height,
            )
        };

        Ok(Self {
            tick: 0,
            config: config.clone(),
            colonies: [make_colony(0), make_colony(1)],
            food: FoodRegistry::new(config.width, config.height),
            rng,
            extinct_reported: [false; 2],
        })
    }

    fn populate(&mut self) {
        for colony in &mut self.colonies {
            colony.spawn_ants(self.config.initial_ants, &mut self.rng);
        }
        for _ in 0..self.config.initial_food_sources {
            self.food.spawn(&mut self.rng);
        }
        info!(
            ants_per_colony = self.config.initial_ants,
            food_sources = self.food.len(),
            width = self.config.width,
            height = self.config.height,
            "world created"
        );
    }

    /// Advances the world by one frame.
    pub fn tick(&mut self) -> TickSummary {
        let mut summary = TickSummary::default();

        // Radii follow the remaining amount, as the draw pass left them.
        self.food.refresh_radii();

        let [black, red] = &mut self.colonies;
        summary.engagements = combat::resolve(black, red).len() as u32;

        for colony in &mut self.colonies {
            let stats = colony.update(&mut self.food, &mut self.rng);
            summary.pickups += stats.pickups;
            summary.deliveries += stats.deliveries;
        }

        for colony in &mut self.colonies {
            colony.decay_scents();
        }

        for colony in &mut self.colonies {
            if colony.try_reproduce(&mut self.rng) {
                summary.births += 1;
            }
        }

        self.tick += 1;
        if self.tick % self.config.food_drop_interval == 0 {
            let id = self.food.spawn(&mut self.rng);
            summary.food_dropped = true;
            if let Some(source) = self.food.get(id) {
                info!(
                    tick = self.tick,
                    x = source.pos.x,
                    y = source.pos.y,
                    amount = source.amount,
                    "food dropped"
                );
            }
        }

        summary.tick = self.tick;
        self.report_extinctions();
        debug!(?summary, "tick");
        summary
    }

    fn report_extinctions(&mut self) {
        for (colony, reported) in self.colonies.iter().zip(self.extinct_reported.iter_mut()) {
            if colony.is_extinct() && !*reported {
                *reported = true;
                info!(colony = %colony.name, tick = self.tick, "colony wiped out");
            }
        }
    }

    /// Restores the starting world. The random stream carries on.
    pub fn reset(&mut self) {
        for colony in &mut self.colonies {
            colony.reset();
        }
        self.food.clear();
        self.tick = 0;
        self.extinct_reported = [false; 2];
        info!("simulation reset");
        self.populate();
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn colonies(&self) -> &[Colony; 2] {
        &self.colonies
    }

    pub fn colony(&self, colony_id: u32) -> Option<&Colony> {
        self.colonies.get(colony_id as usize)
    }

    pub fn colony_mut(&mut self, colony_id: u32) -> Option<&mut Colony> {
        self.colonies.get_mut(colony_id as usize)
    }

    pub fn food(&self) -> &FoodRegistry {
        &self.food
    }

    pub fn place_food(&mut self, pos: DVec2, tier: FoodTier) -> FoodId {
        self.food.place(pos, tier)
    }

    pub fn place_food_with_amount(&mut self, pos: DVec2, amount: u32) -> FoodId {
        self.food.place_with_amount(pos, amount)
    }

    pub fn total_ant_count(&self) -> usize {
        self.colonies.iter().map(|c| c.ants().len()).sum()
    }

    /// The only colony left standing, once the other has no ants.
    pub fn winner(&self) -> Option<&Colony> {
        match (self.colonies[0].is_extinct(), self.colonies[1].is_extinct()) {
            (false, true) => Some(&self.colonies[0]),
            (true, false) => Some(&self.colonies[1]),
            _ => None,
        }
    }

    pub fn colony_stats(&self) -> [ColonyStats; 2] {
        [self.colonies[0].stats(), self.colonies[1].stats()]
    }

    pub fn ant_views(&self) -> Vec<AntView> {
        self.colonies.iter().flat_map(|c| c.ant_views()).collect()
    }

    pub fn food_views(&self) -> Vec<FoodView> {
        self.food.views()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> SimulationConfig {
        SimulationConfig {
            seed: Some(seed),
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn new_world_matches_config() {
        let sim = Simulation::new(&config(1)).unwrap();
        assert_eq!(sim.tick_count(), 0);
        assert_eq!(sim.total_ant_count(), 100);
        assert_eq!(sim.food().len(), 5);
        assert!(sim.colony_stats().iter().all(|s| s.population == 50));
        assert!(sim.winner().is_none());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut cfg = config(1);
        cfg.width = 0.0;
        assert!(Simulation::new(&cfg).is_err());
    }

    #[test]
    fn same_seed_same_world() {
        let mut a = Simulation::new(&config(99)).unwrap();
        let mut b = Simulation::new(&config(99)).unwrap();
        for _ in 0..300 {
            assert_eq!(a.tick(), b.tick());
        }
        assert_eq!(a.ant_views(), b.ant_views());
        assert_eq!(a.food_views(), b.food_views());
    }

    #[test]
    fn reset_restores_initial_population() {
        let mut sim = Simulation::new(&config(5)).unwrap();
        for _ in 0..200 {
            sim.tick();
        }
        sim.reset();
        assert_eq!(sim.tick_count(), 0);
        assert_eq!(sim.total_ant_count(), 100);
        assert_eq!(sim.food().len(), 5);
        assert!(sim.colony_stats().iter().all(|s| s.food_stored == 0));
    }

    #[test]
    fn winner_is_the_surviving_colony() {
        let mut cfg = config(3);
        cfg.initial_ants = 0;
        let mut sim = Simulation::new(&cfg).unwrap();
        assert!(sim.winner().is_none());

        let red = sim.colony_mut(1).unwrap();
        red.insert_ant(crate::simulation::Ant::new(DVec2::new(10.0, 10.0)));
        assert_eq!(sim.winner().map(|c| c.colony_id), Some(1));
    }
}
