use super::ant::{Ant, AntContext, AntEvent, AntKey, clamp_to_area};
use super::food::FoodRegistry;
use super::scent::ScentField;
use super::{REPRODUCTION_COST, REPRODUCTION_RATE, SCENT_CELL_SIZE};
use macroquad::math::DVec2;
use rand::Rng;
use shared::util::heading;
use shared::{AntView, ColonyStats};
use slotmap::SlotMap;
use std::f64::consts::TAU;
use tracing::debug;

/// A colony's home. Fixed for the lifetime of the simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nest {
    pub pos: DVec2,
    pub radius: f64,
}

/// Outcome of one behavior pass over a colony.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColonyTickStats {
    pub pickups: u32,
    pub deliveries: u32,
}

pub struct Colony {
    pub colony_id: u32,
    pub name: String,
    pub nest: Nest,
    pub food_scent: ScentField,
    pub nest_scent: ScentField,
    pub food_stored: u32,
    bounds: DVec2,
    ants: SlotMap<AntKey, Ant>,
    population: u32, // Live ants only; equals ants.len() once eliminated ants are swept
}

impl Colony {
    pub fn new(
        colony_id: u32,
        name: impl Into<String>,
        nest: Nest,
        width: f64,
        height: f64,
    ) -> Self {
        Self {
            colony_id,
            name: name.into(),
            nest,
            food_scent: ScentField::new(width, height, SCENT_CELL_SIZE),
            nest_scent: ScentField::new(width, height, SCENT_CELL_SIZE),
            food_stored: 0,
            bounds: DVec2::new(width, height),
            ants: SlotMap::with_key(),
            population: 0,
        }
    }

    pub fn population(&self) -> u32 {
        self.population
    }

    pub fn ants(&self) -> &SlotMap<AntKey, Ant> {
        &self.ants
    }

    pub fn ant(&self, key: AntKey) -> Option<&Ant> {
        self.ants.get(key)
    }

    pub fn is_extinct(&self) -> bool {
        self.population == 0
    }

    /// Runs one behavior step for every ant.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        food: &mut FoodRegistry,
        rng: &mut R,
    ) -> ColonyTickStats {
        let Self {
            nest,
            bounds,
            food_scent,
            nest_scent,
            food_stored,
            ants,
            ..
        } = self;

        let mut ctx = AntContext {
            nest,
            bounds: *bounds,
            food_scent,
            nest_scent,
            food,
            food_stored,
        };

        let mut stats = ColonyTickStats::default();
        for ant in ants.values_mut() {
            match ant.update(&mut ctx, rng) {
                AntEvent::PickedUpFood => stats.pickups += 1,
                AntEvent::DeliveredFood => stats.deliveries += 1,
                AntEvent::None => {}
            }
        }
        stats
    }

    pub fn decay_scents(&mut self) {
        self.food_scent.decay();
        self.nest_scent.decay();
    }

    pub fn spawn_ants<R: Rng + ?Sized>(&mut self, count: u32, rng: &mut R) {
        for _ in 0..count {
            self.spawn_ant(rng);
        }
    }

    /// Adds a searching ant somewhere inside the nest.
    pub fn spawn_ant<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AntKey {
        let (dx, dy) = heading(rng.random_range(0.0..TAU));
        let offset = DVec2::new(dx, dy) * rng.random::<f64>() * self.nest.radius;
        let pos = clamp_to_area(self.nest.pos + offset, self.bounds);
        self.insert_ant(Ant::new(pos))
    }

    pub fn insert_ant(&mut self, ant: Ant) -> AntKey {
        self.population += 1;
        self.ants.insert(ant)
    }

    /// Food-gated birth. The chance grows with the banked surplus and is not
    /// capped, so a large enough store makes a birth certain.
    pub fn try_reproduce<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.food_stored < REPRODUCTION_COST {
            return false;
        }
        let chance = REPRODUCTION_RATE * (self.food_stored as f64 / REPRODUCTION_COST as f64);
        if rng.random::<f64>() >= chance {
            return false;
        }

        let key = self.spawn_ant(rng);
        self.food_stored -= REPRODUCTION_COST;
        debug!(
            colony = self.colony_id,
            ?key,
            population = self.population,
            food_stored = self.food_stored,
            "ant born"
        );
        true
    }

    /// Parks an ant killed in combat at the sentinel. It stays in the set
    /// until [`Colony::remove_eliminated`] runs. Returns false if the ant is
    /// missing or already eliminated.
    pub fn eliminate(&mut self, key: AntKey) -> bool {
        match self.ants.get_mut(key) {
            Some(ant) if !ant.is_eliminated() => {
                ant.eliminate();
                self.population -= 1;
                true
            }
            _ => false,
        }
    }

    /// Drops every ant parked at the sentinel. Returns how many were removed.
    pub fn remove_eliminated(&mut self) -> usize {
        let before = self.ants.len();
        self.ants.retain(|_, ant| !ant.is_eliminated());
        before - self.ants.len()
    }

    /// Clears ants, scent and stores. The nest stays where it is.
    pub fn reset(&mut self) {
        self.ants.clear();
        self.population = 0;
        self.food_stored = 0;
        self.food_scent.clear();
        self.nest_scent.clear();
    }

    pub fn stats(&self) -> ColonyStats {
        ColonyStats {
            colony_id: self.colony_id,
            population: self.population,
            food_stored: self.food_stored,
        }
    }

    pub fn ant_views(&self) -> impl Iterator<Item = AntView> + '_ {
        self.ants.values().map(|ant| ant.view(self.colony_id))
    }
}
