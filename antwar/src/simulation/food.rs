use macroquad::math::DVec2;
use rand::Rng;
use shared::FoodView;

use super::{FOOD_RADIUS_DIVISOR, MIN_FOOD_RADIUS};

/// Index of a food source in its registry. Sources are never removed, so ids
/// stay valid for the registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoodId(usize);

/// Size classes a new deposit is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodTier {
    Small,
    Medium,
    Large,
}

impl FoodTier {
    pub const ALL: [FoodTier; 3] = [FoodTier::Small, FoodTier::Medium, FoodTier::Large];

    pub fn radius(self) -> f64 {
        match self {
            FoodTier::Small => 8.0,
            FoodTier::Medium => 16.0,
            FoodTier::Large => 32.0,
        }
    }

    pub fn amount(self) -> u32 {
        match self {
            FoodTier::Small => 50,
            FoodTier::Medium => 150,
            FoodTier::Large => 400,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodSource {
    pub pos: DVec2,
    pub radius: f64,
    pub amount: u32,
}

impl FoodSource {
    pub fn is_active(&self) -> bool {
        self.amount > 0
    }

    /// Radius implied by the remaining amount; shrinks as the deposit is eaten.
    pub fn derived_radius(&self) -> f64 {
        (self.amount as f64 / FOOD_RADIUS_DIVISOR).max(MIN_FOOD_RADIUS)
    }

    pub fn view(&self) -> FoodView {
        FoodView {
            x: self.pos.x,
            y: self.pos.y,
            radius: self.radius,
            amount: self.amount,
        }
    }
}

/// Every food deposit in the world, shared by both colonies.
#[derive(Debug, Clone)]
pub struct FoodRegistry {
    width: f64,
    height: f64,
    sources: Vec<FoodSource>,
}

impl FoodRegistry {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            sources: Vec::new(),
        }
    }

    pub fn get(&self, id: FoodId) -> Option<&FoodSource> {
        self.sources.get(id.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FoodId, &FoodSource)> {
        self.sources.iter().enumerate().map(|(i, s)| (FoodId(i), s))
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.sources.iter().filter(|s| s.is_active()).count()
    }

    /// Euclidean-nearest source that still has food.
    pub fn find_nearest(&self, pos: DVec2) -> Option<FoodId> {
        let mut min_dist_sq = f64::INFINITY;
        let mut nearest = None;
        for (i, source) in self.sources.iter().enumerate() {
            if !source.is_active() {
                continue;
            }
            let dist_sq = source.pos.distance_squared(pos);
            if dist_sq < min_dist_sq {
                min_dist_sq = dist_sq;
                nearest = Some(FoodId(i));
            }
        }
        nearest
    }

    /// Takes one unit from a source. Empty sources and unknown ids are left alone.
    pub fn consume_one(&mut self, id: FoodId) {
        if let Some(source) = self.sources.get_mut(id.0) {
            source.amount = source.amount.saturating_sub(1);
        }
    }

    pub fn place(&mut self, pos: DVec2, tier: FoodTier) -> FoodId {
        self.push(FoodSource {
            pos,
            radius: tier.radius(),
            amount: tier.amount(),
        })
    }

    /// Places a source whose radius is derived from `amount` right away.
    pub fn place_with_amount(&mut self, pos: DVec2, amount: u32) -> FoodId {
        let mut source = FoodSource {
            pos,
            radius: 0.0,
            amount,
        };
        source.radius = source.derived_radius();
        self.push(source)
    }

    /// Drops a deposit of a random tier somewhere fully inside the play area.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> FoodId {
        let tier = FoodTier::random(rng);
        let radius = tier.radius();
        let x = rng.random::<f64>() * (self.width - 2.0 * radius).max(0.0) + radius;
        let y = rng.random::<f64>() * (self.height - 2.0 * radius).max(0.0) + radius;
        self.place(DVec2::new(x, y), tier)
    }

    pub fn refresh_radii(&mut self) {
        for source in self.sources.iter_mut().filter(|s| s.is_active()) {
            source.radius = source.derived_radius();
        }
    }

    pub fn clear(&mut self) {
        self.sources.clear();
    }

    pub fn views(&self) -> Vec<FoodView> {
        self.sources.iter().map(FoodSource::view).collect()
    }

    fn push(&mut self, source: FoodSource) -> FoodId {
        self.sources.push(source);
        FoodId(self.sources.len() - 1)
    }
}
