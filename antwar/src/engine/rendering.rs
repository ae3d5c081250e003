use super::{
    ANT_DRAW_RADIUS, BACKGROUND_COLOR_VAL, COLONY_COLORS, FOOD_COLOR_VAL, GROUND_COLOR_VAL,
    NEST_COLOR_VAL, NEST_ENTRANCE_COLOR_VAL, NEST_ENTRANCE_RATIO, NEST_RIM_COLOR_VAL,
    ScentOverlay,
};
use antwar::Simulation;
use antwar::simulation::{Colony, SCENT_STRENGTH, ScentField};
use macroquad::prelude::*;

/// Draws the world into the window, scaled to fit and centered.
///
/// Only ever called between ticks, so it always sees a finished frame.
pub struct Renderer {
    world_width: f32,
    world_height: f32,
    scale: f32,
    offset: Vec2,
    last_screen_size: (f32, f32),
}

impl Renderer {
    pub fn new(world_width: f64, world_height: f64) -> Self {
        let mut renderer = Self {
            world_width: world_width as f32,
            world_height: world_height as f32,
            scale: 1.0,
            offset: Vec2::ZERO,
            last_screen_size: (0.0, 0.0),
        };
        renderer.fit_to_screen();
        renderer
    }

    /// Recomputes the world-to-screen transform when the window changed size.
    fn fit_to_screen(&mut self) {
        let screen = (screen_width(), screen_height());
        if screen == self.last_screen_size {
            return;
        }
        self.last_screen_size = screen;
        self.scale = (screen.0 / self.world_width).min(screen.1 / self.world_height);
        self.offset = vec2(
            (screen.0 - self.world_width * self.scale) / 2.0,
            (screen.1 - self.world_height * self.scale) / 2.0,
        );
    }

    #[inline(always)]
    fn to_screen(&self, x: f64, y: f64) -> Vec2 {
        self.offset + vec2(x as f32, y as f32) * self.scale
    }

    /// Main rendering function, draws all game elements.
    pub fn render(&mut self, simulation: &Simulation, overlay: ScentOverlay) {
        self.fit_to_screen();
        clear_background(Color::from_hex(BACKGROUND_COLOR_VAL));
        draw_rectangle(
            self.offset.x,
            self.offset.y,
            self.world_width * self.scale,
            self.world_height * self.scale,
            Color::from_hex(GROUND_COLOR_VAL),
        );

        if overlay != ScentOverlay::Hidden {
            for colony in simulation.colonies() {
                self.draw_scent(colony, overlay);
            }
        }
        for colony in simulation.colonies() {
            self.draw_nest(colony);
        }
        self.draw_food(simulation);
        self.draw_ants(simulation);
    }

    fn draw_scent(&self, colony: &Colony, overlay: ScentOverlay) {
        let field: &ScentField = match overlay {
            ScentOverlay::Food => &colony.food_scent,
            ScentOverlay::Nest => &colony.nest_scent,
            ScentOverlay::Hidden => return,
        };
        let tint = COLONY_COLORS[colony.colony_id as usize % COLONY_COLORS.len()];
        let cell = field.cell_size() as f32 * self.scale;
        for row in 0..field.rows() {
            for col in 0..field.cols() {
                let Some(value) = field.intensity_at(col, row) else {
                    continue;
                };
                if value < 1.0 {
                    continue;
                }
                let alpha = (value / SCENT_STRENGTH).clamp(0.0, 1.0) as f32 * 0.5;
                let top_left = self.to_screen(
                    col as f64 * field.cell_size(),
                    row as f64 * field.cell_size(),
                );
                draw_rectangle(
                    top_left.x,
                    top_left.y,
                    cell,
                    cell,
                    Color::new(tint.r, tint.g, tint.b, alpha),
                );
            }
        }
    }

    fn draw_nest(&self, colony: &Colony) {
        let center = self.to_screen(colony.nest.pos.x, colony.nest.pos.y);
        let radius = colony.nest.radius as f32 * self.scale;
        draw_circle(center.x, center.y, radius, Color::from_hex(NEST_COLOR_VAL));
        draw_circle(
            center.x,
            center.y,
            radius * NEST_ENTRANCE_RATIO,
            Color::from_hex(NEST_ENTRANCE_COLOR_VAL),
        );
        let rim = if colony.is_extinct() {
            BLACK
        } else {
            Color::from_hex(NEST_RIM_COLOR_VAL)
        };
        draw_circle_lines(center.x, center.y, radius, 2.0, rim);
    }

    fn draw_food(&self, simulation: &Simulation) {
        let color = Color::from_hex(FOOD_COLOR_VAL);
        for food in simulation.food_views() {
            if !food.is_active() {
                continue;
            }
            let center = self.to_screen(food.x, food.y);
            draw_circle(center.x, center.y, food.radius as f32 * self.scale, color);
        }
    }

    fn draw_ants(&self, simulation: &Simulation) {
        let radius = (ANT_DRAW_RADIUS * self.scale).max(1.0);
        for ant in simulation.ant_views() {
            if ant.is_eliminated() {
                continue;
            }
            let color = COLONY_COLORS[ant.colony_id as usize % COLONY_COLORS.len()];
            let center = self.to_screen(ant.x, ant.y);
            draw_circle(center.x, center.y, radius, color);
            if ant.carrying {
                draw_circle(
                    center.x,
                    center.y,
                    radius * 0.5,
                    Color::from_hex(FOOD_COLOR_VAL),
                );
            }
        }
    }
}
