//! Scene building: turns a state snapshot into triangles and HUD text
//!
//! Layering (back to front): stars, obstacles, pickups, rocket, HUD, then the
//! game over overlay. Text is described, not rasterized; font rendering
//! belongs to the backend.

use glam::Vec2;
use serde::Serialize;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::sim::{FuelPickup, Obstacle, Rocket, Snapshot, Star};

/// Segments per circle, by size class
const STAR_SEGMENTS: u32 = 6;
const ROUND_SEGMENTS: u32 = 16;

/// Fuel bar placement
const FUEL_BAR_POS: Vec2 = Vec2::new(10.0, 130.0);
const FUEL_BAR_WIDTH: f32 = 200.0;
const FUEL_BAR_HEIGHT: f32 = 20.0;
/// Below this much fuel the gauge turns red
const LOW_FUEL: f32 = 20.0;

const INSTRUCTIONS: [&str; 4] = [
    "Arrow Keys: Move",
    "UP: Thrust (uses fuel)",
    "Avoid red obstacles",
    "Collect green fuel",
];

/// Font size class for a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextSize {
    Large,
    Small,
}

/// How a label's position relates to its text box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// A line of HUD text for the backend to rasterize
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub color: [f32; 4],
    pub size: TextSize,
    pub anchor: Anchor,
}

impl TextLabel {
    fn new(text: impl Into<String>, pos: Vec2, color: [f32; 4], size: TextSize) -> Self {
        Self {
            text: text.into(),
            pos,
            color,
            size,
            anchor: Anchor::TopLeft,
        }
    }

    fn centered(mut self) -> Self {
        self.anchor = Anchor::Center;
        self
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub clear_color: [f32; 4],
    pub vertices: Vec<Vertex>,
    pub labels: Vec<TextLabel>,
}

impl Scene {
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Find a label by its exact text
    pub fn label(&self, text: &str) -> Option<&TextLabel> {
        self.labels.iter().find(|l| l.text == text)
    }
}

/// Build the full frame for a snapshot
pub fn build_scene(snapshot: &Snapshot) -> Scene {
    let mut scene = Scene {
        clear_color: colors::BACKGROUND,
        ..Default::default()
    };

    for star in &snapshot.stars {
        scene.vertices.extend(star_vertices(star));
    }
    for obstacle in &snapshot.obstacles {
        scene.vertices.extend(obstacle_vertices(obstacle));
    }
    for pickup in &snapshot.pickups {
        scene
            .vertices
            .extend(pickup_vertices(pickup, snapshot.pickup_bob_amplitude));
    }
    scene
        .vertices
        .extend(rocket_vertices(&snapshot.rocket, snapshot.thrusting));

    push_hud(&mut scene, snapshot);

    if snapshot.is_game_over() {
        push_game_over(&mut scene, snapshot);
    }

    scene
}

fn star_vertices(star: &Star) -> Vec<Vertex> {
    shapes::circle(star.pos, 1.0, colors::grey(star.brightness), STAR_SEGMENTS)
}

/// Red block with an orange core
fn obstacle_vertices(obstacle: &Obstacle) -> Vec<Vertex> {
    let (pos, size) = (obstacle.pos, obstacle.size);
    let mut vertices = shapes::rect(pos.x, pos.y, size.x, size.y, colors::RED);
    vertices.extend(shapes::rect(
        pos.x + 5.0,
        pos.y + 5.0,
        size.x - 10.0,
        size.y - 10.0,
        colors::ORANGE,
    ));
    vertices
}

/// Green ring with a white band and green core, drawn at its bobbing height
fn pickup_vertices(pickup: &FuelPickup, bob_amplitude: f32) -> Vec<Vertex> {
    let radius = pickup.size.x / 2.0;
    let center = Vec2::new(
        pickup.pos.x + radius,
        pickup.pos.y + pickup.bob_offset(bob_amplitude) + pickup.size.y / 2.0,
    );
    let mut vertices = shapes::circle(center, radius, colors::GREEN, ROUND_SEGMENTS);
    vertices.extend(shapes::circle(
        center,
        radius - 3.0,
        colors::WHITE,
        ROUND_SEGMENTS,
    ));
    vertices.extend(shapes::circle(center, 4.0, colors::GREEN, ROUND_SEGMENTS));
    vertices
}

fn rocket_vertices(rocket: &Rocket, thrusting: bool) -> Vec<Vertex> {
    let Vec2 { x, y } = rocket.pos;
    let Vec2 { x: w, y: h } = rocket.size;
    let mid = x + (w / 2.0).floor();

    // Notched arrow silhouette
    let mut vertices = shapes::quad(
        Vec2::new(mid, y),
        Vec2::new(x + w - 5.0, y + h),
        Vec2::new(mid, y + h - 10.0),
        Vec2::new(x + 5.0, y + h),
        colors::WHITE,
    );
    // Window and stripe
    vertices.extend(shapes::circle(
        Vec2::new(mid, y + 15.0),
        8.0,
        colors::RED,
        ROUND_SEGMENTS,
    ));
    vertices.extend(shapes::rect(x + 10.0, y + 25.0, w - 20.0, 20.0, colors::BLUE));

    if thrusting {
        vertices.extend(shapes::triangle(
            Vec2::new(x + 8.0, y + h),
            Vec2::new(mid, y + h + 15.0),
            Vec2::new(x + w - 8.0, y + h),
            colors::ORANGE,
        ));
        vertices.extend(shapes::triangle(
            Vec2::new(x + 12.0, y + h),
            Vec2::new(mid, y + h + 8.0),
            Vec2::new(x + w - 12.0, y + h),
            colors::YELLOW,
        ));
    }

    vertices
}

fn fuel_color(fuel: f32) -> [f32; 4] {
    if fuel > LOW_FUEL {
        colors::GREEN
    } else {
        colors::RED
    }
}

fn push_hud(scene: &mut Scene, snapshot: &Snapshot) {
    let fuel = snapshot.rocket.fuel;
    let gauge = fuel_color(fuel);

    scene.labels.push(TextLabel::new(
        format!("Score: {}", snapshot.score),
        Vec2::new(10.0, 10.0),
        colors::WHITE,
        TextSize::Large,
    ));
    scene.labels.push(TextLabel::new(
        format!("Fuel: {}", fuel as i32),
        Vec2::new(10.0, 50.0),
        gauge,
        TextSize::Large,
    ));
    scene.labels.push(TextLabel::new(
        format!("Lives: {}", snapshot.lives),
        Vec2::new(10.0, 90.0),
        colors::WHITE,
        TextSize::Large,
    ));

    // Fuel bar: 2px frame, fill inset by 2px on each side
    scene.vertices.extend(shapes::rect_outline(
        FUEL_BAR_POS.x,
        FUEL_BAR_POS.y,
        FUEL_BAR_WIDTH,
        FUEL_BAR_HEIGHT,
        2.0,
        colors::WHITE,
    ));
    let fraction = (fuel / snapshot.rocket.max_fuel).clamp(0.0, 1.0);
    let fill_width = ((FUEL_BAR_WIDTH - 4.0) * fraction).floor();
    scene.vertices.extend(shapes::rect(
        FUEL_BAR_POS.x + 2.0,
        FUEL_BAR_POS.y + 2.0,
        fill_width,
        FUEL_BAR_HEIGHT - 4.0,
        gauge,
    ));

    let column = snapshot.screen_width as f32 - 200.0;
    for (i, line) in INSTRUCTIONS.iter().enumerate() {
        scene.labels.push(TextLabel::new(
            *line,
            Vec2::new(column, 10.0 + i as f32 * 25.0),
            colors::GRAY,
            TextSize::Small,
        ));
    }
}

fn push_game_over(scene: &mut Scene, snapshot: &Snapshot) {
    let width = snapshot.screen_width as f32;
    let height = snapshot.screen_height as f32;
    let center = Vec2::new((width / 2.0).floor(), (height / 2.0).floor());

    scene
        .vertices
        .extend(shapes::rect(0.0, 0.0, width, height, colors::OVERLAY));

    scene.labels.push(
        TextLabel::new(
            "GAME OVER",
            center - Vec2::new(0.0, 50.0),
            colors::RED,
            TextSize::Large,
        )
        .centered(),
    );
    scene.labels.push(
        TextLabel::new(
            format!("Final Score: {}", snapshot.score),
            center,
            colors::WHITE,
            TextSize::Large,
        )
        .centered(),
    );
    scene.labels.push(
        TextLabel::new(
            "Press R to restart or Q to quit",
            center + Vec2::new(0.0, 50.0),
            colors::WHITE,
            TextSize::Small,
        )
        .centered(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GamePhase, GameState};

    fn bare_snapshot() -> Snapshot {
        let mut state = GameState::with_seed(1);
        state.stars.clear();
        state.snapshot()
    }

    fn has_color(scene: &Scene, color: [f32; 4]) -> bool {
        scene.vertices.iter().any(|v| v.color == color)
    }

    #[test]
    fn test_hud_labels() {
        let mut snapshot = bare_snapshot();
        snapshot.score = 1234;
        snapshot.rocket.fuel = 57.9;

        let scene = build_scene(&snapshot);
        assert!(scene.label("Score: 1234").is_some());
        assert!(scene.label("Lives: 3").is_some());
        let fuel = scene.label("Fuel: 57").expect("fuel label");
        assert_eq!(fuel.color, colors::GREEN);
        let hint = scene.label("Arrow Keys: Move").expect("instructions");
        assert_eq!(hint.pos, Vec2::new(600.0, 10.0));
        assert!(scene.label("GAME OVER").is_none());
    }

    #[test]
    fn test_low_fuel_turns_red() {
        let mut snapshot = bare_snapshot();
        snapshot.rocket.fuel = 20.0;

        let scene = build_scene(&snapshot);
        assert_eq!(scene.label("Fuel: 20").map(|l| l.color), Some(colors::RED));
    }

    #[test]
    fn test_flames_only_while_thrusting() {
        let mut snapshot = bare_snapshot();
        snapshot.thrusting = false;
        let idle = build_scene(&snapshot);
        assert!(!has_color(&idle, colors::YELLOW));

        snapshot.thrusting = true;
        let burning = build_scene(&snapshot);
        assert!(has_color(&burning, colors::YELLOW));
        assert_eq!(burning.vertices.len(), idle.vertices.len() + 6);
    }

    #[test]
    fn test_empty_tank_has_no_fill() {
        let mut snapshot = bare_snapshot();
        let full = build_scene(&snapshot);

        snapshot.rocket.fuel = 0.0;
        let empty = build_scene(&snapshot);
        // Fill rect collapses to nothing
        assert_eq!(empty.vertices.len(), full.vertices.len() - 6);
    }

    #[test]
    fn test_entities_are_drawn() {
        let mut state = GameState::with_seed(2);
        state.stars.truncate(5);
        state.obstacles.push(Obstacle::new(
            Vec2::new(500.0, 100.0),
            Vec2::new(30.0, 80.0),
            4.0,
        ));
        let pickup = FuelPickup::new(Vec2::new(600.0, 200.0), state.config());
        state.pickups.push(pickup);

        let scene = build_scene(&state.snapshot());
        let stars = 5 * STAR_SEGMENTS as usize * 3;
        let obstacle = 12;
        let pickup = 3 * ROUND_SEGMENTS as usize * 3;
        let rocket = 6 + ROUND_SEGMENTS as usize * 3 + 6;
        let hud = 24 + 6;
        assert_eq!(scene.vertices.len(), stars + obstacle + pickup + rocket + hud);
        assert!(has_color(&scene, colors::ORANGE));
    }

    #[test]
    fn test_pickup_drawn_at_bob_height() {
        let config = crate::tuning::GameConfig::default();
        let mut pickup = FuelPickup::new(Vec2::new(600.0, 200.0), &config);
        pickup.bob_phase = std::f32::consts::FRAC_PI_2;

        let verts = pickup_vertices(&pickup, 3.0);
        // First vertex of the fan is the center: 200 + 3 + 10
        assert!((verts[0].position[1] - 213.0).abs() < 1e-4);
        assert_eq!(verts[0].position[0], 610.0);
    }

    #[test]
    fn test_game_over_overlay() {
        let mut snapshot = bare_snapshot();
        snapshot.phase = GamePhase::GameOver;
        snapshot.score = 321;

        let scene = build_scene(&snapshot);
        assert!(has_color(&scene, colors::OVERLAY));
        let title = scene.label("GAME OVER").expect("title");
        assert_eq!(title.anchor, Anchor::Center);
        assert_eq!(title.pos, Vec2::new(400.0, 250.0));
        assert!(scene.label("Final Score: 321").is_some());
        assert!(scene.label("Press R to restart or Q to quit").is_some());
    }
}
