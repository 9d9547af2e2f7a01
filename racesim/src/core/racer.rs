use crate::core::surface::Surface;
use helpers::geometry::{Point2d, Vector2d};

/// * `color` - CSS color name, unique per race (used as the racer's identity and for plotting)
/// * `pos` - Current position in surface coordinates
/// * `heading` - Direction of forward motion, fixed for the whole race
#[derive(Debug, Clone)]
pub struct Racer {
    pub color: String,
    pub pos: Point2d,
    pub heading: Vector2d,
}

impl Racer {
    pub fn new(color: &str, start_pos: Point2d) -> Racer {
        // the default orientation is rightward, rotated by 90 degrees such that forward motion is
        // upward for the whole race
        let heading = Vector2d { dx: 1.0, dy: 0.0 }.normal_vector();

        Racer {
            color: color.to_owned(),
            pos: start_pos,
            heading,
        }
    }

    /// The method moves the racer forward by the inserted distance along its fixed heading. Since
    /// the heading is upward, only the y coordinate changes.
    pub fn forward(&mut self, dist: f64) {
        self.pos = self.pos.shift(&self.heading.mult(dist));
    }
}

/// create_racers creates one racer per inserted color, positioned evenly spaced along the bottom
/// edge of the surface in the inserted color order (which is also the iteration order of the race
/// loop).
pub fn create_racers(surface: &Surface, colors: &[String]) -> Vec<Racer> {
    let no_racers = colors.len();
    let mut racers = Vec::with_capacity(no_racers);

    for (idx, color) in colors.iter().enumerate() {
        racers.push(Racer::new(color, surface.start_pos(idx, no_racers)));
    }

    racers
}
