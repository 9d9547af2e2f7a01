use crate::pre::race_pars::RacePars;
use helpers::geometry::Point2d;

/// Surface represents the bounded 2D drawing surface of the race. The origin is centered and the
/// y axis points up, i.e. the racers start near the bottom edge (negative y) and the finish line
/// is located near the top edge (positive y).
#[derive(Debug, Clone)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub start_y: f64,
    pub finish_y: f64,
}

impl Surface {
    pub fn new(race_pars: &RacePars) -> Surface {
        Surface {
            width: race_pars.width,
            height: race_pars.height,
            title: race_pars.title.to_owned(),
            start_y: -race_pars.height / 2.0 + race_pars.d_start_offset,
            finish_y: race_pars.height / 2.0 - race_pars.d_finish_offset,
        }
    }

    /// start_pos returns the start position of the racer with the inserted index (0-based) for a
    /// field of no_racers racers. The racers are distributed evenly along the bottom edge such
    /// that none of them starts at an extreme edge of the surface.
    pub fn start_pos(&self, idx: usize, no_racers: usize) -> Point2d {
        let spacing_x = self.width / (no_racers + 1) as f64;

        Point2d {
            x: -self.width / 2.0 + (idx + 1) as f64 * spacing_x,
            y: self.start_y,
        }
    }

    /// get_axes_expansion returns the axes limits [x_min, x_max, y_min, y_max] of the surface,
    /// expanded by the inserted margin on every side.
    pub fn get_axes_expansion(&self, margin: f64) -> [f64; 4] {
        [
            -self.width / 2.0 - margin,
            self.width / 2.0 + margin,
            -self.height / 2.0 - margin,
            self.height / 2.0 + margin,
        ]
    }
}
