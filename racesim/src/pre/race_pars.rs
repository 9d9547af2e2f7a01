/// * `width` - (px) Width of the drawing surface (origin is centered)
/// * `height` - (px) Height of the drawing surface (origin is centered)
/// * `title` - Title of the race window
/// * `d_start_offset` - (px) Distance between the bottom edge and the start positions
/// * `d_finish_offset` - (px) Distance between the top edge and the finish line
/// * `step_dist_range` - (px) Range [min, max) of the random step distance per move, min >= 1
/// * `no_racers_range` - Allowed range [min, max] for the number of racers
#[derive(Debug, Clone)]
pub struct RacePars {
    pub width: f64,
    pub height: f64,
    pub title: String,
    pub d_start_offset: f64,
    pub d_finish_offset: f64,
    pub step_dist_range: [u32; 2],
    pub no_racers_range: [u32; 2],
}

impl Default for RacePars {
    fn default() -> Self {
        RacePars {
            width: 500.0,
            height: 500.0,
            title: String::from("Turtle Racing Game"),
            d_start_offset: 20.0,
            d_finish_offset: 10.0,
            step_dist_range: [1, 20],
            no_racers_range: [2, 10],
        }
    }
}
