use helpers::geometry::Point2d;

#[derive(Debug, Clone, Default)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone)]
pub struct RacerState {
    pub color_name: String,
    pub pos: Point2d,
}

#[derive(Debug, Clone, Default)]
pub struct RaceState {
    pub racer_states: Vec<RacerState>,
    pub cur_round: u32,
    pub winner_color: Option<String>,
}
