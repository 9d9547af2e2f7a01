/// RaceResult contains all race information that is required for post-processing the results.
#[derive(Debug, Clone)]
pub struct RaceResult {
    pub winner_color: String,
    pub no_rounds: u32,
    pub no_racers: usize,
}

impl RaceResult {
    /// print_winner prints the winning racer's color to the console output.
    pub fn print_winner(&self) {
        println!("The winning turtle is: {}!", self.winner_color);
    }
}
