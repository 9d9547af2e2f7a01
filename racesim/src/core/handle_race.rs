use crate::core::race::{Race, StepSource};
use crate::post::race_result::RaceResult;
use crate::pre::race_pars::RacePars;

/// handle_race creates and simulates a race on the basis of the inserted parameters and colors,
/// and returns the result for post-processing. The race is executed headlessly, i.e. without any
/// drawing side effects (the GUI drives the race loop itself to render every individual move).
/// There is no maximum round count, but termination is guaranteed as long as the step source
/// yields strictly positive distances (assured by check_race_pars for the random step source).
pub fn handle_race(
    race_pars: &RacePars,
    colors: &[String],
    steps: &mut dyn StepSource,
) -> anyhow::Result<RaceResult> {
    // create the race
    let mut race = Race::new(race_pars, colors);

    // simulate the race -> execute individual moves until a racer crosses the finish line
    while !race.get_finished() {
        race.advance_next(steps);
    }

    // return race result (the winner exists at this point)
    race.get_race_result()
        .ok_or_else(|| anyhow::anyhow!("Race finished without a winner!"))
}
