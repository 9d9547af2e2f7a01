use crate::core::palette::PALETTE;
use crate::pre::race_pars::RacePars;
use anyhow::Context;
use helpers::general::InputValueError;

/// check_race_pars assures that the inserted race parameters are within reasonable limits and
/// raises an error if not.
pub fn check_race_pars(race_pars: &RacePars) -> anyhow::Result<()> {
    // SURFACE -------------------------------------------------------------------------------------
    if race_pars.width <= 0.0 || race_pars.height <= 0.0 {
        return Err(InputValueError).context(format!(
            "Surface dimensions are {:.1}x{:.1}px, but must be positive!",
            race_pars.width, race_pars.height
        ));
    }

    if race_pars.d_start_offset < 0.0
        || race_pars.d_finish_offset < 0.0
        || race_pars.d_start_offset + race_pars.d_finish_offset >= race_pars.height
    {
        return Err(InputValueError).context(
            "Start and finish offsets must be non-negative and leave a positive race distance \
            between the start positions and the finish line!",
        );
    }

    // STEPPING ------------------------------------------------------------------------------------
    if race_pars.step_dist_range[0] < 1 || race_pars.step_dist_range[1] <= race_pars.step_dist_range[0]
    {
        return Err(InputValueError).context(format!(
            "step_dist_range is [{}, {}), but must be a non-empty range with a minimum of at \
            least 1 such that every move strictly advances the racer!",
            race_pars.step_dist_range[0], race_pars.step_dist_range[1]
        ));
    }

    // RACERS --------------------------------------------------------------------------------------
    if race_pars.no_racers_range[0] < 2 || race_pars.no_racers_range[1] < race_pars.no_racers_range[0]
    {
        return Err(InputValueError).context(
            "no_racers_range must be a non-empty range with a minimum of at least 2 racers!",
        );
    }

    if race_pars.no_racers_range[1] as usize > PALETTE.len() {
        return Err(InputValueError).context(format!(
            "The maximum number of racers is {}, but the palette contains only {} distinct \
            colors (each racer must get a unique color)!",
            race_pars.no_racers_range[1],
            PALETTE.len()
        ));
    }

    Ok(())
}
