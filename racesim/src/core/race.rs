use crate::core::racer::{create_racers, Racer};
use crate::core::surface::Surface;
use crate::interfaces::gui_interface::{RaceState, RacerState, RgbColor};
use crate::post::race_result::RaceResult;
use crate::pre::race_pars::RacePars;
use anyhow::Context;
use rand::Rng;

/// StepSource yields the forward distance for the next individual racer move. The race loop only
/// sees this trait such that the stepping algorithm stays independent of the concrete random
/// source and can be driven deterministically in tests.
pub trait StepSource {
    fn next_dist(&mut self) -> f64;
}

/// RandomSteps draws uniform random integer step distances from [min, max) (lower bound
/// inclusive, upper bound exclusive).
#[derive(Debug)]
pub struct RandomSteps<R: Rng> {
    rng: R,
    step_dist_range: [u32; 2],
}

impl<R: Rng> RandomSteps<R> {
    pub fn new(step_dist_range: [u32; 2], rng: R) -> RandomSteps<R> {
        RandomSteps {
            rng,
            step_dist_range,
        }
    }
}

impl<R: Rng> StepSource for RandomSteps<R> {
    fn next_dist(&mut self) -> f64 {
        self.rng
            .gen_range(self.step_dist_range[0]..self.step_dist_range[1]) as f64
    }
}

#[derive(Debug)]
pub struct Race {
    pub surface: Surface,
    pub racers: Vec<Racer>,
    pub cur_round: u32,
    next_idx: usize,
    winner_idx: Option<usize>,
}

impl Race {
    /// Race::new creates the racers from the inserted (already shuffled) colors and places them
    /// at their start positions. The inserted color order determines the iteration order of the
    /// race loop.
    pub fn new(race_pars: &RacePars, colors: &[String]) -> Race {
        let surface = Surface::new(race_pars);
        let racers = create_racers(&surface, colors);

        Race {
            surface,
            racers,
            cur_round: 0,
            next_idx: 0,
            winner_idx: None,
        }
    }

    // ---------------------------------------------------------------------------------------------
    // MAIN METHODS --------------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// The method advances the race by exactly one individual racer move. Execution order:
    /// 1. Increment the round counter if a new round starts (the racers move round-robin in
    /// creation order).
    /// 2. Move the next racer forward by a distance drawn from the step source.
    /// 3. Check the finish condition immediately after the move (not only at round boundaries).
    /// The first racer, in iteration order, whose y coordinate reaches the finish line ends the
    /// race at once, even if the other racers have not moved in the current round. Ties are
    /// therefore impossible and the creation order decides among racers that would cross in the
    /// same round. Once a winner exists, further calls do not move any racer.
    pub fn advance_next(&mut self, steps: &mut dyn StepSource) -> Option<usize> {
        if self.winner_idx.is_some() {
            return self.winner_idx;
        }

        if self.next_idx == 0 {
            self.cur_round += 1;
        }

        let racer = &mut self.racers[self.next_idx];
        racer.forward(steps.next_dist());

        if racer.pos.y >= self.surface.finish_y {
            self.winner_idx = Some(self.next_idx);
        } else {
            self.next_idx = (self.next_idx + 1) % self.racers.len();
        }

        self.winner_idx
    }

    /// The method advances the race until the current round is completed or a winner is found,
    /// whichever comes first.
    pub fn simulate_round(&mut self, steps: &mut dyn StepSource) -> Option<usize> {
        loop {
            if self.advance_next(steps).is_some() {
                break;
            }

            // next_idx wrapped around, i.e. every racer has moved in the current round
            if self.next_idx == 0 {
                break;
            }
        }

        self.winner_idx
    }

    // ---------------------------------------------------------------------------------------------
    // METHODS (GETTERS) ---------------------------------------------------------------------------
    // ---------------------------------------------------------------------------------------------

    /// get_finished checks if the race is over, i.e. if a racer has crossed the finish line.
    pub fn get_finished(&self) -> bool {
        self.winner_idx.is_some()
    }

    pub fn get_winner(&self) -> Option<&Racer> {
        self.winner_idx.map(|idx| &self.racers[idx])
    }

    /// get_racer_colors converts the racers' CSS color names into RGB colors for plotting (in
    /// creation order).
    pub fn get_racer_colors(&self) -> anyhow::Result<Vec<RgbColor>> {
        let mut colors = Vec::with_capacity(self.racers.len());

        for racer in self.racers.iter() {
            let tmp_color = racer
                .color
                .parse::<css_color_parser::Color>()
                .context("Could not parse CSS color name!")?;

            colors.push(RgbColor {
                r: tmp_color.r,
                g: tmp_color.g,
                b: tmp_color.b,
            });
        }

        Ok(colors)
    }

    /// get_race_state returns a plain snapshot of the current race state for the GUI.
    pub fn get_race_state(&self) -> RaceState {
        RaceState {
            racer_states: self
                .racers
                .iter()
                .map(|racer| RacerState {
                    color_name: racer.color.to_owned(),
                    pos: racer.pos.to_owned(),
                })
                .collect(),
            cur_round: self.cur_round,
            winner_color: self.get_winner().map(|racer| racer.color.to_owned()),
        }
    }

    /// get_race_result returns a race result struct once a winner exists.
    pub fn get_race_result(&self) -> Option<RaceResult> {
        self.get_winner().map(|winner| RaceResult {
            winner_color: winner.color.to_owned(),
            no_rounds: self.cur_round,
            no_racers: self.racers.len(),
        })
    }
}
