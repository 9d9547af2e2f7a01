use gui::core::gui::RacePlot;
use racesim::core::palette::draw_colors;
use racesim::core::race::{Race, RandomSteps};
use racesim::pre::check_race_pars::check_race_pars;
use racesim::pre::race_pars::RacePars;
use racesim::pre::read_racer_count::read_racer_count;
use std::io;

fn main() -> anyhow::Result<()> {
    // PRE-PROCESSING ------------------------------------------------------------------------------
    // set up the race parameters and check them
    let race_pars = RacePars::default();
    check_race_pars(&race_pars)?;

    // get the number of racers from the console input (re-prompts until the input is valid)
    let stdin = io::stdin();
    let no_racers = read_racer_count(
        &mut stdin.lock(),
        &mut io::stdout(),
        race_pars.no_racers_range,
    )?;

    // shuffle the palette and take the colors for the chosen number of racers (the color order
    // determines the lane order and the iteration order of the race loop)
    let mut rng = rand::thread_rng();
    let colors = draw_colors(no_racers as usize, &mut rng);

    // print race details
    println!(
        "INFO: Starting a race with {} turtles on a {:.0}x{:.0}px surface",
        no_racers, race_pars.width, race_pars.height
    );

    // EXECUTION -----------------------------------------------------------------------------------
    // create the race and the random step source
    let race = Race::new(&race_pars, &colors);
    let steps = RandomSteps::new(race_pars.step_dist_range, rng);

    // start GUI (must be done in the main thread) -> the race is advanced move by move from
    // within the GUI and the winner is printed there as well, since run_native does not return
    let gui = RacePlot::new(race, Box::new(steps))?;
    let mut native_options = eframe::NativeOptions::default();
    native_options.initial_window_size = Some(eframe::egui::Vec2::new(
        race_pars.width as f32,
        race_pars.height as f32,
    ));
    native_options.resizable = false;
    eframe::run_native(Box::new(gui), native_options);

    Ok(())
}
