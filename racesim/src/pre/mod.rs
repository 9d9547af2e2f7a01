pub mod check_race_pars;
pub mod race_pars;
pub mod read_racer_count;
