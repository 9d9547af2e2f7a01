pub mod core;
pub mod interfaces;
pub mod post;
pub mod pre;

#[cfg(test)]
mod test_helpers {
    use crate::core::race::StepSource;
    use crate::pre::race_pars::RacePars;

    /// FixedSteps yields a deterministic, cycling sequence of step distances such that the race
    /// loop can be tested without a random source.
    pub struct FixedSteps {
        dists: Vec<f64>,
        idx: usize,
    }

    impl FixedSteps {
        pub fn new(dists: Vec<f64>) -> FixedSteps {
            FixedSteps { dists, idx: 0 }
        }
    }

    impl StepSource for FixedSteps {
        fn next_dist(&mut self) -> f64 {
            let dist = self.dists[self.idx % self.dists.len()];
            self.idx += 1;
            dist
        }
    }

    pub fn default_pars() -> RacePars {
        RacePars::default()
    }

    pub fn colors(names: &[&str]) -> Vec<String> {
        names.iter().map(|&name| name.to_owned()).collect()
    }
}


#[cfg(test)]
mod check_race_pars_tests {
    use crate::pre::check_race_pars::check_race_pars;
    use crate::pre::race_pars::RacePars;

    #[test]
    fn test_default_pars_are_valid() {
        assert!(check_race_pars(&RacePars::default()).is_ok());
    }

    #[test]
    fn test_non_positive_surface_is_rejected() {
        let mut pars = RacePars::default();
        pars.width = 0.0;
        assert!(check_race_pars(&pars).is_err());
    }

    #[test]
    fn test_offsets_must_leave_race_distance() {
        let mut pars = RacePars::default();
        pars.d_start_offset = 300.0;
        pars.d_finish_offset = 250.0;
        assert!(check_race_pars(&pars).is_err());
    }

    #[test]
    fn test_step_dist_range_must_advance_strictly() {
        let mut pars = RacePars::default();
        pars.step_dist_range = [0, 20];
        assert!(check_race_pars(&pars).is_err());

        pars.step_dist_range = [5, 5];
        assert!(check_race_pars(&pars).is_err());
    }

    #[test]
    fn test_no_racers_range_must_fit_palette() {
        let mut pars = RacePars::default();
        pars.no_racers_range = [1, 10];
        assert!(check_race_pars(&pars).is_err());

        pars.no_racers_range = [2, 11];
        assert!(check_race_pars(&pars).is_err());
    }
}

#[cfg(test)]
mod palette_tests {
    use crate::core::palette::{draw_colors, PALETTE};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_colors_without_replacement() {
        let mut rng = StdRng::seed_from_u64(42);
        let colors = draw_colors(5, &mut rng);

        assert_eq!(colors.len(), 5);

        for (i, color) in colors.iter().enumerate() {
            assert!(PALETTE.contains(&color.as_str()));
            assert!(!colors[i + 1..].contains(color));
        }
    }

    #[test]
    fn test_draw_all_colors_covers_palette() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut colors = draw_colors(PALETTE.len(), &mut rng);
        colors.sort();

        let mut palette: Vec<String> = PALETTE.iter().map(|&c| c.to_owned()).collect();
        palette.sort();

        assert_eq!(colors, palette);
    }
}



#[cfg(test)]
mod handle_race_tests {
    use crate::core::handle_race::handle_race;
    use crate::test_helpers::{colors, default_pars, FixedSteps};

    #[test]
    fn test_deterministic_end_to_end_race() {
        // two racers with alternating step distances 19 and 1: starting at y = -230, the first
        // racer reaches the finish line at y = 240 with its 25th move (19 * 25 = 475 >= 470)
        let mut steps = FixedSteps::new(vec![19.0, 1.0]);
        let result = handle_race(&default_pars(), &colors(&["red", "blue"]), &mut steps).unwrap();

        assert_eq!(result.winner_color, "red");
        assert_eq!(result.no_rounds, 25);
        assert_eq!(result.no_racers, 2);
    }

    #[test]
    fn test_race_terminates_with_minimum_steps() {
        // even with the smallest allowed step distance of 1 the race must terminate since every
        // move strictly increases y
        let mut steps = FixedSteps::new(vec![1.0]);
        let result = handle_race(&default_pars(), &colors(&["red", "blue"]), &mut steps).unwrap();

        assert_eq!(result.winner_color, "red");
        assert_eq!(result.no_rounds, 470);
    }
}
