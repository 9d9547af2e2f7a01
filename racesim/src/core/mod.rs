pub mod handle_race;
pub mod palette;
pub mod race;
pub mod racer;
pub mod surface;
