use rand::seq::SliceRandom;
use rand::Rng;

/// PALETTE contains the distinct CSS color names that can be assigned to the racers. Its size
/// limits the maximum number of racers per race since every racer must get a unique color (this
/// is assured by check_race_pars).
pub const PALETTE: [&str; 10] = [
    "red", "green", "black", "cyan", "yellow", "purple", "blue", "pink", "brown", "orange",
];

/// draw_colors shuffles the palette once and returns the first no_racers colors, i.e. the colors
/// are drawn without replacement. The order of the returned colors determines the lane order and
/// the iteration order of the race loop.
pub fn draw_colors<R: Rng>(no_racers: usize, rng: &mut R) -> Vec<String> {
    let mut palette: Vec<&str> = PALETTE.to_vec();
    palette.shuffle(rng);

    palette
        .iter()
        .take(no_racers)
        .map(|&color| color.to_owned())
        .collect()
}
