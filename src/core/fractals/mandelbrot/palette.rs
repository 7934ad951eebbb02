use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::max_iterations::MaxIterations;

/// Colour given to points that never escaped within the iteration cap.
pub const CONVERGED_COLOUR: Colour = Colour::BLUE;

/// Full channel swing across the whole gradient: two 0-255 ramps.
const GRADIENT_RANGE: f64 = 510.0;

/// Lookup table from escape iteration to colour.
///
/// Holds `max_iterations + 1` entries. The first half of the gradient ramps red into green,
/// the second half ramps green into blue, and the final slot is [`CONVERGED_COLOUR`].
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colours: Vec<Colour>,
}

impl Palette {
    #[must_use]
    pub fn build(max_iterations: MaxIterations) -> Self {
        let max = max_iterations.get() as usize;
        let scale = GRADIENT_RANGE / max as f64;
        // odd counts give the extra slot to the red half, keeping index 0 pure red
        let first_half = max.div_ceil(2);

        let level = |offset: usize| (offset as f64 * scale) as u8;

        let hot_to_mid = (0..first_half).map(|i| Colour::rgb(255 - level(i), level(i), 0));
        let mid_to_cold = (0..max - first_half).map(|j| Colour::rgb(0, 255 - level(j), level(j)));

        let mut colours = Vec::with_capacity(max + 1);
        colours.extend(hot_to_mid);
        colours.extend(mid_to_cold);
        colours.push(CONVERGED_COLOUR);

        Self { colours }
    }

    /// Colour for an escape iteration. Counts past the cap are treated as converged.
    #[must_use]
    pub fn colour(&self, iterations: u32) -> Colour {
        let index = (iterations as usize).min(self.colours.len() - 1);
        self.colours[index]
    }

    #[must_use]
    pub fn colours(&self) -> &[Colour] {
        &self.colours
    }
}

impl ColourMap<u32> for Palette {
    fn map(&self, iterations: u32) -> Colour {
        self.colour(iterations)
    }

    fn display_name(&self) -> &str {
        "Red-green-blue escape palette"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(max_iterations: u32) -> Palette {
        Palette::build(MaxIterations::new(max_iterations).unwrap())
    }

    #[test]
    fn test_palette_has_one_slot_per_iteration_plus_sentinel() {
        for max in [1, 2, 3, 49, 50, 51, 600] {
            assert_eq!(palette(max).colours().len(), max as usize + 1);
        }
    }

    #[test]
    fn test_first_entry_is_pure_red() {
        for max in [1, 2, 7, 50, 1000] {
            assert_eq!(palette(max).colour(0), Colour::RED);
        }
    }

    #[test]
    fn test_last_entry_is_converged_blue() {
        for max in [1, 2, 7, 50, 1000] {
            assert_eq!(palette(max).colour(max), CONVERGED_COLOUR);
        }
    }

    #[test]
    fn test_sentinel_never_appears_inside_gradient() {
        for max in [1, 2, 3, 4, 5, 50, 51, 255, 511, 2000] {
            let p = palette(max);
            let gradient = &p.colours()[..max as usize];

            assert!(
                gradient.iter().all(|&c| c != CONVERGED_COLOUR),
                "sentinel colour found in gradient for max {}",
                max
            );
        }
    }

    #[test]
    fn test_known_entries_for_default_depth() {
        // 510 / 50 = 10.2 per step
        let p = palette(50);

        assert_eq!(p.colour(1), Colour::rgb(245, 10, 0));
        assert_eq!(p.colour(24), Colour::rgb(11, 244, 0));
        assert_eq!(p.colour(25), Colour::GREEN);
        assert_eq!(p.colour(26), Colour::rgb(0, 245, 10));
        assert_eq!(p.colour(49), Colour::rgb(0, 11, 244));
    }

    #[test]
    fn test_first_half_has_no_blue_and_second_half_has_no_red() {
        let p = palette(64);

        assert!(p.colours()[..32].iter().all(|c| c.b == 0));
        assert!(p.colours()[32..64].iter().all(|c| c.r == 0));
    }

    #[test]
    fn test_odd_depth_fills_every_slot() {
        let p = palette(5);

        // halves of 3 and 2 entries, 102 per step
        assert_eq!(
            p.colours(),
            &[
                Colour::rgb(255, 0, 0),
                Colour::rgb(153, 102, 0),
                Colour::rgb(51, 204, 0),
                Colour::rgb(0, 255, 0),
                Colour::rgb(0, 153, 102),
                CONVERGED_COLOUR,
            ]
        );
    }

    #[test]
    fn test_gradient_keeps_moving_past_510_iterations() {
        let p = palette(1020);

        assert_ne!(p.colour(0), p.colour(2));
        assert_ne!(p.colour(510), p.colour(512));
    }

    #[test]
    fn test_counts_past_cap_clamp_to_sentinel() {
        assert_eq!(palette(10).colour(11), CONVERGED_COLOUR);
        assert_eq!(palette(10).colour(u32::MAX), CONVERGED_COLOUR);
    }

    #[test]
    fn test_colour_map_port_matches_lookup() {
        let p = palette(20);

        for iterations in 0..=20 {
            assert_eq!(p.map(iterations), p.colour(iterations));
        }
    }
}
