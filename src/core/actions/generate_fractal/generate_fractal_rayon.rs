use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Pixels are indexed row-major and collected in index order, so the output is identical to
/// [`generate_fractal`](super::generate_fractal::generate_fractal). Nothing is returned until
/// every pixel has been computed.
pub fn generate_fractal_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Output>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Output: Send,
{
    let resolution = algorithm.resolution();

    (0..resolution.pixel_count())
        .into_par_iter()
        .map(|index| algorithm.compute(resolution.point_at(index)))
        .collect()
}
