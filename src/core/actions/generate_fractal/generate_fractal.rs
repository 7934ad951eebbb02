use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Sweeps every pixel of the algorithm's grid on the calling thread, row by row.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Output> {
    let side = algorithm.resolution().get();

    (0..side)
        .flat_map(|y| (0..side).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
