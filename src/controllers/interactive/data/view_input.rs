/// Raw values read from the user for one new view: where to center and how far to zoom.
///
/// `zoom` is dimensionless, `1.0` being the initial full view and `2.0` half its width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewInput {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
}
