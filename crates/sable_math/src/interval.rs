/// Closed range of ray parameters or channel values.
///
/// Intersection code reads `min`/`max` directly and applies its own
/// open or closed bound at each end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// `[0, 1]`, the displayable range of a color channel.
    pub const UNIT: Interval = Interval::new(0.0, 1.0);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Pull `x` into `[min, max]`. NaN maps to `min`.
    pub fn clamp(&self, x: f32) -> f32 {
        if x >= self.max {
            self.max
        } else if x >= self.min {
            x
        } else {
            self.min
        }
    }
}
