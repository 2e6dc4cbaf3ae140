//! Density-independent lengths

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    /// Whole device pixels for this length.
    ///
    /// The density is truncated before scaling, so a 16dp shadow is 16px at
    /// 1.5x and 32px at 2.75x. Integer layouts stay stable across frames.
    pub fn to_whole_px(&self, density: f32) -> i32 {
        let whole_density = density.max(1.0).trunc();
        (self.0 * whole_density) as i32
    }
}
