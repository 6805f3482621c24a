use rand::Rng;

/// Draws one weight uniformly from `[low, high]`.
///
/// Networks initialize their weights from `U(-1, 1)`; taking the generator
/// as an argument keeps initialization seedable and reproducible in tests.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    rng.gen_range(low..=high)
}

// --- Tests ---
#[cfg(test)]
#[path = "init_test.rs"]
mod tests; // Link to the test file
