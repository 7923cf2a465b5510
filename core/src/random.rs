/// Uniform random source consumed by the random-integer constructor.
pub trait Random {
	/// Returns a uniform sample in `[0, 1)`.
	fn uniform(&mut self) -> f64;
}
