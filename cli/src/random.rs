use nanorand::{Rng, WyRand};

pub struct Random {
	rng: WyRand,
}

impl Random {
	pub fn new() -> Self {
		Self { rng: WyRand::new() }
	}
}

impl exact_core::Random for Random {
	#[allow(clippy::cast_precision_loss)]
	fn uniform(&mut self) -> f64 {
		// top 53 bits of a WyRand word, scaled into [0, 1)
		(self.rng.generate::<u64>() >> 11) as f64 / (1u64 << 53) as f64
	}
}
