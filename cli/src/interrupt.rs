use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Ctrl-C flips a shared flag that the simplifier polls between primes.
/// The flag stays set until the next prompt clears it; pressing Ctrl-C
/// again while a press is still pending aborts the process outright.
pub struct CtrlC {
	interrupted: Arc<AtomicBool>,
}

impl CtrlC {
	pub fn install() -> Self {
		let interrupted = Arc::new(AtomicBool::new(false));
		let flag = Arc::clone(&interrupted);
		let result = ctrlc::set_handler(move || {
			if flag.swap(true, Ordering::SeqCst) {
				// the previous press was never consumed
				std::process::exit(1);
			}
		});
		if result.is_err() {
			eprintln!("warning: Ctrl-C handling is unavailable");
		}
		Self { interrupted }
	}

	/// Called before each evaluation so a stale press cannot cancel it.
	pub fn clear(&self) {
		self.interrupted.store(false, Ordering::SeqCst);
	}
}

impl exact_core::Interrupt for CtrlC {
	fn should_interrupt(&self) -> bool {
		self.interrupted.load(Ordering::Relaxed)
	}
}

/// Interrupts as soon as either source does; used to run the simplifier
/// under a time budget while keeping it Ctrl-C responsive.
pub struct Either<'a, A, B> {
	pub a: &'a A,
	pub b: &'a B,
}

impl<A: exact_core::Interrupt, B: exact_core::Interrupt> exact_core::Interrupt
	for Either<'_, A, B>
{
	fn should_interrupt(&self) -> bool {
		self.a.should_interrupt() || self.b.should_interrupt()
	}
}
