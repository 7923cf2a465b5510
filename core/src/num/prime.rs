use super::bigint::BASE;
use std::sync::{Mutex, OnceLock};

// Process-wide list of every prime discovered so far, in order. Only ever
// appended to; concurrent iterators extend it under the lock.
fn cache() -> &'static Mutex<Vec<i64>> {
	static PRIMES: OnceLock<Mutex<Vec<i64>>> = OnceLock::new();
	PRIMES.get_or_init(|| Mutex::new(vec![2, 3]))
}

/// Iterator over the shared prime list. Each instance holds only a cursor;
/// walking past the end of the list grows it by trial division. Candidates
/// reaching [`BASE`] exhaust the iterator.
pub(crate) struct Primes {
	cursor: usize,
}

impl Primes {
	pub(crate) fn new() -> Self {
		Self { cursor: 0 }
	}
}

impl Iterator for Primes {
	type Item = i64;

	fn next(&mut self) -> Option<i64> {
		let mut primes = cache().lock().expect("prime cache lock poisoned");
		if self.cursor < primes.len() {
			let p = primes[self.cursor];
			self.cursor += 1;
			return Some(p);
		}
		let mut candidate = primes[primes.len() - 1] + 2;
		loop {
			if candidate >= BASE {
				return None;
			}
			if is_prime(&primes, candidate) {
				break;
			}
			candidate += 2;
		}
		primes.push(candidate);
		self.cursor += 1;
		Some(candidate)
	}
}

// The shared list always holds every prime below the candidate, so trial
// division up to the square root is complete.
fn is_prime(primes: &[i64], candidate: i64) -> bool {
	for &p in primes {
		if p * p > candidate {
			break;
		}
		if candidate % p == 0 {
			return false;
		}
	}
	true
}

#[cfg(test)]
mod tests {
	use super::Primes;

	#[test]
	fn test_first_primes() {
		let first: Vec<i64> = Primes::new().take(10).collect();
		assert_eq!(first, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
	}

	#[test]
	fn test_cursors_are_independent() {
		let mut a = Primes::new();
		assert_eq!(a.next(), Some(2));
		assert_eq!(a.next(), Some(3));
		assert_eq!(a.next(), Some(5));
		let mut b = Primes::new();
		assert_eq!(b.next(), Some(2));
		assert_eq!(a.next(), Some(7));
		assert_eq!(b.next(), Some(3));
	}

	#[cfg(feature = "small-radix")]
	#[test]
	fn test_exhaustion_below_radix() {
		let mut primes = Primes::new();
		let last = (&mut primes).take_while(|&p| p < 256).last();
		assert_eq!(last, Some(251));
		assert_eq!(primes.next(), None);
		assert_eq!(primes.next(), None);
	}
}
