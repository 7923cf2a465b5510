use crate::error::Error;
use crate::random::Random;
use crate::result::EResult;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(not(feature = "small-radix"))]
pub(crate) const BASE: i64 = 1 << 25;
#[cfg(feature = "small-radix")]
pub(crate) const BASE: i64 = 1 << 8;

pub(crate) const ROOT_BASE: i64 = isqrt(BASE);
const BASE_SQUARED: i64 = BASE * BASE;

const fn isqrt(n: i64) -> i64 {
	let mut r = 1;
	while (r + 1) * (r + 1) <= n {
		r += 1;
	}
	r
}

/// Arbitrary-precision integer stored as little-endian digits in base
/// [`BASE`]. An empty digit vector is zero.
///
/// Digits are allowed to drift outside `[0, BASE)` (and may be negative)
/// between operations; `safe_max` tracks an upper bound on the magnitude of
/// any single digit so that carries only have to be propagated when the next
/// operation could overflow machine arithmetic. After [`Self::normalize`]
/// every digit except the most significant lies in `[0, BASE)`; the top
/// digit carries the sign.
#[derive(Clone, Default)]
pub(crate) struct BigInt {
	digits: Vec<i64>,
	safe_max: i64,
}

impl BigInt {
	pub(crate) fn new() -> Self {
		Self {
			digits: Vec::new(),
			safe_max: 0,
		}
	}

	pub(crate) fn from_i64(value: i64) -> Self {
		let mut n = Self::new();
		n.set_i64(value);
		n
	}

	pub(crate) fn reset(&mut self) {
		self.digits.clear();
		self.safe_max = 0;
	}

	pub(crate) fn set_i64(&mut self, mut value: i64) {
		self.reset();
		if value == 0 {
			return;
		}
		while value != 0 {
			self.digits.push(value % BASE);
			value /= BASE;
		}
		self.safe_max = BASE - 1;
	}

	/// Truncates towards zero. Non-finite inputs must be rejected by the
	/// caller.
	#[allow(clippy::cast_possible_truncation)]
	pub(crate) fn set_f64(&mut self, value: f64) {
		self.reset();
		let mut value = value.trunc();
		if value == 0.0 {
			return;
		}
		#[allow(clippy::cast_precision_loss)]
		let base = BASE as f64;
		while value != 0.0 {
			self.digits.push((value % base) as i64);
			value = (value / base).trunc();
		}
		self.safe_max = BASE - 1;
	}

	/// Lossy conversion to floating point.
	#[allow(clippy::cast_precision_loss)]
	pub(crate) fn value(&self) -> f64 {
		let mut res = 0.0;
		for &d in self.digits.iter().rev() {
			res = res * (BASE as f64) + d as f64;
		}
		res
	}

	fn trim(&mut self) {
		while self.digits.last() == Some(&0) {
			self.digits.pop();
		}
	}

	/// Propagates carries so that every digit except the most significant
	/// lies in `[0, BASE)`. Trailing zero digits are removed unless
	/// `keep_zeros` is set.
	pub(crate) fn normalize(&mut self, keep_zeros: bool) {
		if self.safe_max >= BASE {
			let mut carry = 0i64;
			for d in &mut self.digits {
				carry += *d;
				*d = carry.rem_euclid(BASE);
				carry = carry.div_euclid(BASE);
			}
			while carry != 0 {
				if -BASE < carry && carry < BASE {
					self.digits.push(carry);
					break;
				}
				self.digits.push(carry.rem_euclid(BASE));
				carry = carry.div_euclid(BASE);
			}
			self.safe_max = BASE - 1;
		}
		if !keep_zeros {
			self.trim();
		}
	}

	/// Sweeps borrows so that every digit lies in `[0, BASE)` and the top
	/// digit is non-zero (zero becomes the empty vector).
	///
	/// Precondition: the value is non-negative and already normalized.
	pub(crate) fn canonicalize(&mut self) {
		for i in 0..self.digits.len() {
			if self.digits[i] < 0 {
				self.digits[i] += BASE;
				self.digits[i + 1] -= 1;
			}
		}
		self.trim();
	}

	fn top_negative(&self) -> bool {
		matches!(self.digits.last(), Some(&d) if d < 0)
	}

	pub(crate) fn is_zero(&mut self) -> bool {
		self.normalize(false);
		self.digits.is_empty()
	}

	/// Non-mutating zero probe. Exact on carry-free states; a value holding
	/// digits that only cancel after a carry pass reads as non-zero.
	pub(crate) fn is_definitely_zero(&self) -> bool {
		self.digits.iter().all(|&d| d == 0)
	}

	pub(crate) fn is_negative(&mut self) -> bool {
		self.normalize(false);
		self.top_negative()
	}

	pub(crate) fn is_positive(&mut self) -> bool {
		self.normalize(false);
		matches!(self.digits.last(), Some(&d) if d > 0)
	}

	pub(crate) fn lsb(&self) -> i64 {
		match self.digits.first() {
			Some(&d) => (BASE + d) % BASE,
			None => 0,
		}
	}

	/// Precondition: both operands are canonical (see [`Self::canonicalize`]).
	pub(crate) fn compare(&self, other: &Self) -> Ordering {
		match self.digits.len().cmp(&other.digits.len()) {
			Ordering::Equal => (),
			ord => return ord,
		}
		for i in (0..self.digits.len()).rev() {
			match self.digits[i].cmp(&other.digits[i]) {
				Ordering::Equal => (),
				ord => return ord,
			}
		}
		Ordering::Equal
	}

	/// Clone of the absolute value in canonical form.
	pub(crate) fn abs_canonical(&self) -> Self {
		let mut c = self.clone();
		c.normalize(false);
		if c.top_negative() {
			c.negate();
		}
		c.canonicalize();
		c
	}

	// Carry-free elementwise merge; this is what makes chained additions
	// cheap. Normalizes first only when the combined digit bound could
	// overflow the machine accumulator.
	fn merge(&mut self, other: &Self, negate: bool) {
		if self.safe_max.saturating_add(other.safe_max) >= BASE_SQUARED {
			self.normalize(false);
			if self.safe_max.saturating_add(other.safe_max) >= BASE_SQUARED {
				// rare: the right-hand side itself carries large transient digits
				let mut tmp = other.clone();
				tmp.normalize(false);
				self.merge(&tmp, negate);
				return;
			}
		}
		if other.digits.len() > self.digits.len() {
			self.digits.resize(other.digits.len(), 0);
		}
		for (i, &d) in other.digits.iter().enumerate() {
			if negate {
				self.digits[i] -= d;
			} else {
				self.digits[i] += d;
			}
		}
		self.safe_max += other.safe_max;
	}

	pub(crate) fn add(&mut self, other: &Self) {
		self.merge(other, false);
	}

	pub(crate) fn sub(&mut self, other: &Self) {
		self.merge(other, true);
	}

	pub(crate) fn negate(&mut self) {
		for d in &mut self.digits {
			*d = -*d;
		}
	}

	/// `self = self * m + addend` for a machine digit `m` (`|m| < BASE`),
	/// with full carry propagation.
	pub(crate) fn mul_digit(&mut self, m: i64, addend: i64) {
		self.normalize(true);
		let mut carry = addend;
		for d in &mut self.digits {
			carry += *d * m;
			*d = carry.rem_euclid(BASE);
			carry = carry.div_euclid(BASE);
		}
		while carry != 0 {
			if -BASE < carry && carry < BASE {
				self.digits.push(carry);
				break;
			}
			self.digits.push(carry.rem_euclid(BASE));
			carry = carry.div_euclid(BASE);
		}
		self.safe_max = BASE - 1;
	}

	fn mul_by_digit_value(&mut self, m: i64) {
		if m == 0 {
			self.reset();
			return;
		}
		if self.safe_max <= (BASE_SQUARED - 1) / m.abs() {
			// the scaled digits still fit the accumulator, so the carry
			// pass can wait until the next normalization
			for d in &mut self.digits {
				*d *= m;
			}
			self.safe_max *= m.abs();
		} else {
			self.mul_digit(m, 0);
		}
	}

	pub(crate) fn mul(&mut self, other: &Self) {
		if self.digits.is_empty() || other.digits.is_empty() {
			self.reset();
			return;
		}
		if other.digits.len() == 1 && other.digits[0].abs() < BASE {
			self.mul_by_digit_value(other.digits[0]);
			return;
		}
		self.normalize(false);
		let mut rhs = other.clone();
		rhs.normalize(false);
		if self.digits.is_empty() || rhs.digits.is_empty() {
			self.reset();
			return;
		}
		if rhs.digits.len() == 1 {
			self.mul_by_digit_value(rhs.digits[0]);
			return;
		}
		*self = if self.digits.len() > 3 && rhs.digits.len() > 3 {
			Self::mul_split(&self.digits, &rhs.digits)
		} else {
			Self::mul_school(&self.digits, &rhs.digits)
		};
	}

	// Schoolbook multiplication with immediate carry handling. Only used for
	// small operands; larger ones go through mul_split.
	fn mul_school(a: &[i64], b: &[i64]) -> Self {
		let mut digits = vec![0i64; a.len() + b.len()];
		for (i, &ai) in a.iter().enumerate() {
			let mut acc = 0i64;
			for (j, &bj) in b.iter().enumerate() {
				acc += ai * bj + digits[i + j];
				digits[i + j] = acc.rem_euclid(BASE);
				acc = acc.div_euclid(BASE);
			}
			let mut k = i + b.len();
			while acc != 0 {
				acc += digits[k];
				if k + 1 == digits.len() {
					digits[k] = acc;
					break;
				}
				digits[k] = acc.rem_euclid(BASE);
				acc = acc.div_euclid(BASE);
				k += 1;
			}
		}
		let mut res = Self {
			digits,
			safe_max: BASE - 1,
		};
		res.trim();
		res
	}

	// Fast multiplication for large operands. Each left-hand digit is split
	// into two lanes of size ROOT_BASE so that per-lane products stay below
	// BASE_SQUARED and accumulation into the result buffer needs no carry
	// handling at all; the buffer is re-aligned by a scalar ROOT_BASE
	// multiply between the high-half and low-half passes. This is
	// carry-deferred school multiplication, not Karatsuba.
	fn mul_split(a: &[i64], b: &[i64]) -> Self {
		let mut result = Self {
			digits: vec![0i64; a.len() + b.len() - 1],
			safe_max: 0,
		};
		for (i, &ai) in a.iter().enumerate() {
			let hi = ai.div_euclid(ROOT_BASE);
			for (j, &bj) in b.iter().enumerate() {
				result.digits[i + j] += hi * bj;
			}
		}
		result.safe_max = i64::MAX;
		result.mul_digit(ROOT_BASE, 0);
		for (i, &ai) in a.iter().enumerate() {
			let lo = ai.rem_euclid(ROOT_BASE);
			for (j, &bj) in b.iter().enumerate() {
				result.digits[i + j] += lo * bj;
			}
		}
		result.safe_max = i64::MAX;
		result.normalize(false);
		result
	}

	/// Divides in place, leaving the quotient in `self` and returning the
	/// remainder. When the operand signs differ, both the quotient and the
	/// remainder come back negated.
	pub(crate) fn divmod(&mut self, other: &Self) -> EResult<Self> {
		self.normalize(false);
		let mut divisor = other.clone();
		divisor.normalize(false);
		if self.digits.is_empty() {
			return Ok(Self::new());
		}
		if divisor.digits.is_empty() {
			return Err(Error::DivideByZero);
		}
		if divisor.digits.len() == 1 {
			let rem = self.digit_divide(divisor.digits[0]);
			return Ok(Self::from_i64(rem));
		}
		let negative_self = self.top_negative();
		if negative_self {
			self.negate();
		}
		let negative_other = divisor.top_negative();
		if negative_other {
			divisor.negate();
		}
		self.canonicalize();
		divisor.canonicalize();
		let mut remainder = match self.compare(&divisor) {
			Ordering::Less => {
				let rem = Self {
					digits: std::mem::take(&mut self.digits),
					safe_max: self.safe_max,
				};
				self.safe_max = 0;
				rem
			}
			Ordering::Equal => {
				self.set_i64(1);
				Self::new()
			}
			Ordering::Greater => self.long_divide(&divisor),
		};
		if negative_self != negative_other {
			self.negate();
			remainder.negate();
		}
		Ok(remainder)
	}

	/// Divides in place by a machine digit (`d != 0`, `|d| < BASE`) and
	/// returns the scalar remainder.
	pub(crate) fn digit_divide(&mut self, d: i64) -> i64 {
		self.normalize(false);
		let mut overflow = 0i64;
		for i in (0..self.digits.len()).rev() {
			let t = overflow * BASE + self.digits[i];
			self.digits[i] = t / d;
			overflow = t % d;
		}
		self.trim();
		self.safe_max = BASE - 1;
		overflow
	}

	// Long division on canonical non-negative operands with self > divisor
	// and a divisor of at least two digits. The remainder window is seeded
	// with the divisor-sized top of self; quotient digits are accumulated
	// from estimates whose denominators are inflated by one, so an estimate
	// never exceeds the true digit and the inner loop refines in one or two
	// rounds.
	fn long_divide(&mut self, divisor: &Self) -> Self {
		let n = divisor.digits.len();
		let top = self.digits.len() - n;
		let mut remainder = Self {
			digits: self.digits[top..].to_vec(),
			safe_max: BASE - 1,
		};
		let d_top = divisor.digits[n - 1];
		let d_next = divisor.digits[n - 2];
		let mut quotient = vec![0i64; top + 1];
		for i in (0..=top).rev() {
			let mut q = 0i64;
			while remainder.compare(divisor) != Ordering::Less {
				let rl = remainder.digits.len();
				let r_top = remainder.digits[rl - 1];
				let r_next = remainder.digits[rl - 2];
				let mut est = if rl > n {
					(r_top * BASE + r_next) / (d_top + 1)
				} else {
					(r_top * BASE + r_next) / (d_top * BASE + d_next + 1)
				};
				if est < 1 {
					est = 1;
				}
				remainder.subtract_scaled(&divisor.digits, est);
				q += est;
			}
			quotient[i] = q;
			if i > 0 {
				remainder.digits.insert(0, self.digits[i - 1]);
				remainder.trim();
			}
		}
		self.digits = quotient;
		self.trim();
		self.safe_max = BASE - 1;
		remainder
	}

	// self -= operand * m, digit by digit with borrow handling. The caller
	// guarantees the result is non-negative.
	fn subtract_scaled(&mut self, operand: &[i64], m: i64) {
		let mut carry = 0i64;
		for i in 0..self.digits.len() {
			let prod = if i < operand.len() { operand[i] * m } else { 0 };
			carry += self.digits[i] - prod;
			self.digits[i] = carry.rem_euclid(BASE);
			carry = carry.div_euclid(BASE);
		}
		self.trim();
	}

	pub(crate) fn to_i64_checked(&self) -> Option<i64> {
		let mut n = self.clone();
		n.normalize(false);
		let negative = n.top_negative();
		if negative {
			n.negate();
		}
		n.canonicalize();
		let mut acc = 0i64;
		for &d in n.digits.iter().rev() {
			acc = acc.checked_mul(BASE)?.checked_add(d)?;
		}
		Some(if negative { -acc } else { acc })
	}

	/// Random integer of approximately `digits` decimal digits: whole
	/// base-[`BASE`] limbs are sampled uniformly, and the top slot targets
	/// whatever decimal length is left over.
	#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
	pub(crate) fn random(digits: usize, rng: &mut impl Random) -> EResult<Self> {
		if digits == 0 {
			return Err(Error::ZeroRandomDigits);
		}
		let per_limb = (BASE as f64).log10();
		let mut remaining = digits as f64;
		let mut res = Self::new();
		while remaining > per_limb {
			res.digits.push((rng.uniform() * BASE as f64) as i64);
			remaining -= per_limb;
		}
		let top = ((1.0 + rng.uniform()) * 10f64.powf(remaining - 1.0)) as i64;
		res.digits.push(top.min(BASE - 1));
		res.safe_max = BASE - 1;
		res.normalize(false);
		Ok(res)
	}

	/// Cheap upper bound on the square root, used to cap the simplifier's
	/// trial division. Takes the ceiling square root of the top two digits
	/// (plus one) and carries over half of the remaining digit positions.
	///
	/// Precondition: canonical.
	#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
	pub(crate) fn rough_sqrt(&self) -> Self {
		let len = self.digits.len();
		let mut res = Self::new();
		match len {
			0 => (),
			1 => res.set_i64(((self.digits[0] + 1) as f64).sqrt().ceil() as i64),
			_ => {
				let t = self.digits[len - 1] * BASE + self.digits[len - 2] + 1;
				let mut top = (t as f64).sqrt().ceil() as i64;
				if len % 2 == 1 {
					top *= ROOT_BASE;
				}
				res.digits.extend_from_slice(&self.digits[..(len - 2) / 2]);
				res.digits.push(top);
				res.safe_max = i64::MAX;
				res.normalize(false);
			}
		}
		res
	}
}

impl PartialEq for BigInt {
	fn eq(&self, other: &Self) -> bool {
		let mut diff = self.clone();
		diff.sub(other);
		diff.is_zero()
	}
}

impl Eq for BigInt {}

impl fmt::Debug for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?}", self.digits)
	}
}

impl fmt::Display for BigInt {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut n = self.clone();
		n.normalize(false);
		if n.digits.is_empty() {
			return write!(f, "0");
		}
		let negative = n.top_negative();
		if negative {
			n.negate();
		}
		n.canonicalize();
		let mut out = String::new();
		while !n.digits.is_empty() {
			let digit = n.digit_divide(10);
			#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
			out.insert(0, char::from_digit(digit as u32, 10).unwrap());
		}
		if negative {
			out.insert(0, '-');
		}
		write!(f, "{out}")
	}
}

impl FromStr for BigInt {
	type Err = Error;

	fn from_str(s: &str) -> EResult<Self> {
		let (negative, digits) = match s.as_bytes().first() {
			Some(b'-') => (true, &s[1..]),
			Some(b'+') => (false, &s[1..]),
			_ => (false, s),
		};
		if digits.is_empty() {
			return Err(Error::EmptyNumerator);
		}
		let mut res = Self::new();
		for ch in digits.chars() {
			let digit = ch.to_digit(10).ok_or(Error::ExpectedADigit(ch))?;
			res.mul_digit(10, i64::from(digit));
		}
		if negative {
			res.negate();
		}
		Ok(res)
	}
}

#[cfg(test)]
mod tests {
	use super::{BigInt, BASE, ROOT_BASE};
	use num_bigint::BigInt as NumBigInt;
	use std::cmp::Ordering;

	fn parse(s: &str) -> BigInt {
		s.parse().unwrap()
	}

	#[test]
	fn test_root_base() {
		assert!(ROOT_BASE * ROOT_BASE <= BASE);
		assert!((ROOT_BASE + 1) * (ROOT_BASE + 1) > BASE);
	}

	#[test]
	fn test_to_string() {
		assert_eq!(BigInt::new().to_string(), "0");
		assert_eq!(BigInt::from_i64(0).to_string(), "0");
		assert_eq!(BigInt::from_i64(7).to_string(), "7");
		assert_eq!(BigInt::from_i64(-7).to_string(), "-7");
		assert_eq!(
			BigInt::from_i64(123_456_789_012_345).to_string(),
			"123456789012345"
		);
		assert_eq!(BigInt::from_i64(i64::MIN / 2).to_string(), "-4611686018427387904");
	}

	#[test]
	fn test_parse_roundtrip() {
		for s in [
			"0",
			"1",
			"-1",
			"39456720983475234523452345",
			"-39456720983475234523452345",
			"100000000000000000000000000000000000001",
		] {
			assert_eq!(parse(s).to_string(), s);
		}
		assert_eq!(parse("+17").to_string(), "17");
		assert_eq!(parse("007").to_string(), "7");
	}

	#[test]
	fn test_parse_errors() {
		assert!("".parse::<BigInt>().is_err());
		assert!("-".parse::<BigInt>().is_err());
		assert!("12a".parse::<BigInt>().is_err());
		assert!("1.5".parse::<BigInt>().is_err());
	}

	#[test]
	fn test_addition() {
		let mut a = BigInt::from_i64(2);
		a.add(&BigInt::from_i64(2));
		assert_eq!(a.to_string(), "4");
		let mut a = parse("315427679023453451289740");
		a.add(&parse("927346502937456234523452"));
		assert_eq!(a.to_string(), "1242774181960909685813192");
	}

	#[test]
	fn test_subtraction() {
		let mut a = BigInt::from_i64(5);
		a.sub(&BigInt::from_i64(7));
		assert_eq!(a.to_string(), "-2");
		let mut a = parse("315427679023453451289740");
		a.sub(&parse("927346502937456234523452"));
		assert_eq!(a.to_string(), "-611918823914002783233712");
	}

	#[test]
	fn test_chained_lazy_adds() {
		// many additions in a row must stay correct without intermediate
		// normalization by the caller
		let step = parse("99999999999999999999");
		let mut acc = BigInt::new();
		for _ in 0..1000 {
			acc.add(&step);
		}
		assert_eq!(acc.to_string(), "99999999999999999999000");
	}

	#[test]
	fn test_digit_multiply() {
		let mut a = BigInt::from_i64(9);
		a.mul_digit(10, 3);
		assert_eq!(a.to_string(), "93");
		let mut a = parse("99999999999999999999");
		a.mul_digit(7, 0);
		assert_eq!(a.to_string(), "699999999999999999993");
	}

	#[test]
	fn test_small_multiplication() {
		let mut a = BigInt::from_i64(20);
		a.mul(&BigInt::from_i64(3));
		assert_eq!(a.to_string(), "60");
		let mut a = BigInt::from_i64(-20);
		a.mul(&BigInt::from_i64(3));
		assert_eq!(a.to_string(), "-60");
		let mut a = BigInt::from_i64(20);
		a.mul(&BigInt::new());
		assert_eq!(a.to_string(), "0");
	}

	#[test]
	fn test_big_multiplication() {
		let mut a = parse("315427679023453451289740");
		a.mul(&parse("927346502937456234523452"));
		assert_eq!(
			a.to_string(),
			"292510755072077978255166497050046859223676982480"
		);
	}

	#[test]
	fn test_signed_multiplication() {
		for (x, y) in [
			("-315427679023453451289740", "927346502937456234523452"),
			("315427679023453451289740", "-927346502937456234523452"),
			("-315427679023453451289740", "-927346502937456234523452"),
		] {
			let mut a = parse(x);
			a.mul(&parse(y));
			let expected = x.parse::<NumBigInt>().unwrap() * y.parse::<NumBigInt>().unwrap();
			assert_eq!(a.to_string(), expected.to_string());
		}
	}

	#[test]
	fn test_multiplication_matches_num_bigint() {
		// exercise both the schoolbook and the split-scalar paths
		let mut x = String::from("9");
		let mut y = String::from("8");
		for _ in 0..40 {
			x.push_str("91");
			y.push_str("37");
			let mut a = parse(&x);
			a.mul(&parse(&y));
			let expected = x.parse::<NumBigInt>().unwrap() * y.parse::<NumBigInt>().unwrap();
			assert_eq!(a.to_string(), expected.to_string());
		}
	}

	#[test]
	fn test_digit_divide() {
		let mut a = parse("699999999999999999993");
		let rem = a.digit_divide(7);
		assert_eq!(rem, 0);
		assert_eq!(a.to_string(), "99999999999999999999");
		let mut a = BigInt::from_i64(23);
		assert_eq!(a.digit_divide(10), 3);
		assert_eq!(a.to_string(), "2");
	}

	#[test]
	fn test_divmod_small() {
		// single machine-digit divisors take the digit_divide path, which
		// has truncating semantics: the remainder follows the dividend
		for (a, b, q, r) in [
			(20, 3, "6", "2"),
			(21, 3, "7", "0"),
			(22, 3, "7", "1"),
			(-22, 3, "-7", "-1"),
			(22, -3, "-7", "1"),
			(-22, -3, "7", "-1"),
			(2, 3, "0", "2"),
			(3, 3, "1", "0"),
			(0, 3, "0", "0"),
		] {
			let mut x = BigInt::from_i64(a);
			let rem = x.divmod(&BigInt::from_i64(b)).unwrap();
			assert_eq!(x.to_string(), q, "{a} / {b}");
			assert_eq!(rem.to_string(), r, "{a} % {b}");
		}
	}

	#[test]
	fn test_divmod_signed_large() {
		// multi-digit divisors negate both outputs when the operand signs
		// differ
		let b = "927346502937456234523452";
		let neg_b = format!("-{b}");
		for (x, y, q, r) in [
			("-292510755072077978255166497050046859223676982481", b, "-315427679023453451289740", "-1"),
			("292510755072077978255166497050046859223676982481", neg_b.as_str(), "-315427679023453451289740", "-1"),
			("-292510755072077978255166497050046859223676982481", neg_b.as_str(), "315427679023453451289740", "1"),
		] {
			let mut a = parse(x);
			let rem = a.divmod(&parse(y)).unwrap();
			assert_eq!(a.to_string(), q);
			assert_eq!(rem.to_string(), r);
		}
	}

	#[test]
	fn test_divmod_by_zero() {
		let mut a = BigInt::from_i64(5);
		assert!(a.divmod(&BigInt::new()).is_err());
	}

	#[test]
	fn test_divmod_large() {
		let mut a = parse("292510755072077978255166497050046859223676982480");
		let rem = a.divmod(&parse("927346502937456234523452")).unwrap();
		assert_eq!(a.to_string(), "315427679023453451289740");
		assert_eq!(rem.to_string(), "0");

		let mut a = parse("292510755072077978255166497050046859223676982481");
		let rem = a.divmod(&parse("927346502937456234523452")).unwrap();
		assert_eq!(a.to_string(), "315427679023453451289740");
		assert_eq!(rem.to_string(), "1");
	}

	#[test]
	fn test_divmod_matches_num_bigint() {
		let mut x = String::from("98765432109876543210");
		let y = "12345678901234567891";
		for _ in 0..20 {
			x.push_str("55");
			let mut a = parse(&x);
			let rem = a.divmod(&parse(y)).unwrap();
			let xn = x.parse::<NumBigInt>().unwrap();
			let yn = y.parse::<NumBigInt>().unwrap();
			assert_eq!(a.to_string(), (&xn / &yn).to_string());
			assert_eq!(rem.to_string(), (&xn % &yn).to_string());
		}
	}

	#[test]
	fn test_quotient_times_divisor_plus_remainder() {
		let mut a = parse("111111111111111111111111111111111");
		let b = parse("272727272727272727");
		let rem = a.divmod(&b).unwrap();
		a.mul(&b);
		a.add(&rem);
		assert_eq!(a.to_string(), "111111111111111111111111111111111");
	}

	#[test]
	fn test_compare() {
		let a = parse("10000000").abs_canonical();
		let b = parse("9999999").abs_canonical();
		assert_eq!(a.compare(&b), Ordering::Greater);
		assert_eq!(b.compare(&a), Ordering::Less);
		assert_eq!(a.compare(&a), Ordering::Equal);
	}

	#[test]
	fn test_sign_probes() {
		let mut a = BigInt::from_i64(5);
		a.sub(&BigInt::from_i64(7));
		assert!(a.is_negative());
		assert!(!a.is_positive());
		assert!(!a.is_zero());
		let mut z = BigInt::from_i64(5);
		z.sub(&BigInt::from_i64(5));
		assert!(z.is_zero());
		assert!(!z.is_negative());
		assert!(!z.is_positive());
	}

	#[test]
	fn test_lsb() {
		assert_eq!(BigInt::new().lsb(), 0);
		assert_eq!(BigInt::from_i64(17).lsb(), 17 % BASE);
		assert_eq!(BigInt::from_i64(-3).lsb(), BASE - 3);
	}

	#[test]
	fn test_value() {
		assert_eq!(BigInt::from_i64(0).value(), 0.0);
		assert_eq!(BigInt::from_i64(12345).value(), 12345.0);
		assert_eq!(BigInt::from_i64(-12345).value(), -12345.0);
		let big = parse("1000000000000000000000").value();
		assert!((big - 1e21).abs() / 1e21 < 1e-12);
	}

	#[test]
	fn test_set_f64() {
		let mut n = BigInt::new();
		n.set_f64(123.9);
		assert_eq!(n.to_string(), "123");
		n.set_f64(-123.9);
		assert_eq!(n.to_string(), "-123");
		n.set_f64(1e18);
		assert_eq!(n.to_string(), "1000000000000000000");
	}

	#[test]
	fn test_rough_sqrt_is_upper_bound() {
		for s in [
			"3",
			"144",
			"99999999999",
			"123456789123456789123456789",
			"100000000000000000000000000000000000001",
		] {
			let n = parse(s).abs_canonical();
			let mut bound = n.rough_sqrt();
			bound.mul(&bound.clone());
			let mut diff = bound;
			diff.sub(&n);
			assert!(!diff.is_negative(), "rough_sqrt({s}) squared below input");
		}
	}

	#[test]
	fn test_random_length() {
		struct Fixed(f64);
		impl crate::random::Random for Fixed {
			fn uniform(&mut self) -> f64 {
				self.0
			}
		}
		assert!(BigInt::random(0, &mut Fixed(0.5)).is_err());
		let n = BigInt::random(30, &mut Fixed(0.5)).unwrap();
		let len = n.to_string().len();
		assert!((28..=31).contains(&len), "got {len} digits");
	}

	#[test]
	fn test_eq_sees_through_denormal_digits() {
		let mut a = BigInt::from_i64(100);
		a.sub(&BigInt::from_i64(58));
		let b = BigInt::from_i64(42);
		assert_eq!(a, b);
	}
}
