use crate::error::Error;
use crate::interrupt::Interrupt;
use crate::random::Random;
use crate::result::EResult;
use num_traits::{One, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::ops;

use super::bigint::BigInt;
use super::prime::Primes;

mod format;
mod parse;

/// An exact rational number: a signed whole part plus an optional
/// numerator / denominator pair.
///
/// A value without the pair is *integer-only*: arithmetic on it discards the
/// fractional contributions of both operands. The mode is fixed at
/// construction and only changes through [`Self::make_integer`] /
/// [`Self::make_fractional`].
///
/// Invariants on a reconciled fractional value: the denominator is strictly
/// positive, `|num| < den`, a zero numerator forces `den == 1`, and the
/// numerator's sign matches the whole part's (unless the whole part is
/// zero). The numerator may drift outside that range between the steps of a
/// compound operation; every public mutator reconciles before returning.
#[derive(Clone, Default)]
pub struct Rational {
	whole: BigInt,
	frac: Option<Frac>,
}

#[derive(Clone)]
struct Frac {
	num: BigInt,
	den: BigInt,
}

impl Rational {
	/// Integer-only zero.
	pub fn new() -> Self {
		Self {
			whole: BigInt::new(),
			frac: None,
		}
	}

	/// Converts a float exactly up to 8 decimal places: the whole part is
	/// truncated towards zero and the fractional part is stored over 10⁸,
	/// reduced by trailing zeros only. The result is integer-only when the
	/// fractional part comes out zero.
	#[allow(clippy::cast_possible_truncation)]
	pub fn from_f64(value: f64) -> EResult<Self> {
		if !value.is_finite() {
			return Err(Error::NotFinite);
		}
		let mut whole = BigInt::new();
		whole.set_f64(value);
		let mut num = (value.fract().abs() * 1e8).round() as i64;
		let mut den = 100_000_000_i64;
		while num != 0 && num % 10 == 0 {
			num /= 10;
			den /= 10;
		}
		if num == 0 {
			return Ok(Self { whole, frac: None });
		}
		if value < 0.0 {
			num = -num;
		}
		let mut res = Self {
			whole,
			frac: Some(Frac {
				num: BigInt::from_i64(num),
				den: BigInt::from_i64(den),
			}),
		};
		res.normalize_remainder();
		if res.frac.as_ref().is_some_and(|f| f.num.is_definitely_zero()) {
			res.frac = None;
		}
		Ok(res)
	}

	/// Random integer-only value of approximately `digits` decimal digits.
	pub fn random(digits: usize, rng: &mut impl Random) -> EResult<Self> {
		Ok(Self {
			whole: BigInt::random(digits, rng)?,
			frac: None,
		})
	}

	pub fn is_integer(&self) -> bool {
		self.frac.is_none()
	}

	pub fn is_fractional(&self) -> bool {
		self.frac.is_some()
	}

	/// Folds any fractional part into the whole part (discarding it) and
	/// switches to integer-only mode.
	pub fn make_integer(&mut self) -> &mut Self {
		self.normalize_remainder();
		self.frac = None;
		self
	}

	/// Switches to fractional mode; an integer-only value gains a zero
	/// fraction.
	pub fn make_fractional(&mut self) -> &mut Self {
		if self.frac.is_none() {
			self.frac = Some(Frac {
				num: BigInt::new(),
				den: BigInt::from_i64(1),
			});
		}
		self
	}

	pub fn add(&mut self, rhs: &Self) -> &mut Self {
		self.whole.add(&rhs.whole);
		if let (Some(frac), Some(rfrac)) = (&mut self.frac, &rhs.frac) {
			if !rfrac.num.is_definitely_zero() {
				let mut cross = rfrac.num.clone();
				cross.mul(&frac.den);
				frac.num.mul(&rfrac.den);
				frac.num.add(&cross);
				frac.den.mul(&rfrac.den);
			}
		}
		self.normalize_remainder();
		self
	}

	pub fn subtract(&mut self, rhs: &Self) -> &mut Self {
		self.whole.sub(&rhs.whole);
		if let (Some(frac), Some(rfrac)) = (&mut self.frac, &rhs.frac) {
			if !rfrac.num.is_definitely_zero() {
				let mut cross = rfrac.num.clone();
				cross.mul(&frac.den);
				frac.num.mul(&rfrac.den);
				frac.num.sub(&cross);
				frac.den.mul(&rfrac.den);
			}
		}
		self.normalize_remainder();
		self
	}

	pub fn multiply(&mut self, rhs: &Self) -> &mut Self {
		match (&mut self.frac, &rhs.frac) {
			(Some(frac), Some(rfrac)) => {
				// (A + p/q)(C + r/s): fractional part is
				// (p(r + sC) + rAq) / qs
				let mut t = rfrac.den.clone();
				t.mul(&rhs.whole);
				t.add(&rfrac.num);
				frac.num.mul(&t);
				let mut cross = rfrac.num.clone();
				cross.mul(&self.whole);
				cross.mul(&frac.den);
				frac.num.add(&cross);
				frac.den.mul(&rfrac.den);
			}
			(Some(frac), None) => {
				frac.num.mul(&rhs.whole);
			}
			(None, _) => (),
		}
		self.whole.mul(&rhs.whole);
		self.normalize_remainder();
		self
	}

	pub fn divide(&mut self, rhs: &Self) -> EResult<&mut Self> {
		match (&mut self.frac, &rhs.frac) {
			(Some(frac), rhs_frac) => {
				let mut divisor = rhs.whole.clone();
				if let Some(rfrac) = rhs_frac {
					divisor.mul(&rfrac.den);
					divisor.add(&rfrac.num);
				}
				if divisor.is_zero() {
					return Err(Error::DivideByZero);
				}
				let mut num = self.whole.clone();
				num.mul(&frac.den);
				num.add(&frac.num);
				if let Some(rfrac) = rhs_frac {
					num.mul(&rfrac.den);
				}
				frac.den.mul(&divisor);
				frac.num = num;
				self.whole.reset();
				// the denominator stays strictly positive
				if frac.den.is_negative() {
					frac.den.negate();
					frac.num.negate();
				}
			}
			(None, _) => {
				let mut divisor = rhs.whole.clone();
				if divisor.is_zero() {
					return Err(Error::DivideByZero);
				}
				self.whole.divmod(&divisor)?;
			}
		}
		self.normalize_remainder();
		Ok(self)
	}

	/// Modulus over the integer parts only; any fractional part of the
	/// receiver is discarded.
	pub fn modulus(&mut self, rhs: &Self) -> EResult<&mut Self> {
		let mut divisor = rhs.whole.clone();
		if divisor.is_zero() {
			return Err(Error::ModuloByZero);
		}
		let rem = self.whole.divmod(&divisor)?;
		self.whole = rem;
		if let Some(frac) = &mut self.frac {
			frac.num.reset();
			frac.den.set_i64(1);
		}
		Ok(self)
	}

	pub fn negate(&mut self) -> &mut Self {
		self.whole.negate();
		if let Some(frac) = &mut self.frac {
			frac.num.negate();
		}
		self
	}

	pub fn abs(&mut self) -> &mut Self {
		if self.whole.is_negative() {
			self.whole.negate();
		}
		if let Some(frac) = &mut self.frac {
			if frac.num.is_negative() {
				frac.num.negate();
			}
		}
		self
	}

	/// Drops the fractional part, keeping the whole part (truncation towards
	/// zero). The mode is unchanged.
	pub fn trunc(&mut self) -> &mut Self {
		self.normalize_remainder();
		if let Some(frac) = &mut self.frac {
			frac.num.reset();
			frac.den.set_i64(1);
		}
		self
	}

	/// Drops the whole part, keeping the fractional part.
	pub fn fract(&mut self) -> &mut Self {
		self.normalize_remainder();
		self.whole.reset();
		self
	}

	pub fn signum(&self) -> i8 {
		let mut whole = self.whole.clone();
		if whole.is_positive() {
			return 1;
		}
		if whole.is_negative() {
			return -1;
		}
		if let Some(frac) = &self.frac {
			let mut num = frac.num.clone();
			if num.is_positive() {
				return 1;
			}
			if num.is_negative() {
				return -1;
			}
		}
		0
	}

	pub fn is_zero(&self) -> bool {
		self.signum() == 0
	}

	pub fn is_positive(&self) -> bool {
		self.signum() > 0
	}

	pub fn is_negative(&self) -> bool {
		self.signum() < 0
	}

	/// True when the value actually carries a non-zero fractional part.
	pub fn has_fraction(&self) -> bool {
		self.frac.as_ref().is_some_and(|f| !f.num.is_definitely_zero())
	}

	/// Total order over rational values. Signs decide first, then whole
	/// magnitudes, then the cross-multiplied fractional parts.
	pub fn compare(&self, rhs: &Self) -> Ordering {
		let (sa, sb) = (self.signum(), rhs.signum());
		if sa != sb {
			return sa.cmp(&sb);
		}
		if sa == 0 {
			return Ordering::Equal;
		}
		let a_whole = self.whole.abs_canonical();
		let b_whole = rhs.whole.abs_canonical();
		let ord = match a_whole.compare(&b_whole) {
			Ordering::Equal => {
				let mut a_cross = self
					.frac
					.as_ref()
					.map_or_else(BigInt::new, |f| f.num.abs_canonical());
				let mut b_cross = rhs
					.frac
					.as_ref()
					.map_or_else(BigInt::new, |f| f.num.abs_canonical());
				if let Some(rfrac) = &rhs.frac {
					a_cross.mul(&rfrac.den);
				}
				if let Some(frac) = &self.frac {
					b_cross.mul(&frac.den);
				}
				a_cross.abs_canonical().compare(&b_cross.abs_canonical())
			}
			ord => ord,
		};
		if sa < 0 {
			ord.reverse()
		} else {
			ord
		}
	}

	/// Lossy conversion: whole part plus the fractional part scaled through
	/// 10⁸, rounded to 8 decimal places.
	#[allow(clippy::cast_precision_loss)]
	pub fn value(&self) -> f64 {
		let mut res = self.whole.value();
		if let Some(frac) = &self.frac {
			if !frac.num.is_definitely_zero() {
				let mut scaled = frac.num.clone();
				scaled.mul(&BigInt::from_i64(100_000_000));
				scaled
					.divmod(&frac.den)
					.expect("denominator is never zero");
				res += scaled.value() / 1e8;
			}
		}
		(res * 1e8).round() / 1e8
	}

	/// Reduces the fraction by trial division against the shared prime
	/// list, up to a rough square root of the numerator and below the digit
	/// radix, polling `int` for cancellation along the way. Factors removed
	/// from the numerator cancel against the denominator where possible and
	/// accumulate otherwise; afterwards the leftover numerator is cancelled
	/// wholesale if it divides the denominator exactly.
	///
	/// Returns true only if the walk ran to completion and the final
	/// exact-division test succeeded; a false return still leaves the value
	/// unchanged (possibly partially reduced).
	#[allow(clippy::cast_precision_loss)]
	pub fn simplify<I: Interrupt>(&mut self, int: &I) -> bool {
		let Some(frac) = &mut self.frac else {
			return true;
		};
		if frac.num.is_definitely_zero() {
			return true;
		}
		let negative = frac.num.is_negative();
		let mut num = frac.num.abs_canonical();
		let mut den = frac.den.abs_canonical();
		let ceiling = num.rough_sqrt().value();
		let mut factor = BigInt::from_i64(1);
		let mut complete = true;
		let mut primes = Primes::new();
		loop {
			if int.should_interrupt() {
				complete = false;
				break;
			}
			let Some(p) = primes.next() else {
				// sieve exhausted below the radix
				complete = false;
				break;
			};
			if p as f64 > ceiling {
				break;
			}
			loop {
				let mut q = num.clone();
				if q.digit_divide(p) != 0 {
					break;
				}
				num = q;
				let mut qd = den.clone();
				if qd.digit_divide(p) == 0 {
					den = qd;
				} else {
					factor.mul_digit(p, 0);
				}
			}
		}
		let mut new_den = den.clone();
		let mut rem = new_den
			.divmod(&num)
			.expect("numerator is non-zero here");
		let exact = rem.is_zero();
		if exact {
			den = new_den;
			num = factor;
		} else {
			num.mul(&factor);
		}
		if negative {
			num.negate();
		}
		frac.num = num;
		frac.den = den;
		complete && exact
	}

	// Moves the integer quotient of num/den into the whole part, zeroes the
	// denominator back to 1 when the numerator vanishes, and reconciles the
	// numerator's sign with the whole part's.
	fn normalize_remainder(&mut self) {
		let Some(frac) = &mut self.frac else {
			return;
		};
		let rem = frac
			.num
			.divmod(&frac.den)
			.expect("denominator is never zero");
		self.whole.add(&frac.num);
		frac.num = rem;
		if frac.num.is_zero() {
			frac.den.set_i64(1);
			return;
		}
		let num_negative = frac.num.is_negative();
		if self.whole.is_zero() || num_negative == self.whole.is_negative() {
			return;
		}
		let one = BigInt::from_i64(1);
		if num_negative {
			frac.num.add(&frac.den);
			self.whole.sub(&one);
		} else {
			frac.num.sub(&frac.den);
			self.whole.add(&one);
		}
	}
}

impl From<i64> for Rational {
	fn from(value: i64) -> Self {
		Self {
			whole: BigInt::from_i64(value),
			frac: None,
		}
	}
}

impl From<i32> for Rational {
	fn from(value: i32) -> Self {
		Self::from(i64::from(value))
	}
}

impl PartialEq for Rational {
	fn eq(&self, other: &Self) -> bool {
		self.compare(other) == Ordering::Equal
	}
}

impl Eq for Rational {}

impl PartialOrd for Rational {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.compare(other))
	}
}

impl Ord for Rational {
	fn cmp(&self, other: &Self) -> Ordering {
		self.compare(other)
	}
}

impl ops::Add<&Rational> for Rational {
	type Output = Rational;

	fn add(mut self, rhs: &Rational) -> Rational {
		Rational::add(&mut self, rhs);
		self
	}
}

impl ops::Add for Rational {
	type Output = Rational;

	fn add(self, rhs: Rational) -> Rational {
		self + &rhs
	}
}

impl ops::Add for &Rational {
	type Output = Rational;

	fn add(self, rhs: &Rational) -> Rational {
		self.clone() + rhs
	}
}

impl ops::Sub<&Rational> for Rational {
	type Output = Rational;

	fn sub(mut self, rhs: &Rational) -> Rational {
		self.subtract(rhs);
		self
	}
}

impl ops::Sub for Rational {
	type Output = Rational;

	fn sub(self, rhs: Rational) -> Rational {
		self - &rhs
	}
}

impl ops::Sub for &Rational {
	type Output = Rational;

	fn sub(self, rhs: &Rational) -> Rational {
		self.clone() - rhs
	}
}

impl ops::Mul<&Rational> for Rational {
	type Output = Rational;

	fn mul(mut self, rhs: &Rational) -> Rational {
		self.multiply(rhs);
		self
	}
}

impl ops::Mul for Rational {
	type Output = Rational;

	fn mul(self, rhs: Rational) -> Rational {
		self * &rhs
	}
}

impl ops::Mul for &Rational {
	type Output = Rational;

	fn mul(self, rhs: &Rational) -> Rational {
		self.clone() * rhs
	}
}

impl ops::Div<&Rational> for Rational {
	type Output = Rational;

	/// # Panics
	///
	/// Panics when dividing by zero; use [`Rational::divide`] for the
	/// fallible form.
	fn div(mut self, rhs: &Rational) -> Rational {
		self.divide(rhs).expect("division by zero");
		self
	}
}

impl ops::Div for Rational {
	type Output = Rational;

	fn div(self, rhs: Rational) -> Rational {
		self / &rhs
	}
}

impl ops::Div for &Rational {
	type Output = Rational;

	fn div(self, rhs: &Rational) -> Rational {
		self.clone() / rhs
	}
}

impl ops::Rem<&Rational> for Rational {
	type Output = Rational;

	/// # Panics
	///
	/// Panics on a zero modulus; use [`Rational::modulus`] for the fallible
	/// form.
	fn rem(mut self, rhs: &Rational) -> Rational {
		self.modulus(rhs).expect("modulo by zero");
		self
	}
}

impl ops::Rem for Rational {
	type Output = Rational;

	fn rem(self, rhs: Rational) -> Rational {
		self % &rhs
	}
}

impl ops::Rem for &Rational {
	type Output = Rational;

	fn rem(self, rhs: &Rational) -> Rational {
		self.clone() % rhs
	}
}

impl ops::Neg for Rational {
	type Output = Rational;

	fn neg(mut self) -> Rational {
		self.negate();
		self
	}
}

impl ops::Neg for &Rational {
	type Output = Rational;

	fn neg(self) -> Rational {
		-self.clone()
	}
}

impl Zero for Rational {
	fn zero() -> Self {
		Self::new()
	}

	fn is_zero(&self) -> bool {
		Rational::is_zero(self)
	}
}

impl One for Rational {
	fn one() -> Self {
		Self::from(1)
	}

	fn is_one(&self) -> bool {
		self == &Self::from(1)
	}
}

impl ToPrimitive for Rational {
	fn to_i64(&self) -> Option<i64> {
		self.whole.to_i64_checked()
	}

	fn to_u64(&self) -> Option<u64> {
		self.to_i64()?.try_into().ok()
	}

	fn to_f64(&self) -> Option<f64> {
		Some(self.value())
	}
}
