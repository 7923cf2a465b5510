use crate::error::Error;
use crate::result::EResult;
use std::str::FromStr;

use super::super::bigint::BigInt;
use super::{Frac, Rational};

// Accepted forms, after trimming:
//   [+-]?digits               integer (integer-only mode; empty digits = 0)
//   [+-]?digits/digits        fraction
//   [+-]?digits.frac          decimal, where frac may end in a [recurring]
//                             block
//   [+-]?digits digits/digits mixed fraction (single space)
impl FromStr for Rational {
	type Err = Error;

	fn from_str(s: &str) -> EResult<Self> {
		let s = s.trim();
		if let Some((whole_part, frac_part)) = s.split_once(' ') {
			return parse_mixed(whole_part, frac_part);
		}
		if let Some((num_part, den_part)) = s.split_once('/') {
			return parse_fraction(num_part, den_part);
		}
		if let Some((int_part, frac_part)) = s.split_once('.') {
			return parse_decimal(int_part, frac_part);
		}
		parse_integer(s)
	}
}

fn strip_sign(s: &str) -> (bool, &str) {
	match s.as_bytes().first() {
		Some(b'-') => (true, &s[1..]),
		Some(b'+') => (false, &s[1..]),
		_ => (false, s),
	}
}

fn parse_digits(s: &str, empty: Error) -> EResult<BigInt> {
	if s.is_empty() {
		return Err(empty);
	}
	let mut n = BigInt::new();
	for ch in s.chars() {
		let digit = ch.to_digit(10).ok_or(Error::ExpectedADigit(ch))?;
		n.mul_digit(10, i64::from(digit));
	}
	Ok(n)
}

fn parse_integer(s: &str) -> EResult<Rational> {
	let (negative, digits) = strip_sign(s);
	let mut whole = BigInt::new();
	for ch in digits.chars() {
		let digit = ch.to_digit(10).ok_or(Error::ExpectedADigit(ch))?;
		whole.mul_digit(10, i64::from(digit));
	}
	if negative {
		whole.negate();
	}
	Ok(Rational { whole, frac: None })
}

fn parse_fraction(num_part: &str, den_part: &str) -> EResult<Rational> {
	let (negative, num_digits) = strip_sign(num_part);
	let mut num = parse_digits(num_digits, Error::EmptyNumerator)?;
	let mut den = parse_digits(den_part, Error::EmptyDenominator)?;
	if den.is_zero() {
		return Err(Error::ZeroDenominator);
	}
	if negative {
		num.negate();
	}
	let mut res = Rational {
		whole: BigInt::new(),
		frac: Some(Frac { num, den }),
	};
	res.normalize_remainder();
	Ok(res)
}

// The sign in front of a mixed fraction belongs to the value as a whole, so
// it lands on both the whole part and the numerator.
fn parse_mixed(whole_part: &str, frac_part: &str) -> EResult<Rational> {
	let (negative, whole_digits) = strip_sign(whole_part);
	let mut whole = parse_digits(whole_digits, Error::EmptyNumerator)?;
	let Some((num_part, den_part)) = frac_part.split_once('/') else {
		return Err(Error::UnexpectedChar(' '));
	};
	let mut num = parse_digits(num_part, Error::EmptyNumerator)?;
	let mut den = parse_digits(den_part, Error::EmptyDenominator)?;
	if den.is_zero() {
		return Err(Error::ZeroDenominator);
	}
	if negative {
		whole.negate();
		num.negate();
	}
	let mut res = Rational {
		whole,
		frac: Some(Frac { num, den }),
	};
	res.normalize_remainder();
	Ok(res)
}

// Digits accumulate into num while den tracks the written place value. At
// '[' the pair is snapshotted, and ']' replaces (num, den) with the
// difference against the snapshot, which is exactly the fraction of the
// repeating expansion: 0.[3] goes 0/1 -> snapshot -> 3/10 -> (3-0)/(10-1).
fn parse_decimal(int_part: &str, frac_part: &str) -> EResult<Rational> {
	let (negative, int_digits) = strip_sign(int_part);
	let mut whole = BigInt::new();
	for ch in int_digits.chars() {
		let digit = ch.to_digit(10).ok_or(Error::ExpectedADigit(ch))?;
		whole.mul_digit(10, i64::from(digit));
	}
	let mut num = BigInt::new();
	let mut den = BigInt::from_i64(1);
	let mut snapshot: Option<(BigInt, BigInt)> = None;
	let mut block_digits = 0usize;
	let mut closed = false;
	for ch in frac_part.chars() {
		if closed {
			return Err(Error::UnexpectedChar(ch));
		}
		match ch {
			'[' => {
				if snapshot.is_some() {
					return Err(Error::UnexpectedChar('['));
				}
				snapshot = Some((num.clone(), den.clone()));
			}
			']' => {
				let Some((num0, den0)) = snapshot.take() else {
					return Err(Error::UnexpectedChar(']'));
				};
				if block_digits == 0 {
					return Err(Error::ExpectedADigit(']'));
				}
				num.sub(&num0);
				den.sub(&den0);
				closed = true;
			}
			ch => match ch.to_digit(10) {
				Some(digit) => {
					num.mul_digit(10, i64::from(digit));
					den.mul_digit(10, 0);
					if snapshot.is_some() {
						block_digits += 1;
					}
				}
				None => return Err(Error::ExpectedADigit(ch)),
			},
		}
	}
	if snapshot.is_some() {
		return Err(Error::UnterminatedRecurringBlock);
	}
	if negative {
		whole.negate();
		num.negate();
	}
	let mut res = Rational {
		whole,
		frac: Some(Frac { num, den }),
	};
	res.normalize_remainder();
	Ok(res)
}
