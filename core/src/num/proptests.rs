//! Property-based tests for the rational layer.

use crate::interrupt::Never;
use crate::num::Rational;
use proptest::prelude::*;
use std::cmp::Ordering;

fn small_int() -> impl Strategy<Value = i64> {
	-1000i64..1000i64
}

fn non_zero_int() -> impl Strategy<Value = i64> {
	prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
}

// kept small so recurring expansions stay short
fn small_den() -> impl Strategy<Value = i64> {
	prop_oneof![(-300i64..=-1i64), (1i64..=300i64)]
}

fn rat(num: i64, den: i64) -> Rational {
	let s = if den < 0 {
		format!("{}/{}", -num, -den)
	} else {
		format!("{num}/{den}")
	};
	s.parse().unwrap()
}

proptest! {
	#[test]
	fn add_commutative(
		na in small_int(), da in non_zero_int(),
		nb in small_int(), db in non_zero_int(),
	) {
		let a = rat(na, da);
		let b = rat(nb, db);
		prop_assert_eq!((&a + &b).compare(&(&b + &a)), Ordering::Equal);
	}

	#[test]
	fn mul_commutative(
		na in small_int(), da in non_zero_int(),
		nb in small_int(), db in non_zero_int(),
	) {
		let a = rat(na, da);
		let b = rat(nb, db);
		prop_assert_eq!((&a * &b).compare(&(&b * &a)), Ordering::Equal);
	}

	#[test]
	fn add_then_subtract_is_identity(
		na in small_int(), da in non_zero_int(),
		nb in small_int(), db in non_zero_int(),
	) {
		let a = rat(na, da);
		let b = rat(nb, db);
		let roundtrip = (&a + &b) - &b;
		prop_assert_eq!(roundtrip.compare(&a), Ordering::Equal);
	}

	#[test]
	fn mul_then_divide_is_identity(
		na in small_int(), da in non_zero_int(),
		nb in non_zero_int(), db in non_zero_int(),
	) {
		let a = rat(na, da);
		let b = rat(nb, db);
		let roundtrip = (&a * &b) / &b;
		prop_assert_eq!(roundtrip.compare(&a), Ordering::Equal);
	}

	#[test]
	fn distributive(
		na in small_int(), da in non_zero_int(),
		nb in small_int(), db in non_zero_int(),
		nc in small_int(), dc in non_zero_int(),
	) {
		let a = rat(na, da);
		let b = rat(nb, db);
		let c = rat(nc, dc);
		let lhs = &a * &(&b + &c);
		let rhs = &(&a * &b) + &(&a * &c);
		prop_assert_eq!(lhs.compare(&rhs), Ordering::Equal);
	}

	#[test]
	fn compare_is_antisymmetric(
		na in small_int(), da in non_zero_int(),
		nb in small_int(), db in non_zero_int(),
	) {
		let a = rat(na, da);
		let b = rat(nb, db);
		prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
	}

	#[test]
	fn simplify_preserves_value(n in small_int(), d in non_zero_int()) {
		let mut a = rat(n, d);
		let before = a.clone();
		a.simplify(&Never);
		prop_assert_eq!(a.compare(&before), Ordering::Equal);
	}

	#[test]
	fn fraction_emit_reparses(n in small_int(), d in non_zero_int()) {
		let a = rat(n, d);
		let reparsed: Rational = a.to_fraction().parse().unwrap();
		prop_assert_eq!(reparsed.compare(&a), Ordering::Equal);
	}

	#[test]
	fn decimal_emit_reparses(n in small_int(), d in small_den()) {
		let a = rat(n, d);
		let decimal = a.to_decimal(1000);
		// an emission this long is never truncated for these denominators,
		// so parsing it back must recover the exact value
		prop_assert!(!decimal.ends_with("..."));
		let reparsed: Rational = decimal.parse().unwrap();
		prop_assert_eq!(reparsed.compare(&a), Ordering::Equal);
	}
}
