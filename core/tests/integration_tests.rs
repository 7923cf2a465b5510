use exact_core::{Never, Rational};

#[track_caller]
fn test_decimal(input: &str, expected: &str) {
	let value: Rational = input.parse().unwrap();
	assert_eq!(value.to_string(), expected);
	// try parsing the output again, and make sure it matches
	let reparsed: Rational = expected.parse().unwrap();
	assert_eq!(reparsed.to_string(), expected);
}

#[track_caller]
fn test_simplified_fraction(input: &str, expected: &str) {
	let mut value: Rational = input.parse().unwrap();
	value.simplify(&Never);
	assert_eq!(value.to_fraction(), expected);
	let reparsed: Rational = expected.parse().unwrap();
	assert_eq!(reparsed.to_fraction(), expected);
}

#[track_caller]
fn expect_parse_error(input: &str) {
	assert!(input.parse::<Rational>().is_err(), "{input:?} should not parse");
}

#[test]
fn test_recurring_decimal_to_simplified_fraction() {
	test_simplified_fraction("0.[3]", "0 1/3");
}

#[test]
fn test_mixed_fraction_to_recurring_decimal() {
	test_decimal(
		"-4 538/1284",
		"-4.4[19003115264797507788161993769470404984423676012461059]",
	);
}

#[test]
fn test_mixed_fraction_simplification() {
	test_simplified_fraction("-4 538/1284", "-4 269/642");
}

#[test]
fn test_float_construction_reduces_trailing_zeros_only() {
	let value = Rational::from_f64(123.5).unwrap();
	assert_eq!(value.to_fraction(), "123 5/10");
}

#[test]
fn test_operation_chain() {
	let mut value: Rational = "1/3".parse().unwrap();
	value.multiply(&"3/5".parse().unwrap());
	value.multiply(&"9/7".parse().unwrap());
	value.multiply(&"23/45".parse().unwrap());
	value.multiply(&"12 45/87".parse().unwrap());
	value.divide(&"99.75".parse().unwrap()).unwrap();
	value.simplify(&Never);
	assert_eq!(value.to_fraction(), "0 11132/674975");
}

#[test]
fn test_simplify_completion_flag() {
	// fully reduced within the prime walk
	let mut value: Rational = "0.[3]".parse().unwrap();
	assert!(value.simplify(&Never));
	// 269 is prime and beyond the trial-division ceiling, so the walk
	// cannot certify the reduction even though the value ends up reduced
	let mut value: Rational = "-4 538/1284".parse().unwrap();
	assert!(!value.simplify(&Never));
	assert_eq!(value.to_fraction(), "-4 269/642");
}

#[test]
fn test_first_operand_mode_wins() {
	let mut value = Rational::from(5);
	value.subtract(&Rational::from_f64(12.5).unwrap());
	assert_eq!(value.value(), -7.0);
}

#[test]
fn test_recurring_decimal_multiplication() {
	// 0.[3] is exactly 1/3, so the product with 123.5 is 41.1[6]
	let mut value: Rational = "0.[3]".parse().unwrap();
	value.multiply(&Rational::from_f64(123.5).unwrap());
	assert_eq!(value.to_string(), "41.1[6]");
}

#[test]
fn test_modulus() {
	let mut value = Rational::from(22);
	value.modulus(&Rational::from(3)).unwrap();
	assert_eq!(value.to_string(), "1");
}

#[test]
fn test_canonical_decimal_roundtrips() {
	test_decimal("0.[3]", "0.[3]");
	test_decimal("-12.25", "-12.25");
	test_decimal("3.[142857]", "3.[142857]");
	test_decimal("17", "17");
}

#[test]
fn test_arithmetic_inverses() {
	let a: Rational = "-4 538/1284".parse().unwrap();
	let b: Rational = "22/7".parse().unwrap();
	assert_eq!((&a + &b) - &b, a);
	assert_eq!((&a * &b) / &b, a);
}

#[test]
fn test_rejected_inputs() {
	expect_parse_error("abc");
	expect_parse_error("1/0");
	expect_parse_error("/3");
	expect_parse_error("3/");
	expect_parse_error("1.2[");
	expect_parse_error("1.2[]");
	expect_parse_error("1 2");
	expect_parse_error("--1");
}

#[test]
fn test_divide_by_zero_is_an_error() {
	let mut value: Rational = "1/2".parse().unwrap();
	assert!(value.divide(&Rational::from(0)).is_err());
	assert!(value.divide(&"0.0".parse().unwrap()).is_err());
	let mut value = Rational::from(5);
	assert!(value.modulus(&Rational::from(0)).is_err());
}

#[test]
fn test_simplify_is_time_bounded() {
	use exact_core::Timeout;
	// a pre-expired budget stops the walk immediately and reports it; the
	// leftover numerator still cancels in the closing exact-division step
	let mut value: Rational = "4/8".parse().unwrap();
	let expired = Timeout::new(1, || 2);
	assert!(!value.simplify(&expired));
	assert_eq!(value.to_fraction(), "0 1/2");
}

#[test]
fn test_version() {
	assert!(!exact_core::get_version().is_empty());
}
