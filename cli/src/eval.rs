use exact_core::{Interrupt, Random, Rational, Timeout};
use std::time::Instant;

use crate::interrupt::Either;

const DEFAULT_SIMPLIFY_BUDGET_MS: u64 = 100;

/// Evaluates one input line. Returns `Ok(None)` for blank input and
/// `Ok(Some(output))` otherwise.
///
/// A line is either a command (`frac`, `simplify`, `rand`) or a chain of
/// rational literals combined left-to-right with `+ - * / %`. Mixed
/// fractions span two tokens (`-4 538/1284`).
pub fn evaluate(
	line: &str,
	ctrl_c: &impl Interrupt,
	rng: &mut impl Random,
) -> Result<Option<String>, String> {
	let tokens: Vec<&str> = line.split_whitespace().collect();
	let Some(&first) = tokens.first() else {
		return Ok(None);
	};
	match first {
		"rand" => {
			if tokens.len() != 2 {
				return Err("usage: rand <digits>".to_string());
			}
			let digits: usize = tokens[1]
				.parse()
				.map_err(|_| "usage: rand <digits>".to_string())?;
			let value = Rational::random(digits, rng).map_err(|e| e.to_string())?;
			Ok(Some(value.to_string()))
		}
		"frac" => {
			let value = eval_expr(&tokens[1..])?;
			Ok(Some(value.to_fraction()))
		}
		"simplify" => {
			let (mut value, used) = parse_value(&tokens[1..])?;
			let budget = match tokens.get(1 + used) {
				None => DEFAULT_SIMPLIFY_BUDGET_MS,
				Some(arg) => arg
					.parse()
					.map_err(|_| "usage: simplify <value> [budget_ms]".to_string())?,
			};
			if tokens.len() > 2 + used {
				return Err("usage: simplify <value> [budget_ms]".to_string());
			}
			let start = Instant::now();
			let timeout = Timeout::new(budget, move || {
				u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
			});
			let int = Either {
				a: ctrl_c,
				b: &timeout,
			};
			let complete = value.simplify(&int);
			let mut out = value.to_fraction();
			if !complete {
				out.push_str(" (partial)");
			}
			Ok(Some(out))
		}
		_ => {
			let value = eval_expr(&tokens)?;
			Ok(Some(value.to_string()))
		}
	}
}

fn eval_expr(tokens: &[&str]) -> Result<Rational, String> {
	let (mut acc, mut i) = parse_value(tokens)?;
	while i < tokens.len() {
		let op = tokens[i];
		i += 1;
		let (rhs, used) = parse_value(&tokens[i..])?;
		i += used;
		match op {
			"+" => {
				acc.add(&rhs);
			}
			"-" => {
				acc.subtract(&rhs);
			}
			"*" | "x" => {
				acc.multiply(&rhs);
			}
			"/" => {
				acc.divide(&rhs).map_err(|e| e.to_string())?;
			}
			"%" => {
				acc.modulus(&rhs).map_err(|e| e.to_string())?;
			}
			_ => return Err(format!("unknown operator '{op}'")),
		}
	}
	Ok(acc)
}

// A value is one token, or two for a mixed fraction: an integer token
// followed by an unsigned num/den token.
fn parse_value(tokens: &[&str]) -> Result<(Rational, usize), String> {
	let Some(&first) = tokens.first() else {
		return Err("expected a number".to_string());
	};
	if let Some(&second) = tokens.get(1) {
		if is_integer_literal(first) && is_fraction_literal(second) {
			let combined = format!("{first} {second}");
			if let Ok(value) = combined.parse() {
				return Ok((value, 2));
			}
		}
	}
	match first.parse() {
		Ok(value) => Ok((value, 1)),
		Err(e) => Err(e.to_string()),
	}
}

fn is_integer_literal(s: &str) -> bool {
	let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
	!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_fraction_literal(s: &str) -> bool {
	matches!(
		s.split_once('/'),
		Some((num, den))
			if !num.is_empty()
				&& !den.is_empty()
				&& num.bytes().all(|b| b.is_ascii_digit())
				&& den.bytes().all(|b| b.is_ascii_digit())
	)
}

#[cfg(test)]
mod tests {
	use super::evaluate;
	use exact_core::Never;

	struct FixedRng;
	impl exact_core::Random for FixedRng {
		fn uniform(&mut self) -> f64 {
			0.5
		}
	}

	#[track_caller]
	fn eval(line: &str) -> String {
		evaluate(line, &Never, &mut FixedRng).unwrap().unwrap()
	}

	#[test]
	fn blank_input() {
		assert_eq!(evaluate("", &Never, &mut FixedRng).unwrap(), None);
		assert_eq!(evaluate("   ", &Never, &mut FixedRng).unwrap(), None);
	}

	#[test]
	fn single_values() {
		assert_eq!(eval("1/3"), "0.[3]");
		assert_eq!(eval("-4 538/1284"), "-4.4[19003115264797507788161993769470404984423676012461059]");
		assert_eq!(eval("42"), "42");
	}

	#[test]
	fn operator_chains() {
		assert_eq!(eval("1/3 + 1/6"), "0.5");
		assert_eq!(eval("22 % 3"), "1");
		assert_eq!(eval("1 1/2 * 2"), "3");
		// the first operand is integer-only, so the fractional part of the
		// right-hand side is discarded
		assert_eq!(eval("5 - 12.5"), "-7");
	}

	#[test]
	fn frac_command() {
		assert_eq!(eval("frac 1/3 + 1/6"), "0 9/18");
	}

	#[test]
	fn simplify_command() {
		assert_eq!(eval("simplify 0.[3]"), "0 1/3");
		assert_eq!(eval("simplify 4/8 0"), "0 1/2");
	}

	#[test]
	fn errors() {
		assert!(evaluate("1/0", &Never, &mut FixedRng).is_err());
		assert!(evaluate("1 ? 2", &Never, &mut FixedRng).is_err());
		assert!(evaluate("rand", &Never, &mut FixedRng).is_err());
		assert!(evaluate("1 +", &Never, &mut FixedRng).is_err());
	}
}
