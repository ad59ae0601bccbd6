use num_integer::Integer;

/// Default tolerance for comparing doubles.
pub const STANDARD_PRECISION: f64 = 1e-8;

/// Magnitude above which numbers are printed in scientific notation.
const SCIENTIFIC_THRESHOLD: f64 = 1e15;

/// Largest magnitude up to which every integer is an exact `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Tolerance-based equality. Infinities are only equal to themselves and NaN
/// is never equal to anything.
pub fn is_equal(a: f64, b: f64, eps: f64) -> bool {
  if a == b {
    return true;
  }
  a - eps <= b && b <= a + eps
}

/// `a > b` beyond the tolerance.
pub fn is_greater(a: f64, b: f64, eps: f64) -> bool {
  a > b + eps
}

/// `a >= b` up to the tolerance.
pub fn is_greater_equal(a: f64, b: f64, eps: f64) -> bool {
  a + eps > b
}

pub fn is_integer(x: f64, eps: f64) -> bool {
  x.is_finite() && is_equal(x, x.round(), eps)
}

/// Greatest common divisor, always non-negative.
pub fn gcd(a: i64, b: i64) -> i64 {
  a.gcd(&b)
}

/// Real power with the undefined forms `∞^0` and `1^±∞` mapped to NaN
/// instead of IEEE's 1.
pub fn pow(base: f64, exponent: f64, eps: f64) -> f64 {
  if base.is_infinite() && exponent == 0.0 {
    return f64::NAN;
  }
  if is_equal(base, 1.0, eps) && exponent.is_infinite() {
    return f64::NAN;
  }
  base.powf(exponent)
}

/// Computes `base^(a/b)` for a negative base as `(base^a)^(1/b)` so that odd
/// roots stay real: `(-8)^(1/3) = -2`. Even roots of a negative number are
/// NaN. When `a` or `b` is not an integer this is the plain real power.
pub fn rational_power(base: f64, a: f64, b: f64, eps: f64) -> f64 {
  if !is_integer(a, eps) {
    return pow(base, a / b, eps);
  }
  if b == 0.0 {
    return f64::NAN;
  }
  // beyond 2^53 the integer conversion below is no longer exact
  if !is_integer(b, eps)
    || a.abs() > MAX_EXACT_INTEGER
    || b.abs() > MAX_EXACT_INTEGER
  {
    return pow(base, a / b, eps);
  }

  let mut numerator = a.round() as i64;
  let mut denominator = b.round() as i64;
  let divisor = gcd(numerator, denominator);
  numerator /= divisor;
  denominator /= divisor;

  let mut base = base;
  if numerator != 1 {
    base = base.powf(numerator as f64);
  }
  if base > 0.0 {
    return base.powf(1.0 / denominator as f64);
  }
  if denominator.unsigned_abs() % 2 == 1 {
    return -(-base).powf(1.0 / denominator as f64);
  }
  f64::NAN
}

/// Renders a number with at most `decimals` decimals, dropping trailing
/// zeros. Undefined numbers render as `?`.
pub fn format_number(x: f64, decimals: usize) -> String {
  if x.is_nan() {
    return "?".to_string();
  }
  if x.is_infinite() {
    return if x > 0.0 { "∞" } else { "-∞" }.to_string();
  }
  if x.abs() >= SCIENTIFIC_THRESHOLD {
    return format!("{:e}", x);
  }

  let mut s = format!("{:.*}", decimals, x);
  if s.contains('.') {
    let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
    s.truncate(trimmed);
  }
  if s == "-0" {
    s = "0".to_string();
  }
  s
}
