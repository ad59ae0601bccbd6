use num_complex::Complex64;

use super::numeric;

/// How the two components of a [`Vec2`] are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VectorMode {
  #[default]
  Cartesian,
  /// Real and imaginary part of a complex number.
  Complex,
}

/// A 2D vector or point, doubling as a complex number in complex mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
  pub x: f64,
  pub y: f64,
  pub mode: VectorMode,
}

impl Vec2 {
  pub fn new(x: f64, y: f64) -> Self {
    Vec2 {
      x,
      y,
      mode: VectorMode::Cartesian,
    }
  }

  pub fn complex(re: f64, im: f64) -> Self {
    Vec2 {
      x: re,
      y: im,
      mode: VectorMode::Complex,
    }
  }

  pub fn is_complex(&self) -> bool {
    self.mode == VectorMode::Complex
  }

  /// Complex mode wins if either operand carries it.
  fn merged_mode(self, other: Vec2) -> VectorMode {
    if self.is_complex() || other.is_complex() {
      VectorMode::Complex
    } else {
      VectorMode::Cartesian
    }
  }

  pub fn to_complex(self) -> Complex64 {
    Complex64::new(self.x, self.y)
  }

  fn from_complex(c: Complex64, mode: VectorMode) -> Self {
    Vec2 {
      x: c.re,
      y: c.im,
      mode,
    }
  }

  pub fn add(self, other: Vec2) -> Vec2 {
    Vec2 {
      x: self.x + other.x,
      y: self.y + other.y,
      mode: self.merged_mode(other),
    }
  }

  pub fn sub(self, other: Vec2) -> Vec2 {
    Vec2 {
      x: self.x - other.x,
      y: self.y - other.y,
      mode: self.merged_mode(other),
    }
  }

  /// Complex addition of a real number: only the real part changes.
  pub fn add_real(self, r: f64) -> Vec2 {
    Vec2 {
      x: self.x + r,
      ..self
    }
  }

  pub fn sub_real(self, r: f64) -> Vec2 {
    Vec2 {
      x: self.x - r,
      ..self
    }
  }

  /// `r - v` as complex subtraction.
  pub fn real_sub(r: f64, v: Vec2) -> Vec2 {
    Vec2 {
      x: r - v.x,
      y: -v.y,
      mode: v.mode,
    }
  }

  pub fn scale(self, k: f64) -> Vec2 {
    Vec2 {
      x: self.x * k,
      y: self.y * k,
      mode: self.mode,
    }
  }

  pub fn div(self, k: f64) -> Vec2 {
    Vec2 {
      x: self.x / k,
      y: self.y / k,
      mode: self.mode,
    }
  }

  /// Inner (dot) product.
  pub fn inner(self, other: Vec2) -> f64 {
    self.x * other.x + self.y * other.y
  }

  /// z component of the 3D cross product of the two vectors lifted to z = 0.
  pub fn vector_product(self, other: Vec2) -> f64 {
    self.x * other.y - self.y * other.x
  }

  pub fn complex_mul(self, other: Vec2) -> Vec2 {
    Vec2::from_complex(
      self.to_complex() * other.to_complex(),
      self.merged_mode(other),
    )
  }

  pub fn complex_div(self, other: Vec2) -> Vec2 {
    Vec2::from_complex(
      self.to_complex() / other.to_complex(),
      self.merged_mode(other),
    )
  }

  /// `r / v` with `r` promoted to the complex number `r + 0i`.
  pub fn real_complex_div(r: f64, v: Vec2) -> Vec2 {
    Vec2::from_complex(Complex64::new(r, 0.0) / v.to_complex(), v.mode)
  }

  pub fn complex_pow_real(self, exponent: f64) -> Vec2 {
    Vec2::from_complex(
      complex_power(self.to_complex(), Complex64::new(exponent, 0.0)),
      self.mode,
    )
  }

  pub fn complex_pow(self, exponent: Vec2) -> Vec2 {
    Vec2::from_complex(
      complex_power(self.to_complex(), exponent.to_complex()),
      self.merged_mode(exponent),
    )
  }

  /// `r ^ v` with `r` promoted to the complex number `r + 0i`.
  pub fn real_complex_pow(r: f64, v: Vec2) -> Vec2 {
    Vec2::from_complex(
      complex_power(Complex64::new(r, 0.0), v.to_complex()),
      v.mode,
    )
  }

  /// `M * v` for the 2x2 matrix `rows`.
  pub fn multiply_matrix(self, rows: &[Vec<f64>]) -> Vec2 {
    Vec2 {
      x: rows[0][0] * self.x + rows[0][1] * self.y,
      y: rows[1][0] * self.x + rows[1][1] * self.y,
      mode: self.mode,
    }
  }

  /// `M * (x, y, 1)` for the 3x3 matrix `rows`, projected back to the plane.
  pub fn multiply_matrix_affine(self, rows: &[Vec<f64>]) -> Vec2 {
    let x = rows[0][0] * self.x + rows[0][1] * self.y + rows[0][2];
    let y = rows[1][0] * self.x + rows[1][1] * self.y + rows[1][2];
    let w = rows[2][0] * self.x + rows[2][1] * self.y + rows[2][2];
    Vec2 {
      x: x / w,
      y: y / w,
      mode: self.mode,
    }
  }

  /// `v * M` for the 2x2 matrix `rows`, with `v` as a row vector.
  pub fn multiply_matrix_left(self, rows: &[Vec<f64>]) -> Vec2 {
    Vec2 {
      x: self.x * rows[0][0] + self.y * rows[1][0],
      y: self.x * rows[0][1] + self.y * rows[1][1],
      mode: self.mode,
    }
  }

  pub fn is_equal(self, other: Vec2, eps: f64) -> bool {
    numeric::is_equal(self.x, other.x, eps)
      && numeric::is_equal(self.y, other.y, eps)
  }
}

fn complex_power(base: Complex64, exponent: Complex64) -> Complex64 {
  if base.re == 0.0 && base.im == 0.0 {
    return if exponent.re == 0.0 && exponent.im == 0.0 {
      Complex64::new(1.0, 0.0)
    } else if exponent.re > 0.0 {
      Complex64::new(0.0, 0.0)
    } else {
      Complex64::new(f64::NAN, f64::NAN)
    };
  }
  // integer exponents by repeated multiplication keep e.g. i^2 exactly -1
  if exponent.im == 0.0
    && exponent.re.fract() == 0.0
    && exponent.re.abs() <= i32::MAX as f64
  {
    return base.powi(exponent.re as i32);
  }
  base.powc(exponent)
}

pub fn add3(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
  [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub3(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
  [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale3(a: [f64; 3], k: f64) -> [f64; 3] {
  [a[0] * k, a[1] * k, a[2] * k]
}

pub fn dot3(a: [f64; 3], b: [f64; 3]) -> f64 {
  a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross3(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
  [
    a[1] * b[2] - a[2] * b[1],
    a[2] * b[0] - a[0] * b[2],
    a[0] * b[1] - a[1] * b[0],
  ]
}

pub fn is_equal3(a: [f64; 3], b: [f64; 3], eps: f64) -> bool {
  a.iter().zip(b.iter()).all(|(p, q)| numeric::is_equal(*p, *q, eps))
}
