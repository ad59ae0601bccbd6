//! Construction objects as seen by the evaluator: an opaque handle exposing
//! just the coordinates and predicates the operator handlers need.

use std::fmt;

use crate::kernel::numeric::{self, format_number};
use crate::kernel::vector::cross3;
use crate::node::{ExpressionNode, Operation};
use crate::template::StringTemplate;
use crate::value::Function;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoKind {
  Point,
  Vector,
  Line,
}

pub trait GeometricObject: fmt::Debug {
  fn kind(&self) -> GeoKind;

  fn label(&self) -> Option<&str> {
    None
  }

  /// First coordinate; for lines the x coefficient.
  fn x(&self) -> f64;

  /// Second coordinate; for lines the y coefficient.
  fn y(&self) -> f64;

  /// Homogeneous coordinate; for lines the constant term.
  fn z(&self) -> f64 {
    1.0
  }

  fn is_defined(&self) -> bool;

  fn is_infinite(&self) -> bool {
    self.x().is_infinite() || self.y().is_infinite()
  }

  /// Object-specific equality, used by `==` between two objects.
  fn is_equal(&self, other: &dyn GeometricObject, eps: f64) -> bool;

  /// A real function of `x` describing this object, if it has one.
  fn as_function(&self) -> Option<Function> {
    None
  }

  fn to_value_string(&self, tpl: &StringTemplate) -> String;

  fn to_latex_string(&self, tpl: &StringTemplate) -> String {
    self.to_value_string(tpl)
  }
}

/// A free point with Cartesian coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPoint {
  label: Option<String>,
  x: f64,
  y: f64,
}

impl GeoPoint {
  pub fn new(x: f64, y: f64) -> Self {
    GeoPoint { label: None, x, y }
  }

  pub fn labeled(label: impl Into<String>, x: f64, y: f64) -> Self {
    GeoPoint {
      label: Some(label.into()),
      x,
      y,
    }
  }

  pub fn undefined() -> Self {
    GeoPoint::new(f64::NAN, f64::NAN)
  }
}

impl GeometricObject for GeoPoint {
  fn kind(&self) -> GeoKind {
    GeoKind::Point
  }

  fn label(&self) -> Option<&str> {
    self.label.as_deref()
  }

  fn x(&self) -> f64 {
    self.x
  }

  fn y(&self) -> f64 {
    self.y
  }

  fn is_defined(&self) -> bool {
    !(self.x.is_nan() || self.y.is_nan())
  }

  fn is_equal(&self, other: &dyn GeometricObject, eps: f64) -> bool {
    other.kind() == GeoKind::Point
      && self.is_defined()
      && other.is_defined()
      && numeric::is_equal(self.x, other.x(), eps)
      && numeric::is_equal(self.y, other.y(), eps)
  }

  fn to_value_string(&self, tpl: &StringTemplate) -> String {
    format!(
      "({}, {})",
      format_number(self.x, tpl.decimals),
      format_number(self.y, tpl.decimals)
    )
  }
}

/// The line `a x + b y + c = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoLine {
  label: Option<String>,
  a: f64,
  b: f64,
  c: f64,
}

impl GeoLine {
  pub fn new(a: f64, b: f64, c: f64) -> Self {
    GeoLine {
      label: None,
      a,
      b,
      c,
    }
  }

  pub fn labeled(label: impl Into<String>, a: f64, b: f64, c: f64) -> Self {
    GeoLine {
      label: Some(label.into()),
      a,
      b,
      c,
    }
  }

}

impl GeometricObject for GeoLine {
  fn kind(&self) -> GeoKind {
    GeoKind::Line
  }

  fn label(&self) -> Option<&str> {
    self.label.as_deref()
  }

  fn x(&self) -> f64 {
    self.a
  }

  fn y(&self) -> f64 {
    self.b
  }

  fn z(&self) -> f64 {
    self.c
  }

  fn is_defined(&self) -> bool {
    [self.a, self.b, self.c].iter().all(|v| v.is_finite())
      && !(self.a == 0.0 && self.b == 0.0)
  }

  fn is_equal(&self, other: &dyn GeometricObject, eps: f64) -> bool {
    if other.kind() != GeoKind::Line || !self.is_defined() {
      return false;
    }
    // proportional coefficient triples describe the same line
    let cross =
      cross3([self.a, self.b, self.c], [other.x(), other.y(), other.z()]);
    cross.iter().all(|v| numeric::is_equal(*v, 0.0, eps))
  }

  /// Non-vertical lines are the graph of `y = -(a x + c) / b`.
  fn as_function(&self) -> Option<Function> {
    if self.b == 0.0 || !self.is_defined() {
      return None;
    }
    let slope = ExpressionNode::binary(
      Operation::Multiply,
      ExpressionNode::number(-self.a / self.b),
      ExpressionNode::variable("x"),
    );
    let body = ExpressionNode::binary(
      Operation::Plus,
      slope,
      ExpressionNode::number(-self.c / self.b),
    );
    Some(Function::new(vec!["x".to_string()], body))
  }

  fn to_value_string(&self, tpl: &StringTemplate) -> String {
    if !self.is_defined() {
      return "?".to_string();
    }
    let scale = if self.b != 0.0 { self.b } else { self.a };
    let (a, b, c) = (self.a / scale, self.b / scale, self.c / scale);
    let mut lhs = Vec::new();
    if a != 0.0 {
      lhs.push(format!("{}x", format_number(a, tpl.decimals)));
    }
    if b != 0.0 {
      let sign = if lhs.is_empty() {
        if b < 0.0 { "-" } else { "" }
      } else if b < 0.0 {
        " - "
      } else {
        " + "
      };
      let coefficient = format_number(b.abs(), tpl.decimals);
      if coefficient == "1" {
        lhs.push(format!("{sign}y"));
      } else {
        lhs.push(format!("{sign}{coefficient}y"));
      }
    }
    format!("{} = {}", lhs.concat(), format_number(-c, tpl.decimals))
  }
}
