#[allow(unused_imports)]
use super::*;

/// Rows and columns when every element is a list of the same non-zero
/// length.
pub fn matrix_dimensions(items: &[Value]) -> Option<(usize, usize)> {
  let cols = items.first()?.as_list()?.len();
  if cols == 0 {
    return None;
  }
  items
    .iter()
    .all(|row| row.as_list().is_some_and(|r| r.len() == cols))
    .then_some((items.len(), cols))
}

/// The matrix as rows of numbers, if it is one.
pub fn numeric_matrix(items: &[Value]) -> Option<Vec<Vec<f64>>> {
  matrix_dimensions(items)?;
  items
    .iter()
    .map(|row| row.as_list().and_then(list_to_doubles))
    .collect()
}

pub fn list_to_doubles(items: &[Value]) -> Option<Vec<f64>> {
  items.iter().map(Value::as_number).collect()
}

pub fn starts_with_number(items: &[Value]) -> bool {
  matches!(items.first(), Some(Value::Number(_)))
}

/// Reads `{x, y, ...}` as the point `(x, y)`; missing or non-numeric
/// coordinates are undefined.
pub fn list_as_point(items: &[Value]) -> Vec2 {
  let coord = |i: usize| {
    items.get(i).and_then(Value::as_number).unwrap_or(f64::NAN)
  };
  Vec2::new(coord(0), coord(1))
}

/// `M * v` for a 2x2 matrix, or the affine transform of `v` for a 3x3 one.
pub fn matrix_times_vector(items: &[Value], v: Vec2) -> Option<Vec2> {
  let rows = numeric_matrix(items)?;
  match (rows.len(), rows[0].len()) {
    (2, 2) => Some(v.multiply_matrix(&rows)),
    (3, 3) => Some(v.multiply_matrix_affine(&rows)),
    _ => None,
  }
}

/// `v * M` for a 2x2 matrix.
pub fn vector_times_matrix(v: Vec2, items: &[Value]) -> Option<Vec2> {
  let rows = numeric_matrix(items)?;
  (rows.len() == 2 && rows[0].len() == 2).then(|| v.multiply_matrix_left(&rows))
}

/// Geometric points and vectors take part in arithmetic as plain vectors.
pub fn coerce_geo_vector(value: Value) -> Value {
  if let Value::Geo(geo) = &value {
    if matches!(geo.kind(), GeoKind::Point | GeoKind::Vector) {
      return Value::point(geo.x(), geo.y());
    }
  }
  value
}

/// Coordinates of a value usable as a point argument.
pub fn point_coords(value: &Value) -> Option<(f64, f64)> {
  match value {
    Value::Vector(v) => Some((v.x, v.y)),
    Value::Geo(geo) if geo.kind() == GeoKind::Point => Some((geo.x(), geo.y())),
    _ => None,
  }
}

/// The function a value can be applied as: functions themselves, objects
/// with a function view and symbolic cells whose twin has one.
pub fn function_view(value: &Value) -> Option<Rc<Function>> {
  match value {
    Value::Function(f) => Some(Rc::clone(f)),
    Value::Geo(geo) => geo.as_function().map(Rc::new),
    Value::SymbolicCell(cell) => cell.twin()?.as_function().map(Rc::new),
    _ => None,
  }
}

/// Whether a list still holds deferred expressions, at any depth.
pub fn contains_deferred(items: &[Value]) -> bool {
  items.iter().any(|item| match item {
    Value::Expression(_) => true,
    Value::List(inner) => contains_deferred(inner),
    _ => false,
  })
}

pub fn boolean_to_f64(b: bool) -> f64 {
  if b { 1.0 } else { 0.0 }
}
