#[allow(unused_imports)]
use super::*;

/// Structural equality used by `==` and `!=`. Total: pairings without a
/// meaning are simply unequal.
pub fn eval_equals(lt: &Value, rt: &Value, ctx: &EvalContext) -> bool {
  let eps = ctx.tolerance();
  match (lt, rt) {
    (Value::Boolean(a), Value::Boolean(b)) => a == b,
    (Value::Number(a), Value::Number(b)) => numeric::is_equal(*a, *b, eps),
    (Value::Text(a), Value::Text(b)) => a == b,
    (Value::List(a), Value::List(b)) => {
      a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(x, y)| eval_equals(x, y, ctx))
    }
    (Value::Geo(a), Value::Geo(b)) => a.is_equal(b.as_ref(), eps),
    (Value::Vector(v), Value::Vector(w)) => v.is_equal(*w, eps),
    (Value::Vector3D(a), Value::Vector3D(b)) => vector::is_equal3(*a, *b, eps),
    (Value::Geo(geo), Value::Vector(v)) | (Value::Vector(v), Value::Geo(geo)) => {
      geo.kind() == GeoKind::Point
        && geo.is_defined()
        && v.is_equal(Vec2::new(geo.x(), geo.y()), eps)
    }
    _ => false,
  }
}

/// `<`, `>`, `<=` and `>=` on numbers (with tolerance) and texts.
pub fn handle_comparison(
  operation: Operation,
  lt: &Value,
  rt: &Value,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  let eps = ctx.tolerance();
  let result = match (lt, rt) {
    (Value::Number(a), Value::Number(b)) => match operation {
      Operation::Less => numeric::is_greater(*b, *a, eps),
      Operation::Greater => numeric::is_greater(*a, *b, eps),
      Operation::LessEqual => numeric::is_greater_equal(*b, *a, eps),
      _ => numeric::is_greater_equal(*a, *b, eps),
    },
    (Value::Text(a), Value::Text(b)) => match operation {
      Operation::Less => a < b,
      Operation::Greater => a > b,
      Operation::LessEqual => a <= b,
      _ => a >= b,
    },
    _ => {
      return Err(illegal_binary(
        lt,
        rt,
        ErrorKind::IllegalComparison,
        operation.symbol(),
      ));
    }
  };
  Ok(Value::Boolean(result))
}

pub fn handle_boolean(
  operation: Operation,
  lt: &Value,
  rt: &Value,
) -> Result<Value, EvalError> {
  match (lt, rt) {
    (Value::Boolean(a), Value::Boolean(b)) => Ok(Value::Boolean(
      if operation == Operation::And { *a && *b } else { *a || *b },
    )),
    _ => Err(illegal_binary(
      lt,
      rt,
      ErrorKind::IllegalBoolean,
      operation.symbol(),
    )),
  }
}
