#[allow(unused_imports)]
use super::*;

/// NOT and the coordinate extractors `x(..)`, `y(..)`, `real(..)` and
/// `imaginary(..)`.
pub fn handle_unary(
  operation: Operation,
  arg: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  if let Value::List(items) = arg {
    return map_unary(operation, items, tpl, ctx);
  }

  match operation {
    Operation::Not => match arg {
      Value::Boolean(b) => Ok(Value::Boolean(!b)),
      _ => Err(illegal_unary(
        ErrorKind::IllegalBoolean,
        operation.symbol(),
        arg,
        "",
      )),
    },
    Operation::XCoord | Operation::Real => {
      coordinate(operation, arg, 0).map(Value::Number)
    }
    Operation::YCoord | Operation::Imaginary => {
      coordinate(operation, arg, 1).map(Value::Number)
    }
    _ => Err(illegal_argument(arg)),
  }
}

fn coordinate(
  operation: Operation,
  arg: &Value,
  index: usize,
) -> Result<f64, EvalError> {
  let value = match arg {
    Value::Vector(v) => Some(if index == 0 { v.x } else { v.y }),
    Value::Vector3D(v) => Some(v[index]),
    Value::Geo(geo) => Some(if index == 0 { geo.x() } else { geo.y() }),
    Value::Number(n) => match operation {
      Operation::Real => Some(*n),
      Operation::Imaginary => Some(0.0),
      _ => None,
    },
    _ => None,
  };
  value.ok_or_else(|| {
    illegal_unary(ErrorKind::IllegalArgument, operation.symbol(), arg, ")")
  })
}
