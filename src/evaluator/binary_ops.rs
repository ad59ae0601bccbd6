#[allow(unused_imports)]
use super::*;

pub fn handle_plus(
  app: Application,
  lt: &Value,
  rt: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  match (lt, rt) {
    (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
    (Value::Vector(v), Value::Vector(w)) => Ok(Value::Vector(v.add(*w))),
    // complex addition: the number joins the real part
    (Value::Vector(v), Value::Number(n)) | (Value::Number(n), Value::Vector(v)) => {
      Ok(Value::Vector(v.add_real(*n)))
    }
    (Value::Vector3D(a), Value::Vector3D(b)) => {
      Ok(Value::Vector3D(vector::add3(*a, *b)))
    }
    (Value::List(items), Value::Vector(v)) => {
      if starts_with_number(items) {
        Ok(Value::Vector(list_as_point(items).add(*v)))
      } else {
        apply_right(items, app, rt, tpl, ctx)
      }
    }
    (Value::Vector(v), Value::List(items)) => {
      if starts_with_number(items) {
        Ok(Value::Vector(v.add(list_as_point(items))))
      } else {
        apply_left(items, app, lt, tpl, ctx)
      }
    }
    (Value::Text(_), _) | (_, Value::Text(_)) => {
      Ok(concatenate_text(lt, rt, app.holds_latex_text, tpl))
    }
    _ => Err(illegal_binary(lt, rt, ErrorKind::IllegalAddition, "+")),
  }
}

pub fn handle_minus(lt: &Value, rt: &Value) -> Result<Value, EvalError> {
  match (lt, rt) {
    (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a - b)),
    (Value::Vector(v), Value::Vector(w)) => Ok(Value::Vector(v.sub(*w))),
    (Value::Vector(v), Value::Number(n)) => Ok(Value::Vector(v.sub_real(*n))),
    (Value::Number(n), Value::Vector(v)) => {
      Ok(Value::Vector(Vec2::real_sub(*n, *v)))
    }
    (Value::Vector3D(a), Value::Vector3D(b)) => {
      Ok(Value::Vector3D(vector::sub3(*a, *b)))
    }
    (Value::List(items), Value::Vector(v)) => {
      Ok(Value::Vector(list_as_point(items).sub(*v)))
    }
    (Value::Vector(v), Value::List(items)) => {
      Ok(Value::Vector(v.sub(list_as_point(items))))
    }
    _ => Err(illegal_binary(lt, rt, ErrorKind::IllegalSubtraction, "-")),
  }
}

pub fn handle_mult(
  app: Application,
  lt: &Value,
  rt: &Value,
  tpl: &StringTemplate,
) -> Result<Value, EvalError> {
  match (lt, rt) {
    (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a * b)),
    (Value::Number(n), Value::Vector(v)) | (Value::Vector(v), Value::Number(n)) => {
      Ok(Value::Vector(v.scale(*n)))
    }
    (Value::Text(_), _) | (_, Value::Text(_)) => {
      Ok(concatenate_text(lt, rt, app.holds_latex_text, tpl))
    }
    (Value::Boolean(b), Value::Number(n)) | (Value::Number(n), Value::Boolean(b)) => {
      Ok(Value::Number(boolean_to_f64(*b) * n))
    }
    (Value::Vector(v), Value::Vector(w)) => {
      if v.is_complex() || w.is_complex() {
        Ok(Value::Vector(v.complex_mul(*w)))
      } else {
        Ok(Value::Number(v.inner(*w)))
      }
    }
    (Value::Number(n), Value::Vector3D(v)) | (Value::Vector3D(v), Value::Number(n)) => {
      Ok(Value::Vector3D(vector::scale3(*v, *n)))
    }
    (Value::Vector3D(a), Value::Vector3D(b)) => {
      Ok(Value::Number(vector::dot3(*a, *b)))
    }
    _ => Err(illegal_binary(lt, rt, ErrorKind::IllegalMultiplication, "*")),
  }
}

/// Division. Function operands never get here: `f / k` and `k / f` are
/// built symbolically by the dispatcher.
pub fn handle_divide(lt: &Value, rt: &Value) -> Result<Value, EvalError> {
  match (lt, rt) {
    (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a / b)),
    (Value::Vector(v), Value::Number(n)) => Ok(Value::Vector(v.div(*n))),
    // vector / vector only makes sense as complex division
    (Value::Vector(v), Value::Vector(w)) => Ok(Value::Vector(v.complex_div(*w))),
    (Value::Number(n), Value::Vector(v)) => {
      Ok(Value::Vector(Vec2::real_complex_div(*n, *v)))
    }
    (Value::Vector3D(v), Value::Number(n)) => {
      Ok(Value::Vector3D(vector::scale3(*v, 1.0 / n)))
    }
    _ => Err(illegal_binary(lt, rt, ErrorKind::IllegalDivision, "/")),
  }
}

pub fn handle_power(
  app: Application,
  lt: &Value,
  rt: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  let eps = ctx.tolerance();
  match (lt, rt) {
    (Value::Number(base), Value::Number(exponent)) => {
      if *base == std::f64::consts::E {
        return Ok(Value::Number(exponent.exp()));
      }
      if *base < 0.0 {
        if let Some((a, b)) = rational_exponent(app.right, tpl, ctx)? {
          return Ok(Value::Number(numeric::rational_power(*base, a, b, eps)));
        }
      }
      Ok(Value::Number(numeric::pow(*base, *exponent, eps)))
    }
    (Value::Vector(v), Value::Number(exponent)) => {
      if v.is_complex() {
        Ok(Value::Vector(v.complex_pow_real(*exponent)))
      } else if *exponent == 2.0 {
        Ok(Value::Number(v.inner(*v)))
      } else {
        Ok(Value::Number(f64::NAN))
      }
    }
    (Value::Vector(v), Value::Vector(w)) => Ok(Value::Vector(v.complex_pow(*w))),
    (Value::Number(base), Value::Vector(w)) => {
      Ok(Value::Vector(Vec2::real_complex_pow(*base, *w)))
    }
    (Value::Vector3D(v), Value::Number(exponent)) => {
      if *exponent == 2.0 {
        Ok(Value::Number(vector::dot3(*v, *v)))
      } else {
        Ok(Value::Number(f64::NAN))
      }
    }
    _ => Err(illegal_binary(lt, rt, ErrorKind::IllegalExponent, "^")),
  }
}

/// The numerator and denominator when the exponent, as written, is a
/// quotient of two numbers.
fn rational_exponent(
  exponent: &ExpressionNode,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Option<(f64, f64)>, EvalError> {
  let ExpressionNode::Internal {
    operation: Operation::Divide,
    left,
    right: Some(right),
    ..
  } = exponent.unwrapped()
  else {
    return Ok(None);
  };
  let numerator = evaluate(left, tpl, ctx)?;
  let denominator = evaluate(right, tpl, ctx)?;
  Ok(match (numerator, denominator) {
    (Value::Number(a), Value::Number(b)) => Some((a, b)),
    _ => None,
  })
}

pub fn handle_vector_product(
  lt: &Value,
  rt: &Value,
) -> Result<Value, EvalError> {
  match (lt, rt) {
    (Value::Vector(v), Value::Vector(w)) => {
      Ok(Value::Number(v.vector_product(*w)))
    }
    (Value::Vector3D(a), Value::Vector3D(b)) => {
      Ok(Value::Vector3D(vector::cross3(*a, *b)))
    }
    _ => Err(illegal_binary(
      lt,
      rt,
      ErrorKind::IllegalMultiplication,
      Operation::VectorProduct.symbol(),
    )),
  }
}

/// Joins the renderings of both operands into a new text. Non-text operands
/// render as LaTeX when the node holds LaTeX text.
pub fn concatenate_text(
  lt: &Value,
  rt: &Value,
  holds_latex_text: bool,
  tpl: &StringTemplate,
) -> Value {
  let render = |value: &Value| match value {
    Value::Text(s) => s.clone(),
    other if holds_latex_text => other.to_latex_string(tpl),
    other => other.to_defined_value_string(tpl),
  };
  let mut text = render(lt);
  text.push_str(&render(rt));
  Value::Text(text)
}
