#[allow(unused_imports)]
use super::*;

/// `f(x)` and `f(P)`.
#[tracing::instrument(level = "trace", skip_all, fields(arg = %rt.tag()))]
pub fn handle_function(
  lt: &Value,
  rt: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  if let Value::Number(_) = rt {
    if let Value::SymbolicCell(cell) = lt {
      if let Some(output) = cell.output() {
        return evaluate_symbolic_cell(output, rt, ctx);
      }
    }
    if let Some(f) = function_view(lt) {
      if f.var_count() == 1 {
        return evaluate_function(&f, std::slice::from_ref(rt), tpl, ctx);
      }
    }
    return Err(illegal_argument(rt));
  }

  if let (Some((x, y)), Some(f)) = (point_coords(rt), function_view(lt)) {
    match f.var_count() {
      1 => return evaluate_function(&f, &[Value::Number(x)], tpl, ctx),
      2 => {
        let args = [Value::Number(x), Value::Number(y)];
        return evaluate_function(&f, &args, tpl, ctx);
      }
      _ => {}
    }
  }
  Err(illegal_argument(rt))
}

/// `f(a, b, ...)` with the arguments collected in a list.
#[tracing::instrument(level = "trace", skip_all)]
pub fn handle_function_nvar(
  lt: &Value,
  rt: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  let (Some(f), Value::List(args)) = (function_view(lt), rt) else {
    return Err(illegal_argument(rt));
  };
  let arity = f.var_count();

  if args.len() == arity && all_numbers(args) {
    return evaluate_function(&f, args, tpl, ctx);
  }

  if let [arg] = args.as_slice() {
    if arity == 2 {
      if let Some((x, y)) = point_coords(arg) {
        let args = [Value::Number(x), Value::Number(y)];
        return evaluate_function(&f, &args, tpl, ctx);
      }
    }
    if let Value::List(inner) = arg {
      if inner.len() == arity && all_numbers(inner) {
        return evaluate_function(&f, inner, tpl, ctx);
      }
      // f({A, B, C}) for a function of two variables
      if arity == 2 && !inner.is_empty() {
        let points: Option<Vec<_>> = inner.iter().map(point_coords).collect();
        if let Some(points) = points {
          return points
            .into_iter()
            .map(|(x, y)| {
              let args = [Value::Number(x), Value::Number(y)];
              evaluate_function(&f, &args, tpl, ctx)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List);
        }
      }
    }
  }
  Err(illegal_argument(rt))
}

fn all_numbers(items: &[Value]) -> bool {
  items.iter().all(|item| matches!(item, Value::Number(_)))
}

/// Evaluates the body of `f` with its variables bound to `args`. Boolean
/// functions yield a Boolean, all others a Number (NaN when the body does
/// not evaluate to one).
pub fn evaluate_function(
  f: &Function,
  args: &[Value],
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  if args.len() != f.var_count() {
    return Err(illegal_argument(&Value::List(args.to_vec())));
  }
  let value = evaluate(&f.expand(args), tpl, ctx)?;
  if f.is_boolean() {
    return Ok(Value::Boolean(value.as_boolean().unwrap_or(false)));
  }
  Ok(match value {
    Value::Number(_) | Value::Boolean(_) => value,
    _ => Value::Number(f64::NAN),
  })
}

/// Substitutes the argument into the cell's output, lets the CAS evaluate it
/// and turns the resulting text back into a value.
fn evaluate_symbolic_cell(
  output: &Function,
  arg: &Value,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  let cas = ctx
    .cas()
    .ok_or(EvalError::MissingCollaborator("CAS bridge"))?;
  let algebra = ctx
    .algebra()
    .ok_or(EvalError::MissingCollaborator("algebra processor"))?;

  let node = output.expand(std::slice::from_ref(arg));
  tracing::trace!("evaluating symbolic cell through the CAS");
  let result = cas.evaluate_symbolic(&node, &StringTemplate::NUMERIC)?;
  tracing::trace!(%result, "CAS result");
  algebra.process_algebra_command(&result)
}

/// `f op g` as a new function over the union of both variable lists.
pub fn combine_functions(
  operation: Operation,
  f: &Function,
  g: &Function,
) -> Function {
  let mut vars = f.vars().to_vec();
  for var in g.vars() {
    if !vars.contains(var) {
      vars.push(var.clone());
    }
  }
  let body = ExpressionNode::binary(
    operation,
    Rc::clone(f.body()),
    Rc::clone(g.body()),
  );
  Function::new(vars, body).with_boolean(operation.yields_boolean())
}

/// `f op operand` (or `operand op f` when `function_on_left` is false),
/// keeping the operand as written.
pub fn function_with_operand(
  operation: Operation,
  f: &Function,
  operand: &ExpressionNode,
  function_on_left: bool,
) -> Function {
  let body = Rc::clone(f.body());
  let operand = Rc::new(operand.clone());
  let combined = if function_on_left {
    ExpressionNode::binary(operation, body, operand)
  } else {
    ExpressionNode::binary(operation, operand, body)
  };
  Function::new(f.vars().to_vec(), combined)
    .with_boolean(operation.yields_boolean())
}
