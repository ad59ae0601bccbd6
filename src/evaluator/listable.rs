#[allow(unused_imports)]
use super::*;

/// `{a, b, ...} op rt` as `{a op rt, b op rt, ...}`. Each element is combined
/// through the full dispatcher, so nested lists broadcast recursively and the
/// right operand keeps its unevaluated form.
pub fn apply_right(
  items: &[Value],
  app: Application,
  rt: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  tracing::trace!(op = ?app.operation, len = items.len(), "broadcast over left list");
  items
    .iter()
    .map(|item| {
      let item_node = ExpressionNode::leaf(item.clone());
      let item_app = Application {
        left: &item_node,
        ..app
      };
      apply_operation(item_app, item.clone(), rt.clone(), tpl, ctx)
    })
    .collect::<Result<Vec<_>, _>>()
    .map(Value::List)
}

/// `lt op {a, b, ...}` as `{lt op a, lt op b, ...}`.
pub fn apply_left(
  items: &[Value],
  app: Application,
  lt: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  tracing::trace!(op = ?app.operation, len = items.len(), "broadcast over right list");
  items
    .iter()
    .map(|item| {
      let item_node = ExpressionNode::leaf(item.clone());
      let item_app = Application {
        right: &item_node,
        ..app
      };
      apply_operation(item_app, lt.clone(), item.clone(), tpl, ctx)
    })
    .collect::<Result<Vec<_>, _>>()
    .map(Value::List)
}

/// Cross product of two lists of length 3. Lists of length 2 are lifted to
/// z = 0, giving `{0, 0, x1 y2 - y1 x2}`.
pub fn list_vector_product(
  a: &[Value],
  b: &[Value],
  lt: &Value,
  rt: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  // a_i * b_j - a_j * b_i
  let component = |i: usize, j: usize| -> Result<Value, EvalError> {
    let p = combine(Operation::Multiply, &a[i], &b[j], tpl, ctx)?;
    let q = combine(Operation::Multiply, &a[j], &b[i], tpl, ctx)?;
    combine(Operation::Minus, &p, &q, tpl, ctx)
  };

  match (a.len(), b.len()) {
    (3, 3) => Ok(Value::List(vec![
      component(1, 2)?,
      component(2, 0)?,
      component(0, 1)?,
    ])),
    (2, 2) => Ok(Value::List(vec![
      Value::Number(0.0),
      Value::Number(0.0),
      component(0, 1)?,
    ])),
    _ => Err(illegal_binary(
      lt,
      rt,
      ErrorKind::IllegalArgument,
      Operation::VectorProduct.symbol(),
    )),
  }
}

/// Combines two already evaluated values through the dispatcher.
fn combine(
  operation: Operation,
  lt: &Value,
  rt: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  let left = ExpressionNode::leaf(lt.clone());
  let right = ExpressionNode::leaf(rt.clone());
  let app = Application::new(operation, &left, &right);
  apply_operation(app, lt.clone(), rt.clone(), tpl, ctx)
}

/// Unary operators map over lists element-wise.
pub fn map_unary(
  operation: Operation,
  items: &[Value],
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  items
    .iter()
    .map(|item| handle_unary(operation, item, tpl, ctx))
    .collect::<Result<Vec<_>, _>>()
    .map(Value::List)
}
