//! Recursive evaluation of expression trees and the operator dispatcher.

use std::rc::Rc;

use crate::EvalError;
use crate::context::EvalContext;
use crate::geo::GeoKind;
use crate::kernel::numeric;
use crate::kernel::vector::{self, Vec2};
use crate::node::{ExpressionNode, Operation};
use crate::template::StringTemplate;
use crate::value::{Function, Value};

mod binary_ops;
mod comparison;
mod errors;
mod function_application;
mod listable;
mod type_helpers;
mod unary_ops;

pub use binary_ops::*;
pub use comparison::*;
pub use errors::*;
pub use function_application::*;
pub use listable::*;
pub use type_helpers::*;
pub use unary_ops::*;

/// One binary operator application: the operator, its operands before
/// evaluation and how concatenated text renders non-text operands.
#[derive(Debug, Clone, Copy)]
pub struct Application<'n> {
  pub operation: Operation,
  pub left: &'n ExpressionNode,
  pub right: &'n ExpressionNode,
  pub holds_latex_text: bool,
}

impl<'n> Application<'n> {
  pub fn new(
    operation: Operation,
    left: &'n ExpressionNode,
    right: &'n ExpressionNode,
  ) -> Self {
    Application {
      operation,
      left,
      right,
      holds_latex_text: false,
    }
  }
}

/// Evaluates `node`. Leaves evaluate to their value; internal nodes evaluate
/// both children and dispatch on the operator and the operand variants.
pub fn evaluate(
  node: &ExpressionNode,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  let (operation, left, right, holds_latex_text) = match node {
    ExpressionNode::Leaf(value) => return evaluate_value(value, tpl, ctx),
    ExpressionNode::Internal {
      operation,
      left,
      right,
      holds_latex_text,
    } => (*operation, left, right, *holds_latex_text),
  };

  let lt = evaluate(left, tpl, ctx)?;
  if operation == Operation::Identity {
    return Ok(lt);
  }
  if operation.is_unary() {
    return handle_unary(operation, &lt, tpl, ctx);
  }
  let Some(right) = right else {
    return Err(illegal_argument(&lt));
  };
  let rt = evaluate(right, tpl, ctx)?;

  let app = Application {
    operation,
    left,
    right,
    holds_latex_text,
  };
  apply_operation(app, lt, rt, tpl, ctx)
}

/// A value evaluates to itself unless it holds a deferred expression.
pub fn evaluate_value(
  value: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  match value {
    Value::Expression(node) => evaluate(node, tpl, ctx),
    Value::List(items) if contains_deferred(items) => items
      .iter()
      .map(|item| evaluate_value(item, tpl, ctx))
      .collect::<Result<Vec<_>, _>>()
      .map(Value::List),
    _ => Ok(value.clone()),
  }
}

/// Combines two evaluated operands: first the list and function special
/// cases, then the per-operator handlers.
pub fn apply_operation(
  app: Application,
  lt: Value,
  rt: Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  let has_text = matches!(lt, Value::Text(_)) || matches!(rt, Value::Text(_));
  let (lt, rt) = if app.operation.is_arithmetic() && !has_text {
    (coerce_geo_vector(lt), coerce_geo_vector(rt))
  } else {
    (lt, rt)
  };

  if let Some(result) = handle_special(app, &lt, &rt, tpl, ctx)? {
    return Ok(result);
  }
  handle_op(app, &lt, &rt, tpl, ctx)
}

/// Lists broadcast, matrices multiply vectors and functions combine into new
/// functions. Returns `None` when the ordinary handlers apply.
fn handle_special(
  app: Application,
  lt: &Value,
  rt: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Option<Value>, EvalError> {
  let op = app.operation;
  if op.is_equality_test() {
    return Ok(None);
  }

  let result = match (lt, rt) {
    (Value::List(items), Value::Vector(v)) if op == Operation::Multiply => {
      match matrix_times_vector(items, *v) {
        Some(product) => Value::Vector(product),
        None => apply_right(items, app, rt, tpl, ctx)?,
      }
    }
    (Value::List(a), Value::List(b)) if op == Operation::VectorProduct => {
      list_vector_product(a, b, lt, rt, tpl, ctx)?
    }
    (Value::List(_), Value::List(_)) if op != Operation::FunctionNVar => {
      return Err(illegal_binary(
        lt,
        rt,
        ErrorKind::IllegalListOperation,
        op.symbol(),
      ));
    }
    (Value::List(_), Value::Vector(_)) if op.is_plus_or_minus() => {
      return Ok(None);
    }
    (Value::List(_), Value::Text(_)) => return Ok(None),
    (Value::List(items), _) => apply_right(items, app, rt, tpl, ctx)?,

    (Value::Vector(v), Value::List(items)) if op == Operation::Multiply => {
      match vector_times_matrix(*v, items) {
        Some(product) => Value::Vector(product),
        None => apply_left(items, app, lt, tpl, ctx)?,
      }
    }
    (Value::Vector(_), Value::List(_)) if op.is_plus_or_minus() => {
      return Ok(None);
    }
    (Value::Text(_), Value::List(_)) => return Ok(None),
    (_, Value::List(items)) if op != Operation::FunctionNVar => {
      apply_left(items, app, lt, tpl, ctx)?
    }

    (Value::Function(f), Value::Function(g)) if op.combines_functions() => {
      Value::function(combine_functions(op, f, g))
    }
    (Value::Function(f), Value::Number(_)) if op.combines_functions() => {
      Value::function(function_with_operand(op, f, app.right, true))
    }
    (Value::Number(_), Value::Function(g)) if op.combines_functions() => {
      Value::function(function_with_operand(op, g, app.left, false))
    }
    _ => return Ok(None),
  };
  Ok(Some(result))
}

/// Per-operator dispatch on the operand variants.
pub fn handle_op(
  app: Application,
  lt: &Value,
  rt: &Value,
  tpl: &StringTemplate,
  ctx: &EvalContext,
) -> Result<Value, EvalError> {
  let op = app.operation;
  match op {
    Operation::Plus => handle_plus(app, lt, rt, tpl, ctx),
    Operation::Minus => handle_minus(lt, rt),
    Operation::Multiply => handle_mult(app, lt, rt, tpl),
    Operation::Divide => handle_divide(lt, rt),
    Operation::Power => handle_power(app, lt, rt, tpl, ctx),
    Operation::VectorProduct => handle_vector_product(lt, rt),
    Operation::EqualBoolean => Ok(Value::Boolean(eval_equals(lt, rt, ctx))),
    Operation::NotEqual => Ok(Value::Boolean(!eval_equals(lt, rt, ctx))),
    Operation::Less
    | Operation::Greater
    | Operation::LessEqual
    | Operation::GreaterEqual => handle_comparison(op, lt, rt, ctx),
    Operation::And | Operation::Or => handle_boolean(op, lt, rt),
    Operation::Function => handle_function(lt, rt, tpl, ctx),
    Operation::FunctionNVar => handle_function_nvar(lt, rt, tpl, ctx),
    Operation::Identity
    | Operation::Not
    | Operation::XCoord
    | Operation::YCoord
    | Operation::Real
    | Operation::Imaginary => Err(illegal_argument(rt)),
  }
}
