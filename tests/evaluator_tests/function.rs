use super::*;

use std::cell::RefCell;

use geoexpr::value::SymbolicCell;
use geoexpr::{AlgebraProcessor, CasBridge};

/// f(x) = x^2 + 1
fn square_plus_one() -> ExpressionNode {
  let body = bin(
    Operation::Plus,
    bin(Operation::Power, var("x"), num(2.0)),
    num(1.0),
  );
  func(&["x"], body)
}

/// f(x, y) = x * y
fn product() -> ExpressionNode {
  func(&["x", "y"], bin(Operation::Multiply, var("x"), var("y")))
}

fn call(f: ExpressionNode, arg: ExpressionNode) -> ExpressionNode {
  bin(Operation::Function, f, arg)
}

fn call_nvar(f: ExpressionNode, args: Vec<Value>) -> ExpressionNode {
  bin(Operation::FunctionNVar, f, leaf(Value::List(args)))
}

mod application {
  use super::*;

  #[test]
  fn at_a_number() {
    assert_eq!(interpret(&call(square_plus_one(), num(3.0))).unwrap(), "10");
  }

  #[test]
  fn boolean_function() {
    let body = bin(Operation::Greater, var("x"), num(2.0));
    let g = leaf(Value::function(Function::boolean(vec!["x".into()], body)));
    assert_eq!(interpret(&call(g.clone(), num(3.0))).unwrap(), "true");
    assert_eq!(interpret(&call(g, num(1.0))).unwrap(), "false");
  }

  #[test]
  fn at_a_point() {
    assert_eq!(interpret(&call(product(), point(2.0, 3.0))).unwrap(), "6");
    let a = leaf(Value::Geo(Rc::new(GeoPoint::new(4.0, 0.5))));
    assert_eq!(interpret(&call(product(), a)).unwrap(), "2");
  }

  #[test]
  fn over_a_list() {
    let node = call(square_plus_one(), list(&[1.0, 2.0, 3.0]));
    assert_eq!(interpret(&node).unwrap(), "{2, 5, 10}");
  }

  #[test]
  fn illegal_arguments() {
    assert_eq!(
      error_kind(&call(square_plus_one(), text("a"))),
      ErrorKind::IllegalArgument
    );
    assert_eq!(
      error_kind(&call(product(), num(1.0))),
      ErrorKind::IllegalArgument
    );
  }

  #[test]
  fn line_as_function() {
    // 2x + y - 3 = 0, i.e. y = -2x + 3
    let g = leaf(Value::Geo(Rc::new(GeoLine::new(2.0, 1.0, -3.0))));
    assert_eq!(interpret(&call(g, num(1.0))).unwrap(), "1");
  }

  #[test]
  fn vertical_line_is_not_a_function() {
    let g = leaf(Value::Geo(Rc::new(GeoLine::new(1.0, 0.0, -2.0))));
    assert_eq!(error_kind(&call(g, num(1.0))), ErrorKind::IllegalArgument);
  }
}

mod several_variables {
  use super::*;

  #[test]
  fn matching_arity() {
    let node = call_nvar(product(), vec![Value::Number(2.0), Value::Number(3.0)]);
    assert_eq!(interpret(&node).unwrap(), "6");
  }

  #[test]
  fn single_point_argument() {
    let node = call_nvar(product(), vec![Value::point(2.0, 5.0)]);
    assert_eq!(interpret(&node).unwrap(), "10");
  }

  #[test]
  fn single_numeric_list_argument() {
    let node = call_nvar(product(), vec![Value::numbers(&[2.0, 4.0])]);
    assert_eq!(interpret(&node).unwrap(), "8");
  }

  #[test]
  fn list_of_points() {
    let points = Value::List(vec![Value::point(1.0, 1.0), Value::point(2.0, 3.0)]);
    let node = call_nvar(product(), vec![points]);
    assert_eq!(interpret(&node).unwrap(), "{1, 6}");
  }

  #[test]
  fn wrong_arity() {
    let node = call_nvar(product(), vec![Value::Number(1.0); 3]);
    assert_eq!(error_kind(&node), ErrorKind::IllegalArgument);
    let node = call_nvar(product(), vec![Value::Boolean(true), Value::Number(1.0)]);
    assert_eq!(error_kind(&node), ErrorKind::IllegalArgument);
  }
}

mod symbolic_arithmetic {
  use super::*;

  #[test]
  fn function_times_number() {
    let scaled = bin(Operation::Multiply, square_plus_one(), num(2.0));
    assert_eq!(interpret(&scaled).unwrap(), "(x^2 + 1) * 2");
    assert_eq!(interpret(&call(scaled, num(3.0))).unwrap(), "20");
  }

  #[test]
  fn number_over_function() {
    let reciprocal = bin(Operation::Divide, num(1.0), square_plus_one());
    assert_eq!(interpret(&call(reciprocal, num(1.0))).unwrap(), "0.5");
  }

  #[test]
  fn function_divided_by_number() {
    let halved = bin(Operation::Divide, square_plus_one(), num(2.0));
    assert_eq!(interpret(&call(halved, num(3.0))).unwrap(), "5");
  }

  #[test]
  fn sum_of_functions_collects_variables() {
    let sum = bin(Operation::Plus, func(&["x"], var("x")), func(&["y"], var("y")));
    match eval(&sum) {
      Value::Function(f) => assert_eq!(f.vars(), ["x", "y"]),
      other => panic!("unexpected {other:?}"),
    }
    let node = call_nvar(sum, vec![Value::Number(2.0), Value::Number(3.0)]);
    assert_eq!(interpret(&node).unwrap(), "5");
  }

  #[test]
  fn comparison_of_functions_is_boolean() {
    let less = bin(Operation::Less, func(&["x"], var("x")), num(2.0));
    match eval(&less) {
      Value::Function(f) => assert!(f.is_boolean()),
      other => panic!("unexpected {other:?}"),
    }
    assert_eq!(interpret(&call(less, num(1.0))).unwrap(), "true");
  }
}

mod symbolic_cells {
  use super::*;

  /// Evaluates numerically and remembers what it was asked.
  #[derive(Default)]
  struct RecordingCas {
    inputs: RefCell<Vec<String>>,
  }

  impl CasBridge for RecordingCas {
    fn evaluate_symbolic(
      &self,
      node: &ExpressionNode,
      tpl: &StringTemplate,
    ) -> Result<String, EvalError> {
      self.inputs.borrow_mut().push(node.to_infix_string(tpl));
      let value = evaluate(node, tpl, &EvalContext::new())?;
      Ok(value.to_value_string(tpl))
    }
  }

  struct FailingCas;

  impl CasBridge for FailingCas {
    fn evaluate_symbolic(
      &self,
      _node: &ExpressionNode,
      _tpl: &StringTemplate,
    ) -> Result<String, EvalError> {
      Err(EvalError::Cas("timeout".to_string()))
    }
  }

  struct NumberParser;

  impl AlgebraProcessor for NumberParser {
    fn process_algebra_command(&self, input: &str) -> Result<Value, EvalError> {
      input
        .parse::<f64>()
        .map(Value::Number)
        .map_err(|e| EvalError::Cas(e.to_string()))
    }
  }

  fn cell() -> ExpressionNode {
    let body = bin(Operation::Power, var("x"), num(2.0));
    let output = Function::new(vec!["x".into()], body);
    leaf(Value::SymbolicCell(Rc::new(
      SymbolicCell::new("$1").with_output(output),
    )))
  }

  #[test]
  fn round_trip_through_the_cas() {
    let cas = RecordingCas::default();
    let ctx = EvalContext::new()
      .with_cas(&cas)
      .with_algebra_processor(&NumberParser);
    let node = call(cell(), num(3.0));
    let value = evaluate(&node, &StringTemplate::DEFAULT, &ctx).unwrap();
    assert_eq!(value.as_number(), Some(9.0));
    assert_eq!(*cas.inputs.borrow(), vec!["3^2".to_string()]);
  }

  #[test]
  fn missing_collaborators() {
    let err = evaluate(
      &call(cell(), num(3.0)),
      &StringTemplate::DEFAULT,
      &EvalContext::new(),
    )
    .unwrap_err();
    assert!(matches!(err, EvalError::MissingCollaborator(_)));
    assert_eq!(err.to_string(), "CAS bridge is not configured");
  }

  #[test]
  fn cas_failure_propagates() {
    let ctx = EvalContext::new()
      .with_cas(&FailingCas)
      .with_algebra_processor(&NumberParser);
    let err = evaluate(&call(cell(), num(3.0)), &StringTemplate::DEFAULT, &ctx)
      .unwrap_err();
    assert_eq!(err.to_string(), "CAS evaluation failed: timeout");
  }

  #[test]
  fn twin_object_is_applied_directly() {
    let twin = Rc::new(GeoLine::new(2.0, 1.0, -3.0));
    let cell = leaf(Value::SymbolicCell(Rc::new(
      SymbolicCell::new("$2").with_twin(twin),
    )));
    assert_eq!(interpret(&call(cell, num(1.0))).unwrap(), "1");
  }
}
