use super::*;

mod broadcast {
  use super::*;

  #[test]
  fn list_and_number() {
    let node = bin(Operation::Plus, list(&[1.0, 2.0, 3.0]), num(10.0));
    assert_eq!(interpret(&node).unwrap(), "{11, 12, 13}");
    let node = bin(Operation::Minus, num(10.0), list(&[1.0, 2.0, 3.0]));
    assert_eq!(interpret(&node).unwrap(), "{9, 8, 7}");
    let node = bin(Operation::Multiply, list(&[1.0, 2.0, 3.0]), num(2.0));
    assert_eq!(interpret(&node).unwrap(), "{2, 4, 6}");
  }

  #[test]
  fn nested_lists_broadcast_recursively() {
    let nested = leaf(Value::List(vec![
      Value::numbers(&[1.0, 2.0]),
      Value::numbers(&[3.0, 4.0]),
    ]));
    let node = bin(Operation::Multiply, nested, num(2.0));
    assert_eq!(interpret(&node).unwrap(), "{{2, 4}, {6, 8}}");
  }

  #[test]
  fn comparison_over_a_list() {
    let node = bin(Operation::Greater, list(&[1.0, 5.0]), num(2.0));
    assert_eq!(interpret(&node).unwrap(), "{false, true}");
  }

  #[test]
  fn unary_operators_map() {
    let points = leaf(Value::List(vec![
      Value::point(1.0, 2.0),
      Value::point(3.0, 4.0),
    ]));
    let node = ExpressionNode::unary(Operation::XCoord, points);
    assert_eq!(interpret(&node).unwrap(), "{1, 3}");
  }

  #[test]
  fn element_errors_propagate() {
    let items = leaf(Value::List(vec![
      Value::Number(1.0),
      Value::Boolean(true),
    ]));
    let node = bin(Operation::Plus, items, num(1.0));
    assert_eq!(error_kind(&node), ErrorKind::IllegalAddition);
  }

  #[test]
  fn deferred_elements_are_evaluated() {
    let sum = bin(Operation::Plus, num(1.0), num(1.0));
    let node = leaf(Value::List(vec![
      Value::Expression(Rc::new(sum)),
      Value::Number(3.0),
    ]));
    assert_eq!(interpret(&node).unwrap(), "{2, 3}");
  }
}

mod list_and_list {
  use super::*;

  #[test]
  fn element_wise_arithmetic_is_not_defined() {
    let node = bin(Operation::Plus, list(&[1.0, 2.0, 3.0]), list(&[4.0, 5.0, 6.0]));
    assert_eq!(error_kind(&node), ErrorKind::IllegalListOperation);
    let node = bin(Operation::Minus, list(&[1.0]), list(&[2.0]));
    assert_eq!(error_kind(&node), ErrorKind::IllegalListOperation);
  }

  #[test]
  fn cross_product_of_length_three() {
    let node = bin(
      Operation::VectorProduct,
      list(&[1.0, 2.0, 3.0]),
      list(&[4.0, 5.0, 6.0]),
    );
    assert_eq!(interpret(&node).unwrap(), "{-3, 6, -3}");
  }

  #[test]
  fn cross_product_of_length_two_lifts_to_space() {
    let node = bin(Operation::VectorProduct, list(&[1.0, 2.0]), list(&[3.0, 4.0]));
    assert_eq!(interpret(&node).unwrap(), "{0, 0, -2}");
  }

  #[test]
  fn cross_product_with_mismatched_lengths() {
    let node = bin(
      Operation::VectorProduct,
      list(&[1.0, 2.0]),
      list(&[3.0, 4.0, 5.0]),
    );
    assert_eq!(error_kind(&node), ErrorKind::IllegalArgument);
  }

  #[test]
  fn equality_compares_whole_lists() {
    let node = bin(Operation::EqualBoolean, list(&[1.0, 2.0]), list(&[1.0, 2.0]));
    assert_eq!(interpret(&node).unwrap(), "true");
  }
}
