use super::*;

use geoexpr::evaluator::eval_equals;

fn equals(a: &Value, b: &Value) -> bool {
  eval_equals(a, b, &EvalContext::new())
}

#[test]
fn lists() {
  assert!(equals(&Value::numbers(&[1.0, 2.0]), &Value::numbers(&[1.0, 2.0])));
  assert!(!equals(&Value::numbers(&[1.0, 2.0]), &Value::numbers(&[1.0, 3.0])));
  assert!(!equals(
    &Value::numbers(&[1.0, 2.0]),
    &Value::numbers(&[1.0, 2.0, 3.0])
  ));
  let nested = Value::List(vec![Value::numbers(&[1.0]), Value::text("a")]);
  assert!(equals(&nested, &nested.clone()));
}

#[test]
fn numbers_use_tolerance() {
  assert!(equals(&Value::Number(1.0), &Value::Number(1.0 + 1e-10)));
  assert!(!equals(&Value::Number(1.0), &Value::Number(1.001)));
  assert!(!equals(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));
}

#[test]
fn tolerance_comes_from_the_context() {
  let loose = EvalContext::new().with_tolerance(0.01);
  assert!(eval_equals(&Value::Number(1.0), &Value::Number(1.001), &loose));
}

#[test]
fn unmatched_variants_are_unequal() {
  assert!(!equals(&Value::Number(1.0), &Value::text("1")));
  assert!(!equals(&Value::Boolean(true), &Value::Number(1.0)));
  assert!(!equals(&Value::point(1.0, 2.0), &Value::numbers(&[1.0, 2.0])));
}

#[test]
fn booleans_texts_and_vectors() {
  assert!(equals(&Value::Boolean(false), &Value::Boolean(false)));
  assert!(equals(&Value::text("abc"), &Value::text("abc")));
  assert!(!equals(&Value::text("abc"), &Value::text("abd")));
  assert!(equals(&Value::point(1.0, 2.0), &Value::point(1.0, 2.0)));
  assert!(equals(
    &Value::Vector3D([1.0, 2.0, 3.0]),
    &Value::Vector3D([1.0, 2.0, 3.0])
  ));
}

#[test]
fn geometric_objects() {
  let a = Value::Geo(Rc::new(GeoPoint::labeled("A", 1.0, 2.0)));
  let b = Value::Geo(Rc::new(GeoPoint::labeled("B", 1.0, 2.0)));
  assert!(equals(&a, &b));
  assert!(equals(&a, &Value::point(1.0, 2.0)));

  let g = Value::Geo(Rc::new(GeoLine::new(1.0, 1.0, -1.0)));
  let h = Value::Geo(Rc::new(GeoLine::new(2.0, 2.0, -2.0)));
  assert!(equals(&g, &h));
  assert!(!equals(&g, &a));
}

#[test]
fn operators() {
  let node = bin(Operation::EqualBoolean, num(1.0), text("1"));
  assert_eq!(interpret(&node).unwrap(), "false");
  let node = bin(Operation::NotEqual, list(&[1.0, 2.0]), list(&[1.0, 3.0]));
  assert_eq!(interpret(&node).unwrap(), "true");
  let node = bin(Operation::EqualBoolean, point(1.0, 2.0), text("x"));
  assert_eq!(interpret(&node).unwrap(), "false");
}
