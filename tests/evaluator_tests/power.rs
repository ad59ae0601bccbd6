use super::*;

fn pow(base: ExpressionNode, exponent: ExpressionNode) -> ExpressionNode {
  bin(Operation::Power, base, exponent)
}

fn ratio(a: f64, b: f64) -> ExpressionNode {
  bin(Operation::Divide, num(a), num(b))
}

mod real {
  use super::*;

  #[test]
  fn integer_exponent() {
    assert_eq!(interpret(&pow(num(2.0), num(10.0))).unwrap(), "1024");
    assert_eq!(interpret(&pow(num(-2.0), num(3.0))).unwrap(), "-8");
    assert_eq!(interpret(&pow(num(2.0), num(-1.0))).unwrap(), "0.5");
  }

  #[test]
  fn euler_base_uses_the_exponential() {
    let e = std::f64::consts::E;
    for x in [0.0, 1.0, -1.0, 10.0] {
      assert_eq!(eval_number(&pow(num(e), num(x))), x.exp());
    }
  }

  #[test]
  fn undefined_forms() {
    assert!(eval_number(&pow(num(f64::INFINITY), num(0.0))).is_nan());
    assert!(eval_number(&pow(num(1.0), num(f64::INFINITY))).is_nan());
  }

  #[test]
  fn negative_base_with_decimal_exponent() {
    // the exponent is not written as a quotient
    assert!(eval_number(&pow(num(-8.0), num(0.5))).is_nan());
  }
}

mod rational_exponent {
  use super::*;

  #[test]
  fn odd_root_of_negative_base() {
    let r = eval_number(&pow(num(-8.0), ratio(1.0, 3.0)));
    assert!((r + 2.0).abs() < 1e-12);
  }

  #[test]
  fn even_root_of_negative_base() {
    assert!(eval_number(&pow(num(-8.0), ratio(1.0, 2.0))).is_nan());
    assert_eq!(interpret(&pow(num(-8.0), ratio(1.0, 2.0))).unwrap(), "?");
  }

  #[test]
  fn numerator_is_applied_first() {
    let r = eval_number(&pow(num(-8.0), ratio(2.0, 3.0)));
    assert!((r - 4.0).abs() < 1e-12);
  }

  #[test]
  fn quotient_is_reduced() {
    // 2/6 = 1/3
    let r = eval_number(&pow(num(-27.0), ratio(2.0, 6.0)));
    assert!((r + 3.0).abs() < 1e-12);
  }

  #[test]
  fn wrapped_quotient() {
    let exponent = ExpressionNode::wrap(ratio(1.0, 3.0));
    let r = eval_number(&pow(num(-8.0), exponent));
    assert!((r + 2.0).abs() < 1e-12);
  }

  #[test]
  fn zero_denominator() {
    assert!(eval_number(&pow(num(-8.0), ratio(1.0, 0.0))).is_nan());
  }

  #[test]
  fn positive_base_is_plain_power() {
    let r = eval_number(&pow(num(8.0), ratio(1.0, 3.0)));
    assert!((r - 2.0).abs() < 1e-12);
  }

  #[test]
  fn negative_denominator_takes_the_odd_root() {
    let r = eval_number(&pow(num(-8.0), ratio(1.0, -3.0)));
    assert!((r + 0.5).abs() < 1e-12);
  }

  #[test]
  fn fractional_numerator_is_plain_power() {
    assert!(eval_number(&pow(num(-8.0), ratio(1.5, 3.0))).is_nan());
  }

  #[test]
  fn huge_numerator_is_plain_power() {
    let node = pow(num(-8.0), ratio(-1e300, 3.0));
    assert_eq!(interpret(&node).unwrap(), "0");
  }

  #[test]
  fn huge_denominator_does_not_overflow() {
    let value = eval(&pow(num(-8.0), ratio(1.0, -1e300)));
    assert!(matches!(value, Value::Number(n) if n.is_nan()));
  }

  #[test]
  fn broadcast_keeps_the_quotient() {
    let node = pow(list(&[-8.0, -27.0]), ratio(1.0, 3.0));
    assert_eq!(interpret(&node).unwrap(), "{-2, -3}");
  }
}

mod vectors {
  use super::*;

  #[test]
  fn square_of_a_vector_is_its_squared_norm() {
    assert_eq!(interpret(&pow(point(3.0, 4.0), num(2.0))).unwrap(), "25");
  }

  #[test]
  fn other_exponents_are_undefined() {
    assert!(eval_number(&pow(point(3.0, 4.0), num(3.0))).is_nan());
  }

  #[test]
  fn complex_powers() {
    assert_eq!(interpret(&pow(complex(0.0, 1.0), num(2.0))).unwrap(), "-1");
    let pi = std::f64::consts::PI;
    let node = pow(num(std::f64::consts::E), complex(0.0, pi));
    assert_eq!(interpret(&node).unwrap(), "-1");
  }

  #[test]
  fn complex_exponent_on_complex_base() {
    // i^i = e^(-pi/2)
    match eval(&pow(complex(0.0, 1.0), complex(0.0, 1.0))) {
      Value::Vector(v) => {
        assert!((v.x - (-std::f64::consts::FRAC_PI_2).exp()).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);
      }
      other => panic!("unexpected {other:?}"),
    }
  }
}

#[test]
fn text_exponent_is_illegal() {
  assert_eq!(
    error_kind(&pow(text("a"), num(2.0))),
    ErrorKind::IllegalExponent
  );
}
