//! JSON description of expression trees, for building trees outside Rust
//! and printing results.
//!
//! ```json
//! {"node": {"op": "power", "left": {"number": -8},
//!   "right": {"node": {"op": "divide", "left": {"number": 1}, "right": {"number": 3}}}}}
//! ```

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::geo::{GeoLine, GeoPoint};
use crate::kernel::vector::Vec2;
use crate::node::{ExpressionNode, Operation};
use crate::template::StringTemplate;
use crate::value::{Function, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeSpec {
  Number(f64),
  Boolean(bool),
  Text(String),
  Vector {
    x: f64,
    y: f64,
    #[serde(default)]
    complex: bool,
  },
  #[serde(rename = "vector3d")]
  Vector3D {
    x: f64,
    y: f64,
    z: f64,
  },
  List(Vec<TreeSpec>),
  Variable(String),
  Function {
    vars: Vec<String>,
    body: Box<TreeSpec>,
    #[serde(default)]
    boolean: bool,
  },
  Point {
    x: f64,
    y: f64,
    #[serde(default)]
    label: Option<String>,
  },
  /// The line `a x + b y + c = 0`.
  Line {
    a: f64,
    b: f64,
    c: f64,
    #[serde(default)]
    label: Option<String>,
  },
  Node {
    op: Operation,
    left: Box<TreeSpec>,
    #[serde(default)]
    right: Option<Box<TreeSpec>>,
    #[serde(default)]
    latex: bool,
  },
}

impl TreeSpec {
  pub fn to_node(&self) -> ExpressionNode {
    match self {
      TreeSpec::Node {
        op,
        left,
        right,
        latex,
      } => ExpressionNode::Internal {
        operation: *op,
        left: Rc::new(left.to_node()),
        right: right.as_ref().map(|r| Rc::new(r.to_node())),
        holds_latex_text: *latex,
      },
      leaf => ExpressionNode::Leaf(leaf.to_value()),
    }
  }

  /// Leaf value; operator nodes (also inside lists) become deferred
  /// expressions.
  pub fn to_value(&self) -> Value {
    match self {
      TreeSpec::Number(n) => Value::Number(*n),
      TreeSpec::Boolean(b) => Value::Boolean(*b),
      TreeSpec::Text(s) => Value::text(s.as_str()),
      TreeSpec::Vector { x, y, complex } => {
        if *complex {
          Value::Vector(Vec2::complex(*x, *y))
        } else {
          Value::Vector(Vec2::new(*x, *y))
        }
      }
      TreeSpec::Vector3D { x, y, z } => Value::Vector3D([*x, *y, *z]),
      TreeSpec::List(items) => {
        Value::List(items.iter().map(TreeSpec::to_value).collect())
      }
      TreeSpec::Variable(name) => Value::Variable(name.clone()),
      TreeSpec::Function {
        vars,
        body,
        boolean,
      } => Value::function(
        Function::new(vars.clone(), body.to_node()).with_boolean(*boolean),
      ),
      TreeSpec::Point { x, y, label } => Value::Geo(match label {
        Some(label) => Rc::new(GeoPoint::labeled(label.as_str(), *x, *y)),
        None => Rc::new(GeoPoint::new(*x, *y)),
      }),
      TreeSpec::Line { a, b, c, label } => Value::Geo(match label {
        Some(label) => Rc::new(GeoLine::labeled(label.as_str(), *a, *b, *c)),
        None => Rc::new(GeoLine::new(*a, *b, *c)),
      }),
      TreeSpec::Node { .. } => Value::Expression(Rc::new(self.to_node())),
    }
  }
}

pub fn parse_tree(json: &str) -> serde_json::Result<ExpressionNode> {
  let spec: TreeSpec = serde_json::from_str(json)?;
  Ok(spec.to_node())
}

/// `{"type": ..., "value": ...}`; finite numbers and booleans stay JSON
/// scalars, everything else is rendered with `tpl`.
pub fn value_to_json(value: &Value, tpl: &StringTemplate) -> serde_json::Value {
  let rendered = match value {
    Value::Number(n) if n.is_finite() => json!(n),
    Value::Boolean(b) => json!(b),
    other => json!(other.to_value_string(tpl)),
  };
  json!({ "type": value.tag().to_string(), "value": rendered })
}
