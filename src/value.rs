use std::fmt;
use std::rc::Rc;

use crate::geo::GeometricObject;
use crate::kernel::numeric::format_number;
use crate::kernel::vector::Vec2;
use crate::node::ExpressionNode;
use crate::template::StringTemplate;

/// Result of evaluating an expression, and the payload of leaf nodes.
#[derive(Debug, Clone)]
pub enum Value {
  Number(f64),
  Boolean(bool),
  Text(String),
  /// 2D vector, point or complex number depending on its mode.
  Vector(Vec2),
  Vector3D([f64; 3]),
  /// Ordered list; a list of equally long lists doubles as a matrix.
  List(Vec<Value>),
  Function(Rc<Function>),
  /// Handle to a construction object owned by the caller.
  Geo(Rc<dyn GeometricObject>),
  SymbolicCell(Rc<SymbolicCell>),
  /// Free variable inside a function body.
  Variable(String),
  /// Deferred expression, evaluated when its leaf is evaluated.
  Expression(Rc<ExpressionNode>),
}

/// Variant of a [`Value`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueTag {
  Number,
  Boolean,
  Text,
  Vector,
  Vector3D,
  List,
  Function,
  Geo,
  SymbolicCell,
  Variable,
  Expression,
}

impl fmt::Display for ValueTag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      ValueTag::Number => "number",
      ValueTag::Boolean => "boolean",
      ValueTag::Text => "text",
      ValueTag::Vector => "vector",
      ValueTag::Vector3D => "vector3d",
      ValueTag::List => "list",
      ValueTag::Function => "function",
      ValueTag::Geo => "geo",
      ValueTag::SymbolicCell => "symbolic_cell",
      ValueTag::Variable => "variable",
      ValueTag::Expression => "expression",
    };
    f.write_str(name)
  }
}

impl Value {
  pub fn text(s: impl Into<String>) -> Self {
    Value::Text(s.into())
  }

  pub fn point(x: f64, y: f64) -> Self {
    Value::Vector(Vec2::new(x, y))
  }

  pub fn complex(re: f64, im: f64) -> Self {
    Value::Vector(Vec2::complex(re, im))
  }

  pub fn numbers(items: &[f64]) -> Self {
    Value::List(items.iter().map(|n| Value::Number(*n)).collect())
  }

  pub fn function(function: Function) -> Self {
    Value::Function(Rc::new(function))
  }

  pub fn tag(&self) -> ValueTag {
    match self {
      Value::Number(_) => ValueTag::Number,
      Value::Boolean(_) => ValueTag::Boolean,
      Value::Text(_) => ValueTag::Text,
      Value::Vector(_) => ValueTag::Vector,
      Value::Vector3D(_) => ValueTag::Vector3D,
      Value::List(_) => ValueTag::List,
      Value::Function(_) => ValueTag::Function,
      Value::Geo(_) => ValueTag::Geo,
      Value::SymbolicCell(_) => ValueTag::SymbolicCell,
      Value::Variable(_) => ValueTag::Variable,
      Value::Expression(_) => ValueTag::Expression,
    }
  }

  pub fn as_number(&self) -> Option<f64> {
    match self {
      Value::Number(n) => Some(*n),
      _ => None,
    }
  }

  pub fn as_boolean(&self) -> Option<bool> {
    match self {
      Value::Boolean(b) => Some(*b),
      _ => None,
    }
  }

  pub fn as_text(&self) -> Option<&str> {
    match self {
      Value::Text(s) => Some(s),
      _ => None,
    }
  }

  pub fn as_vector(&self) -> Option<Vec2> {
    match self {
      Value::Vector(v) => Some(*v),
      _ => None,
    }
  }

  pub fn as_list(&self) -> Option<&[Value]> {
    match self {
      Value::List(items) => Some(items),
      _ => None,
    }
  }

  /// Plain rendering used for concatenation, error descriptors and output.
  pub fn to_value_string(&self, tpl: &StringTemplate) -> String {
    match self {
      Value::Number(n) => format_number(*n, tpl.decimals),
      Value::Boolean(b) => b.to_string(),
      Value::Text(s) => s.clone(),
      Value::Vector(v) if v.is_complex() => format_complex(*v, tpl),
      Value::Vector(v) => format!(
        "({}, {})",
        format_number(v.x, tpl.decimals),
        format_number(v.y, tpl.decimals)
      ),
      Value::Vector3D(v) => format!(
        "({}, {}, {})",
        format_number(v[0], tpl.decimals),
        format_number(v[1], tpl.decimals),
        format_number(v[2], tpl.decimals)
      ),
      Value::List(items) => format!(
        "{{{}}}",
        items
          .iter()
          .map(|item| item.to_value_string(tpl))
          .collect::<Vec<_>>()
          .join(", ")
      ),
      Value::Function(f) => f.body().to_infix_string(tpl),
      Value::Geo(geo) => geo.to_value_string(tpl),
      Value::SymbolicCell(cell) => match cell.output() {
        Some(f) => f.body().to_infix_string(tpl),
        None => cell.label().to_string(),
      },
      Value::Variable(name) => name.clone(),
      Value::Expression(node) => node.to_infix_string(tpl),
    }
  }

  /// Like [`Value::to_value_string`], but undefined geometric objects render
  /// as `?`.
  pub fn to_defined_value_string(&self, tpl: &StringTemplate) -> String {
    match self {
      Value::Geo(geo) if !geo.is_defined() => "?".to_string(),
      _ => self.to_value_string(tpl),
    }
  }

  pub fn to_latex_string(&self, tpl: &StringTemplate) -> String {
    match self {
      Value::Number(n) if n.is_infinite() => {
        if *n > 0.0 { "\\infty" } else { "-\\infty" }.to_string()
      }
      Value::Vector(v) if !v.is_complex() => format!(
        "\\left( {}, {} \\right)",
        format_number(v.x, tpl.decimals),
        format_number(v.y, tpl.decimals)
      ),
      Value::Vector3D(v) => format!(
        "\\left( {}, {}, {} \\right)",
        format_number(v[0], tpl.decimals),
        format_number(v[1], tpl.decimals),
        format_number(v[2], tpl.decimals)
      ),
      Value::List(items) => format!(
        "\\left\\{{ {} \\right\\}}",
        items
          .iter()
          .map(|item| item.to_latex_string(tpl))
          .collect::<Vec<_>>()
          .join(", ")
      ),
      Value::Function(f) => f.body().to_latex_string(tpl),
      Value::Geo(geo) => geo.to_latex_string(tpl),
      Value::Expression(node) => node.to_latex_string(tpl),
      _ => self.to_value_string(tpl),
    }
  }
}

fn format_complex(v: Vec2, tpl: &StringTemplate) -> String {
  if v.x.is_nan() || v.y.is_nan() {
    return "?".to_string();
  }
  let re = format_number(v.x, tpl.decimals);
  let im = format_number(v.y.abs(), tpl.decimals);
  if im == "0" {
    return re;
  }
  let im_part = if im == "1" { "i".to_string() } else { format!("{im}i") };
  let negative = v.y < 0.0;
  if re == "0" {
    return if negative { format!("-{im_part}") } else { im_part };
  }
  let sign = if negative { '-' } else { '+' };
  format!("{re} {sign} {im_part}")
}

/// Real- or boolean-valued function of one or more named variables. The body
/// refers to its variables through [`Value::Variable`] leaves.
#[derive(Debug, Clone)]
pub struct Function {
  vars: Vec<String>,
  body: Rc<ExpressionNode>,
  boolean: bool,
}

impl Function {
  pub fn new(
    vars: Vec<String>,
    body: impl Into<Rc<ExpressionNode>>,
  ) -> Self {
    Function {
      vars,
      body: body.into(),
      boolean: false,
    }
  }

  /// A predicate such as `x > 2`.
  pub fn boolean(
    vars: Vec<String>,
    body: impl Into<Rc<ExpressionNode>>,
  ) -> Self {
    Function {
      vars,
      body: body.into(),
      boolean: true,
    }
  }

  pub fn with_boolean(self, boolean: bool) -> Self {
    Function { boolean, ..self }
  }

  pub fn vars(&self) -> &[String] {
    &self.vars
  }

  pub fn var_count(&self) -> usize {
    self.vars.len()
  }

  pub fn body(&self) -> &Rc<ExpressionNode> {
    &self.body
  }

  pub fn is_boolean(&self) -> bool {
    self.boolean
  }

  /// The body with every variable replaced by the matching argument.
  pub fn expand(&self, args: &[Value]) -> ExpressionNode {
    let bindings: Vec<(&str, &Value)> = self
      .vars
      .iter()
      .map(String::as_str)
      .zip(args.iter())
      .collect();
    self.body.substitute(&bindings)
  }
}

/// A cell whose value comes from the computer algebra system.
#[derive(Debug, Clone)]
pub struct SymbolicCell {
  label: String,
  output: Option<Rc<Function>>,
  twin: Option<Rc<dyn GeometricObject>>,
}

impl SymbolicCell {
  pub fn new(label: impl Into<String>) -> Self {
    SymbolicCell {
      label: label.into(),
      output: None,
      twin: None,
    }
  }

  pub fn with_output(self, output: Function) -> Self {
    SymbolicCell {
      output: Some(Rc::new(output)),
      ..self
    }
  }

  /// The construction object mirroring this cell's output.
  pub fn with_twin(self, twin: Rc<dyn GeometricObject>) -> Self {
    SymbolicCell {
      twin: Some(twin),
      ..self
    }
  }

  pub fn label(&self) -> &str {
    &self.label
  }

  pub fn output(&self) -> Option<&Rc<Function>> {
    self.output.as_ref()
  }

  pub fn twin(&self) -> Option<&Rc<dyn GeometricObject>> {
    self.twin.as_ref()
  }
}
