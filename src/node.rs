use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::template::StringTemplate;
use crate::value::Value;

/// Operator tag of an internal expression node.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
  /// Wraps the left child unchanged.
  Identity,
  Not,
  Or,
  And,
  EqualBoolean,
  NotEqual,
  Less,
  Greater,
  LessEqual,
  GreaterEqual,
  Plus,
  Minus,
  VectorProduct,
  Multiply,
  Divide,
  Power,
  XCoord,
  YCoord,
  Real,
  Imaginary,
  /// `f(x)` or `f(P)`.
  Function,
  /// `f(x, y, ...)` with the arguments in a list.
  #[serde(rename = "function_nvar")]
  FunctionNVar,
}

impl Operation {
  pub fn symbol(self) -> &'static str {
    match self {
      Operation::Identity => "",
      Operation::Not => "¬",
      Operation::Or => "∨",
      Operation::And => "∧",
      Operation::EqualBoolean => "≟",
      Operation::NotEqual => "≠",
      Operation::Less => "<",
      Operation::Greater => ">",
      Operation::LessEqual => "≤",
      Operation::GreaterEqual => "≥",
      Operation::Plus => "+",
      Operation::Minus => "-",
      Operation::VectorProduct => "⊗",
      Operation::Multiply => "*",
      Operation::Divide => "/",
      Operation::Power => "^",
      Operation::XCoord => "x(",
      Operation::YCoord => "y(",
      Operation::Real => "real(",
      Operation::Imaginary => "imaginary(",
      Operation::Function | Operation::FunctionNVar => "(",
    }
  }

  fn latex_symbol(self) -> &'static str {
    match self {
      Operation::Not => "\\neg ",
      Operation::Or => " \\vee ",
      Operation::And => " \\wedge ",
      Operation::EqualBoolean => " \\stackrel{?}{=} ",
      Operation::NotEqual => " \\neq ",
      Operation::LessEqual => " \\leq ",
      Operation::GreaterEqual => " \\geq ",
      Operation::VectorProduct => " \\otimes ",
      Operation::Multiply => " \\cdot ",
      _ => "",
    }
  }

  /// Operators whose node has no right child.
  pub fn is_unary(self) -> bool {
    matches!(
      self,
      Operation::Not
        | Operation::XCoord
        | Operation::YCoord
        | Operation::Real
        | Operation::Imaginary
    )
  }

  pub fn is_plus_or_minus(self) -> bool {
    matches!(self, Operation::Plus | Operation::Minus)
  }

  /// `==` and `!=`, which compare whole values and never broadcast.
  pub fn is_equality_test(self) -> bool {
    matches!(self, Operation::EqualBoolean | Operation::NotEqual)
  }

  /// Operators that operate on coordinates, where geometric points take part
  /// as plain vectors.
  pub fn is_arithmetic(self) -> bool {
    matches!(
      self,
      Operation::Plus
        | Operation::Minus
        | Operation::VectorProduct
        | Operation::Multiply
        | Operation::Divide
        | Operation::Power
    )
  }

  /// Binary operators that combine functions symbolically, e.g. `f * 2` or
  /// `f + g`, as opposed to applying them.
  pub fn combines_functions(self) -> bool {
    matches!(
      self,
      Operation::Or
        | Operation::And
        | Operation::Less
        | Operation::Greater
        | Operation::LessEqual
        | Operation::GreaterEqual
    ) || self.is_arithmetic()
  }

  /// Operators producing a truth value.
  pub fn yields_boolean(self) -> bool {
    matches!(
      self,
      Operation::Not
        | Operation::Or
        | Operation::And
        | Operation::EqualBoolean
        | Operation::NotEqual
        | Operation::Less
        | Operation::Greater
        | Operation::LessEqual
        | Operation::GreaterEqual
    )
  }

  fn precedence(self) -> u8 {
    match self {
      Operation::Identity => 9,
      Operation::Or => 1,
      Operation::And => 2,
      Operation::EqualBoolean
      | Operation::NotEqual
      | Operation::Less
      | Operation::Greater
      | Operation::LessEqual
      | Operation::GreaterEqual => 3,
      Operation::Plus | Operation::Minus => 4,
      Operation::VectorProduct | Operation::Multiply | Operation::Divide => 5,
      Operation::Not => 6,
      Operation::Power => 7,
      Operation::XCoord
      | Operation::YCoord
      | Operation::Real
      | Operation::Imaginary
      | Operation::Function
      | Operation::FunctionNVar => 8,
    }
  }

  fn is_associative(self) -> bool {
    matches!(
      self,
      Operation::Plus | Operation::Multiply | Operation::And | Operation::Or
    )
  }
}

/// Node of a binary expression tree. Trees are built by the caller and only
/// read by the evaluator.
#[derive(Debug, Clone)]
pub enum ExpressionNode {
  Leaf(Value),
  Internal {
    operation: Operation,
    left: Rc<ExpressionNode>,
    right: Option<Rc<ExpressionNode>>,
    /// Concatenation renders the non-text operand as LaTeX.
    holds_latex_text: bool,
  },
}

impl From<Value> for ExpressionNode {
  fn from(value: Value) -> Self {
    ExpressionNode::Leaf(value)
  }
}

impl ExpressionNode {
  pub fn leaf(value: Value) -> Self {
    ExpressionNode::Leaf(value)
  }

  pub fn number(n: f64) -> Self {
    ExpressionNode::Leaf(Value::Number(n))
  }

  pub fn boolean(b: bool) -> Self {
    ExpressionNode::Leaf(Value::Boolean(b))
  }

  pub fn text(s: impl Into<String>) -> Self {
    ExpressionNode::Leaf(Value::Text(s.into()))
  }

  pub fn variable(name: impl Into<String>) -> Self {
    ExpressionNode::Leaf(Value::Variable(name.into()))
  }

  pub fn binary(
    operation: Operation,
    left: impl Into<Rc<ExpressionNode>>,
    right: impl Into<Rc<ExpressionNode>>,
  ) -> Self {
    ExpressionNode::Internal {
      operation,
      left: left.into(),
      right: Some(right.into()),
      holds_latex_text: false,
    }
  }

  pub fn unary(
    operation: Operation,
    arg: impl Into<Rc<ExpressionNode>>,
  ) -> Self {
    ExpressionNode::Internal {
      operation,
      left: arg.into(),
      right: None,
      holds_latex_text: false,
    }
  }

  /// Wraps `inner` in an identity node.
  pub fn wrap(inner: impl Into<Rc<ExpressionNode>>) -> Self {
    ExpressionNode::unary(Operation::Identity, inner)
  }

  pub fn with_latex_text(self, holds: bool) -> Self {
    match self {
      ExpressionNode::Internal {
        operation,
        left,
        right,
        ..
      } => ExpressionNode::Internal {
        operation,
        left,
        right,
        holds_latex_text: holds,
      },
      leaf => leaf,
    }
  }

  pub fn is_leaf(&self) -> bool {
    matches!(self, ExpressionNode::Leaf(_))
  }

  /// The node's operator; leaves report [`Operation::Identity`].
  pub fn operation(&self) -> Operation {
    match self {
      ExpressionNode::Leaf(_) => Operation::Identity,
      ExpressionNode::Internal { operation, .. } => *operation,
    }
  }

  /// Skips identity wrappers and deferred-expression leaves.
  pub fn unwrapped(&self) -> &ExpressionNode {
    match self {
      ExpressionNode::Internal {
        operation: Operation::Identity,
        left,
        ..
      } => left.unwrapped(),
      ExpressionNode::Leaf(Value::Expression(inner)) => inner.unwrapped(),
      node => node,
    }
  }

  /// Copy of the tree with each variable leaf named in `bindings` replaced by
  /// its value.
  pub fn substitute(&self, bindings: &[(&str, &Value)]) -> ExpressionNode {
    match self {
      ExpressionNode::Leaf(value) => {
        ExpressionNode::Leaf(substitute_value(value, bindings))
      }
      ExpressionNode::Internal {
        operation,
        left,
        right,
        holds_latex_text,
      } => ExpressionNode::Internal {
        operation: *operation,
        left: Rc::new(left.substitute(bindings)),
        right: right.as_ref().map(|r| Rc::new(r.substitute(bindings))),
        holds_latex_text: *holds_latex_text,
      },
    }
  }

  pub fn to_infix_string(&self, tpl: &StringTemplate) -> String {
    self.render(tpl, false)
  }

  pub fn to_latex_string(&self, tpl: &StringTemplate) -> String {
    self.render(tpl, true)
  }

  fn render(&self, tpl: &StringTemplate, latex: bool) -> String {
    let (operation, left, right) = match self {
      ExpressionNode::Leaf(value) if latex => {
        return value.to_latex_string(tpl);
      }
      ExpressionNode::Leaf(value) => return value.to_value_string(tpl),
      ExpressionNode::Internal {
        operation,
        left,
        right,
        ..
      } => (*operation, left, right),
    };

    let l = left.render_operand(operation, tpl, latex, false);
    let right = match right {
      Some(right) => right,
      None if operation == Operation::Identity => return l,
      None if operation == Operation::Not => {
        let symbol = if latex { operation.latex_symbol() } else { "¬" };
        return format!("{symbol}{l}");
      }
      None => {
        return format!("{}{})", operation.symbol(), left.render(tpl, latex));
      }
    };
    let r = right.render_operand(operation, tpl, latex, true);

    match operation {
      Operation::Power if latex => format!("{l}^{{{}}}", right.render(tpl, latex)),
      Operation::Power => format!("{l}^{r}"),
      Operation::Divide if latex => format!(
        "\\frac{{{}}}{{{}}}",
        left.render(tpl, latex),
        right.render(tpl, latex)
      ),
      Operation::Function => format!("{l}({})", right.render(tpl, latex)),
      Operation::FunctionNVar => {
        let args = match right.unwrapped() {
          ExpressionNode::Leaf(Value::List(items)) => items
            .iter()
            .map(|item| {
              if latex {
                item.to_latex_string(tpl)
              } else {
                item.to_value_string(tpl)
              }
            })
            .collect::<Vec<_>>()
            .join(", "),
          other => other.render(tpl, latex),
        };
        format!("{l}({args})")
      }
      _ => {
        let symbol = match operation.latex_symbol() {
          s if latex && !s.is_empty() => s.to_string(),
          _ => format!(" {} ", operation.symbol()),
        };
        format!("{l}{symbol}{r}")
      }
    }
  }

  /// Renders a child, parenthesised when it binds looser than its parent.
  fn render_operand(
    &self,
    parent: Operation,
    tpl: &StringTemplate,
    latex: bool,
    is_right: bool,
  ) -> String {
    let rendered = self.render(tpl, latex);
    let child = match self.unwrapped() {
      ExpressionNode::Internal { operation, .. } => *operation,
      ExpressionNode::Leaf(_) => return rendered,
    };
    let needs_parens = if is_right && !parent.is_associative() {
      child.precedence() <= parent.precedence()
    } else {
      child.precedence() < parent.precedence()
    };
    if !needs_parens {
      rendered
    } else if latex {
      format!("\\left({rendered}\\right)")
    } else {
      format!("({rendered})")
    }
  }
}

fn substitute_value(value: &Value, bindings: &[(&str, &Value)]) -> Value {
  match value {
    Value::Variable(name) => bindings
      .iter()
      .find(|(var, _)| var == name)
      .map(|(_, bound)| (*bound).clone())
      .unwrap_or_else(|| value.clone()),
    Value::Expression(node) => {
      Value::Expression(Rc::new(node.substitute(bindings)))
    }
    Value::List(items) => Value::List(
      items
        .iter()
        .map(|item| substitute_value(item, bindings))
        .collect(),
    ),
    _ => value.clone(),
  }
}
