use crate::kernel::numeric::STANDARD_PRECISION;
use crate::node::ExpressionNode;
use crate::template::StringTemplate;
use crate::value::Value;
use crate::EvalError;

/// Computer algebra system used to evaluate symbolic cells.
pub trait CasBridge {
  /// Evaluates `node` symbolically and returns the result in input syntax.
  fn evaluate_symbolic(
    &self,
    node: &ExpressionNode,
    tpl: &StringTemplate,
  ) -> Result<String, EvalError>;
}

/// Turns an input string (typically a CAS result) back into a live value.
pub trait AlgebraProcessor {
  fn process_algebra_command(&self, input: &str) -> Result<Value, EvalError>;
}

/// Everything an evaluation needs besides the tree itself: the numeric
/// tolerance and the collaborators for symbolic cells.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
  tolerance: f64,
  cas: Option<&'a dyn CasBridge>,
  algebra: Option<&'a dyn AlgebraProcessor>,
}

impl<'a> EvalContext<'a> {
  pub fn new() -> Self {
    EvalContext {
      tolerance: STANDARD_PRECISION,
      cas: None,
      algebra: None,
    }
  }

  pub fn with_tolerance(self, tolerance: f64) -> Self {
    EvalContext { tolerance, ..self }
  }

  pub fn with_cas(self, cas: &'a dyn CasBridge) -> Self {
    EvalContext {
      cas: Some(cas),
      ..self
    }
  }

  pub fn with_algebra_processor(
    self,
    algebra: &'a dyn AlgebraProcessor,
  ) -> Self {
    EvalContext {
      algebra: Some(algebra),
      ..self
    }
  }

  pub fn tolerance(&self) -> f64 {
    self.tolerance
  }

  pub fn cas(&self) -> Option<&'a dyn CasBridge> {
    self.cas
  }

  pub fn algebra(&self) -> Option<&'a dyn AlgebraProcessor> {
    self.algebra
  }
}

impl Default for EvalContext<'_> {
  fn default() -> Self {
    Self::new()
  }
}
