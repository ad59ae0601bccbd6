use std::sync::Once;

use thiserror::Error;

pub mod context;
pub mod evaluator;
pub mod geo;
pub mod kernel;
pub mod node;
pub mod template;
pub mod tree;
pub mod value;

pub use context::{AlgebraProcessor, CasBridge, EvalContext};
pub use evaluator::{
  ErrorDescriptor, ErrorKind, Localizer, PlainLocalizer, evaluate,
};
pub use node::{ExpressionNode, Operation};
pub use template::StringTemplate;
pub use value::{Function, SymbolicCell, Value};

#[derive(Error, Debug)]
pub enum EvalError {
  #[error("{0}")]
  Illegal(ErrorDescriptor),
  #[error("CAS evaluation failed: {0}")]
  Cas(String),
  #[error("{0} is not configured")]
  MissingCollaborator(&'static str),
}

impl EvalError {
  /// Classification of an illegal operand combination, if this is one.
  pub fn kind(&self) -> Option<ErrorKind> {
    self.descriptor().map(|d| d.kind)
  }

  pub fn descriptor(&self) -> Option<&ErrorDescriptor> {
    match self {
      EvalError::Illegal(descriptor) => Some(descriptor),
      _ => None,
    }
  }
}

/// Evaluates `node` with the default template and context and renders the
/// result.
pub fn interpret(node: &ExpressionNode) -> Result<String, EvalError> {
  let tpl = StringTemplate::DEFAULT;
  let value = evaluate(node, &tpl, &EvalContext::new())?;
  Ok(value.to_value_string(&tpl))
}

static TRACING_INIT: Once = Once::new();

/// Installs a `tracing` subscriber filtered by `RUST_LOG`. Does nothing when
/// the variable is unset, and only runs once.
pub fn init_tracing() {
  TRACING_INIT.call_once(|| {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
      tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();
    }
  });
}
