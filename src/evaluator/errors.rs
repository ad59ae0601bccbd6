#[allow(unused_imports)]
use super::*;

use std::fmt;

/// Classification of an illegal operand combination. The key doubles as the
/// localisation key of the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  IllegalAddition,
  IllegalSubtraction,
  IllegalMultiplication,
  IllegalDivision,
  IllegalExponent,
  IllegalArgument,
  IllegalBoolean,
  IllegalComparison,
  IllegalListOperation,
}

impl ErrorKind {
  pub fn key(self) -> &'static str {
    match self {
      ErrorKind::IllegalAddition => "IllegalAddition",
      ErrorKind::IllegalSubtraction => "IllegalSubtraction",
      ErrorKind::IllegalMultiplication => "IllegalMultiplication",
      ErrorKind::IllegalDivision => "IllegalDivision",
      ErrorKind::IllegalExponent => "IllegalExponent",
      ErrorKind::IllegalArgument => "IllegalArgument",
      ErrorKind::IllegalBoolean => "IllegalBoolean",
      ErrorKind::IllegalComparison => "IllegalComparison",
      ErrorKind::IllegalListOperation => "IllegalListOperation",
    }
  }
}

/// Structured description of a failed operation: the kind plus the ordered
/// message fragments (operand renderings and operator symbol).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDescriptor {
  pub kind: ErrorKind,
  pub parts: Vec<String>,
}

impl fmt::Display for ErrorDescriptor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&PlainLocalizer.localize(self))
  }
}

/// Turns descriptors into user-facing text.
pub trait Localizer {
  fn localize(&self, descriptor: &ErrorDescriptor) -> String;
}

/// English messages, e.g. `Illegal addition: true + 5`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLocalizer;

impl Localizer for PlainLocalizer {
  fn localize(&self, descriptor: &ErrorDescriptor) -> String {
    let phrase = match descriptor.kind {
      ErrorKind::IllegalAddition => "Illegal addition",
      ErrorKind::IllegalSubtraction => "Illegal subtraction",
      ErrorKind::IllegalMultiplication => "Illegal multiplication",
      ErrorKind::IllegalDivision => "Illegal division",
      ErrorKind::IllegalExponent => "Illegal exponent",
      ErrorKind::IllegalArgument => "Illegal argument",
      ErrorKind::IllegalBoolean => "Illegal Boolean operation",
      ErrorKind::IllegalComparison => "Illegal comparison",
      ErrorKind::IllegalListOperation => "Illegal list operation",
    };
    if descriptor.parts.is_empty() {
      phrase.to_string()
    } else {
      format!("{phrase}: {}", descriptor.parts.join(" "))
    }
  }
}

fn raise(kind: ErrorKind, parts: Vec<String>) -> EvalError {
  EvalError::Illegal(ErrorDescriptor { kind, parts })
}

/// Operand rendering for messages: labelled objects by their label.
fn describe(value: &Value) -> String {
  match value {
    Value::Geo(geo) => match geo.label() {
      Some(label) => label.to_string(),
      None => geo.to_value_string(&StringTemplate::DEFAULT),
    },
    _ => value.to_value_string(&StringTemplate::DEFAULT),
  }
}

/// `lt symbol rt` could not be combined.
pub fn illegal_binary(
  lt: &Value,
  rt: &Value,
  kind: ErrorKind,
  symbol: &str,
) -> EvalError {
  tracing::debug!(
    kind = kind.key(),
    left = %lt.tag(),
    right = %rt.tag(),
    symbol,
    "illegal binary operation"
  );
  raise(kind, vec![describe(lt), symbol.to_string(), describe(rt)])
}

/// A unary operator rejected its operand; rendered as `prefix arg suffix`,
/// e.g. `x(true)`.
pub fn illegal_unary(
  kind: ErrorKind,
  prefix: &str,
  arg: &Value,
  suffix: &str,
) -> EvalError {
  tracing::debug!(kind = kind.key(), arg = %arg.tag(), "illegal unary operation");
  raise(kind, vec![format!("{prefix}{}{suffix}", describe(arg))])
}

pub fn illegal_argument(arg: &Value) -> EvalError {
  tracing::debug!(arg = %arg.tag(), "illegal argument");
  raise(
    ErrorKind::IllegalArgument,
    vec![describe(arg)],
  )
}
