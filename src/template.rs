/// Rendering settings used whenever a value has to be turned into text:
/// string concatenation, error descriptors and the CAS round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringTemplate {
  /// Maximum number of printed decimals; trailing zeros are dropped.
  pub decimals: usize,
}

impl StringTemplate {
  /// Template for concatenation and error descriptors.
  pub const DEFAULT: StringTemplate = StringTemplate { decimals: 2 };

  /// Full machine precision, used when handing expressions to the CAS.
  pub const NUMERIC: StringTemplate = StringTemplate { decimals: 15 };

  pub fn with_decimals(self, decimals: usize) -> Self {
    StringTemplate { decimals }
  }
}

impl Default for StringTemplate {
  fn default() -> Self {
    Self::DEFAULT
  }
}
