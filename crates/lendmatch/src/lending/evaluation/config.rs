/// Dials applied when an offer is constructed for a matched rule.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationConfig {
    /// Fixed multiplier over monthly salary. No credit-score, debt-ratio,
    /// or existing-loan adjustment is applied on top.
    pub loan_amount_multiplier: f64,
}

pub(crate) const DEFAULT_LOAN_AMOUNT_MULTIPLIER: f64 = 5.0;

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            loan_amount_multiplier: DEFAULT_LOAN_AMOUNT_MULTIPLIER,
        }
    }
}
