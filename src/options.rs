//! Calculation options and configuration.

use crate::method::{AsrConvention, CalculationMethod};

/// How the calculator reacts when the sun never reaches a required angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Clamp the hour angle and return the resulting degenerate time.
    #[default]
    Lenient,
    /// Report `PerpetualDaylight` / `PerpetualDarkness` instead.
    Strict,
}

/// Options for prayer time calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalculationOptions {
    pub method: CalculationMethod,
    pub asr: AsrConvention,
    pub strictness: Strictness,
}

impl CalculationOptions {
    pub fn new(method: CalculationMethod, asr: AsrConvention) -> Self {
        CalculationOptions {
            method,
            asr,
            strictness: Strictness::Lenient,
        }
    }

    pub fn with_method(mut self, method: CalculationMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_asr(mut self, asr: AsrConvention) -> Self {
        self.asr = asr;
        self
    }

    /// Switch to [`Strictness::Strict`].
    pub fn strict(mut self) -> Self {
        self.strictness = Strictness::Strict;
        self
    }
}
