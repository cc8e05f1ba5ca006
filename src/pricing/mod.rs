//! Pattern 3: Strategy and Visitor, applied to sales tax.
//!
//! Both submodules compute the same thing, `price * (1 + rate)`, but wire
//! the tax to the product differently:
//!
//! - [`strategy`]: the product owns an injected tax and asks it for a price.
//! - [`visitor`]: the product is handed a tax and passes itself to it.

pub mod strategy;
pub mod visitor;

use crate::error::{PatternError, Result};

pub const DEFAULT_TAX_RATE: f64 = 0.20;

/// A flat sales tax. Implements both [`strategy::TaxStrategy`] and
/// [`visitor::TaxVisitor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductTax {
    rate: f64,
}

impl ProductTax {
    pub fn new(rate: f64) -> Result<Self> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(PatternError::invalid(
                "tax_rate",
                rate,
                "must be a finite, non-negative fraction",
            ));
        }
        Ok(ProductTax { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    fn apply(&self, price: f64) -> f64 {
        price * (1.0 + self.rate)
    }
}

impl Default for ProductTax {
    fn default() -> Self {
        ProductTax {
            rate: DEFAULT_TAX_RATE,
        }
    }
}

pub(crate) fn check_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(PatternError::invalid(
            "price",
            price,
            "must be a finite, non-negative amount",
        ));
    }
    Ok(price)
}
