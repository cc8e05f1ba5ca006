use super::{check_price, ProductTax};
use crate::error::Result;

/// Turns a base price into a taxed price.
pub trait TaxStrategy {
    fn calculate(&self, price: f64) -> f64;
}

impl TaxStrategy for ProductTax {
    fn calculate(&self, price: f64) -> f64 {
        self.apply(price)
    }
}

// Tax-free goods, mostly useful as a stand-in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exempt;

impl TaxStrategy for Exempt {
    fn calculate(&self, price: f64) -> f64 {
        price
    }
}

/// A product whose tax is chosen by whoever constructs it.
#[derive(Debug, Clone)]
pub struct Product<T: TaxStrategy> {
    price: f64,
    tax: T,
}

impl<T: TaxStrategy> Product<T> {
    pub fn new(price: f64, tax: T) -> Result<Self> {
        Ok(Product {
            price: check_price(price)?,
            tax,
        })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn calculate_price(&self) -> f64 {
        self.tax.calculate(self.price)
    }
}
