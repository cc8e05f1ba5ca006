use super::{check_price, ProductTax};
use crate::error::Result;

/// Anything with a base price a tax can visit.
pub trait Priced {
    fn price(&self) -> f64;
}

pub trait TaxVisitor {
    fn calculate(&self, item: &dyn Priced) -> f64;
}

impl TaxVisitor for ProductTax {
    fn calculate(&self, item: &dyn Priced) -> f64 {
        self.apply(item.price())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PricedProduct {
    name: String,
    price: f64,
}

impl PricedProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Result<Self> {
        Ok(PricedProduct {
            name: name.into(),
            price: check_price(price)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hands `self` to the tax, which decides the final price.
    pub fn calculate_price(&self, tax: &impl TaxVisitor) -> f64 {
        tax.calculate(self)
    }
}

impl Priced for PricedProduct {
    fn price(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Luxury;

    impl Priced for Luxury {
        fn price(&self) -> f64 {
            1000.0
        }
    }

    // Waives the tax on anything under a threshold.
    struct SmallItemRelief {
        threshold: f64,
        inner: ProductTax,
    }

    impl TaxVisitor for SmallItemRelief {
        fn calculate(&self, item: &dyn Priced) -> f64 {
            if item.price() < self.threshold {
                item.price()
            } else {
                self.inner.calculate(item)
            }
        }
    }

    #[test]
    fn product_tax_visits_product() {
        let product = PricedProduct::new("widget", 50.0).unwrap();
        assert!((product.calculate_price(&ProductTax::default()) - 60.0).abs() < 1e-9);
        assert_eq!(product.name(), "widget");
    }

    #[test]
    fn visitor_sees_the_product() {
        let relief = SmallItemRelief {
            threshold: 10.0,
            inner: ProductTax::default(),
        };
        let cheap = PricedProduct::new("pencil", 2.0).unwrap();
        let dear = PricedProduct::new("desk", 200.0).unwrap();

        assert_eq!(cheap.calculate_price(&relief), 2.0);
        assert!((dear.calculate_price(&relief) - 240.0).abs() < 1e-9);
    }

    #[test]
    fn any_priced_item_can_be_visited() {
        let tax = ProductTax::new(0.5).unwrap();
        assert_eq!(tax.calculate(&Luxury), 1500.0);
    }
}
