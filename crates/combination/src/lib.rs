//! # loadfit Combination
//!
//! Chooses a mix of product quantities for one container under a shared
//! volume and weight budget.
//!
//! The selection is greedy and deterministic: it favours small, light
//! products and is not a knapsack optimum.
//!
//! ## Quick Start
//!
//! ```rust
//! use loadfit_combination::{select_combination, Product};
//!
//! let products = vec![Product::new("A", 1.0, 10.0), Product::new("B", 1.0, 100.0)];
//! let result = select_combination(&products, 25.0, 5.0);
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].quantity, 2);
//! ```

pub mod product;
pub mod selector;

// Re-exports
pub use product::Product;
pub use selector::{select_combination, Budget, CombinationResult, CombinationSummary};
pub use loadfit_core::{Error, Result};
