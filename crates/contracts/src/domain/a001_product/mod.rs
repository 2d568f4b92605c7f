pub mod aggregate;

pub use aggregate::{find_product, Product, ProductId};
