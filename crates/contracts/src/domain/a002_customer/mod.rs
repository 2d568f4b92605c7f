pub mod aggregate;
pub mod search;

pub use aggregate::{find_customer, Customer, CustomerId, CustomerMeta, CustomerMetaMap};
pub use search::{payment_terms_autofill, search_customers};
