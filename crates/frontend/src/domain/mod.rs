pub mod a002_customer;
pub mod a003_quotation;
