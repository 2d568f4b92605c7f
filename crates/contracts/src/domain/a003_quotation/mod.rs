pub mod aggregate;
pub mod config;
pub mod line_item;
pub mod line_table;
pub mod page_data;
pub mod pricing;
pub mod totals;

pub use aggregate::{FixedFeeLine, QuotationDetail, QuotationField, QuotationValues};
pub use config::PricingConfig;
pub use line_item::{LineItem, LineKey};
pub use line_table::LineItemTable;
pub use page_data::QuotationPageData;
pub use pricing::{FeeEstimate, TravelParams};
pub use totals::{QuotationPreview, QuotationTotals};
