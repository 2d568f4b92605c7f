mod widget;

pub use widget::QuotationPreviewPanel;
