mod widget;

pub use widget::LineItemTable;
