mod widget;

pub use widget::CustomerSearch;
