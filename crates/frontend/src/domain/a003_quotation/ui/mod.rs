pub mod form;
pub mod line_table;
pub mod preview;
