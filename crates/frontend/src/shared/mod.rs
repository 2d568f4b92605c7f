pub mod picker_aggregate;
