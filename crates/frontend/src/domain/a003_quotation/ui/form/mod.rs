//! Форма сметы (MVVM)
//!
//! - `view_model.rs`: состояние формы и операции над ним
//! - `view.rs`: разметка и привязка полей

mod view;
mod view_model;

pub use view::QuotationForm;
pub use view_model::QuotationFormViewModel;
