//! Общий интерфейс выбираемых элементов справочников
//!
//! Используется выпадающим списком товаров в строках сметы и списком
//! кандидатов при поиске клиента.

pub mod traits;

pub use traits::AggregatePickerResult;
