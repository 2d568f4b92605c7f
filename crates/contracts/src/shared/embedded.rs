//! Разбор JSON-блоков, встроенных сервером в страницу
//!
//! Каждый блок: `<script type="application/json" id="...">`. Чтение DOM
//! выполняет frontend, здесь только разбор и подстановка значения по
//! умолчанию.

use serde::de::DeserializeOwned;
use thiserror::Error;

pub const PRODUCTS_BLOCK_ID: &str = "products-json";
pub const CUSTOMERS_BLOCK_ID: &str = "customers-json";
pub const CUSTOMERS_META_BLOCK_ID: &str = "customers-meta-json";
pub const INITIAL_VALUES_BLOCK_ID: &str = "initial-values-json";
pub const INITIAL_DETAILS_BLOCK_ID: &str = "initial-details-json";
pub const PRICING_CONFIG_BLOCK_ID: &str = "pricing-config-json";

#[derive(Debug, Error)]
pub enum EmbeddedDataError {
    #[error("element #{0} not found")]
    MissingElement(String),

    #[error("invalid JSON in #{id}: {source}")]
    InvalidJson {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Разобрать содержимое блока. `text == None` означает, что элемента нет на странице.
pub fn parse_block<T: DeserializeOwned>(
    id: &str,
    text: Option<&str>,
) -> Result<T, EmbeddedDataError> {
    let text = text.ok_or_else(|| EmbeddedDataError::MissingElement(id.to_string()))?;
    serde_json::from_str(text).map_err(|source| EmbeddedDataError::InvalidJson {
        id: id.to_string(),
        source,
    })
}

/// Разобрать блок или вернуть `fallback`, записав причину в лог
pub fn parse_block_or<T: DeserializeOwned>(id: &str, text: Option<&str>, fallback: T) -> T {
    match parse_block(id, text) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("embedded data fallback: {}", e);
            fallback
        }
    }
}
