use crate::domain::common::AggregateId;
use crate::integer_id;
use crate::shared::lenient;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================
integer_id!(
    /// ID товара из справочника `products`
    ProductId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Товар каталога (только чтение, приходит из блока `products-json`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: ProductId,

    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    /// Артикул; если не задан, в строку подставляется ID
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub code: Option<String>,

    /// Себестоимость единицы
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub cost: Option<f64>,

    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub unit_price: Option<f64>,

    /// Старое имя поля цены, используется если `unit_price` отсутствует
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub price: Option<f64>,
}

impl Product {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Цена продажи: `unit_price`, затем `price`
    pub fn effective_unit_price(&self) -> Option<f64> {
        self.unit_price.or(self.price)
    }

    pub fn effective_code(&self) -> String {
        self.code.clone().unwrap_or_else(|| self.to_string_id())
    }

    pub fn unit_cost(&self) -> f64 {
        self.cost.unwrap_or(0.0)
    }

    /// Текст пункта в выпадающем списке
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            self.to_string_id()
        } else {
            self.name.clone()
        }
    }
}

/// Поиск товара по значению `<select>` (строковое сравнение, как у HTML)
pub fn find_product<'a>(catalog: &'a [Product], select_value: &str) -> Option<&'a Product> {
    if select_value.is_empty() {
        return None;
    }
    catalog.iter().find(|p| p.to_string_id() == select_value)
}
