//! Состояние одной строки табличной части сметы
//!
//! Поля: сырой текст соответствующих `<input>`, как он уйдёт в POST.

use super::aggregate::FixedFeeLine;
use crate::domain::a001_product::{find_product, Product};
use crate::shared::number::{format_plain, parse_number};

/// Ключ строки для отрисовки списка (стабилен при удалении соседних строк)
pub type LineKey = u64;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItem {
    pub key: LineKey,
    /// Значение `<select name="product_id[]">`, пустое: товар не выбран
    pub product_id: String,
    pub description: String,
    pub code: String,
    pub unit_price: String,
    pub quantity: String,
    pub subtotal: String,
    /// Цена взята из каталога и не редактируется
    pub unit_price_locked: bool,
    /// Служебная строка (設計費/現地セットアップ): все элементы заблокированы
    pub fixed: Option<FixedFeeLine>,
}

impl LineItem {
    pub fn new(key: LineKey) -> Self {
        Self {
            key,
            ..Default::default()
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed.is_some()
    }

    /// Подсказка в поле наименования служебной строки
    pub fn description_placeholder(&self) -> Option<&'static str> {
        self.fixed.map(|f| f.label())
    }

    pub fn is_unit_price_readonly(&self) -> bool {
        self.unit_price_locked || self.is_fixed()
    }

    /// Пересчитать подытог: цена × количество, пусто если результат ≤ 0
    pub fn recalc_subtotal(&mut self) {
        let subtotal = parse_number(&self.unit_price) * parse_number(&self.quantity);
        self.subtotal = if subtotal > 0.0 {
            format_plain(subtotal)
        } else {
            String::new()
        };
    }

    pub fn set_unit_price(&mut self, value: String) {
        self.unit_price = value;
        self.recalc_subtotal();
    }

    pub fn set_quantity(&mut self, value: String) {
        self.quantity = value;
        self.recalc_subtotal();
    }

    /// Выбор товара в строке
    ///
    /// Найденный товар заполняет наименование, код и цену и блокирует цену;
    /// пустое количество становится `1`. Если товар не найден (выбор снят),
    /// наименование/код/цена очищаются и цена снова редактируется.
    pub fn select_product(&mut self, select_value: String, catalog: &[Product]) {
        self.product_id = select_value;

        match find_product(catalog, &self.product_id) {
            None => {
                self.description.clear();
                self.code.clear();
                self.unit_price.clear();
                self.unit_price_locked = false;
            }
            Some(product) => {
                self.description = product.name.clone();
                self.code = product.effective_code();
                if let Some(price) = product.effective_unit_price() {
                    self.unit_price = format_plain(price);
                }
                self.unit_price_locked = true;
                if self.quantity.is_empty() {
                    self.quantity = "1".to_string();
                }
            }
        }

        self.recalc_subtotal();
    }

    /// Очистить все поля строки (ключ сохраняется)
    pub fn clear(&mut self) {
        *self = Self::new(self.key);
    }

    /// Себестоимость строки по каталогу; 0 для свободных строк
    pub fn product_cost(&self, catalog: &[Product]) -> f64 {
        let qty = parse_number(&self.quantity);
        if self.product_id.is_empty() || qty <= 0.0 {
            return 0.0;
        }
        find_product(catalog, &self.product_id)
            .map(|p| p.unit_cost() * qty)
            .unwrap_or(0.0)
    }

    pub fn subtotal_value(&self) -> f64 {
        parse_number(&self.subtotal)
    }
}
