//! Табличная часть сметы: добавление, удаление и восстановление строк

use super::aggregate::QuotationDetail;
use super::line_item::{LineItem, LineKey};
use crate::domain::a001_product::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItemTable {
    rows: Vec<LineItem>,
    next_key: LineKey,
}

impl LineItemTable {
    /// Пустая таблица без строк
    pub fn new() -> Self {
        Self::default()
    }

    /// Таблица для новой сметы: одна пустая строка
    pub fn with_blank_row() -> Self {
        let mut table = Self::new();
        table.add_row();
        table
    }

    /// Восстановить строки сохранённой сметы
    ///
    /// Строка с ненулевым `product_id`: товарная: сначала количество, затем
    /// выбор товара (автозаполнение, кроме служебных строк). Остальные:
    /// свободные: наименование, цена, количество и подытог копируются как есть.
    /// Явные `code` и `subtotal` из сохранённой строки имеют приоритет.
    /// Пустой список даёт одну пустую строку.
    pub fn restore(details: &[QuotationDetail], catalog: &[Product]) -> Self {
        if details.is_empty() {
            return Self::with_blank_row();
        }

        let mut table = Self::new();
        for detail in details {
            let key = table.allocate_key();
            let mut row = LineItem::new(key);
            let fixed = detail.fixed_fee();

            match detail.linked_product_id() {
                Some(pid) => {
                    if let Some(qty) = &detail.quantity {
                        row.quantity = qty.clone();
                    }
                    if fixed.is_some() {
                        row.product_id = pid.to_string();
                    } else {
                        row.select_product(pid.to_string(), catalog);
                    }
                }
                None => {
                    if let Some(description) = &detail.description {
                        row.description = description.clone();
                    }
                    if let Some(price) = &detail.price {
                        row.unit_price = price.clone();
                    }
                    if let Some(qty) = &detail.quantity {
                        row.quantity = qty.clone();
                    }
                }
            }

            if let Some(code) = &detail.code {
                row.code = code.clone();
            }
            if let Some(subtotal) = &detail.subtotal {
                row.subtotal = subtotal.clone();
            }
            row.fixed = fixed;

            table.rows.push(row);
        }

        log::debug!("restored {} quotation lines", table.rows.len());
        table
    }

    fn allocate_key(&mut self) -> LineKey {
        let key = self.next_key;
        self.next_key += 1;
        key
    }

    pub fn rows(&self) -> &[LineItem] {
        &self.rows
    }

    pub fn row(&self, key: LineKey) -> Option<&LineItem> {
        self.rows.iter().find(|r| r.key == key)
    }

    /// Изменить строку по ключу; для отсутствующей строки ничего не делает
    pub fn update_row(&mut self, key: LineKey, f: impl FnOnce(&mut LineItem)) {
        if let Some(row) = self.rows.iter_mut().find(|r| r.key == key) {
            f(row);
        }
    }

    pub fn add_row(&mut self) -> LineKey {
        let key = self.allocate_key();
        self.rows.push(LineItem::new(key));
        key
    }

    /// Удалить строку. Последняя оставшаяся строка не удаляется, а очищается;
    /// служебные строки не удаляются вовсе.
    pub fn remove_row(&mut self, key: LineKey) {
        let Some(pos) = self.rows.iter().position(|r| r.key == key) else {
            return;
        };
        if self.rows[pos].is_fixed() {
            return;
        }
        if self.rows.len() <= 1 {
            self.rows[pos].clear();
        } else {
            self.rows.remove(pos);
        }
    }

    /// Сумма подытогов всех строк (итог по товарам)
    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(LineItem::subtotal_value).sum()
    }

    /// Себестоимость товаров по каталогу
    pub fn product_cost_total(&self, catalog: &[Product]) -> f64 {
        self.rows.iter().map(|r| r.product_cost(catalog)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_quotation::aggregate::{FixedFeeLine, DESIGN_FEE_LABEL};

    fn catalog() -> Vec<Product> {
        serde_json::from_str(
            r#"[
                {"id": 1, "name": "AGV本体", "code": "AGV-01", "unit_price": 1000, "cost": 600},
                {"id": 2, "name": "センサー", "unit_price": 200, "cost": 50}
            ]"#,
        )
        .unwrap()
    }

    fn details(json: &str) -> Vec<QuotationDetail> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_new_quotation_starts_with_one_blank_row() {
        let table = LineItemTable::restore(&[], &catalog());
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0], LineItem::new(0));
    }

    #[test]
    fn test_remove_last_row_clears_it() {
        let mut table = LineItemTable::with_blank_row();
        let key = table.rows()[0].key;
        table.update_row(key, |r| r.select_product("1".into(), &catalog()));
        table.remove_row(key);
        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0], LineItem::new(key));
        assert!(!table.rows()[0].unit_price_locked);
    }

    #[test]
    fn test_remove_other_row_deletes_it() {
        let mut table = LineItemTable::with_blank_row();
        let first = table.rows()[0].key;
        let second = table.add_row();
        let third = table.add_row();
        table.remove_row(second);
        let keys: Vec<_> = table.rows().iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![first, third]);
    }

    #[test]
    fn test_keys_are_not_reused() {
        let mut table = LineItemTable::with_blank_row();
        let second = table.add_row();
        table.remove_row(second);
        let third = table.add_row();
        assert_ne!(second, third);
    }

    #[test]
    fn test_restore_product_linked_row() {
        let table = LineItemTable::restore(
            &details(r#"[{"product_id": 1, "quantity": 3, "price": 999, "subtotal": 3000}]"#),
            &catalog(),
        );
        let row = &table.rows()[0];
        assert_eq!(row.product_id, "1");
        assert_eq!(row.description, "AGV本体");
        assert_eq!(row.unit_price, "1000");
        assert_eq!(row.quantity, "3");
        assert_eq!(row.subtotal, "3000");
        assert!(row.unit_price_locked);
    }

    #[test]
    fn test_restore_free_text_row() {
        let table = LineItemTable::restore(
            &details(
                r#"[{"product_id": 0, "description": "据付工事", "price": "50000",
                     "quantity": "2", "subtotal": "100000", "code": "K-1"}]"#,
            ),
            &catalog(),
        );
        let row = &table.rows()[0];
        assert_eq!(row.product_id, "");
        assert_eq!(row.description, "据付工事");
        assert_eq!(row.unit_price, "50000");
        assert_eq!(row.quantity, "2");
        assert_eq!(row.subtotal, "100000");
        assert_eq!(row.code, "K-1");
        assert!(!row.unit_price_locked);
        assert!(!row.is_fixed());
    }

    #[test]
    fn test_restore_explicit_code_overrides_catalog() {
        let table = LineItemTable::restore(
            &details(r#"[{"product_id": "1", "quantity": 1, "code": "OLD-CODE"}]"#),
            &catalog(),
        );
        assert_eq!(table.rows()[0].code, "OLD-CODE");
    }

    #[test]
    fn test_restore_fixed_fee_row_is_locked_and_not_removable() {
        let json = format!(
            r#"[{{"product_id": null, "label": "{}", "description": "設計費（走行条件）",
                 "price": 300000, "quantity": 1, "subtotal": 300000}},
                {{"product_id": 2, "quantity": 1}}]"#,
            DESIGN_FEE_LABEL
        );
        let mut table = LineItemTable::restore(&details(&json), &catalog());
        let fixed_key = table.rows()[0].key;
        assert_eq!(table.rows()[0].fixed, Some(FixedFeeLine::Design));
        assert!(table.rows()[0].is_unit_price_readonly());

        table.remove_row(fixed_key);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].subtotal, "300000");
    }

    #[test]
    fn test_totals() {
        let catalog = catalog();
        let table = LineItemTable::restore(
            &details(
                r#"[{"product_id": 1, "quantity": 2},
                    {"product_id": 2, "quantity": 5},
                    {"description": "諸経費", "price": 3000, "quantity": 1, "subtotal": 3000}]"#,
            ),
            &catalog,
        );
        assert_eq!(table.grand_total(), 2000.0 + 1000.0 + 3000.0);
        assert_eq!(table.product_cost_total(&catalog), 1200.0 + 250.0);
    }
}
