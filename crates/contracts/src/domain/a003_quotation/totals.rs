//! Полный пересчёт итогов сметы и их текстовое представление
//!
//! Каждый вызов считает всю цепочку заново:
//! подытоги → итог по товарам → себестоимость товаров → часы/стоимость/цена
//! работ → сумма до скидки → скидка → итог → рентабельность.

use super::config::PricingConfig;
use super::line_table::LineItemTable;
use super::pricing::{
    discount_amount, estimate_design, estimate_setup, profit_rate_percent, FeeEstimate,
    TravelParams,
};
use crate::domain::a001_product::Product;
use crate::shared::number::{format_fixed, format_grouped, format_percent};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QuotationTotals {
    /// Сумма подытогов строк
    pub product_total: f64,
    pub product_cost_total: f64,
    pub design: FeeEstimate,
    pub setup: FeeEstimate,
    pub total_sell_before_discount: f64,
    pub total_cost: f64,
    pub discount_amount: f64,
    pub final_sell: f64,
    pub final_profit_rate: f64,
}

impl QuotationTotals {
    pub fn compute(
        table: &LineItemTable,
        catalog: &[Product],
        params: &TravelParams,
        discount_rate_percent: f64,
        config: &PricingConfig,
    ) -> Self {
        let product_total = table.grand_total();
        let product_cost_total = table.product_cost_total(catalog);

        let design = estimate_design(params, config);
        let setup = estimate_setup(params, config);

        let total_sell_before_discount = product_total + design.fee + setup.fee;
        let total_cost = product_cost_total + design.cost + setup.cost;

        let discount_amount = discount_amount(total_sell_before_discount, discount_rate_percent);
        let final_sell = total_sell_before_discount - discount_amount;

        Self {
            product_total,
            product_cost_total,
            design,
            setup,
            total_sell_before_discount,
            total_cost,
            discount_amount,
            final_sell,
            final_profit_rate: profit_rate_percent(final_sell, total_cost),
        }
    }

    /// Текст для всех полей предпросмотра
    pub fn preview(&self) -> QuotationPreview {
        QuotationPreview {
            grand_total: format_grouped(self.product_total),
            design_hours: format_fixed(self.design.hours, 1),
            setup_hours: format_fixed(self.setup.hours, 1),
            design_cost: format_grouped(self.design.cost),
            setup_cost: format_grouped(self.setup.cost),
            design_fee: format_grouped(self.design.fee),
            setup_fee: format_grouped(self.setup.fee),
            design_profit_rate: format_percent(self.design.profit_rate),
            setup_profit_rate: format_percent(self.setup.profit_rate),
            total_sell: format_grouped(self.total_sell_before_discount),
            total_cost: format_grouped(self.total_cost),
            final_sell: format_grouped(self.final_sell),
            total_profit_rate: format_percent(self.final_profit_rate),
            discount_amount: if self.discount_amount > 0.0 {
                format!("-{}", format_grouped(self.discount_amount))
            } else {
                "0".to_string()
            },
        }
    }
}

/// Отформатированные значения; у каждого поля: свой фиксированный элемент страницы
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotationPreview {
    pub grand_total: String,
    pub design_hours: String,
    pub setup_hours: String,
    pub design_cost: String,
    pub setup_cost: String,
    pub design_fee: String,
    pub setup_fee: String,
    pub design_profit_rate: String,
    pub setup_profit_rate: String,
    pub total_sell: String,
    pub total_cost: String,
    pub final_sell: String,
    pub total_profit_rate: String,
    pub discount_amount: String,
}

impl QuotationPreview {
    /// Пары (id элемента, текст)
    pub fn targets(&self) -> [(&'static str, &str); 14] {
        [
            ("grand-total", self.grand_total.as_str()),
            ("preview-design-hours", self.design_hours.as_str()),
            ("preview-setup-hours", self.setup_hours.as_str()),
            ("preview-design-cost", self.design_cost.as_str()),
            ("preview-setup-cost", self.setup_cost.as_str()),
            ("preview-design-fee", self.design_fee.as_str()),
            ("preview-setup-fee", self.setup_fee.as_str()),
            ("preview-design-profit-rate", self.design_profit_rate.as_str()),
            ("preview-setup-profit-rate", self.setup_profit_rate.as_str()),
            ("preview-total-sell", self.total_sell.as_str()),
            ("preview-total-cost", self.total_cost.as_str()),
            ("preview-final-sell", self.final_sell.as_str()),
            ("preview-total-profit-rate", self.total_profit_rate.as_str()),
            ("discount-amount", self.discount_amount.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_quotation::aggregate::QuotationDetail;

    fn catalog() -> Vec<Product> {
        serde_json::from_str(
            r#"[{"id": 1, "name": "AGV本体", "unit_price": 1000000, "cost": 700000}]"#,
        )
        .unwrap()
    }

    fn table_with_one_agv() -> LineItemTable {
        let details: Vec<QuotationDetail> =
            serde_json::from_str(r#"[{"product_id": 1, "quantity": 1}]"#).unwrap();
        LineItemTable::restore(&details, &catalog())
    }

    #[test]
    fn test_empty_form_is_all_zero() {
        let totals = QuotationTotals::compute(
            &LineItemTable::with_blank_row(),
            &[],
            &TravelParams::default(),
            0.0,
            &PricingConfig::default(),
        );
        assert_eq!(totals, QuotationTotals::default());

        let preview = totals.preview();
        assert_eq!(preview.total_sell, "0");
        assert_eq!(preview.design_hours, "0.0");
        assert_eq!(preview.total_profit_rate, "0.0%");
        assert_eq!(preview.discount_amount, "0");
    }

    #[test]
    fn test_products_only() {
        let totals = QuotationTotals::compute(
            &table_with_one_agv(),
            &catalog(),
            &TravelParams::default(),
            0.0,
            &PricingConfig::default(),
        );
        assert_eq!(totals.product_total, 1_000_000.0);
        assert_eq!(totals.total_cost, 700_000.0);
        assert_eq!(totals.final_sell, 1_000_000.0);
        assert!((totals.final_profit_rate - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_chain_with_fees_and_discount() {
        // design: (1×2×2 + 3 + 40/100) × 1.1 = 8.14 → 9 h
        // setup: ct = 40/30 + 0.3; trials 10; trial_h = (4/3+0.3)×10/60;
        //        bug 10; interlock 0.1×1×2×3 = 0.6; workers 1 (1 машина, 40 м)
        let params = TravelParams {
            distance: 40.0,
            intersections: 2.0,
            stations: 3.0,
            vehicles: 1.0,
            ..Default::default()
        };
        let config = PricingConfig::default();
        let totals =
            QuotationTotals::compute(&table_with_one_agv(), &catalog(), &params, 10.0, &config);

        assert_eq!(totals.design.hours, 9.0);
        assert_eq!(totals.design.fee, 135_000.0);
        assert_eq!(totals.design.cost, 71_280.0);

        let setup_raw: f64 = ((40.0 / 30.0 + 0.3) * 10.0 / 60.0 + 10.0 + 0.6) * 1.1;
        assert_eq!(totals.setup.hours, setup_raw.ceil());
        assert_eq!(totals.setup.hours, 12.0);
        assert_eq!(totals.setup.fee, 180_000.0);

        let total_sell = 1_000_000.0 + 135_000.0 + 180_000.0;
        assert_eq!(totals.total_sell_before_discount, total_sell);
        assert_eq!(totals.discount_amount, 131_500.0);
        assert_eq!(totals.final_sell, total_sell - 131_500.0);

        let total_cost = 700_000.0 + 71_280.0 + 12.0 * 7920.0;
        assert_eq!(totals.total_cost, total_cost);
        let expected_rate = (totals.final_sell - total_cost) / totals.final_sell * 100.0;
        assert!((totals.final_profit_rate - expected_rate).abs() < 1e-9);

        let preview = totals.preview();
        assert_eq!(preview.total_sell, "1,315,000");
        assert_eq!(preview.discount_amount, "-131,500");
        assert_eq!(preview.final_sell, "1,183,500");
        assert_eq!(preview.design_hours, "9.0");
        assert_eq!(preview.design_fee, "135,000");
    }

    #[test]
    fn test_preview_targets_cover_every_field() {
        let preview = QuotationPreview {
            grand_total: "1".into(),
            discount_amount: "-2".into(),
            ..Default::default()
        };
        let targets = preview.targets();
        assert_eq!(targets[0], ("grand-total", "1"));
        assert_eq!(targets[13], ("discount-amount", "-2"));
    }
}
