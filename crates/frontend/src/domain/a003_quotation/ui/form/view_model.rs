use contracts::domain::a001_product::Product;
use contracts::domain::a002_customer::{
    find_customer, payment_terms_autofill, search_customers, Customer,
};
use contracts::domain::a003_quotation::{
    LineItemTable, LineKey, QuotationField, QuotationPageData, QuotationPreview, QuotationTotals,
    QuotationValues,
};
use leptos::prelude::*;

/// ViewModel формы сметы
///
/// Справочники неизменяемы и лежат в `StoredValue`; шапка и строки в
/// сигналах. Итоги считает `Memo`, который пересчитывает всю цепочку при любом
/// изменении шапки или строк.
#[derive(Clone, Copy)]
pub struct QuotationFormViewModel {
    pub data: StoredValue<QuotationPageData>,
    pub values: RwSignal<QuotationValues>,
    pub lines: RwSignal<LineItemTable>,
    /// Текст в поле поиска клиента
    pub customer_search: RwSignal<String>,
    pub candidates_open: RwSignal<bool>,
    pub totals: Memo<QuotationTotals>,
    pub preview: Memo<QuotationPreview>,
}

impl QuotationFormViewModel {
    pub fn new(data: QuotationPageData) -> Self {
        let initial_values = data.initial_values.clone().unwrap_or_default();
        let table = LineItemTable::restore(
            data.initial_details.as_deref().unwrap_or_default(),
            &data.products,
        );

        let data = StoredValue::new(data);
        let values = RwSignal::new(initial_values);
        let lines = RwSignal::new(table);

        let totals = Memo::new(move |_| {
            let (params, discount_rate) =
                values.with(|v| (v.travel_params(), v.discount_rate_percent()));
            data.with_value(|d| {
                lines.with(|table| {
                    QuotationTotals::compute(table, &d.products, &params, discount_rate, &d.pricing)
                })
            })
        });
        let preview = Memo::new(move |_| totals.get().preview());

        let vm = Self {
            data,
            values,
            lines,
            customer_search: RwSignal::new(String::new()),
            candidates_open: RwSignal::new(false),
            totals,
            preview,
        };
        vm.init_customer();
        vm
    }

    /// Начальное состояние блока клиента при редактировании сметы
    fn init_customer(&self) {
        let customer_id = self.values.with_untracked(|v| v.customer_id.clone());
        if customer_id.is_empty() {
            return;
        }

        let name = self.data.with_value(|d| {
            find_customer(&d.customers, &customer_id).map(|c| c.name.clone())
        });
        if let Some(name) = name {
            self.customer_search.set(name);
        }
        self.apply_payment_terms(&customer_id, false);
    }

    pub fn products(&self) -> Vec<Product> {
        self.data.with_value(|d| d.products.clone())
    }

    // ------------------------------------------------------------------
    // Шапка
    // ------------------------------------------------------------------

    pub fn field_value(&self, field: QuotationField) -> String {
        self.values.with(|v| field.value(v).to_string())
    }

    /// Изменить поле шапки (параметры трассы и скидка пересчитывают итоги)
    pub fn set_field(&self, field: QuotationField, text: String) {
        self.values.update(|v| *field.value_mut(v) = text);
    }

    /// Ручной ввод названия компании отвязывает выбранного клиента
    pub fn on_company_name_input(&self, text: String) {
        self.values.update(|v| {
            v.company_name = text;
            v.customer_id.clear();
        });
    }

    // ------------------------------------------------------------------
    // Клиент
    // ------------------------------------------------------------------

    pub fn on_customer_search_input(&self, text: String) {
        if text.is_empty() {
            self.values.update(|v| v.customer_id.clear());
        }
        self.customer_search.set(text);
        self.candidates_open.set(true);
    }

    /// Кандидаты для текущего текста поиска
    pub fn candidates(&self) -> Vec<Customer> {
        let keyword = self.customer_search.get();
        self.data.with_value(|d| {
            search_customers(&d.customers, &keyword)
                .into_iter()
                .cloned()
                .collect()
        })
    }

    pub fn select_customer(&self, customer: &Customer) {
        let customer_id = customer.to_string_id();
        self.values.update(|v| {
            v.customer_id = customer_id.clone();
            v.company_name = customer.name.clone();
        });
        self.customer_search.set(customer.name.clone());
        self.candidates_open.set(false);
        self.on_customer_changed(&customer_id);
    }

    /// Аналог события `change` скрытого поля `customer_id`
    fn on_customer_changed(&self, customer_id: &str) {
        if !customer_id.is_empty() {
            self.apply_payment_terms(customer_id, false);
        }
    }

    /// Подставить условия оплаты клиента; без `force` заполненное поле не трогается
    pub fn apply_payment_terms(&self, customer_id: &str, force: bool) {
        let current = self.values.with_untracked(|v| v.payment_terms.clone());
        let terms = self
            .data
            .with_value(|d| payment_terms_autofill(&d.customers_meta, customer_id, &current, force));
        if let Some(terms) = terms {
            log::debug!("payment terms auto-filled for customer {}", customer_id);
            self.values.update(|v| v.payment_terms = terms);
        }
    }

    pub fn close_candidates(&self) {
        self.candidates_open.set(false);
    }

    // ------------------------------------------------------------------
    // Строки
    // ------------------------------------------------------------------

    pub fn add_line(&self) {
        self.lines.update(|t| {
            t.add_row();
        });
    }

    pub fn remove_line(&self, key: LineKey) {
        self.lines.update(|t| t.remove_row(key));
    }

    pub fn select_product(&self, key: LineKey, select_value: String) {
        self.data.with_value(|d| {
            self.lines
                .update(|t| t.update_row(key, |row| row.select_product(select_value, &d.products)));
        });
    }

    pub fn set_description(&self, key: LineKey, text: String) {
        self.lines
            .update(|t| t.update_row(key, |row| row.description = text));
    }

    pub fn set_unit_price(&self, key: LineKey, text: String) {
        self.lines
            .update(|t| t.update_row(key, |row| row.set_unit_price(text)));
    }

    pub fn set_quantity(&self, key: LineKey, text: String) {
        self.lines
            .update(|t| t.update_row(key, |row| row.set_quantity(text)));
    }

    /// Ключи строк в текущем порядке
    pub fn line_keys(&self) -> Vec<LineKey> {
        self.lines.with(|t| t.rows().iter().map(|r| r.key).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::ProductId;
    use contracts::domain::a002_customer::{CustomerId, CustomerMeta, CustomerMetaMap};

    fn page_data(initial_values: Option<QuotationValues>) -> QuotationPageData {
        let mut customers_meta = CustomerMetaMap::new();
        customers_meta.insert(
            "5".into(),
            CustomerMeta {
                name: "ACME".into(),
                payment_term_name: "前払い".into(),
                ..Default::default()
            },
        );

        QuotationPageData {
            products: vec![Product {
                id: ProductId::new(1),
                name: "AGV本体".into(),
                code: Some("AGV-01".into()),
                cost: Some(600.0),
                unit_price: Some(1000.0),
                price: None,
            }],
            customers: vec![
                Customer {
                    id: CustomerId::new(5),
                    name: "ACME".into(),
                    name_kana: Some("アクメ".into()),
                },
                Customer {
                    id: CustomerId::new(6),
                    name: "Tokyo Robotics".into(),
                    name_kana: None,
                },
            ],
            customers_meta,
            initial_values,
            ..Default::default()
        }
    }

    fn values_with_customer(id: &str) -> QuotationValues {
        QuotationValues {
            customer_id: id.into(),
            company_name: "ACME".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_load_shows_customer_and_fills_payment_terms() {
        let owner = Owner::new();
        owner.set();

        let vm = QuotationFormViewModel::new(page_data(Some(values_with_customer("5"))));
        assert_eq!(vm.customer_search.get_untracked(), "ACME");
        assert_eq!(
            vm.values.with_untracked(|v| v.payment_terms.clone()),
            "前払い"
        );
    }

    #[test]
    fn test_load_keeps_saved_payment_terms() {
        let owner = Owner::new();
        owner.set();

        let mut values = values_with_customer("5");
        values.payment_terms = "手形".into();
        let vm = QuotationFormViewModel::new(page_data(Some(values)));
        assert_eq!(vm.values.with_untracked(|v| v.payment_terms.clone()), "手形");
    }

    #[test]
    fn test_company_name_input_unlinks_customer() {
        let owner = Owner::new();
        owner.set();

        let vm = QuotationFormViewModel::new(page_data(Some(values_with_customer("5"))));
        vm.on_company_name_input("ACME Japan".into());
        vm.values.with_untracked(|v| {
            assert_eq!(v.company_name, "ACME Japan");
            assert_eq!(v.customer_id, "");
        });
    }

    #[test]
    fn test_clearing_search_unlinks_customer() {
        let owner = Owner::new();
        owner.set();

        let vm = QuotationFormViewModel::new(page_data(Some(values_with_customer("5"))));
        vm.on_customer_search_input("AC".into());
        assert_eq!(vm.values.with_untracked(|v| v.customer_id.clone()), "5");
        assert!(vm.candidates_open.get_untracked());

        vm.on_customer_search_input(String::new());
        assert_eq!(vm.values.with_untracked(|v| v.customer_id.clone()), "");
    }

    #[test]
    fn test_select_customer_does_not_overwrite_payment_terms() {
        let owner = Owner::new();
        owner.set();

        let vm = QuotationFormViewModel::new(page_data(None));
        vm.set_field(QuotationField::PaymentTerms, "手形".into());
        vm.on_customer_search_input("acme".into());

        let candidates = vm.candidates();
        assert_eq!(candidates.len(), 1);
        vm.select_customer(&candidates[0]);

        vm.values.with_untracked(|v| {
            assert_eq!(v.customer_id, "5");
            assert_eq!(v.company_name, "ACME");
            assert_eq!(v.payment_terms, "手形");
        });
        assert_eq!(vm.customer_search.get_untracked(), "ACME");
        assert!(!vm.candidates_open.get_untracked());
    }

    #[test]
    fn test_line_changes_update_totals() {
        let owner = Owner::new();
        owner.set();

        let vm = QuotationFormViewModel::new(page_data(None));
        let key = vm.line_keys()[0];
        vm.select_product(key, "1".into());
        vm.set_quantity(key, "3".into());

        let totals = vm.totals.get_untracked();
        assert_eq!(totals.product_total, 3000.0);
        assert_eq!(totals.product_cost_total, 1800.0);
        assert_eq!(vm.preview.get_untracked().grand_total, "3,000");

        vm.remove_line(key);
        assert_eq!(vm.line_keys(), vec![key]);
        assert_eq!(vm.totals.get_untracked().product_total, 0.0);
    }
}
