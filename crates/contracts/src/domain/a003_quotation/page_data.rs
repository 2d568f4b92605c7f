use super::aggregate::{QuotationDetail, QuotationValues};
use super::config::PricingConfig;
use crate::domain::a001_product::Product;
use crate::domain::a002_customer::{Customer, CustomerMetaMap};
use crate::shared::embedded::{
    parse_block_or, CUSTOMERS_BLOCK_ID, CUSTOMERS_META_BLOCK_ID, INITIAL_DETAILS_BLOCK_ID,
    INITIAL_VALUES_BLOCK_ID, PRICING_CONFIG_BLOCK_ID, PRODUCTS_BLOCK_ID,
};

/// Все данные, которые сервер встраивает в страницу формы сметы
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuotationPageData {
    pub products: Vec<Product>,
    pub customers: Vec<Customer>,
    pub customers_meta: CustomerMetaMap,
    /// Есть при редактировании/пересмотре сметы
    pub initial_values: Option<QuotationValues>,
    /// Есть при редактировании/пересмотре сметы
    pub initial_details: Option<Vec<QuotationDetail>>,
    pub pricing: PricingConfig,
}

impl QuotationPageData {
    /// Прочитать все блоки через `read_block(id) -> текст элемента`
    ///
    /// Отсутствующий элемент или битый JSON заменяются значением по умолчанию.
    pub fn load(read_block: impl Fn(&str) -> Option<String>) -> Self {
        let products: Vec<Product> =
            parse_block_or(PRODUCTS_BLOCK_ID, read_block(PRODUCTS_BLOCK_ID).as_deref(), Vec::new());
        let customers: Vec<Customer> =
            parse_block_or(CUSTOMERS_BLOCK_ID, read_block(CUSTOMERS_BLOCK_ID).as_deref(), Vec::new());
        let customers_meta: CustomerMetaMap = parse_block_or(
            CUSTOMERS_META_BLOCK_ID,
            read_block(CUSTOMERS_META_BLOCK_ID).as_deref(),
            CustomerMetaMap::new(),
        );
        let initial_values: Option<QuotationValues> = parse_block_or(
            INITIAL_VALUES_BLOCK_ID,
            read_block(INITIAL_VALUES_BLOCK_ID).as_deref(),
            None,
        );
        let initial_details: Option<Vec<QuotationDetail>> = parse_block_or(
            INITIAL_DETAILS_BLOCK_ID,
            read_block(INITIAL_DETAILS_BLOCK_ID).as_deref(),
            None,
        );

        // Блок конфигурации необязателен, его отсутствие: не повод для предупреждения
        let pricing = match read_block(PRICING_CONFIG_BLOCK_ID) {
            Some(text) => parse_block_or(
                PRICING_CONFIG_BLOCK_ID,
                Some(text.as_str()),
                PricingConfig::default(),
            )
            .sanitized(),
            None => PricingConfig::default(),
        };

        log::debug!(
            "page data: {} products, {} customers, initial details: {}",
            products.len(),
            customers.len(),
            initial_details.as_ref().map_or(0, Vec::len)
        );

        Self {
            products,
            customers,
            customers_meta,
            initial_values,
            initial_details,
            pricing,
        }
    }
}
