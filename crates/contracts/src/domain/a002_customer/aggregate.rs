use crate::domain::common::AggregateId;
use crate::integer_id;
use crate::shared::lenient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// ID Type
// ============================================================================
integer_id!(
    /// ID клиента (только одобренные клиенты попадают в форму)
    CustomerId
);

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: CustomerId,

    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    /// Фонетическое написание имени (カナ)
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub name_kana: Option<String>,
}

impl Customer {
    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// `name（name_kana）` или просто `name`
    pub fn candidate_label(&self) -> String {
        match self.name_kana.as_deref() {
            Some(kana) if !kana.is_empty() => format!("{}（{}）", self.name, kana),
            _ => self.name.clone(),
        }
    }
}

/// Дополнительные сведения о клиенте из блока `customers-meta-json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerMeta {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: String,

    /// Условия оплаты из справочника `payment_terms`
    #[serde(default, deserialize_with = "lenient::string")]
    pub payment_term_name: String,

    /// Условия оплаты в старом свободном текстовом поле
    #[serde(default, deserialize_with = "lenient::string")]
    pub payment_terms_legacy: String,
}

impl CustomerMeta {
    /// Значение для автозаполнения поля «支払条件»
    pub fn payment_terms_candidate(&self) -> Option<&str> {
        [&self.payment_term_name, &self.payment_terms_legacy]
            .into_iter()
            .map(String::as_str)
            .find(|s| !s.is_empty())
    }
}

/// Карта метаданных, ключ: ID клиента в виде строки
pub type CustomerMetaMap = HashMap<String, CustomerMeta>;

/// Поиск клиента по значению hidden-поля `customer_id`
pub fn find_customer<'a>(customers: &'a [Customer], id_value: &str) -> Option<&'a Customer> {
    let id_value = id_value.trim();
    if id_value.is_empty() {
        return None;
    }
    customers.iter().find(|c| c.to_string_id() == id_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_label() {
        let c: Customer =
            serde_json::from_str(r#"{"id": 1, "name": "山田工業", "name_kana": "ヤマダコウギョウ"}"#)
                .unwrap();
        assert_eq!(c.candidate_label(), "山田工業（ヤマダコウギョウ）");

        let c: Customer = serde_json::from_str(r#"{"id": 2, "name": "ACME", "name_kana": null}"#)
            .unwrap();
        assert_eq!(c.candidate_label(), "ACME");
    }

    #[test]
    fn test_payment_terms_candidate_priority() {
        let meta = CustomerMeta {
            payment_term_name: "月末締め翌月末払い".into(),
            payment_terms_legacy: "現金".into(),
            ..Default::default()
        };
        assert_eq!(meta.payment_terms_candidate(), Some("月末締め翌月末払い"));

        let meta = CustomerMeta {
            payment_terms_legacy: "現金".into(),
            ..Default::default()
        };
        assert_eq!(meta.payment_terms_candidate(), Some("現金"));

        assert_eq!(CustomerMeta::default().payment_terms_candidate(), None);
    }

    #[test]
    fn test_meta_map_parses_string_keys() {
        let map: CustomerMetaMap = serde_json::from_str(
            r#"{"3": {"name": "A", "payment_term_name": "", "payment_terms_legacy": "手形"}}"#,
        )
        .unwrap();
        assert_eq!(map["3"].payment_terms_candidate(), Some("手形"));
    }

    #[test]
    fn test_find_customer_loose_match() {
        let customers: Vec<Customer> =
            serde_json::from_str(r#"[{"id": 7, "name": "A"}, {"id": 8, "name": "B"}]"#).unwrap();
        assert_eq!(find_customer(&customers, " 8 ").map(|c| c.name.as_str()), Some("B"));
        assert!(find_customer(&customers, "").is_none());
    }

    #[test]
    fn test_string_id_is_accepted() {
        let customers: Vec<Customer> =
            serde_json::from_str(r#"[{"id": "5", "name": "ACME"}]"#).unwrap();
        assert_eq!(customers[0].to_string_id(), "5");
    }
}
