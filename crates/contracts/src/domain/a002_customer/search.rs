//! Логика поиска клиента и автозаполнения условий оплаты

use super::aggregate::{Customer, CustomerMetaMap};

/// Клиенты, у которых имя или カナ содержит ключевое слово (без учёта регистра)
///
/// Пустое ключевое слово не даёт кандидатов. Непустое обрезается по краям,
/// поэтому строка из одних пробелов совпадает со всеми клиентами.
pub fn search_customers<'a>(customers: &'a [Customer], keyword: &str) -> Vec<&'a Customer> {
    if keyword.is_empty() {
        return Vec::new();
    }

    let kw = keyword.trim().to_lowercase();
    customers
        .iter()
        .filter(|c| {
            let name = c.name.to_lowercase();
            let kana = c.name_kana.as_deref().unwrap_or_default().to_lowercase();
            name.contains(&kw) || kana.contains(&kw)
        })
        .collect()
}

/// Новое значение поля условий оплаты после выбора клиента
///
/// `None`: поле не меняется: нет метаданных, нет кандидата, либо поле уже
/// заполнено и `force == false`.
pub fn payment_terms_autofill(
    meta: &CustomerMetaMap,
    customer_id: &str,
    current_value: &str,
    force: bool,
) -> Option<String> {
    let candidate = meta.get(customer_id)?.payment_terms_candidate()?;
    if !force && !current_value.is_empty() {
        return None;
    }
    Some(candidate.to_string())
}
