use contracts::domain::a001_product::Product;
use contracts::domain::a002_customer::Customer;

/// Базовый трейт для элементов, которые можно выбирать из списка
/// (пункты `<select>`, кандидаты поиска)
pub trait AggregatePickerResult {
    fn id(&self) -> String;
    fn display_name(&self) -> String;
}

impl AggregatePickerResult for Product {
    fn id(&self) -> String {
        self.to_string_id()
    }

    fn display_name(&self) -> String {
        Product::display_name(self)
    }
}

impl AggregatePickerResult for Customer {
    fn id(&self) -> String {
        self.to_string_id()
    }

    /// Кандидат поиска показывается вместе с カナ
    fn display_name(&self) -> String {
        self.candidate_label()
    }
}
