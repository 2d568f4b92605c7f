use crate::domain::a003_quotation::ui::form::{QuotationForm, QuotationFormViewModel};
use contracts::domain::a003_quotation::QuotationPageData;
use leptos::prelude::*;

#[component]
pub fn App(data: QuotationPageData) -> impl IntoView {
    // ViewModel формы доступен всем виджетам через context
    provide_context(QuotationFormViewModel::new(data));

    view! {
        <QuotationForm />
    }
}
