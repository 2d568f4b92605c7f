use super::view_model::QuotationFormViewModel;
use crate::domain::a002_customer::ui::search::CustomerSearch;
use crate::domain::a003_quotation::ui::line_table::LineItemTable;
use crate::domain::a003_quotation::ui::preview::QuotationPreviewPanel;
use contracts::domain::a003_quotation::QuotationField;
use leptos::prelude::*;

/// Подпись поля шапки
pub fn field_label(field: QuotationField) -> &'static str {
    match field {
        QuotationField::ContactName => "担当者名",
        QuotationField::ProjectName => "件名",
        QuotationField::DeliveryDate => "納期",
        QuotationField::DeliveryTerms => "受渡条件",
        QuotationField::PaymentTerms => "支払条件",
        QuotationField::ValidUntil => "有効期限",
        QuotationField::EstimatorName => "見積担当者",
        QuotationField::Remarks => "備考",
        QuotationField::DistanceM => "走行距離 (m)",
        QuotationField::IntersectionCount => "交差点数",
        QuotationField::StationCount => "ステーション数",
        QuotationField::VehicleCount => "車両台数",
        QuotationField::EquipmentCount => "設備数",
        QuotationField::CircuitDifficulty => "コース難易度",
        QuotationField::DiscountRate => "値引率 (%)",
    }
}

/// Тип `<input>` для поля шапки
pub fn input_type(field: QuotationField) -> &'static str {
    match field {
        QuotationField::DeliveryDate | QuotationField::ValidUntil => "date",
        f if f.is_numeric() => "number",
        _ => "text",
    }
}

#[component]
pub fn QuotationForm() -> impl IntoView {
    let vm = use_context::<QuotationFormViewModel>().expect("QuotationFormViewModel not found");

    let header_fields = QuotationField::HEADER
        .into_iter()
        .map(|field| view! { <FieldInput field=field /> })
        .collect_view();
    let travel_fields = QuotationField::TRAVEL
        .into_iter()
        .map(|field| view! { <FieldInput field=field /> })
        .collect_view();

    view! {
        <div class="quotation-form">
            <section class="card mb-3">
                <div class="card-header">"基本情報"</div>
                <div class="card-body">
                    <CustomerSearch />
                    {header_fields}
                </div>
            </section>

            <section class="card mb-3">
                <div class="card-header">"明細"</div>
                <div class="card-body">
                    <LineItemTable />
                </div>
            </section>

            <section class="card mb-3">
                <div class="card-header">"走行条件"</div>
                <div class="card-body">
                    {travel_fields}
                </div>
            </section>

            <section class="card mb-3">
                <div class="card-header">"値引"</div>
                <div class="card-body">
                    <FieldInput field=QuotationField::DiscountRate />
                    <div class="text-end">
                        "値引額: "
                        <span id="discount-amount">{move || vm.preview.get().discount_amount}</span>
                    </div>
                </div>
            </section>

            <QuotationPreviewPanel />
        </div>
    }
}

/// Поле шапки, привязанное к `QuotationValues`
#[component]
fn FieldInput(field: QuotationField) -> impl IntoView {
    let vm = use_context::<QuotationFormViewModel>().expect("QuotationFormViewModel not found");
    let name = field.name();

    let control = if field == QuotationField::Remarks {
        view! {
            <textarea
                id=name
                name=name
                class="form-control"
                rows="3"
                prop:value=move || vm.field_value(field)
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type(field)
                id=name
                name=name
                class="form-control"
                min=field.is_numeric().then_some("0")
                step=field.is_numeric().then_some("any")
                prop:value=move || vm.field_value(field)
                on:input=move |ev| vm.set_field(field, event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <div class="mb-3">
            <label for=name class="form-label">{field_label(field)}</label>
            {control}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_types() {
        assert_eq!(input_type(QuotationField::DeliveryDate), "date");
        assert_eq!(input_type(QuotationField::ValidUntil), "date");
        assert_eq!(input_type(QuotationField::DistanceM), "number");
        assert_eq!(input_type(QuotationField::DiscountRate), "number");
        assert_eq!(input_type(QuotationField::ProjectName), "text");
    }

    #[test]
    fn test_every_field_has_label() {
        let all = QuotationField::HEADER
            .into_iter()
            .chain(QuotationField::TRAVEL)
            .chain([QuotationField::DiscountRate]);
        for field in all {
            assert!(!field_label(field).is_empty(), "{}", field.name());
        }
    }
}
