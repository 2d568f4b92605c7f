use crate::domain::a003_quotation::ui::form::QuotationFormViewModel;
use crate::shared::picker_aggregate::AggregatePickerResult;
use contracts::domain::a003_quotation::{LineItem, LineKey};
use leptos::prelude::*;

/// Табличная часть «明細»
///
/// Имена полей (`product_id[]`, `description[]`, ...): контракт с
/// серверным обработчиком формы.
#[component]
pub fn LineItemTable() -> impl IntoView {
    let vm = use_context::<QuotationFormViewModel>().expect("QuotationFormViewModel not found");

    view! {
        <div class="table-responsive">
            <table class="table table-bordered align-middle">
                <thead class="table-light">
                    <tr>
                        <th style="width:22%;">"製品"</th>
                        <th>"品名・仕様"</th>
                        <th style="width:14%;">"単価"</th>
                        <th style="width:10%;">"数量"</th>
                        <th style="width:14%;">"小計"</th>
                        <th style="width:6%;"></th>
                    </tr>
                </thead>
                <tbody id="detail-body">
                    <For
                        each=move || vm.line_keys()
                        key=|line_key| *line_key
                        children=move |line_key| view! { <LineItemRow line_key=line_key /> }
                    />
                </tbody>
                <tfoot>
                    <tr>
                        <td colspan="4" class="text-end">"合計"</td>
                        <td class="text-end">
                            <span id="grand-total">{move || vm.preview.get().grand_total}</span>
                        </td>
                        <td></td>
                    </tr>
                </tfoot>
            </table>
        </div>
        <button
            type="button"
            id="add-row-btn"
            class="btn btn-outline-primary btn-sm"
            on:click=move |_| {
                vm.add_line();
                log::debug!("line added, rows: {}", vm.lines.with_untracked(|t| t.rows().len()));
            }
        >
            "＋ 明細行追加"
        </button>
    }
}

#[component]
fn LineItemRow(line_key: LineKey) -> impl IntoView {
    let vm = use_context::<QuotationFormViewModel>().expect("QuotationFormViewModel not found");

    let row = Memo::new(move |_| {
        vm.lines
            .with(|t| t.row(line_key).cloned())
            .unwrap_or_else(|| LineItem::new(line_key))
    });
    let is_fixed = move || row.with(LineItem::is_fixed);

    let product_options = vm
        .products()
        .into_iter()
        .map(|product| {
            let value = product.id();
            let value_for_selected = value.clone();
            view! {
                <option
                    value=value
                    prop:selected=move || row.with(|r| r.product_id == value_for_selected)
                >
                    {product.display_name()}
                </option>
            }
        })
        .collect_view();

    view! {
        <tr>
            <td>
                <select
                    name="product_id[]"
                    class="form-select product-select-custom"
                    disabled=is_fixed
                    on:change=move |ev| vm.select_product(line_key, event_target_value(&ev))
                >
                    <option value="" prop:selected=move || row.with(|r| r.product_id.is_empty())>
                        "選択"
                    </option>
                    {product_options}
                </select>
                // disabled select не отправляется формой
                {move || {
                    is_fixed().then(|| {
                        view! {
                            <input
                                type="hidden"
                                name="product_id[]"
                                prop:value=move || row.with(|r| r.product_id.clone())
                            />
                        }
                    })
                }}
            </td>
            <td>
                <input
                    type="text"
                    name="description[]"
                    class="form-control"
                    readonly=is_fixed
                    placeholder=move || row.with(LineItem::description_placeholder)
                    prop:value=move || row.with(|r| r.description.clone())
                    on:input=move |ev| vm.set_description(line_key, event_target_value(&ev))
                />
                <input
                    type="hidden"
                    name="code[]"
                    prop:value=move || row.with(|r| r.code.clone())
                />
            </td>
            <td>
                <input
                    type="number"
                    name="unit_price[]"
                    class="form-control text-end"
                    min="0"
                    step="1"
                    readonly=move || row.with(LineItem::is_unit_price_readonly)
                    prop:value=move || row.with(|r| r.unit_price.clone())
                    on:input=move |ev| vm.set_unit_price(line_key, event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="number"
                    name="quantity[]"
                    class="form-control text-end"
                    min="0"
                    step="1"
                    readonly=is_fixed
                    prop:value=move || row.with(|r| r.quantity.clone())
                    on:input=move |ev| vm.set_quantity(line_key, event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="text"
                    name="subtotal[]"
                    class="form-control text-end"
                    readonly=true
                    prop:value=move || row.with(|r| r.subtotal.clone())
                />
            </td>
            <td class="text-center">
                <button
                    type="button"
                    class="btn btn-sm btn-outline-danger remove-row-btn"
                    disabled=is_fixed
                    on:click=move |_| vm.remove_line(line_key)
                >
                    "削除"
                </button>
            </td>
        </tr>
    }
}
