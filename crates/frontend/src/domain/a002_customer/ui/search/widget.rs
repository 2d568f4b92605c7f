use crate::domain::a003_quotation::ui::form::QuotationFormViewModel;
use crate::shared::picker_aggregate::AggregatePickerResult;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Задержка скрытия кандидатов после blur (мс)
const BLUR_HIDE_DELAY_MS: u32 = 200;

/// Поиск клиента с выпадающим списком кандидатов
///
/// Выбор кандидата заполняет `customer_id` и `company_name` и запускает
/// автозаполнение условий оплаты.
#[component]
pub fn CustomerSearch() -> impl IntoView {
    let vm = use_context::<QuotationFormViewModel>().expect("QuotationFormViewModel not found");

    let on_blur = move |_: leptos::ev::FocusEvent| {
        spawn_local(async move {
            TimeoutFuture::new(BLUR_HIDE_DELAY_MS).await;
            vm.close_candidates();
        });
    };

    view! {
        <div class="mb-3 position-relative">
            <label for="customer_search" class="form-label">"顧客検索"</label>
            <input
                type="text"
                id="customer_search"
                class="form-control"
                autocomplete="off"
                placeholder="顧客名またはカナで検索"
                prop:value=move || vm.customer_search.get()
                on:input=move |ev| vm.on_customer_search_input(event_target_value(&ev))
                on:blur=on_blur
            />
            <input
                type="hidden"
                id="customer_id"
                name="customer_id"
                prop:value=move || vm.values.with(|v| v.customer_id.clone())
            />
            <div id="customer_candidates" class="list-group position-absolute w-100">
                {move || {
                    if !vm.candidates_open.get() {
                        return ().into_any();
                    }
                    let candidates = vm.candidates();
                    log::debug!("customer candidates: {}", candidates.len());
                    candidates
                        .into_iter()
                        .map(|customer| {
                            let label = customer.display_name();
                            let customer_id = customer.id();
                            view! {
                                <button
                                    type="button"
                                    class="list-group-item list-group-item-action"
                                    data-customer-id=customer_id
                                    on:click=move |_| vm.select_customer(&customer)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </div>

        <div class="mb-3">
            <label for="company_name" class="form-label">"宛先企業名"</label>
            <input
                type="text"
                id="company_name"
                name="company_name"
                class="form-control"
                required=true
                prop:value=move || vm.values.with(|v| v.company_name.clone())
                on:input=move |ev| vm.on_company_name_input(event_target_value(&ev))
            />
        </div>
    }
}
