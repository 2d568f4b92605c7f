use crate::domain::a003_quotation::ui::form::QuotationFormViewModel;
use leptos::prelude::*;

/// Предпросмотр трудозатрат и итогов
#[component]
pub fn QuotationPreviewPanel() -> impl IntoView {
    let vm = use_context::<QuotationFormViewModel>().expect("QuotationFormViewModel not found");
    let p = vm.preview;

    view! {
        <section class="card mb-3 quotation-preview">
            <div class="card-header">"計算プレビュー"</div>
            <div class="card-body">
                <table class="table table-sm mb-3">
                    <thead>
                        <tr>
                            <th></th>
                            <th class="text-end">"設計"</th>
                            <th class="text-end">"現地セットアップ"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr>
                            <th>"工数 (h)"</th>
                            <td class="text-end"><span id="preview-design-hours">{move || p.get().design_hours}</span></td>
                            <td class="text-end"><span id="preview-setup-hours">{move || p.get().setup_hours}</span></td>
                        </tr>
                        <tr>
                            <th>"原価"</th>
                            <td class="text-end"><span id="preview-design-cost">{move || p.get().design_cost}</span></td>
                            <td class="text-end"><span id="preview-setup-cost">{move || p.get().setup_cost}</span></td>
                        </tr>
                        <tr>
                            <th>"売価"</th>
                            <td class="text-end"><span id="preview-design-fee">{move || p.get().design_fee}</span></td>
                            <td class="text-end"><span id="preview-setup-fee">{move || p.get().setup_fee}</span></td>
                        </tr>
                        <tr>
                            <th>"利益率"</th>
                            <td class="text-end"><span id="preview-design-profit-rate">{move || p.get().design_profit_rate}</span></td>
                            <td class="text-end"><span id="preview-setup-profit-rate">{move || p.get().setup_profit_rate}</span></td>
                        </tr>
                    </tbody>
                </table>

                <dl class="row mb-0">
                    <dt class="col-6">"売価合計（値引前）"</dt>
                    <dd class="col-6 text-end"><span id="preview-total-sell">{move || p.get().total_sell}</span></dd>
                    <dt class="col-6">"原価合計"</dt>
                    <dd class="col-6 text-end"><span id="preview-total-cost">{move || p.get().total_cost}</span></dd>
                    <dt class="col-6">"最終売価"</dt>
                    <dd class="col-6 text-end"><span id="preview-final-sell">{move || p.get().final_sell}</span></dd>
                    <dt class="col-6">"最終利益率"</dt>
                    <dd class="col-6 text-end"><span id="preview-total-profit-rate">{move || p.get().total_profit_rate}</span></dd>
                </dl>
            </div>
        </section>
    }
}
