//! Загрузка данных, встроенных сервером в страницу, и точка монтирования
//!
//! Выполняется один раз до первого рендера.

use contracts::domain::a003_quotation::QuotationPageData;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement};

/// Элемент, в который монтируется форма
pub const MOUNT_ELEMENT_ID: &str = "quotation-form-root";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Текст элемента `<script type="application/json" id=...>`; `None` если элемента нет
fn read_block(id: &str) -> Option<String> {
    let element = document()?.get_element_by_id(id)?;
    Some(element.text_content().unwrap_or_default())
}

pub fn load_page_data() -> QuotationPageData {
    let data = QuotationPageData::load(read_block);
    log::debug!("products JSON: {} items", data.products.len());
    data
}

/// Элемент для монтирования формы, если страница его предоставила
pub fn mount_element() -> Option<HtmlElement> {
    document()?
        .get_element_by_id(MOUNT_ELEMENT_ID)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Диагностика: пишет в консоль action/method каждой отправляемой формы
pub fn install_submit_logger() {
    let Some(document) = document() else {
        return;
    };

    let on_submit = Closure::wrap(Box::new(move |e: web_sys::Event| {
        if let Some(form) = e
            .target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        {
            log::info!("[submit] action={} method={}", form.action(), form.method());
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(err) = document.add_event_listener_with_callback_and_bool(
        "submit",
        on_submit.as_ref().unchecked_ref(),
        true,
    ) {
        log::warn!("failed to install submit logger: {:?}", err);
    }
    on_submit.forget();
}
