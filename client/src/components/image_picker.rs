//! Multi-file image input that reads the selection into memory.

use leptos::prelude::*;
use rentdesk::types::ImageFile;

use crate::util::files::{ACCEPTED_IMAGE_TYPES, summarize};

#[component]
pub fn ImagePicker(files: RwSignal<Vec<ImageFile>>) -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let Some(list) = input.files() else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::files::read_file_list(&list).await {
                    Ok(picked) => {
                        error.set(None);
                        files.set(picked);
                    }
                    Err(e) => error.set(Some(e)),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    view! {
        <div class="image-picker">
            <input type="file" multiple=true accept=ACCEPTED_IMAGE_TYPES on:change=on_change/>
            <p class="image-picker__summary">{move || summarize(&files.get())}</p>
            <Show when=move || error.get().is_some()>
                <p class="field-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
