//! Local image intake.
//!
//! The file picker and drag/drop both funnel into one bytes-plus-MIME entry
//! point. Anything whose MIME type is not `image/*` is refused with a toast
//! before any bytes are read. Accepted images are handed to the host as an
//! owned `data:` URL.

use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

use crate::components::helpers::{show_toast, to_data_url};

pub enum Msg {
    OpenFileDialog,
    FilePicked(web_sys::File),
    BytesRead { mime: String, bytes: Vec<u8> },
}

#[derive(Properties, PartialEq, Clone)]
pub struct ImageUploadProps {
    /// Receives the accepted image as a `data:` URL.
    pub on_image_ready: Callback<String>,
}

pub struct ImageUploadComponent {
    file_input_ref: NodeRef,
}

impl Component for ImageUploadComponent {
    type Message = Msg;
    type Properties = ImageUploadProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            file_input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::OpenFileDialog => {
                if let Some(input) = self.file_input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
                false
            }
            Msg::FilePicked(file) => {
                let mime = file.type_();
                if !mime.starts_with("image/") {
                    show_toast("Only image files can be used as a meme base.");
                    return false;
                }
                let link = ctx.link().clone();
                spawn_local(async move {
                    match read_as_bytes(&Blob::from(file)).await {
                        Ok(bytes) => link.send_message(Msg::BytesRead { mime, bytes }),
                        Err(err) => show_toast(&format!("Could not read the file: {}", err)),
                    }
                });
                false
            }
            Msg::BytesRead { mime, bytes } => {
                ctx.props().on_image_ready.emit(to_data_url(&mime, &bytes));
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onchange = link.batch_callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            // Reset so picking the same file again still fires a change event.
            input.set_value("");
            file.map(Msg::FilePicked)
        });
        let ondrop = link.batch_callback(|e: DragEvent| {
            e.prevent_default();
            e.data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
                .map(Msg::FilePicked)
        });
        let ondragover = Callback::from(|e: DragEvent| e.prevent_default());

        html! {
            <div class="image-upload">
                <div
                    class="dropzone"
                    {ondrop}
                    {ondragover}
                    onclick={link.callback(|_| Msg::OpenFileDialog)}
                >
                    { "Drop an image here, or click to browse" }
                </div>
                <input
                    ref={self.file_input_ref.clone()}
                    type="file"
                    accept="image/*"
                    style="display:none;"
                    onchange={onchange}
                />
            </div>
        }
    }
}
