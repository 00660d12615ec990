//! Prompt box for the AI image endpoint.
//!
//! One request in flight at a time from this panel, guarded by the busy
//! flag on the button. Success hands the generated image to the host as a
//! `data:` URL; the permanent cloud copy, when the server made one, is only
//! surfaced as a toast.

use web_sys::HtmlTextAreaElement;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::helpers::show_toast;
use common::requests::GenerateImageResponse;

pub enum Msg {
    UpdatePrompt(String),
    Generate,
    Generated(Result<GenerateImageResponse, String>),
}

#[derive(Properties, PartialEq, Clone)]
pub struct AiGenerateProps {
    /// Receives the generated image as a `data:` URL.
    pub on_generated: Callback<String>,
}

pub struct AiGenerateComponent {
    prompt: String,
    busy: bool,
}

impl Component for AiGenerateComponent {
    type Message = Msg;
    type Properties = AiGenerateProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            prompt: String::new(),
            busy: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdatePrompt(prompt) => {
                self.prompt = prompt;
                true
            }
            Msg::Generate => {
                if self.busy {
                    return false;
                }
                let prompt = self.prompt.trim().to_string();
                if prompt.is_empty() {
                    show_toast("Describe the meme you want first.");
                    return false;
                }
                self.busy = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Generated(api::generate_image(&prompt).await));
                });
                true
            }
            Msg::Generated(result) => {
                self.busy = false;
                match result {
                    Ok(response) => {
                        if let Some(cloud_url) = &response.cloud_url {
                            show_toast(&format!("Saved a permanent copy at {}", cloud_url));
                        }
                        ctx.props().on_generated.emit(response.image);
                    }
                    Err(message) => show_toast(&message),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="ai-generate">
                <textarea
                    class="prompt-input"
                    placeholder="Describe the meme image you want..."
                    value={self.prompt.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        Msg::UpdatePrompt(input.value())
                    })}
                    rows={3}
                />
                <button
                    class="generate-btn"
                    disabled={self.busy}
                    onclick={link.callback(|_| Msg::Generate)}
                >
                    { if self.busy { "Generating..." } else { "Generate with AI" } }
                </button>
            </div>
        }
    }
}
