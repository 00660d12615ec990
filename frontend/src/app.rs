use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::generate::AiGenerateComponent;
use crate::components::helpers::{from_data_url, show_toast};
use crate::components::templates::TemplateBrowser;
use crate::components::upload::ImageUploadComponent;

enum Page {
    Generator,
    Templates,
}

pub enum Msg {
    ShowTemplates,
    ShowGenerator,
    SetImage(String),
    TemplateChosen(String),
    SaveToCloud,
    SaveFinished(Result<String, String>),
}

pub struct App {
    page: Page,
    selected_image: Option<String>,
    uploading: bool,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            page: Page::Generator,
            selected_image: None,
            uploading: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ShowTemplates => {
                self.page = Page::Templates;
                true
            }
            Msg::ShowGenerator => {
                self.page = Page::Generator;
                true
            }
            Msg::SetImage(url) => {
                self.selected_image = Some(url);
                true
            }
            Msg::TemplateChosen(url) => {
                self.selected_image = Some(url);
                self.page = Page::Generator;
                true
            }
            Msg::SaveToCloud => {
                if self.uploading {
                    return false;
                }
                let Some(image) = self.selected_image.clone() else {
                    return false;
                };
                // Template picks are already hosted; only local bytes upload.
                let Some((mime, bytes)) = from_data_url(&image) else {
                    show_toast("This image already lives at a shareable URL.");
                    return false;
                };
                self.uploading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let file_name = format!("meme-{}.png", Uuid::new_v4());
                    let result = api::upload_meme(&bytes, &file_name, &mime)
                        .await
                        .map(|response| response.url);
                    link.send_message(Msg::SaveFinished(result));
                });
                true
            }
            Msg::SaveFinished(result) => {
                self.uploading = false;
                match result {
                    Ok(url) => show_toast(&format!("Meme uploaded: {}", url)),
                    Err(message) => show_toast(&message),
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        match self.page {
            Page::Templates => html! {
                <TemplateBrowser
                    on_select={link.callback(Msg::TemplateChosen)}
                    on_back={link.callback(|_| Msg::ShowGenerator)}
                />
            },
            Page::Generator => {
                let can_save = self
                    .selected_image
                    .as_deref()
                    .is_some_and(|url| url.starts_with("data:"))
                    && !self.uploading;

                html! {
                    <div class="generator-page">
                        <div class="generator-header">
                            <h1>{ "MemeForge" }</h1>
                            <button class="browse-btn" onclick={link.callback(|_| Msg::ShowTemplates)}>
                                { "Browse templates" }
                            </button>
                        </div>
                        {
                            match &self.selected_image {
                                Some(url) => html! {
                                    <div class="preview">
                                        <img src={url.clone()} alt="Selected meme base" />
                                    </div>
                                },
                                None => html! {
                                    <div class="preview empty">
                                        { "Pick a template, drop an image or generate one to get started." }
                                    </div>
                                },
                            }
                        }
                        <ImageUploadComponent on_image_ready={link.callback(Msg::SetImage)} />
                        <AiGenerateComponent on_generated={link.callback(Msg::SetImage)} />
                        <button
                            class="save-btn"
                            disabled={!can_save}
                            onclick={link.callback(|_| Msg::SaveToCloud)}
                        >
                            { if self.uploading { "Uploading..." } else { "Save to cloud" } }
                        </button>
                    </div>
                }
            }
        }
    }
}
