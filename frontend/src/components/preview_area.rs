use super::super::{FileData, Model, Msg};
use super::utils::debounce;
use shared::ImageBlob;
use yew::prelude::*;

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(file_data) = &model.selected else {
        return html! {};
    };

    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            { render_selected_image_preview(ctx, file_data) }
            <div class="button-container">
                <button
                    id="predict-btn"
                    class="analyze-btn"
                    style="background-color: var(--primary-color);"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Predict)
                    })}
                    disabled={!model.surface.submit_enabled}
                >
                    { render_predict_button_content(model, file_data) }
                </button>
            </div>
        </div>
    }
}

fn render_selected_image_preview(ctx: &Context<Model>, file_data: &FileData) -> Html {
    let name = file_data.image.name();

    html! {
        <div class="image-preview" title={format!("Selected for analysis: {}", name)}>
            <img id="actual-image-preview"
                src={file_data.preview_url.to_string()}
                alt={name.clone()} />
            <button
                class="remove-btn"
                title="Remove this image"
                onclick={ctx.link().callback(|e: MouseEvent| {
                    e.stop_propagation();
                    Msg::RemoveImage
                })}
            >
                <i class="fa-solid fa-times"></i>
            </button>
        </div>
    }
}

fn render_predict_button_content(model: &Model, file_data: &FileData) -> Html {
    if model.surface.loading {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
    } else {
        let filename = file_data.image.name();

        let display_name = if filename.chars().count() > 20 {
            format!("{}...", filename.chars().take(17).collect::<String>())
        } else {
            filename
        };

        html! { <><i class="fa-solid fa-magnifying-glass"></i>{ format!(" Analyze \"{}\"", display_name) }</> }
    }
}
