mod api;
mod components;
mod config;
mod export;

use api::SelectedFile;
use components::handlers;
use components::header::render_header;
use components::issue_modal::render_issue_modal;
use components::preview_area::render_preview_area;
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::render_notice;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{
    ErrorView, IssueDetailView, ResultView, ServiceReply, ShareOutcome, SurfaceState,
    TransportError, UploadController,
};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

// Models
struct FileData {
    image: SelectedFile,
    preview_url: ObjectUrl,
}

enum Panel {
    Success(ResultView),
    Failure(ErrorView),
}

// Yew msg components
enum Msg {
    // File operations
    FileChosen(GlooFile),
    RemoveImage,

    // Analysis operations
    Predict,
    PredictionFinished(Result<ServiceReply, TransportError>),

    // Result actions
    DownloadReport,
    ShareResults,
    ShareFinished(ShareOutcome),
    ShowIssues,
    CloseIssues,

    // UI states
    SetNotice(Option<String>),
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
struct Model {
    controller: UploadController,
    surface: SurfaceState,
    selected: Option<FileData>,
    panel: Option<Panel>,
    issue_detail: Option<IssueDetailView>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = config::load_config();
        log::info!("Prediction endpoint: {}", config.predict_endpoint);

        let mut model = Self {
            controller: UploadController::new(config),
            surface: SurfaceState::default(),
            selected: None,
            panel: None,
            issue_detail: None,
            is_dragging: false,
            paste_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        } else {
            log::warn!("No window available, paste support disabled");
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::RemoveImage => handlers::handle_remove_image(self),

            // Analysis operations
            Msg::Predict => handlers::handle_predict(self, ctx),
            Msg::PredictionFinished(reply) => handlers::handle_prediction_finished(self, reply),

            // Result actions
            Msg::DownloadReport => handlers::handle_download_report(self),
            Msg::ShareResults => handlers::handle_share_results(self, ctx),
            Msg::ShareFinished(outcome) => handlers::handle_share_finished(self, outcome),
            Msg::ShowIssues => handlers::handle_show_issues(self),
            Msg::CloseIssues => {
                self.issue_detail = None;
                true
            }

            // UI states
            Msg::SetNotice(notice) => {
                self.surface.notice = notice;
                true
            }
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }

                <main class="main-content">
                    { render_upload_section(self, ctx) }
                    { render_preview_area(self, ctx) }
                    { render_notice(self, ctx) }
                    { render_results(self, ctx) }
                </main>

                { render_issue_modal(self, ctx) }

                <footer class="app-footer">
                    <p>{"Smart Paddy Field | Rust WASM client"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Smart Paddy Field app starting...");
    yew::Renderer::<Model>::new().render();
}
