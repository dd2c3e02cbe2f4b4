use super::super::{Model, Msg, Panel};
use shared::presenter::ListSection;
use shared::{ErrorView, ResultView};
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    if model.surface.loading {
        return html! {
            <div id="loading" class="loading">
                <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                <p>{"Analyzing your paddy field..."}</p>
            </div>
        };
    }

    if !model.surface.results_visible {
        return html! {};
    }

    match &model.panel {
        Some(Panel::Success(view)) => render_success_panel(view, ctx),
        Some(Panel::Failure(view)) => render_error_panel(view),
        None => html! {},
    }
}

fn render_list_section(section: &ListSection, extra_class: Option<&'static str>) -> Html {
    html! {
        <div class={classes!("suggestion-category", extra_class)}>
            <h5><i class={classes!("fas", section.icon)}></i>{ format!(" {}:", section.title) }</h5>
            <ul>
                { for section.items.iter().map(|item| html! { <li>{ *item }</li> }) }
            </ul>
        </div>
    }
}

fn render_success_panel(view: &ResultView, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div id="result" class="results-container">
            <div class="result-item">
                <div class="result-label">{"Field Condition:"}</div>
                <div class="result-value">
                    <span class={classes!("status", view.condition.key())}>{ &view.label }</span>
                    if let Some(filename) = &view.filename {
                        <span class="analyzed-filename-display">{ format!(" ({})", filename) }</span>
                    }
                </div>
            </div>
            <div class="result-item">
                <div class="result-label">{"Confidence Level:"}</div>
                <div class="result-value">
                    <div class="confidence-bar">
                        <div class="confidence-fill" style={format!("width: {}%", view.confidence.bar_width())}></div>
                    </div>
                    <span class="confidence-text">{ view.confidence_display() }</span>
                </div>
            </div>

            <div class="result-recommendations">
                <h4><i class="fas fa-lightbulb"></i>{" Expert Recommendations:"}</h4>
                <p class="main-recommendation">{ view.headline }</p>

                <div class="detailed-suggestions">
                    { for view.sections.iter().map(|section| render_list_section(section, None)) }
                    if let Some(treatment) = &view.treatment {
                        { render_list_section(treatment, Some("treatment-needed")) }
                    }
                </div>

                <div class="next-steps">
                    <h5><i class="fas fa-arrow-right"></i>{" Next Steps:"}</h5>
                    <div class="timeline">
                        { for view.timeline.iter().map(|step| html! {
                            <div class="timeline-item">
                                <div class="timeline-marker">{ step.position.to_string() }</div>
                                <div class="timeline-content">{ step.text }</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="result-actions">
                <button class="action-btn primary" onclick={link.callback(|_| Msg::DownloadReport)}>
                    <i class="fas fa-download"></i>{" Download Report"}
                </button>
                <button class="action-btn secondary" onclick={link.callback(|_| Msg::ShareResults)}>
                    <i class="fas fa-share"></i>{" Share Results"}
                </button>
                <button class="action-btn info" onclick={link.callback(|_| Msg::ShowIssues)}>
                    <i class="fas fa-search"></i>{" View Details"}
                </button>
            </div>
        </div>
    }
}

fn render_error_panel(view: &ErrorView) -> Html {
    html! {
        <div id="result" class="results-container">
            <div class="error-message">
                <i class="fas fa-exclamation-triangle"></i>
                <h3>{ view.title }</h3>
                <p>{ view.summary }</p>
                <div class="error-details">
                    <strong>{"Error Details:"}</strong>{ format!(" {}", view.details) }
                </div>
                if let Some(hint) = view.hint {
                    <p class="error-hint">{ hint }</p>
                }
                <div class="troubleshooting">
                    <h4>{"Troubleshooting Steps:"}</h4>
                    <ul>
                        { for view.troubleshooting.iter().map(|step| html! {
                            <li><strong>{ format!("{}:", step.topic) }</strong>{ format!(" {}", step.detail) }</li>
                        }) }
                    </ul>
                </div>
            </div>
        </div>
    }
}
