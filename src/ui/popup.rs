/// Popup UI for Video Ask

use crate::backend::FetchBackend;
use crate::config::BackendConfig;
use crate::controller::{PopupController, PopupView};
use crate::tabs::ChromeTabs;
use crate::ui::components::{AnswerPanel, Field};
use log::debug;
use patternfly_yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(PopupView::default);

    let controller = {
        let setter = view.setter();
        use_memo((), move |_| {
            PopupController::new(FetchBackend::new(BackendConfig::default()), move |snapshot| {
                setter.set(snapshot)
            })
        })
    };

    // Pre-fill the video id from the active tab on mount
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                controller.prefill_from(&ChromeTabs).await;
            });
            || ()
        });
    }

    let on_video_id_input = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                controller.set_video_id(input.value());
            }
        })
    };

    let on_question_input = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                controller.set_question(input.value());
            }
        })
    };

    let on_ask = {
        let controller = controller.clone();
        Callback::from(move |_| {
            let controller = controller.clone();
            spawn_local(async move {
                let outcome = controller.ask().await;
                debug!("Ask finished: {:?}", outcome);
            });
        })
    };

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Video Ask"}</h1>

            <div class="flex-column-gap">
                <Field label="Video ID">
                    <input
                        id="videoId"
                        type="text"
                        class="pf-v5-c-form-control"
                        placeholder="e.g. dQw4w9WgXcQ"
                        value={view.video_id.clone()}
                        oninput={on_video_id_input}
                    />
                </Field>

                <Field label="Question">
                    <textarea
                        id="question"
                        class="pf-v5-c-form-control"
                        rows="3"
                        placeholder="Ask something about this video..."
                        value={view.question.clone()}
                        oninput={on_question_input}
                    />
                </Field>

                <Button
                    onclick={on_ask}
                    disabled={!view.action_enabled()}
                    variant={ButtonVariant::Primary}
                    block={true}
                >
                    {view.action_label()}
                </Button>
            </div>

            <AnswerPanel state={view.state} message={view.message.clone()} />

            <p class="footer-popup">
                {"Video Ask v0.1.0"}
            </p>
        </div>
    }
}
