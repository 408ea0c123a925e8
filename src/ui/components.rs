/// Reusable UI components

use crate::controller::PopupState;
use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FieldProps {
    pub label: AttrValue,
    pub children: Children,
}

#[function_component(Field)]
pub fn field(props: &FieldProps) -> Html {
    html! {
        <div class="field">
            <label class="field-label">{props.label.to_string()}</label>
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct AnswerPanelProps {
    pub state: PopupState,
    pub message: AttrValue,
}

/// Answer area: spinner while loading, alert on failure, text otherwise
#[function_component(AnswerPanel)]
pub fn answer_panel(props: &AnswerPanelProps) -> Html {
    if props.message.is_empty() && !props.state.is_busy() {
        return html! {};
    }

    match props.state {
        PopupState::Loading => html! {
            <div class="loading-text-center">
                <Spinner />
                <p class="loading-text">{props.message.to_string()}</p>
            </div>
        },
        PopupState::Error => html! {
            <div class="message-top-margin">
                <Alert r#type={AlertType::Danger} title={"Error"} inline={true}>
                    {props.message.to_string()}
                </Alert>
            </div>
        },
        PopupState::Success => html! {
            <div class="answer-box">
                <p class="answer-text">{props.message.to_string()}</p>
            </div>
        },
        PopupState::Idle => html! {
            <p class="validation-text">{props.message.to_string()}</p>
        },
    }
}
