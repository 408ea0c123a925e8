/// Popup state machine: pre-fill from the active tab, validate, ask, settle
use crate::ask::{AskRequest, AskResponse, ASK_LABEL, BUSY_LABEL, FAILURE_MESSAGE, LOADING_MESSAGE};
use crate::error::PopupError;
use crate::video_id::video_id_from_watch_page;
use log::{debug, error, info, warn};
use std::cell::RefCell;

/// Source of the active tab's URL
#[allow(async_fn_in_trait)]
pub trait TabProvider {
    async fn active_tab_url(&self) -> Result<Option<String>, PopupError>;
}

/// Something that can answer a question about a video
#[allow(async_fn_in_trait)]
pub trait AskBackend {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, PopupError>;
}

/// `Success` and `Error` are settled states: like `Idle`, they accept a new ask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

impl PopupState {
    pub fn is_busy(self) -> bool {
        self == PopupState::Loading
    }

    /// Ready for the next ask
    pub fn is_idle(self) -> bool {
        !self.is_busy()
    }
}

/// Everything the popup renders
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PopupView {
    pub video_id: String,
    pub question: String,
    pub state: PopupState,
    pub message: String,
}

impl PopupView {
    pub fn action_enabled(&self) -> bool {
        self.state.is_idle()
    }

    pub fn action_label(&self) -> &'static str {
        if self.state.is_busy() { BUSY_LABEL } else { ASK_LABEL }
    }
}

/// What a single `ask` call did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AskOutcome {
    /// A request was already in flight.
    Ignored,
    /// Validation failed; nothing was sent.
    Rejected,
    Answered,
    Failed,
}

pub struct PopupController<B> {
    backend: B,
    view: RefCell<PopupView>,
    listener: Box<dyn Fn(PopupView)>,
}

impl<B: AskBackend> PopupController<B> {
    /// `listener` receives a snapshot after every change
    pub fn new(backend: B, listener: impl Fn(PopupView) + 'static) -> Self {
        PopupController {
            backend,
            view: RefCell::new(PopupView::default()),
            listener: Box::new(listener),
        }
    }

    pub fn view(&self) -> PopupView {
        self.view.borrow().clone()
    }

    pub fn set_video_id(&self, video_id: String) {
        self.update(|view| view.video_id = video_id);
    }

    pub fn set_question(&self, question: String) {
        self.update(|view| view.question = question);
    }

    /// Fill the identifier field from the active tab when it is a watch page.
    /// Anything typed before the lookup finishes is kept.
    pub async fn prefill_from<T: TabProvider>(&self, tabs: &T) {
        let url = match tabs.active_tab_url().await {
            Ok(Some(url)) => url,
            Ok(None) => {
                debug!("No active tab URL to pre-fill from");
                return;
            }
            Err(e) => {
                warn!("Could not read the active tab: {}", e);
                return;
            }
        };

        let Some(video_id) = video_id_from_watch_page(&url) else {
            debug!("Active tab is not a watch page: {}", url);
            return;
        };

        if !self.view.borrow().video_id.trim().is_empty() {
            debug!("Identifier already entered, not pre-filling {}", video_id);
            return;
        }

        info!("Pre-filled video id {}", video_id);
        self.set_video_id(video_id);
    }

    /// Send the current inputs to the backend and render the result
    pub async fn ask(&self) -> AskOutcome {
        if self.view.borrow().state.is_busy() {
            debug!("Ask ignored: a request is already in flight");
            return AskOutcome::Ignored;
        }

        let request = {
            let view = self.view.borrow();
            AskRequest::from_inputs(&view.video_id, &view.question)
        };

        let request = match request {
            Ok(request) => request,
            Err(e) => {
                debug!("Ask rejected: {}", e);
                self.update(|view| {
                    view.state = PopupState::Idle;
                    view.message = e.to_string();
                });
                return AskOutcome::Rejected;
            }
        };

        self.update(|view| {
            view.state = PopupState::Loading;
            view.message = LOADING_MESSAGE.to_string();
        });
        let _settle = SettleGuard { controller: self };

        info!("Asking about video {}", request.video_id);

        match self.backend.ask(&request).await {
            Ok(response) => {
                self.update(|view| {
                    view.state = PopupState::Success;
                    view.message = response.answer;
                });
                AskOutcome::Answered
            }
            Err(e) => {
                error!("Ask for video {} failed: {}", request.video_id, e);
                self.update(|view| {
                    view.state = PopupState::Error;
                    view.message = FAILURE_MESSAGE.to_string();
                });
                AskOutcome::Failed
            }
        }
    }

    fn update(&self, apply: impl FnOnce(&mut PopupView)) {
        let snapshot = {
            let mut view = self.view.borrow_mut();
            apply(&mut view);
            view.clone()
        };
        (self.listener)(snapshot);
    }
}

/// Re-enables the action control however the request ends, including when
/// the in-flight future is dropped.
struct SettleGuard<'a, B: AskBackend> {
    controller: &'a PopupController<B>,
}

impl<B: AskBackend> Drop for SettleGuard<'_, B> {
    fn drop(&mut self) {
        let still_loading = self.controller.view.borrow().state.is_busy();
        if still_loading {
            warn!("Ask settled without a result");
            self.controller.update(|view| {
                view.state = PopupState::Idle;
                view.message.clear();
            });
        }
    }
}
