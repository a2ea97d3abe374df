use std::rc::Rc;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use folio_core::{
    ContactDraft, ContactError, ContactField, ContactMessage, ContactRelay, ContactSubmission,
    SubmitStatus,
};

/// No email relay is wired up; messages go to the console.
struct ConsoleRelay;

impl ContactRelay for ConsoleRelay {
    fn send(&self, message: &ContactMessage) -> Result<(), ContactError> {
        gloo::console::log!(
            "contact message from",
            message.name.as_str(),
            message.email.as_str(),
            message.message.as_str()
        );
        Ok(())
    }
}

enum FormAction {
    Edit(ContactField, String),
    Submit,
}

#[derive(Clone, Default, PartialEq)]
struct FormModel {
    draft: ContactDraft,
    submission: ContactSubmission,
}

impl Reducible for FormModel {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => next.draft.set(field, value),
            FormAction::Submit => {
                let FormModel { draft, submission } = &mut next;
                if let SubmitStatus::Failed(err) = submission.submit(draft, &ConsoleRelay) {
                    gloo::console::warn!("contact form not sent:", err.to_string());
                }
            }
        }
        Rc::new(next)
    }
}

fn control_value(event: &InputEvent) -> Option<String> {
    if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
        return Some(input.value());
    }
    event
        .target_dyn_into::<HtmlTextAreaElement>()
        .map(|area| area.value())
}

fn status_view(status: &SubmitStatus) -> Html {
    let (modifier, text) = match status {
        SubmitStatus::Idle => return html! {},
        SubmitStatus::Pending => ("pending", "Sending…".to_string()),
        SubmitStatus::Sent => ("sent", "Thanks! Your message is on its way.".to_string()),
        SubmitStatus::Failed(err) => ("failed", err.to_string()),
    };
    html! {
        <p class={classes!("contact-form__status", format!("contact-form__status--{modifier}"))} role="status">
            { text }
        </p>
    }
}

#[function_component(ContactForm)]
pub(crate) fn contact_form() -> Html {
    let model = use_reducer(FormModel::default);

    let oninput = |field: ContactField| {
        let dispatcher = model.dispatcher();
        Callback::from(move |event: InputEvent| {
            if let Some(value) = control_value(&event) {
                dispatcher.dispatch(FormAction::Edit(field, value));
            }
        })
    };
    let onsubmit = {
        let dispatcher = model.dispatcher();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };
    let value = |field: ContactField| model.draft.get(field).to_string();
    let pending = model.submission.status().is_pending();

    html! {
        <form class="contact-form" {onsubmit}>
            <input
                type="text"
                name={ContactField::Name.as_str()}
                placeholder="Your Name"
                required={true}
                value={value(ContactField::Name)}
                oninput={oninput(ContactField::Name)}
            />
            <input
                type="email"
                name={ContactField::Email.as_str()}
                placeholder="Your Email"
                required={true}
                value={value(ContactField::Email)}
                oninput={oninput(ContactField::Email)}
            />
            <textarea
                name={ContactField::Message.as_str()}
                placeholder="Your Message"
                rows="6"
                required={true}
                value={value(ContactField::Message)}
                oninput={oninput(ContactField::Message)}
            />
            <button type="submit" class="button" disabled={pending}>{ "Send Message" }</button>
            { status_view(model.submission.status()) }
        </form>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlFormElement};

    wasm_bindgen_test_configure!(run_in_browser);

    fn type_into(root: &Element, field: ContactField, text: &str) {
        let selector = format!("[name='{}']", field.as_str());
        let control = root.query_selector(&selector).unwrap().unwrap();
        match control.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.set_value(text),
            None => control.unchecked_ref::<HtmlTextAreaElement>().set_value(text),
        }
        let init = EventInit::new();
        init.set_bubbles(true);
        let event = Event::new_with_event_init_dict("input", &init).unwrap();
        control.dispatch_event(&event).unwrap();
    }

    fn control_text(root: &Element, field: ContactField) -> String {
        let selector = format!("[name='{}']", field.as_str());
        let control = root.query_selector(&selector).unwrap().unwrap();
        match control.dyn_ref::<HtmlInputElement>() {
            Some(input) => input.value(),
            None => control.unchecked_ref::<HtmlTextAreaElement>().value(),
        }
    }

    #[wasm_bindgen_test]
    fn reducer_clears_draft_after_submit() {
        let model = Rc::new(FormModel::default());
        let model = model.reduce(FormAction::Edit(ContactField::Name, "Ada".into()));
        let model = model.reduce(FormAction::Edit(ContactField::Email, "ada@example.com".into()));
        let model = model.reduce(FormAction::Edit(ContactField::Message, "Hi".into()));
        let model = model.reduce(FormAction::Submit);
        assert!(model.draft.is_empty());
        assert_eq!(model.submission.status(), &SubmitStatus::Sent);
    }

    #[wasm_bindgen_test]
    async fn submitting_resets_the_fields() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let handle = yew::Renderer::<ContactForm>::with_root(root.clone()).render();
        TimeoutFuture::new(10).await;

        type_into(&root, ContactField::Name, "Ada");
        type_into(&root, ContactField::Email, "ada@example.com");
        type_into(&root, ContactField::Message, "Let's build something.");
        TimeoutFuture::new(10).await;
        assert_eq!(control_text(&root, ContactField::Name), "Ada");

        let form = root
            .query_selector("form")
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlFormElement>()
            .unwrap();
        form.request_submit().unwrap();
        TimeoutFuture::new(10).await;

        for field in ContactField::ALL {
            assert_eq!(control_text(&root, field), "");
        }
        assert!(root
            .query_selector(".contact-form__status--sent")
            .unwrap()
            .is_some());

        handle.destroy();
        root.remove();
    }
}
