use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use yew::prelude::*;

use folio_core::{Handoff, SplashDriver, SplashSequencer};

use crate::content::SITE_TITLE;
use crate::dom;
use crate::timers::{self, GlooScheduler};

const PROGRESS_TICK_MS: u32 = 50;

#[derive(Properties, PartialEq)]
pub(crate) struct SplashProps {
    pub(crate) min_ms: u32,
    pub(crate) max_wait_ms: u32,
    pub(crate) exiting: bool,
    pub(crate) on_complete: Callback<Handoff>,
}

#[function_component(SplashScreen)]
pub(crate) fn splash_screen(props: &SplashProps) -> Html {
    let progress = use_state(|| 0u8);
    {
        let progress = progress.clone();
        let on_complete = props.on_complete.clone();
        let (min_ms, max_wait_ms) = (props.min_ms, props.max_wait_ms);
        use_effect_with((), move |_| {
            let driver = Rc::new(SplashDriver::new(
                SplashSequencer::new(min_ms, max_wait_ms),
                GlooScheduler,
                Box::new(move |handoff: Handoff| {
                    if handoff.fallback_used {
                        gloo::console::warn!("load signal missing; splash released by max wait");
                    }
                    gloo::console::log!("splash handed off");
                    on_complete.emit(handoff);
                }),
            ));
            // poll first: a load that already fired will not fire again
            let already_loaded = dom::document_loaded();
            driver.start(timers::now_ms(), already_loaded);
            let load_listener = match web_sys::window() {
                Some(window) if !already_loaded => {
                    let driver = Rc::clone(&driver);
                    Some(EventListener::once(&window, "load", move |_event| {
                        driver.load_signal();
                    }))
                }
                _ => None,
            };
            let ticker = {
                let driver = Rc::clone(&driver);
                Interval::new(PROGRESS_TICK_MS, move || {
                    progress.set(driver.progress_percent(timers::now_ms()));
                })
            };
            move || {
                drop(ticker);
                drop(load_listener);
                driver.cancel();
            }
        });
    }

    let class = classes!("splash", props.exiting.then_some("splash--exiting"));
    let width = format!("width: {}%", *progress);
    html! {
        <div {class} aria-busy={(!props.exiting).to_string()}>
            <div class="splash__logo">
                <span class="splash__initial">{ SITE_TITLE.chars().next().unwrap_or('P') }</span>
            </div>
            <div class="splash__track">
                <div class="splash__bar" style={width} />
            </div>
            <p class="splash__label">{ "Loading portfolio" }</p>
        </div>
    }
}
