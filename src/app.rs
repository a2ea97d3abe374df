use gloo::timers::callback::Timeout;
use yew::prelude::*;

use folio_core::{Handoff, ViewStage};

use crate::app_config::load_site_config;
use crate::navbar::Navbar;
use crate::runtime::PageRuntime;
use crate::sections::{Footer, MainView};
use crate::splash_screen::SplashScreen;
use crate::theme;

#[function_component(App)]
pub(crate) fn app() -> Html {
    let config = use_memo((), |_| load_site_config());
    let runtime = use_memo((), {
        let config = config.clone();
        move |_| match PageRuntime::new(&config) {
            Ok(runtime) => Some(runtime),
            Err(err) => {
                gloo::console::error!("section registry rejected:", err.to_string());
                None
            }
        }
    });
    let stage = use_state(|| ViewStage::initial(config.skip_splash));
    let theme_mode = use_state(theme::load_theme_mode);

    use_effect_with(*theme_mode, |mode| {
        theme::apply_theme_mode(*mode);
        theme::persist_theme_mode(*mode);
        || ()
    });
    {
        let stage = stage.clone();
        let crossfade_ms = config.crossfade_ms;
        use_effect_with(*stage, move |current| {
            let timer = (*current == ViewStage::CrossFade).then(|| {
                Timeout::new(crossfade_ms, move || stage.set(ViewStage::Content))
            });
            move || drop(timer)
        });
    }
    {
        let runtime = runtime.clone();
        use_effect_with((), move |_| {
            move || {
                if let Some(runtime) = &*runtime {
                    runtime.teardown();
                }
            }
        });
    }

    let on_toggle_theme = {
        let theme_mode = theme_mode.clone();
        Callback::from(move |_| theme_mode.set(theme_mode.toggled()))
    };
    let on_handoff = {
        let stage = stage.clone();
        Callback::from(move |_handoff: Handoff| stage.set(stage.next()))
    };

    let Some(runtime) = (*runtime).clone() else {
        return html! {
            <div class="page page--error">
                <p>{ "This page could not be set up." }</p>
            </div>
        };
    };

    // fixed child positions keep the splash mounted through the cross-fade
    html! {
        <>
            if stage.shows_splash() {
                <SplashScreen
                    min_ms={config.splash_min_ms}
                    max_wait_ms={config.splash_max_wait_ms}
                    exiting={*stage == ViewStage::CrossFade}
                    on_complete={on_handoff}
                />
            }
            if stage.shows_content() {
                <div
                    class={classes!("content", (*stage == ViewStage::CrossFade).then_some("content--entering"))}
                >
                    <Navbar
                        runtime={runtime.clone()}
                        theme={*theme_mode}
                        {on_toggle_theme}
                    />
                    <MainView {runtime} />
                    <Footer />
                </div>
            }
        </>
    }
}
