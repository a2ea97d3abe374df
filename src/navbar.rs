use std::rc::Rc;

use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, Node};
use yew::prelude::*;

use folio_core::{ActivationState, MenuEvent, MenuState, ThemeMode};

use crate::content::{NavItem, NAV_ITEMS, SITE_TITLE};
use crate::dom;
use crate::runtime::PageRuntime;

const MENU_OPEN_CLASS: &str = "menu-open";

#[derive(Clone, Copy, Default, PartialEq)]
struct MenuModel(MenuState);

impl Reducible for MenuModel {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: MenuEvent) -> Rc<Self> {
        let next = self.0.applied(action);
        if next == self.0 {
            return self;
        }
        Rc::new(MenuModel(next))
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct NavbarProps {
    pub(crate) runtime: PageRuntime,
    pub(crate) theme: ThemeMode,
    pub(crate) on_toggle_theme: Callback<()>,
}

#[function_component(Navbar)]
pub(crate) fn navbar(props: &NavbarProps) -> Html {
    let active = use_state(|| props.runtime.store().active());
    let menu = use_reducer_eq(MenuModel::default);
    let menu_ref = use_node_ref();
    let toggle_ref = use_node_ref();
    let menu_open = menu.0.is_open();

    {
        let active = active.clone();
        use_effect_with(props.runtime.clone(), move |runtime| {
            // navigation may have happened between render and subscribe
            active.set(runtime.store().active());
            let subscription = runtime.store().subscribe(Rc::new(move |state: &ActivationState| {
                active.set(state.active.clone());
            }));
            move || drop(subscription)
        });
    }
    use_effect_with(menu_open, move |open| {
        dom::set_body_class(MENU_OPEN_CLASS, *open);
        move || dom::set_body_class(MENU_OPEN_CLASS, false)
    });
    {
        let dispatcher = menu.dispatcher();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        use_effect_with((), move |_| {
            let mut listeners = Vec::new();
            if let Some(document) = web_sys::window().and_then(|window| window.document()) {
                let escape_dispatcher = dispatcher.clone();
                listeners.push(EventListener::new(&document, "keydown", move |event: &Event| {
                    let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if event.key() == "Escape" {
                        escape_dispatcher.dispatch(MenuEvent::EscapePressed);
                    }
                }));
                // pointerdown covers mouse, touch and pen with one listener
                listeners.push(EventListener::new(&document, "pointerdown", move |event: &Event| {
                    let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                        return;
                    };
                    let inside = [&menu_ref, &toggle_ref]
                        .iter()
                        .filter_map(|node_ref| node_ref.get())
                        .any(|node| node.contains(Some(&target)));
                    if !inside {
                        dispatcher.dispatch(MenuEvent::PointerDownOutside);
                    }
                }));
            }
            move || drop(listeners)
        });
    }

    let on_toggle_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_event: MouseEvent| dispatcher.dispatch(MenuEvent::Toggle))
    };
    let on_toggle_theme = {
        let on_toggle_theme = props.on_toggle_theme.clone();
        Callback::from(move |_event: MouseEvent| on_toggle_theme.emit(()))
    };
    let links: Html = NAV_ITEMS
        .iter()
        .map(|item| nav_link(item, active.as_str() == item.section, &props.runtime, &menu))
        .collect();
    let home_click = {
        let runtime = props.runtime.clone();
        let dispatcher = menu.dispatcher();
        Callback::from(move |_event: MouseEvent| {
            if let Err(err) = runtime.navigate("hero") {
                gloo::console::warn!("navigation failed:", err.to_string());
            }
            dispatcher.dispatch(MenuEvent::NavLinkClicked);
        })
    };

    html! {
        <header class="navbar">
            <a class="navbar__logo" href="#hero" onclick={home_click}>{ SITE_TITLE }</a>
            <button
                ref={toggle_ref}
                class={classes!("navbar__toggle", menu_open.then_some("is-open"))}
                aria-label="Toggle navigation"
                aria-expanded={menu_open.to_string()}
                onclick={on_toggle_menu}
            >
                <span class="navbar__bar" />
                <span class="navbar__bar" />
                <span class="navbar__bar" />
            </button>
            <nav ref={menu_ref} class={classes!("navbar__menu", menu_open.then_some("is-open"))}>
                <ul class="navbar__links">{ links }</ul>
                <button class="navbar__theme" onclick={on_toggle_theme}>
                    { props.theme.toggle_label() }
                </button>
            </nav>
        </header>
    }
}

fn nav_link(
    item: &NavItem,
    is_active: bool,
    runtime: &PageRuntime,
    menu: &UseReducerHandle<MenuModel>,
) -> Html {
    let section = item.section;
    let onclick = {
        let runtime = runtime.clone();
        let dispatcher = menu.dispatcher();
        // default anchor navigation performs the scroll
        Callback::from(move |_event: MouseEvent| {
            if let Err(err) = runtime.navigate(section) {
                gloo::console::warn!("navigation failed:", err.to_string());
            }
            dispatcher.dispatch(MenuEvent::NavLinkClicked);
        })
    };
    html! {
        <li key={section} class={classes!("navbar__item", is_active.then_some("is-active"))}>
            <a
                href={format!("#{section}")}
                aria-current={is_active.then_some("true")}
                {onclick}
            >
                { item.label }
            </a>
            if is_active {
                <span class="navbar__indicator" />
            }
        </li>
    }
}
