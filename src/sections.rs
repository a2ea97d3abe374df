use std::rc::Rc;

use gloo::events::EventListener;
use yew::prelude::*;

use crate::contact_form::ContactForm;
use crate::content::{
    Project, CONTACT_EMAIL, NAV_ITEMS, PROJECTS, SITE_TITLE, SKILLS, TECHNOLOGIES,
};
use crate::dom::DomGeometry;
use crate::runtime::PageRuntime;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/"),
    ("LinkedIn", "https://www.linkedin.com/"),
];

#[derive(Properties, PartialEq)]
pub(crate) struct MainViewProps {
    pub(crate) runtime: PageRuntime,
}

/// The scrolling page. Owns the scroll and resize subscriptions that keep
/// the active section in sync with what is on screen.
#[function_component(MainView)]
pub(crate) fn main_view(props: &MainViewProps) -> Html {
    use_effect_with(props.runtime.clone(), move |runtime| {
        let mut listeners = Vec::new();
        if let (Some(window), Some(geometry)) = (web_sys::window(), DomGeometry::new()) {
            let geometry = Rc::new(geometry);
            runtime.sync(geometry.as_ref());
            for event in ["scroll", "resize"] {
                let runtime = runtime.clone();
                let geometry = geometry.clone();
                listeners.push(EventListener::new(&window, event, move |_event| {
                    runtime.sync(geometry.as_ref());
                }));
            }
        } else {
            gloo::console::warn!("section tracking disabled: no document");
        }
        move || drop(listeners)
    });

    html! {
        <main class="page">
            <Hero />
            <About />
            <Tech />
            <Projects />
            <Contact />
        </main>
    }
}

#[derive(Properties, PartialEq)]
struct SectionProps {
    id: &'static str,
    #[prop_or_default]
    title: Option<&'static str>,
    children: Html,
}

#[function_component(Section)]
fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id} class={classes!("section", format!("section--{}", props.id))}>
            if let Some(title) = props.title {
                <h2 class="section__title">{ title }</h2>
            }
            { props.children.clone() }
        </section>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <Section id="hero">
            <h1 class="hero__title">{ "Hi, I build things for the web." }</h1>
            <p class="hero__lead">{ "Software developer working across the stack." }</p>
            <a class="button" href="#projects">{ "See my work" }</a>
        </Section>
    }
}

#[function_component(About)]
fn about() -> Html {
    let skills: Html = SKILLS
        .iter()
        .map(|skill| html! { <li key={*skill}>{ *skill }</li> })
        .collect();
    html! {
        <Section id="about" title={Some("About")}>
            <p>
                { "I enjoy turning rough ideas into fast, accessible interfaces and the services behind them." }
            </p>
            <ul class="about__skills">{ skills }</ul>
        </Section>
    }
}

#[function_component(Tech)]
fn tech() -> Html {
    let items: Html = TECHNOLOGIES
        .iter()
        .map(|name| html! { <li key={*name} class="tech__item">{ *name }</li> })
        .collect();
    html! {
        <Section id="tech" title={Some("Tech")}>
            <ul class="tech__grid">{ items }</ul>
        </Section>
    }
}

#[function_component(Projects)]
fn projects() -> Html {
    let cards: Html = PROJECTS.iter().map(project_card).collect();
    html! {
        <Section id="projects" title={Some("Projects")}>
            <div class="projects__grid">{ cards }</div>
        </Section>
    }
}

fn project_card(project: &Project) -> Html {
    let tags: Html = project
        .tags
        .iter()
        .map(|tag| html! { <span key={*tag} class="tag">{ *tag }</span> })
        .collect();
    html! {
        <article key={project.title} class="project">
            <h3 class="project__title">{ project.title }</h3>
            <p>{ project.summary }</p>
            <div class="project__tags">{ tags }</div>
            <a href={project.url} target="_blank" rel="noopener noreferrer">{ "View project" }</a>
        </article>
    }
}

#[function_component(Contact)]
fn contact() -> Html {
    let socials: Html = SOCIAL_LINKS
        .iter()
        .map(|(label, url)| {
            html! {
                <li key={*label}>
                    <a href={*url} target="_blank" rel="noopener noreferrer">{ *label }</a>
                </li>
            }
        })
        .collect();
    html! {
        <Section id="contact" title={Some("Get in Touch")}>
            <p>{ "Have a project in mind? Send me a message." }</p>
            <div class="contact__layout">
                <ContactForm />
                <div class="contact__info">
                    <h3>{ "Let's Connect" }</h3>
                    <a href={format!("mailto:{CONTACT_EMAIL}")}>{ CONTACT_EMAIL }</a>
                    <ul class="contact__socials">{ socials }</ul>
                </div>
            </div>
        </Section>
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[function_component(Footer)]
pub(crate) fn footer() -> Html {
    // plain anchors: footer links do not engage the navigation guard
    let quick_links: Html = NAV_ITEMS
        .iter()
        .map(|item| {
            html! {
                <li key={item.section}>
                    <a href={format!("#{}", item.section)}>{ item.label }</a>
                </li>
            }
        })
        .collect();
    html! {
        <footer class="footer">
            <nav class="footer__links" aria-label="Quick links">
                <h3>{ "Quick Links" }</h3>
                <ul>{ quick_links }</ul>
            </nav>
            <p class="footer__credits">{ "Built with Rust, Yew and WebAssembly." }</p>
            <p class="footer__copyright">
                { format!("© {} {SITE_TITLE}. All rights reserved.", current_year()) }
            </p>
        </footer>
    }
}
