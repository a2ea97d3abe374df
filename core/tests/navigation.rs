mod common;

use common::{registry, section, ManualClock, StackedPage};
use folio_core::{
    ActivationState, Navigator, ReferencePoint, ScrollSpy, SyncOutcome, DEFAULT_SETTLE_DELAY_MS,
};

fn navigator(clock: &ManualClock) -> Navigator<ManualClock> {
    let spy = ScrollSpy::new(registry(), ReferencePoint::default());
    Navigator::new(spy, clock.clone(), DEFAULT_SETTLE_DELAY_MS)
}

#[test]
fn initial_sync_at_top_selects_hero() {
    let clock = ManualClock::default();
    let nav = navigator(&clock);
    let page = StackedPage::new(1000.0);

    assert_eq!(nav.store().active(), section("hero"));
    assert_eq!(nav.sync(&page), SyncOutcome::Unchanged);
    assert_eq!(nav.store().active(), section("hero"));
}

#[test]
fn center_at_1250_selects_about() {
    let clock = ManualClock::default();
    let nav = navigator(&clock);
    let page = StackedPage::new(1000.0);

    page.center_on(1250.0);
    assert_eq!(nav.sync(&page), SyncOutcome::Activated(section("about")));
}

#[test]
fn scrolling_past_the_page_keeps_last_section() {
    let clock = ManualClock::default();
    let nav = navigator(&clock);
    let page = StackedPage::new(1000.0);

    page.center_on(3300.0);
    nav.sync(&page);
    assert_eq!(nav.store().active(), section("contact"));

    page.center_on(3900.0);
    assert_eq!(nav.sync(&page), SyncOutcome::NoMatch);
    assert_eq!(nav.store().active(), section("contact"));
}

#[test]
fn unmounted_sections_are_skipped_during_sync() {
    let clock = ManualClock::default();
    let nav = navigator(&clock);
    let page = StackedPage::new(1000.0);
    page.unmount("about");

    page.center_on(1250.0);
    assert_eq!(nav.sync(&page), SyncOutcome::NoMatch);
    page.center_on(1700.0);
    assert_eq!(nav.sync(&page), SyncOutcome::Activated(section("tech")));
}

#[test]
fn click_contact_while_tech_active_holds_through_animation() {
    let clock = ManualClock::default();
    let nav = navigator(&clock);
    let page = StackedPage::new(1000.0);

    page.center_on(1700.0);
    nav.sync(&page);
    assert_eq!(nav.store().active(), section("tech"));

    nav.navigate(&section("contact")).unwrap();
    assert_eq!(nav.store().active(), section("contact"));
    assert!(nav.is_guarded());

    // mid-animation, geometrically over projects
    clock.advance_to(100);
    page.center_on(2400.0);
    assert_eq!(nav.sync(&page), SyncOutcome::Suppressed(section("projects")));
    assert_eq!(nav.store().active(), section("contact"));

    clock.advance_to(600);
    assert!(!nav.is_guarded());
    assert_eq!(nav.sync(&page), SyncOutcome::Activated(section("projects")));
}

#[test]
fn every_click_highlights_its_target_immediately() {
    let clock = ManualClock::default();
    let nav = navigator(&clock);
    let page = StackedPage::new(1000.0);

    for (step, name) in ["projects", "about", "contact", "hero", "tech"].iter().enumerate() {
        clock.advance_to(step as u64 * 120);
        nav.navigate(&section(name)).unwrap();
        assert_eq!(nav.store().active(), section(name));
        page.center_on(50.0);
        nav.sync(&page);
        assert_eq!(nav.store().active(), section(name));
    }
}

#[test]
fn second_click_restarts_the_settle_timer() {
    let clock = ManualClock::default();
    let nav = navigator(&clock);

    nav.navigate(&section("about")).unwrap();
    clock.advance_to(200);
    nav.navigate(&section("tech")).unwrap();
    assert_eq!(clock.pending(), 1);

    clock.advance_to(600);
    assert!(nav.is_guarded());

    clock.advance_to(700);
    assert!(!nav.is_guarded());
    assert_eq!(clock.pending(), 0);
}

#[test]
fn guard_changes_reach_subscribers() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let clock = ManualClock::default();
    let nav = navigator(&clock);
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_for_sub = log.clone();
    let _subscription = nav.store().subscribe(Rc::new(move |state: &ActivationState| {
        log_for_sub
            .borrow_mut()
            .push((state.active.to_string(), state.guarded));
    }));

    nav.navigate(&section("contact")).unwrap();
    clock.advance(DEFAULT_SETTLE_DELAY_MS as u64);

    assert_eq!(
        *log.borrow(),
        [
            ("hero".to_string(), true),
            ("contact".to_string(), true),
            ("contact".to_string(), false),
        ]
    );
}

#[test]
fn teardown_cancels_the_settle_timer() {
    let clock = ManualClock::default();
    let nav = navigator(&clock);

    nav.navigate(&section("about")).unwrap();
    nav.teardown();
    assert_eq!(clock.pending(), 0);
    assert!(!nav.is_guarded());
}

#[test]
fn scroll_handler_reference_uses_fixed_offset() {
    let clock = ManualClock::default();
    let spy = ScrollSpy::new(registry(), ReferencePoint::scroll_handler());
    let nav = Navigator::new(spy, clock.clone(), DEFAULT_SETTLE_DELAY_MS);
    let page = StackedPage::new(1000.0);

    // line at absolute 550 + 300 = 850
    page.scroll_to(550.0);
    assert_eq!(nav.sync(&page), SyncOutcome::Activated(section("about")));
}
