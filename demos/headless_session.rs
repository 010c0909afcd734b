//! Demo driving a full filter session without a browser
//!
//! This example builds the listing page in memory, mounts the controller and
//! replays a typical session: restoring the term from a shared URL, typing
//! with the debounce, clicking a tag trigger and clearing.
//!
//! Run with:
//! ```bash
//! cargo run --example headless_session
//! ```

use std::time::{Duration, Instant};

use siftr::config::ControllerConfig;
use siftr::controller::{FilterController, PageEvent};
use siftr::filter::HIDDEN_CLASS;
use siftr::page::{Document, Element, ElementId};
use siftr::SiftrError;
use url::Url;

fn listing_item(username: &str, repo: &str, description: &str, tags: &str) -> Element {
    Element::new("div")
        .with_class("plugin")
        .with_attr("data-username", username)
        .with_attr("data-repo", repo)
        .with_attr("data-desc", description)
        .with_attr("data-tags", tags)
}

fn build_page(location: &str) -> Document {
    let mut doc = Document::new(Url::parse(location).expect("demo location should parse"));

    doc.append(Element::new("input").with_id("search"));
    doc.append(Element::new("button").with_id("search_clear"));

    doc.append(listing_item("alice", "FancyTree", "A file tree explorer", "ui,tree"));
    doc.append(listing_item("bob", "grepper", "Fast project-wide search", "search,cli"));
    doc.append(listing_item("carol", "Notely", "Markdown note taking", "notes,markdown"));

    doc.append(Element::new("span").with_class("tag").with_attr("data-id", "cli"));
    doc.append(Element::new("span").with_class("tag").with_attr("data-id", "ui"));

    let container = doc.append(Element::new("div").with_id("sort_links"));
    doc.append_to(container, Element::new("a").with_attr("href", "/?sort=stars"));
    doc.append_to(container, Element::new("a").with_attr("href", "/?sort=new"));

    doc
}

fn find_trigger(doc: &Document, controller: &FilterController, id: &str) -> ElementId {
    controller
        .tag_triggers()
        .iter()
        .copied()
        .find(|&el| doc.element(el).data("id") == Some(id))
        .expect("demo page should have the tag trigger")
}

fn print_state(doc: &Document, controller: &FilterController) {
    println!("  location: {}", doc.location());
    println!("  input:    {:?}", controller.term(doc));
    for item in controller.filter().items() {
        let el = doc.element(item.element);
        if !el.has_class(HIDDEN_CLASS) {
            println!(
                "  visible:  {}/{} - {}",
                el.data("username").unwrap_or("?"),
                el.data("repo").unwrap_or("?"),
                el.data("desc").unwrap_or("")
            );
        }
    }
}

fn main() -> Result<(), SiftrError> {
    println!("=== Siftr Headless Session Demo ===\n");

    // A visitor opens a shared link that already carries a tag search
    let mut doc = build_page("https://plugins.example/?search=tag:cli");
    let mut controller = FilterController::mount(&mut doc, &ControllerConfig::default())?;

    println!("Mounted, term restored from the URL:");
    print_state(&doc, &controller);

    // Typing schedules a debounced run; polling at the deadline fires it
    println!("\nTyping \"tree\"...");
    let now = Instant::now();
    controller.dispatch(&mut doc, PageEvent::InputChanged("tree".to_string()), now)?;
    let deadline = controller.next_deadline().expect("a run should be pending");
    controller.poll(&mut doc, deadline)?;
    print_state(&doc, &controller);

    println!("\nClicking the \"ui\" tag...");
    let trigger = find_trigger(&doc, &controller, "ui");
    controller.dispatch(
        &mut doc,
        PageEvent::TagClicked(trigger),
        deadline + Duration::from_millis(400),
    )?;
    print_state(&doc, &controller);

    println!("\nClearing the search...");
    controller.dispatch(
        &mut doc,
        PageEvent::ClearClicked,
        deadline + Duration::from_millis(800),
    )?;
    print_state(&doc, &controller);

    println!("\nHistory recorded {} location changes", doc.history().len());
    Ok(())
}
