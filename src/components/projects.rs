//! Project listing rendered from the static catalog.

use leptos::mount::UnmountHandle;
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::config::{CTA_LABEL, PROJECTS_HEADING, classes, pages, selectors};
use crate::models::ContentItem;

/// One project: icon and title, description, and a sign-up link.
#[component]
pub fn ProjectCard(item: ContentItem) -> impl IntoView {
    view! {
        <article class={classes::PROJECT_CARD}>
            <h3>{format!("{} {}", item.icon, item.title)}</h3>
            <p>{item.description}</p>
            <a href={pages::SIGNUP} class={classes::CTA}>{CTA_LABEL}</a>
        </article>
    }
}

/// Heading plus a grid of project cards.
#[component]
pub fn ProjectGrid(items: Vec<ContentItem>) -> impl IntoView {
    view! {
        <h2>{PROJECTS_HEADING}</h2>
        <div class={classes::PROJECTS_GRID}>
            {items
                .into_iter()
                .map(|item| view! { <ProjectCard item=item /> })
                .collect_view()}
        </div>
    }
}

/// Mounted listing. Dropping it unmounts the grid and disposes its owner.
pub type ListingHandle = UnmountHandle<AnyViewState>;

/// Replace the listing section's contents with the project grid.
///
/// Returns `None` when the page has no listing section. Drop the previous
/// handle before rendering again.
pub fn render_projects(document: &Document, items: &[ContentItem]) -> Option<ListingHandle> {
    let section = document.get_element_by_id(selectors::PROJECTS_SECTION)?;
    section.set_inner_html("");

    let items = items.to_vec();
    Some(mount_to(section.unchecked_into::<HtmlElement>(), move || {
        view! { <ProjectGrid items=items /> }.into_any()
    }))
}
