//! Static HTML snapshot of a gallery view.
//!
//! Renders one complete page for the current session state: the filter
//! panel on the left, the result count and card grid on the right. The
//! theme is applied as a class on `<html>`, matching the `:root.dark`
//! selectors emitted by [`config::generate_color_css`].
//!
//! ## Page Structure
//!
//! ```text
//! header.site-header        title + active theme
//! div.gallery-layout
//! ├── aside.filter-panel    clear control, categories, tag preview
//! └── main.results          summary, card grid (or empty message), load more
//! ```
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating;
//! every interpolated dataset value is escaped.

use crate::config::{self, GalleryConfig};
use crate::facets::{self, Facets};
use crate::theme::Theme;
use crate::types::{ArtworkItem, FilterSelection};
use crate::view::{self, View};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const CSS_STATIC: &str = include_str!("../static/gallery.css");

/// Page title and header text.
const SITE_TITLE: &str = "Portfolio";

/// Everything that varies between two renders of the gallery.
#[derive(Debug, Clone, Copy)]
pub struct PageState<'a> {
    pub view: &'a View<'a>,
    pub selection: &'a FilterSelection,
    /// Facets of the whole catalog, not of the current results.
    pub facets: &'a Facets,
    pub catalog_total: usize,
    /// Whether the tag list is expanded past the preview.
    pub show_all_tags: bool,
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, css: &str, theme: Theme, content: Markup) -> Markup {
    let root_class = (theme == Theme::Dark).then_some("dark");
    html! {
        (DOCTYPE)
        html lang="en" class=[root_class] {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn site_header(theme: Theme) -> Markup {
    html! {
        header.site-header {
            h1 { (SITE_TITLE) }
            span.theme-label { (theme.as_str()) }
        }
    }
}

/// Renders the filter panel: clear control, category list, tag preview
fn filter_panel(
    facets: &Facets,
    selection: &FilterSelection,
    tag_preview: usize,
    show_all_tags: bool,
) -> Markup {
    let visible = facets::visible_tags(&facets.tags, show_all_tags, tag_preview);
    let folded = facets.tags.len() > tag_preview;

    html! {
        aside.filter-panel {
            @if selection.has_active_filters() {
                button.clear-filters type="button" { "Clear All Filters" }
            }
            h3 { "Categories" }
            div.category-list {
                @for category in &facets.categories {
                    (facet_button(category, selection.categories.contains(category)))
                }
            }
            h3 { "Tags" }
            div.tag-list {
                @for tag in visible {
                    (facet_button(tag, selection.tags.contains(tag)))
                }
            }
            @if folded {
                button.show-all type="button" {
                    @if show_all_tags {
                        "Show Less"
                    } @else {
                        "Show All (" (facets.tags.len()) ")"
                    }
                }
            }
        }
    }
}

fn facet_button(value: &str, selected: bool) -> Markup {
    html! {
        button type="button" class=[selected.then_some("selected")]
            aria-pressed=(if selected { "true" } else { "false" }) {
            (value)
        }
    }
}

/// Renders one artwork card. `index` is its position in the filtered
/// sequence, which is where the lightbox opens.
fn artwork_card(index: usize, item: &ArtworkItem) -> Markup {
    html! {
        figure.card data-index=(index) data-id=(item.id) {
            img src=(item.image_path) alt=(item.title) loading="lazy"
                width=[item.width] height=[item.height];
            figcaption.card-body {
                h2.card-title { (item.title) }
                p.card-category { (item.category) }
            }
        }
    }
}

fn results(view: &View<'_>, catalog_total: usize) -> Markup {
    html! {
        main.results {
            p.result-summary { (view::result_summary(view.total(), catalog_total)) }
            @if view.is_empty() {
                p.empty-message { (view::EMPTY_MESSAGE) }
            } @else {
                div.card-grid {
                    @for (i, item) in view.displayed().iter().enumerate() {
                        (artwork_card(i, item))
                    }
                }
                @if view.has_more() {
                    div.load-more {
                        button type="button" { "Load More" }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Renderer
// ============================================================================

/// Renders the full gallery page for one session state
pub fn render_page(page: &PageState<'_>, config: &GalleryConfig, theme: Theme) -> Markup {
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    let content = html! {
        (site_header(theme))
        div.gallery-layout {
            (filter_panel(
                page.facets,
                page.selection,
                config.facets.tag_preview,
                page.show_all_tags,
            ))
            (results(page.view, page.catalog_total))
        }
    };

    base_document(SITE_TITLE, &css, theme, content)
}
