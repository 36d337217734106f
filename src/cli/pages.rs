//! Plain-text rendering of the home, book and story pages.

use std::fmt::Write;

use anyhow::Result;

use crate::content::{ContentStore, Resource};
use crate::navigation::Route;
use crate::views::{book_detail, home_view, story_detail, HomeView};

/// Render the page a route names. Unknown books, stories and paths are errors
/// here; the views themselves only ever return `None`.
pub fn render_route(store: &ContentStore, route: &Route) -> Result<String> {
    match route {
        Route::Home(nav) => render_home(store, nav),
        Route::Book { book_id } => render_book(store, book_id),
        Route::Story { book_id, story_id } => render_story(store, book_id, story_id),
        Route::NotFound(location) => anyhow::bail!("Page not found: {}", location),
    }
}

fn render_home(store: &ContentStore, nav: &crate::navigation::NavState) -> Result<String> {
    let mut out = String::new();

    match home_view(store, nav) {
        HomeView::Books(books) => {
            if books.is_empty() {
                writeln!(out, "No books found for: {}", nav.query)?;
                return Ok(out);
            }

            writeln!(
                out,
                "{:<5} {:<20} {:<18} {:>8} {:>10}",
                "#", "BOOK", "CATEGORY", "STORIES", "RESOURCES"
            )?;
            writeln!(out, "{}", "-".repeat(65))?;

            for summary in &books {
                writeln!(
                    out,
                    "{:<5} {:<20} {:<18} {:>8} {:>10}",
                    summary.book.number,
                    truncate(&summary.book.name, 20),
                    truncate(&summary.book.category, 18),
                    summary.story_count,
                    summary.resource_count
                )?;
            }

            writeln!(out, "\nTotal: {} books", books.len())?;
        }
        HomeView::Topics(sections) => {
            if sections.is_empty() {
                writeln!(out, "No themes found")?;
                writeln!(
                    out,
                    "Try searching for something else or switch back to the Books view."
                )?;
                return Ok(out);
            }

            for section in &sections {
                writeln!(out, "{} ({})", section.theme.to_uppercase(), section.len())?;
                for entry in &section.entries {
                    writeln!(
                        out,
                        "  {} · {:<24} {}  -> {}",
                        entry.book_name,
                        entry.story.reference,
                        entry.story.title,
                        Route::Story {
                            book_id: entry.book_id.to_string(),
                            story_id: entry.story.id.clone(),
                        }
                        .to_location()
                    )?;
                }
                writeln!(out)?;
            }
        }
    }

    Ok(out)
}

fn render_book(store: &ContentStore, book_id: &str) -> Result<String> {
    let detail = book_detail(store, book_id)
        .ok_or_else(|| anyhow::anyhow!("Book not found: {}", book_id))?;
    let book = detail.book;
    let mut out = String::new();

    writeln!(out, "{} [{}]", book.name, book.category)?;
    if !book.description.is_empty() {
        writeln!(out, "{}", book.description)?;
    }
    writeln!(out)?;

    if !detail.resources.is_empty() {
        writeln!(out, "BOOK RESOURCES ({})", detail.resources.len())?;
        for resource in detail.resources {
            write_resource(&mut out, resource)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "STORIES ({})", detail.stories.len())?;
    for story in &detail.stories.available {
        writeln!(
            out,
            "  {:<24} {:<32} {} resource(s)",
            story.reference,
            truncate(&story.title, 32),
            story.resources.len()
        )?;
        if !story.themes.is_empty() {
            let tags: Vec<String> = story.themes.iter().map(|t| format!("#{}", t)).collect();
            writeln!(out, "  {:<24} {}", "", tags.join(" "))?;
        }
    }

    if !detail.stories.unavailable.is_empty() {
        writeln!(out, "\nNO RESOURCES YET ({})", detail.stories.unavailable.len())?;
        for story in &detail.stories.unavailable {
            writeln!(out, "  {:<24} {}", story.reference, story.title)?;
        }
    }

    Ok(out)
}

fn render_story(store: &ContentStore, book_id: &str, story_id: &str) -> Result<String> {
    let detail = story_detail(store, book_id, story_id)
        .ok_or_else(|| anyhow::anyhow!("Story not found: {}/{}", book_id, story_id))?;
    let story = detail.story;
    let mut out = String::new();

    writeln!(out, "{} · {}", story.reference, detail.book.category)?;
    writeln!(out, "{}", story.title)?;
    if !story.summary.is_empty() {
        writeln!(out, "{}", story.summary)?;
    }

    if !detail.themes.is_empty() {
        writeln!(out)?;
        for link in &detail.themes {
            writeln!(out, "  #{:<20} {}", link.theme, link.location)?;
        }
    }

    writeln!(out, "\nSTUDY RESOURCES ({})", story.resources.len())?;
    if detail.is_available() {
        for resource in &story.resources {
            write_resource(&mut out, resource)?;
        }
    } else {
        writeln!(out, "  No resources added for this story yet.")?;
    }

    writeln!(
        out,
        "\nBack to {}: {}",
        detail.book.name,
        Route::Book {
            book_id: detail.book.id.clone()
        }
        .to_location()
    )?;

    Ok(out)
}

fn write_resource(out: &mut String, resource: &Resource) -> std::fmt::Result {
    writeln!(out, "  [{}] {}", resource.kind, resource.title)?;
    match (&resource.author, &resource.collection) {
        (Some(author), Some(collection)) => writeln!(out, "      by {} ({})", author, collection)?,
        (Some(author), None) => writeln!(out, "      by {}", author)?,
        (None, Some(collection)) => writeln!(out, "      {}", collection)?,
        (None, None) => {}
    }
    writeln!(out, "      {}", resource.url)
}

/// Shorten to `max` characters, marking the cut with "..."
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}
