//! Markdown rendering for mechanic notes.
//!
//! Metadata lines end in two spaces so markdown renders them as hard line
//! breaks.

use crate::models::{Flavor, Selection};

/// Render the markdown body for a note.
///
/// Example output for the standard flavor (truncated):
/// ```text
/// # Invert Gravity Roguelike
///
/// **Date:** 2024-01-15
/// **Theme:** neon dungeon
/// **Genre:** roguelike
///
/// ## Core mechanic
/// ...
/// ```
///
/// The body never has leading or trailing whitespace beyond a single final
/// newline.
pub fn render_body(flavor: Flavor, title: &str, date: &str, selection: &Selection) -> String {
    let body = match flavor {
        Flavor::Standard => render_standard(title, date, selection),
        Flavor::Js => render_js(title, date, selection),
        Flavor::Go => render_go(title, date, selection),
    };
    finish(&body)
}

fn finish(body: &str) -> String {
    format!("{}\n", body.trim())
}

fn render_standard(title: &str, date: &str, s: &Selection) -> String {
    let note_bullet = s
        .note
        .map(|note| format!("- {}\n", note))
        .unwrap_or_default();

    format!(
        "# {title}\n\
         \n\
         **Date:** {date}  \n\
         **Theme:** {theme}  \n\
         **Genre:** {genre}\n\
         \n\
         ## Core mechanic\n\
         \n\
         The player can **{action}** in a **{genre}** set in a **{theme}**.\n\
         \n\
         ## Constraint\n\
         \n\
         Design around this constraint: **{constraint}**.\n\
         \n\
         ## AI twist\n\
         \n\
         Integrate AI in a lightweight way: **{twist}**.\n\
         \n\
         ## Implementation sketch\n\
         \n\
         - Represent game state as a simple data structure (no engine magic).\n\
         - Add a small API surface for the AI to inspect state and suggest actions.\n\
         {note_bullet}\
         - Start with a debug CLI prototype before wiring into any UI or engine.\n\
         \n\
         ## Notes for future you\n\
         \n\
         - How could this work as a 5-minute game jam prototype?\n\
         - What would be the *fun breakpoint* to test first?\n\
         - Is the AI making things more readable or more chaotic?\n",
        theme = s.theme,
        genre = s.genre,
        action = s.action,
        constraint = s.constraint,
        twist = s.twist,
    )
}

fn render_js(title: &str, date: &str, s: &Selection) -> String {
    format!(
        "# {title}\n\
         \n\
         **Date:** {date}  \n\
         **Engine idea:** JS / browser / canvas\n\
         \n\
         ## Sketch\n\
         \n\
         - Theme: {theme}\n\
         - Core action: **{action}**\n\
         - Constraint: **{constraint}**\n\
         - AI twist: **{twist}**\n\
         \n\
         ### JS prototype thoughts\n\
         \n\
         - Start with a minimal canvas loop.\n\
         - Represent entities as plain objects, keep systems small.\n\
         - Log a few key events to localStorage to simulate “learning”.\n",
        theme = s.theme,
        action = s.action,
        constraint = s.constraint,
        twist = s.twist,
    )
}

fn render_go(title: &str, date: &str, s: &Selection) -> String {
    format!(
        "# {title}\n\
         \n\
         **Date:** {date}  \n\
         **Go prototype**\n\
         \n\
         ## Setup\n\
         \n\
         - Theme: {theme}\n\
         - Genre: {genre}\n\
         \n\
         ## Mechanic\n\
         \n\
         - Core: {action}\n\
         - Constraint: {constraint}\n\
         - AI twist: {twist}\n\
         \n\
         ### Go notes\n\
         \n\
         - Treat the game loop as a pure tick() function: state -> state.\n\
         - Consider a simple bot that calls tick() with its own actions for testing.\n",
        theme = s.theme,
        genre = s.genre,
        action = s.action,
        constraint = s.constraint,
        twist = s.twist,
    )
}
