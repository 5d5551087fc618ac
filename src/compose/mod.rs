//! Mechanic composition: random draws, title, slug and dated filename.

mod render;

use chrono::NaiveDate;
use rand::Rng;
use unicode_normalization::UnicodeNormalization;

use crate::clock::{format_date, Clock};
use crate::models::{Flavor, MechanicDocument, Selection, Vocabulary};

pub use render::render_body;

/// Draw one phrase from every slot of `vocabulary`.
///
/// Draws happen in a fixed order (theme, genre, action, constraint, twist,
/// note) so a seeded generator always yields the same selection.
pub fn draw<R: Rng + ?Sized>(vocabulary: &Vocabulary, rng: &mut R) -> Selection {
    let theme = vocabulary.themes.pick(rng);
    let genre = vocabulary.genres.pick(rng);
    let action = vocabulary.actions.pick(rng);
    let constraint = vocabulary.constraints.pick(rng);
    let twist = vocabulary.twists.pick(rng);
    let note = vocabulary.notes.map(|notes| notes.pick(rng));

    Selection {
        theme,
        genre,
        action,
        constraint,
        twist,
        note,
    }
}

/// Compose a fresh note of the given flavor, dated by `clock`.
pub fn compose<R, C>(flavor: Flavor, rng: &mut R, clock: &C) -> MechanicDocument
where
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    let selection = draw(flavor.vocabulary(), rng);
    let document = assemble(flavor, selection, clock.today());
    tracing::debug!(
        flavor = %flavor,
        title = %document.title,
        filename = %document.filename,
        "Composed mechanic"
    );
    document
}

/// Build a document from an explicit selection and date.
pub fn assemble(flavor: Flavor, selection: Selection, date: NaiveDate) -> MechanicDocument {
    let title = title_for(selection.action, selection.genre);
    let date_str = format_date(date);
    let slug = slugify(&title);
    let filename = flavor.filename(&date_str, &slug);
    let body = render_body(flavor, &title, &date_str, &selection);

    MechanicDocument {
        flavor,
        title,
        date,
        slug,
        filename,
        selection,
        body,
    }
}

pub fn title_for(action: &str, genre: &str) -> String {
    format!("{} {}", titlecase(action), titlecase(genre))
}

/// Every filename a note of `flavor` can get on `date`, one per action and
/// genre pair.
pub fn possible_filenames(flavor: Flavor, date: &str) -> Vec<String> {
    let vocabulary = flavor.vocabulary();
    let mut filenames = Vec::new();
    for action in vocabulary.actions.entries() {
        for genre in vocabulary.genres.entries() {
            let filename = flavor.filename(date, &slugify(&title_for(action, genre)));
            if !filenames.contains(&filename) {
                filenames.push(filename);
            }
        }
    }
    filenames
}

/// Upper-case every letter that starts a word and lower-case the rest.
///
/// A word starts at the beginning of the text or after any non-letter, so
/// "real-time tactics" becomes "Real-Time Tactics".
pub fn titlecase(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for ch in text.chars() {
        if in_word {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        in_word = ch.is_alphabetic();
    }
    out
}

/// Derive a lowercase, ASCII-only, hyphen-separated identifier from `text`.
///
/// The text is NFKD-normalized and stripped of non-ASCII code points, so
/// accented letters keep their base letter. Every run of characters outside
/// `[a-zA-Z0-9]` becomes a single hyphen, and no hyphen is left at either end.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for ch in text.nfkd().filter(char::is_ascii) {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_titlecase() {
        assert_eq!(titlecase("invert gravity"), "Invert Gravity");
        assert_eq!(titlecase("real-time tactics"), "Real-Time Tactics");
        assert_eq!(titlecase("AI training arena"), "Ai Training Arena");
        assert_eq!(titlecase("co-op puzzler"), "Co-Op Puzzler");
    }

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Invert Gravity Roguelike"), "invert-gravity-roguelike");
        assert_eq!(
            slugify("Clone The Player Puzzle Game"),
            "clone-the-player-puzzle-game"
        );
    }

    #[test]
    fn test_slugify_strips_diacritics_and_trims() {
        assert_eq!(slugify("  Café Übermensch!  "), "cafe-ubermensch");
        assert_eq!(slugify("--Rock & Roll--"), "rock-roll");
        assert_eq!(slugify("ﬁnal ½ step"), "final-12-step");
        assert_eq!(slugify("日本"), "");
    }

    #[test]
    fn test_title_and_filename_example() {
        let selection = Selection {
            theme: "neon dungeon",
            genre: "roguelike",
            action: "invert gravity",
            constraint: "resources decay over time",
            twist: "enemy spawning adapts to your failure patterns",
            note: Some("Separate the simulation core from rendering so you can run experiments headless."),
        };
        let document = assemble(Flavor::Standard, selection, day());

        assert_eq!(document.title, "Invert Gravity Roguelike");
        assert_eq!(document.slug, "invert-gravity-roguelike");
        assert_eq!(document.filename, "2024-01-15-invert-gravity-roguelike.md");
    }

    #[test]
    fn test_compose_with_zero_rng_picks_first_entries() {
        let mut rng = StepRng::new(0, 0);
        let document = compose(Flavor::Standard, &mut rng, &FixedClock(day()));

        assert_eq!(document.title, "Pause Time Roguelike");
        assert_eq!(document.filename, "2024-01-15-pause-time-roguelike.md");
        assert_eq!(document.selection.theme, "cyberpunk city");
        assert_eq!(
            document.selection.note,
            Some("Prototype state transitions as a pure function so it’s easy to plug in different AI policies.")
        );
    }

    #[test]
    fn test_same_seed_same_document() {
        let clock = FixedClock(day());
        for flavor in Flavor::ALL {
            let first = compose(flavor, &mut StdRng::seed_from_u64(42), &clock);
            let second = compose(flavor, &mut StdRng::seed_from_u64(42), &clock);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_possible_filenames_cover_the_vocabulary() {
        let filenames = possible_filenames(Flavor::Standard, "2024-01-15");

        assert_eq!(filenames.len(), 36);
        assert!(filenames.contains(&"2024-01-15-invert-gravity-roguelike.md".to_string()));
        assert!(!filenames.contains(&"2024-01-15-retro.md".to_string()));
        assert!(possible_filenames(Flavor::Go, "2024-01-15")
            .iter()
            .all(|name| name.ends_with("-go-note.md")));
    }

    #[test]
    fn test_js_flavor_has_no_note() {
        let mut rng = StepRng::new(0, 0);
        let document = compose(Flavor::Js, &mut rng, &FixedClock(day()));

        assert_eq!(document.title, "Splice Enemy Behaviors Deckbuilder");
        assert_eq!(
            document.filename,
            "2024-01-15-splice-enemy-behaviors-deckbuilder-js-note.md"
        );
        assert!(document.selection.note.is_none());
    }
}
