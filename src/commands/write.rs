use std::io::Read;

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Confirm;
use diary_core::feedback::PROMPT;
use diary_core::{Feedback, Mood, NoteStore, display_date};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::editor;

/// Where the new entry text comes from.
pub enum Source {
    Text(String),
    Stdin,
    Editor,
}

pub fn run(
    store: &NoteStore,
    date: NaiveDate,
    source: Source,
    mood: Option<Mood>,
    force: bool,
) -> Result<()> {
    let existing = store.load(date)?;

    let content = match source {
        Source::Text(text) => text,
        Source::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Source::Editor => {
            if existing.is_empty() {
                println!("{}", PROMPT.dimmed());
            }
            editor::edit(&existing)?
        }
    };

    if content == existing && store.contains(date) {
        if let Some(mood) = mood {
            store.set_mood(date, Some(mood))?;
            println!("{}", format!("Mood set to {}", mood).green());
        } else {
            println!("{}", "No changes".dimmed());
        }
        return Ok(());
    }

    // Clearing a written entry loses it for good, so ask first
    if content.is_empty() && !existing.is_empty() && !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Clear the entry for {}?", display_date(date)))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Nothing saved".dimmed());
            return Ok(());
        }
    }

    store.save(date, &content)?;
    if let Some(mood) = mood {
        store.set_mood(date, Some(mood))?;
    }

    println!(
        "{}",
        format!("Saved entry for {}", display_date(date)).green()
    );
    println!("{}", Feedback::for_content(&content).render());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        diary_core::parse_date(s).unwrap()
    }

    #[test]
    fn writes_text_and_mood() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::new(dir.path());

        run(
            &store,
            date("2024-01-05"),
            Source::Text("Went hiking.".into()),
            Some(Mood::Great),
            false,
        )
        .unwrap();

        let entry = store.entry(date("2024-01-05")).unwrap();
        assert_eq!(entry.content, "Went hiking.");
        assert_eq!(entry.mood, Some(Mood::Great));
    }

    #[test]
    fn unchanged_text_only_updates_mood() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::new(dir.path());
        store.save(date("2024-01-05"), "Same").unwrap();

        run(
            &store,
            date("2024-01-05"),
            Source::Text("Same".into()),
            Some(Mood::Sad),
            false,
        )
        .unwrap();

        assert_eq!(store.load(date("2024-01-05")).unwrap(), "Same");
        assert_eq!(store.moods().get(date("2024-01-05")).unwrap(), Some(Mood::Sad));
    }

    #[test]
    fn forced_empty_write_clears_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::new(dir.path());
        store.save(date("2024-01-05"), "Something").unwrap();

        run(&store, date("2024-01-05"), Source::Text(String::new()), None, true).unwrap();

        assert_eq!(store.load(date("2024-01-05")).unwrap(), "");
        assert!(store.contains(date("2024-01-05")));
    }

    #[test]
    fn empty_write_for_new_date_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = NoteStore::new(dir.path());

        run(&store, date("2024-01-05"), Source::Text(String::new()), None, false).unwrap();

        assert!(store.contains(date("2024-01-05")));
    }
}
