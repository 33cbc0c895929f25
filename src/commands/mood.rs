use anyhow::Result;
use chrono::NaiveDate;
use diary_core::{Mood, NoteStore, display_date};
use owo_colors::OwoColorize;

pub fn run(store: &NoteStore, date: NaiveDate, mood: Option<Mood>, clear: bool) -> Result<()> {
    let label = display_date(date);

    if clear {
        store.set_mood(date, None)?;
        println!("{}", format!("Cleared mood for {}", label).green());
        return Ok(());
    }

    match mood {
        Some(mood) => {
            store.set_mood(date, Some(mood))?;
            println!("{}", format!("{}: {}", label, mood).green());
        }
        None => match store.moods().get(date)? {
            Some(current) => println!("{}: {}", label, current),
            None => {
                println!("{}", format!("No mood set for {}", label).dimmed());
                let keys: Vec<_> = Mood::ALL
                    .iter()
                    .map(|m| format!("{} {}", m.emoji(), m.key()))
                    .collect();
                println!("{}", format!("Available: {}", keys.join(", ")).dimmed());
            }
        },
    }

    Ok(())
}
