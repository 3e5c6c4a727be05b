use std::io::{self, BufRead, Write};

use anyhow::Result;
use fretwise_core::{Answer, Session, SessionStats, FRET_OPTIONS};

use crate::config::Config;

/// Interactive note-identification loop over stdin/stdout.
pub fn run_play(config: Config) -> Result<()> {
    if !FRET_OPTIONS.contains(&config.max_fret) {
        log::info!(
            "max fret {} is not one of the usual practice sizes {:?}",
            config.max_fret,
            FRET_OPTIONS
        );
    }

    let mut session = Session::new(config.max_fret, config.orientation, config.mode);
    let mut rng = rand::thread_rng();

    println!("Guitar fretboard trainer 🎸");
    println!(
        "Practicing up to fret {} ({} diagrams, {} notes).",
        config.max_fret, config.orientation, config.mode
    );
    println!("Type your answer, or 'quit' to stop.");

    let stdin = io::stdin();
    'game: loop {
        let question = session.next_question(&mut rng)?;
        let (string, fret) = (question.string, question.fret);

        println!("\nWhat note is marked with '❓' on the fretboard?\n");
        println!("{}", question.diagram);

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break 'game;
            }
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
                break 'game;
            }

            match session.submit(input) {
                Some(Answer::Correct) => {
                    println!("🎉 Correct! That's fret {fret} on string {string}.");
                    break;
                }
                Some(Answer::TryAgain) => {
                    println!("That's not it. Try again! 🎸");
                }
                Some(Answer::Revealed(note)) => {
                    println!("The correct answer was {note}. Let's try a new one.");
                    break;
                }
                None => break 'game,
            }
        }
    }

    print_stats(session.stats());
    Ok(())
}

fn print_stats(stats: SessionStats) {
    println!("\n📊 Session Statistics\n");
    println!("  Total questions:      {}", stats.total_questions);
    println!("  Correct answers:      {}", stats.correct_answers);
    println!("  Wrong answers:        {}", stats.wrong_answers);
    println!("  Questions with hints: {}", stats.questions_with_hints);
    println!("  Accuracy:             {:.1}%", stats.accuracy());
}
