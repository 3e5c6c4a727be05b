use anyhow::Result;
use fretwise_core::{Error, Orientation, Question, STRING_COUNT};
use rand::Rng;

use crate::config::Config;

/// Print a single diagram without the quiz loop. Unset coordinates are
/// filled in at random; `reveal` also prints the answer.
pub fn run_diagram(
    config: Config,
    string: Option<u8>,
    fret: Option<u8>,
    reveal: bool,
) -> Result<()> {
    let mut rng = rand::thread_rng();

    let question = match (string, fret) {
        (None, None) => {
            Question::generate(config.max_fret, config.orientation, config.mode, &mut rng)?
        }
        (string, fret) => {
            let string = string.unwrap_or_else(|| rng.gen_range(1..=STRING_COUNT));
            let fret = match fret {
                Some(fret) => fret,
                None => {
                    // Horizontal diagrams never target the open string.
                    let min_fret = match config.orientation {
                        Orientation::Vertical => 0,
                        Orientation::Horizontal => 1,
                    };
                    if config.max_fret < min_fret {
                        return Err(Error::InvalidMaxFret(config.max_fret).into());
                    }
                    rng.gen_range(min_fret..=config.max_fret)
                }
            };
            Question::with_target(config.max_fret, config.orientation, config.mode, string, fret)?
        }
    };

    println!("{}", question.diagram);
    if reveal {
        println!(
            "\nString {}, fret {}: {}",
            question.string, question.fret, question.note
        );
    }

    Ok(())
}
