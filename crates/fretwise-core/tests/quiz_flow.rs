//! End-to-end tests for the question → answer → statistics flow, plus the
//! diagram alignment guarantees the trainer's chat display depends on.

use fretwise_core::{
    normalize, Answer, Fretboard, Orientation, PitchClass, Question, RenderMode, Session, Tuning,
    FRET_OPTIONS,
};

#[test]
fn test_full_session_round() {
    let mut session = Session::new(5, Orientation::Vertical, RenderMode::Show);
    let mut rng = rand::thread_rng();

    for _ in 0..10 {
        let question = session.next_question(&mut rng).unwrap();
        let answer = question.note.name().to_string();
        assert!(question.diagram.contains('❓'));
        assert_eq!(session.submit(&answer), Some(Answer::Correct));
    }

    let stats = session.stats();
    assert_eq!(stats.total_questions, 10);
    assert_eq!(stats.correct_answers, 10);
    assert!((stats.accuracy() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_question_answers_match_the_board() {
    let mut rng = rand::thread_rng();
    for max_fret in FRET_OPTIONS {
        let board = Fretboard::new(Tuning::STANDARD, max_fret);
        for _ in 0..50 {
            let q =
                Question::generate(max_fret, Orientation::Vertical, RenderMode::Hide, &mut rng)
                    .unwrap();
            assert_eq!(board.note_at(q.string, q.fret), Some(q.note));
            assert!(q.check(q.note.name()));
        }
    }
}

#[test]
fn test_diagrams_align_for_every_practice_size() {
    let mut rng = rand::thread_rng();
    for max_fret in FRET_OPTIONS {
        for orientation in [Orientation::Vertical, Orientation::Horizontal] {
            for mode in [RenderMode::Show, RenderMode::Hide] {
                let q = Question::generate(max_fret, orientation, mode, &mut rng).unwrap();
                let widths: Vec<usize> =
                    q.diagram.lines().map(|l| l.chars().count()).collect();
                assert!(
                    widths.iter().all(|w| *w == widths[0]),
                    "ragged {orientation} diagram at max_fret {max_fret}:\n{}",
                    q.diagram
                );
            }
        }
    }
}

#[test]
fn test_every_question_marks_its_target() {
    // Any question the engine hands out must carry the placeholder —
    // in particular, a horizontal diagram can never be built around a
    // fret-0 target, whose cell would show the circle glyph instead.
    let mut rng = rand::thread_rng();
    for orientation in [Orientation::Vertical, Orientation::Horizontal] {
        for mode in [RenderMode::Show, RenderMode::Hide] {
            for _ in 0..50 {
                let q = Question::generate(5, orientation, mode, &mut rng).unwrap();
                assert!(q.diagram.contains('❓'), "{}", q.diagram);
            }
        }
    }
    for string in 1..=6u8 {
        assert!(
            Question::with_target(5, Orientation::Horizontal, RenderMode::Show, string, 0)
                .is_err()
        );
    }
}

#[test]
fn test_open_low_e_question_on_a_five_fret_board() {
    // The scenario from the trainer's docs: target (6, 0) on a 5-fret board
    // asks for the open low E.
    for mode in [RenderMode::Show, RenderMode::Hide] {
        let q = Question::with_target(5, Orientation::Vertical, mode, 6, 0).unwrap();
        assert_eq!(q.note, PitchClass::E);

        // Fret-0 row: the target is marked, the other open strings show 0
        // even in hide mode.
        let fret0 = q.diagram.lines().nth(2).unwrap();
        let cells: Vec<&str> = fret0.split('|').skip(1).map(str::trim).collect();
        assert_eq!(cells, ["❓", "0", "0", "0", "0", "0"]);
    }
}

#[test]
fn test_enharmonic_answers_are_accepted_end_to_end() {
    // String 2 (B), fret 4 is D#; Eb names the same pitch.
    let q = Question::with_target(5, Orientation::Vertical, RenderMode::Show, 2, 4).unwrap();
    assert_eq!(q.note, PitchClass::DSharp);
    assert!(q.check("eb"));
    assert_eq!(normalize("eb"), "D#");
}
