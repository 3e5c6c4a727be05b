//! Text diagrams of the fretboard.
//!
//! Both orientations emit lines of identical character width so the grid
//! stays columnar inside a fixed-width text container. Alignment is a hard
//! requirement: the whole diagram is unreadable once columns drift.

use crate::fretboard::Fretboard;
use crate::question::{Orientation, RenderMode};
use crate::tuning::STRING_COUNT;

/// Marks the cell the player must identify.
pub(crate) const PLACEHOLDER: &str = "❓";
/// Open-string cell in horizontal diagrams.
pub(crate) const OPEN_STRING: &str = "◯";
/// Stands in for hidden notes.
pub(crate) const MASK: &str = "---";

pub(crate) fn render(
    board: &Fretboard,
    target_string: u8,
    target_fret: u8,
    orientation: Orientation,
    mode: RenderMode,
) -> String {
    match orientation {
        Orientation::Vertical => render_vertical(board, target_string, target_fret, mode),
        Orientation::Horizontal => render_horizontal(board, target_string, target_fret, mode),
    }
}

/// Tabular grid: frets as rows, strings as columns, lowest-pitched string
/// (6) leftmost. A 4-character gutter holds the fret numbers; every cell is
/// exactly 5 characters between `|` delimiters.
fn render_vertical(
    board: &Fretboard,
    target_string: u8,
    target_fret: u8,
    mode: RenderMode,
) -> String {
    let mut lines = Vec::with_capacity(usize::from(board.max_fret()) + 3);

    let header_cells: Vec<String> = (1..=STRING_COUNT)
        .rev()
        .map(|string| pad_cell(&board.tuning().label(string).unwrap_or_default()))
        .collect();
    let header = format!("    |{}", header_cells.join("|"));
    let width = header.chars().count();
    lines.push(header);
    lines.push("-".repeat(width));

    for fret in 0..=board.max_fret() {
        let cells: Vec<String> = (1..=STRING_COUNT)
            .rev()
            .map(|string| {
                pad_cell(&vertical_cell(
                    board,
                    string,
                    fret,
                    target_string,
                    target_fret,
                    mode,
                ))
            })
            .collect();
        lines.push(format!(" {fret:>2} |{}", cells.join("|")));
    }

    lines.join("\n")
}

/// Cell content before padding, in priority order: the placeholder for the
/// target cell, the literal `0` for open strings (never masked), the mask
/// in hide mode, otherwise the note name.
fn vertical_cell(
    board: &Fretboard,
    string: u8,
    fret: u8,
    target_string: u8,
    target_fret: u8,
    mode: RenderMode,
) -> String {
    if string == target_string && fret == target_fret {
        PLACEHOLDER.to_string()
    } else if fret == 0 {
        "0".to_string()
    } else if mode == RenderMode::Hide {
        MASK.to_string()
    } else {
        board
            .note_at(string, fret)
            .map(|note| note.name().to_string())
            .unwrap_or_default()
    }
}

/// Fixed 5-character cell: 1-character content gets two spaces each side,
/// 2-character content one before and two after, the 3-character mask one
/// each side.
fn pad_cell(content: &str) -> String {
    match content.chars().count() {
        1 => format!("  {content}  "),
        2 => format!(" {content}  "),
        _ => format!(" {content} "),
    }
}

/// One line per string, frets as columns, fret 0 first. The open-string
/// column is part of the line prefix and always shows the circle glyph; the
/// target/mask logic applies to frets 1..=max_fret only.
fn render_horizontal(
    board: &Fretboard,
    target_string: u8,
    target_fret: u8,
    mode: RenderMode,
) -> String {
    let mut lines = Vec::with_capacity(usize::from(STRING_COUNT) + 1);

    // Fret labels; the `0` sits over the circle inside the prefix.
    let mut header = String::from("    0  ");
    for fret in 1..=board.max_fret() {
        header.push_str(&format!(" {fret:<3} "));
    }
    lines.push(header);

    for (string, _) in board.tuning().strings() {
        let label = board.tuning().label(string).unwrap_or_default();
        let mut line = format!("{label} | {OPEN_STRING} |");
        for fret in 1..=board.max_fret() {
            let content = if string == target_string && fret == target_fret {
                PLACEHOLDER.to_string()
            } else if mode == RenderMode::Hide {
                MASK.to_string()
            } else {
                board
                    .note_at(string, fret)
                    .map(|note| note.name().to_string())
                    .unwrap_or_default()
            };
            line.push_str(&format!(" {content:<3}|"));
        }
        lines.push(line);
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    fn board(max_fret: u8) -> Fretboard {
        Fretboard::new(Tuning::STANDARD, max_fret)
    }

    fn char_widths(diagram: &str) -> Vec<usize> {
        diagram.lines().map(|l| l.chars().count()).collect()
    }

    #[test]
    fn test_vertical_lines_share_one_width() {
        for max_fret in [3u8, 5, 12] {
            let diagram = render(&board(max_fret), 2, 1, Orientation::Vertical, RenderMode::Show);
            let widths = char_widths(&diagram);
            assert_eq!(widths.len(), usize::from(max_fret) + 3);
            assert!(widths.iter().all(|w| *w == widths[0]), "{diagram}");
        }
    }

    #[test]
    fn test_vertical_cells_are_five_chars() {
        let diagram = render(&board(12), 4, 7, Orientation::Vertical, RenderMode::Show);
        for line in diagram.lines().filter(|l| l.contains('|')) {
            for cell in line.split('|').skip(1) {
                assert_eq!(cell.chars().count(), 5, "cell {cell:?} in line {line:?}");
            }
        }
    }

    #[test]
    fn test_vertical_header_orders_strings_low_to_high() {
        let diagram = render(&board(3), 1, 1, Orientation::Vertical, RenderMode::Show);
        let header = diagram.lines().next().unwrap();
        let names: Vec<&str> = header.split('|').skip(1).map(str::trim).collect();
        assert_eq!(names, ["E", "A", "D", "G", "B", "e"]);
    }

    #[test]
    fn test_vertical_open_strings_show_zero_in_both_modes() {
        for mode in [RenderMode::Show, RenderMode::Hide] {
            let diagram = render(&board(5), 3, 2, Orientation::Vertical, mode);
            let fret0 = diagram.lines().nth(2).unwrap();
            let cells: Vec<&str> = fret0.split('|').skip(1).map(str::trim).collect();
            assert_eq!(cells, ["0", "0", "0", "0", "0", "0"]);
        }
    }

    #[test]
    fn test_vertical_placeholder_wins_over_open_zero() {
        // Target (6, 0): the open low E is the question, so it is marked,
        // while the other open strings still show 0.
        let diagram = render(&board(5), 6, 0, Orientation::Vertical, RenderMode::Hide);
        let fret0 = diagram.lines().nth(2).unwrap();
        let cells: Vec<&str> = fret0.split('|').skip(1).map(str::trim).collect();
        assert_eq!(cells, [PLACEHOLDER, "0", "0", "0", "0", "0"]);
    }

    #[test]
    fn test_vertical_hide_masks_every_fretted_non_target() {
        let diagram = render(&board(5), 2, 3, Orientation::Vertical, RenderMode::Hide);
        for (row, line) in diagram.lines().skip(2).enumerate() {
            let fret = row as u8;
            for (col, cell) in line.split('|').skip(1).enumerate() {
                let string = STRING_COUNT - col as u8;
                let content = cell.trim();
                if string == 2 && fret == 3 {
                    assert_eq!(content, PLACEHOLDER);
                } else if fret == 0 {
                    assert_eq!(content, "0");
                } else {
                    assert_eq!(content, MASK);
                }
            }
        }
    }

    #[test]
    fn test_vertical_note_padding() {
        let diagram = render(&board(2), 1, 2, Orientation::Vertical, RenderMode::Show);
        // Fret 1 on the low E string is F (1 char, centered); fret 1 on the
        // A string is A# (2 chars, shifted one left).
        let fret1 = diagram.lines().nth(3).unwrap();
        let cells: Vec<&str> = fret1.split('|').skip(1).collect();
        assert_eq!(cells[0], "  F  ");
        assert_eq!(cells[1], " A#  ");
    }

    #[test]
    fn test_horizontal_lines_share_one_width() {
        for mode in [RenderMode::Show, RenderMode::Hide] {
            let diagram = render(&board(7), 4, 3, Orientation::Horizontal, mode);
            let widths = char_widths(&diagram);
            assert_eq!(widths.len(), 7);
            assert!(widths.iter().all(|w| *w == widths[0]), "{diagram}");
        }
    }

    #[test]
    fn test_horizontal_open_column_is_always_the_circle() {
        for mode in [RenderMode::Show, RenderMode::Hide] {
            let diagram = render(&board(5), 1, 2, Orientation::Horizontal, mode);
            for line in diagram.lines().skip(1) {
                let prefix: String = line.chars().take(7).collect();
                assert!(prefix.ends_with(&format!("| {OPEN_STRING} |")), "{line}");
            }
        }
    }

    #[test]
    fn test_horizontal_marks_the_target() {
        let diagram = render(&board(5), 3, 2, Orientation::Horizontal, RenderMode::Hide);
        // String 3 is the fourth line (after the fret-label header).
        let line = diagram.lines().nth(3).unwrap();
        assert!(line.starts_with("G |"));
        let cells: Vec<String> = line
            .chars()
            .skip(7)
            .collect::<String>()
            .split('|')
            .map(|c| c.trim().to_string())
            .collect();
        assert_eq!(cells[0], MASK);
        assert_eq!(cells[1], PLACEHOLDER);
        assert_eq!(cells[2], MASK);
    }

    #[test]
    fn test_horizontal_string_labels() {
        let diagram = render(&board(3), 2, 1, Orientation::Horizontal, RenderMode::Show);
        let labels: Vec<char> = diagram
            .lines()
            .skip(1)
            .filter_map(|l| l.chars().next())
            .collect();
        assert_eq!(labels, ['e', 'B', 'G', 'D', 'A', 'E']);
    }
}
