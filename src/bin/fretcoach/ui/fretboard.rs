//! Fretboard widget - six strings, finger markers, strum cursor and ringing
//! strings
//!
//! High e is drawn on top, as in tablature.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use fretcoach::{
    audio::AudioOutput,
    curriculum::{finger_label, FretPosition, ScaleNote},
    lesson::LessonController,
    pitch::STRING_NAMES,
    playback::Phase,
    NUM_STRINGS,
};

/// Characters per fret cell, including the fret wire.
const CELL: usize = 6;
const MIN_FRETS: i8 = 5;

const ROOT_COLOR: Color = Color::Rgb(0xff, 0x6b, 0x6b);
const NOTE_COLOR: Color = Color::LightBlue;
const RING_COLOR: Color = Color::Yellow;

fn finger_color(finger: i8) -> Color {
    match finger {
        1 => Color::Rgb(0x34, 0x98, 0xdb),
        2 => Color::Rgb(0x2e, 0xcc, 0x71),
        3 => Color::Rgb(0xe7, 0x4c, 0x3c),
        4 => Color::Rgb(0xf3, 0x9c, 0x12),
        _ => Color::Gray,
    }
}

pub fn render_fretboard<O: AudioOutput>(frame: &mut Frame, area: Rect, lesson: &LessonController<O>) {
    if area.height < (NUM_STRINGS + 1) as u16 || area.width < 20 {
        return;
    }

    let display = lesson.display();
    let playback = lesson.playback();
    let (start, frets) = window(display.finger_positions, display.scale_notes);

    let mut lines = Vec::with_capacity(NUM_STRINGS + 1);

    // Fret numbers
    let mut header = String::from("    ");
    for fret in start + 1..=start + frets {
        header.push_str(&format!("{:^width$}", fret, width = CELL));
    }
    lines.push(Line::from(Span::styled(header, Style::default().fg(Color::DarkGray))));

    for string in (0..NUM_STRINGS).rev() {
        let mut spans = Vec::new();

        let vibrating = playback.vibrating_strings.contains(string);
        let under_pick = playback.strum_string() == Some(string);
        let highlighted = display.highlighted_strings[string];

        let label_style = if under_pick {
            Style::default().add_modifier(Modifier::REVERSED)
        } else if highlighted {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!("{:>2} ", STRING_NAMES[string]), label_style));

        // Left of the nut: open / muted markers
        spans.push(open_marker(lesson, string));
        spans.push(Span::raw(if start == 0 { "║" } else { "│" }));

        let wire = if vibrating { "≈" } else { "─" };
        let wire_style = if vibrating {
            Style::default().fg(RING_COLOR)
        } else {
            Style::default().fg(Color::Gray)
        };

        for fret in start + 1..=start + frets {
            let half = (CELL - 2) / 2;
            spans.push(Span::styled(wire.repeat(half), wire_style));
            spans.push(marker(lesson, string, fret).unwrap_or_else(|| Span::styled(wire, wire_style)));
            spans.push(Span::styled(wire.repeat(CELL - 2 - half), wire_style));
            spans.push(Span::styled("┼", Style::default().fg(Color::DarkGray)));
        }

        lines.push(Line::from(spans));
    }

    if playback.phase != Phase::Idle {
        let progress = match playback.phase {
            Phase::Fingers => format!("press {:>3.0}%", playback.finger_progress * 100.0),
            Phase::Strum => format!("strum {:>3.0}%", playback.strum_progress * 100.0),
            _ => String::from("ringing"),
        };
        lines.push(Line::from(Span::styled(
            format!("    {progress}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Same rule as a chord diagram: start at the nut if everything fits in the
/// first four frets, otherwise just above the lowest fretted note.
fn window(positions: &[FretPosition], notes: &[ScaleNote]) -> (i8, i8) {
    let frets = positions
        .iter()
        .map(|p| p.fret)
        .chain(notes.iter().map(|n| n.fret))
        .filter(|&f| f >= 1);
    let (lowest, highest) = frets.fold((i8::MAX, 0), |(lo, hi), f| (lo.min(f), hi.max(f)));
    let start = if highest <= 4 { 0 } else { lowest - 1 };
    (start, (highest - start).max(MIN_FRETS))
}

fn open_marker<O: AudioOutput>(lesson: &LessonController<O>, string: usize) -> Span<'static> {
    let display = lesson.display();
    if let Some(pos) = display
        .finger_positions
        .iter()
        .find(|p| usize::from(p.string) == string)
    {
        return match pos.fret {
            f if f < 0 => Span::styled("X", Style::default().fg(Color::DarkGray)),
            0 => Span::styled("O", Style::default().fg(Color::Gray)),
            _ => Span::raw(" "),
        };
    }
    marker(lesson, string, 0).unwrap_or_else(|| Span::raw(" "))
}

fn marker<O: AudioOutput>(lesson: &LessonController<O>, string: usize, fret: i8) -> Option<Span<'static>> {
    let display = lesson.display();
    let playback = lesson.playback();

    if let Some(pos) = display
        .finger_positions
        .iter()
        .find(|p| usize::from(p.string) == string && p.fret == fret && p.is_fretted())
    {
        let level = match playback.phase {
            Phase::Fingers => lesson.timing().finger_level(pos.finger, playback.finger_progress),
            _ => 1.0,
        };
        let text = if lesson.show_finger_numbers() { finger_label(pos.finger) } else { "●" };
        let style = if level < 1.0 {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(finger_color(pos.finger)).add_modifier(Modifier::BOLD)
        };
        return Some(Span::styled(if level > 0.0 { text } else { "○" }, style));
    }

    let at_here = |n: &ScaleNote| usize::from(n.string) == string && n.fret == fret;
    let note = display.scale_notes.iter().find(|n| at_here(n))?;
    let current = playback
        .current_scale_note
        .and_then(|i| display.scale_notes.get(i))
        .is_some_and(at_here);

    let color = if note.is_root { ROOT_COLOR } else { NOTE_COLOR };
    let mut style = Style::default().fg(color);
    if current {
        style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    }
    let text = if lesson.show_finger_numbers() && note.finger > 0 {
        finger_label(note.finger)
    } else {
        "●"
    };
    Some(Span::styled(text, style))
}
