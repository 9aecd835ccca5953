//! Terminal views: transport bar, fretboard, song chart and help.

mod fretboard;
mod transport;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use fretcoach::lesson::LessonMode;

use fretboard::render_fretboard;
use transport::render_transport;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Transport bar
            Constraint::Length(10), // Fretboard
            Constraint::Min(3),     // Lesson notes
            Constraint::Length(1),  // Help bar
        ])
        .split(area);

    render_transport(frame, chunks[0], app);

    let title = format!(" {} ", item_name(app));
    let board_block = Block::default().title(title).borders(Borders::ALL);
    let board_inner = board_block.inner(chunks[1]);
    frame.render_widget(board_block, chunks[1]);
    render_fretboard(frame, board_inner, &app.lesson);

    let notes = Paragraph::new(lesson_notes(app))
        .wrap(Wrap { trim: true })
        .block(Block::default().title(" Lesson ").borders(Borders::ALL));
    frame.render_widget(notes, chunks[2]);

    let help = Paragraph::new(
        " [1/2/3] Mode  [←/→] Prev/Next  [Space] Play  [S] Stop  [+/-] Tempo  [[/]] Volume  \
         [Z..N] Pluck  [F] Fingers  [A] Audio  [Q] Quit",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

fn item_name(app: &App) -> String {
    let lesson = &app.lesson;
    match lesson.mode() {
        LessonMode::Chords => lesson.current_chord().name.to_string(),
        LessonMode::Scales => lesson.current_scale().name.to_string(),
        LessonMode::Songs => {
            let song = lesson.current_song();
            format!("{} - {}", song.title, song.artist)
        }
    }
}

fn lesson_notes(app: &App) -> String {
    let lesson = &app.lesson;
    match lesson.mode() {
        LessonMode::Chords => {
            let chord = lesson.current_chord();
            let mut text = format!(
                "Chord {} of {}",
                lesson.chord_index() + 1,
                lesson.curriculum().chords().len()
            );
            if let Some(barre) = chord.barre {
                text.push_str(&format!(
                    "  |  Barre at fret {} across strings {}-{}",
                    barre.fret,
                    barre.from_string + 1,
                    barre.to_string + 1
                ));
            }
            text
        }
        LessonMode::Scales => {
            let scale = lesson.current_scale();
            format!(
                "Pattern {}  |  {} notes  |  {:.0} BPM",
                scale.pattern,
                scale.notes.len(),
                lesson.scale_tempo()
            )
        }
        LessonMode::Songs => {
            let song = lesson.current_song();
            song.steps
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    let marker = if i == lesson.song_step_index() { ">" } else { " " };
                    match step.lyric {
                        Some(lyric) => format!("{marker}{} ({}) \"{lyric}\"", step.chord, step.beats),
                        None => format!("{marker}{} ({})", step.chord, step.beats),
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
        }
    }
}
