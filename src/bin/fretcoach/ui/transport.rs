//! Transport bar widget - mode, play state, phase, tempo and audio status

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use fretcoach::lesson::LessonMode;

use crate::app::App;

pub fn render_transport(frame: &mut Frame, area: Rect, app: &App) {
    let lesson = &app.lesson;
    let block = Block::default().title(" fretcoach ").borders(Borders::ALL);

    let mut spans = Vec::new();

    for mode in LessonMode::ALL {
        let style = if mode == lesson.mode() {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} ", mode.label()), style));
    }
    spans.push(Span::raw("  "));

    let playing = match lesson.mode() {
        LessonMode::Chords => false,
        LessonMode::Scales => lesson.is_scale_playing(),
        LessonMode::Songs => lesson.is_song_playing(),
    };
    let (symbol, label) = if playing { ("▶", "Playing") } else { ("⏸", "Stopped") };
    spans.push(Span::styled(
        format!("{symbol} {label}  "),
        Style::default().fg(if playing { Color::Green } else { Color::Yellow }),
    ));

    spans.push(Span::styled(
        format!("Phase: {:8}", lesson.playback().phase.label()),
        Style::default().fg(Color::White),
    ));

    match lesson.mode() {
        LessonMode::Chords => {}
        LessonMode::Scales => {
            spans.push(Span::styled(
                format!("BPM: {:.0}  ", lesson.scale_tempo()),
                Style::default().fg(Color::Cyan),
            ));
            if let Some(note) = lesson.playback().current_scale_note {
                spans.push(Span::styled(
                    format!("Note {}/{}  ", note + 1, lesson.current_scale().notes.len()),
                    Style::default().fg(Color::White),
                ));
            }
        }
        LessonMode::Songs => {
            let song = lesson.current_song();
            let position = lesson.song_position();
            spans.push(Span::styled(
                format!("BPM: {:.0}  ", song.tempo),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                format!(
                    "{}  Bar {} | Beat {}  ",
                    song.time_signature, position.bar, position.beat
                ),
                Style::default().fg(Color::White),
            ));
        }
    }

    let audio = match (&app.notice, lesson.is_audio_ready()) {
        (Some(notice), _) => Span::styled(format!("Audio: {notice}"), Style::default().fg(Color::Red)),
        (None, true) => Span::styled(
            format!("Audio: on {:.0} dB", lesson.engine().volume_db()),
            Style::default().fg(Color::Magenta),
        ),
        (None, false) => Span::styled("Audio: off [A]", Style::default().fg(Color::DarkGray)),
    };
    spans.push(audio);

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}
