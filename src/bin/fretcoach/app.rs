//! Event loop: keys in, controller ticks, frames out.

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::warn;

use fretcoach::{
    audio::{EngineConfig, VoiceEngine},
    lesson::{LessonConfig, LessonController, LessonMode},
};

use crate::{output::CpalOutput, ui};

/// ~60 fps
const FRAME: Duration = Duration::from_millis(16);
const VOLUME_STEP_DB: f32 = 3.0;
/// Pluck keys, low E to high e.
const STRING_KEYS: [char; 6] = ['z', 'x', 'c', 'v', 'b', 'n'];

pub struct App {
    pub lesson: LessonController<CpalOutput>,
    /// Last audio problem, shown in the transport bar.
    pub notice: Option<String>,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let config = EngineConfig::default();
        let engine = VoiceEngine::new(CpalOutput::new(config.pluck), config);
        Self {
            lesson: LessonController::new(engine, LessonConfig::default()),
            notice: None,
            should_quit: false,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> EyreResult<()> {
        while !self.should_quit {
            self.lesson.tick(Instant::now());

            terminal.draw(|frame| ui::render(frame, &self))?;

            if event::poll(FRAME)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, Instant::now());
                    }
                }
            }
        }

        self.lesson.stop();
        self.lesson.engine_mut().dispose();
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, now: Instant) {
        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => self.lesson.set_mode(LessonMode::Chords, now),
            KeyCode::Char('2') => self.lesson.set_mode(LessonMode::Scales, now),
            KeyCode::Char('3') => self.lesson.set_mode(LessonMode::Songs, now),
            KeyCode::Left => self.lesson.previous(now),
            KeyCode::Right => self.lesson.next(now),
            KeyCode::Char(' ') => self.lesson.play(now),
            KeyCode::Char('s') => self.lesson.stop(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.lesson.nudge_scale_tempo(1);
            }
            KeyCode::Char('-') => {
                self.lesson.nudge_scale_tempo(-1);
            }
            KeyCode::Char(']') => self.nudge_volume(VOLUME_STEP_DB),
            KeyCode::Char('[') => self.nudge_volume(-VOLUME_STEP_DB),
            KeyCode::Char('f') => self.lesson.toggle_finger_numbers(),
            KeyCode::Char('a') => self.enable_audio(now),
            KeyCode::Char(c) => {
                if let Some(string) = STRING_KEYS.iter().position(|&k| k == c) {
                    self.lesson.pluck_string(string, now);
                }
            }
            _ => {}
        }
    }

    fn enable_audio(&mut self, now: Instant) {
        match self.lesson.enable_audio(now) {
            Ok(()) => self.notice = None,
            Err(err) => {
                warn!(%err, "could not enable audio");
                self.notice = Some(err.to_string());
            }
        }
    }

    fn nudge_volume(&mut self, db: f32) {
        let engine = self.lesson.engine_mut();
        let volume = engine.volume_db() + db;
        engine.set_volume(volume);
    }
}
