use anyhow::Result;
use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

use super::Session;
use crate::config::{self, ColorSettings, Config, PALETTE};
use crate::domain::{Grid, presets};
use crate::persistence;

/// Where a pattern-picker entry loads its board from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternSource {
    File(PathBuf),
    Preset(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternEntry {
    pub name: String,
    /// One-line hint shown while the entry is hovered
    pub description: String,
    pub source: PatternSource,
}

/// Swatch choices on the settings screen, indices into `PALETTE`.
/// `None` means the current color is not a palette entry and stays as is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SettingsDraft {
    pub alive: Option<usize>,
    pub dead: Option<usize>,
}

impl SettingsDraft {
    pub fn from_colors(colors: &ColorSettings) -> Self {
        Self {
            alive: PALETTE.iter().position(|c| *c == colors.alive),
            dead: PALETTE.iter().position(|c| *c == colors.dead),
        }
    }

    fn apply_to(&self, colors: &mut ColorSettings) {
        if let Some(i) = self.alive {
            colors.alive = PALETTE[i];
        }
        if let Some(i) = self.dead {
            colors.dead = PALETTE[i];
        }
    }
}

pub enum Screen {
    MainMenu,
    Game(Session),
    PatternPicker(Vec<PatternEntry>),
    Settings(SettingsDraft),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::MainMenu => "main menu",
            Screen::Game(_) => "game",
            Screen::PatternPicker(_) => "pattern picker",
            Screen::Settings(_) => "settings",
        }
    }
}

/// Everything the UI can ask for. The input layer produces these; `App::dispatch`
/// is the only place screens change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    // Main menu
    StartNew,
    LoadSave,
    OpenPatternPicker,
    OpenSettings,
    Quit,
    // Pattern picker / settings
    PickPattern(usize),
    SelectAlive(usize),
    SelectDead(usize),
    ApplySettings,
    BackToMenu,
    // Game
    TogglePause,
    Clear,
    Randomize,
    ToggleMenu,
    Continue,
    Save,
    Press { row: usize, col: usize },
    Drag { row: usize, col: usize },
    Release,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Top-level state: the active screen plus the settings it runs with
pub struct App {
    pub config: Config,
    config_path: PathBuf,
    pub screen: Screen,
    /// One-line message shown on the main menu (last error, last save)
    pub status: Option<String>,
    rng: StdRng,
}

impl App {
    pub fn new(config: Config, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
            screen: Screen::MainMenu,
            status: None,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn colors(&self) -> &ColorSettings {
        &self.config.colors
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Game(session) => Some(session),
            _ => None,
        }
    }

    fn goto(&mut self, screen: Screen) {
        debug!("{} -> {}", self.screen.name(), screen.name());
        self.screen = screen;
    }

    fn start_session(&mut self, grid: Grid) {
        self.status = None;
        let session = Session::new(grid, &self.config);
        self.goto(Screen::Game(session));
    }

    /// Start a session from a load, or fall back to the main menu with the error shown
    fn start_from(&mut self, loaded: Result<Grid>) {
        match loaded {
            Ok(grid) => self.start_session(grid),
            Err(e) => {
                error!("load failed: {e:#}");
                self.status = Some(format!("Load failed: {e:#}"));
                self.goto(Screen::MainMenu);
            }
        }
    }

    fn board_size(&self) -> (usize, usize) {
        (self.config.grid_height, self.config.grid_width)
    }

    /// Picker entries: stored patterns first, then the built-in presets
    pub fn pattern_entries(&self) -> Vec<PatternEntry> {
        let files = persistence::list_pattern_files(&self.config.pattern_dir, &self.config.save_file)
            .unwrap_or_else(|e| {
                warn!("cannot list patterns: {e:#}");
                Vec::new()
            });
        files
            .into_iter()
            .map(|f| PatternEntry {
                description: format!("Saved board {}", f.path.display()),
                name: f.name,
                source: PatternSource::File(f.path),
            })
            .chain(presets::all_patterns().iter().enumerate().map(|(i, p)| PatternEntry {
                name: p.name.to_string(),
                description: p.description.to_string(),
                source: PatternSource::Preset(i),
            }))
            .collect()
    }

    fn load_entry(&self, entry: &PatternEntry) -> Result<Grid> {
        let (height, width) = self.board_size();
        match &entry.source {
            PatternSource::File(path) => persistence::load_pattern(path, height, width),
            PatternSource::Preset(i) => presets::all_patterns()
                .get(*i)
                .map(|p| p.to_grid(height, width))
                .ok_or_else(|| anyhow::anyhow!("no preset #{i}")),
        }
    }

    fn save_session(&mut self) {
        let Screen::Game(session) = &self.screen else {
            return;
        };
        let path = self.config.save_file.clone();
        match persistence::save_grid(&path, &session.grid) {
            Ok(()) => self.status = Some("Game saved.".to_string()),
            Err(e) => {
                error!("save failed: {e:#}");
                self.status = Some(format!("Save failed: {e:#}"));
            }
        }
    }

    fn apply_settings(&mut self, draft: SettingsDraft) {
        draft.apply_to(&mut self.config.colors);
        info!("applied colors {:?}", self.config.colors);
        if let Err(e) = config::save_config(&self.config_path, &self.config) {
            warn!("settings not persisted: {e:#}");
            self.status = Some(format!("Settings not saved: {e:#}"));
        }
        self.goto(Screen::MainMenu);
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Apply one UI action to the current screen
    pub fn dispatch(&mut self, action: Action) -> Flow {
        match (&mut self.screen, action) {
            (_, Action::Quit) => return Flow::Quit,
            (_, Action::BackToMenu) => self.goto(Screen::MainMenu),

            (Screen::MainMenu, Action::StartNew) => {
                let (h, w) = self.board_size();
                self.start_session(Grid::new(h, w));
            }
            (Screen::MainMenu, Action::LoadSave) => {
                let (h, w) = self.board_size();
                let loaded = persistence::load_grid(&self.config.save_file, h, w);
                self.start_from(loaded);
            }
            (Screen::MainMenu, Action::OpenPatternPicker) => {
                let entries = self.pattern_entries();
                self.goto(Screen::PatternPicker(entries));
            }
            (Screen::MainMenu, Action::OpenSettings) => {
                let draft = SettingsDraft::from_colors(&self.config.colors);
                self.goto(Screen::Settings(draft));
            }

            (Screen::PatternPicker(entries), Action::PickPattern(i)) => {
                if let Some(entry) = entries.get(i).cloned() {
                    info!("loading pattern {}", entry.name);
                    let loaded = self.load_entry(&entry);
                    self.start_from(loaded);
                }
            }

            (Screen::Settings(draft), Action::SelectAlive(i)) if i < PALETTE.len() => {
                draft.alive = Some(i);
            }
            (Screen::Settings(draft), Action::SelectDead(i)) if i < PALETTE.len() => {
                draft.dead = Some(i);
            }
            (Screen::Settings(draft), Action::ApplySettings) => {
                let draft = *draft;
                self.apply_settings(draft);
            }

            (Screen::Game(session), Action::ToggleMenu) => session.toggle_menu(),
            (Screen::Game(session), Action::Continue) if session.menu_open => {
                session.resume_from_menu();
            }
            (Screen::Game(session), Action::Save) if session.menu_open => self.save_session(),
            (Screen::Game(session), action) if !session.menu_open => match action {
                Action::TogglePause => session.toggle_pause(),
                Action::Clear => session.clear(),
                Action::Randomize => session.randomize(&mut self.rng),
                Action::Press { row, col } => session.press(row, col),
                Action::Drag { row, col } => session.drag(row, col),
                Action::Release => session.release(),
                _ => {}
            },

            _ => {}
        }
        Flow::Continue
    }

    /// Per-frame update; only the game screen has anything to advance
    pub fn update(&mut self, delta_time: f32) {
        if let Screen::Game(session) = &mut self.screen {
            session.tick(delta_time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use crate::persistence::test_support::scratch_dir;
    use std::fs;

    fn app_in(name: &str) -> (App, PathBuf) {
        let dir = scratch_dir(name);
        let config = Config {
            save_file: dir.join("savegame.json"),
            pattern_dir: dir.join("patterns"),
            ..Config::default()
        };
        (App::new(config, dir.join("life.json")), dir)
    }

    fn game(app: &App) -> &Session {
        app.session().expect("expected game screen")
    }

    #[test]
    fn test_start_new_session() {
        let (mut app, _) = app_in("app_start");
        assert_eq!(app.dispatch(Action::StartNew), Flow::Continue);
        let session = game(&app);
        assert!(session.grid.is_empty());
        assert_eq!(session.grid.dimensions(), (60, 80));
        assert!(!session.paused);
    }

    #[test]
    fn test_quit_from_anywhere() {
        let (mut app, _) = app_in("app_quit");
        assert_eq!(app.dispatch(Action::Quit), Flow::Quit);
        app.dispatch(Action::StartNew);
        assert_eq!(app.dispatch(Action::Quit), Flow::Quit);
    }

    #[test]
    fn test_load_missing_save_starts_empty() {
        let (mut app, _) = app_in("app_load_missing");
        app.dispatch(Action::LoadSave);
        assert!(game(&app).grid.is_empty());
    }

    #[test]
    fn test_save_from_pause_menu_then_load() {
        let (mut app, _) = app_in("app_save_load");
        app.dispatch(Action::StartNew);
        app.dispatch(Action::TogglePause);
        app.dispatch(Action::Press { row: 3, col: 4 });
        app.dispatch(Action::Release);

        // Save only works from the pause menu
        app.dispatch(Action::Save);
        assert!(!app.config.save_file.exists());
        app.dispatch(Action::ToggleMenu);
        app.dispatch(Action::Save);
        assert_eq!(app.status.as_deref(), Some("Game saved."));

        app.dispatch(Action::BackToMenu);
        app.dispatch(Action::LoadSave);
        let session = game(&app);
        assert_eq!(session.grid.get(3, 4), Some(Cell::Alive));
        assert_eq!(session.grid.population(), 1);
    }

    #[test]
    fn test_corrupt_save_returns_to_menu() {
        let (mut app, _) = app_in("app_corrupt");
        fs::write(&app.config.save_file, b"garbage").unwrap();
        app.dispatch(Action::LoadSave);
        assert!(matches!(app.screen, Screen::MainMenu));
        assert!(app.status.as_deref().is_some_and(|s| s.starts_with("Load failed")));
    }

    #[test]
    fn test_menu_blocks_game_keys() {
        let (mut app, _) = app_in("app_menu");
        app.dispatch(Action::StartNew);
        app.dispatch(Action::ToggleMenu);
        app.dispatch(Action::TogglePause);
        assert!(!game(&app).paused);
        app.dispatch(Action::Continue);
        let session = game(&app);
        assert!(session.paused);
        assert!(!session.menu_open);
    }

    #[test]
    fn test_pattern_picker_lists_files_then_presets() {
        let (mut app, dir) = app_in("app_picker");
        let patterns = dir.join("patterns");
        let glider = presets::glider().to_grid(60, 80);
        persistence::save_grid(&patterns.join("my_glider.json"), &glider).unwrap();
        persistence::save_grid(&patterns.join("savegame.json"), &glider).unwrap();

        app.dispatch(Action::OpenPatternPicker);
        let Screen::PatternPicker(entries) = &app.screen else {
            panic!("expected pattern picker");
        };
        assert_eq!(entries.len(), 1 + presets::all_patterns().len());
        assert_eq!(entries[0].name, "my_glider");
        assert_eq!(entries[1].source, PatternSource::Preset(0));
        assert_eq!(entries[1].description, presets::glider().description);
        assert!(entries[0].description.contains("my_glider.json"));

        app.dispatch(Action::PickPattern(0));
        assert_eq!(game(&app).grid, glider);
    }

    #[test]
    fn test_pick_preset() {
        let (mut app, _) = app_in("app_preset");
        app.dispatch(Action::OpenPatternPicker);
        app.dispatch(Action::PickPattern(1));
        assert_eq!(game(&app).grid, presets::blinker().to_grid(60, 80));
    }

    #[test]
    fn test_mismatched_pattern_reports_error() {
        let (mut app, dir) = app_in("app_picker_mismatch");
        persistence::save_grid(&dir.join("patterns").join("tiny.json"), &Grid::new(5, 5)).unwrap();
        app.dispatch(Action::OpenPatternPicker);
        app.dispatch(Action::PickPattern(0));
        assert!(matches!(app.screen, Screen::MainMenu));
        assert!(app.status.as_deref().is_some_and(|s| s.contains("expected 60x80")));
    }

    #[test]
    fn test_settings_apply_and_back() {
        let (mut app, _) = app_in("app_settings");
        app.dispatch(Action::OpenSettings);
        assert!(matches!(
            app.screen,
            Screen::Settings(SettingsDraft { alive: Some(0), dead: None })
        ));

        app.dispatch(Action::SelectAlive(2));
        app.dispatch(Action::BackToMenu);
        assert_eq!(app.colors().alive, PALETTE[0]);

        app.dispatch(Action::OpenSettings);
        app.dispatch(Action::SelectAlive(2));
        app.dispatch(Action::SelectDead(7));
        app.dispatch(Action::SelectDead(99));
        app.dispatch(Action::ApplySettings);
        assert!(matches!(app.screen, Screen::MainMenu));
        assert_eq!(app.colors().alive, PALETTE[2]);
        assert_eq!(app.colors().dead, PALETTE[7]);
        assert_eq!(config::load_config(app.config_path()).colors, *app.colors());
    }

    #[test]
    fn test_update_advances_only_game() {
        let (mut app, _) = app_in("app_update");
        app.update(1.0);
        app.dispatch(Action::OpenPatternPicker);
        app.dispatch(Action::PickPattern(1));
        app.update(0.2);
        assert_eq!(game(&app).generation, 1);
    }
}
