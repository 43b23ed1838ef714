//! Build script for simon-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time
//! - Generates the configuration constants included by main.rs

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use simon_core::config::GameConfig;

fn main() {
    setup_linker();
    let file = load_config();
    generate_config(&file);
}

/// Top-level layout of game.toml
#[derive(Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
struct GameFile {
    game: GameConfig,
    buttons: ButtonsSection,
    display: DisplaySection,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ButtonsSection {
    debounce_ms: u32,
}

impl Default for ButtonsSection {
    fn default() -> Self {
        Self { debounce_ms: 20 }
    }
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DisplaySection {
    enabled: bool,
    i2c_address: u8,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            enabled: true,
            i2c_address: 0x27,
        }
    }
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = out_dir();

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let written = File::create(out_dir.join("memory.x")).and_then(|mut f| f.write_all(memory_x));
    if let Err(e) = written {
        fail("Failed to write memory.x", &[e.to_string()]);
    }

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Read, parse and validate game.toml
fn load_config() -> GameFile {
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");
    if !config_path.exists() {
        fail(
            "game.toml not found!",
            &[
                "The firmware requires a game.toml configuration file".into(),
                "in the simon-firmware directory.".into(),
            ],
        );
    }

    let content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read game.toml", &[e.to_string()]),
    };

    let file: GameFile = match toml::from_str(&content) {
        Ok(file) => file,
        Err(e) => {
            let lines: Vec<String> = e.to_string().lines().map(String::from).collect();
            fail("Invalid game.toml", &lines)
        }
    };

    let mut errors = Vec::new();

    if let Err(e) = file.game.validate() {
        errors.push(format!("[game] {}", describe(e)));
    }
    if file.buttons.debounce_ms > 1000 {
        errors.push("[buttons] debounce_ms must be 0-1000".into());
    }
    if !(0x08..=0x77).contains(&file.display.i2c_address) {
        errors.push("[display] i2c_address must be a 7-bit address (0x08-0x77)".into());
    }

    if !errors.is_empty() {
        fail("Invalid game configuration", &errors);
    }

    file
}

fn describe(error: simon_core::config::ConfigError) -> &'static str {
    use simon_core::config::ConfigError;

    match error {
        ConfigError::NoLevels => "levels_to_complete must be at least 1",
        ConfigError::TooManyLevels => "levels_to_complete exceeds the sequence capacity (32)",
        ConfigError::ZeroEntryTime => "entry_time_limit_ms must be non-zero",
        ConfigError::ZeroMoveTime => "move_time_ms and min_move_time_ms must be non-zero",
        ConfigError::ZeroTone => "tones_hz entries must be non-zero",
        ConfigError::DuplicateTone => "tones_hz entries must be distinct",
    }
}

/// Write the configuration constants to OUT_DIR/game_config.rs
fn generate_config(file: &GameFile) {
    let game = &file.game;
    let [t0, t1, t2, t3] = game.tones_hz;

    let source = format!(
        "// Generated from game.toml by build.rs\n\
         pub const GAME_CONFIG: GameConfig = GameConfig {{\n    \
             levels_to_complete: {},\n    \
             entry_time_limit_ms: {},\n    \
             move_time_ms: {},\n    \
             move_gap_ms: {},\n    \
             round_gap_ms: {},\n    \
             move_time_step_ms: {},\n    \
             min_move_time_ms: {},\n    \
             tones_hz: [{}, {}, {}, {}],\n\
         }};\n\
         pub const BUTTON_DEBOUNCE_MS: u32 = {};\n\
         pub const DISPLAY_ENABLED: bool = {};\n\
         pub const LCD_ADDRESS: u8 = {:#04x};\n",
        game.levels_to_complete,
        game.entry_time_limit_ms,
        game.move_time_ms,
        game.move_gap_ms,
        game.round_gap_ms,
        game.move_time_step_ms,
        game.min_move_time_ms,
        t0,
        t1,
        t2,
        t3,
        file.buttons.debounce_ms,
        file.display.enabled,
        file.display.i2c_address,
    );

    if let Err(e) = fs::write(out_dir().join("game_config.rs"), source) {
        fail("Failed to write game_config.rs", &[e.to_string()]);
    }
}

fn out_dir() -> PathBuf {
    match env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(e) => fail("OUT_DIR not set", &[e.to_string()]),
    }
}

/// Abort the build with a boxed error message
fn fail(title: &str, details: &[String]) -> ! {
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        details
            .iter()
            .map(|line| format!("║  • {:<62} ║", line))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
