//! Compile-time configuration
//!
//! Generated by build.rs from game.toml, which is validated there. Edit
//! game.toml and rebuild to customize.

use simon_core::config::GameConfig;

include!(concat!(env!("OUT_DIR"), "/game_config.rs"));
