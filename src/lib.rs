//! Gatefall - Idle RPG Progression Library
//!
//! This module exposes the game logic for testing and the simulator binary.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod battle;
pub mod build_info;
pub mod companions;
pub mod core;
pub mod economy;
pub mod gacha;
pub mod idle;
pub mod items;
pub mod player;
pub mod simulator;
pub mod skills;
