//! Station race game engine - state model and transition function.
//!
//! This module provides the complete game implementation:
//! - A closed sum type over the five game states
//! - The pure transition function advancing state one input at a time
//! - Registration roster, round data, and the secret-station contract

pub mod constants;
pub mod entities;
pub mod state_machine;
pub mod states;

pub use entities::{
    FixedStation, Game, GameConfig, Player, PlayerName, Roster, SecretStation, SlotIndex, Station,
    UniformStation,
};
pub use state_machine::{GameState, Input, Phase, TransitionError};
pub use states::{Begin, GameOver, Outcome, Setup, Turn, TurnResult};
