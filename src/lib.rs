//! # Station Race
//!
//! A turn-based guessing game implemented as a type-safe finite state
//! machine. Players register, take turns moving a token along a line of
//! numbered stations, and try to be the first to get off the train
//! exactly on a hidden secret station.
//!
//! ## Architecture
//!
//! The engine is one pure transition function over a closed sum of five
//! game states:
//!
//! - **Begin**: fresh configuration, nobody registered
//! - **Setup**: registration slots being edited
//! - **Turn**: the acting player is choosing a move
//! - **TurnResult**: a missed guess awaiting acknowledgement
//! - **GameOver**: terminal, holds the winner
//!
//! Each call to [`GameState::apply`] (or the strict
//! [`GameState::try_apply`]) takes one input and returns a new state
//! value without touching the old one, so hosts get history tracking
//! and time-travel for free. The secret station is drawn through the
//! injectable [`SecretStation`] trait, once per round start.
//!
//! ## Example
//!
//! ```
//! use station_race::{FixedStation, GameState, Input, Phase};
//!
//! let secret = FixedStation(3);
//! let mut state = GameState::default();
//! for input in [
//!     Input::SetupNewGame,
//!     Input::RegisterPlayer { slot: 0, name: "Ada".into() },
//!     Input::RegisterPlayer { slot: 1, name: "Grace".into() },
//!     Input::Start,
//! ] {
//!     state = state.apply(&input, &secret);
//! }
//! assert_eq!(state.phase(), Phase::Turn);
//! ```

/// Core game logic, entities, and state machine.
pub mod game;
pub use game::{
    Begin, FixedStation, Game, GameConfig, GameOver, GameState, Input, Outcome, Phase, Player,
    PlayerName, Roster, SecretStation, Setup, SlotIndex, Station, TransitionError, Turn,
    TurnResult, UniformStation,
    constants::{
        self, DEFAULT_FIRST_STATION, DEFAULT_LAST_STATION, DEFAULT_MAX_PLAYERS,
        DEFAULT_MIN_PLAYERS,
    },
};
