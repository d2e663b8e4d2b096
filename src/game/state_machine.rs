//! Station race state machine.
//!
//! The machine is a closed sum over the five game states, advanced by a
//! single pure transition function: [`GameState::try_apply`] reports
//! inputs that do not apply to the current phase, while
//! [`GameState::apply`] is the lenient facade that swallows them and
//! hands back the unchanged state. Either way, applying an input never
//! mutates the prior state value.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::entities::{GameConfig, PlayerName, SecretStation, SlotIndex};
use super::states::{Begin, GameOver, Outcome, Setup, Turn, TurnResult};

/// Errors surfaced by the strict transition function
#[derive(Clone, Debug, Deserialize, Eq, Error, PartialEq, Serialize)]
pub enum TransitionError {
    #[error("{input} does not apply during {phase}")]
    Rejected { input: Input, phase: Phase },
    #[error("registration slot {0} is out of bounds")]
    InvalidSlot(SlotIndex),
}

/// Discrete inputs the presentation layer feeds to the machine, one at
/// a time. Only [`Input::RegisterPlayer`] carries a payload.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Input {
    SetupNewGame,
    RegisterPlayer { slot: SlotIndex, name: PlayerName },
    Start,
    GoLeft,
    GoRight,
    GoFirst,
    GoLast,
    GetOffTheTrain,
    NextTurn,
    PlayAgain,
    BeginAgain,
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::SetupNewGame => "setup new game".to_string(),
            Self::RegisterPlayer { slot, name } => {
                if name.trim().is_empty() {
                    format!("clear slot {slot}")
                } else {
                    format!("register {name} at slot {slot}")
                }
            }
            Self::Start => "start".to_string(),
            Self::GoLeft => "go left".to_string(),
            Self::GoRight => "go right".to_string(),
            Self::GoFirst => "go to the first station".to_string(),
            Self::GoLast => "go to the last station".to_string(),
            Self::GetOffTheTrain => "get off the train".to_string(),
            Self::NextTurn => "next turn".to_string(),
            Self::PlayAgain => "play again".to_string(),
            Self::BeginAgain => "begin again".to_string(),
        };
        write!(f, "{repr}")
    }
}

/// Names the active state variant without its data.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Phase {
    Begin,
    Setup,
    Turn,
    TurnResult,
    GameOver,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Begin => "begin",
            Self::Setup => "setup",
            Self::Turn => "a turn",
            Self::TurnResult => "a turn result",
            Self::GameOver => "game over",
        };
        write!(f, "{repr}")
    }
}

/// The full game state, exactly one variant at a time.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum GameState {
    Begin(Begin),
    Setup(Setup),
    Turn(Turn),
    TurnResult(TurnResult),
    GameOver(GameOver),
}

impl From<Begin> for GameState {
    fn from(state: Begin) -> Self {
        Self::Begin(state)
    }
}

impl From<Setup> for GameState {
    fn from(state: Setup) -> Self {
        Self::Setup(state)
    }
}

impl From<Turn> for GameState {
    fn from(state: Turn) -> Self {
        Self::Turn(state)
    }
}

impl From<TurnResult> for GameState {
    fn from(state: TurnResult) -> Self {
        Self::TurnResult(state)
    }
}

impl From<GameOver> for GameState {
    fn from(state: GameOver) -> Self {
        Self::GameOver(state)
    }
}

impl From<Outcome> for GameState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won(game_over) => Self::GameOver(game_over),
            Outcome::Missed(turn_result) => Self::TurnResult(turn_result),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl GameState {
    /// A fresh machine at the entry state.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Begin::new(config).into()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self {
            Self::Begin(_) => Phase::Begin,
            Self::Setup(_) => Phase::Setup,
            Self::Turn(_) => Phase::Turn,
            Self::TurnResult(_) => Phase::TurnResult,
            Self::GameOver(_) => Phase::GameOver,
        }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        match self {
            Self::Begin(begin) => &begin.config,
            Self::Setup(setup) => &setup.config,
            Self::Turn(turn) => &turn.config,
            Self::TurnResult(result) => &result.config,
            Self::GameOver(over) => &over.config,
        }
    }

    /// Strict transition function. Applies `input` to the current state
    /// and returns the next one, or [`TransitionError::Rejected`] when
    /// the input is not valid for the current phase.
    ///
    /// `secret` is consulted exactly once per round start (`Start` and
    /// `PlayAgain`).
    pub fn try_apply(
        &self,
        input: &Input,
        secret: &dyn SecretStation,
    ) -> Result<Self, TransitionError> {
        match (self, input) {
            (Self::Begin(begin), Input::SetupNewGame) => Ok(begin.setup().into()),
            (Self::Setup(setup), Input::RegisterPlayer { slot, name }) => setup
                .register(*slot, name)
                .map(Into::into)
                .ok_or(TransitionError::InvalidSlot(*slot)),
            // Starting without enough players is a plain no-op, the
            // presentation layer's start control just does nothing.
            (Self::Setup(setup), Input::Start) => Ok(setup
                .start(secret)
                .map_or_else(|| setup.clone().into(), Into::into)),
            (Self::Turn(turn), Input::GoLeft) => Ok(turn.go_left().into()),
            (Self::Turn(turn), Input::GoRight) => Ok(turn.go_right().into()),
            (Self::Turn(turn), Input::GoFirst) => Ok(turn.go_first().into()),
            (Self::Turn(turn), Input::GoLast) => Ok(turn.go_last().into()),
            (Self::Turn(turn), Input::GetOffTheTrain) => Ok(turn.get_off_the_train().into()),
            (Self::TurnResult(result), Input::NextTurn) => Ok(result.next_turn().into()),
            (Self::GameOver(over), Input::PlayAgain) => Ok(over.play_again(secret).into()),
            (Self::GameOver(over), Input::BeginAgain) => Ok(over.begin_again().into()),
            _ => Err(TransitionError::Rejected {
                input: input.clone(),
                phase: self.phase(),
            }),
        }
    }

    /// Total transition function: like [`try_apply`](Self::try_apply)
    /// but an input that does not apply is ignored and the state comes
    /// back unchanged.
    #[must_use]
    pub fn apply(&self, input: &Input, secret: &dyn SecretStation) -> Self {
        match self.try_apply(input, secret) {
            Ok(next) => next,
            Err(err) => {
                debug!("input ignored: {err}");
                self.clone()
            }
        }
    }
}
