//! Game state definitions for the station race FSM.
//!
//! Each state is its own struct carrying only the fields valid in that
//! phase of the game lifecycle; the tagged union over them lives in
//! [`state_machine`](crate::game::state_machine). Transition methods
//! consume nothing: they borrow the current state and return the next
//! one, so callers can keep prior states around for history.

use serde::{Deserialize, Serialize};

use crate::game::entities::{Game, GameConfig, Player, Roster, SecretStation, SlotIndex, Station};

/// Entry state - a configured game with nobody registered yet
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Begin {
    pub config: GameConfig,
}

impl Begin {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    /// Opens registration with every slot cleared.
    #[must_use]
    pub fn setup(&self) -> Setup {
        Setup {
            config: self.config,
            roster: Roster::empty(self.config.max_players),
        }
    }
}

impl Default for Begin {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

/// Registration phase - roster slots are being edited
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Setup {
    pub config: GameConfig,
    pub roster: Roster,
}

impl Setup {
    /// Writes a name into a registration slot; blank names clear the
    /// slot. Returns `None` when the slot is out of bounds.
    #[must_use]
    pub fn register(&self, slot: SlotIndex, name: &str) -> Option<Self> {
        let mut next = self.clone();
        next.roster.register(slot, name).then_some(next)
    }

    /// Starts the round if enough players registered, drawing the
    /// secret station once. Returns `None` below `min_players`.
    #[must_use]
    pub fn start(&self, secret: &dyn SecretStation) -> Option<Turn> {
        self.roster.has_enough(self.config.min_players).then(|| Turn {
            config: self.config,
            roster: self.roster.clone(),
            game: Game::start(&self.config, &self.roster, secret),
        })
    }
}

/// Active round - the acting player is choosing a move
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Turn {
    pub config: GameConfig,
    pub roster: Roster,
    pub game: Game,
}

impl Turn {
    /// One station toward the front, stopping at `first_station`.
    #[must_use]
    pub fn go_left(&self) -> Self {
        let station = self.game.current().station;
        self.with_station(if station > self.config.first_station {
            station - 1
        } else {
            self.config.first_station
        })
    }

    /// One station toward the end, stopping at `last_station`.
    #[must_use]
    pub fn go_right(&self) -> Self {
        let station = self.game.current().station;
        self.with_station(if station < self.config.last_station {
            station + 1
        } else {
            self.config.last_station
        })
    }

    #[must_use]
    pub fn go_first(&self) -> Self {
        self.with_station(self.config.first_station)
    }

    #[must_use]
    pub fn go_last(&self) -> Self {
        self.with_station(self.config.last_station)
    }

    /// The acting player declares they are getting off the train:
    /// standing on the secret station wins the round, anywhere else
    /// just reveals the miss.
    #[must_use]
    pub fn get_off_the_train(&self) -> Outcome {
        match self.game.winner() {
            Some(winner) => Outcome::Won(GameOver {
                config: self.config,
                roster: self.roster.clone(),
                winner: winner.clone(),
            }),
            None => Outcome::Missed(TurnResult {
                config: self.config,
                roster: self.roster.clone(),
                game: self.game.clone(),
            }),
        }
    }

    fn with_station(&self, station: Station) -> Self {
        let mut next = self.clone();
        next.game.players[next.game.current_player].station = station;
        next
    }
}

/// Result of [`Turn::get_off_the_train`].
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Outcome {
    Won(GameOver),
    Missed(TurnResult),
}

/// A missed guess being displayed - waiting for acknowledgement
/// before the next player acts
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TurnResult {
    pub config: GameConfig,
    pub roster: Roster,
    pub game: Game,
}

impl TurnResult {
    /// Passes the turn to the next player, wrapping around the roster.
    #[must_use]
    pub fn next_turn(&self) -> Turn {
        let mut game = self.game.clone();
        game.current_player = game.next_player();
        Turn {
            config: self.config,
            roster: self.roster.clone(),
            game,
        }
    }
}

/// Terminal state - somebody got off at the secret station
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameOver {
    pub config: GameConfig,
    pub roster: Roster,
    pub winner: Player,
}

impl GameOver {
    /// Rebuilds a fresh round with the same roster: stations reset,
    /// first player acts, a new secret station is drawn.
    #[must_use]
    pub fn play_again(&self, secret: &dyn SecretStation) -> Turn {
        Turn {
            config: self.config,
            roster: self.roster.clone(),
            game: Game::start(&self.config, &self.roster, secret),
        }
    }

    /// Full reset - only the static configuration survives.
    #[must_use]
    pub fn begin_again(&self) -> Begin {
        Begin::new(self.config)
    }
}
