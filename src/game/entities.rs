use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::constants::{
    DEFAULT_FIRST_STATION, DEFAULT_LAST_STATION, DEFAULT_MAX_PLAYERS, DEFAULT_MIN_PLAYERS,
};

/// A position on the track. Valid stations lie within
/// `[first_station, last_station]` of the active [`GameConfig`].
pub type Station = u32;

/// Index into the registration roster.
pub type SlotIndex = usize;

pub type PlayerName = String;

/// Static game configuration, fixed for the lifetime of a game.
///
/// Invariants: `first_station <= last_station` and
/// `2 <= min_players <= max_players`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GameConfig {
    pub first_station: Station,
    pub last_station: Station,
    pub min_players: usize,
    pub max_players: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_FIRST_STATION,
            DEFAULT_LAST_STATION,
            DEFAULT_MIN_PLAYERS,
            DEFAULT_MAX_PLAYERS,
        )
    }
}

impl GameConfig {
    /// # Panics
    ///
    /// In debug builds, panics when the configuration invariants are
    /// violated.
    #[must_use]
    pub const fn new(
        first_station: Station,
        last_station: Station,
        min_players: usize,
        max_players: usize,
    ) -> Self {
        debug_assert!(first_station <= last_station);
        debug_assert!(2 <= min_players && min_players <= max_players);
        Self {
            first_station,
            last_station,
            min_players,
            max_players,
        }
    }

    /// All station numbers on the track, in order.
    pub fn stations(&self) -> impl Iterator<Item = Station> + use<> {
        self.first_station..=self.last_station
    }

    /// Clamps a station to the track.
    #[must_use]
    pub const fn clamp_station(&self, station: Station) -> Station {
        if station < self.first_station {
            self.first_station
        } else if station > self.last_station {
            self.last_station
        } else {
            station
        }
    }
}

/// Source of the secret station drawn at the start of each round.
///
/// Injected into the state machine so hosts and tests control the draw;
/// the engine invokes it exactly once per round start.
pub trait SecretStation {
    fn draw(&self, config: &GameConfig) -> Station;
}

/// Draws uniformly over `[first_station, last_station]` inclusive.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformStation;

impl SecretStation for UniformStation {
    fn draw(&self, config: &GameConfig) -> Station {
        rand::rng().random_range(config.first_station..=config.last_station)
    }
}

/// Always draws the same station. Useful for deterministic tests.
#[derive(Clone, Copy, Debug)]
pub struct FixedStation(pub Station);

impl SecretStation for FixedStation {
    fn draw(&self, config: &GameConfig) -> Station {
        config.clamp_station(self.0)
    }
}

/// Registration slots edited during setup. Slot count is fixed at
/// `max_players`; an empty string marks an unregistered slot.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Roster(Vec<PlayerName>);

impl Roster {
    #[must_use]
    pub fn empty(max_players: usize) -> Self {
        Self(vec![PlayerName::new(); max_players])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Writes a name into a slot. Blank or whitespace-only names clear
    /// the slot instead. Returns false when the slot is out of bounds.
    pub fn register(&mut self, slot: SlotIndex, name: &str) -> bool {
        let Some(entry) = self.0.get_mut(slot) else {
            return false;
        };
        *entry = if name.trim().is_empty() {
            PlayerName::new()
        } else {
            name.to_string()
        };
        true
    }

    #[must_use]
    pub fn get(&self, slot: SlotIndex) -> Option<&str> {
        self.0.get(slot).map(String::as_str)
    }

    /// Registered names in slot order, skipping empty slots.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn registered(&self) -> usize {
        self.names().count()
    }

    #[must_use]
    pub fn has_enough(&self, min_players: usize) -> bool {
        self.registered() >= min_players
    }
}

/// A player in an active round.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Player {
    pub name: PlayerName,
    pub station: Station,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at station {}", self.name, self.station)
    }
}

/// Round data. The roster of players is fixed once the round starts;
/// only stations and the turn cursor change until the round ends.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Game {
    pub players: Vec<Player>,
    pub current_player: usize,
    pub secret_station: Station,
}

impl Game {
    /// Builds a fresh round: everyone starts at the first station and
    /// the first registered player acts first.
    #[must_use]
    pub fn start(config: &GameConfig, roster: &Roster, secret: &dyn SecretStation) -> Self {
        Self {
            players: roster
                .names()
                .map(|name| Player {
                    name: name.to_string(),
                    station: config.first_station,
                })
                .collect(),
            current_player: 0,
            secret_station: secret.draw(config),
        }
    }

    pub fn current(&self) -> &Player {
        &self.players[self.current_player]
    }

    pub fn is_current(&self, player: usize) -> bool {
        self.current_player == player
    }

    /// The acting player, if they are standing on the secret station.
    /// A player only wins by getting off the train here.
    pub fn winner(&self) -> Option<&Player> {
        let player = self.current();
        (player.station == self.secret_station).then_some(player)
    }

    /// Index of the player acting after the current one.
    pub fn next_player(&self) -> usize {
        (self.current_player + 1) % self.players.len()
    }
}
