//! Default configuration values shared by hosts and tests.

use super::entities::Station;

pub const DEFAULT_FIRST_STATION: Station = 1;
pub const DEFAULT_LAST_STATION: Station = 7;
pub const DEFAULT_MIN_PLAYERS: usize = 2;
pub const DEFAULT_MAX_PLAYERS: usize = 4;
