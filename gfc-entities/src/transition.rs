use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{region::RegionId, time::Timestamp};

/// Direction of a geofence boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    Enter,
    Exit,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            Self::Enter => "enter",
            Self::Exit => "exit",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Error)]
#[error("Invalid transition kind")]
pub struct TransitionKindParseError;

impl FromStr for TransitionKind {
    type Err = TransitionKindParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enter" => Ok(Self::Enter),
            "exit" => Ok(Self::Exit),
            _ => Err(TransitionKindParseError),
        }
    }
}

/// A single Enter/Exit crossing of a geofence boundary.
///
/// Produced and consumed immediately, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionEvent {
    pub region: RegionId,
    pub kind: TransitionKind,
    pub observed_at: Timestamp,
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_kind_round_trip() {
        for kind in [TransitionKind::Enter, TransitionKind::Exit] {
            assert_eq!(kind, kind.to_string().parse().unwrap());
        }
        assert!("leave".parse::<TransitionKind>().is_err());
    }
}
