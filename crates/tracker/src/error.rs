use std::{error::Error, fmt};

/// Errors raised while polling feeds and updating map state. None of these
/// is fatal: a failed chunk or distance lookup only means the affected
/// markers keep their last-known-good state until the next cycle.
#[derive(Debug)]
pub enum TrackerError {
    /// The request failed or timed out before a usable response arrived.
    Transport(reqwest::Error),
    /// The response arrived but did not have the expected shape.
    Malformed(String),
    /// An observation references a feed id that was never configured.
    UnknownFeed(String),
}

impl fmt::Display for TrackerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Transport(why) => write!(f, "transport failure: {}", why),
            Self::Malformed(why) => write!(f, "malformed payload: {}", why),
            Self::UnknownFeed(id) => {
                write!(f, "observation for unconfigured feed '{}'", id)
            }
        }
    }
}

impl Error for TrackerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(why) => Some(why),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TrackerError {
    fn from(why: reqwest::Error) -> Self {
        if why.is_decode() {
            Self::Malformed(why.to_string())
        } else {
            Self::Transport(why)
        }
    }
}

pub type TrackerResult<T> = Result<T, TrackerError>;
