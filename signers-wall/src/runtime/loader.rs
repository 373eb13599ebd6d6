use std::error::Error;
use std::fmt;

use log::{error, info, warn};
use rand::Rng;

use crate::names::{NameSequence, prepare_sequence};

/// Pairs a finished load with the request that started it, so a slow
/// response for an old URL cannot replace a newer list.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LoadTicket(pub(crate) u64);

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoadError {
    /// The server answered with a non-success status.
    Status { url: String, status: u16 },

    /// The request or body read failed outright.
    Request { url: String, message: String },

    /// The source was retrieved but holds no names.
    Empty { url: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { url, status } => {
                write!(f, "fetching '{}' returned HTTP {}", url, status)
            }
            Self::Request { url, message } => {
                write!(f, "fetching '{}' failed: {}", url, message)
            }
            Self::Empty { url } => write!(f, "'{}' contains no names", url),
        }
    }
}

impl Error for LoadError {}

/// Turns a fetch result into the sequence to display. Failures are logged
/// and become an empty sequence; nothing is returned to the caller as an
/// error.
pub fn prepare_loaded<R: Rng + ?Sized>(
    url: &str,
    fetched: Result<String, LoadError>,
    repeat: usize,
    rng: &mut R,
) -> NameSequence {
    let text = match fetched {
        Ok(text) => text,
        Err(err) => {
            error!("Failed to load signers: {}", err);
            return NameSequence::empty();
        }
    };

    let sequence = prepare_sequence(&text, repeat, rng);

    if sequence.is_empty() {
        warn!(
            "Failed to load signers: {}",
            LoadError::Empty {
                url: url.to_string()
            }
        );
    } else {
        info!(
            "Loaded {} signers from '{}' ({} entries)",
            sequence.len() / (2 * repeat.max(1)),
            url,
            sequence.len()
        );
    }

    sequence
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn errors_become_empty_sequences() {
        let mut rng = StdRng::seed_from_u64(4);

        let not_found = prepare_loaded(
            "./signers.csv",
            Err(LoadError::Status {
                url: "./signers.csv".to_string(),
                status: 404,
            }),
            20,
            &mut rng,
        );
        assert!(not_found.is_empty());

        let offline = prepare_loaded(
            "./signers.csv",
            Err(LoadError::Request {
                url: "./signers.csv".to_string(),
                message: "NetworkError".to_string(),
            }),
            20,
            &mut rng,
        );
        assert!(offline.is_empty());
    }

    #[test]
    fn successful_text_is_prepared() {
        let mut rng = StdRng::seed_from_u64(4);
        let sequence = prepare_loaded(
            "./signers.csv",
            Ok("name\nAlice\nBob\n".to_string()),
            20,
            &mut rng,
        );
        assert_eq!(sequence.len(), 80);
    }

    #[test]
    fn display_names_the_url_and_cause() {
        let err = LoadError::Status {
            url: "/a.csv".to_string(),
            status: 500,
        };
        assert_eq!(err.to_string(), "fetching '/a.csv' returned HTTP 500");

        let err = LoadError::Empty {
            url: "/a.csv".to_string(),
        };
        assert_eq!(err.to_string(), "'/a.csv' contains no names");
    }
}
