use std::ffi::OsString;
use std::time::{SystemTime, UNIX_EPOCH};

/// Host name used when the real one cannot be determined.
pub const UNKNOWN_HOST: &str = "unknown";

/// Supplies the host-specific inputs of UID generation.
pub trait EntropySource {
    /// Name of the machine creating the world.
    fn host_name(&self) -> String;
    /// Seed for the PRNG that fills the low half of the UID.
    fn random_seed(&self) -> i64;
}

impl<E: EntropySource + ?Sized> EntropySource for &E {
    fn host_name(&self) -> String {
        (**self).host_name()
    }

    fn random_seed(&self) -> i64 {
        (**self).random_seed()
    }
}

/// `raw` as text, or [`UNKNOWN_HOST`] when it is empty or not valid UTF-8.
fn host_name_or_unknown(raw: OsString) -> String {
    raw.into_string()
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_HOST.to_string())
}

/// Real host name plus wall-clock nanoseconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemEntropy;

impl EntropySource for SystemEntropy {
    fn host_name(&self) -> String {
        host_name_or_unknown(gethostname::gethostname())
    }

    fn random_seed(&self) -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as i64)
            .unwrap_or(0)
    }
}

/// Deterministic inputs for reproducible UIDs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedEntropy {
    pub host_name: String,
    pub random_seed: i64,
}

impl FixedEntropy {
    pub fn new(host_name: impl Into<String>, random_seed: i64) -> Self {
        Self {
            host_name: host_name.into(),
            random_seed,
        }
    }
}

impl EntropySource for FixedEntropy {
    fn host_name(&self) -> String {
        self.host_name.clone()
    }

    fn random_seed(&self) -> i64 {
        self.random_seed
    }
}
