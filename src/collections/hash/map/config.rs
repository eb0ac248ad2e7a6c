use crate::collections::error::InvalidValue;

/// The number of buckets a [`HashMap`](super::HashMap) starts with unless configured otherwise.
pub const DEFAULT_BUCKETS: usize = 7;

/// The maximum ratio of entries to buckets that a [`HashMap`](super::HashMap) tolerates before it
/// rehashes into a larger table. Always finite and greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct LoadFactor(f64);

impl LoadFactor {
    pub const DEFAULT: LoadFactor = LoadFactor(0.75);

    /// Creates a LoadFactor, rejecting values that are zero, negative, infinite or NaN.
    ///
    /// # Examples
    /// ```
    /// # use collections_core::collections::hash::map::LoadFactor;
    /// assert_eq!(LoadFactor::new(1.5).map(LoadFactor::get), Ok(1.5));
    /// assert!(LoadFactor::new(0.0).is_err());
    /// assert!(LoadFactor::new(f64::NAN).is_err());
    /// ```
    pub fn new(value: f64) -> Result<LoadFactor, InvalidValue> {
        if value.is_finite() && value > 0.0 {
            Ok(LoadFactor(value))
        } else {
            Err(InvalidValue)
        }
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    /// Returns true if `len` entries spread over `buckets` buckets exceed this load factor.
    pub(crate) fn is_exceeded_by(self, len: usize, buckets: usize) -> bool {
        len as f64 / buckets as f64 > self.0
    }
}

impl Default for LoadFactor {
    fn default() -> Self {
        LoadFactor::DEFAULT
    }
}

/// Construction-time settings for a [`HashMap`](super::HashMap).
///
/// # Examples
/// ```
/// # use collections_core::collections::hash::map::{LoadFactor, MapConfig};
/// let config = MapConfig::default()
///     .with_buckets(2)
///     .with_load_factor(LoadFactor::new(0.5).unwrap());
/// assert_eq!(config.buckets, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    /// The initial bucket count. A count of 0 is treated as 1.
    pub buckets: usize,
    pub load_factor: LoadFactor,
}

impl MapConfig {
    pub const fn with_buckets(self, buckets: usize) -> MapConfig {
        MapConfig { buckets, ..self }
    }

    pub const fn with_load_factor(self, load_factor: LoadFactor) -> MapConfig {
        MapConfig { load_factor, ..self }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            buckets: DEFAULT_BUCKETS,
            load_factor: LoadFactor::DEFAULT,
        }
    }
}
