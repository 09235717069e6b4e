//! Tuning parameters that can be set from environment variables.
//!
//! A parameter holds the name of an environment variable and a default value. It is resolved
//! once, on first access, and never changes afterwards:
//!
//! ```
//! use gset::params::EnvParam;
//! static BATCH: EnvParam<u32> = EnvParam::new("GSET_DOC_BATCH", 8);
//!
//! // environment variable not set, the default value is used
//! assert_eq!(BATCH.get(), 8);
//! std::env::set_var("GSET_DOC_BATCH", "64"); // after first read, ignored
//! assert_eq!(BATCH.get(), 8);
//! ```
//!
//! If the variable is set before the first access, its value is used. Values that cannot be
//! parsed are reported with a warning and replaced by the default:
//!
//! ```
//! use gset::params::EnvParam;
//! static LIMIT: EnvParam<usize> = EnvParam::new("GSET_DOC_LIMIT", 4);
//! static RATIO: EnvParam<u8> = EnvParam::new("GSET_DOC_RATIO", 2);
//!
//! std::env::set_var("GSET_DOC_LIMIT", " 17 ");
//! std::env::set_var("GSET_DOC_RATIO", "many");
//! assert_eq!(LIMIT.get(), 17);
//! assert_eq!(RATIO.get(), 2);
//! ```
//!
//! An oversized [`INITIAL_CAPACITY`] is not an error either: sets then start without
//! preallocated room.
//!
//! ```
//! std::env::set_var("GSET_INITIAL_CAPACITY", usize::MAX.to_string());
//! let set = gset::Set::from_array([1u8, 2]);
//! assert_eq!(set.len(), 2);
//! assert!(gset::union([&set, &gset::Set::empty()]).has(&1));
//! ```

use once_cell::sync::OnceCell;
use std::env::VarError;
use std::str::FromStr;

/// Capacity reserved by [`crate::Set::empty`].
pub static INITIAL_CAPACITY: EnvParam<usize> = EnvParam::new("GSET_INITIAL_CAPACITY", 0);

pub struct EnvParam<T> {
    value: OnceCell<T>,
    var: &'static str,
    default: T,
}

impl<T> EnvParam<T> {
    pub const fn new(var: &'static str, default: T) -> EnvParam<T> {
        EnvParam {
            value: OnceCell::new(),
            var,
            default,
        }
    }

    pub fn var(&self) -> &'static str {
        self.var
    }
}

impl<T: FromStr + Clone> EnvParam<T> {
    fn read(&self) -> T {
        self.resolve(std::env::var(self.var))
    }

    /// Value of the parameter given the result of looking up its environment variable.
    fn resolve(&self, lookup: Result<String, VarError>) -> T {
        match lookup {
            Ok(raw) => match raw.trim().parse() {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(var = self.var, value = %raw, "unparsable parameter, using default");
                    self.default.clone()
                }
            },
            Err(VarError::NotPresent) => self.default.clone(),
            Err(err) => {
                tracing::warn!(var = self.var, %err, "unreadable parameter, using default");
                self.default.clone()
            }
        }
    }

    /// Value of the parameter. The environment variable is only looked up on the first call.
    pub fn get(&self) -> T
    where
        T: Copy,
    {
        *self.get_ref()
    }

    pub fn get_ref(&self) -> &T {
        self.value.get_or_init(|| self.read())
    }

    /// Forces the value of the parameter, bypassing the environment.
    ///
    /// Fails, giving back `value`, if the parameter was already initialized (typically because it
    /// was already read).
    pub fn set(&self, value: T) -> Result<(), T> {
        self.value.set(value)
    }
}
