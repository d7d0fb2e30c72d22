use clap::{error::ErrorKind as ClapErrorKind, CommandFactory};
use log::LevelFilter;
use strum::FromRepr;

use crate::cli::Args;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, FromRepr)]
#[repr(u8)]
pub enum Verbosity {
    #[default]
    Terse,
    Verbose,
    Trace,
}

impl From<Verbosity> for LevelFilter {
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::Terse => LevelFilter::Warn,
            Verbosity::Verbose => LevelFilter::Info,
            Verbosity::Trace => LevelFilter::Trace,
        }
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = clap::Error;

    fn try_from(ctr: u8) -> Result<Self, Self::Error> {
        Self::from_repr(ctr)
            .ok_or_else(|| Args::command().error(ClapErrorKind::TooManyValues, "too verbose"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_counter() {
        assert_eq!(Verbosity::try_from(0u8).unwrap(), Verbosity::Terse);
        assert_eq!(Verbosity::try_from(1u8).unwrap(), Verbosity::Verbose);
        assert_eq!(Verbosity::try_from(2u8).unwrap(), Verbosity::Trace);

        let err = Verbosity::try_from(3u8).unwrap_err();
        assert_eq!(err.kind(), ClapErrorKind::TooManyValues);
    }

    #[test]
    fn level_filter() {
        assert_eq!(LevelFilter::from(Verbosity::Terse), LevelFilter::Warn);
        assert_eq!(LevelFilter::from(Verbosity::Verbose), LevelFilter::Info);
        assert_eq!(LevelFilter::from(Verbosity::Trace), LevelFilter::Trace);
    }
}
