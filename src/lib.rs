#![allow(clippy::redundant_field_names)]

pub use args::{Args, Config};
pub use error::{Error, Result};

pub use ping::{Echo, Exchange, Icmp};
pub use ping::{Probe, Series, Session, Target};

pub use resolve::{resolve, Lookup, SystemLookup};

pub use sonar::Sonar;

pub use stats::{Spread, Summary};

pub mod args;
pub mod ping;
pub mod resolve;
pub mod schedule;
pub mod stats;

mod error;
mod sonar;
