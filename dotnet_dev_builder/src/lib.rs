//! Builder module for `dotnet_dev`.
//! See the `dotnet_dev` crate root for the full command surface.
#![deny(missing_docs)]
mod dispatch;
mod environment;
mod error;
mod model;
pub mod setup;
mod synthesis;
mod vocabulary;

pub use dispatch::interface::{ConsoleInterface, UserInterface};
pub use dispatch::{Command, DotnetDev, FAILURE_STATUS};
pub use environment::*;
pub use error::*;
pub use model::*;
pub use synthesis::{synthesize, ArgumentSet, CommandLine};
pub use vocabulary::*;

#[cfg(any(test, feature = "unit_test"))]
pub use dispatch::interface::util;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
