//! `dotnet_dev` is a shell companion for working on a clone of the .NET runtime repo.
//!
//! The runtime repo's build scripts take many parameters, each under a long name, with a different notation per script and per platform.
//! `dotnet_dev` accepts short aliases in whatever notation is at hand, and prints the exact command line to run.
//! It never runs the build itself; the wrapping shell function does that with the printed line.
//!
//! # Usage
//! The shell session first persists its defaults in the environment:
//! ```console
//! $ export DOTNET_DEV_REPO=$(dotnet-dev setrepo ~/src/runtime)
//! $ export DOTNET_DEV_ARCH=$(dotnet-dev getarch)
//! $ export DOTNET_DEV_OS=$(dotnet-dev getos)
//! $ export DOTNET_DEV_CONFIG=$(dotnet-dev setconfig chk)
//! ```
//!
//! Then builds are synthesized from ad-hoc arguments:
//! ```console
//! $ dotnet-dev build main set=clr config=rel config=dbg -subset libs
//! /home/me/src/runtime/build.sh -subset clr+libs -configuration Release,Debug -arch x64 -os linux
//!
//! $ dotnet-dev build tests x64 Checked
//! /home/me/src/runtime/src/tests/build.sh -x64 -Checked -os linux
//!
//! $ dotnet-dev build tests x64 arm64
//! Only one 'arch' value should be specified.
//! ```
//!
//! # Build main
//! Parameters given more than once are merged: `subset` values join with `+`, everything else joins with `,`.
//! A value already present is not repeated.
//! Configuration values are normalized (`dbg`, `chk`, `rel`), and `-p:`/`/p:` MSBuild properties are passed through last.
//!
//! # Build tests
//! Platforms and configurations may be given bare (ex: `x64 Checked`).
//! Every parameter may be given at most once; a repeat is an error.
//! Other script switches (ex: `-ninja`) are passed through, followed by the MSBuild properties.
//!
//! # Library
//! Everything the binary does is available programmatically, see [`synthesize`] and [`DotnetDev`].
//! ```
//! use dotnet_dev::{synthesize, BuildKind, Environment, HostPlatform};
//!
//! let environment = Environment::empty()
//!     .with_arch("x64")
//!     .with_os("linux")
//!     .with_host(HostPlatform::Unix);
//! let command_line = synthesize(BuildKind::Tests, "/r", &["x64", "Checked"], &environment).unwrap();
//! assert_eq!(command_line.to_string(), "/r/src/tests/build.sh -x64 -Checked -os linux");
//! ```
pub use dotnet_dev_builder::*;
