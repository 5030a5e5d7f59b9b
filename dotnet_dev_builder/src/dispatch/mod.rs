pub(crate) mod interface;
mod printer;

use std::env;
use std::str::FromStr;

use crate::dispatch::interface::{ConsoleInterface, UserInterface};
use crate::dispatch::printer::Printer;
use crate::environment::Environment;
use crate::error::CommandError;
use crate::model::BuildKind;
use crate::setup;
use crate::synthesis::synthesize;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The status reported for any failure.
/// POSIX shells observe this as `255`.
pub const FAILURE_STATUS: i32 = -1;

/// The commands of the front door.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the operating system of this machine.
    GetOs,
    /// Print the architecture of this machine.
    GetArch,
    /// Validate and print the runtime repo path.
    SetRepo,
    /// Validate and print a default operating system.
    SetOs,
    /// Validate and print a default architecture.
    SetArch,
    /// Validate and print a default configuration.
    SetConfig,
    /// Print a build script command line.
    Build,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "getos" => Ok(Command::GetOs),
            "getarch" => Ok(Command::GetArch),
            "setrepo" => Ok(Command::SetRepo),
            "setos" => Ok(Command::SetOs),
            "setarch" => Ok(Command::SetArch),
            "setconfig" => Ok(Command::SetConfig),
            "build" => Ok(Command::Build),
            _ => Err(CommandError::UnknownCommand(value.to_string())),
        }
    }
}

/// The front door: dispatches a command, printing its single value or its error.
pub struct DotnetDev {
    program: String,
    environment: Environment,
    user_interface: Box<dyn UserInterface>,
    printer: Printer,
}

impl DotnetDev {
    /// A front door for the current process: its environment, console, and terminal.
    pub fn process(program: impl Into<String>) -> Self {
        Self::new(
            program,
            Environment::from_process(),
            Box::<ConsoleInterface>::default(),
        )
    }

    /// A front door over the given `environment`, printing through `user_interface`.
    pub fn new(
        program: impl Into<String>,
        environment: Environment,
        user_interface: Box<dyn UserInterface>,
    ) -> Self {
        Self {
            program: program.into(),
            environment,
            user_interface,
            printer: Printer::terminal(),
        }
    }

    /// Run the command named by the first token, with the rest as its arguments.
    ///
    /// On success the value is printed (for the shell to consume) and `Ok(())` is returned.
    /// Otherwise the error is printed and `Err(-1)` is returned; a missing or unknown command is followed by the usage listing.
    pub fn run(self, tokens: &[&str]) -> Result<(), i32> {
        let DotnetDev {
            program,
            environment,
            user_interface,
            printer,
        } = self;

        let command = match tokens.first() {
            Some(token) if !token.trim().is_empty() => Command::from_str(token),
            _ => Err(CommandError::MissingCommand),
        };

        let command = match command {
            Ok(command) => command,
            Err(error) => {
                user_interface.print_error(error.to_string());
                printer.print_usage(program, &*user_interface);
                return Err(FAILURE_STATUS);
            }
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!("Dispatching {command:?} with {} arguments.", tokens.len() - 1);
        }

        match execute(command, &tokens[1..], &environment) {
            Ok(value) => {
                user_interface.print(value);
                Ok(())
            }
            Err(error) => {
                user_interface.print_error(error.to_string());
                Err(FAILURE_STATUS)
            }
        }
    }

    /// Run against the process [`env::args`], exiting the process with `-1` on failure.
    pub fn run_process(self) {
        let tokens: Vec<String> = env::args().skip(1).collect();

        if let Err(status) = self.run(
            tokens
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            std::process::exit(status);
        }
    }
}

fn execute(
    command: Command,
    arguments: &[&str],
    environment: &Environment,
) -> Result<String, CommandError> {
    match command {
        Command::GetOs => setup::operating_system(env::consts::OS).map(str::to_string),
        Command::GetArch => Ok(setup::architecture(env::consts::ARCH)),
        Command::SetRepo => setup::set_repo(arguments),
        Command::SetOs => setup::set_os(arguments),
        Command::SetArch => setup::set_arch(arguments),
        Command::SetConfig => setup::set_config(arguments).map(|configuration| configuration.to_string()),
        Command::Build => build(arguments, environment),
    }
}

fn build(arguments: &[&str], environment: &Environment) -> Result<String, CommandError> {
    let repo = environment.repo().ok_or(CommandError::MissingRepo)?;
    let (kind, tokens) = match arguments.split_first() {
        Some((kind, tokens)) if !kind.trim().is_empty() => (BuildKind::from_str(kind)?, tokens),
        _ => return Err(CommandError::MissingBuildType),
    };

    let command_line = synthesize(kind, repo, tokens, environment)?;
    Ok(command_line.to_string())
}
