use crate::error::UsageError;
use crate::network::mac::MacAddress;

/// Flags exactly as given on the command line, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    pub interface: Option<String>,
    pub address: Option<String>,
    pub random: bool,
    pub restore: bool,
    pub print_permanent: bool,
    pub print_current: bool,
    pub verbose: bool,
    pub quiet: bool,
}

/// What a single invocation is asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    PrintCurrent,
    PrintPermanent,
    SetExplicit(MacAddress),
    SetRandom,
    Restore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    /// Dumps the interface configuration before and after a change.
    Verbose,
}

/// Validated run configuration. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub interface: String,
    pub intent: Intent,
    pub verbosity: Verbosity,
}

impl Config {
    /// Checks the flag combination and picks the intent.
    ///
    /// Checks run in a fixed order and the first failing one is reported.
    /// When several intents are requested, printing wins over changing and
    /// an explicit address wins over generated ones.
    pub fn from_flags(flags: Flags) -> Result<Self, UsageError> {
        let interface = match flags.interface {
            Some(iface) if !iface.is_empty() => iface,
            _ => return Err(UsageError::MissingInterface),
        };

        let has_address = flags.address.as_deref().is_some_and(|a| !a.is_empty());

        if !has_address
            && !flags.random
            && !flags.restore
            && !flags.print_permanent
            && !flags.print_current
        {
            return Err(UsageError::MissingIntent);
        }
        if has_address && (flags.random || flags.restore) {
            return Err(UsageError::AddressWithGeneratedTarget);
        }
        if flags.random && flags.restore {
            return Err(UsageError::RandomWithRestore);
        }
        if flags.quiet && flags.verbose {
            return Err(UsageError::QuietWithVerbose);
        }

        let intent = if flags.print_current {
            Intent::PrintCurrent
        } else if flags.print_permanent {
            Intent::PrintPermanent
        } else if let Some(address) = flags.address.filter(|a| !a.is_empty()) {
            Intent::SetExplicit(MacAddress::new(address))
        } else if flags.random {
            Intent::SetRandom
        } else {
            Intent::Restore
        };

        let verbosity = match (flags.quiet, flags.verbose) {
            (true, _) => Verbosity::Quiet,
            (_, true) => Verbosity::Verbose,
            _ => Verbosity::Normal,
        };

        Ok(Self {
            interface,
            intent,
            verbosity,
        })
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }
}
