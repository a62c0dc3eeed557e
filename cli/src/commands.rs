use clap::Parser;
use clap::error::ErrorKind;

use machange_common::config::Flags;
use machange_common::error::UsageError;

#[derive(Parser, Debug)]
#[command(name = "machange", version, args_override_self = true)]
#[command(about = "Change or inspect the MAC address of a network interface.")]
#[command(
    long_about = "Change or inspect the MAC address of a network interface.\n\n\
                  Requires --interface and one of --address, --random, \
                  --restore-permanent-address, --print-current-address or \
                  --print-permanent-address."
)]
pub struct CommandLine {
    /// Interface to change MAC address. e.g: eth0, wlan0
    #[arg(short, long, value_name = "NAME")]
    pub interface: Option<String>,

    /// New MAC address in the form 11:22:33:44:55:66
    #[arg(short, long, value_name = "xx:xx:xx:xx:xx:xx")]
    pub address: Option<String>,

    /// Generate a random locally administered MAC address
    #[arg(short, long)]
    pub random: bool,

    /// Restore the permanent MAC address of the interface
    #[arg(short = 'R', long = "restore-permanent-address")]
    pub restore: bool,

    /// Print the permanent MAC address of the interface
    #[arg(short = 'P', long = "print-permanent-address")]
    pub print_permanent: bool,

    /// Print the current MAC address of the interface
    #[arg(short = 'p', long = "print-current-address")]
    pub print_current: bool,

    /// Print interface info before and after changing the address
    #[arg(short, long)]
    pub verbose: bool,

    /// Turn off all progress and result messages
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_flags(self) -> Flags {
        Flags {
            interface: self.interface,
            address: self.address,
            random: self.random,
            restore: self.restore,
            print_permanent: self.print_permanent,
            print_current: self.print_current,
            verbose: self.verbose,
            quiet: self.quiet,
        }
    }
}

pub fn usage_error_kind(err: UsageError) -> ErrorKind {
    match err {
        UsageError::MissingInterface | UsageError::MissingIntent => {
            ErrorKind::MissingRequiredArgument
        }
        UsageError::AddressWithGeneratedTarget
        | UsageError::RandomWithRestore
        | UsageError::QuietWithVerbose => ErrorKind::ArgumentConflict,
    }
}
