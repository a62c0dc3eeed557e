use thiserror::Error;

/// Invalid flag combinations, detected before any OS command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UsageError {
    #[error("Please specify an interface. See --help for more info.")]
    MissingInterface,
    #[error("Specify a new mac address (or use --random or -p). See --help for more info.")]
    MissingIntent,
    #[error("Do not specify address and set -r or -R flags simultaneously.")]
    AddressWithGeneratedTarget,
    #[error("Do not set -r and -R flags simultaneously.")]
    RandomWithRestore,
    #[error("Do not set --quiet and --verbose flags simultaneously.")]
    QuietWithVerbose,
}
