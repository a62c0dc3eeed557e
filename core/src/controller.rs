use rand::Rng;
use tracing::debug;

use machange_common::config::{Config, Intent};
use machange_common::network::mac::MacAddress;
use machange_common::system::InterfaceRepository;
use machange_common::ui::{Stage, UserInterface};

use crate::mutator::InterfaceMutator;
use crate::query::InterfaceQuery;

/// What one run ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    PrintedCurrent(Option<MacAddress>),
    PrintedPermanent(Option<MacAddress>),
    Changed(ChangeReport),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeReport {
    pub before: Option<MacAddress>,
    pub target: Option<MacAddress>,
    pub after: Option<MacAddress>,
    /// Interface configuration around the change, captured in verbose mode.
    pub info_before: Option<String>,
    pub info_after: Option<String>,
}

impl ChangeReport {
    /// Literal comparison of the address read back against the target.
    /// Unknown on either side counts as a failure.
    pub fn succeeded(&self) -> bool {
        matches!((&self.after, &self.target), (Some(after), Some(target)) if after == target)
    }
}

/// Runs a validated [`Config`] against an interface.
pub struct MacChanger<'a> {
    query: InterfaceQuery<'a>,
    mutator: InterfaceMutator<'a>,
    ui: &'a dyn UserInterface,
}

impl<'a> MacChanger<'a> {
    pub fn new(repo: &'a dyn InterfaceRepository, ui: &'a dyn UserInterface) -> Self {
        Self {
            query: InterfaceQuery::new(repo),
            mutator: InterfaceMutator::new(repo),
            ui,
        }
    }

    /// Executes the intent. Query and verification problems are reported to
    /// the user but never turned into errors.
    pub fn run<R: Rng + ?Sized>(&self, cfg: &Config, rng: &mut R) -> Outcome {
        let iface = cfg.interface.as_str();

        let target = match &cfg.intent {
            Intent::PrintCurrent => {
                let mac = self.query.current_address(iface);
                self.ui.current_address(mac.as_ref());
                return Outcome::PrintedCurrent(mac);
            }
            Intent::PrintPermanent => {
                let mac = self.query.permanent_address(iface);
                self.ui.permanent_address(mac.as_ref());
                return Outcome::PrintedPermanent(mac);
            }
            Intent::SetExplicit(mac) => {
                if !MacAddress::looks_valid(mac.as_str()) {
                    debug!("{mac} does not look like a MAC address, passing it on anyway");
                }
                Some(mac.clone())
            }
            Intent::SetRandom => Some(MacAddress::generate_random_with(rng)),
            Intent::Restore => self.query.permanent_address(iface),
        };

        Outcome::Changed(self.change(cfg, target))
    }

    fn change(&self, cfg: &Config, target: Option<MacAddress>) -> ChangeReport {
        let iface = cfg.interface.as_str();

        let before = self.query.current_address(iface);
        if !cfg.is_quiet() && !cfg.is_verbose() {
            self.ui.address_before_change(before.as_ref());
        }
        let info_before = if cfg.is_verbose() {
            let info = self.query.interface_info(iface);
            self.ui.interface_info(Stage::BeforeUpdate, info.as_deref());
            info
        } else {
            None
        };

        if !cfg.is_quiet() {
            self.ui.changing(iface, target.as_ref());
        }
        self.mutator.set_address(iface, target.as_ref());

        let after = self.query.current_address(iface);
        let info_after = if cfg.is_verbose() {
            let info = self.query.interface_info(iface);
            self.ui.interface_info(Stage::AfterUpdate, info.as_deref());
            info
        } else {
            None
        };

        let report = ChangeReport {
            before,
            target,
            after,
            info_before,
            info_after,
        };
        if !cfg.is_quiet() {
            self.ui.change_result(report.succeeded());
        }
        report
    }
}
