use tracing::{debug, error};

use machange_common::network::mac::MacAddress;
use machange_common::system::InterfaceRepository;

/// Read side of an interface. Every lookup fails soft: problems are logged
/// and surface as `None`, never as an error.
pub struct InterfaceQuery<'a> {
    repo: &'a dyn InterfaceRepository,
}

impl<'a> InterfaceQuery<'a> {
    pub fn new(repo: &'a dyn InterfaceRepository) -> Self {
        Self { repo }
    }

    pub fn current_address(&self, iface: &str) -> Option<MacAddress> {
        let mac = self.interface_info(iface).and_then(|report| MacAddress::extract(&report));
        if mac.is_none() {
            error!("Could not read MAC result.");
        }
        mac
    }

    pub fn permanent_address(&self, iface: &str) -> Option<MacAddress> {
        let mac = match self.repo.permanent_address_report(iface) {
            Ok(report) => MacAddress::extract(&report),
            Err(e) => {
                debug!("{e:#}");
                None
            }
        };
        if mac.is_none() {
            error!("Could not read original MAC result.");
        }
        mac
    }

    /// Raw configuration text of the interface.
    pub fn interface_info(&self, iface: &str) -> Option<String> {
        match self.repo.interface_report(iface) {
            Ok(report) => Some(report),
            Err(e) => {
                debug!("{e:#}");
                None
            }
        }
    }
}
