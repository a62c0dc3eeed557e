use tracing::debug;

use machange_common::network::mac::MacAddress;
use machange_common::system::InterfaceRepository;

/// Write side of an interface.
pub struct InterfaceMutator<'a> {
    repo: &'a dyn InterfaceRepository,
}

impl<'a> InterfaceMutator<'a> {
    pub fn new(repo: &'a dyn InterfaceRepository) -> Self {
        Self { repo }
    }

    /// Runs down, assign, up in that order. A failing step never stops the
    /// following ones; callers verify by reading the address back.
    ///
    /// An unknown address is handed to the tool as an empty argument.
    pub fn set_address(&self, iface: &str, mac: Option<&MacAddress>) {
        let address = mac.map_or("", MacAddress::as_str);

        if let Err(e) = self.repo.link_down(iface) {
            debug!("{e:#}");
        }
        if let Err(e) = self.repo.assign_hardware_address(iface, address) {
            debug!("{e:#}");
        }
        if let Err(e) = self.repo.link_up(iface) {
            debug!("{e:#}");
        }
    }
}
