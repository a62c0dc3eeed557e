/// The OS tools the core drives, addressed by interface name.
///
/// Report methods return the tool's combined stdout and stderr. Link and
/// address methods only report whether the tool could be launched; its exit
/// status is deliberately not part of the contract.
pub trait InterfaceRepository {
    /// Live configuration of the interface (`ifconfig <iface>`).
    fn interface_report(&self, iface: &str) -> anyhow::Result<String>;
    /// Burned-in address report (`ethtool -P <iface>`).
    fn permanent_address_report(&self, iface: &str) -> anyhow::Result<String>;
    fn link_down(&self, iface: &str) -> anyhow::Result<()>;
    fn assign_hardware_address(&self, iface: &str, address: &str) -> anyhow::Result<()>;
    fn link_up(&self, iface: &str) -> anyhow::Result<()>;
}
