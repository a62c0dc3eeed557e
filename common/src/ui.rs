use crate::network::mac::MacAddress;

/// Point in a change at which the interface configuration is dumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    BeforeUpdate,
    AfterUpdate,
}

impl Stage {
    pub fn title(self) -> &'static str {
        match self {
            Stage::BeforeUpdate => "Before Update Info",
            Stage::AfterUpdate => "After Update Info",
        }
    }
}

/// Everything the controller tells the user. Whether a message is shown at
/// all is decided by the caller; implementations only render.
pub trait UserInterface {
    fn current_address(&self, mac: Option<&MacAddress>);
    fn permanent_address(&self, mac: Option<&MacAddress>);
    /// Address seen right before a change is attempted.
    fn address_before_change(&self, mac: Option<&MacAddress>);
    fn interface_info(&self, stage: Stage, info: Option<&str>);
    fn changing(&self, iface: &str, target: Option<&MacAddress>);
    fn change_result(&self, succeeded: bool);
}
