use std::cell::RefCell;

use anyhow::bail;
use machange_common::config::{Config, Flags};
use machange_common::network::mac::MacAddress;
use machange_common::system::InterfaceRepository;
use machange_common::ui::{Stage, UserInterface};

/// An interface that behaves like `ifconfig`/`ethtool` would, and records
/// every command issued against it.
pub struct FakeInterface {
    pub name: &'static str,
    pub current: RefCell<String>,
    pub permanent: Option<&'static str>,
    /// The driver silently keeps the old address.
    pub rejects_changes: bool,
    /// `ifconfig` cannot be launched at all.
    pub tools_missing: bool,
    pub calls: RefCell<Vec<String>>,
}

impl FakeInterface {
    pub fn new(name: &'static str, current: &str, permanent: Option<&'static str>) -> Self {
        Self {
            name,
            current: RefCell::new(current.to_owned()),
            permanent,
            rejects_changes: false,
            tools_missing: false,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl InterfaceRepository for FakeInterface {
    fn interface_report(&self, iface: &str) -> anyhow::Result<String> {
        self.record(format!("ifconfig {iface}"));
        if self.tools_missing {
            bail!("failed to run ifconfig");
        }
        if iface != self.name {
            return Ok(format!("{iface}: error fetching interface information: Device not found\n"));
        }

        let current = self.current.borrow();
        let mut report = format!(
            "{iface}: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500\n        \
             inet 192.168.0.32  netmask 255.255.255.0  broadcast 192.168.0.255\n"
        );
        if !current.is_empty() {
            report.push_str(&format!("        ether {current}  txqueuelen 1000  (Ethernet)\n"));
        }
        Ok(report)
    }

    fn permanent_address_report(&self, iface: &str) -> anyhow::Result<String> {
        self.record(format!("ethtool -P {iface}"));
        match self.permanent {
            Some(mac) if iface == self.name => Ok(format!("Permanent address: {mac}\n")),
            _ => Ok("Cannot get permanent address: Operation not supported\n".to_owned()),
        }
    }

    fn link_down(&self, iface: &str) -> anyhow::Result<()> {
        self.record(format!("ifconfig {iface} down"));
        if self.tools_missing {
            bail!("failed to run ifconfig");
        }
        Ok(())
    }

    fn assign_hardware_address(&self, iface: &str, address: &str) -> anyhow::Result<()> {
        self.record(format!("ifconfig {iface} hw ether {address}"));
        if self.tools_missing {
            bail!("failed to run ifconfig");
        }
        if iface == self.name && !self.rejects_changes && !address.is_empty() {
            *self.current.borrow_mut() = address.to_owned();
        }
        Ok(())
    }

    fn link_up(&self, iface: &str) -> anyhow::Result<()> {
        self.record(format!("ifconfig {iface} up"));
        if self.tools_missing {
            bail!("failed to run ifconfig");
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Current(Option<String>),
    Permanent(Option<String>),
    Before(Option<String>),
    Info(Stage, bool),
    Changing(String, Option<String>),
    Result(bool),
}

#[derive(Default)]
pub struct RecordingUi {
    pub shown: RefCell<Vec<Shown>>,
}

impl RecordingUi {
    pub fn shown(&self) -> Vec<Shown> {
        self.shown.borrow().clone()
    }
}

fn text(mac: Option<&MacAddress>) -> Option<String> {
    mac.map(|m| m.as_str().to_owned())
}

impl UserInterface for RecordingUi {
    fn current_address(&self, mac: Option<&MacAddress>) {
        self.shown.borrow_mut().push(Shown::Current(text(mac)));
    }

    fn permanent_address(&self, mac: Option<&MacAddress>) {
        self.shown.borrow_mut().push(Shown::Permanent(text(mac)));
    }

    fn address_before_change(&self, mac: Option<&MacAddress>) {
        self.shown.borrow_mut().push(Shown::Before(text(mac)));
    }

    fn interface_info(&self, stage: Stage, info: Option<&str>) {
        self.shown.borrow_mut().push(Shown::Info(stage, info.is_some()));
    }

    fn changing(&self, iface: &str, target: Option<&MacAddress>) {
        self.shown.borrow_mut().push(Shown::Changing(iface.to_owned(), text(target)));
    }

    fn change_result(&self, succeeded: bool) {
        self.shown.borrow_mut().push(Shown::Result(succeeded));
    }
}

pub fn config(args: Flags) -> Config {
    Config::from_flags(args).unwrap()
}

pub fn on(iface: &str) -> Flags {
    Flags {
        interface: Some(iface.to_owned()),
        ..Flags::default()
    }
}

pub fn strs(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}
