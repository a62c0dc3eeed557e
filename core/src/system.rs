use std::process::{Command, Output};

use anyhow::Context;
use tracing::debug;

use machange_common::system::InterfaceRepository;

const IFCONFIG: &str = "ifconfig";
const ETHTOOL: &str = "ethtool";

/// Drives `ifconfig` and `ethtool` through child processes.
pub struct IfconfigRepo;

impl IfconfigRepo {
    fn capture(program: &str, args: &[&str]) -> anyhow::Result<String> {
        let output: Output = Command::new(program)
            .args(args)
            .output()
            .with_context(|| format!("failed to run {program}"))?;

        debug!("{program} {} exited with {}", args.join(" "), output.status);

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok(text)
    }

    fn call(program: &str, args: &[&str]) -> anyhow::Result<()> {
        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to run {program}"))?;

        debug!("{program} {} exited with {status}", args.join(" "));
        Ok(())
    }
}

impl InterfaceRepository for IfconfigRepo {
    fn interface_report(&self, iface: &str) -> anyhow::Result<String> {
        Self::capture(IFCONFIG, &[iface])
    }

    fn permanent_address_report(&self, iface: &str) -> anyhow::Result<String> {
        Self::capture(ETHTOOL, &["-P", iface])
    }

    fn link_down(&self, iface: &str) -> anyhow::Result<()> {
        Self::call(IFCONFIG, &[iface, "down"])
    }

    fn assign_hardware_address(&self, iface: &str, address: &str) -> anyhow::Result<()> {
        Self::call(IFCONFIG, &[iface, "hw", "ether", address])
    }

    fn link_up(&self, iface: &str) -> anyhow::Result<()> {
        Self::call(IFCONFIG, &[iface, "up"])
    }
}
