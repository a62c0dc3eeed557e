use colored::*;
use tracing::{error, info};

use machange_common::network::mac::MacAddress;
use machange_common::ui::{Stage, UserInterface};

use crate::terminal::{colors, print};

/// Renders controller messages on stdout through the tracing formatter.
pub struct TerminalUi;

fn describe(mac: Option<&MacAddress>) -> ColoredString {
    match mac {
        Some(mac) => mac.as_str().color(colors::MAC_ADDR),
        None => "unknown".color(colors::UNKNOWN),
    }
}

impl UserInterface for TerminalUi {
    fn current_address(&self, mac: Option<&MacAddress>) {
        print::key_value("Current MAC address", ":", describe(mac).to_string());
    }

    fn permanent_address(&self, mac: Option<&MacAddress>) {
        print::key_value("Permanent MAC address", ":", describe(mac).to_string());
    }

    fn address_before_change(&self, mac: Option<&MacAddress>) {
        print::key_value("Current MAC", " =", describe(mac).to_string());
    }

    fn interface_info(&self, stage: Stage, info: Option<&str>) {
        print::banner(stage.title());
        print::print("");
        if let Some(info) = info {
            print::print(info.trim_end());
        }
    }

    fn changing(&self, iface: &str, target: Option<&MacAddress>) {
        info!("Changing MAC address for {} to {}", iface.bold(), describe(target));
    }

    fn change_result(&self, succeeded: bool) {
        if succeeded {
            info!("MAC address changed successfully.");
        } else {
            error!("MAC address change failed.");
        }
    }
}
