use colored::*;

use crate::terminal::colors;
use cdpmap_common::topology::{Endpoint, UNNAMED_DEVICE};

pub fn device(name: Option<&str>) -> ColoredString {
    match name {
        Some(name) => name.color(colors::DEVICE).bold(),
        None => UNNAMED_DEVICE.color(colors::UNNAMED).italic(),
    }
}

pub fn interface(name: &str) -> ColoredString {
    name.color(colors::INTERFACE)
}

/// `SW2 [Gig 0/24]`
pub fn endpoint(endpoint: &Endpoint) -> ColoredString {
    format!(
        "{} {}{}{}",
        device(endpoint.device()),
        "[".color(colors::SEPARATOR),
        interface(endpoint.interface()),
        "]".color(colors::SEPARATOR)
    )
    .normal()
}

/// Local interface as key, remote endpoint as value.
pub fn link_to_detail(local: &Endpoint, remote: &Endpoint) -> (String, ColoredString) {
    (local.interface().to_string(), endpoint(remote))
}

pub fn node_list<'a>(nodes: impl IntoIterator<Item = Option<&'a str>>) -> ColoredString {
    nodes
        .into_iter()
        .map(|node| device(node).to_string())
        .collect::<Vec<String>>()
        .join(", ")
        .normal()
}
