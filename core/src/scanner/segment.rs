//! Field segmentation of one neighbor line.
//!
//! The line is split on whitespace and fields are assigned by position:
//!
//! | field             | tokens                                      |
//! |-------------------|---------------------------------------------|
//! | remote device id  | 1                                           |
//! | local interface   | 2                                           |
//! | hold time         | 1                                           |
//! | capability        | 1 or more, as few as possible               |
//! | platform          | 1                                           |
//! | remote interface  | 2, the second ending in `<digits>/<digits>` |
//!
//! Anything after the remote interface is ignored.

/// remote id + local interface + hold time + capability + platform + remote interface
const MIN_TOKENS: usize = 8;
const CAPABILITY_START: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRow<'a> {
    pub remote_device: &'a str,
    pub local_interface: String,
    pub hold_time: &'a str,
    pub capability: Vec<&'a str>,
    pub platform: &'a str,
    pub remote_interface: String,
}

/// Segments `line` into a [`NeighborRow`], or `None` when it is not one.
pub fn segment(line: &str, strict_hold_time: bool) -> Option<NeighborRow<'_>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return None;
    }

    let hold_time = tokens[3];
    if strict_hold_time && !is_numeric(hold_time) {
        return None;
    }

    // Smallest platform position wins, so the capability run stays as short as possible.
    let platform_at = (CAPABILITY_START + 1..=tokens.len() - 3)
        .find(|&pos| ends_in_port_number(tokens[pos + 2]))?;

    Some(NeighborRow {
        remote_device: tokens[0],
        local_interface: join_pair(tokens[1], tokens[2]),
        hold_time,
        capability: tokens[CAPABILITY_START..platform_at].to_vec(),
        platform: tokens[platform_at],
        remote_interface: join_pair(tokens[platform_at + 1], tokens[platform_at + 2]),
    })
}

fn join_pair(kind: &str, port: &str) -> String {
    format!("{kind} {port}")
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// `0/24`, `1/0/24` and `Gi1/0` qualify; `WS-C2960`, `0/` and `/24` do not.
fn ends_in_port_number(token: &str) -> bool {
    let Some((head, tail)) = token.rsplit_once('/') else {
        return false;
    };
    is_numeric(tail) && head.bytes().last().is_some_and(|b| b.is_ascii_digit())
}
