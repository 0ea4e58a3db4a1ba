// src/model/electrons.rs
//
// Ground-state electron configurations. Most elements follow the Aufbau
// (Madelung) filling order; the exceptions are listed explicitly.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orbital {
    S,
    P,
    D,
    F,
}

impl Orbital {
    pub fn capacity(self) -> u32 {
        match self {
            Orbital::S => 2,
            Orbital::P => 6,
            Orbital::D => 10,
            Orbital::F => 14,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Orbital::S => 's',
            Orbital::P => 'p',
            Orbital::D => 'd',
            Orbital::F => 'f',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subshell {
    pub n: u8,
    pub orbital: Orbital,
    pub electrons: u32,
}

impl fmt::Display for Subshell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.n, self.orbital.letter(), superscript(self.electrons))
    }
}

/// Madelung filling order up to 7p (enough for Z = 118).
pub const FILLING_ORDER: [(u8, Orbital); 19] = [
    (1, Orbital::S),
    (2, Orbital::S),
    (2, Orbital::P),
    (3, Orbital::S),
    (3, Orbital::P),
    (4, Orbital::S),
    (3, Orbital::D),
    (4, Orbital::P),
    (5, Orbital::S),
    (4, Orbital::D),
    (5, Orbital::P),
    (6, Orbital::S),
    (4, Orbital::F),
    (5, Orbital::D),
    (6, Orbital::P),
    (7, Orbital::S),
    (5, Orbital::F),
    (6, Orbital::D),
    (7, Orbital::P),
];

/// Maximum electrons drawn on each Bohr ring.
pub const SHELL_CAPACITY: [u32; 7] = [2, 8, 18, 32, 32, 18, 8];

/// Fills subshells in Madelung order. Electrons beyond 7p are dropped.
pub fn aufbau(atomic_number: u32) -> Vec<Subshell> {
    let mut remaining = atomic_number;
    let mut out = Vec::new();
    for &(n, orbital) in FILLING_ORDER.iter() {
        if remaining == 0 {
            break;
        }
        let electrons = remaining.min(orbital.capacity());
        out.push(Subshell { n, orbital, electrons });
        remaining -= electrons;
    }
    out
}

/// Known departures from the Madelung order, as subshell occupancies that
/// replace the Aufbau values.
fn exceptions(symbol: &str) -> &'static [(u8, Orbital, u32)] {
    use Orbital::*;
    match symbol {
        "Cr" => &[(4, S, 1), (3, D, 5)],
        "Cu" => &[(4, S, 1), (3, D, 10)],
        "Nb" => &[(5, S, 1), (4, D, 4)],
        "Mo" => &[(5, S, 1), (4, D, 5)],
        "Ru" => &[(5, S, 1), (4, D, 7)],
        "Rh" => &[(5, S, 1), (4, D, 8)],
        "Pd" => &[(5, S, 0), (4, D, 10)],
        "Ag" => &[(5, S, 1), (4, D, 10)],
        "La" => &[(4, F, 0), (5, D, 1)],
        "Ce" => &[(4, F, 1), (5, D, 1)],
        "Gd" => &[(4, F, 7), (5, D, 1)],
        "Pt" => &[(6, S, 1), (5, D, 9)],
        "Au" => &[(6, S, 1), (5, D, 10)],
        "Ac" => &[(5, F, 0), (6, D, 1)],
        "Th" => &[(5, F, 0), (6, D, 2)],
        "Pa" => &[(5, F, 2), (6, D, 1)],
        "U" => &[(5, F, 3), (6, D, 1)],
        "Np" => &[(5, F, 4), (6, D, 1)],
        "Cm" => &[(5, F, 7), (6, D, 1)],
        "Lr" => &[(6, D, 0), (7, P, 1)],
        _ => &[],
    }
}

fn filling_rank(n: u8, orbital: Orbital) -> usize {
    FILLING_ORDER
        .iter()
        .position(|&(fn_, fo)| fn_ == n && fo == orbital)
        .unwrap_or(FILLING_ORDER.len())
}

/// Ground-state configuration for an element.
pub fn configuration(atomic_number: u32, symbol: &str) -> Vec<Subshell> {
    let mut shells = aufbau(atomic_number);

    for &(n, orbital, electrons) in exceptions(symbol) {
        match shells.iter_mut().find(|s| s.n == n && s.orbital == orbital) {
            Some(s) => s.electrons = electrons,
            None => shells.push(Subshell { n, orbital, electrons }),
        }
    }

    shells.retain(|s| s.electrons > 0);
    shells.sort_by_key(|s| filling_rank(s.n, s.orbital));
    shells
}

/// Space-separated notation, e.g. `1s² 2s² 2p⁶`.
pub fn format_configuration(subshells: &[Subshell]) -> String {
    subshells
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Electrons per principal shell (K, L, M, ...), trailing empties removed.
pub fn shell_occupancy(subshells: &[Subshell]) -> Vec<u32> {
    let max_n = subshells.iter().map(|s| s.n).max().unwrap_or(0) as usize;
    let mut shells = vec![0u32; max_n];
    for s in subshells {
        shells[s.n as usize - 1] += s.electrons;
    }
    while shells.last() == Some(&0) {
        shells.pop();
    }
    shells
}

fn superscript(mut value: u32) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    if value == 0 {
        return DIGITS[0].to_string();
    }
    let mut chars = Vec::new();
    while value > 0 {
        chars.push(DIGITS[(value % 10) as usize]);
        value /= 10;
    }
    chars.iter().rev().collect()
}
