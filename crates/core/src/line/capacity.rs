use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// Weekly capacity of each machine on the line, in meters.
const CAPACITIES_METERS: &[(&str, u64)] = &[
    ("Magazzino Merce a Disporre", 4_000_000),
    ("Arrotolatura", 100_000),
    ("Bruciapelo", 250_000),
    ("Stoccaggio per maturazione", 250_000),
    ("Candeggio Naturale / Lavaggio", 210_000),
    ("Bianco ottico", 280_000),
    ("Ram", 490_000),
    ("Garze", 55_000),
    ("Tintoria Foulard", 80_000),
    ("Stoccaggio", 80_000),
    ("Lavaggio", 80_000),
    ("Asciugamento per finissaggio", 20_000),
    ("Garzatrice", 10_000),
    ("Ram Finissaggio", 280_000),
    ("Calandra", 80_000),
    ("Falda", 50_000),
    ("Specola/Piegatrice/Conf Pez.", 120_000),
    ("Spedizione", 600_000),
];

/// The line's capacity table, built once on first use.
pub static MACHINE_CAPACITIES: Lazy<MachineCapacityTable> =
    Lazy::new(|| MachineCapacityTable::new(CAPACITIES_METERS));

/// A machine and its capacity in meters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Machine {
    pub name: &'static str,
    pub capacity: u64,
}

/// Ordered, read-only mapping from canonical machine name to capacity.
///
/// Holds a lowercase index next to the entries so free-text machine names
/// resolve without scanning.
#[derive(Debug)]
pub struct MachineCapacityTable {
    entries: &'static [(&'static str, u64)],
    by_lowercase: HashMap<String, usize>,
}

impl MachineCapacityTable {
    pub fn new(entries: &'static [(&'static str, u64)]) -> Self {
        let mut by_lowercase = HashMap::with_capacity(entries.len());
        for (i, (name, _)) in entries.iter().enumerate() {
            // first spelling wins if two names differ only by case
            by_lowercase.entry(name.to_lowercase()).or_insert(i);
        }
        Self {
            entries,
            by_lowercase,
        }
    }

    /// Machines in table order.
    pub fn machines(&self) -> impl Iterator<Item = Machine> + '_ {
        self.entries
            .iter()
            .map(|&(name, capacity)| Machine { name, capacity })
    }

    /// Capacity of a machine by its exact canonical name.
    pub fn capacity(&self, name: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, capacity)| capacity)
    }

    /// Canonical name matching `name` case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<&'static str> {
        self.by_lowercase
            .get(&name.to_lowercase())
            .map(|&i| self.entries[i].0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
