use seat_shuffle::prelude::{Member, Roster, RosterError};

/// Preferred and avoided peers for the built-in class of 36.
const CLASS: &[(&str, &[&str], &[&str])] = &[
    ("Alice", &["Bob", "Charlie", "David"], &[]),
    ("Bob", &["Alice"], &["Yara", "Tina"]),
    ("Charlie", &["Alice", "Uma", "Chloe"], &[]),
    ("David", &["Alice", "Bob", "Charlie"], &[]),
    ("Eve", &["Frank", "Grace", "Hannah", "Ivy"], &["Paul", "Charlie"]),
    ("Frank", &["Alice", "Bob", "Tina", "Jack"], &["Kate"]),
    ("Grace", &["Charlie"], &["Violet"]),
    ("Hannah", &["Jack", "Uma", "Chloe", "Harry"], &["Erick"]),
    ("Ivy", &["Charlie"], &[]),
    ("Jack", &["Bob", "Alice", "David"], &["Tina", "Ruby"]),
    ("Kate", &["Frank", "Leo", "Gina"], &[]),
    ("Leo", &["Isla", "Jack", "Frank", "Ivy"], &[]),
    ("Mia", &["Ruby", "Uma"], &[]),
    ("Nina", &["Bob"], &["Ava"]),
    ("Oscar", &["Violet"], &[]),
    ("Paul", &["Grace"], &["Charlie"]),
    ("Quinn", &["Tina"], &[]),
    ("Ruby", &["Hannah", "Grace", "Kate"], &[]),
    ("Sam", &["Tina", "Gina", "Paul", "Kate"], &[]),
    ("Tina", &["Yara", "Harry"], &[]),
    ("Uma", &["Alice"], &[]),
    ("Violet", &["Uma", "Oscar"], &["Frank", "Ivy"]),
    ("Will", &["Gina", "Eve", "Quinn", "Alice"], &[]),
    ("Xander", &["Gina", "Ruby"], &[]),
    ("Yara", &["Ben", "Hannah"], &[]),
    ("Zack", &["Nina", "Paul", "Frank"], &[]),
    ("Ava", &["Paul", "Sam", "Oscar", "Xander"], &[]),
    ("Ben", &["Ava", "Harry", "Nina", "Xander"], &["Ava"]),
    ("Chloe", &["Sam", "Ben"], &["Gina", "Quinn"]),
    ("Dylan", &["Hannah", "Bob"], &[]),
    ("Ellie", &["Quinn", "Alice", "Tina"], &[]),
    ("Finn", &["Mia", "Jack", "Ellie", "Chloe"], &[]),
    ("Gina", &["Nina", "Tina", "Jack"], &["Ruby"]),
    ("Harry", &["Sam", "Nina"], &[]),
    ("Isla", &["Ava", "David", "Violet"], &[]),
    ("Erick", &["Ben", "Xander"], &[]),
];

pub fn demo_roster() -> Result<Roster, RosterError> {
    Roster::new(
        CLASS
            .iter()
            .map(|(id, preferences, avoids)| {
                Member::new(*id, preferences.iter().copied(), avoids.iter().copied())
            })
            .collect(),
    )
}
