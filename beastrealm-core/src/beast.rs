//! Beast summaries as returned by `/beast/list`, plus aptitude lookup.
//!
//! Beast payloads are not uniform: aptitudes may sit under `aptitude`,
//! `aptitudes`, `attrs` or the root object, and under snake, camel or
//! shorthand keys. Each [`Aptitude`] carries its explicit alias table.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const UNKNOWN_BEAST: &str = "未知幻兽";

/// Containers searched for aptitude values, in order, before the root object.
const APTITUDE_SECTIONS: [&str; 3] = ["aptitude", "aptitudes", "attrs"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeastSummary {
    pub id: Value,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub realm: Option<String>,
}

impl BeastSummary {
    /// Ids arrive as numbers or strings; compare on their text form.
    #[must_use]
    pub fn id_text(&self) -> String {
        match &self.id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// `name-realm`, or just `name` when the realm is missing.
#[must_use]
pub fn beast_label(beast: Option<&BeastSummary>) -> String {
    match beast {
        None => UNKNOWN_BEAST.to_string(),
        Some(BeastSummary {
            name,
            realm: Some(realm),
            ..
        }) if !realm.is_empty() => format!("{name}-{realm}"),
        Some(beast) => beast.name.clone(),
    }
}

#[must_use]
pub fn find_beast<'a>(beasts: &'a [BeastSummary], id: &str) -> Option<&'a BeastSummary> {
    if id.is_empty() {
        return None;
    }
    beasts.iter().find(|beast| beast.id_text() == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Aptitude {
    Hp,
    Speed,
    PhysicalAttack,
    PhysicalDefense,
    MagicAttack,
    MagicDefense,
}

impl Aptitude {
    pub const ALL: [Self; 6] = [
        Self::Hp,
        Self::Speed,
        Self::PhysicalAttack,
        Self::PhysicalDefense,
        Self::MagicAttack,
        Self::MagicDefense,
    ];

    /// Canonical server field name.
    #[must_use]
    pub const fn key(self) -> &'static str {
        self.aliases()[0]
    }

    /// Every spelling seen in beast payloads, canonical first.
    #[must_use]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Hp => &["hp_aptitude", "hpAptitude", "HP_APTITUDE", "hp"],
            Self::Speed => &["speed_aptitude", "speedAptitude", "SPEED_APTITUDE", "speed"],
            Self::PhysicalAttack => &[
                "physical_atk_aptitude",
                "physicalAtkAptitude",
                "PHYSICAL_ATK_APTITUDE",
                "physical",
            ],
            Self::PhysicalDefense => &[
                "physical_def_aptitude",
                "physicalDefAptitude",
                "PHYSICAL_DEF_APTITUDE",
                "physical_defense",
                "physicalDefense",
            ],
            Self::MagicAttack => &[
                "magic_atk_aptitude",
                "magicAtkAptitude",
                "MAGIC_ATK_APTITUDE",
                "magic",
            ],
            Self::MagicDefense => &[
                "magic_def_aptitude",
                "magicDefAptitude",
                "MAGIC_DEF_APTITUDE",
                "magic_defense",
                "magicDefense",
            ],
        }
    }

    /// Look an aptitude up by any of its aliases.
    #[must_use]
    pub fn from_alias(alias: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|apt| apt.aliases().iter().any(|known| *known == alias))
    }
}

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// First numeric value found for `aptitude`, or `0.0`.
#[must_use]
pub fn aptitude_value(beast: &Value, aptitude: Aptitude) -> f64 {
    let sections = APTITUDE_SECTIONS
        .iter()
        .filter_map(|section| beast.get(*section))
        .chain(std::iter::once(beast));
    for source in sections {
        let Some(object) = source.as_object() else {
            continue;
        };
        for alias in aptitude.aliases() {
            if let Some(value) = object.get(*alias).and_then(numeric) {
                return value;
            }
        }
    }
    0.0
}
