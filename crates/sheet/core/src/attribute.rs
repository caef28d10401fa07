//! Core attributes and the ability modifier formula.
//!
//! Attributes are the only numeric traits a player allocates directly. Every
//! other displayed number (modifiers, skill totals, skill point budget) is
//! derived from them.

use strum::{EnumCount, IntoEnumIterator};

/// The six core attributes that define a character.
///
/// Variant order is the display order and the storage index in
/// [`AttributeSet`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum Attribute {
    Strength = 0,
    Dexterity = 1,
    Constitution = 2,
    Intelligence = 3,
    Wisdom = 4,
    Charisma = 5,
}

impl Attribute {
    /// All attributes in display order.
    pub const ALL: [Attribute; Attribute::COUNT] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Intelligence,
        Attribute::Wisdom,
        Attribute::Charisma,
    ];

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Three-letter abbreviation used in compact layouts.
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Attribute::Strength => "STR",
            Attribute::Dexterity => "DEX",
            Attribute::Constitution => "CON",
            Attribute::Intelligence => "INT",
            Attribute::Wisdom => "WIS",
            Attribute::Charisma => "CHA",
        }
    }
}

/// Ability modifier for an attribute value: `floor((value - 10) / 2)`.
///
/// Rust's `/` truncates toward zero, so the floor is taken with
/// `div_euclid` (the divisor is positive, which makes the two identical).
#[inline]
pub const fn modifier(value: i32) -> i32 {
    (value - 10).div_euclid(2)
}

/// Current value of every attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeSet {
    values: [i32; Attribute::COUNT],
}

impl AttributeSet {
    /// All attributes at zero.
    pub const fn zero() -> Self {
        Self {
            values: [0; Attribute::COUNT],
        }
    }

    #[inline]
    pub fn get(&self, attribute: Attribute) -> i32 {
        self.values[attribute.as_index()]
    }

    #[inline]
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        self.values[attribute.as_index()] = value;
    }

    /// Modifier of the attribute's current value.
    #[inline]
    pub fn modifier(&self, attribute: Attribute) -> i32 {
        modifier(self.get(attribute))
    }

    /// Sum of all attribute values.
    pub fn total(&self) -> i32 {
        self.values.iter().sum()
    }

    /// Iterates `(attribute, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, i32)> + '_ {
        Attribute::iter().map(|attribute| (attribute, self.get(attribute)))
    }

    /// Returns the first attribute holding a negative value, if any.
    pub fn first_negative(&self) -> Option<Attribute> {
        self.iter()
            .find(|(_, value)| *value < 0)
            .map(|(attribute, _)| attribute)
    }
}

impl FromIterator<(Attribute, i32)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (Attribute, i32)>>(iter: I) -> Self {
        let mut set = Self::zero();
        for (attribute, value) in iter {
            set.set(attribute, value);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_floors_negative_results() {
        assert_eq!(modifier(0), -5);
        assert_eq!(modifier(1), -5);
        assert_eq!(modifier(2), -4);
        assert_eq!(modifier(9), -1);
        assert_eq!(modifier(10), 0);
        assert_eq!(modifier(11), 0);
        assert_eq!(modifier(12), 1);
        assert_eq!(modifier(20), 5);
    }

    #[test]
    fn set_starts_at_zero_with_minus_five_modifiers() {
        let set = AttributeSet::zero();
        for attribute in Attribute::ALL {
            assert_eq!(set.get(attribute), 0);
            assert_eq!(set.modifier(attribute), -5);
        }
        assert_eq!(set.total(), 0);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("intelligence".parse::<Attribute>(), Ok(Attribute::Intelligence));
        assert_eq!("Charisma".parse::<Attribute>(), Ok(Attribute::Charisma));
        assert!("Luck".parse::<Attribute>().is_err());
        assert_eq!(Attribute::Wisdom.to_string(), "Wisdom");
    }

    #[test]
    fn collects_from_pairs() {
        let set: AttributeSet = [(Attribute::Strength, 14), (Attribute::Wisdom, 3)]
            .into_iter()
            .collect();
        assert_eq!(set.get(Attribute::Strength), 14);
        assert_eq!(set.get(Attribute::Wisdom), 3);
        assert_eq!(set.get(Attribute::Dexterity), 0);
        assert_eq!(set.total(), 17);
        assert_eq!(set.first_negative(), None);
    }
}
