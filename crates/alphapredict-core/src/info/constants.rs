//! # Constants
//!
//! The canonical amino acid alphabet.
//!
//! The position of each residue in [`ONE_HOT_ALPHABET`] is the column it
//! occupies in the one-hot encoding. The networks were trained against this
//! exact ordering, so it is versioned together with the weight artifacts and
//! must never be reordered.
//!
use strum::{Display, EnumCount, EnumIter};

/// One letter codes in one-hot column order.
pub const ONE_HOT_ALPHABET: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W',
    'Y',
];

/// The twenty canonical amino acids.
///
/// Variants are declared in one-hot column order; the discriminant is the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum AminoAcid {
    #[strum(serialize = "A")]
    Ala,
    #[strum(serialize = "C")]
    Cys,
    #[strum(serialize = "D")]
    Asp,
    #[strum(serialize = "E")]
    Glu,
    #[strum(serialize = "F")]
    Phe,
    #[strum(serialize = "G")]
    Gly,
    #[strum(serialize = "H")]
    His,
    #[strum(serialize = "I")]
    Ile,
    #[strum(serialize = "K")]
    Lys,
    #[strum(serialize = "L")]
    Leu,
    #[strum(serialize = "M")]
    Met,
    #[strum(serialize = "N")]
    Asn,
    #[strum(serialize = "P")]
    Pro,
    #[strum(serialize = "Q")]
    Gln,
    #[strum(serialize = "R")]
    Arg,
    #[strum(serialize = "S")]
    Ser,
    #[strum(serialize = "T")]
    Thr,
    #[strum(serialize = "V")]
    Val,
    #[strum(serialize = "W")]
    Trp,
    #[strum(serialize = "Y")]
    Tyr,
}

impl AminoAcid {
    /// Strict lookup of an upper case one letter code.
    pub fn from_char(c: char) -> Option<Self> {
        let aa = match c {
            'A' => AminoAcid::Ala,
            'C' => AminoAcid::Cys,
            'D' => AminoAcid::Asp,
            'E' => AminoAcid::Glu,
            'F' => AminoAcid::Phe,
            'G' => AminoAcid::Gly,
            'H' => AminoAcid::His,
            'I' => AminoAcid::Ile,
            'K' => AminoAcid::Lys,
            'L' => AminoAcid::Leu,
            'M' => AminoAcid::Met,
            'N' => AminoAcid::Asn,
            'P' => AminoAcid::Pro,
            'Q' => AminoAcid::Gln,
            'R' => AminoAcid::Arg,
            'S' => AminoAcid::Ser,
            'T' => AminoAcid::Thr,
            'V' => AminoAcid::Val,
            'W' => AminoAcid::Trp,
            'Y' => AminoAcid::Tyr,
            _ => return None,
        };
        Some(aa)
    }

    /// Column of this residue in the one-hot encoding.
    pub fn index(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_alphabet_order_is_frozen() {
        assert_eq!(AminoAcid::COUNT, 20);
        let alphabet: String = ONE_HOT_ALPHABET.iter().collect();
        assert_eq!(alphabet, "ACDEFGHIKLMNPQRSTVWY");
        for (idx, aa) in AminoAcid::iter().enumerate() {
            assert_eq!(aa.index(), idx);
            assert_eq!(aa.to_string(), ONE_HOT_ALPHABET[idx].to_string());
            assert_eq!(AminoAcid::from_char(ONE_HOT_ALPHABET[idx]), Some(aa));
        }
    }

    #[test]
    fn test_residue_checking() {
        assert_eq!(AminoAcid::from_char('W'), Some(AminoAcid::Trp));
        for c in ['B', 'J', 'O', 'U', 'X', 'Z', '-', '*', ' ', 'a'] {
            assert_eq!(AminoAcid::from_char(c), None, "{c} should not be canonical");
        }
    }
}
