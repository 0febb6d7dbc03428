//! Indonesian number and date spelling.
//!
//! Used to write out the opener sentences of BAST documents, where dates are
//! spelled in words ("Jumat, lima belas Maret dua ribu dua puluh empat").

pub mod date;

pub use date::{spell_date, spell_date_keyword, DateFacet, DateInput, SpelledDate};

/// Largest value `spell_number` accepts.
pub const MAX_SPELLABLE: u64 = 999_999;

const UNITS: [&str; 10] = [
    "nol", "satu", "dua", "tiga", "empat", "lima", "enam", "tujuh", "delapan", "sembilan",
];

const TEENS: [&str; 10] = [
    "sepuluh",
    "sebelas",
    "dua belas",
    "tiga belas",
    "empat belas",
    "lima belas",
    "enam belas",
    "tujuh belas",
    "delapan belas",
    "sembilan belas",
];

const TENS: [&str; 10] = [
    "",
    "sepuluh",
    "dua puluh",
    "tiga puluh",
    "empat puluh",
    "lima puluh",
    "enam puluh",
    "tujuh puluh",
    "delapan puluh",
    "sembilan puluh",
];

const HUNDRED: &str = "ratus";
const THOUSAND: &str = "ribu";

/// Failure kinds of the spelling engine.
///
/// The display text matches the operator-facing messages of the old tool, but
/// since these come back as `Err` they can never end up inside a document cell.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpellError {
    #[error("Angka terlalu besar untuk dieja")]
    MagnitudeOverflow(u64),

    #[error("Format tanggal tidak valid")]
    DateFormat(String),

    #[error("Format keluaran tidak valid")]
    Facet(String),
}

/// Spell a non-negative integer in Indonesian words.
///
/// Values above [`MAX_SPELLABLE`] yield [`SpellError::MagnitudeOverflow`].
pub fn spell_number(n: u64) -> Result<String, SpellError> {
    if n > MAX_SPELLABLE {
        return Err(SpellError::MagnitudeOverflow(n));
    }
    Ok(spell_below_million(n))
}

fn spell_below_million(n: u64) -> String {
    match n {
        0..=9 => UNITS[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => with_remainder(TENS[(n / 10) as usize].to_string(), n % 10),
        100..=999 => with_remainder(
            format!("{} {HUNDRED}", UNITS[(n / 100) as usize]),
            n % 100,
        ),
        _ => with_remainder(
            format!("{} {THOUSAND}", spell_below_million(n / 1000)),
            n % 1000,
        ),
    }
}

/// Append the spelled remainder, if any. A zero remainder adds nothing.
fn with_remainder(mut head: String, remainder: u64) -> String {
    if remainder != 0 {
        head.push(' ');
        head.push_str(&spell_below_million(remainder));
    }
    head
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units() {
        assert_eq!(spell_number(0).unwrap(), "nol");
        assert_eq!(spell_number(9).unwrap(), "sembilan");
    }

    #[test]
    fn test_teens_follow_table() {
        for n in 10..20u64 {
            assert_eq!(spell_number(n).unwrap(), TEENS[(n - 10) as usize]);
        }
    }

    #[test]
    fn test_round_tens_have_no_suffix() {
        assert_eq!(spell_number(30).unwrap(), "tiga puluh");
        for n in (20..100u64).step_by(10) {
            let spelled = spell_number(n).unwrap();
            assert!(!spelled.ends_with("nol"), "{n} -> {spelled}");
            assert_eq!(spelled, TENS[(n / 10) as usize]);
        }
    }

    #[test]
    fn test_tens_with_units() {
        assert_eq!(spell_number(21).unwrap(), "dua puluh satu");
        assert_eq!(spell_number(99).unwrap(), "sembilan puluh sembilan");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(spell_number(100).unwrap(), "satu ratus");
        assert_eq!(spell_number(115).unwrap(), "satu ratus lima belas");
        assert_eq!(spell_number(870).unwrap(), "delapan ratus tujuh puluh");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(spell_number(1000).unwrap(), "satu ribu");
        assert_eq!(spell_number(2024).unwrap(), "dua ribu dua puluh empat");
        assert_eq!(
            spell_number(12_305).unwrap(),
            "dua belas ribu tiga ratus lima"
        );
    }

    #[test]
    fn test_upper_boundary() {
        assert_eq!(
            spell_number(999_999).unwrap(),
            "sembilan ratus sembilan puluh sembilan ribu sembilan ratus sembilan puluh sembilan"
        );
    }

    #[test]
    fn test_overflow_is_error() {
        assert_eq!(
            spell_number(1_000_000),
            Err(SpellError::MagnitudeOverflow(1_000_000))
        );
        let err = spell_number(u64::MAX).unwrap_err();
        assert_eq!(err.to_string(), "Angka terlalu besar untuk dieja");
    }

    #[test]
    fn test_repeatable() {
        assert_eq!(spell_number(4321), spell_number(4321));
    }
}
