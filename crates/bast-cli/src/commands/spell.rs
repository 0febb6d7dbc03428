use bast_core::error::BastError;
use bast_core::spelling::{spell_date_keyword, spell_number};

pub fn number(value: u64) -> Result<(), BastError> {
    println!("{}", spell_number(value)?);
    Ok(())
}

pub fn date(date: &str, facet: &str) -> Result<(), BastError> {
    println!("{}", spell_date_keyword(date, facet)?);
    Ok(())
}
