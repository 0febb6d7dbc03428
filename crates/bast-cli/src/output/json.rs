use bast_core::error::BastError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), BastError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
