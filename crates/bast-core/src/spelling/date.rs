use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::fmt;
use std::str::FromStr;

use super::{spell_number, SpellError};

const WEEKDAYS: [&str; 7] = ["Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu"];

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Accepted text form for dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date as it arrives from a record: already typed, or as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    /// Must be exactly `YYYY-MM-DD`.
    Text(String),
}

impl DateInput {
    /// Resolve to a calendar date, rejecting text that is not `YYYY-MM-DD`.
    pub fn resolve(&self) -> Result<NaiveDate, SpellError> {
        match self {
            DateInput::Date(d) => Ok(*d),
            DateInput::DateTime(dt) => Ok(dt.date()),
            DateInput::Text(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .map_err(|_| SpellError::DateFormat(s.clone())),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(d: NaiveDate) -> Self {
        DateInput::Date(d)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(dt: NaiveDateTime) -> Self {
        DateInput::DateTime(dt)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        DateInput::Text(s.to_string())
    }
}

impl From<String> for DateInput {
    fn from(s: String) -> Self {
        DateInput::Text(s)
    }
}

/// Which part of a spelled date to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFacet {
    /// Weekday name.
    Day,
    /// Day of month, spelled.
    Date,
    /// Month name.
    Month,
    /// Year, spelled.
    Year,
    /// `"{weekday}, {day} {month} {year}"`.
    Full,
}

impl DateFacet {
    pub const ALL: [DateFacet; 5] = [
        DateFacet::Day,
        DateFacet::Date,
        DateFacet::Month,
        DateFacet::Year,
        DateFacet::Full,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            DateFacet::Day => "day",
            DateFacet::Date => "date",
            DateFacet::Month => "month",
            DateFacet::Year => "year",
            DateFacet::Full => "full",
        }
    }
}

impl FromStr for DateFacet {
    type Err = SpellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateFacet::ALL
            .into_iter()
            .find(|f| f.keyword() == s)
            .ok_or_else(|| SpellError::Facet(s.to_string()))
    }
}

impl fmt::Display for DateFacet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// All facets of a date, spelled once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpelledDate {
    pub weekday: &'static str,
    pub day: String,
    pub month: &'static str,
    pub year: String,
}

impl SpelledDate {
    pub fn from_date(date: NaiveDate) -> Result<Self, SpellError> {
        // Years before the common era have no spelled form here.
        let year = u64::try_from(date.year())
            .map_err(|_| SpellError::DateFormat(date.to_string()))?;

        Ok(SpelledDate {
            weekday: WEEKDAYS[date.weekday().num_days_from_monday() as usize],
            day: spell_number(u64::from(date.day()))?,
            month: MONTHS[date.month0() as usize],
            year: spell_number(year)?,
        })
    }

    pub fn facet(&self, facet: DateFacet) -> String {
        match facet {
            DateFacet::Day => self.weekday.to_string(),
            DateFacet::Date => self.day.clone(),
            DateFacet::Month => self.month.to_string(),
            DateFacet::Year => self.year.clone(),
            DateFacet::Full => self.full(),
        }
    }

    pub fn full(&self) -> String {
        format!("{}, {} {} {}", self.weekday, self.day, self.month, self.year)
    }
}

/// Spell one facet of a date.
pub fn spell_date(input: impl Into<DateInput>, facet: DateFacet) -> Result<String, SpellError> {
    let date = input.into().resolve()?;
    Ok(SpelledDate::from_date(date)?.facet(facet))
}

/// Like [`spell_date`], with the facet given as a keyword
/// (`day`, `date`, `month`, `year` or `full`).
///
/// The date is checked before the facet, so a bad date wins over a bad keyword.
pub fn spell_date_keyword(input: impl Into<DateInput>, facet: &str) -> Result<String, SpellError> {
    let date = input.into().resolve()?;
    let facet: DateFacet = facet.parse()?;
    Ok(SpelledDate::from_date(date)?.facet(facet))
}
