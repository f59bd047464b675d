use super::Report;
use crate::core::stats::{min_max, mode, value_counts};
use crate::models::{City, TripTable};
use crate::utils::formatting::pad_right;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i64,
    pub most_recent: i64,
    pub most_common: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Demographics {
    /// The city's dataset has no gender/birth year columns
    NotProvided(City),
    Available {
        genders: Vec<(String, usize)>,
        birth_years: Option<BirthYears>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub struct UserReport {
    pub user_types: Vec<(String, usize)>,
    pub demographics: Demographics,
}

impl UserReport {
    pub fn compute(table: &TripTable) -> Self {
        let trips = table.trips();
        let user_types = owned(value_counts(
            trips.iter().filter_map(|t| t.user_type.as_deref()),
        ));

        if !table.city.has_demographics() {
            return Self {
                user_types,
                demographics: Demographics::NotProvided(table.city),
            };
        }

        let genders = owned(value_counts(
            trips.iter().filter_map(|t| t.gender.as_deref()),
        ));

        let years: Vec<f64> = trips.iter().filter_map(|t| t.birth_year).collect();
        let birth_years = min_max(years.iter().copied()).and_then(|(lo, hi)| {
            mode(years.iter().map(|y| *y as i64)).map(|most_common| BirthYears {
                earliest: lo as i64,
                most_recent: hi as i64,
                most_common,
            })
        });

        Self {
            user_types,
            demographics: Demographics::Available {
                genders,
                birth_years,
            },
        }
    }
}

fn owned(counts: Vec<(&str, usize)>) -> Vec<(String, usize)> {
    counts
        .into_iter()
        .map(|(v, n)| (v.to_string(), n))
        .collect()
}

fn write_counts<W: Write>(out: &mut W, counts: &[(String, usize)]) -> io::Result<()> {
    let width = counts
        .iter()
        .map(|(v, _)| UnicodeWidthStr::width(v.as_str()))
        .max()
        .unwrap_or(0);
    for (value, n) in counts {
        writeln!(out, "{}    {}", pad_right(value, width), n)?;
    }
    Ok(())
}

impl Report for UserReport {
    const TITLE: &'static str = "Calculating User Stats...";

    fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "User Type:")?;
        if self.user_types.is_empty() {
            writeln!(out, "No User Type Data Available.")?;
        }
        write_counts(out, &self.user_types)?;

        match &self.demographics {
            Demographics::NotProvided(city) => {
                writeln!(out, "\nGender:")?;
                writeln!(out, "No Gender Data Provided For {}.", city.label())?;
                writeln!(out, "\nYear of Birth:")?;
                writeln!(out, "No Year of Birth Data Provided For {}.", city.label())
            }
            Demographics::Available {
                genders,
                birth_years,
            } => {
                writeln!(out, "\nGender:")?;
                if genders.is_empty() {
                    writeln!(out, "No Gender Data Available.")?;
                }
                write_counts(out, genders)?;

                writeln!(out, "\nYear of Birth:")?;
                match birth_years {
                    Some(years) => {
                        writeln!(out, "Earliest: {}", years.earliest)?;
                        writeln!(out, "Most Recent: {}", years.most_recent)?;
                        writeln!(out, "Most Common Year: {}", years.most_common)
                    }
                    None => writeln!(out, "No Year of Birth Data Available."),
                }
            }
        }
    }
}
