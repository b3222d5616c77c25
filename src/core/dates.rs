//! Formattazione delle date nel formato lungo localizzato (`LL`)

use chrono::{DateTime, Locale, Utc};
use std::str::FromStr;

/// Locale supportati per le date mostrate nelle email
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLocale {
    PtBr,
    EnUs,
}

impl DateLocale {
    fn chrono_locale(self) -> Locale {
        match self {
            Self::PtBr => Locale::pt_BR,
            Self::EnUs => Locale::en_US,
        }
    }

    /// Pattern strftime equivalente a `LL` per il locale
    fn long_date_pattern(self) -> &'static str {
        match self {
            Self::PtBr => "%-d de %B de %Y",
            Self::EnUs => "%B %-d, %Y",
        }
    }
}

impl FromStr for DateLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").to_ascii_lowercase().as_str() {
            "pt_br" => Ok(Self::PtBr),
            "en_us" => Ok(Self::EnUs),
            other => Err(format!("Invalid DATE_LOCALE '{other}': expected 'pt_BR' or 'en_US'")),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DateFormatter {
    locale: DateLocale,
}

impl DateFormatter {
    pub fn new(locale: DateLocale) -> Self {
        Self { locale }
    }

    /// "10 de julho de 2024" (pt_BR), "July 10, 2024" (en_US)
    pub fn long_date(&self, timestamp: &DateTime<Utc>) -> String {
        timestamp
            .format_localized(self.locale.long_date_pattern(), self.locale.chrono_locale())
            .to_string()
    }
}
