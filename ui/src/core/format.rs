//! Formatting helpers for presenting dates and contact links.

use crate::i18n::Locale;
use time::{Date, Month, OffsetDateTime};

/// Today's date (UTC).
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Long date as written in each locale: `October 16, 2026` / `16. Oktober 2026`.
pub fn format_date(locale: Locale, date: Date) -> String {
    let day = date.day();
    let year = date.year();
    match locale {
        Locale::En => format!("{} {day}, {year}", month_name_en(date.month())),
        Locale::De => format!("{day}. {} {year}", month_name_de(date.month())),
    }
}

fn month_name_en(month: Month) -> &'static str {
    match month {
        Month::January => "January",
        Month::February => "February",
        Month::March => "March",
        Month::April => "April",
        Month::May => "May",
        Month::June => "June",
        Month::July => "July",
        Month::August => "August",
        Month::September => "September",
        Month::October => "October",
        Month::November => "November",
        Month::December => "December",
    }
}

fn month_name_de(month: Month) -> &'static str {
    match month {
        Month::January => "Januar",
        Month::February => "Februar",
        Month::March => "März",
        Month::April => "April",
        Month::May => "Mai",
        Month::June => "Juni",
        Month::July => "Juli",
        Month::August => "August",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "Dezember",
    }
}

/// `tel:` link for a human-formatted number; whitespace is dropped.
pub fn tel_href(number: &str) -> String {
    let digits: String = number.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}

/// `mailto:` link.
pub fn mailto_href(address: &str) -> String {
    format!("mailto:{}", address.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn dates_follow_locale_conventions() {
        let d = date!(2026 - 03 - 05);
        assert_eq!(format_date(Locale::En, d), "March 5, 2026");
        assert_eq!(format_date(Locale::De, d), "5. März 2026");
    }

    #[test]
    fn tel_links_strip_spaces() {
        assert_eq!(tel_href("+43 2274 7844"), "tel:+4322747844");
        assert_eq!(tel_href("+43 1234 567890"), "tel:+431234567890");
    }

    #[test]
    fn mailto_trims() {
        assert_eq!(
            mailto_href(" reservierung@schlossthalheim.at"),
            "mailto:reservierung@schlossthalheim.at"
        );
    }
}
