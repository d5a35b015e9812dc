//! `Weekday` — day of the week.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).  The Sunday-first
/// numbering (Sunday = 0) is available through
/// [`num_days_from_sunday`](Weekday::num_days_from_sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-first number (Sunday = 0, Monday = 1 … Saturday = 6).
    pub fn num_days_from_sunday(&self) -> u8 {
        self.ordinal() % 7
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Indonesian day name (`"Senin"` … `"Minggu"`).
    pub fn indonesian_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Senin",
            Weekday::Tuesday => "Selasa",
            Weekday::Wednesday => "Rabu",
            Weekday::Thursday => "Kamis",
            Weekday::Friday => "Jumat",
            Weekday::Saturday => "Sabtu",
            Weekday::Sunday => "Minggu",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sunday_first_numbering() {
        assert_eq!(Weekday::Sunday.num_days_from_sunday(), 0);
        assert_eq!(Weekday::Monday.num_days_from_sunday(), 1);
        assert_eq!(Weekday::Saturday.num_days_from_sunday(), 6);
    }

    #[test]
    fn weekend_membership() {
        let weekend: Vec<_> = (1..=7)
            .filter_map(Weekday::from_ordinal)
            .filter(Weekday::is_weekend)
            .collect();
        assert_eq!(weekend, [Weekday::Saturday, Weekday::Sunday]);
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn indonesian_names() {
        assert_eq!(Weekday::Friday.indonesian_name(), "Jumat");
        assert_eq!(Weekday::Saturday.indonesian_name(), "Sabtu");
        assert_eq!(Weekday::Sunday.indonesian_name(), "Minggu");
    }
}
