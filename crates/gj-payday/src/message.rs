//! Indonesian user-facing lines built from [`PaydayStats`].

use tracing::warn;

use crate::flags::ViewFlags;
use crate::stats::{PaydayStats, Remaining};

/// Page title.
pub const TITLE: &str = "Cepatlah Gajian";

/// Shown while no payday preference is set.
pub const ASK_PAYDAY: &str = "Kapan kamu gajian? Pilih tanggal 1 sampai 31.";

/// Compose the lines describing `stats`.
///
/// Indeterminate counts are left out entirely.
pub fn compose(stats: &PaydayStats, flags: ViewFlags) -> Vec<String> {
    let mut lines = Vec::new();
    let today = stats.today;

    if flags.verbose {
        lines.push(format!(
            "Hari ini hari {}, tanggal {} {}.",
            today.weekday().indonesian_name(),
            today.day_of_month(),
            today.month_of_year().indonesian_name()
        ));
    }

    if stats.is_payday {
        lines.push("Hore, hari ini gajian!".to_owned());
    } else if let Remaining::Known(workdays) = stats.workdays_ahead {
        lines.push(format!("Tenang, cuma perlu kerja {workdays} hari lagi!"));
        if let (true, Remaining::Known(days), Remaining::Known(weekends)) =
            (flags.verbose, stats.days_ahead, stats.weekends_ahead)
        {
            lines.push(format!(
                "Masih {days} hari kalender lagi, dengan {weekends} hari akhir pekan."
            ));
        }
        if stats.is_payday_on_this_week {
            lines.push("Gajian minggu ini, semangat!".to_owned());
        } else if stats.is_payday_on_next_week {
            lines.push("Gajian minggu depan, sabar ya.".to_owned());
        }
    }

    if let Some(window) = stats.payday.filter(|w| w.is_advanced()) {
        lines.push(format!(
            "Tanggal {} jatuh pada hari {}, jadi gajian dimajukan ke hari {} tanggal {}.",
            window.origin().day_of_month(),
            window.origin_name(),
            window.actual_name(),
            window.actual().day_of_month()
        ));
    }

    if flags.debug {
        match serde_json::to_string_pretty(stats) {
            Ok(json) => lines.push(json),
            Err(err) => warn!(%err, "could not render payday stats"),
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::compute_stats;
    use gj_time::Date;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn countdown_line() {
        let stats = compute_stats(date(2024, 1, 10), 25);
        assert_eq!(
            compose(&stats, ViewFlags::default()),
            ["Tenang, cuma perlu kerja 11 hari lagi!"]
        );
    }

    #[test]
    fn advanced_payday_line() {
        // 2024-01-27 is a Saturday
        let stats = compute_stats(date(2024, 1, 22), 27);
        let lines = compose(&stats, ViewFlags::default());
        assert!(lines.contains(
            &"Tanggal 27 jatuh pada hari Sabtu, jadi gajian dimajukan ke hari Jumat tanggal 26."
                .to_owned()
        ));
        assert!(lines.contains(&"Gajian minggu ini, semangat!".to_owned()));
    }

    #[test]
    fn verbose_and_debug() {
        let stats = compute_stats(date(2024, 1, 10), 25);
        let lines = compose(&stats, ViewFlags { verbose: true, debug: true });
        assert_eq!(lines[0], "Hari ini hari Rabu, tanggal 10 Januari.");
        assert_eq!(
            lines[2],
            "Masih 15 hari kalender lagi, dengan 4 hari akhir pekan."
        );
        let json = lines.last().unwrap();
        assert!(json.contains("\"daysAhead\": 15"));
        assert!(json.contains("\"today\": \"2024-01-10\""));
    }

    #[test]
    fn payday_line() {
        let stats = compute_stats(date(2024, 1, 25), 25);
        assert_eq!(compose(&stats, ViewFlags::default()), ["Hore, hari ini gajian!"]);
    }

    #[test]
    fn indeterminate_counts_are_suppressed() {
        let stats = compute_stats(date(2199, 12, 20), 5);
        assert!(compose(&stats, ViewFlags::default()).is_empty());
    }
}
