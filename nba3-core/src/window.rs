use crate::error::InvalidWindowError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// First season covered by the datasets.
pub const MIN_YEAR: i32 = 2004;
/// Last season covered by the datasets.
pub const MAX_YEAR: i32 = 2024;

/// An inclusive, ordered range of seasons within [`MIN_YEAR`, `MAX_YEAR`].
///
/// The only constructor validates, so a `YearWindow` in hand is always
/// well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWindow")]
pub struct YearWindow {
    start: i32,
    end: i32,
}

#[derive(Deserialize)]
struct RawWindow {
    start: i32,
    end: i32,
}

impl TryFrom<RawWindow> for YearWindow {
    type Error = InvalidWindowError;

    fn try_from(raw: RawWindow) -> Result<Self, Self::Error> {
        YearWindow::new(raw.start, raw.end)
    }
}

impl YearWindow {
    pub fn new(start: i32, end: i32) -> Result<Self, InvalidWindowError> {
        if start > end || start < MIN_YEAR || end > MAX_YEAR {
            return Err(InvalidWindowError { start, end });
        }
        Ok(Self { start, end })
    }

    /// The whole supported range.
    pub fn full() -> Self {
        Self {
            start: MIN_YEAR,
            end: MAX_YEAR,
        }
    }

    pub fn start(&self) -> i32 {
        self.start
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }

    /// Number of seasons covered (always at least 1).
    pub fn season_count(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Iterate each season from start through end.
    pub fn years(&self) -> std::ops::RangeInclusive<i32> {
        self.start..=self.end
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for YearWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Preset windows offered as one-click shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Era {
    Early,
    AnalyticsRise,
    CurryEra,
    Modern,
    FullHistory,
}

impl Era {
    pub const ALL: [Era; 5] = [
        Era::Early,
        Era::AnalyticsRise,
        Era::CurryEra,
        Era::Modern,
        Era::FullHistory,
    ];

    pub fn bounds(&self) -> (i32, i32) {
        match self {
            Era::Early => (2004, 2008),
            Era::AnalyticsRise => (2009, 2014),
            Era::CurryEra => (2015, 2020),
            Era::Modern => (2021, 2024),
            Era::FullHistory => (MIN_YEAR, MAX_YEAR),
        }
    }

    /// The preset as a window. Era bounds are fixed and always valid.
    pub fn window(&self) -> YearWindow {
        let (start, end) = self.bounds();
        YearWindow { start, end }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Era::Early => "Early Era (2004-2008)",
            Era::AnalyticsRise => "Analytics Rise (2009-2014)",
            Era::CurryEra => "Curry Era (2015-2020)",
            Era::Modern => "Modern NBA (2021-2024)",
            Era::FullHistory => "Full History",
        }
    }

    /// The era whose bounds exactly match `window`, if any.
    pub fn matching(window: &YearWindow) -> Option<Era> {
        Era::ALL
            .into_iter()
            .find(|era| era.bounds() == (window.start(), window.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_rejects_inverted_and_out_of_range() {
        assert!(YearWindow::new(2010, 2009).is_err());
        assert!(YearWindow::new(2003, 2010).is_err());
        assert!(YearWindow::new(2010, 2025).is_err());
        let w = YearWindow::new(2015, 2015).unwrap();
        assert_eq!(w.season_count(), 1);
    }

    #[test]
    fn window_iterates_inclusive() {
        let w = YearWindow::new(2020, 2024).unwrap();
        let years: Vec<i32> = w.years().collect();
        assert_eq!(years, vec![2020, 2021, 2022, 2023, 2024]);
        assert!(w.contains(2020));
        assert!(w.contains(2024));
        assert!(!w.contains(2019));
    }

    #[test]
    fn window_deserialization_validates() {
        let ok: YearWindow = serde_json::from_str(r#"{"start": 2009, "end": 2014}"#).unwrap();
        assert_eq!(ok.to_string(), "2009-2014");
        assert!(serde_json::from_str::<YearWindow>(r#"{"start": 2014, "end": 2009}"#).is_err());
    }

    #[test]
    fn every_era_is_a_valid_window() {
        for era in Era::ALL {
            let (start, end) = era.bounds();
            let window = YearWindow::new(start, end).unwrap();
            assert_eq!(era.window(), window);
            assert_eq!(Era::matching(&window), Some(era));
        }
        assert_eq!(Era::matching(&YearWindow::new(2005, 2006).unwrap()), None);
    }
}
