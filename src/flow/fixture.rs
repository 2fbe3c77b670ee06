//! Synthetic data sent to the service
//!
//! The save step always sends the same two slides; only the timestamps
//! change between runs.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

use crate::api::types::{PageSize, Slide, SlideData, SlideMeta};

/// Number of slides in the save fixture
pub const FIXTURE_SLIDE_COUNT: usize = 2;

const SLIDE_VERSION: &str = "1.0";
const PAGE_SIZE: PageSize = PageSize {
    width: 1280,
    height: 720,
};

/// Unique-per-second project name, e.g. `test_project_1718000000`
pub fn project_name(now: DateTime<Utc>) -> String {
    format!("test_project_{}", now.timestamp())
}

/// The two-slide fixture, stamped with the current local time
pub fn sample_slides() -> Vec<Slide> {
    slides_at(Local::now().naive_local())
}

/// The two-slide fixture stamped with `at`
pub fn slides_at(at: NaiveDateTime) -> Vec<Slide> {
    let stamp = at.format("%Y-%m-%dT%H:%M:%S%.6f").to_string();

    [("slide1", "#ffffff", "First slide"), ("slide2", "#f0f0f0", "Second slide")]
        .into_iter()
        .enumerate()
        .map(|(index, (id, background, summary))| Slide {
            id: id.to_string(),
            data: SlideData {
                version: SLIDE_VERSION.to_string(),
                page_size: PAGE_SIZE,
                background: background.to_string(),
                elements: Vec::new(),
            },
            meta: SlideMeta {
                summary: summary.to_string(),
                display_index: index as u32,
                created_at: stamp.clone(),
                updated_at: stamp.clone(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    #[test]
    fn test_fixture_shape() {
        let slides = sample_slides();
        assert_eq!(slides.len(), FIXTURE_SLIDE_COUNT);

        let ids: Vec<&str> = slides.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["slide1", "slide2"]);

        let indices: Vec<u32> = slides.iter().map(|s| s.meta.display_index).collect();
        assert_eq!(indices, [0, 1]);

        for slide in &slides {
            assert_eq!(slide.data.page_size, PageSize { width: 1280, height: 720 });
            assert!(slide.data.elements.is_empty());
        }
        assert_ne!(slides[0].data.background, slides[1].data.background);
    }

    #[test]
    fn test_timestamps_are_iso8601() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_micro_opt(14, 5, 7, 42)
            .unwrap();
        let slides = slides_at(at);
        assert_eq!(slides[0].meta.created_at, "2024-03-09T14:05:07.000042");
        assert_eq!(slides[1].meta.updated_at, "2024-03-09T14:05:07.000042");
    }

    #[test]
    fn test_project_name_uses_unix_seconds() {
        let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        assert_eq!(project_name(now), "test_project_1700000000");
    }
}
