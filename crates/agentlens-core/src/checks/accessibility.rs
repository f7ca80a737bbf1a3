//! Accessibility signal scoring
//!
//! Alt-text coverage carries the bulk of the score; ARIA, role and
//! lang attributes top it up. A page without images gets the full
//! image contribution rather than a penalty.

use crate::types::{Signal, Thresholds};

const ID: &str = "accessibility";
const LABEL: &str = "Accessibility";
const THRESHOLDS: Thresholds = Thresholds::new(80, 50);

const IMAGE_WEIGHT: f64 = 40.0;

pub fn check(html: &str) -> Signal {
    let lower = html.to_lowercase();

    let img_count = lower.matches("<img").count();
    let alt_count = lower.matches(r#"alt=""#).count();

    let (image_contribution, image_summary) = if img_count == 0 {
        (IMAGE_WEIGHT as i32, String::from("no images"))
    } else {
        let ratio = (alt_count as f64 / img_count as f64).min(1.0);
        (
            (ratio * IMAGE_WEIGHT).round() as i32,
            format!("{}/{img_count} images with alt text", alt_count.min(img_count)),
        )
    };

    let has_aria_label = lower.contains("aria-label");
    let has_aria_describedby = lower.contains("aria-describedby");
    let has_role = lower.contains(r#"role=""#);
    let has_lang = lower.contains(r#"lang=""#);

    let mut score = image_contribution;
    if has_aria_label {
        score += 20;
    }
    if has_aria_describedby {
        score += 10;
    }
    if has_role {
        score += 15;
    }
    if has_lang {
        score += 15;
    }
    score = score.min(100);

    let details = format!(
        "{image_summary}, aria-label {}, aria-describedby {}, role {}, lang {}",
        mark(has_aria_label),
        mark(has_aria_describedby),
        mark(has_role),
        mark(has_lang),
    );
    let recommendation = if score >= 80 {
        "Accessibility attributes are in good shape"
    } else {
        "Add alt text to images and label interactive regions with ARIA attributes"
    };

    Signal::new(ID, LABEL, score, THRESHOLDS, details, recommendation)
}

fn mark(present: bool) -> &'static str {
    if present { "✓" } else { "✗" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Status;

    #[test]
    fn test_empty_page_gets_image_contribution_only() {
        let signal = check("<div></div>");
        assert_eq!(signal.score, 40);
        assert_eq!(signal.status, Status::Fail);
        assert!(signal.details.contains("no images"));
    }

    #[test]
    fn test_partial_alt_coverage() {
        let html = r#"<img src="a.png" alt="a"><img src="b.png">"#;
        let signal = check(html);
        assert_eq!(signal.score, 20);
        assert!(signal.details.contains("1/2 images with alt text"));
    }

    #[test]
    fn test_third_coverage_rounds() {
        let html = r#"<img alt="a"><img><img>"#;
        let signal = check(html);
        assert_eq!(signal.score, 13);
    }

    #[test]
    fn test_alt_ratio_clamps_at_one() {
        // alt attributes on non-image elements must not overshoot the
        // image contribution.
        let html = r#"<img src="a.png" alt="a"><area alt="b"><area alt="c">"#;
        let signal = check(html);
        assert_eq!(signal.score, 40);
        assert!(signal.details.contains("1/1 images with alt text"));
    }

    #[test]
    fn test_all_attributes_reach_100() {
        let html = r#"<html lang="en"><body role="document">
            <img src="a.png" alt="a">
            <nav aria-label="primary" aria-describedby="hint"></nav>
        </body></html>"#;
        let signal = check(html);
        assert_eq!(signal.score, 100);
        assert_eq!(signal.status, Status::Pass);
    }

    #[test]
    fn test_lang_and_role_without_images() {
        let signal = check(r#"<html lang="en"><main role="main"></main></html>"#);
        // 40 + 15 + 15
        assert_eq!(signal.score, 70);
        assert_eq!(signal.status, Status::Warning);
    }
}
