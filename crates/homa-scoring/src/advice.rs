use homa_core::models::measurements::MeasurementSet;
use homa_core::models::scores::{RiskCategory, ScoreResult};

pub const FOLLOW_UP: &str =
    "Follow-up assessment in 3-6 months to monitor progress";

/// One-paragraph reading of the overall category.
pub fn summary(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Low => {
            "The assessment shows good cardiometabolic health with minimal risk factors."
        }
        RiskCategory::Moderate => {
            "The assessment shows some areas of concern that would benefit from lifestyle changes and monitoring."
        }
        RiskCategory::High | RiskCategory::VeryHigh => {
            "The assessment indicates significant cardiometabolic risk factors that need prompt medical attention."
        }
    }
}

/// Targeted advice for the measurements that warrant it, followed by
/// [`FOLLOW_UP`].
pub fn recommendations(m: &MeasurementSet, result: &ScoreResult) -> Vec<&'static str> {
    let mut advice = Vec::new();

    if m.waist_cm.is_some_and(|w| w >= 100.0) {
        advice.push("Reduce abdominal obesity through a structured diet and exercise plan");
    }
    if m.systolic_bp.is_some_and(|bp| bp >= 130.0) {
        advice.push("Manage blood pressure with a DASH diet and regular cardiovascular exercise");
    }
    if m.fasting_glucose.is_some_and(|g| g >= 100.0) {
        advice.push("Start glucose management, including a low glycemic diet");
    }
    if result.bmi.is_some_and(|bmi| bmi >= 25.0) {
        advice.push("Join a weight management program to reach a healthy BMI");
    }

    advice.push(FOLLOW_UP);
    advice
}
