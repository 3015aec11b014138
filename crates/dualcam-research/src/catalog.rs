//! Hand-authored reference data merged into enriched snapshots
//!
//! Nothing here is computed from fetched data. These taxonomies summarise the
//! 2025 dual-camera app landscape and are written into `market_insights`
//! under fixed keys.

use dualcam_domain::ResearchDocument;
use serde::Serialize;
use std::collections::BTreeMap;

/// Taxonomy of named groups, each a list of entries
pub type Taxonomy = BTreeMap<String, Vec<String>>;

/// Key for the standard feature taxonomy
pub const STANDARD_FEATURES: &str = "standard_features";

/// Key for the innovative feature taxonomy
pub const INNOVATIVE_FEATURES: &str = "innovative_features";

/// Key for the pricing model catalog
pub const PRICING_MODELS: &str = "pricing_models";

/// Key for the UI trend taxonomy
pub const UI_TRENDS: &str = "ui_trends";

/// One way camera apps charge for themselves
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricingModel {
    /// What the model is
    pub description: String,

    /// Apps using it
    pub examples: Vec<String>,

    /// What is free and what is paid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_features: Option<Vec<String>>,

    /// Typical price range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typical_prices: Option<String>,

    /// Short form of the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

type Groups<'a> = &'a [(&'a str, &'a [&'a str])];

fn taxonomy(groups: Groups<'_>) -> Taxonomy {
    groups
        .iter()
        .map(|(name, entries)| {
            (
                name.to_string(),
                entries.iter().map(|e| e.to_string()).collect(),
            )
        })
        .collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Features users expect from any dual-camera app in 2025
pub fn standard_features() -> Taxonomy {
    taxonomy(&[
        (
            "core_features",
            &[
                "Simultaneous front and back camera recording",
                "Picture-in-picture (PiP) and split-screen layouts",
                "4K resolution support on both cameras",
                "HDR and Dolby Vision recording",
                "Real-time switching between camera views",
                "Multiple aspect ratios (16:9, 9:16, 1:1, 4:3)",
                "Grid overlays and composition guides",
            ],
        ),
        (
            "quality_features",
            &[
                "60fps recording support",
                "Optical and digital zoom on both cameras",
                "Manual focus, exposure, and white balance controls",
                "Low-light enhancement",
                "Image stabilization",
                "ProRes and LOG recording options",
            ],
        ),
        (
            "editing_features",
            &[
                "Built-in video trimming and merging",
                "Audio mixing and noise reduction",
                "Filters and color grading presets",
                "Text and sticker overlays",
                "Background blur/bokeh effects",
                "Speed controls (slow motion, time lapse)",
            ],
        ),
        (
            "sharing_features",
            &[
                "Direct export to social media (TikTok, Instagram, YouTube)",
                "Cloud storage integration",
                "Export in multiple resolutions",
                "Live streaming capability",
                "QR code sharing",
            ],
        ),
        (
            "ui_features",
            &[
                "Gesture-based controls",
                "Dark mode support",
                "Customizable recording interface",
                "Quick settings access",
                "One-tap recording start",
            ],
        ),
    ])
}

/// Differentiating features seen in leading apps
pub fn innovative_features() -> Taxonomy {
    taxonomy(&[
        (
            "ai_features",
            &[
                "AI-powered scene detection and optimization",
                "Automatic subject tracking across both cameras",
                "AI background replacement and augmentation",
                "Intelligent audio enhancement",
                "Auto-highlight reel generation",
            ],
        ),
        (
            "advanced_capture",
            &[
                "RAW photo capture from video frames",
                "Multi-camera angle recording (3+ cameras via external devices)",
                "360-degree camera integration",
                "LiDAR-based depth effects",
                "Spatial video recording (Vision Pro compatible)",
            ],
        ),
        (
            "collaboration",
            &[
                "Remote camera control (control friend's phone as second camera)",
                "Multi-device sync for group recordings",
                "Real-time collaborative editing",
                "Live director mode for multiple camera angles",
            ],
        ),
        (
            "creative_tools",
            &[
                "AR effects and filters on both cameras simultaneously",
                "Green screen/chroma key support",
                "Split-screen with different time offsets",
                "Audio reactivity and visualization",
                "Gesture-triggered recording controls",
            ],
        ),
        (
            "professional",
            &[
                "External monitor support",
                "Waveform and vectorscope displays",
                "Timecode synchronization",
                "LUT import and export",
                "Direct integration with professional NLEs",
            ],
        ),
    ])
}

/// Common pricing models
pub fn pricing_models() -> BTreeMap<String, PricingModel> {
    let mut models = BTreeMap::new();
    models.insert(
        "freemium".to_string(),
        PricingModel {
            description: "Free download with in-app purchases or subscriptions".to_string(),
            examples: strings(&["MixCam", "DoubleTake", "Fotee CamFusion"]),
            typical_features: Some(strings(&[
                "Free basic recording",
                "Pro features locked (4K, no watermark, advanced editing)",
                "Subscription: $2.99-9.99/month or $19.99-49.99/year",
            ])),
            typical_prices: None,
            model: None,
        },
    );
    models.insert(
        "paid_upfront".to_string(),
        PricingModel {
            description: "One-time purchase".to_string(),
            examples: strings(&["ProCam", "Cadrage", "ProShot"]),
            typical_features: None,
            typical_prices: Some("$4.99-19.99".to_string()),
            model: None,
        },
    );
    models.insert(
        "hybrid".to_string(),
        PricingModel {
            description: "Paid app with additional IAPs".to_string(),
            examples: strings(&["FilmicPro", "ProMovie"]),
            typical_features: None,
            typical_prices: None,
            model: Some("Initial purchase + optional premium features".to_string()),
        },
    );
    models
}

/// UI/UX trends in 2025 camera apps
pub fn ui_trends() -> Taxonomy {
    taxonomy(&[
        (
            "design_trends",
            &[
                "Liquid glass morphism/glassmorphism effects",
                "Neumorphism for tactile controls",
                "Dynamic Island integration (iPhone 14+)",
                "Adaptive layouts that respond to device orientation",
                "Minimalist interfaces with hidden advanced controls",
            ],
        ),
        (
            "interaction_patterns",
            &[
                "Swipe gestures for quick mode switching",
                "Long-press for additional options",
                "Floating/movable control panels",
                "Voice commands for hands-free operation",
                "3D Touch/Haptic feedback for confirmation",
            ],
        ),
        (
            "visual_elements",
            &[
                "Translucent backgrounds with blur effects",
                "Animated transitions between states",
                "Real-time preview effects",
                "Color-coded modes and settings",
                "Contextual tooltips and onboarding",
            ],
        ),
        (
            "accessibility",
            &[
                "Voice-over optimization",
                "High contrast modes",
                "Large touch targets",
                "Simplified 'Easy Mode' interfaces",
                "Customizable button layouts",
            ],
        ),
    ])
}

/// Write all four taxonomies into the document's `market_insights`
pub fn merge_into(doc: &mut ResearchDocument) -> Result<(), serde_json::Error> {
    doc.set_insight(STANDARD_FEATURES, serde_json::to_value(standard_features())?);
    doc.set_insight(INNOVATIVE_FEATURES, serde_json::to_value(innovative_features())?);
    doc.set_insight(PRICING_MODELS, serde_json::to_value(pricing_models())?);
    doc.set_insight(UI_TRENDS, serde_json::to_value(ui_trends())?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_features_groups() {
        let features = standard_features();
        assert_eq!(features.len(), 5);
        assert_eq!(features["core_features"].len(), 7);
        assert!(features["core_features"][0].contains("Simultaneous front and back"));
    }

    #[test]
    fn test_innovative_features_groups() {
        let features = innovative_features();
        assert_eq!(features.len(), 5);
        assert_eq!(features["collaboration"].len(), 4);
    }

    #[test]
    fn test_ui_trends_groups() {
        let trends = ui_trends();
        assert_eq!(trends.len(), 4);
        assert!(trends.values().all(|entries| entries.len() == 5));
    }

    #[test]
    fn test_pricing_models_shape() {
        let models = pricing_models();
        assert_eq!(models.len(), 3);

        let value = serde_json::to_value(&models).unwrap();
        assert_eq!(value["paid_upfront"]["typical_prices"], "$4.99-19.99");
        assert!(value["paid_upfront"].get("typical_features").is_none());
        assert_eq!(value["freemium"]["typical_features"].as_array().unwrap().len(), 3);
        assert_eq!(value["hybrid"]["examples"][0], "FilmicPro");
    }

    #[test]
    fn test_merge_replaces_seeded_insights() {
        let mut doc = ResearchDocument::new("today");
        merge_into(&mut doc).unwrap();

        for key in [STANDARD_FEATURES, INNOVATIVE_FEATURES, PRICING_MODELS, UI_TRENDS] {
            assert!(doc.market_insights[key].is_object(), "{} should be merged", key);
        }
        // Seeded but never filled
        assert!(doc.market_insights["user_complaints"].is_array());
    }
}
