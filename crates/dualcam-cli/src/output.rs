//! Console reports printed after each pipeline run.

use colored::*;
use dualcam_domain::AppRecord;
use dualcam_research::PipelineReport;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Report formatter.
pub struct Formatter {
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Summary of a collector run.
    pub fn collect_summary(&self, report: &PipelineReport) -> String {
        let doc = &report.document;
        let mut lines = vec![self.heading(&format!("Research collected {}", doc.research_date))];

        match &doc.target_app {
            Some(target) => lines.push(self.success(&format!(
                "Target app: {} ({})",
                target.app.display_name(),
                target
                    .app
                    .numeric_id
                    .map_or_else(|| "no id".to_string(), |id| id.to_string())
            ))),
            None => lines.push(self.warning("Target app not found")),
        }

        lines.push(self.info(&format!("Competitors ranked: {}", doc.competitors.len())));
        if !doc.competitors.is_empty() {
            lines.push(self.competitor_table(&doc.competitors));
        }
        lines.push(self.request_line(report));
        lines.push(self.success(&format!("Saved to {}", report.output.display())));
        lines.join("\n")
    }

    /// Summary of an enricher run.
    pub fn enrich_summary(&self, report: &PipelineReport) -> String {
        let doc = &report.document;
        let mut lines = vec![self.heading(&format!("Research enriched {}", doc.research_date))];

        let analysis = doc
            .target_app
            .as_ref()
            .and_then(|target| target.review_analysis.as_ref());
        if let Some(analysis) = analysis {
            lines.push(self.info(&format!(
                "Reviews analyzed: {}",
                analysis.total_reviews_analyzed
            )));
            lines.push(format!(
                "  Complaints: {}\n  Feature requests: {}\n  Positive mentions: {}",
                analysis.bucket_totals.complaints,
                analysis.bucket_totals.feature_requests,
                analysis.bucket_totals.positive_mentions
            ));
        }

        lines.push(self.info(&format!(
            "Market insights: {}",
            doc.market_insights.keys().cloned().collect::<Vec<_>>().join(", ")
        )));
        lines.push(self.request_line(report));
        lines.push(self.success(&format!("Saved to {}", report.output.display())));
        lines.join("\n")
    }

    /// Ranked competitors as a table.
    pub fn competitor_table(&self, competitors: &[AppRecord]) -> String {
        let mut builder = Builder::default();
        builder.push_record(["#", "Name", "Developer", "Rating", "Ratings", "Price"]);

        for (rank, app) in competitors.iter().enumerate() {
            let rating = app
                .rating
                .map_or_else(|| "-".to_string(), |r| format!("{:.1}", r));
            builder.push_record([
                (rank + 1).to_string(),
                app.display_name().to_string(),
                app.developer.clone().unwrap_or_else(|| "-".to_string()),
                rating,
                app.rating_count.to_string(),
                app.formatted_price.clone().unwrap_or_else(|| "-".to_string()),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn request_line(&self, report: &PipelineReport) -> String {
        let failed = report.stats.total_failed();
        let line = format!(
            "Requests: {} issued, {} failed",
            report.stats.total_issued(),
            failed
        );
        if failed > 0 {
            self.warning(&line)
        } else {
            self.info(&line)
        }
    }

    /// Format a heading.
    pub fn heading(&self, message: &str) -> String {
        if self.color_enabled {
            message.bold().to_string()
        } else {
            message.to_string()
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
