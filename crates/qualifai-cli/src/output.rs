//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::{Color, Colorize};
use qualifai_discovery::SourceSet;
use qualifai_domain::TrafficLight;
use qualifai_gatekeeper::{Decision, QualityGateResult};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a gate result together with its traffic light.
    pub fn format_gate(&self, result: &QualityGateResult, light: TrafficLight) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "gate": result,
                "trafficLight": light,
            }))?),
            OutputFormat::Table => Ok(self.format_gate_table(result, light)),
            OutputFormat::Quiet => Ok(if result.passed { "passed" } else { "failed" }.to_string()),
        }
    }

    fn format_gate_table(&self, result: &QualityGateResult, light: TrafficLight) -> String {
        let pain = &result.pain_confirmation;
        let mut builder = Builder::default();
        builder.push_record(["Check", "Value"]);
        builder.push_record(["Evidence items".to_string(), result.evidence_count.to_string()]);
        builder.push_record(["Source types".to_string(), result.source_type_count.to_string()]);
        builder.push_record([
            "Average confidence".to_string(),
            format!("{:.2}", result.average_confidence),
        ]);
        builder.push_record([
            "Observed evidence".to_string(),
            pain.observed_evidence_count.to_string(),
        ]);
        builder.push_record([
            "Reviews / jobs / context".to_string(),
            format!("{} / {} / {}", pain.reviews_count, pain.jobs_count, pain.context_count),
        ]);
        builder.push_record(["Pain tags".to_string(), pain.distinct_pain_tags.to_string()]);
        builder.push_record([
            "Confirmed tags".to_string(),
            result.confirmed_pain_tags.join(", "),
        ]);
        builder.push_record(["Traffic light".to_string(), light.to_string()]);

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        let mut lines = vec![table.to_string()];
        if result.passed {
            lines.push(self.success("Quality gate passed"));
        } else {
            lines.push(self.error("Quality gate failed"));
            for reason in &result.reasons {
                lines.push(format!("  - {}", reason));
            }
        }
        lines.join("\n")
    }

    /// Format a traffic light.
    pub fn format_light(&self, light: TrafficLight) -> String {
        match self.format {
            OutputFormat::Json => serde_json::json!({ "trafficLight": light }).to_string(),
            OutputFormat::Table | OutputFormat::Quiet => {
                self.colorize(light.as_str(), light_color(light))
            }
        }
    }

    /// Format a source set.
    pub fn format_source_set(&self, set: &SourceSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(set)?),
            OutputFormat::Quiet => Ok(urls_only(set.urls.iter().map(|u| u.url.as_str()))),
            OutputFormat::Table => {
                if set.urls.is_empty() {
                    return Ok(self.warning("No URLs discovered."));
                }

                let mut builder = Builder::default();
                builder.push_record(["URL", "Provenance", "JS heavy"]);
                for discovered in &set.urls {
                    builder.push_record([
                        discovered.url.as_str(),
                        discovered.provenance.as_str(),
                        if discovered.js_heavy_hint { "yes" } else { "" },
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                let counts = &set.raw_counts;
                Ok(format!(
                    "{}\n{}",
                    table,
                    self.info(&format!(
                        "sitemap {}/{}, serp {}/{}, default {}/{} kept; {} duplicate(s) removed",
                        counts.sitemap.capped,
                        counts.sitemap.discovered,
                        counts.serp.capped,
                        counts.serp.discovered,
                        counts.default.capped,
                        counts.default.discovered,
                        set.dedup_removed_count
                    ))
                ))
            }
        }
    }

    /// Format a plain URL list.
    pub fn format_urls(&self, urls: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(urls)?),
            OutputFormat::Table | OutputFormat::Quiet => Ok(urls_only(urls.iter().map(String::as_str))),
        }
    }

    /// Format a send or asset decision.
    pub fn format_decision(&self, action: &str, light: Option<TrafficLight>, decision: &Decision) -> String {
        let reason = match decision {
            Decision::Allowed => None,
            Decision::Blocked(reason) => Some(reason),
        };
        match self.format {
            OutputFormat::Json => serde_json::json!({
                "action": action,
                "trafficLight": light,
                "allowed": decision.is_allowed(),
                "reason": reason,
            })
            .to_string(),
            OutputFormat::Quiet => decision.to_string(),
            OutputFormat::Table => match decision {
                Decision::Allowed => self.success(&format!("{} allowed", action)),
                Decision::Blocked(reason) => self.error(&format!("{} blocked: {}", action, reason)),
            },
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), Color::Green)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), Color::Red)
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), Color::Blue)
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), Color::Yellow)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: Color) -> String {
        if !self.color_enabled {
            return text.to_string();
        }
        text.color(color).to_string()
    }
}

fn light_color(light: TrafficLight) -> Color {
    match light {
        TrafficLight::Red => Color::Red,
        TrafficLight::Amber => Color::Yellow,
        TrafficLight::Green => Color::Green,
    }
}

fn urls_only<'a>(urls: impl Iterator<Item = &'a str>) -> String {
    urls.collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualifai_discovery::build_source_set;
    use qualifai_domain::{EvidenceItem, EvidenceMetadata, SourceType};
    use qualifai_gatekeeper::evaluate_quality_gate;

    fn passing_result() -> QualityGateResult {
        let item = |source_type, tag: &str, confidence| {
            EvidenceItem::new(
                source_type,
                "https://example.nl",
                tag,
                confidence,
                EvidenceMetadata::from_adapter("crawl4ai"),
            )
        };
        evaluate_quality_gate(&[
            item(SourceType::Reviews, "planning", 0.8),
            item(SourceType::Careers, "handoff", 0.7),
            item(SourceType::Website, "workflow-context", 0.72),
        ])
    }

    #[test]
    fn test_gate_table_lists_reasons() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter
            .format_gate(&evaluate_quality_gate(&[]), TrafficLight::Red)
            .unwrap();
        assert!(output.contains("Evidence items"));
        assert!(output.contains("✗ Quality gate failed"));
        assert!(output.contains("  - Minimum 3 evidence items required"));
    }

    #[test]
    fn test_gate_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_gate(&passing_result(), TrafficLight::Green).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["gate"]["passed"], true);
        assert_eq!(value["gate"]["averageConfidence"], 0.74);
        assert_eq!(value["trafficLight"], "green");
    }

    #[test]
    fn test_gate_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_gate(&passing_result(), TrafficLight::Green).unwrap();
        assert_eq!(output, "passed");
    }

    #[test]
    fn test_light_plain() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.format_light(TrafficLight::Amber), "amber");
    }

    #[test]
    fn test_source_set_formats() {
        let set = build_source_set(
            &["https://example.nl/over-ons"],
            &["https://www.trustpilot.com/review/example.nl"],
            &[] as &[&str],
            None,
        );

        let quiet = Formatter::new(OutputFormat::Quiet, false).format_source_set(&set).unwrap();
        assert_eq!(
            quiet,
            "https://example.nl/over-ons\nhttps://www.trustpilot.com/review/example.nl"
        );

        let table = Formatter::new(OutputFormat::Table, false).format_source_set(&set).unwrap();
        assert!(table.contains("Provenance"));
        assert!(table.contains("sitemap 1/1, serp 1/1, default 0/0 kept; 0 duplicate(s) removed"));
    }

    #[test]
    fn test_empty_source_set() {
        let set = build_source_set(&[] as &[&str], &[] as &[&str], &[] as &[&str], None);
        let output = Formatter::new(OutputFormat::Table, false).format_source_set(&set).unwrap();
        assert!(output.contains("No URLs discovered"));
    }

    #[test]
    fn test_decision_formats() {
        let blocked = Decision::Blocked("too thin".to_string());
        let table = Formatter::new(OutputFormat::Table, false);
        assert_eq!(table.format_decision("send", Some(TrafficLight::Red), &blocked), "✗ send blocked: too thin");

        let json = Formatter::new(OutputFormat::Json, false).format_decision("assets", None, &Decision::Allowed);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["allowed"], true);
        assert!(value["reason"].is_null());
        assert!(value["trafficLight"].is_null());
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        assert_eq!(formatter.success("test"), "✓ test");
    }
}
