//! Console output formatter for catalog records

use colored::Colorize;
use serde::Serialize;
use vigia_application::{ConfigIssue, InvestigationPlan, Severity};
use vigia_domain::{
    CorruptionPattern, DueDiligenceChecklist, JurisdictionProfile, ResearchMode, RiskFactor,
    RiskLevel, SectorProfile,
};

/// Formats catalog records for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the full preset for one research tier
    pub fn format_mode(mode: &ResearchMode) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&mode.name));
        output.push('\n');
        output.push_str(&format!("{}\n\n", mode.description));

        output.push_str(&Self::section_header("Search"));
        output.push_str(&format!("  Max searches:  {}\n", mode.search.max_searches));
        output.push_str(&format!(
            "  Engines:       {}\n",
            join_display(&mode.search.engines)
        ));
        output.push_str(&format!(
            "  Languages:     {}\n",
            join_display(&mode.search.languages)
        ));
        output.push_str(&format!("  Focus:         {}\n", mode.search.geographic_focus));
        output.push_str(&format!("  Time range:    {}\n", mode.search.time_range));
        output.push_str(&format!(
            "  Academic: {}   Social media: {}\n",
            flag(mode.search.use_academic_sources),
            flag(mode.search.include_social_media)
        ));

        output.push_str(&Self::section_header("Reasoning"));
        output.push_str(&format!("  Model:         {}\n", mode.reasoning.model));
        output.push_str(&format!("  Temperature:   {}\n", mode.reasoning.temperature));
        output.push_str(&format!(
            "  Max steps:     {}\n",
            mode.reasoning.max_reasoning_steps
        ));
        output.push_str(&format!(
            "  Hypotheses: {}   Evidence correlation: {}\n",
            flag(mode.reasoning.hypothesis_generation),
            flag(mode.reasoning.evidence_correlation)
        ));
        output.push_str(&format!(
            "  Multi-perspective: {}   Temporal: {}\n",
            flag(mode.reasoning.multi_perspective_analysis),
            flag(mode.reasoning.temporal_reasoning)
        ));

        output.push_str(&Self::section_header("Analysis"));
        output.push_str(&format!(
            "  Network: {}   Temporal: {}   Risk: {}\n",
            flag(mode.analysis.network_analysis),
            flag(mode.analysis.temporal_analysis),
            flag(mode.analysis.risk_assessment)
        ));
        output.push_str(&format!(
            "  Patterns: {}   Predictive: {}\n",
            flag(mode.analysis.pattern_detection),
            flag(mode.analysis.predictive_modeling)
        ));
        output.push_str(&format!(
            "  Legal case: {}   Financial flows: {}\n",
            flag(mode.analysis.legal_case_construction),
            flag(mode.analysis.financial_flow_analysis)
        ));

        output.push_str(&format!(
            "\n{} {}   {} {}\n",
            "Time:".cyan().bold(),
            mode.estimated_time,
            "Cost:".cyan().bold(),
            mode.cost_estimate
        ));

        output.push_str(&format!("\n{}\n", "Ideal for:".cyan().bold()));
        for scenario in &mode.ideal_for {
            output.push_str(&format!("  * {}\n", scenario));
        }

        output
    }

    /// Format the tier comparison summary
    pub fn format_modes_summary(modes: &[ResearchMode]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Research Tier Comparison"));
        output.push('\n');

        for mode in modes {
            output.push_str(&format!("\n{}:\n", mode.name.yellow().bold()));
            output.push_str(&format!("  Description:  {}\n", mode.description));
            output.push_str(&format!("  Time:         {}\n", mode.estimated_time));
            output.push_str(&format!("  Cost:         {}\n", mode.cost_estimate));
            output.push_str(&format!("  Max searches: {}\n", mode.search.max_searches));
            output.push_str(&format!("  Model:        {}\n", mode.reasoning.model));
        }

        output
    }

    /// Format the corruption-detection pattern table
    pub fn format_patterns(patterns: &[CorruptionPattern]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Corruption Detection Patterns"));
        output.push('\n');

        for pattern in patterns {
            output.push_str(&format!(
                "\n{} [{}]\n",
                pattern.scheme.to_string().yellow().bold(),
                risk_badge(pattern.risk_level)
            ));
            output.push_str(&format!("  {}\n", pattern.description));
            output.push_str(&format!("  {} {}\n", "Threshold:".dimmed(), pattern.threshold));
        }

        output
    }

    /// Format the due-diligence checklists
    pub fn format_checklists(checklists: &[DueDiligenceChecklist]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Due Diligence Checklists"));
        output.push('\n');

        for checklist in checklists {
            output.push_str(&format!(
                "\n{}\n",
                checklist.category.to_string().yellow().bold()
            ));
            for check in &checklist.checks {
                output.push_str(&format!("  * {}\n", check));
            }
        }

        output
    }

    /// Format the risk factor weight table
    pub fn format_weights(factors: &[RiskFactor]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Risk Factor Weights"));
        output.push('\n');

        for factor in factors {
            output.push_str(&format!(
                "\n{} ({})\n",
                factor.kind.to_string().yellow().bold(),
                format!("{:.0}%", factor.weight * 100.0).cyan()
            ));
            for indicator in &factor.indicators {
                output.push_str(&format!("  * {}\n", indicator));
            }
        }

        output
    }

    /// Format a sector profile
    pub fn format_sector(key: &str, profile: &SectorProfile) -> String {
        if profile.is_empty() {
            return format!(
                "{} No sector profile for '{}'. Known sectors: {}\n",
                "Note:".yellow().bold(),
                key,
                SectorProfile::known_sectors().join(", ")
            );
        }

        let mut output = String::new();
        output.push_str(&Self::header(&format!("Sector: {key}")));
        output.push('\n');

        output.push_str(&format!("\n{}\n", "Focus areas:".cyan().bold()));
        for area in &profile.focus_areas {
            output.push_str(&format!("  * {}\n", area));
        }

        output.push_str(&format!("\n{}\n", "Risk multipliers:".cyan().bold()));
        for multiplier in &profile.risk_multipliers {
            output.push_str(&format!(
                "  * {} x{}\n",
                multiplier.indicator, multiplier.factor
            ));
        }

        output.push_str(&format!("\n{}\n", "Specialized sources:".cyan().bold()));
        for source in &profile.specialized_sources {
            output.push_str(&format!("  * {}\n", source));
        }

        output
    }

    /// Format a jurisdiction profile
    pub fn format_jurisdiction(key: &str, profile: &JurisdictionProfile) -> String {
        if profile.is_empty() {
            return format!(
                "{} No jurisdiction profile for '{}'. Known jurisdictions: {}\n",
                "Note:".yellow().bold(),
                key,
                JurisdictionProfile::known_jurisdictions().join(", ")
            );
        }

        let mut output = String::new();
        output.push_str(&Self::header(&format!("Jurisdiction: {key}")));
        output.push('\n');

        output.push_str(&format!("\n{}\n", "Data sources:".cyan().bold()));
        for source in &profile.data_sources {
            output.push_str(&format!("  * {}\n", source));
        }

        output.push_str(&format!("\n{}\n", "Legal frameworks:".cyan().bold()));
        for framework in &profile.legal_frameworks {
            output.push_str(&format!("  * {}\n", framework));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Search languages:".cyan().bold(),
            join_display(&profile.search_languages)
        ));

        output.push_str(&format!(
            "{} {}\n",
            "Regulatory bodies:".cyan().bold(),
            profile.regulatory_bodies.join(", ")
        ));

        output
    }

    /// Format a resolved investigation plan with its warnings
    pub fn format_plan(plan: &InvestigationPlan, issues: &[ConfigIssue]) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Investigation Plan"));
        output.push('\n');

        for issue in issues {
            let label = match issue.severity {
                Severity::Error => "error:".red().bold(),
                Severity::Warning => "warning:".yellow().bold(),
            };
            output.push_str(&format!("{} {}\n", label, issue.message));
        }
        if !issues.is_empty() {
            output.push('\n');
        }

        output.push_str(&format!(
            "{} {} ({})\n",
            "Tier:".cyan().bold(),
            plan.mode.tier,
            plan.mode.estimated_time
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Languages:".cyan().bold(),
            join_display(&plan.effective_languages())
        ));

        let sources = plan.data_sources();
        if !sources.is_empty() {
            output.push_str(&format!("{}\n", "Data sources:".cyan().bold()));
            for source in &sources {
                output.push_str(&format!("  * {}\n", source));
            }
        }

        output.push_str(&format!("{}\n", "Risk weights:".cyan().bold()));
        for factor in &plan.risk_weights {
            output.push_str(&format!(
                "  * {} {:.0}%\n",
                factor.kind,
                factor.weight * 100.0
            ));
        }

        if !plan.sector.risk_multipliers.is_empty() {
            output.push_str(&format!("{}\n", "Sector multipliers:".cyan().bold()));
            for multiplier in &plan.sector.risk_multipliers {
                output.push_str(&format!(
                    "  * {} x{}\n",
                    multiplier.indicator, multiplier.factor
                ));
            }
        }

        output
    }

    /// Format any record as JSON
    pub fn format_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}

fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn flag(enabled: bool) -> String {
    if enabled {
        "yes".green().to_string()
    } else {
        "no".dimmed().to_string()
    }
}

fn risk_badge(level: RiskLevel) -> String {
    match level {
        RiskLevel::Low => level.to_string().green().to_string(),
        RiskLevel::Medium => level.to_string().yellow().to_string(),
        RiskLevel::High => level.to_string().red().bold().to_string(),
    }
}
