//! Terminal rendering for per-version analysis and v2/v3 comparison.
//!
//! Every renderer returns a `String` so the command layer decides where it
//! goes. Empty buckets produce no section at all.

use crate::aggregator::comparison::VersionComparison;
use crate::aggregator::metrics::{bucket_stats, top_by_calls, top_by_time};
use crate::parser::schema::TraceAggregate;
use crate::utils::config::{CONFIG_REPORT_LIMIT, JSON_REPORT_LIMIT, STRING_REPORT_LIMIT};

/// Render the bucket breakdown for one version
///
/// **Public** - `label` is the version name, shown uppercased
pub fn render_version_analysis(trace: &TraceAggregate, label: &str) -> String {
    let version = label.to_uppercase();
    let buckets = trace.categorize();
    let total = trace.total_time();

    let mut out = String::new();

    if !buckets.configuration.is_empty() {
        let stats = bucket_stats(&buckets.configuration, total);
        out.push_str(&format!("⚠️  Configuration Issues ({}):\n", version));
        out.push_str(&format!(
            "   Total Config Time: {:.2}% ({} calls)\n",
            stats.percentage, stats.total_calls
        ));
        for record in top_by_time(&buckets.configuration, CONFIG_REPORT_LIMIT) {
            out.push_str(&format!(
                "   • {}: {:.2}% ({} calls)\n",
                record.name, record.percentage, record.calls
            ));
        }
    }

    if !buckets.json.is_empty() {
        let stats = bucket_stats(&buckets.json, total);
        out.push_str(&format!("\n📝 JSON Operations ({}):\n", version));
        out.push_str(&format!("   Total JSON Time: {:.2}%\n", stats.percentage));
        for record in top_by_time(&buckets.json, JSON_REPORT_LIMIT) {
            out.push_str(&format!(
                "   • {}: {:.2}% ({} calls)\n",
                record.name, record.percentage, record.calls
            ));
        }
    }

    if !buckets.string.is_empty() {
        let stats = bucket_stats(&buckets.string, total);
        out.push_str(&format!("\n🔤 String Operations ({}):\n", version));
        out.push_str(&format!("   Total String Calls: {}\n", stats.total_calls));
        for record in top_by_calls(&buckets.string, STRING_REPORT_LIMIT) {
            out.push_str(&format!(
                "   • {}: {} calls ({:.2}%)\n",
                record.name, record.calls, record.percentage
            ));
        }
    }

    out
}

/// Render the overall hottest functions for one version
pub fn render_top_functions(trace: &TraceAggregate, label: &str, limit: usize) -> String {
    let mut out = format!("\n🔥 Top {} Functions ({}):\n", limit, label.to_uppercase());

    if trace.is_empty() {
        out.push_str("   (no functions recorded)\n");
        return out;
    }

    for (i, record) in trace.top_functions(limit).iter().enumerate() {
        out.push_str(&format!(
            "   {:>2}. {}: {:.2}% ({} calls, {} units)\n",
            i + 1,
            record.name,
            record.percentage,
            record.calls,
            format_thousands(record.time)
        ));
    }

    out
}

/// Render the configuration and total-time comparison
pub fn render_comparison(comparison: &VersionComparison) -> String {
    let mut out = String::new();

    out.push_str("🔧 Configuration Performance:\n");
    out.push_str(&format!(
        "   v2: {:.2}% of total time\n",
        comparison.v2_config_percentage
    ));
    out.push_str(&format!(
        "   v3: {:.2}% of total time\n",
        comparison.v3_config_percentage
    ));

    if let Some(improvement) = comparison.config_improvement {
        if improvement > 0.0 {
            out.push_str(&format!(
                "   🎉 v3 improves configuration performance by {:.1}%\n",
                improvement
            ));
        } else {
            out.push_str(&format!(
                "   ⚠️  v3 configuration is {:.1}% slower\n",
                improvement.abs()
            ));
        }
    }

    out.push_str("\n⏱️  Total Execution Time:\n");
    out.push_str(&format!(
        "   v2: {} time units\n",
        format_thousands(comparison.v2_total_time)
    ));
    out.push_str(&format!(
        "   v3: {} time units\n",
        format_thousands(comparison.v3_total_time)
    ));

    if let Some(improvement) = comparison.total_improvement {
        if improvement > 0.0 {
            out.push_str(&format!("   🚀 v3 is {:.1}% faster overall\n", improvement));
        } else {
            out.push_str(&format!(
                "   📊 v2 is {:.1}% faster overall\n",
                improvement.abs()
            ));
        }
    }

    out
}

/// Format an integer with `,` every three digits
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
