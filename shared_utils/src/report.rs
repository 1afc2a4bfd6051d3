//! Report Module
//!
//! End-of-run summary printing for batch operations.

use crate::batch::BatchResult;
use std::time::Duration;

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs >= 1 {
        format!("{}s", secs)
    } else {
        format!("{}ms", duration.as_millis())
    }
}

pub fn print_summary_report(result: &BatchResult, duration: Duration, operation_name: &str) {
    println!();
    println!("╔══════════════════════════════════════════════════╗");
    println!("║  📊 {:<45}║", format!("{} Summary Report", operation_name));
    println!("╠══════════════════════════════════════════════════╣");
    println!("║  📁 Files Processed:    {:>10}               ║", result.total);
    println!("║  ✅ Succeeded:          {:>10}               ║", result.succeeded);
    println!("║  ❌ Failed:             {:>10}               ║", result.failed);
    println!("║  ⏭️  Skipped:            {:>10}               ║", result.skipped);
    println!(
        "║  📈 Success Rate:       {:>9.1}%               ║",
        result.success_rate()
    );
    println!(
        "║  ⏱️  Total Time:         {:>10}               ║",
        format_duration(duration)
    );
    println!("╚══════════════════════════════════════════════════╝");

    if !result.errors.is_empty() {
        println!();
        println!("❌ Errors encountered:");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        for (path, error) in &result.errors {
            println!("   {} → {}", path.display(), error);
        }
    }
}
