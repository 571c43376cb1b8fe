//! Result exporters.
//!
//! Renders a [`SchedulingResult`] as CSV, as plain report lines, or as
//! JSON. Exporters only read the result; metrics are printed exactly as
//! computed.

use std::fmt::Write;

use crate::error::SimulationResult;
use crate::scheduler::{SchedulingMetrics, SchedulingResult};

/// Scalar metrics in export order.
fn scalar_metrics(metrics: &SchedulingMetrics) -> [(&'static str, String); 6] {
    [
        ("averageWaitingTime", metrics.average_waiting_time.to_string()),
        ("averageTurnaroundTime", metrics.average_turnaround_time.to_string()),
        ("averageResponseTime", metrics.average_response_time.to_string()),
        ("cpuUtilization", metrics.cpu_utilization.to_string()),
        ("throughput", metrics.throughput.to_string()),
        ("makespan", metrics.makespan.to_string()),
    ]
}

/// Renders the schedule and metrics as CSV.
///
/// ```text
/// Process ID,Start Time,End Time
/// 1,0,5
/// ...
///
/// Metric,Value
/// averageWaitingTime,3.3333333333333335
/// ...
/// waitingTime[1],0
/// turnaroundTime[1],5
/// ```
pub fn to_csv(result: &SchedulingResult) -> String {
    let mut out = String::from("Process ID,Start Time,End Time\n");
    for item in &result.schedule {
        let _ = writeln!(out, "{},{},{}", item.process_id, item.start_time, item.end_time);
    }

    out.push_str("\nMetric,Value\n");
    for (key, value) in scalar_metrics(&result.metrics) {
        let _ = writeln!(out, "{key},{value}");
    }
    for (id, waiting) in &result.metrics.waiting_times {
        let _ = writeln!(out, "waitingTime[{id}],{waiting}");
    }
    for (id, turnaround) in &result.metrics.turnaround_times {
        let _ = writeln!(out, "turnaroundTime[{id}],{turnaround}");
    }
    out
}

/// Renders the result as report lines, one entry per line.
pub fn to_report(result: &SchedulingResult) -> Vec<String> {
    let mut lines = vec![
        "CPU Scheduling Report".to_string(),
        format!("Algorithm: {}", result.algorithm.name()),
        "Schedule:".to_string(),
    ];
    lines.extend(result.schedule.iter().enumerate().map(|(i, item)| {
        format!(
            "#{} - Process ID: {}, Start Time: {}, End Time: {}",
            i + 1,
            item.process_id,
            item.start_time,
            item.end_time
        )
    }));

    lines.push("Metrics:".to_string());
    lines.extend(
        scalar_metrics(&result.metrics)
            .into_iter()
            .map(|(key, value)| format!("{key}: {value}")),
    );
    lines
}

/// Renders the result as pretty-printed JSON.
pub fn to_json(result: &SchedulingResult) -> SimulationResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::run_simulation;

    fn fcfs_result() -> SchedulingResult {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 8),
        ];
        run_simulation("fcfs", &processes, None).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let csv = to_csv(&fcfs_result());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Process ID,Start Time,End Time");
        assert_eq!(lines[1], "1,0,5");
        assert_eq!(lines[2], "2,5,8");
        assert_eq!(lines[3], "3,8,16");
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "Metric,Value");
        assert_eq!(lines[6], "averageWaitingTime,3.3333333333333335");
        assert!(lines.contains(&"cpuUtilization,1"));
        assert!(lines.contains(&"throughput,0.1875"));
        assert!(lines.contains(&"makespan,16"));
        assert!(lines.contains(&"waitingTime[2],4"));
        assert!(lines.contains(&"turnaroundTime[3],14"));
    }

    #[test]
    fn test_report_lines() {
        let report = to_report(&fcfs_result());
        assert_eq!(report[0], "CPU Scheduling Report");
        assert_eq!(report[1], "Algorithm: First Come First Served (FCFS)");
        assert_eq!(report[2], "Schedule:");
        assert_eq!(report[3], "#1 - Process ID: 1, Start Time: 0, End Time: 5");
        assert_eq!(report[5], "#3 - Process ID: 3, Start Time: 8, End Time: 16");
        assert_eq!(report[6], "Metrics:");
        assert!(report.contains(&"cpuUtilization: 1".to_string()));
    }

    #[test]
    fn test_json_export() {
        let json = to_json(&fcfs_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["algorithm"], "fcfs");
        assert_eq!(value["schedule"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["metrics"]["turnaroundTimes"]["3"], 14);
    }
}
