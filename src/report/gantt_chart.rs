// src/report/gantt_chart.rs

use crate::sim::GanttEntry;

/// First line of every persisted Gantt chart.
pub const GANTT_HEADER: &str = "=== Gantt Chart ===";

/// Render the chart file contents: the header, then one line per entry.
pub fn render_gantt_chart(entries: &[GanttEntry]) -> String {
    let mut out = String::with_capacity(GANTT_HEADER.len() + 1 + entries.len() * 56);
    out.push_str(GANTT_HEADER);
    out.push('\n');
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_has_header_and_one_line_per_entry() {
        let entries = [
            GanttEntry::new(1, 0, 500).unwrap(),
            GanttEntry::new(2, 500, 1000).unwrap(),
        ];
        assert_eq!(
            render_gantt_chart(&entries),
            "=== Gantt Chart ===\n\
             Thread 1: Start Time = 0 ms, End Time = 500 ms\n\
             Thread 2: Start Time = 500 ms, End Time = 1000 ms\n"
        );
    }

    #[test]
    fn empty_chart_is_just_the_header() {
        assert_eq!(render_gantt_chart(&[]), "=== Gantt Chart ===\n");
    }
}
