use crate::model::Message;
use crate::report::StatisticsReport;
use crate::snapshot::Snapshot;
use crate::timefmt;
use anyhow::Result;

/// Render a statistics report as plain text, mirroring the layout of the
/// statistics page: users by message count, the global top-10 word line,
/// one word-ranking line per user, and the busiest-hour sentence.
pub fn render(report: &StatisticsReport) -> Result<String> {
    let mut output = String::new();

    render_message_counts(&mut output, report);
    render_top_words(&mut output, report);
    render_user_top_words(&mut output, report);
    render_busiest_hour(&mut output, report);

    Ok(output)
}

fn render_message_counts(output: &mut String, report: &StatisticsReport) {
    output.push_str("Users by number of messages\n");
    for entry in &report.message_counts {
        output.push_str(&format!("{}: {} messages\n", entry.name, entry.count));
    }
    output.push('\n');
}

fn render_top_words(output: &mut String, report: &StatisticsReport) {
    output.push_str("Most common words\n");
    let line: Vec<String> = report
        .top_words
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}:{}", i + 1, entry.word))
        .collect();
    output.push_str(&line.join("  "));
    output.push_str("\n\n");
}

fn render_user_top_words(output: &mut String, report: &StatisticsReport) {
    output.push_str("Most common words per user\n");
    for entry in &report.user_top_words {
        let line: Vec<String> = entry
            .words
            .iter()
            .enumerate()
            .map(|(i, word)| format!("({}): {}", i + 1, word.word))
            .collect();
        output.push_str(&format!("{}: {}\n", entry.name, line.join("  ")));
    }
    output.push('\n');
}

fn render_busiest_hour(output: &mut String, report: &StatisticsReport) {
    output.push_str(&format!(
        "the hour with the most posts is {}\n",
        report.busiest_hour.label()
    ));
}

/// Render a feed as timestamped lines, oldest first. Author handles are
/// resolved through the snapshot; an id with no user should not occur in a
/// validated snapshot and falls back to the raw id.
pub fn render_feed(feed: &[Message], snapshot: &Snapshot) -> Result<String> {
    let mut output = String::new();
    for message in feed {
        let author = snapshot
            .user(message.author)
            .map(|user| format!("@{}", user.username))
            .unwrap_or_else(|_| message.author.to_string());
        output.push_str(&format!(
            "[{}] {}: {}\n",
            timefmt::timestamp(&message.created_at),
            author,
            message.content
        ));
    }
    Ok(output)
}
