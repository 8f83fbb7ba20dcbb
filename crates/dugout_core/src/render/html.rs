use std::borrow::Cow;

use crate::labels::Labels;
use crate::models::{LineScore, TeamNames, TeamSide};

const NAME_CELL_STYLE: &str = "text-align:left;font-weight:600";
const TOTAL_CELL_STYLE: &str = "font-weight:700";

/// Escape text for use inside element content.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Inner markup of the scoreboard `<table>`: header, away row, home row.
///
/// Columns run to the furthest inning either line has reached or the current
/// inning, whichever is larger. Frames without an entry render blank.
pub fn scoreboard_table(
    score: &LineScore,
    teams: &TeamNames,
    current_inning: u32,
    labels: &Labels,
) -> String {
    let columns = score.column_count(current_inning);

    let mut html = String::from("<thead><tr>");
    html.push_str(&format!("<th>{}</th>", labels.team_header));
    for inning in 1..=columns {
        html.push_str(&format!("<th>{inning}</th>"));
    }
    html.push_str(&format!("<th>{}</th></tr></thead><tbody>", labels.runs_header));

    for side in [TeamSide::Away, TeamSide::Home] {
        html.push_str(&team_row(teams.get(side), score.innings(side), columns, score.total(side)));
    }
    html.push_str("</tbody>");
    html
}

fn team_row(name: &str, line: &[u32], columns: usize, total: u32) -> String {
    let mut row = format!("<tr><td style=\"{NAME_CELL_STYLE}\">{}</td>", escape(name));
    for idx in 0..columns {
        match line.get(idx) {
            Some(runs) => row.push_str(&format!("<td>{runs}</td>")),
            None => row.push_str("<td></td>"),
        }
    }
    row.push_str(&format!("<td style=\"{TOTAL_CELL_STYLE}\">{total}</td></tr>"));
    row
}
