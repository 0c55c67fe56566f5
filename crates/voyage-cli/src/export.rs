//! CSV export of the publishing calendar.
//!
//! Every value is double-quoted with inner quotes doubled, so captions and
//! offers can carry commas freely.

use voyage_core::ScheduledPost;

const HEADERS: [&str; 9] = [
    "Platform",
    "Posting Date",
    "Recommended Window",
    "Title",
    "Caption",
    "Asset Direction",
    "Call To Action",
    "Hashtags",
    "Concierge Touch",
];

pub(crate) fn posts_to_csv(posts: &[ScheduledPost]) -> String {
    let mut lines = Vec::with_capacity(posts.len() + 1);
    lines.push(HEADERS.join(","));

    for post in posts {
        let row = [
            post.platform.profile().label.to_string(),
            post.posting_date.format("%Y-%m-%d").to_string(),
            post.posting_window.clone(),
            post.title.clone(),
            post.caption.replace('\n', " "),
            post.asset_direction.clone(),
            post.call_to_action.clone(),
            post.hashtags.join(" "),
            post.concierge_touch.clone(),
        ];
        let quoted: Vec<String> = row.iter().map(|value| quote(value)).collect();
        lines.push(quoted.join(","));
    }

    lines.join("\n")
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}
