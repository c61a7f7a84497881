use std::collections::HashMap;

use crate::models::{EngagedPost, Snapshot};

pub const DEFAULT_POST_LIMIT: usize = 5;

/// Highest-engagement posts across the window. Posts are identified by
/// `url`; duplicates keep the copy with more likes, and posts without a
/// url are excluded from ranking.
pub fn top_posts(snapshots: &[Snapshot], limit: usize) -> Vec<EngagedPost> {
    let mut by_url: HashMap<String, EngagedPost> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for snapshot in snapshots {
        for post in &snapshot.high_engagement {
            let Some(url) = post.url.as_deref().filter(|u| !u.is_empty()) else {
                continue;
            };
            match by_url.get(url) {
                Some(existing) if existing.likes >= post.likes => {}
                Some(_) => {
                    by_url.insert(url.to_string(), post.clone());
                }
                None => {
                    order.push(url.to_string());
                    by_url.insert(url.to_string(), post.clone());
                }
            }
        }
    }

    let mut ranked: Vec<EngagedPost> = order
        .into_iter()
        .filter_map(|url| by_url.remove(&url))
        .collect();
    ranked.sort_by(|a, b| b.likes.cmp(&a.likes));
    ranked.truncate(limit);
    ranked
}
