//! Fuzzy search over the site's hardcoded page index.
//!
//! Subsequence matching with bonuses for match starts, word boundaries and
//! consecutive runs. Small enough to score the whole index on every
//! keystroke.

/// One entry in the static page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub title: &'static str,
    pub path: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit {
    pub page: &'static Page,
    pub score: i32,
}

/// Ranked hits for `query`, best first. A blank query matches nothing.
pub fn search(query: &str) -> Vec<SearchHit> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }
    let mut hits: Vec<SearchHit> = PAGE_INDEX
        .iter()
        .filter_map(|page| {
            let best = std::iter::once(page.title)
                .chain(page.keywords.iter().copied())
                .filter_map(|text| fuzzy_score(query, text))
                .max()?;
            Some(SearchHit { page, score: best })
        })
        .collect();
    hits.sort_by(|a, b| b.score.cmp(&a.score).then(a.page.path.cmp(b.page.path)));
    hits
}

/// Score `needle` against `haystack`; `None` when it is not a subsequence.
/// Case-insensitive over ASCII, which covers the index contents.
pub fn fuzzy_score(needle: &str, haystack: &str) -> Option<i32> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    let haystack: Vec<char> = haystack.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    let mut score = 0i32;
    let mut ni = 0usize;
    let mut previous_matched = false;
    for (hi, &hc) in haystack.iter().enumerate() {
        if ni < needle.len() && hc == needle[ni] {
            score += MATCH_SCORE;
            if previous_matched {
                score += CONSECUTIVE_BONUS;
            }
            if hi == 0 {
                score += START_BONUS;
            } else if !haystack[hi - 1].is_alphanumeric() {
                score += WORD_BOUNDARY_BONUS;
            }
            previous_matched = true;
            ni += 1;
        } else {
            if ni > 0 && ni < needle.len() {
                score -= GAP_PENALTY;
            }
            previous_matched = false;
        }
    }
    if ni == needle.len() {
        Some(score)
    } else {
        None
    }
}

const MATCH_SCORE: i32 = 10;
const CONSECUTIVE_BONUS: i32 = 5;
const START_BONUS: i32 = 8;
const WORD_BOUNDARY_BONUS: i32 = 4;
const GAP_PENALTY: i32 = 1;

/// The site's navigable pages. Mirrors the routing table; updated by hand
/// when pages are added.
pub static PAGE_INDEX: &[Page] = &[
    Page {
        title: "Home",
        path: "/",
        keywords: &["fase", "federation", "start"],
    },
    Page {
        title: "About FASE",
        path: "/about",
        keywords: &["mission", "who we are", "federation"],
    },
    Page {
        title: "Membership",
        path: "/membership",
        keywords: &["join", "fees", "benefits"],
    },
    Page {
        title: "Join as an MGA",
        path: "/join/mga",
        keywords: &["mga", "managing general agent", "register"],
    },
    Page {
        title: "Join as a carrier",
        path: "/join/carrier",
        keywords: &["carrier", "insurer", "capacity", "register"],
    },
    Page {
        title: "Join as a service provider",
        path: "/join/provider",
        keywords: &["service provider", "supplier", "register"],
    },
    Page {
        title: "Events",
        path: "/events",
        keywords: &["conference", "calendar", "webinar"],
    },
    Page {
        title: "News",
        path: "/news",
        keywords: &["press", "announcements", "updates"],
    },
    Page {
        title: "Board and governance",
        path: "/about/board",
        keywords: &["board", "governance", "directors"],
    },
    Page {
        title: "Code of conduct",
        path: "/code-of-conduct",
        keywords: &["code", "conduct", "standards"],
    },
    Page {
        title: "Privacy policy",
        path: "/privacy",
        keywords: &["privacy", "gdpr", "data protection"],
    },
    Page {
        title: "Contact",
        path: "/contact",
        keywords: &["contact", "email", "address"],
    },
    Page {
        title: "Member login",
        path: "/login",
        keywords: &["login", "sign in", "account", "password reset"],
    },
];
