//! Static blog content.

use crate::error::CommerceError;
use chrono::NaiveDate;
use serde::Serialize;

const WORDS_PER_MINUTE: usize = 200;

/// A blog post.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub body: &'static str,
    pub author: &'static str,
    pub published: NaiveDate,
    pub tags: &'static [&'static str],
}

impl BlogPost {
    /// Estimated reading time, at least one minute.
    pub fn reading_minutes(&self) -> usize {
        self.body.split_whitespace().count().div_ceil(WORDS_PER_MINUTE).max(1)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag.trim()))
    }
}

/// The blog's posts, newest first.
#[derive(Debug, Clone)]
pub struct Blog {
    posts: Vec<BlogPost>,
}

impl Blog {
    pub fn new(mut posts: Vec<BlogPost>) -> Self {
        posts.sort_by(|a, b| b.published.cmp(&a.published));
        Self { posts }
    }

    /// The bundled posts.
    pub fn sample() -> Self {
        Self::new(sample_posts())
    }

    pub fn posts(&self) -> &[BlogPost] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn by_slug(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Look up a post, failing with [`CommerceError::PostNotFound`].
    pub fn require(&self, slug: &str) -> Result<&BlogPost, CommerceError> {
        self.by_slug(slug)
            .ok_or_else(|| CommerceError::PostNotFound(slug.to_string()))
    }

    pub fn by_tag(&self, tag: &str) -> Vec<&BlogPost> {
        self.posts.iter().filter(|p| p.has_tag(tag)).collect()
    }

    /// The `limit` most recent posts.
    pub fn recent(&self, limit: usize) -> &[BlogPost] {
        &self.posts[..limit.min(self.posts.len())]
    }

    /// Distinct tags, in first-seen order.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = Vec::new();
        for tag in self.posts.iter().flat_map(|p| p.tags.iter().copied()) {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        tags
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn sample_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            slug: "caring-for-leather",
            title: "How to Care for Leather Goods",
            excerpt: "A little conditioner twice a year keeps boots, wallets and bags going for decades.",
            body: "Leather is skin, and like skin it dries out. Wipe off dust with a soft cloth, \
                   let wet leather dry away from radiators, and work in a thin layer of \
                   conditioner every six months. Test any product on a hidden spot first. \
                   Store bags stuffed with paper so they keep their shape, and give boots a \
                   day off between wears so the lining can breathe.",
            author: "Maya Chen",
            published: date(2024, 5, 14),
            tags: &["care", "leather"],
        },
        BlogPost {
            slug: "summer-capsule-wardrobe",
            title: "Building a Summer Capsule Wardrobe",
            excerpt: "Ten pieces, thirty outfits: linen, a good tee and one pair of shoes that go with everything.",
            body: "Start with the basics you already reach for. A heavyweight tee in black and \
                   white, a linen shirt that works open or buttoned, and canvas shoes that \
                   survive a beach day. Add one layer for cool evenings and accessories that \
                   carry color so the core pieces can stay neutral.",
            author: "Jordan Reyes",
            published: date(2024, 6, 2),
            tags: &["style", "summer"],
        },
        BlogPost {
            slug: "gift-guide-under-50",
            title: "Gift Guide: Under $50",
            excerpt: "Thoughtful gifts that don't break the bank, from candles to wallets.",
            body: "A cedar candle for the friend who just moved, a slim wallet for the one \
                   still carrying a brick, and a wool beanie for anyone facing a real winter. \
                   Every pick on this list is under fifty dollars and ships free when you \
                   bundle a few together.",
            author: "Maya Chen",
            published: date(2023, 11, 20),
            tags: &["gifts", "guides"],
        },
        BlogPost {
            slug: "choosing-trail-shoes",
            title: "Choosing Your First Trail Shoes",
            excerpt: "Lug depth, drop and fit: what actually matters when you leave the pavement.",
            body: "Trail shoes trade a little road comfort for grip and protection. Look for \
                   lugs around four millimetres for mixed terrain, a rock plate if your local \
                   trails are technical, and a roomy toe box for descents. Try them on in the \
                   afternoon when your feet are at their largest.",
            author: "Sam Okafor",
            published: date(2024, 3, 8),
            tags: &["guides", "outdoor"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posts_are_newest_first() {
        let blog = Blog::sample();
        assert!(blog.posts().windows(2).all(|w| w[0].published >= w[1].published));
        assert_eq!(blog.recent(1)[0].slug, "summer-capsule-wardrobe");
        assert_eq!(blog.recent(100).len(), blog.len());
    }

    #[test]
    fn test_lookup_by_slug() {
        let blog = Blog::sample();
        assert!(blog.by_slug("caring-for-leather").is_some());
        assert!(matches!(
            blog.require("missing"),
            Err(CommerceError::PostNotFound(slug)) if slug == "missing"
        ));
    }

    #[test]
    fn test_by_tag_is_case_insensitive() {
        let blog = Blog::sample();
        let guides: Vec<_> = blog.by_tag("Guides").iter().map(|p| p.slug).collect();
        assert_eq!(guides, ["choosing-trail-shoes", "gift-guide-under-50"]);
    }

    #[test]
    fn test_reading_time_has_a_floor() {
        let blog = Blog::sample();
        assert!(blog.posts().iter().all(|p| p.reading_minutes() == 1));
    }
}
