//! Starter catalogue shipped with every new session

use std::collections::BTreeMap;

use crate::types::{Author, Post, PostId};

fn post(id: u64, title: &str, excerpt: &str, content: &str, date: &str, category: &str) -> Post {
    Post {
        id: PostId(id),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        date: date.to_string(),
        image: None,
        category: category.to_string(),
    }
}

/// The three launch posts, newest first
pub fn seed_posts() -> Vec<Post> {
    vec![
        post(
            1,
            "5 Strategies to Grow Your Business Blog",
            "Learn the top content marketing strategies to expand your reach and authority...",
            "<p>Full blog post about strategies to grow your business blog.</p>",
            "Aug 24, 2025",
            "Marketing",
        ),
        post(
            2,
            "How to Monetize Your Blog in 2025",
            "Different revenue streams like ads, affiliate marketing, and digital products explained...",
            "<p>Detailed explanation about monetization methods in 2025.</p>",
            "Aug 20, 2025",
            "Monetization",
        ),
        post(
            3,
            "SEO Basics for Business Owners",
            "Simple SEO tips to help your business rank higher on Google and attract customers...",
            "<p>Step-by-step SEO guide for business owners.</p>",
            "Aug 15, 2025",
            "SEO",
        ),
    ]
}

pub fn default_author() -> Author {
    let mut socials = BTreeMap::new();
    socials.insert("twitter".to_string(), "https://twitter.com/".to_string());
    socials.insert("linkedin".to_string(), "https://linkedin.com/".to_string());

    Author {
        name: "John Doe".to_string(),
        bio: "Business strategist & blogger helping entrepreneurs grow online.".to_string(),
        photo: "https://via.placeholder.com/80".to_string(),
        socials,
    }
}
