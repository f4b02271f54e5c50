use crate::blog::Blog;
use crate::stats::{AuthorBlogCount, AuthorLikeTotal, ListStats};

/// Sum of likes across the whole list. Zero for an empty list.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// The blog with the most likes, or `None` for an empty list.
/// Ties keep the earliest blog in list order.
pub fn favourite_blog(blogs: &[Blog]) -> Option<&Blog> {
    blogs.iter().fold(None, |best, blog| match best {
        Some(current) if current.likes >= blog.likes => Some(current),
        _ => Some(blog),
    })
}

/// Per-author post counts, in first-seen-author order.
pub fn blogs_by_author(blogs: &[Blog]) -> Vec<AuthorBlogCount> {
    let mut counts: Vec<AuthorBlogCount> = Vec::new();

    for blog in blogs {
        match counts.iter_mut().find(|entry| entry.author == blog.author) {
            Some(entry) => entry.blogs += 1,
            None => counts.push(AuthorBlogCount {
                author: blog.author.clone(),
                blogs: 1,
            }),
        }
    }

    counts
}

/// The author with the most posts, or `None` for an empty list.
/// Ties keep the author seen first in the list.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    blogs_by_author(blogs)
        .into_iter()
        .reduce(|best, candidate| {
            if candidate.blogs > best.blogs {
                candidate
            } else {
                best
            }
        })
}

/// Per-author accumulated likes, in first-seen-author order.
pub fn likes_by_author(blogs: &[Blog]) -> Vec<AuthorLikeTotal> {
    let mut totals: Vec<AuthorLikeTotal> = Vec::new();

    for blog in blogs {
        match totals.iter_mut().find(|entry| entry.author == blog.author) {
            Some(entry) => entry.likes += blog.likes,
            None => totals.push(AuthorLikeTotal {
                author: blog.author.clone(),
                likes: blog.likes,
            }),
        }
    }

    totals
}

/// The author with the largest accumulated like total. An empty list
/// yields `{ author: "", likes: 0 }`. A later author tying the running
/// maximum never displaces the recorded leader; only a strictly greater
/// total does.
pub fn most_likes(blogs: &[Blog]) -> AuthorLikeTotal {
    let mut best = AuthorLikeTotal {
        author: String::new(),
        likes: 0,
    };

    for total in likes_by_author(blogs) {
        if total.likes > best.likes {
            best = total;
        }
    }

    best
}

/// Composite summary over one list, consumed by the report layer.
pub fn summarize(blogs: &[Blog]) -> ListStats {
    let likes_by_author = likes_by_author(blogs);

    ListStats {
        blog_count: blogs.len(),
        author_count: likes_by_author.len(),
        total_likes: total_likes(blogs),
        favourite: favourite_blog(blogs).cloned(),
        most_blogs: most_blogs(blogs),
        most_likes: most_likes(blogs),
        likes_by_author,
    }
}
