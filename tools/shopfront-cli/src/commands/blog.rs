//! Blog commands.

use anyhow::Result;
use shopfront_commerce::blog::{Blog, BlogPost};

use super::{BlogArgs, BlogCommand};
use crate::context::Context;

/// Run the blog command.
pub fn run(args: BlogArgs, ctx: &Context) -> Result<()> {
    let blog = Blog::sample();
    match args.command {
        Some(BlogCommand::List { tag, limit }) => list_posts(&blog, tag.as_deref(), limit, ctx),
        None => list_posts(&blog, None, None, ctx),
        Some(BlogCommand::Show { slug }) => show_post(&blog, &slug, ctx),
    }
}

fn list_posts(blog: &Blog, tag: Option<&str>, limit: Option<usize>, ctx: &Context) -> Result<()> {
    let mut posts: Vec<&BlogPost> = match tag {
        Some(tag) => blog.by_tag(tag),
        None => blog.posts().iter().collect(),
    };
    if let Some(limit) = limit {
        posts.truncate(limit);
    }

    if ctx.output.is_json() {
        ctx.output.json(&posts);
        return Ok(());
    }

    if posts.is_empty() {
        ctx.output.info("No posts found.");
        return Ok(());
    }

    ctx.output.header("Journal");
    for post in posts {
        let date = post.published.format("%b %d, %Y").to_string();
        ctx.output.table_row(&[date.as_str(), post.slug, post.title], &[12, 26, 40]);
    }
    ctx.output.line("");
    ctx.output.info(&format!("Tags: {}", blog.tags().join(", ")));
    Ok(())
}

fn show_post(blog: &Blog, slug: &str, ctx: &Context) -> Result<()> {
    let post = blog.require(slug)?;

    if ctx.output.is_json() {
        ctx.output.json(post);
        return Ok(());
    }

    ctx.output.header(post.title);
    ctx.output.kv("by", post.author);
    ctx.output.kv("published", &post.published.format("%B %-d, %Y").to_string());
    ctx.output.kv("reading time", &format!("{} min", post.reading_minutes()));
    ctx.output.kv("tags", &post.tags.join(", "));
    ctx.output.line("");
    ctx.output.line(post.body);
    Ok(())
}
