//! Inspect blog entries in the target store.

use anyhow::Result;

use crate::config::StrapiConfig;
use crate::output::{ExitCode, JsonError, JsonOutput, OutputContext};
use crate::storage::MigrationStore;
use crate::strapi::{Blog, StrapiClient};

pub struct CheckOptions {
    pub id: Option<u64>,
    pub slug: Option<String>,
    pub count: bool,
    pub export: bool,
    pub json: bool,
}

pub fn run(options: CheckOptions, quiet: bool) -> Result<()> {
    let ctx = OutputContext::new(quiet, options.json);
    let client = StrapiClient::new(&StrapiConfig::from_env());

    // Detail views take precedence over the listing, like the original
    // inspection script.
    if options.id.is_some() || options.slug.is_some() {
        let blog = match options.id {
            Some(id) => client.get_blog(id)?,
            None => client.find_by_slug(options.slug.as_deref().unwrap_or(""))?,
        };

        return match blog {
            Some(blog) => {
                if options.json {
                    let output = JsonOutput::success(&blog, "check");
                    println!("{}", output.to_json_string()?);
                } else {
                    print_detail(&ctx, &blog);
                }
                Ok(())
            }
            None => {
                let wanted = options
                    .slug
                    .unwrap_or_else(|| options.id.map(|id| id.to_string()).unwrap_or_default());
                if options.json {
                    let error = JsonError::entry_not_found(&wanted, "check");
                    println!("{}", error.to_json_string()?);
                    std::process::exit(error.exit_code().code());
                }
                let _ = ctx.print_data("Blog not found");
                std::process::exit(ExitCode::NotFound.code());
            }
        };
    }

    let blogs = client.list_blogs()?;

    if options.count {
        if options.json {
            let output =
                JsonOutput::success(serde_json::json!({ "count": blogs.len() }), "check");
            println!("{}", output.to_json_string()?);
        } else {
            let _ = ctx.print_data(format!("Total blogs: {}", blogs.len()));
        }
        return Ok(());
    }

    if options.json {
        let output = JsonOutput::success(
            serde_json::json!({
                "count": blogs.len(),
                "blogs": &blogs,
            }),
            "check",
        );
        println!("{}", output.to_json_string()?);
    } else {
        print_listing(&ctx, &blogs);
    }

    if options.export {
        let store = MigrationStore::from_env();
        let path = store.save_export(&blogs)?;
        let _ = ctx.print_success(format!("\n✓ Exported to: {}", path.display()));
    }

    Ok(())
}

fn print_detail(ctx: &OutputContext, blog: &Blog) {
    let attributes = &blog.attributes;
    let rule = "─".repeat(60);

    let _ = ctx.print_data("Blog Details:");
    let _ = ctx.print_data(&rule);
    let _ = ctx.print_data(format!("ID: {}", blog.id));
    let _ = ctx.print_data(format!("Name: {}", attributes.name.as_deref().unwrap_or("N/A")));
    let _ = ctx.print_data(format!("Slug: {}", attributes.slug.as_deref().unwrap_or("N/A")));
    let _ = ctx.print_data(format!(
        "Status: {}",
        attributes.status.as_deref().unwrap_or("N/A")
    ));
    let _ = ctx.print_data(format!(
        "Author: {}",
        attributes.author.as_deref().unwrap_or("N/A")
    ));
    let _ = ctx.print_data(format!(
        "Published: {}",
        attributes.published_date.as_deref().unwrap_or("N/A")
    ));
    let tags = attributes
        .tags
        .as_ref()
        .map(|tags| tags.to_string())
        .unwrap_or_else(|| "N/A".to_string());
    let _ = ctx.print_data(format!("Tags: {}", tags));

    let _ = ctx.print_data("\nBlog Text Preview:");
    let _ = ctx.print_data(&rule);
    let body = attributes.blog_text.as_deref().unwrap_or("No content");
    let _ = ctx.print_data(format!("{}...", truncate(body, 300)));
    let _ = ctx.print_data(&rule);
}

fn print_listing(ctx: &OutputContext, blogs: &[Blog]) {
    if blogs.is_empty() {
        let _ = ctx.print_data("No blogs found");
        return;
    }

    let _ = ctx.print_info(format!("Found {} blogs:\n", blogs.len()));

    let rule = "─".repeat(100);
    let _ = ctx.print_data(&rule);
    let _ = ctx.print_data(format!(
        "{:<6}{:<40}{:<30}{:<12}{}",
        "ID", "Name", "Slug", "Status", "Published"
    ));
    let _ = ctx.print_data(&rule);

    for blog in blogs {
        let attributes = &blog.attributes;
        let _ = ctx.print_data(format!(
            "{:<6}{:<40}{:<30}{:<12}{}",
            blog.id,
            truncate(attributes.name.as_deref().unwrap_or(""), 37),
            truncate(attributes.slug.as_deref().unwrap_or(""), 27),
            attributes.status.as_deref().unwrap_or(""),
            attributes.published_date.as_deref().unwrap_or("N/A"),
        ));
    }

    let _ = ctx.print_data(&rule);
    let _ = ctx.print_data(format!("\nTotal: {} blogs", blogs.len()));
}

/// Truncate on a character boundary; multi-byte text must not split.
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        text.chars().take(max_chars).collect()
    }
}
