//! Example: Laying out a tag cloud programmatically
//!
//! This example runs one layout pass over a handful of weighted tags and
//! prints where each tag landed in an 800x600 viewport.

use tagcloud::{CloudBuilder, TagInput, config::AppConfig, geometry::Size};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let tags = [
        TagInput::new("ownership", 42.0),
        TagInput::new("borrowing", 35.0),
        TagInput::new("lifetimes", 21.0),
        TagInput::new("traits", 21.0),
        TagInput::new("generics", 13.0),
        TagInput::new("macros", 8.0),
        TagInput::new("unsafe", 3.0),
        TagInput::without_weight("pending"),
    ];

    let builder = CloudBuilder::new(AppConfig::default());
    let cloud = builder.refresh(&tags, Some(Size::new(800.0, 600.0)))?;

    println!(
        "content {}x{}, scale {:.3}\n",
        cloud.content_size().width(),
        cloud.content_size().height(),
        cloud.scale()
    );

    for (tag, bounds) in cloud.tags().iter().zip(cloud.to_viewport()) {
        println!(
            "{:<10} {:>5.1}pt {:<22} at ({:>6.1}, {:>6.1}) size {:>5.1}x{:<5.1}",
            tag.label(),
            tag.font_size(),
            tag.color().to_string(),
            bounds.min_x(),
            bounds.min_y(),
            bounds.width(),
            bounds.height()
        );
    }

    for skipped in cloud.skipped() {
        println!("skipped {}: {}", skipped.label(), skipped.reason());
    }

    Ok(())
}
