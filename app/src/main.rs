use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use memoir_core::{PageContent, Section, TYPE_DELAY_MS};

mod input;
use input::parse_section;

#[derive(Parser, Debug)]
#[command(name = "memoir")]
struct Args {
    /// Delay between typed quote characters, in milliseconds.
    #[arg(long, default_value_t = TYPE_DELAY_MS)]
    type_delay_ms: u64,

    /// Scroll to a section after the first layout
    /// (timeline, quote, map, charts).
    #[arg(long, value_parser = parse_section)]
    section: Option<Section>,

    /// Replace the typed quote.
    #[arg(long)]
    quote: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut content = PageContent::default();
    if let Some(quote) = args.quote {
        content.quote = quote;
    }

    let meta = ui::PageMeta {
        type_delay: Duration::from_millis(args.type_delay_ms),
        start_section: args.section,
    };

    ui::launch_page(content, meta);
    Ok(())
}
