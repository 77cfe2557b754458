//! usa-components demo - Main Entry Point
//!
//! Renders a sample page footer to stdout.

use anyhow::Result;
use usa_components::{Identifier, Link, SlotMap, SlotName, SlotNode};

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Rendering sample identifier page...");

    let link = |href: &str| SlotNode::new("a").attr("href", href);
    let slots = SlotMap::new()
        .with(SlotName::Domain, SlotNode::new("p").text("example.gov"))
        .with(
            SlotName::AgencyPrimary,
            link("https://example.gov").text("Example Agency"),
        )
        .with(
            SlotName::Logo,
            link("https://example.gov").child(
                SlotNode::new("img")
                    .attr("src", "/assets/img/agency-logo.svg")
                    .attr("alt", "Example Agency logo"),
            ),
        )
        .with(
            SlotName::LinkAbout,
            link("https://example.gov/about").attr("shortname", "EA"),
        )
        .with(
            SlotName::LinkAccessibility,
            link("https://example.gov/accessibility"),
        )
        .with(SlotName::LinkFoia, link("https://example.gov/foia"))
        .with(SlotName::LinkFear, link("https://example.gov/no-fear"))
        .with(SlotName::LinkOig, link("https://example.gov/oig"))
        .with(
            SlotName::LinkPerformance,
            link("https://example.gov/performance"),
        )
        .with(SlotName::LinkPrivacy, link("https://example.gov/privacy"));

    let footer = Identifier::new().taxpayer(true).render(&slots)?;
    let nav_link = Link::new("https://example.gov").child("Example Agency").render();

    println!("<style>\n{}</style>", Link::stylesheet());
    println!("{nav_link}");
    println!("{footer}");

    Ok(())
}
