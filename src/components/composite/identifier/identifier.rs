//! Identifier rendering
//!
//! A single render pass resolves slotted host content against the localized
//! default table and composes the footer markup. Resolution is pure: the same
//! attributes and slots always produce byte-identical output.

use tracing::debug;

use crate::components::attrs::Attributes;
use crate::components::composite::identifier::content::{Locale, LocalizedContent};
use crate::components::composite::identifier::slots::{SlotHost, SlotName, SlotNode};
use crate::error::{Error, Result};
use crate::html::{el, Element};

/// What to do when a required-link slot is absent.
///
/// A slot that is present but has no `href` is an author error under either
/// policy; the policy only governs absence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotPolicy {
    /// Fail the render with an error naming the missing slot
    #[default]
    Require,
    /// Omit the corresponding list item and render the rest
    SkipMissing,
}

/// A resolved required link, rebuilt on every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredLink {
    /// Visible link text
    pub title: String,
    /// Destination, taken verbatim from the slot's `href` attribute
    pub href: String,
}

/// The identifier component
#[derive(Debug, Clone, Default)]
pub struct Identifier {
    lang: Locale,
    taxpayer: bool,
    label: Option<String>,
    policy: SlotPolicy,
}

impl Identifier {
    /// Tag name the component registers under
    pub const TAG: &'static str = "usa-identifier";

    /// Create an identifier with default settings (English, no taxpayer text)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content language; unknown tags fall back to English
    pub fn lang(mut self, tag: &str) -> Self {
        self.lang = Locale::from_tag(tag);
        self
    }

    /// Include the taxpayer disclaimer sentence
    pub fn taxpayer(mut self, taxpayer: bool) -> Self {
        self.taxpayer = taxpayer;
        self
    }

    /// Override the outer container's ARIA label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the missing-slot policy
    pub fn policy(mut self, policy: SlotPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Build an identifier from a host attribute map.
    ///
    /// `taxpayer` is a boolean-presence attribute; its value is ignored.
    pub fn from_attrs(attrs: &Attributes) -> Self {
        let mut identifier = Identifier::new();
        if let Some(lang) = attrs.get("lang") {
            identifier = identifier.lang(lang);
        }
        if attrs.has("taxpayer") {
            identifier = identifier.taxpayer(true);
        }
        if let Some(label) = attrs.get("label") {
            identifier = identifier.label(label);
        }
        identifier
    }

    /// Render the footer block against the host's slotted content
    pub fn render(&self, slots: &dyn SlotHost) -> Result<String> {
        let bindings = Bindings::capture(slots);
        let content = LocalizedContent::for_locale(self.lang)?;

        let aria_label = self
            .label
            .clone()
            .unwrap_or_else(|| content.aria_labels.main.clone());

        let mut root = el("section").class("usa-identifier").attr("aria-label", aria_label);
        if let Some(masthead) = self.masthead_section(&bindings, content) {
            root = root.child(masthead);
        }
        root = root.child(self.links_section(&bindings, content)?);
        root = root.child(self.usagov_section(&bindings, content));

        Ok(root.to_html())
    }

    /// The masthead, rendered only when the host populated any masthead slot
    fn masthead_section(&self, bindings: &Bindings, content: &LocalizedContent) -> Option<Element> {
        if bindings.domain.is_none() && bindings.disclaimer.is_none() && bindings.logos.is_empty() {
            return None;
        }

        let mut container = el("div").class("usa-identifier__container");
        if let Some(logos) = self.masthead_logos(bindings) {
            container = container.child(logos);
        }
        container = container.child(self.masthead_identity(bindings, content));

        Some(
            el("section")
                .class("usa-identifier__section")
                .class("usa-identifier__section--masthead")
                .attr("aria-label", &content.aria_labels.masthead)
                .child(container),
        )
    }

    fn masthead_logos(&self, bindings: &Bindings) -> Option<Element> {
        if bindings.logos.is_empty() {
            return None;
        }
        let mut wrapper = el("div").class("usa-identifier__logos");
        for logo in &bindings.logos {
            let logo = logo
                .to_element()
                .class("usa-identifier__logo")
                .map_elements(&|e| {
                    if e.tag() == "img" {
                        e.class("usa-identifier__logo-img")
                    } else {
                        e
                    }
                });
            wrapper = wrapper.child(logo);
        }
        Some(wrapper)
    }

    /// Domain line plus the agency disclaimer paragraph
    fn masthead_identity(&self, bindings: &Bindings, content: &LocalizedContent) -> Element {
        let intro = override_text(bindings.agency_intro, &content.masthead.intro);
        let conjunction =
            override_text(bindings.agency_conjunction, &content.masthead.conjunction);

        let mut paragraph = el("p")
            .class("usa-identifier__identity-disclaimer")
            .text(intro);
        if let Some(primary) = bindings.agency_primary {
            paragraph = paragraph.text(" ").child(primary.to_element());
        }
        // The conjunction joins the two agency names and is omitted entirely
        // when no secondary agency exists.
        if let Some(secondary) = bindings.agency_secondary {
            paragraph = paragraph
                .text(format!(" {conjunction} "))
                .child(secondary.to_element());
        }
        if self.taxpayer {
            let sentence = override_text(bindings.agency_taxpayer, &content.taxpayer);
            paragraph = paragraph.text(format!(". {sentence}"));
        }

        let mut identity = el("section").class("usa-identifier__identity");
        if let Some(domain) = bindings.domain {
            identity = identity.child(
                domain
                    .to_element()
                    .class("usa-identifier__identity-domain"),
            );
        }
        identity.child(paragraph)
    }

    /// The required-links navigation
    fn links_section(&self, bindings: &Bindings, content: &LocalizedContent) -> Result<Element> {
        let mut list = el("ul").class("usa-identifier__required-links-list");
        for link in self.resolve_required_links(bindings, content)? {
            list = list.child(
                el("li").class("usa-identifier__required-links-item").child(
                    el("a")
                        .class("usa-identifier__required-link")
                        .class("usa-link")
                        .attr("href", link.href)
                        .text(link.title),
                ),
            );
        }

        Ok(el("nav")
            .class("usa-identifier__section")
            .class("usa-identifier__section--required-links")
            .attr("aria-label", &content.aria_labels.links)
            .child(el("div").class("usa-identifier__container").child(list)))
    }

    /// Resolve the seven required links in their fixed order
    fn resolve_required_links(
        &self,
        bindings: &Bindings,
        content: &LocalizedContent,
    ) -> Result<Vec<RequiredLink>> {
        let mut links = Vec::with_capacity(SlotName::REQUIRED_LINKS.len());
        for slot in SlotName::REQUIRED_LINKS {
            let node = match bindings.required_link(slot) {
                Some(node) => node,
                None => match self.policy {
                    SlotPolicy::Require => return Err(Error::MissingSlot { slot }),
                    SlotPolicy::SkipMissing => {
                        debug!(slot = %slot, "required-link slot absent, skipping item");
                        continue;
                    }
                },
            };
            let href = node
                .get_attr("href")
                .ok_or(Error::MissingHref { slot })?
                .to_string();

            let default = required_link_default(slot, content);
            let mut title = override_text(Some(node), default);
            if slot == SlotName::LinkAbout {
                if let Some(shortname) = self.agency_shortname(node, bindings) {
                    title = format!("{title} {shortname}");
                }
            }
            links.push(RequiredLink { title, href });
        }
        Ok(links)
    }

    /// The agency short name appended to the about link: the about slot's
    /// `shortname` attribute, else the primary-agency slot's text.
    fn agency_shortname(&self, about: &SlotNode, bindings: &Bindings) -> Option<String> {
        if let Some(shortname) = about.get_attr("shortname") {
            return Some(shortname.to_string());
        }
        bindings
            .agency_primary
            .filter(|node| node.has_text())
            .map(|node| node.text_content().trim().to_string())
    }

    /// The USA.gov attribution section
    fn usagov_section(&self, bindings: &Bindings, content: &LocalizedContent) -> Element {
        let mut description = el("div").class("usa-identifier__usagov-description");
        match bindings.usagov {
            Some(custom) => {
                // Host-supplied attribution; make sure any anchor inside it
                // picks up the design system link class.
                description = description.child(custom.to_element().map_elements(&|e| {
                    if e.tag() == "a" {
                        e.class("usa-link")
                    } else {
                        e
                    }
                }));
            }
            None => {
                description = description
                    .text(format!("{} ", content.usagov.description))
                    .child(
                        el("a")
                            .class("usa-link")
                            .attr("href", &content.usagov.link_url)
                            .text(&content.usagov.link_label),
                    );
            }
        }

        el("section")
            .class("usa-identifier__section")
            .class("usa-identifier__section--usagov")
            .child(el("div").class("usa-identifier__container").child(description))
    }
}

/// Slot references captured once per render, borrowed from the host
struct Bindings<'a> {
    domain: Option<&'a SlotNode>,
    logos: Vec<&'a SlotNode>,
    disclaimer: Option<&'a SlotNode>,
    agency_intro: Option<&'a SlotNode>,
    agency_primary: Option<&'a SlotNode>,
    agency_secondary: Option<&'a SlotNode>,
    agency_conjunction: Option<&'a SlotNode>,
    agency_taxpayer: Option<&'a SlotNode>,
    link_about: Option<&'a SlotNode>,
    link_accessibility: Option<&'a SlotNode>,
    link_foia: Option<&'a SlotNode>,
    link_fear: Option<&'a SlotNode>,
    link_oig: Option<&'a SlotNode>,
    link_performance: Option<&'a SlotNode>,
    link_privacy: Option<&'a SlotNode>,
    usagov: Option<&'a SlotNode>,
}

impl<'a> Bindings<'a> {
    fn capture(slots: &'a dyn SlotHost) -> Self {
        Self {
            domain: slots.query(SlotName::Domain),
            logos: slots.query_all(SlotName::Logo),
            disclaimer: slots.query(SlotName::Disclaimer),
            agency_intro: slots.query(SlotName::AgencyIntro),
            agency_primary: slots.query(SlotName::AgencyPrimary),
            agency_secondary: slots.query(SlotName::AgencySecondary),
            agency_conjunction: slots.query(SlotName::AgencyConjunction),
            agency_taxpayer: slots.query(SlotName::AgencyTaxpayer),
            link_about: slots.query(SlotName::LinkAbout),
            link_accessibility: slots.query(SlotName::LinkAccessibility),
            link_foia: slots.query(SlotName::LinkFoia),
            link_fear: slots.query(SlotName::LinkFear),
            link_oig: slots.query(SlotName::LinkOig),
            link_performance: slots.query(SlotName::LinkPerformance),
            link_privacy: slots.query(SlotName::LinkPrivacy),
            usagov: slots.query(SlotName::Usagov),
        }
    }

    fn required_link(&self, slot: SlotName) -> Option<&'a SlotNode> {
        match slot {
            SlotName::LinkAbout => self.link_about,
            SlotName::LinkAccessibility => self.link_accessibility,
            SlotName::LinkFoia => self.link_foia,
            SlotName::LinkFear => self.link_fear,
            SlotName::LinkOig => self.link_oig,
            SlotName::LinkPerformance => self.link_performance,
            SlotName::LinkPrivacy => self.link_privacy,
            _ => None,
        }
    }
}

/// Slot text when present and non-empty, else the localized default
fn override_text(node: Option<&SlotNode>, default: &str) -> String {
    node.filter(|n| n.has_text())
        .map(|n| n.text_content().trim().to_string())
        .unwrap_or_else(|| default.to_string())
}

fn required_link_default(slot: SlotName, content: &LocalizedContent) -> &str {
    match slot {
        SlotName::LinkAbout => &content.required_links.about,
        SlotName::LinkAccessibility => &content.required_links.accessibility,
        SlotName::LinkFoia => &content.required_links.foia,
        SlotName::LinkFear => &content.required_links.no_fear,
        SlotName::LinkOig => &content.required_links.oig,
        SlotName::LinkPerformance => &content.required_links.performance,
        SlotName::LinkPrivacy => &content.required_links.privacy,
        _ => "",
    }
}
